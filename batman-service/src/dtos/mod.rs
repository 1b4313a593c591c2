use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Query string accepted by the list endpoints. `limit=0` behaves like no
/// limit; a negative limit caps at its absolute value, as MongoDB does.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub ok: bool,
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeedResponse {
    pub ok: bool,
    pub inserted: u64,
}

/// Body of `GET /test`. Every field is human-readable status text.
#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseStatusResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}
