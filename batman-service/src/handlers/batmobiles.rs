use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use service_core::error::AppError;
use service_core::validation::ValidatedJson;

use crate::dtos::{CreatedResponse, ListParams, SeedResponse};
use crate::models::{Batmobile, BATMOBILE_COLLECTION};
use crate::services::seed;
use crate::startup::AppState;

#[tracing::instrument(skip(state))]
pub async fn list_batmobiles(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Batmobile>>, AppError> {
    let Query(params) = params?;
    let batmobiles = state
        .db
        .get_records::<Batmobile>(BATMOBILE_COLLECTION, params.limit)
        .await?;
    Ok(Json(batmobiles))
}

#[tracing::instrument(skip(state, batmobile))]
pub async fn create_batmobile(
    State(state): State<AppState>,
    ValidatedJson(batmobile): ValidatedJson<Batmobile>,
) -> Result<Json<CreatedResponse>, AppError> {
    let id = state
        .db
        .create_document(BATMOBILE_COLLECTION, &batmobile)
        .await?;

    tracing::info!(id = %id, name = %batmobile.name, "Batmobile created");

    Ok(Json(CreatedResponse { ok: true, id }))
}

/// Re-inserts the fixed dataset on every call; failed inserts are skipped.
#[tracing::instrument(skip(state))]
pub async fn seed_batmobiles(State(state): State<AppState>) -> Json<SeedResponse> {
    let outcome = state
        .db
        .seed(BATMOBILE_COLLECTION, &seed::batmobiles())
        .await;

    Json(SeedResponse {
        ok: true,
        inserted: outcome.inserted,
    })
}
