use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use service_core::error::AppError;
use service_core::validation::ValidatedJson;

use crate::dtos::{CreatedResponse, ListParams, SeedResponse};
use crate::models::{Gadget, GADGET_COLLECTION};
use crate::services::seed;
use crate::startup::AppState;

#[tracing::instrument(skip(state))]
pub async fn list_gadgets(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Gadget>>, AppError> {
    let Query(params) = params?;
    let gadgets = state
        .db
        .get_records::<Gadget>(GADGET_COLLECTION, params.limit)
        .await?;
    Ok(Json(gadgets))
}

#[tracing::instrument(skip(state, gadget))]
pub async fn create_gadget(
    State(state): State<AppState>,
    ValidatedJson(gadget): ValidatedJson<Gadget>,
) -> Result<Json<CreatedResponse>, AppError> {
    let id = state.db.create_document(GADGET_COLLECTION, &gadget).await?;

    tracing::info!(id = %id, name = %gadget.name, "Gadget created");

    Ok(Json(CreatedResponse { ok: true, id }))
}

#[tracing::instrument(skip(state))]
pub async fn seed_gadgets(State(state): State<AppState>) -> Json<SeedResponse> {
    let outcome = state.db.seed(GADGET_COLLECTION, &seed::gadgets()).await;

    Json(SeedResponse {
        ok: true,
        inserted: outcome.inserted,
    })
}
