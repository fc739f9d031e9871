use crate::{
    api::{error::ApiError, response::with_total_count},
    config::PAGINATION_SIZE,
    db::lookup,
    models::AddressInfo,
    service::record_lookup,
    state::AppState,
    validation::validate_page,
};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Response,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

// POST /address_info/ query parameters
#[derive(Deserialize)]
pub struct CreateLookupQuery {
    pub address: String,
}

// GET /address_info/ query parameters; `page` is validated by hand so that
// bad values answer 422 instead of axum's default 400
#[derive(Deserialize)]
pub struct ListLookupsQuery {
    pub page: Option<String>,
}

// Create router with all routes
pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/address_info/", get(list_address_info).post(create_address_info))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

// POST /address_info/ handler
async fn create_address_info(
    State(state): State<Arc<AppState>>,
    params: Result<Query<CreateLookupQuery>, QueryRejection>,
) -> Result<Json<AddressInfo>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::Validation(e.body_text()))?;
    info!("Processing lookup request for address: {}", params.address);

    let record = record_lookup(state.ledger.as_ref(), &state.db_pool, &params.address).await?;

    Ok(Json(AddressInfo::from(&record)))
}

// GET /address_info/ handler
async fn list_address_info(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ListLookupsQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::Validation(e.body_text()))?;
    let page = validate_page(params.page.as_deref())?;

    let records = lookup::list_recent(&state.db_pool, page, PAGINATION_SIZE).await?;
    let total_count = lookup::count_lookups(&state.db_pool).await?;

    info!("Listing lookups page {} ({} of {} records)", page, records.len(), total_count);

    Ok(with_total_count(records, total_count))
}
