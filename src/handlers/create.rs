use crate::error::ApiError;
use crate::models::{Item, WriteItemRequest};
use crate::routes;
use crate::state::AppState;
use axum::http::StatusCode;

use super::{parse_body, require_id};

/// POST /api-endpoint - Create an item, replacing any item with the same id
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = WriteItemRequest,
    responses(
        (status = 201, description = "Item stored"),
        (status = 400, description = "Invalid JSON body or empty id", body = String),
        (status = 500, description = "Item store error", body = String)
    ),
    tag = "items"
)]
pub async fn create_item(state: &AppState, body: &[u8]) -> Result<StatusCode, ApiError> {
    let item: Item = parse_body::<WriteItemRequest>(body)?.into();
    require_id(&item.id)?;

    state
        .store
        .put(&item)
        .await
        .map_err(|e| ApiError::backend(StatusCode::INTERNAL_SERVER_ERROR, e))?;

    tracing::info!("Successfully created item with id: {}", item.id);
    Ok(StatusCode::CREATED)
}
