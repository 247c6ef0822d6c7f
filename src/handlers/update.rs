use crate::error::ApiError;
use crate::models::WriteItemRequest;
use crate::routes;
use crate::state::AppState;
use axum::http::StatusCode;

use super::{parse_body, require_id};

/// PUT /api-endpoint - Overwrite the content of an item
///
/// An unknown id is created rather than rejected.
#[utoipa::path(
    put,
    path = routes::ITEMS,
    request_body = WriteItemRequest,
    responses(
        (status = 204, description = "Item content updated"),
        (status = 400, description = "Invalid JSON body, empty id or item store error", body = String)
    ),
    tag = "items"
)]
pub async fn update_item(state: &AppState, body: &[u8]) -> Result<StatusCode, ApiError> {
    let req: WriteItemRequest = parse_body(body)?;
    require_id(&req.id)?;

    state
        .store
        .update_content(&req.id, &req.content)
        .await
        .map_err(|e| ApiError::backend(StatusCode::BAD_REQUEST, e))?;

    tracing::info!("Successfully updated item with id: {}", req.id);
    Ok(StatusCode::NO_CONTENT)
}
