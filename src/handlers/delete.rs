use crate::error::ApiError;
use crate::models::DeleteItemRequest;
use crate::routes;
use crate::state::AppState;
use axum::http::StatusCode;

use super::{parse_body, require_id};

/// DELETE /api-endpoint - Remove an item by id
#[utoipa::path(
    delete,
    path = routes::ITEMS,
    request_body = DeleteItemRequest,
    responses(
        (status = 204, description = "Item removed, or never existed"),
        (status = 400, description = "Invalid JSON body, empty id or item store error", body = String)
    ),
    tag = "items"
)]
pub async fn delete_item(state: &AppState, body: &[u8]) -> Result<StatusCode, ApiError> {
    let req: DeleteItemRequest = parse_body(body)?;
    require_id(&req.id)?;

    state
        .store
        .delete(&req.id)
        .await
        .map_err(|e| ApiError::backend(StatusCode::BAD_REQUEST, e))?;

    tracing::info!("Successfully deleted item with id: {}", req.id);
    Ok(StatusCode::NO_CONTENT)
}
