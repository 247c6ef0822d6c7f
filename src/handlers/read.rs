use crate::error::ApiError;
use crate::models::{Item, ItemQuery};
use crate::routes;
use crate::state::AppState;
use axum::{http::StatusCode, Json};

use super::require_id;

/// GET /api-endpoint?id= - Read an item by id
///
/// An unknown id is not an error: the response is 200 with both fields empty.
#[utoipa::path(
    get,
    path = routes::ITEMS,
    params(ItemQuery),
    responses(
        (status = 200, description = "Item found, or empty item when the id is unknown", body = Item),
        (status = 400, description = "Missing or empty id", body = String),
        (status = 500, description = "Item store error", body = String)
    ),
    tag = "items"
)]
pub async fn read_item(
    state: &AppState,
    query: ItemQuery,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let id = query
        .id
        .ok_or_else(|| ApiError::BadRequest("missing query parameter: id".to_string()))?;
    require_id(&id)?;

    let item = state
        .store
        .get(&id)
        .await
        .map_err(|e| ApiError::backend(StatusCode::INTERNAL_SERVER_ERROR, e))?;

    match item {
        Some(item) => {
            tracing::info!("Successfully read item with id: {}", id);
            Ok((StatusCode::OK, Json(item)))
        }
        None => {
            tracing::info!("Item not found with id: {}", id);
            Ok((StatusCode::OK, Json(Item::default())))
        }
    }
}
