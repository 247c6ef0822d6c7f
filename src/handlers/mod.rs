pub mod create;
pub mod delete;
pub mod health;
pub mod read;
pub mod update;

pub use create::create_item;
pub use delete::delete_item;
pub use health::health_handler;
pub use read::read_item;
pub use update::update_item;

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Parse a JSON request body before any store call is made
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

/// Every stored item has a non-empty id
fn require_id(id: &str) -> Result<(), ApiError> {
    if id.is_empty() {
        return Err(ApiError::BadRequest("id must not be empty".to_string()));
    }
    Ok(())
}
