use serde::{Deserialize, Serialize};

/// A single stored record, keyed by `id`
///
/// `content` defaults to an empty string when the stored attribute is missing.
/// The default value (both fields empty) is what a read of an unknown id returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    pub id: String,
    #[serde(default)]
    pub content: String,
}

/// Request body for create (POST) and update (PUT)
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct WriteItemRequest {
    pub id: String,
    pub content: String,
}

impl From<WriteItemRequest> for Item {
    fn from(req: WriteItemRequest) -> Self {
        Item {
            id: req.id,
            content: req.content,
        }
    }
}

/// Request body for DELETE; any other fields are ignored
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct DeleteItemRequest {
    pub id: String,
}

/// Query parameters for the read (GET) operation
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemQuery {
    /// Partition key of the item to read
    pub id: Option<String>,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}
