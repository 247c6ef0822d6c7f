use utoipa::OpenApi;

use crate::handlers;
use crate::models::{DeleteItemRequest, HealthResponse, Item, UnhealthyResponse, WriteItemRequest};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "dynamo-crud API",
        version = "1.0.0",
        description = "Single-item CRUD over a DynamoDB table, dispatched by HTTP method"
    ),
    paths(
        handlers::health::health_handler,
        handlers::read::read_item,
        handlers::create::create_item,
        handlers::update::update_item,
        handlers::delete::delete_item
    ),
    components(
        schemas(
            Item,
            WriteItemRequest,
            DeleteItemRequest,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "items", description = "Item operations, selected by HTTP method")
    )
)]
pub struct ApiDoc;
