//! Verb-based request dispatch for the items endpoint
//!
//! One route accepts every method. The method name is looked up in a fixed
//! table to pick an [`Operation`]; anything not in the table is 405.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::Method,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::handlers;
use crate::models::ItemQuery;
use crate::state::AppState;

/// The closed set of operations the items endpoint supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Create,
    Update,
    Delete,
}

const DISPATCH_TABLE: [(&str, Operation); 4] = [
    ("GET", Operation::Read),
    ("POST", Operation::Create),
    ("PUT", Operation::Update),
    ("DELETE", Operation::Delete),
];

impl Operation {
    /// Look up the operation for an HTTP method
    pub fn from_method(method: &Method) -> Option<Self> {
        DISPATCH_TABLE
            .iter()
            .find(|(verb, _)| *verb == method.as_str())
            .map(|(_, operation)| *operation)
    }

    /// Comma-separated verbs for the `Allow` header of a 405
    pub fn allowed_methods() -> String {
        DISPATCH_TABLE
            .iter()
            .map(|(verb, _)| *verb)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Run the operation against the store and build the response
    ///
    /// Only `Read` looks at the query string, so only `Read` fails on one
    /// that does not parse.
    pub async fn run(
        self,
        state: &AppState,
        query: Result<ItemQuery, ApiError>,
        body: &[u8],
    ) -> Response {
        match self {
            Operation::Read => match query {
                Ok(query) => handlers::read_item(state, query).await.into_response(),
                Err(e) => e.into_response(),
            },
            Operation::Create => handlers::create_item(state, body).await.into_response(),
            Operation::Update => handlers::update_item(state, body).await.into_response(),
            Operation::Delete => handlers::delete_item(state, body).await.into_response(),
        }
    }
}

/// Handler mounted on the items route for every method
pub async fn dispatch_handler(
    State(state): State<AppState>,
    method: Method,
    query: Result<Query<ItemQuery>, QueryRejection>,
    body: Bytes,
) -> Response {
    match Operation::from_method(&method) {
        Some(operation) => {
            tracing::debug!("Dispatching {} to {:?}", method, operation);
            let query = query
                .map(|Query(query)| query)
                .map_err(|e| ApiError::BadRequest(e.body_text()));
            operation.run(&state, query, &body).await
        }
        None => ApiError::NotAllowed(method).into_response(),
    }
}
