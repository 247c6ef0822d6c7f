use crate::config::Config;
use crate::store::ItemStore;
use std::sync::Arc;

/// Shared application state
///
/// The store handle is built once at startup and reused by every request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
    pub config: Arc<Config>,
}
