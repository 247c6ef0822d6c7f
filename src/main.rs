mod api_doc;
mod config;
mod dispatch;
mod error;
mod handlers;
mod models;
mod routes;
mod server;
mod state;
mod store;
#[cfg(test)]
mod test_support;

use std::sync::Arc;

use config::Config;
use state::AppState;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config);

    tracing::info!("dynamo-crud starting");
    config.log_startup();

    let store = store::from_config(&config).await?;
    let state = AppState {
        store,
        config: Arc::new(config),
    };

    server::run(state).await
}

/// JSON logs for CloudWatch inside Lambda, plain text everywhere else
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if config.is_lambda() {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .init();
    } else {
        fmt().with_env_filter(filter).init();
    }
}
