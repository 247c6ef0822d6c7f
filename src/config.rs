use std::env;
use std::fmt;
use anyhow::{bail, Context, Result};

/// Which backend holds the items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    DynamoDb,
    Memory,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::DynamoDb => write!(f, "dynamodb"),
            StoreBackend::Memory => write!(f, "memory"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub table_name: String,
    pub store_backend: StoreBackend,
    pub aws_endpoint_url: Option<String>,
    pub service_port: u16,
    pub service_host: String,
    /// Set when running inside the Lambda execution environment
    pub lambda_runtime_api: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let table_name = env::var("DYNAMODB_TABLE_NAME")
            .unwrap_or_else(|_| "MyDynamoDB".to_string());
        if table_name.trim().is_empty() {
            bail!("DYNAMODB_TABLE_NAME must not be empty");
        }

        let store_backend = match env::var("ITEM_STORE")
            .unwrap_or_else(|_| "dynamodb".to_string())
            .trim()
            .to_lowercase()
            .as_str()
        {
            "dynamodb" => StoreBackend::DynamoDb,
            "memory" => StoreBackend::Memory,
            other => bail!("ITEM_STORE must be one of: dynamodb, memory, got '{}'", other),
        };

        let aws_endpoint_url = env::var("AWS_ENDPOINT_URL").ok();

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let lambda_runtime_api = env::var("AWS_LAMBDA_RUNTIME_API").ok();

        Ok(Config {
            table_name,
            store_backend,
            aws_endpoint_url,
            service_port,
            service_host,
            lambda_runtime_api,
        })
    }

    pub fn is_lambda(&self) -> bool {
        self.lambda_runtime_api.is_some()
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Item store: {}", self.store_backend);
        tracing::info!("  DynamoDB table: {}", self.table_name);
        tracing::info!("  AWS endpoint: {}",
            self.aws_endpoint_url.as_deref().unwrap_or("default (using AWS)"));
        if self.is_lambda() {
            tracing::info!("  Running as Lambda function");
        } else {
            tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env_vars() {
        unsafe {
            env::remove_var("DYNAMODB_TABLE_NAME");
            env::remove_var("ITEM_STORE");
            env::remove_var("AWS_ENDPOINT_URL");
            env::remove_var("SERVICE_PORT");
            env::remove_var("SERVICE_HOST");
            env::remove_var("AWS_LAMBDA_RUNTIME_API");
        }
    }

    #[test]
    #[serial]
    fn test_config_with_all_vars() {
        clear_env_vars();
        unsafe {
            env::set_var("DYNAMODB_TABLE_NAME", "items");
            env::set_var("ITEM_STORE", "memory");
            env::set_var("AWS_ENDPOINT_URL", "http://localhost:4566");
            env::set_var("SERVICE_PORT", "8080");
            env::set_var("SERVICE_HOST", "127.0.0.1");
            env::set_var("AWS_LAMBDA_RUNTIME_API", "127.0.0.1:9001");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.table_name, "items");
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.aws_endpoint_url, Some("http://localhost:4566".to_string()));
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");
        assert!(config.is_lambda());

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_config_with_defaults() {
        clear_env_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.table_name, "MyDynamoDB");
        assert_eq!(config.store_backend, StoreBackend::DynamoDb);
        assert_eq!(config.aws_endpoint_url, None);
        assert_eq!(config.service_port, 3000);
        assert_eq!(config.service_host, "0.0.0.0");
        assert!(!config.is_lambda());
    }

    #[test]
    #[serial]
    fn test_empty_table_name() {
        clear_env_vars();
        unsafe {
            env::set_var("DYNAMODB_TABLE_NAME", "  ");
        }

        let error = Config::from_env().unwrap_err();
        assert!(error.to_string().contains("DYNAMODB_TABLE_NAME"));

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_unknown_store_backend() {
        clear_env_vars();
        unsafe {
            env::set_var("ITEM_STORE", "redis");
        }

        let error = Config::from_env().unwrap_err();
        assert!(error.to_string().contains("ITEM_STORE"));
        assert!(error.to_string().contains("redis"));

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_invalid_port() {
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "not-a-number");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_port_out_of_range() {
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "99999");
        }

        let result = Config::from_env();
        assert!(result.is_err());

        clear_env_vars();
    }
}
