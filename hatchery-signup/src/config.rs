/// Configuration for the signup provisioning service
///
/// Loaded from environment variables, with `.env` support for development.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: PostgreSQL connection string (required)
/// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 10)
/// - `AUTH_PROVIDER_CONNECTION_URI`: External auth provider core URI (required)
/// - `AUTH_PROVIDER_API_KEY`: API key for the auth provider (optional)
/// - `APP_NAME`: Application name announced to the provider (default: Hatchery)
/// - `API_DOMAIN`: Public API domain (default: http://localhost:8080)
/// - `WEBSITE_DOMAIN`: Public website domain (default: http://localhost:3000)
///
/// # Example
///
/// ```no_run
/// use hatchery_signup::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Provider at {}", config.auth_provider.connection_uri);
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use std::env;

/// Complete service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database configuration
    pub database: DatabaseConfig,

    /// External auth provider connection info
    pub auth_provider: AuthProviderConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,
}

/// Connection info for the external identity provider
///
/// The provider handles credential verification and session issuance; this
/// service only needs to know where it lives so the post-signup hook can be
/// registered with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthProviderConfig {
    /// Provider core connection URI
    pub connection_uri: String,

    /// API key for the provider core, if it requires one
    pub api_key: Option<String>,

    /// Application name announced to the provider
    pub app_name: String,

    /// Public API domain
    pub api_domain: String,

    /// Public website domain
    pub website_domain: String,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a numeric
    /// variable fails to parse.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()?;

        let connection_uri = env::var("AUTH_PROVIDER_CONNECTION_URI").map_err(|_| {
            anyhow::anyhow!("AUTH_PROVIDER_CONNECTION_URI environment variable is required")
        })?;

        let api_key = env::var("AUTH_PROVIDER_API_KEY").ok();

        let app_name = env::var("APP_NAME").unwrap_or_else(|_| "Hatchery".to_string());
        let api_domain =
            env::var("API_DOMAIN").unwrap_or_else(|_| "http://localhost:8080".to_string());
        let website_domain =
            env::var("WEBSITE_DOMAIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

        Ok(Self {
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
            auth_provider: AuthProviderConfig {
                connection_uri,
                api_key,
                app_name,
                api_domain,
                website_domain,
            },
        })
    }

    /// Builds the connection pool configuration for the data layer
    pub fn pool_config(&self) -> hatchery_shared::db::pool::DatabaseConfig {
        hatchery_shared::db::pool::DatabaseConfig {
            url: self.database.url.clone(),
            max_connections: self.database.max_connections,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_config_carries_url_and_size() {
        let config = Config {
            database: DatabaseConfig {
                url: "postgresql://localhost/test".to_string(),
                max_connections: 5,
            },
            auth_provider: AuthProviderConfig {
                connection_uri: "http://localhost:3567".to_string(),
                api_key: None,
                app_name: "Hatchery".to_string(),
                api_domain: "http://localhost:8080".to_string(),
                website_domain: "http://localhost:3000".to_string(),
            },
        };

        let pool_config = config.pool_config();
        assert_eq!(pool_config.url, "postgresql://localhost/test");
        assert_eq!(pool_config.max_connections, 5);
    }
}
