//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// Every field has a default so the service starts against a local
/// PostgreSQL without any environment set up.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Database Connection ===
    /// PostgreSQL host (`DB_HOST`, default `localhost`).
    #[serde(default = "default_db_host")]
    pub db_host: String,

    /// PostgreSQL port (`DB_PORT`, default `5432`).
    #[serde(default = "default_db_port")]
    pub db_port: u16,

    /// Database name (`DB_NAME`, default `products`).
    #[serde(default = "default_db_name")]
    pub db_name: String,

    /// Database user (`DB_USER`, default `productuser`).
    #[serde(default = "default_db_user")]
    pub db_user: String,

    /// Database password (`DB_PASSWORD`, default `productpass`).
    #[serde(default = "default_db_password")]
    pub db_password: String,

    // === Server Configuration ===
    /// HTTP server port (`PORT`, default `8080`).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_db_name() -> String {
    "products".to_string()
}

fn default_db_user() -> String {
    "productuser".to_string()
}

fn default_db_password() -> String {
    "productpass".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.db_host.is_empty() {
            return Err("DB_HOST must not be empty".to_string());
        }

        if self.db_name.is_empty() {
            return Err("DB_NAME must not be empty".to_string());
        }

        if self.db_user.is_empty() {
            return Err("DB_USER must not be empty".to_string());
        }

        Ok(())
    }

    /// Build the PostgreSQL connection URL from the individual fields.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_user, self.db_password, self.db_host, self.db_port, self.db_name
        )
    }

    /// Connection target for logging, password omitted.
    pub fn database_target(&self) -> String {
        format!(
            "postgres://{}@{}:{}/{}",
            self.db_user, self.db_host, self.db_port, self.db_name
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_host: default_db_host(),
            db_port: default_db_port(),
            db_name: default_db_name(),
            db_user: default_db_user(),
            db_password: default_db_password(),
            port: default_port(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}
