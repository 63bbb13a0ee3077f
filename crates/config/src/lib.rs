use dotenv::dotenv;
use dotenv::from_path;
use std::env;

pub const DEFAULT_DATABASE_URL: &str = "employees.db";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// SQLite database file (or `file:` URI).
    pub database_url: String,
    /// Fallback tracing filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Config {
    /// Load configuration from a specified `.env` file path or default to the root `.env` file.
    pub fn from_env(env_path: Option<&str>) -> Result<Self, dotenv::Error> {
        if let Some(path) = env_path {
            from_path(path)?;
        } else {
            // A missing default `.env` is fine
            dotenv().ok();
        }

        Ok(Self::from_vars(|key| env::var(key).ok()))
    }

    /// Build a config from an arbitrary variable lookup, applying defaults
    /// for unset or blank values.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            database_url: var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            log_level: var_or("LOG_LEVEL", DEFAULT_LOG_LEVEL),
        }
    }
}
