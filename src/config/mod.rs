//! Service configuration, resolved once at startup and immutable after.

use crate::error::AppError;
use std::env;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017/TravelMemory-Mern";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP listen port (`PORT`).
    pub port: u16,
    /// MongoDB connection string (`MONGO_URI`).
    pub mongo_uri: String,
}

impl AppConfig {
    /// Resolve configuration with precedence: environment variable, then
    /// literal default. Misconfiguration is rejected here rather than
    /// silently falling back.
    pub fn load() -> Result<Self, AppError> {
        Self::resolve(|key| env::var(key).ok())
    }

    fn resolve(get: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::ConfigError(anyhow::anyhow!(
                    "PORT must be a number between 0 and 65535, got '{}'",
                    raw
                ))
            })?,
            None => DEFAULT_PORT,
        };

        let mongo_uri = get("MONGO_URI").unwrap_or_else(|| DEFAULT_MONGO_URI.to_string());
        if !mongo_uri.starts_with("mongodb://") && !mongo_uri.starts_with("mongodb+srv://") {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "MONGO_URI must use the mongodb:// or mongodb+srv:// scheme, got '{}'",
                mongo_uri
            )));
        }

        Ok(AppConfig { port, mongo_uri })
    }
}
