//! Range checks on loaded config.

use crate::config::types::AppConfig;
use crate::error::ConfigError;

pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.max_connections == 0 {
        return Err(ConfigError::Invalid {
            key: "DB_MAX_CONNECTIONS",
            value: "0".into(),
            reason: "must be at least 1",
        });
    }
    if config.body_limit_bytes == 0 {
        return Err(ConfigError::Invalid {
            key: "BODY_LIMIT_BYTES",
            value: "0".into(),
            reason: "must be at least 1",
        });
    }
    if !config.database_url.starts_with("postgres://") && !config.database_url.starts_with("postgresql://") {
        return Err(ConfigError::Invalid {
            key: "DATABASE_URL",
            value: "<redacted>".into(),
            reason: "expected a postgres:// URL",
        });
    }
    Ok(())
}
