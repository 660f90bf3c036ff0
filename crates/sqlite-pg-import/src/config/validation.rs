//! Configuration validation.

use super::Config;
use crate::error::{ImportError, Result};

/// Validate the configuration.
pub fn validate(config: &Config) -> Result<()> {
    if config.source.database.is_empty() {
        return Err(ImportError::Config("source.database is required".into()));
    }

    if config.target.server.is_empty() {
        return Err(ImportError::Config("target.server is required".into()));
    }
    if config.target.schema.is_empty() {
        return Err(ImportError::Config("target.schema must not be empty".into()));
    }

    Ok(())
}
