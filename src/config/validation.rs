//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (attempt ceiling ≥ 1, timeouts > 0)
//! - Check addresses and URLs actually parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use url::Url;

use crate::config::schema::AppConfig;

/// A single semantic violation found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g., "database.max_attempts").
    pub field: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError {
            field: "server.bind_address".into(),
            message: format!("not a valid socket address: {:?}", config.server.bind_address),
        });
    }

    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "server.request_timeout_secs".into(),
            message: "must be greater than zero".into(),
        });
    }

    if config.database.uri.is_empty() {
        errors.push(ValidationError {
            field: "database.uri".into(),
            message: "connection URI is required (set MONGO_URI or database.uri)".into(),
        });
    }

    if config.database.max_attempts == 0 {
        errors.push(ValidationError {
            field: "database.max_attempts".into(),
            message: "at least one connection attempt is required".into(),
        });
    }

    if config.database.connect_timeout_ms == 0 {
        errors.push(ValidationError {
            field: "database.connect_timeout_ms".into(),
            message: "must be greater than zero".into(),
        });
    }

    match Url::parse(&config.api_client.base_url) {
        Ok(url) if url.cannot_be_a_base() => errors.push(ValidationError {
            field: "api_client.base_url".into(),
            message: "must be an absolute http(s) URL".into(),
        }),
        Ok(_) => {}
        Err(e) => errors.push(ValidationError {
            field: "api_client.base_url".into(),
            message: format!("not a valid URL: {}", e),
        }),
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError {
            field: "observability.metrics_address".into(),
            message: format!(
                "not a valid socket address: {:?}",
                config.observability.metrics_address
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
