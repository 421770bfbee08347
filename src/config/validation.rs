//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, warning below deadline)
//! - Check the base URL actually parses as http(s)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ConsoleConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use url::Url;

use crate::config::schema::ConsoleConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a loaded configuration.
pub fn validate_config(config: &ConsoleConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.api.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError {
            field: "api.base_url".to_string(),
            message: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError {
            field: "api.base_url".to_string(),
            message: format!("not a valid URL: {}", e),
        }),
    }

    if config.api.request_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "api.request_timeout_secs".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if config.api.slow_warning_secs == 0 {
        errors.push(ValidationError {
            field: "api.slow_warning_secs".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    // A warning that fires at or after the transport deadline never shows.
    if config.api.slow_warning_secs >= config.api.request_timeout_secs {
        errors.push(ValidationError {
            field: "api.slow_warning_secs".to_string(),
            message: format!(
                "must be below request_timeout_secs ({})",
                config.api.request_timeout_secs
            ),
        });
    }

    if config.observability.log_level.trim().is_empty() {
        errors.push(ValidationError {
            field: "observability.log_level".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
