//! Configuration validation rules.
//!
//! Checks that serde cannot express:
//! - the watch interval must be positive
//! - profile dimensions must be finite and positive
//! - custom descriptor labels must be unique
//! - custom domains must stay within [`MAX_DOMAIN_SIZE`] candidates
//!
//! Descriptor templates and domains are checked when the catalogue is built.

use crate::config::schema::MqprobeConfig;
use crate::domain::MAX_DOMAIN_SIZE;
use crate::error::{ProbeError, Result};
use crate::profile::dimension_message;
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &MqprobeConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.settings.interval_ms == 0 {
        errors.push(ValidationError::new(
            "zero-interval",
            "settings.interval_ms must be greater than 0".to_string(),
        ));
    }

    errors.extend(validate_profile(config));
    errors.extend(validate_descriptors(config));

    errors
}

fn validate_profile(config: &MqprobeConfig) -> Vec<ValidationError> {
    let Some(profile) = &config.profile else {
        return Vec::new();
    };

    profile
        .invalid_dimensions()
        .into_iter()
        .map(|(field, value)| {
            ValidationError::new("invalid-profile-dimension", dimension_message(field, value))
        })
        .collect()
}

fn validate_descriptors(config: &MqprobeConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for descriptor in &config.descriptors {
        let label = descriptor.label.as_deref().unwrap_or(&descriptor.template);
        if !seen.insert(label) {
            errors.push(ValidationError::new(
                "duplicate-descriptor",
                format!("Descriptor '{}' is declared more than once", label),
            ));
        }

        let count = descriptor.domain.candidate_count();
        if count > MAX_DOMAIN_SIZE {
            errors.push(ValidationError::new(
                "domain-too-large",
                format!(
                    "Descriptor '{}' declares {} candidates; at most {} are allowed",
                    label, count, MAX_DOMAIN_SIZE
                ),
            ));
        }
    }

    errors
}

/// Validate a configuration, failing on the first batch of errors.
pub fn validate(config: &MqprobeConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(ProbeError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
