//! Error types for mqprobe operations.
//!
//! This module defines [`ProbeError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Domain and descriptor construction errors are configuration errors:
//!   they surface before the first probe cycle and abort startup
//! - Use `anyhow::Error` (via `ProbeError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Core error type for mqprobe operations.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// A range whose start lies past its end.
    #[error("Invalid range: start {start} must not exceed end {end}")]
    InvalidRange { start: String, end: String },

    /// Powers are only defined for non-negative integer exponents.
    #[error("Negative exponent {exponent} is not supported")]
    NegativeExponent { exponent: i64 },

    /// Decimal ranges need a positive, finite step.
    #[error("Invalid step {step}: must be positive and finite")]
    InvalidStep { step: f64 },

    /// A generated value does not fit the value type.
    #[error("Value overflow: {message}")]
    Overflow { message: String },

    /// Query template is malformed.
    #[error("Invalid template '{template}': {message}")]
    InvalidTemplate { template: String, message: String },

    /// A descriptor was built with no candidate values.
    #[error("Descriptor '{label}' has an empty domain")]
    EmptyDomain { label: String },

    /// A descriptor domain lists the same value twice.
    #[error("Descriptor '{label}' lists value '{value}' more than once")]
    DuplicateValue { label: String, value: String },

    /// A range-mode descriptor domain is not strictly ascending.
    #[error("Descriptor '{label}' is in range mode but its domain is not ascending at '{value}'")]
    UnorderedDomain { label: String, value: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file exists but could not be read.
    #[error("Failed to read config at {path}: {source}")]
    ConfigReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProbeError {
    /// Build an [`ProbeError::InvalidRange`] from any displayable bounds.
    pub fn invalid_range(start: impl ToString, end: impl ToString) -> Self {
        Self::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Map a failure to read a configuration or profile file.
    ///
    /// A missing file becomes [`ProbeError::ConfigNotFound`]; anything else
    /// becomes [`ProbeError::ConfigReadError`].
    pub fn config_read(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::ConfigReadError {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Whether this error was raised while loading configuration or building
    /// domains and descriptors.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Other(_))
    }
}

/// Result type alias for mqprobe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_displays_bounds() {
        let err = ProbeError::invalid_range(5, 1);
        let msg = err.to_string();
        assert!(msg.contains('5'));
        assert!(msg.contains('1'));
    }

    #[test]
    fn negative_exponent_displays_exponent() {
        let err = ProbeError::NegativeExponent { exponent: -3 };
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn invalid_template_displays_template_and_message() {
        let err = ProbeError::InvalidTemplate {
            template: "(width)".into(),
            message: "missing {value} placeholder".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("(width)"));
        assert!(msg.contains("placeholder"));
    }

    #[test]
    fn empty_domain_displays_label() {
        let err = ProbeError::EmptyDomain {
            label: "(hover: {value})".into(),
        };
        assert!(err.to_string().contains("(hover: {value})"));
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = ProbeError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn domain_errors_are_configuration_errors() {
        assert!(ProbeError::InvalidStep { step: 0.0 }.is_configuration_error());
        assert!(ProbeError::NegativeExponent { exponent: -1 }.is_configuration_error());

        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert!(!ProbeError::from(io_err).is_configuration_error());
    }

    #[test]
    fn unreadable_config_is_configuration_error() {
        let path = Path::new("/etc/mqprobe.yml");
        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ProbeError::config_read(path, denied);
        assert!(matches!(err, ProbeError::ConfigReadError { .. }));
        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("/etc/mqprobe.yml"));

        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(matches!(
            ProbeError::config_read(path, missing),
            ProbeError::ConfigNotFound { .. }
        ));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ProbeError = io_err.into();
        assert!(matches!(err, ProbeError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(ProbeError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
