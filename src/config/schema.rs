//! Configuration schema definitions for mqprobe.
//!
//! This module contains the structs that map to the YAML configuration
//! file format.

use serde::{Deserialize, Serialize};

use crate::catalogue::ReductionMode;
use crate::domain::DomainSpec;
use crate::profile::EnvironmentProfile;

/// Root configuration structure for `.mqprobe/config.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MqprobeConfig {
    /// Global settings
    pub settings: Settings,

    /// Simulated environment answered by the profile evaluator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<EnvironmentProfile>,

    /// Custom descriptors, probed after the built-in ones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptors: Vec<CustomDescriptor>,
}

/// Global settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pause between watch cycles, in milliseconds
    #[serde(
        default = "default_interval_ms",
        skip_serializing_if = "is_default_interval_ms"
    )]
    pub interval_ms: u64,

    /// Output format: table or json
    pub output: OutputFormat,

    /// Probe the built-in media feature catalogue
    #[serde(default = "default_true")]
    pub include_builtin: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            output: OutputFormat::default(),
            include_builtin: true,
        }
    }
}

fn default_interval_ms() -> u64 {
    1000
}

fn is_default_interval_ms(v: &u64) -> bool {
    *v == default_interval_ms()
}

fn default_true() -> bool {
    true
}

/// How rendered rows are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawn table
    #[default]
    Table,
    /// One JSON document per render
    Json,
}

/// A descriptor declared in the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomDescriptor {
    /// Display label (defaults to the template)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Query template containing `{value}`
    pub template: String,

    /// How matches are summarized
    pub mode: ReductionMode,

    /// Reference link (defaults to the MDN page of the feature)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Candidate values
    pub domain: DomainSpec,
}
