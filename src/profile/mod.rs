//! Simulated display environments.
//!
//! An [`EnvironmentProfile`] describes a viewport and its user preferences.
//! [`ProfileEvaluator`] answers media queries against one, standing in for
//! a browser when mqprobe runs from the command line.
//!
//! # Example
//!
//! ```yaml
//! width: 390
//! height: 844
//! resolution: 3
//! keywords:
//!   pointer: [coarse]
//!   any-pointer: [coarse]
//!   hover: [none]
//!   any-hover: [none]
//!   prefers-color-scheme: [dark]
//! ```

pub mod evaluator;
pub mod query;

pub use evaluator::ProfileEvaluator;
pub use query::{Comparison, MediaQuery};

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ProbeError, Result};

/// Keyword features of the default profile: a desktop browser with a mouse.
const DEFAULT_KEYWORDS: &[(&str, &[&str])] = &[
    ("any-hover", &["hover"]),
    ("any-pointer", &["fine"]),
    ("display-mode", &["browser"]),
    ("forced-colors", &["none"]),
    ("hover", &["hover"]),
    ("inverted-colors", &["none"]),
    ("overflow-block", &["scroll"]),
    ("overflow-inline", &["scroll"]),
    ("pointer", &["fine"]),
    ("prefers-color-scheme", &["light"]),
    ("prefers-contrast", &["no-preference"]),
    ("prefers-reduced-data", &["no-preference"]),
    ("prefers-reduced-motion", &["no-preference"]),
    ("prefers-reduced-transparency", &["no-preference"]),
    ("scan", &["progressive"]),
    ("scripting", &["enabled"]),
    ("update", &["fast"]),
];

/// Color gamuts, ordered by size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorGamut {
    #[default]
    Srgb,
    P3,
    Rec2020,
}

impl ColorGamut {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "srgb" => Some(Self::Srgb),
            "p3" => Some(Self::P3),
            "rec2020" => Some(Self::Rec2020),
            _ => None,
        }
    }
}

/// Luminance ranges, ordered by size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DynamicRange {
    #[default]
    Standard,
    High,
}

impl DynamicRange {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "standard" => Some(Self::Standard),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// A simulated display environment.
///
/// Every field has a default, so a profile file only needs the values that
/// differ from a desktop browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentProfile {
    /// Viewport width in CSS pixels.
    pub width: f64,
    /// Viewport height in CSS pixels.
    pub height: f64,
    /// Root font size in CSS pixels, for `rem` and `em` lengths.
    pub root_font_size: f64,
    /// Device pixels per CSS pixel.
    pub resolution: f64,
    /// Bits per color component.
    pub color: u64,
    /// Entries in the color lookup table (0 without one).
    pub color_index: u64,
    /// Bits per pixel on a monochrome device (0 otherwise).
    pub monochrome: u64,
    /// Whether the device is grid-based.
    pub grid: bool,
    pub color_gamut: ColorGamut,
    pub dynamic_range: DynamicRange,
    pub video_dynamic_range: DynamicRange,
    /// Keyword features, overriding the defaults feature by feature.
    pub keywords: BTreeMap<String, Vec<String>>,
}

impl Default for EnvironmentProfile {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            root_font_size: 16.0,
            resolution: 1.0,
            color: 8,
            color_index: 0,
            monochrome: 0,
            grid: false,
            color_gamut: ColorGamut::default(),
            dynamic_range: DynamicRange::default(),
            video_dynamic_range: DynamicRange::default(),
            keywords: BTreeMap::new(),
        }
    }
}

impl EnvironmentProfile {
    /// Load a profile from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file doesn't exist,
    /// `ConfigParseError` if the YAML is invalid and
    /// `ConfigValidationError` if a dimension is not a positive number.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ProbeError::config_read(path, e))?;

        let profile: Self =
            serde_yaml::from_str(&content).map_err(|e| ProbeError::ConfigParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        profile.validate()?;
        Ok(profile)
    }

    /// Dimensions that are not finite positive numbers, as `(field, value)`.
    pub fn invalid_dimensions(&self) -> Vec<(&'static str, f64)> {
        [
            ("width", self.width),
            ("height", self.height),
            ("root_font_size", self.root_font_size),
            ("resolution", self.resolution),
        ]
        .into_iter()
        .filter(|(_, value)| !(value.is_finite() && *value > 0.0))
        .collect()
    }

    /// Fail if any dimension is not a finite positive number.
    pub fn validate(&self) -> Result<()> {
        let invalid = self.invalid_dimensions();
        if invalid.is_empty() {
            return Ok(());
        }

        let messages: Vec<_> = invalid
            .iter()
            .map(|(field, value)| dimension_message(field, *value))
            .collect();
        Err(ProbeError::ConfigValidationError {
            message: messages.join("; "),
        })
    }

    /// `portrait` when the viewport is at least as tall as it is wide.
    pub fn orientation(&self) -> &'static str {
        if self.height >= self.width {
            "portrait"
        } else {
            "landscape"
        }
    }

    /// Width divided by height, if the viewport has a height.
    pub fn aspect_ratio(&self) -> Option<f64> {
        (self.height > 0.0).then(|| self.width / self.height)
    }

    /// Check whether the profile lists `value` for a keyword feature.
    ///
    /// Unknown features match nothing.
    pub fn has_keyword(&self, feature: &str, value: &str) -> bool {
        if let Some(values) = self.keywords.get(feature) {
            return values.iter().any(|v| v == value);
        }

        DEFAULT_KEYWORDS
            .iter()
            .find(|(name, _)| *name == feature)
            .is_some_and(|(_, values)| values.contains(&value))
    }
}

/// Message for a dimension rejected by [`EnvironmentProfile::validate`].
pub fn dimension_message(field: &str, value: f64) -> String {
    format!("profile.{} must be a positive number, got {}", field, value)
}
