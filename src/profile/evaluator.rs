//! Media query evaluation against an [`EnvironmentProfile`].

use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::probe::Evaluator;

use super::query::{
    parse_integer, parse_length, parse_ratio, parse_resolution, Comparison, MediaQuery,
};
use super::{ColorGamut, DynamicRange, EnvironmentProfile};

impl EnvironmentProfile {
    /// Evaluate a single-feature media query.
    ///
    /// Unknown features and malformed values evaluate to false, as they
    /// would in a browser. Only range features accept `min-`/`max-`.
    pub fn matches(&self, query: &str) -> bool {
        let Some(parsed) = MediaQuery::parse(query) else {
            trace!("Unparsable media query {:?}", query);
            return false;
        };
        let MediaQuery {
            comparison,
            feature,
            value,
        } = parsed;

        match feature {
            "width" => parse_length(value, self.root_font_size)
                .is_some_and(|px| comparison.holds(self.width, px)),
            "height" => parse_length(value, self.root_font_size)
                .is_some_and(|px| comparison.holds(self.height, px)),
            "aspect-ratio" => match (self.aspect_ratio(), parse_ratio(value)) {
                (Some(actual), Some(expected)) => comparison.holds(actual, expected),
                _ => false,
            },
            "resolution" => {
                parse_resolution(value).is_some_and(|dppx| comparison.holds(self.resolution, dppx))
            }
            "color" => integer_matches(comparison, self.color, value),
            "color-index" => integer_matches(comparison, self.color_index, value),
            "monochrome" => integer_matches(comparison, self.monochrome, value),
            _ if comparison != Comparison::Exact => false,
            "grid" => parse_integer(value).is_some_and(|n| n == u64::from(self.grid)),
            "orientation" => value == self.orientation(),
            "color-gamut" => ColorGamut::from_keyword(value).is_some_and(|g| g <= self.color_gamut),
            "dynamic-range" => {
                DynamicRange::from_keyword(value).is_some_and(|r| r <= self.dynamic_range)
            }
            "video-dynamic-range" => {
                DynamicRange::from_keyword(value).is_some_and(|r| r <= self.video_dynamic_range)
            }
            other => self.has_keyword(other, value),
        }
    }
}

fn integer_matches(comparison: Comparison, actual: u64, value: &str) -> bool {
    parse_integer(value).is_some_and(|expected| comparison.holds(actual as f64, expected as f64))
}

/// [`Evaluator`] backed by an [`EnvironmentProfile`].
///
/// A profile loaded from a file is re-read at the start of every cycle, so
/// edits show up on the next render. A file that fails to load or carries
/// invalid dimensions keeps the previous profile in place.
#[derive(Debug, Clone)]
pub struct ProfileEvaluator {
    profile: EnvironmentProfile,
    source: Option<PathBuf>,
}

impl ProfileEvaluator {
    /// Evaluate against a fixed profile.
    pub fn new(profile: EnvironmentProfile) -> Self {
        Self {
            profile,
            source: None,
        }
    }

    /// Load a profile file and follow changes to it.
    ///
    /// Fails with a configuration error if the file is missing, malformed or
    /// has a dimension that is not a positive number.
    pub fn from_file(path: &Path) -> Result<Self> {
        let profile = EnvironmentProfile::load(path)?;
        Ok(Self {
            profile,
            source: Some(path.to_path_buf()),
        })
    }

    pub fn profile(&self) -> &EnvironmentProfile {
        &self.profile
    }

    /// The profile file being followed, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl Default for ProfileEvaluator {
    fn default() -> Self {
        Self::new(EnvironmentProfile::default())
    }
}

impl Evaluator for ProfileEvaluator {
    fn evaluate(&self, query: &str) -> bool {
        self.profile.matches(query)
    }

    fn begin_cycle(&mut self) {
        let Some(path) = &self.source else {
            return;
        };

        match EnvironmentProfile::load(path) {
            Ok(profile) => {
                if profile != self.profile {
                    debug!("Reloaded profile from {}", path.display());
                    self.profile = profile;
                }
            }
            Err(e) => warn!("Keeping previous profile: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn desktop() -> EnvironmentProfile {
        EnvironmentProfile::default()
    }

    #[test]
    fn width_compares_in_px_and_rem() {
        let profile = desktop();
        assert!(profile.matches("(min-width: 1280px)"));
        assert!(!profile.matches("(min-width: 1281px)"));
        assert!(profile.matches("(max-width: 1280px)"));
        assert!(!profile.matches("(max-width: 1279px)"));
        assert!(profile.matches("(min-width: 80rem)"));
        assert!(!profile.matches("(min-width: 81rem)"));
        assert!(profile.matches("(width: 1280px)"));
    }

    #[test]
    fn height_compares_in_px() {
        let profile = desktop();
        assert!(profile.matches("(min-height: 800px)"));
        assert!(!profile.matches("(min-height: 801px)"));
        assert!(profile.matches("(max-height: 50rem)"));
    }

    #[test]
    fn aspect_ratio_accepts_fractions() {
        let profile = desktop();
        assert!(profile.matches("(aspect-ratio: 16/10)"));
        assert!(profile.matches("(aspect-ratio: 8/5)"));
        assert!(profile.matches("(min-aspect-ratio: 3/2)"));
        assert!(!profile.matches("(min-aspect-ratio: 16/9)"));
        assert!(profile.matches("(max-aspect-ratio: 16/9)"));
        assert!(!profile.matches("(max-aspect-ratio: 4/3)"));
    }

    #[test]
    fn resolution_accepts_every_unit() {
        let profile = EnvironmentProfile {
            resolution: 2.0,
            ..desktop()
        };
        assert!(profile.matches("(min-resolution: 2x)"));
        assert!(profile.matches("(min-resolution: 1.5dppx)"));
        assert!(!profile.matches("(min-resolution: 2.01dppx)"));
        assert!(profile.matches("(max-resolution: 192dpi)"));
        assert!(!profile.matches("(max-resolution: 191dpi)"));
        assert!(profile.matches("(min-resolution: 75dpcm)"));
        assert!(!profile.matches("(min-resolution: 76dpcm)"));
    }

    #[test]
    fn discrete_numeric_features() {
        let profile = desktop();
        assert!(profile.matches("(min-color: 8)"));
        assert!(!profile.matches("(min-color: 9)"));
        assert!(profile.matches("(color: 8)"));
        assert!(profile.matches("(max-color-index: 1)"));
        assert!(!profile.matches("(min-color-index: 1)"));
        assert!(profile.matches("(monochrome: 0)"));
        assert!(profile.matches("(grid: 0)"));
        assert!(!profile.matches("(grid: 1)"));
    }

    #[test]
    fn prefixes_only_apply_to_range_features() {
        let profile = desktop();
        assert!(!profile.matches("(min-hover: hover)"));
        assert!(!profile.matches("(max-grid: 1)"));
        assert!(!profile.matches("(min-orientation: landscape)"));
    }

    #[test]
    fn orientation_is_derived() {
        assert!(desktop().matches("(orientation: landscape)"));
        let phone = EnvironmentProfile {
            width: 390.0,
            height: 844.0,
            ..desktop()
        };
        assert!(phone.matches("(orientation: portrait)"));
        assert!(!phone.matches("(orientation: landscape)"));
    }

    #[test]
    fn color_gamut_matches_up_to_profile() {
        let profile = EnvironmentProfile {
            color_gamut: ColorGamut::P3,
            ..desktop()
        };
        assert!(profile.matches("(color-gamut: srgb)"));
        assert!(profile.matches("(color-gamut: p3)"));
        assert!(!profile.matches("(color-gamut: rec2020)"));
    }

    #[test]
    fn dynamic_range_standard_always_matches() {
        let hdr = EnvironmentProfile {
            dynamic_range: DynamicRange::High,
            ..desktop()
        };
        assert!(hdr.matches("(dynamic-range: standard)"));
        assert!(hdr.matches("(dynamic-range: high)"));
        assert!(desktop().matches("(video-dynamic-range: standard)"));
        assert!(!desktop().matches("(video-dynamic-range: high)"));
    }

    #[test]
    fn keyword_features_use_profile_lists() {
        let mut profile = desktop();
        profile
            .keywords
            .insert("any-pointer".into(), vec!["coarse".into(), "fine".into()]);

        assert!(profile.matches("(any-pointer: coarse)"));
        assert!(profile.matches("(any-pointer: fine)"));
        assert!(!profile.matches("(any-pointer: none)"));
        assert!(profile.matches("(hover: hover)"));
    }

    #[test]
    fn unknown_or_malformed_queries_are_false() {
        let profile = desktop();
        assert!(!profile.matches("(device-posture: folded)"));
        assert!(!profile.matches("(min-width: wide)"));
        assert!(!profile.matches("(min-width: 100)"));
        assert!(!profile.matches("(min-color: 1.5)"));
        assert!(!profile.matches("(color-gamut: adobe)"));
        assert!(!profile.matches("min-width: 100px"));
    }

    #[test]
    fn evaluator_answers_from_profile() {
        let evaluator = ProfileEvaluator::default();
        assert!(evaluator.evaluate("(prefers-color-scheme: light)"));
        assert!(!evaluator.evaluate("(prefers-color-scheme: dark)"));
        assert!(evaluator.source().is_none());
    }

    #[test]
    fn file_profile_reloads_each_cycle() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("profile.yml");
        fs::write(&path, "keywords:\n  prefers-color-scheme: [light]\n").unwrap();

        let mut evaluator = ProfileEvaluator::from_file(&path).unwrap();
        assert!(evaluator.evaluate("(prefers-color-scheme: light)"));

        fs::write(&path, "keywords:\n  prefers-color-scheme: [dark]\n").unwrap();
        assert!(evaluator.evaluate("(prefers-color-scheme: light)"));

        evaluator.begin_cycle();
        assert!(evaluator.evaluate("(prefers-color-scheme: dark)"));
        assert!(!evaluator.evaluate("(prefers-color-scheme: light)"));
    }

    #[test]
    fn broken_profile_file_keeps_previous_profile() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("profile.yml");
        fs::write(&path, "width: 640\n").unwrap();

        let mut evaluator = ProfileEvaluator::from_file(&path).unwrap();
        fs::write(&path, "width: [oops\n").unwrap();
        evaluator.begin_cycle();

        assert_eq!(evaluator.profile().width, 640.0);
        assert!(evaluator.evaluate("(width: 640px)"));
    }

    #[test]
    fn invalid_profile_file_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("profile.yml");
        fs::write(&path, "width: 0\n").unwrap();

        let err = ProfileEvaluator::from_file(&path).unwrap_err();
        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("profile.width"));
    }

    #[test]
    fn invalid_reload_keeps_previous_profile() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("profile.yml");
        fs::write(&path, "width: 640\n").unwrap();

        let mut evaluator = ProfileEvaluator::from_file(&path).unwrap();
        fs::write(&path, "width: 0\nresolution: -1\n").unwrap();
        evaluator.begin_cycle();

        assert_eq!(evaluator.profile().width, 640.0);
        assert_eq!(evaluator.profile().resolution, 1.0);
    }
}
