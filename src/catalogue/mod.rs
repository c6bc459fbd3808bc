//! Descriptor catalogue.
//!
//! The catalogue is the fixed, ordered list of [`FeatureDescriptor`]s probed
//! every cycle. It holds the built-in media features (see [`builtin`]) plus
//! any custom descriptors declared in the config file, and is built once at
//! startup: every domain is generated and validated up front, so a broken
//! descriptor aborts startup instead of failing mid-cycle.

pub mod builtin;
pub mod descriptor;

pub use builtin::{builtin_descriptors, feature_name, reference_link};
pub use descriptor::{FeatureDescriptor, ReductionMode, VALUE_PLACEHOLDER};

use crate::config::{CustomDescriptor, MqprobeConfig};
use crate::error::Result;

/// Ordered collection of descriptors.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    descriptors: Vec<FeatureDescriptor>,
}

impl Catalogue {
    /// Create a catalogue from already-built descriptors.
    pub fn new(descriptors: Vec<FeatureDescriptor>) -> Self {
        Self { descriptors }
    }

    /// The built-in media feature catalogue.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(builtin_descriptors()?))
    }

    /// Build the catalogue described by a config file.
    ///
    /// Built-in descriptors come first (unless disabled), followed by custom
    /// descriptors in the order they were declared.
    pub fn from_config(config: &MqprobeConfig) -> Result<Self> {
        let mut descriptors = if config.settings.include_builtin {
            builtin_descriptors()?
        } else {
            Vec::new()
        };

        for custom in &config.descriptors {
            descriptors.push(build_custom(custom)?);
        }

        tracing::debug!(
            "Built catalogue with {} descriptors ({} custom)",
            descriptors.len(),
            config.descriptors.len()
        );
        Ok(Self::new(descriptors))
    }

    pub fn descriptors(&self) -> &[FeatureDescriptor] {
        &self.descriptors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeatureDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Number of queries evaluated per cycle.
    pub fn query_count(&self) -> usize {
        self.descriptors.iter().map(|d| d.domain().len()).sum()
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a FeatureDescriptor;
    type IntoIter = std::slice::Iter<'a, FeatureDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

fn build_custom(custom: &CustomDescriptor) -> Result<FeatureDescriptor> {
    let mut descriptor = FeatureDescriptor::from_spec(&custom.template, custom.mode, &custom.domain)?;
    if let Some(label) = &custom.label {
        descriptor = descriptor.with_label(label);
    }
    match custom.link.clone().or_else(|| reference_link(&custom.template)) {
        Some(link) => Ok(descriptor.with_link(link)),
        None => Ok(descriptor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use crate::error::ProbeError;

    #[test]
    fn builtin_catalogue_counts_queries() {
        let catalogue = Catalogue::builtin().unwrap();
        assert_eq!(catalogue.len(), 45);
        assert!(catalogue.query_count() > 40_000);
    }

    #[test]
    fn config_appends_custom_descriptors() {
        let config = parse_config(
            r#"
descriptors:
  - template: "(min-device-pixel-ratio: {value})"
    mode: range
    domain:
      kind: decimal_range
      start: 1
      end: 4
      step: 0.5
"#,
        )
        .unwrap();

        let catalogue = Catalogue::from_config(&config).unwrap();
        assert_eq!(catalogue.len(), 46);
        let custom = &catalogue.descriptors()[45];
        assert_eq!(custom.template(), "(min-device-pixel-ratio: {value})");
        assert_eq!(custom.domain().len(), 6);
    }

    #[test]
    fn config_can_disable_builtin() {
        let config = parse_config(
            r#"
settings:
  include_builtin: false
descriptors:
  - label: Light or dark
    template: "(prefers-color-scheme: {value})"
    mode: enumeration
    link: https://example.com/scheme
    domain:
      kind: keywords
      values: [light, dark]
"#,
        )
        .unwrap();

        let catalogue = Catalogue::from_config(&config).unwrap();
        assert_eq!(catalogue.len(), 1);
        let d = &catalogue.descriptors()[0];
        assert_eq!(d.label(), "Light or dark");
        assert_eq!(d.link(), Some("https://example.com/scheme"));
    }

    #[test]
    fn custom_descriptor_gets_reference_link_by_default() {
        let config = parse_config(
            r#"
settings:
  include_builtin: false
descriptors:
  - template: "(min-height: {value}em)"
    mode: range
    domain: { kind: integer_range, start: 1, end: 10 }
"#,
        )
        .unwrap();

        let catalogue = Catalogue::from_config(&config).unwrap();
        assert!(catalogue.descriptors()[0]
            .link()
            .is_some_and(|l| l.ends_with("/height")));
    }

    #[test]
    fn invalid_custom_descriptor_aborts_construction() {
        let config = parse_config(
            r#"
descriptors:
  - template: "(min-width: {value}px)"
    mode: range
    domain: { kind: integer_range, start: 10, end: 1 }
"#,
        )
        .unwrap();

        assert!(matches!(
            Catalogue::from_config(&config),
            Err(ProbeError::InvalidRange { .. })
        ));
    }

    #[test]
    fn catalogue_iterates_in_order() {
        let catalogue = Catalogue::builtin().unwrap();
        let templates: Vec<_> = (&catalogue).into_iter().take(2).map(|d| d.template()).collect();
        assert_eq!(templates, vec!["(any-hover: {value})", "(any-pointer: {value})"]);
    }
}
