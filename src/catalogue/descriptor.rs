//! Feature descriptors: a query template bound to a candidate domain.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainSpec, DomainValue};
use crate::error::{ProbeError, Result};

/// Placeholder substituted with each candidate value.
pub const VALUE_PLACEHOLDER: &str = "{value}";

/// How matched values are summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReductionMode {
    /// Ordered domain; matches are reported as `first to last`.
    Range,
    /// Unordered domain; every match is listed.
    Enumeration,
}

impl std::fmt::Display for ReductionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Range => f.write_str("range"),
            Self::Enumeration => f.write_str("enumeration"),
        }
    }
}

/// An immutable probe definition.
///
/// Built once at startup; construction validates the template and the
/// domain so nothing inside a probe cycle can fail.
#[derive(Debug, Clone)]
pub struct FeatureDescriptor {
    label: String,
    link: Option<String>,
    template: String,
    prefix: String,
    suffix: String,
    mode: ReductionMode,
    domain: Vec<DomainValue>,
}

impl FeatureDescriptor {
    /// Create a descriptor labelled with its own template.
    ///
    /// Fails if the template does not contain exactly one
    /// [`VALUE_PLACEHOLDER`], if the domain is empty or repeats a value, or
    /// if a [`ReductionMode::Range`] domain is not strictly ascending.
    pub fn new(
        template: impl Into<String>,
        mode: ReductionMode,
        domain: Vec<DomainValue>,
    ) -> Result<Self> {
        let template = template.into();
        let (prefix, suffix) = split_template(&template)?;
        validate_domain(&template, mode, &domain)?;

        Ok(Self {
            label: template.clone(),
            link: None,
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            template,
            mode,
            domain,
        })
    }

    /// Create a descriptor whose domain is generated from `spec`.
    pub fn from_spec(
        template: impl Into<String>,
        mode: ReductionMode,
        spec: &DomainSpec,
    ) -> Result<Self> {
        Self::new(template, mode, spec.generate()?)
    }

    /// Replace the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Attach a reference link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn mode(&self) -> ReductionMode {
        self.mode
    }

    pub fn domain(&self) -> &[DomainValue] {
        &self.domain
    }

    /// The full query for one candidate value.
    pub fn render_query(&self, value: &DomainValue) -> String {
        format!("{}{}{}", self.prefix, value, self.suffix)
    }
}

fn split_template(template: &str) -> Result<(&str, &str)> {
    let count = template.matches(VALUE_PLACEHOLDER).count();
    if count != 1 {
        return Err(ProbeError::InvalidTemplate {
            template: template.to_string(),
            message: format!(
                "expected exactly one {} placeholder, found {}",
                VALUE_PLACEHOLDER, count
            ),
        });
    }
    template
        .split_once(VALUE_PLACEHOLDER)
        .ok_or_else(|| ProbeError::InvalidTemplate {
            template: template.to_string(),
            message: format!("missing {} placeholder", VALUE_PLACEHOLDER),
        })
}

fn validate_domain(label: &str, mode: ReductionMode, domain: &[DomainValue]) -> Result<()> {
    if domain.is_empty() {
        return Err(ProbeError::EmptyDomain {
            label: label.to_string(),
        });
    }

    // Values are probed through their rendered form, so two values that
    // render identically are the same candidate.
    let mut seen = HashSet::with_capacity(domain.len());
    for value in domain {
        let rendered = value.to_string();
        if !seen.insert(rendered.clone()) {
            return Err(ProbeError::DuplicateValue {
                label: label.to_string(),
                value: rendered,
            });
        }
    }

    if mode == ReductionMode::Range {
        if let Some(value) = domain.iter().find(|v| v.as_f64().is_none()) {
            return Err(ProbeError::UnorderedDomain {
                label: label.to_string(),
                value: value.to_string(),
            });
        }
        for pair in domain.windows(2) {
            if pair[0].numeric_cmp(&pair[1]) != Some(Ordering::Less) {
                return Err(ProbeError::UnorderedDomain {
                    label: label.to_string(),
                    value: pair[1].to_string(),
                });
            }
        }
    }

    Ok(())
}
