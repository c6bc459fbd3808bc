//! Rendering of probe results.
//!
//! This module provides:
//! - [`RowRecord`], the row handed to the presentation layer
//! - [`Presenter`] trait for presentation abstraction
//! - [`ChangeDetector`] which re-renders only when the output changed
//! - [`TerminalPresenter`] and [`JsonPresenter`] for the CLI
//! - [`MockPresenter`] for tests
//!
//! # Example
//!
//! ```
//! use mqprobe::render::{ChangeDetector, MockPresenter, RowRecord};
//!
//! let rows = vec![RowRecord {
//!     label: "(hover: {value})".into(),
//!     link: None,
//!     matched_summary: "hover".into(),
//!     domain_summary: "none, hover".into(),
//! }];
//!
//! let mut detector = ChangeDetector::new();
//! let mut presenter = MockPresenter::new();
//! assert!(detector.render_cycle(rows.clone(), &mut presenter).unwrap().changed);
//! assert!(!detector.render_cycle(rows, &mut presenter).unwrap().changed);
//! assert_eq!(presenter.renders().len(), 1);
//! ```

pub mod change_detection;
pub mod json;
pub mod mock;
pub mod table;
pub mod terminal;
pub mod theme;

pub use change_detection::{fingerprint, ChangeDetector, RenderDecision};
pub use json::JsonPresenter;
pub use mock::MockPresenter;
pub use table::Table;
pub use terminal::TerminalPresenter;
pub use theme::{should_use_colors, ProbeTheme};

use serde::{Deserialize, Serialize};

use crate::catalogue::FeatureDescriptor;
use crate::error::Result;
use crate::probe::Reduction;

/// One rendered row: a descriptor that matched at least one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRecord {
    /// Display label (the query template for built-in descriptors).
    pub label: String,
    /// Reference link, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// What matched this cycle.
    pub matched_summary: String,
    /// Everything that was probed.
    pub domain_summary: String,
}

impl RowRecord {
    /// Build the row for a descriptor from its reduction.
    pub fn new(descriptor: &FeatureDescriptor, reduction: Reduction) -> Self {
        Self {
            label: descriptor.label().to_string(),
            link: descriptor.link().map(str::to_string),
            matched_summary: reduction.matched,
            domain_summary: reduction.domain,
        }
    }
}

/// Presentation capability.
///
/// Receives the complete, ordered row set each time it changes and replaces
/// whatever it displayed before.
pub trait Presenter {
    /// Replace the displayed rows.
    fn replace(&mut self, rows: &[RowRecord]) -> Result<()>;
}
