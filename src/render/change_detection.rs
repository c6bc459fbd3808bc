//! Change detection for rendered output.
//!
//! This module provides the [`ChangeDetector`], which fingerprints the full
//! row set of a cycle and only hands it to the presenter when the
//! fingerprint differs from the previous one, and the [`RenderDecision`]
//! reporting what happened.

use sha2::{Digest, Sha256};

use crate::error::Result;

use super::{Presenter, RowRecord};

/// Outcome of one render attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderDecision {
    /// Whether the presenter was asked to replace its output.
    pub changed: bool,
}

/// Fingerprint of a complete row set.
///
/// The hash covers every row's label, matched summary and domain summary in
/// order. Fields are length-prefixed so that moving text between adjacent
/// fields changes the fingerprint.
pub fn fingerprint(rows: &[RowRecord]) -> String {
    let mut hasher = Sha256::new();

    hasher.update((rows.len() as u64).to_le_bytes());
    for row in rows {
        for field in [&row.label, &row.matched_summary, &row.domain_summary] {
            hasher.update((field.len() as u64).to_le_bytes());
            hasher.update(field.as_bytes());
        }
    }

    let result = hasher.finalize();
    hex::encode(&result[..])
}

/// Suppresses redundant renders.
///
/// Owns the fingerprint of the last rendered row set; nothing else writes it.
#[derive(Debug, Default)]
pub struct ChangeDetector {
    fingerprint: Option<String>,
}

impl ChangeDetector {
    /// Create a detector that has rendered nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fingerprint of the last rendered row set.
    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    /// Render `rows` if they differ from the previous cycle.
    ///
    /// Unchanged rows leave both the presenter and the stored fingerprint
    /// untouched. Changed rows replace the presenter's output in a single
    /// call; the new fingerprint is stored only once that call succeeded.
    pub fn render_cycle(
        &mut self,
        rows: Vec<RowRecord>,
        presenter: &mut dyn Presenter,
    ) -> Result<RenderDecision> {
        let current = fingerprint(&rows);
        if self.fingerprint.as_deref() == Some(current.as_str()) {
            return Ok(RenderDecision { changed: false });
        }

        presenter.replace(&rows)?;
        self.fingerprint = Some(current);
        Ok(RenderDecision { changed: true })
    }
}
