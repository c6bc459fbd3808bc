//! Mock presenter for testing.
//!
//! `MockPresenter` implements the [`Presenter`] trait and captures every row
//! set it receives for later assertion.
//!
//! # Example
//!
//! ```
//! use mqprobe::render::{MockPresenter, Presenter};
//!
//! let mut presenter = MockPresenter::new();
//! presenter.replace(&[]).unwrap();
//! assert_eq!(presenter.renders().len(), 1);
//! assert!(presenter.last_render().unwrap().is_empty());
//! ```

use crate::error::Result;

use super::{Presenter, RowRecord};

/// Presenter that records every replacement.
#[derive(Debug, Default)]
pub struct MockPresenter {
    renders: Vec<Vec<RowRecord>>,
}

impl MockPresenter {
    /// Create a presenter with no captured renders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every row set received, oldest first.
    pub fn renders(&self) -> &[Vec<RowRecord>] {
        &self.renders
    }

    /// The row set currently "displayed".
    pub fn last_render(&self) -> Option<&[RowRecord]> {
        self.renders.last().map(Vec::as_slice)
    }

    /// Labels of the currently displayed rows.
    pub fn displayed_labels(&self) -> Vec<String> {
        self.last_render()
            .map(|rows| rows.iter().map(|r| r.label.clone()).collect())
            .unwrap_or_default()
    }
}

impl Presenter for MockPresenter {
    fn replace(&mut self, rows: &[RowRecord]) -> Result<()> {
        self.renders.push(rows.to_vec());
        Ok(())
    }
}
