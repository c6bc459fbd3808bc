//! Probe session: the state carried from one cycle to the next.

use tracing::debug;

use crate::catalogue::Catalogue;
use crate::error::Result;
use crate::probe::{probe, Evaluator};
use crate::render::{ChangeDetector, Presenter, RenderDecision, RowRecord};

/// Result of one complete cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleOutcome {
    /// Number of descriptors that matched at least one value.
    pub rows: usize,
    /// Whether the output was re-rendered.
    pub decision: RenderDecision,
}

/// Catalogue with generated domains plus the change detector.
///
/// Domains are generated once when the catalogue is built and reused every
/// cycle. Each session is independent; nothing is shared between sessions.
#[derive(Debug)]
pub struct ProbeSession {
    catalogue: Catalogue,
    detector: ChangeDetector,
}

impl ProbeSession {
    /// Create a session that has rendered nothing yet.
    pub fn new(catalogue: Catalogue) -> Self {
        Self {
            catalogue,
            detector: ChangeDetector::new(),
        }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Probe every descriptor in catalogue order and reduce the matches.
    ///
    /// Descriptors without any match produce no row.
    pub fn collect_rows(&self, evaluator: &dyn Evaluator) -> Vec<RowRecord> {
        self.catalogue
            .iter()
            .filter_map(|descriptor| {
                let result = probe(descriptor, evaluator);
                result
                    .reduce()
                    .map(|reduction| RowRecord::new(descriptor, reduction))
            })
            .collect()
    }

    /// Run one full cycle: refresh the evaluator, probe, reduce, and render
    /// if anything changed.
    pub fn run_cycle(
        &mut self,
        evaluator: &mut dyn Evaluator,
        presenter: &mut dyn Presenter,
    ) -> Result<CycleOutcome> {
        evaluator.begin_cycle();
        let rows = self.collect_rows(&*evaluator);
        let count = rows.len();
        let decision = self.detector.render_cycle(rows, presenter)?;
        if decision.changed {
            debug!(
                "Rendered {} rows (fingerprint {})",
                count,
                self.detector.fingerprint().unwrap_or_default()
            );
        }
        Ok(CycleOutcome {
            rows: count,
            decision,
        })
    }
}
