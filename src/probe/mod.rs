//! Probe engine.
//!
//! Probing one descriptor means rendering a query for every value in its
//! domain, asking the [`Evaluator`] whether that query currently holds, and
//! collecting the values that do. Every value is probed, even after a match
//! has been found or lost, because matches are not assumed to be contiguous.
//!
//! # Example
//!
//! ```
//! use mqprobe::catalogue::{FeatureDescriptor, ReductionMode};
//! use mqprobe::probe::probe;
//!
//! let descriptor = FeatureDescriptor::new(
//!     "(hover: {value})",
//!     ReductionMode::Enumeration,
//!     vec!["none".into(), "hover".into()],
//! )
//! .unwrap();
//!
//! let evaluator = |query: &str| query == "(hover: hover)";
//! let result = probe(&descriptor, &evaluator);
//! assert_eq!(result.matched_labels(), vec!["hover"]);
//! ```

pub mod reduce;

pub use reduce::{domain_summary, matched_summary, reduce, Reduction};

use crate::catalogue::FeatureDescriptor;
use crate::domain::DomainValue;

/// External capability answering whether a fully-formed query holds.
///
/// Answers must be stable for the duration of one cycle but may change
/// between cycles. Closures `Fn(&str) -> bool` are evaluators.
pub trait Evaluator {
    /// Evaluate one query.
    fn evaluate(&self, query: &str) -> bool;

    /// Called before each cycle; evaluators that track a changing
    /// environment refresh their view here.
    fn begin_cycle(&mut self) {}
}

impl<F> Evaluator for F
where
    F: Fn(&str) -> bool,
{
    fn evaluate(&self, query: &str) -> bool {
        self(query)
    }
}

/// Values of one descriptor that matched during one cycle.
#[derive(Debug, Clone)]
pub struct ProbeResult<'a> {
    descriptor: &'a FeatureDescriptor,
    matched: Vec<&'a DomainValue>,
}

impl<'a> ProbeResult<'a> {
    pub fn descriptor(&self) -> &'a FeatureDescriptor {
        self.descriptor
    }

    /// Matched values in domain order.
    pub fn matched(&self) -> &[&'a DomainValue] {
        &self.matched
    }

    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }

    /// Matched values rendered as strings.
    pub fn matched_labels(&self) -> Vec<String> {
        self.matched.iter().map(ToString::to_string).collect()
    }

    /// Reduce the matches to display summaries.
    ///
    /// Returns `None` when nothing matched.
    pub fn reduce(&self) -> Option<Reduction> {
        reduce(self.descriptor, &self.matched)
    }
}

/// Probe every value of `descriptor` against `evaluator`.
pub fn probe<'a>(descriptor: &'a FeatureDescriptor, evaluator: &dyn Evaluator) -> ProbeResult<'a> {
    let matched = descriptor
        .domain()
        .iter()
        .filter(|value| evaluator.evaluate(&descriptor.render_query(value)))
        .collect();

    ProbeResult {
        descriptor,
        matched,
    }
}
