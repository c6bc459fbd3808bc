//! Reduction of matched values to display summaries.
//!
//! Range descriptors are summarized by their first and last match. Matches
//! are assumed to form one contiguous run; when they do not, the summary
//! spans the gaps (`{2, 4}` reads as `2 to 4`).

use crate::catalogue::{FeatureDescriptor, ReductionMode};
use crate::domain::DomainValue;

/// Separator between enumerated values.
pub const LIST_SEPARATOR: &str = ", ";

/// Display summaries of one descriptor for one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// What matched, e.g. `320 to 1280` or `coarse, fine`.
    pub matched: String,
    /// Every value that was probed, e.g. `1 to 5000`.
    pub domain: String,
}

/// Reduce `matched` (in domain order) to display summaries.
///
/// Returns `None` when nothing matched; such descriptors produce no row.
pub fn reduce(descriptor: &FeatureDescriptor, matched: &[&DomainValue]) -> Option<Reduction> {
    let matched = matched_summary(descriptor.mode(), matched)?;
    Some(Reduction {
        matched,
        domain: domain_summary(descriptor),
    })
}

/// Summary of matched values, or `None` if there are none.
pub fn matched_summary(mode: ReductionMode, matched: &[&DomainValue]) -> Option<String> {
    let (first, last) = (matched.first()?, matched.last()?);
    Some(match mode {
        ReductionMode::Range => format!("{} to {}", first, last),
        ReductionMode::Enumeration => join(matched.iter().copied()),
    })
}

/// Summary of everything a descriptor probes, independent of matches.
pub fn domain_summary(descriptor: &FeatureDescriptor) -> String {
    let domain = descriptor.domain();
    match (descriptor.mode(), domain.first(), domain.last()) {
        (ReductionMode::Range, Some(first), Some(last)) => format!("{} to {}", first, last),
        _ => join(domain.iter()),
    }
}

fn join<'a>(values: impl Iterator<Item = &'a DomainValue>) -> String {
    values
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}
