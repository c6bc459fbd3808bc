//! Candidate domain generation.
//!
//! Every descriptor probes an ordered sequence of candidate values. This
//! module holds the pure generators for those sequences:
//!
//! - [`range`] - integer, power-of-base and fixed-precision decimal ranges
//! - [`fraction`] - irreducible fraction ranges
//! - [`value`] - the [`DomainValue`] type the generators produce
//!
//! [`DomainSpec`] is the declarative form used by the built-in catalogue and
//! by custom descriptors in the config file.
//!
//! # Example
//!
//! ```
//! use mqprobe::domain::{power_range, DomainSpec};
//!
//! assert_eq!(power_range(2, 0, 5).unwrap(), vec![1, 2, 4, 8, 16]);
//!
//! let spec = DomainSpec::IntegerRange { start: 1, end: 4 };
//! let labels: Vec<String> = spec.generate().unwrap().iter().map(|v| v.to_string()).collect();
//! assert_eq!(labels, vec!["1", "2", "3"]);
//! ```

pub mod fraction;
pub mod range;
pub mod value;

pub use fraction::{euclidean_gcd, fraction_domain, irreducible_fraction_range, Fraction};
pub use range::{decimal_range, integer_power, integer_range, power_range, round_to_precision};
pub use value::DomainValue;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Declarative description of a candidate domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DomainSpec {
    /// Fixed list of keywords, probed in the listed order.
    Keywords { values: Vec<String> },

    /// Integers in `[start, end)`.
    IntegerRange { start: i64, end: i64 },

    /// `base^e` for `e` in `[min_exponent, max_exponent)`.
    PowerRange {
        base: i64,
        min_exponent: i64,
        max_exponent: i64,
    },

    /// Decimals in `[start, end)` spaced by `step`.
    DecimalRange {
        start: f64,
        end: f64,
        step: f64,
        #[serde(default = "default_precision")]
        precision: u32,
    },

    /// Irreducible fractions whose parts are at most `max`.
    Fractions { max: u32 },
}

fn default_precision() -> u32 {
    3
}

/// Largest candidate count a single domain may declare.
pub const MAX_DOMAIN_SIZE: u64 = 100_000;

impl DomainSpec {
    /// Generate the candidate values described by this spec.
    pub fn generate(&self) -> Result<Vec<DomainValue>> {
        let values = match self {
            Self::Keywords { values } => values.iter().map(|v| DomainValue::from(v.as_str())).collect(),
            Self::IntegerRange { start, end } => integer_range(*start, *end)?
                .into_iter()
                .map(DomainValue::Integer)
                .collect(),
            Self::PowerRange {
                base,
                min_exponent,
                max_exponent,
            } => power_range(*base, *min_exponent, *max_exponent)?
                .into_iter()
                .map(DomainValue::Integer)
                .collect(),
            Self::DecimalRange {
                start,
                end,
                step,
                precision,
            } => decimal_range(*start, *end, *step, *precision)?
                .into_iter()
                .map(DomainValue::Decimal)
                .collect(),
            Self::Fractions { max } => fraction_domain(*max)
                .into_iter()
                .map(DomainValue::Fraction)
                .collect(),
        };
        Ok(values)
    }

    /// Upper bound on the number of candidates [`generate`](Self::generate)
    /// produces, computed without generating them.
    ///
    /// Fractions count every `k/m` and `m/k` pair before reducible pairs
    /// are dropped.
    pub fn candidate_count(&self) -> u64 {
        match self {
            Self::Keywords { values } => values.len() as u64,
            Self::IntegerRange { start, end } => span(*start, *end),
            Self::PowerRange {
                min_exponent,
                max_exponent,
                ..
            } => span(*min_exponent, *max_exponent),
            Self::DecimalRange { start, end, step, .. } => {
                // invalid bounds and steps are reported by generate
                if !(start.is_finite() && end.is_finite() && step.is_finite() && *step > 0.0) {
                    return 0;
                }
                let steps = ((end - start) / step).ceil();
                if steps.is_nan() || steps <= 0.0 {
                    0
                } else {
                    // saturates for huge spans
                    steps as u64
                }
            }
            Self::Fractions { max } => {
                let max = u64::from(*max);
                max.saturating_mul(max + 1)
            }
        }
    }

    /// Short name of the domain kind, for listings.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Keywords { .. } => "keywords",
            Self::IntegerRange { .. } => "integer_range",
            Self::PowerRange { .. } => "power_range",
            Self::DecimalRange { .. } => "decimal_range",
            Self::Fractions { .. } => "fractions",
        }
    }
}

fn span(start: i64, end: i64) -> u64 {
    u64::try_from(i128::from(end) - i128::from(start)).unwrap_or(0)
}
