//! Candidate values probed against a query template.

use std::cmp::Ordering;
use std::fmt;

use super::fraction::Fraction;

/// A single candidate value in a descriptor's domain.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainValue {
    /// Whole number (`320`, `16777216`).
    Integer(i64),
    /// Fixed-precision decimal (`1.25`).
    Decimal(f64),
    /// Ratio such as `16/9`.
    Fraction(Fraction),
    /// Keyword such as `hover` or `dark`.
    Keyword(String),
}

impl DomainValue {
    /// Numeric value, if this is not a keyword.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Decimal(d) => Some(*d),
            Self::Fraction(f) => Some(f.value()),
            Self::Keyword(_) => None,
        }
    }

    /// Compare two values numerically.
    ///
    /// Fractions compare exactly against each other and integers compare
    /// exactly against each other; mixed kinds go through `f64`. Keywords
    /// have no numeric order and yield `None`.
    pub fn numeric_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(b)),
            (Self::Fraction(a), Self::Fraction(b)) => Some(a.cmp_value(b)),
            _ => self.as_f64()?.partial_cmp(&other.as_f64()?),
        }
    }
}

impl fmt::Display for DomainValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Decimal(d) => write!(f, "{}", d),
            Self::Fraction(fraction) => write!(f, "{}", fraction),
            Self::Keyword(k) => f.write_str(k),
        }
    }
}

impl From<i64> for DomainValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for DomainValue {
    fn from(d: f64) -> Self {
        Self::Decimal(d)
    }
}

impl From<Fraction> for DomainValue {
    fn from(f: Fraction) -> Self {
        Self::Fraction(f)
    }
}

impl From<&str> for DomainValue {
    fn from(k: &str) -> Self {
        Self::Keyword(k.to_string())
    }
}

impl From<String> for DomainValue {
    fn from(k: String) -> Self {
        Self::Keyword(k)
    }
}
