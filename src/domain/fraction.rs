//! Irreducible fraction domains (aspect ratios such as `16/9`).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A positive fraction rendered as `numerator/denominator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: u32,
    denominator: u32,
}

impl Fraction {
    /// Create a fraction. Returns `None` if either part is zero.
    pub fn new(numerator: u32, denominator: u32) -> Option<Self> {
        if numerator == 0 || denominator == 0 {
            return None;
        }
        Some(Self {
            numerator,
            denominator,
        })
    }

    pub fn numerator(&self) -> u32 {
        self.numerator
    }

    pub fn denominator(&self) -> u32 {
        self.denominator
    }

    /// Numeric value of the fraction.
    pub fn value(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    /// True if numerator and denominator share no factor other than 1.
    pub fn is_irreducible(&self) -> bool {
        euclidean_gcd(u64::from(self.numerator), u64::from(self.denominator)) == 1
    }

    /// Exact comparison by numeric value (cross-multiplication).
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        let lhs = u64::from(self.numerator) * u64::from(other.denominator);
        let rhs = u64::from(other.numerator) * u64::from(self.denominator);
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Fraction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (num, den) = s
            .split_once('/')
            .ok_or_else(|| format!("not a fraction: {}", s))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|e| format!("invalid fraction part '{}': {}", part, e))
        };
        Fraction::new(parse(num)?, parse(den)?)
            .ok_or_else(|| format!("fraction parts must be positive: {}", s))
    }
}

/// Greatest common divisor by repeated subtraction.
///
/// The larger operand is replaced by the difference until the two are equal
/// or one of them reaches zero.
pub fn euclidean_gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    loop {
        if a == 0 {
            return b;
        }
        if b == 0 || a == b {
            return a;
        }
        if a > b {
            a -= b;
        } else {
            b -= a;
        }
    }
}

/// Irreducible fractions with `max` as numerator or denominator.
///
/// For every `k` in `[1, max]` the candidates `k/max` and `max/k` are
/// generated, sorted ascending by value, and filtered to irreducible pairs.
/// No deduplication happens here: `max == 1` yields `1/1` twice.
pub fn irreducible_fraction_range(max: u32) -> Vec<Fraction> {
    let mut fractions = Vec::with_capacity(2 * max as usize);
    for k in 1..=max {
        fractions.extend(Fraction::new(k, max));
        fractions.extend(Fraction::new(max, k));
    }
    fractions.sort_by(Fraction::cmp_value);
    fractions.retain(Fraction::is_irreducible);
    fractions
}

/// Union of [`irreducible_fraction_range`] for every bound in `[1, max]`.
///
/// Sorted ascending by value. Two irreducible fractions with equal value are
/// identical, so dropping adjacent repeats leaves every value exactly once.
pub fn fraction_domain(max: u32) -> Vec<Fraction> {
    let mut fractions: Vec<Fraction> = (1..=max).flat_map(irreducible_fraction_range).collect();
    fractions.sort_by(Fraction::cmp_value);
    fractions.dedup();
    fractions
}
