//! Parsing of single-feature media queries and their values.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

/// `(<feature>: <value>)`
static QUERY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(\s*([a-z][a-z0-9-]*)\s*:\s*([^()]*?)\s*\)$")
        .expect("QUERY_REGEX must compile")
});

/// A number followed by an optional unit, e.g. `1.25dppx` or `640`.
static DIMENSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?(?:\d+(?:\.\d*)?|\.\d+))([a-z]*)$")
        .expect("DIMENSION_REGEX must compile")
});

/// Relative tolerance for numeric comparisons.
const TOLERANCE: f64 = 1e-6;

/// CSS pixels per inch.
const PX_PER_INCH: f64 = 96.0;

/// Centimetres per inch.
const CM_PER_INCH: f64 = 2.54;

/// How a query compares the environment against its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `min-` prefix: environment value at least the query value.
    Min,
    /// `max-` prefix: environment value at most the query value.
    Max,
    /// No prefix.
    Exact,
}

impl Comparison {
    /// Check `actual` against `expected` with a small relative tolerance.
    pub fn holds(self, actual: f64, expected: f64) -> bool {
        let ordering = approx_cmp(actual, expected);
        match self {
            Comparison::Min => ordering != Ordering::Less,
            Comparison::Max => ordering != Ordering::Greater,
            Comparison::Exact => ordering == Ordering::Equal,
        }
    }
}

fn approx_cmp(a: f64, b: f64) -> Ordering {
    let scale = a.abs().max(b.abs()).max(1.0);
    if (a - b).abs() <= TOLERANCE * scale {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// A parsed `(<feature>: <value>)` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaQuery<'a> {
    pub comparison: Comparison,
    /// Feature name without its `min-`/`max-` prefix.
    pub feature: &'a str,
    pub value: &'a str,
}

impl<'a> MediaQuery<'a> {
    /// Parse a query, returning `None` if it is not a single feature test.
    pub fn parse(query: &'a str) -> Option<Self> {
        let captures = QUERY_REGEX.captures(query.trim())?;
        let name = captures.get(1)?.as_str();
        let value = captures.get(2)?.as_str();
        if value.is_empty() {
            return None;
        }

        let (comparison, feature) = if let Some(rest) = name.strip_prefix("min-") {
            (Comparison::Min, rest)
        } else if let Some(rest) = name.strip_prefix("max-") {
            (Comparison::Max, rest)
        } else {
            (Comparison::Exact, name)
        };

        Some(Self {
            comparison,
            feature,
            value,
        })
    }
}

/// Split a value into its number and unit.
pub fn parse_dimension(value: &str) -> Option<(f64, &str)> {
    let captures = DIMENSION_REGEX.captures(value)?;
    let number: f64 = captures.get(1)?.as_str().parse().ok()?;
    let unit = captures.get(2).map_or("", |m| m.as_str());
    Some((number, unit))
}

/// Parse a length into CSS pixels.
///
/// `rem` and `em` are relative to `root_font_size`. A unitless zero is
/// accepted; any other unitless number is not.
pub fn parse_length(value: &str, root_font_size: f64) -> Option<f64> {
    let (number, unit) = parse_dimension(value)?;
    match unit {
        "px" => Some(number),
        "rem" | "em" => Some(number * root_font_size),
        "" if number == 0.0 => Some(0.0),
        _ => None,
    }
}

/// Parse a resolution into dots per CSS pixel.
pub fn parse_resolution(value: &str) -> Option<f64> {
    let (number, unit) = parse_dimension(value)?;
    match unit {
        "x" | "dppx" => Some(number),
        "dpi" => Some(number / PX_PER_INCH),
        "dpcm" => Some(number * CM_PER_INCH / PX_PER_INCH),
        _ => None,
    }
}

/// Parse a non-negative integer.
pub fn parse_integer(value: &str) -> Option<u64> {
    value.parse().ok()
}

/// Parse a ratio written as `n/d` or as a single number.
pub fn parse_ratio(value: &str) -> Option<f64> {
    let ratio = match value.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator: f64 = numerator.trim().parse().ok()?;
            let denominator: f64 = denominator.trim().parse().ok()?;
            if denominator == 0.0 {
                return None;
            }
            numerator / denominator
        }
        None => value.parse().ok()?,
    };

    (ratio.is_finite() && ratio > 0.0).then_some(ratio)
}
