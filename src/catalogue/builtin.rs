//! Built-in media feature catalogue.
//!
//! One entry per media query probed by default, in display order. Domains
//! are described with [`BuiltinDomain`] so the whole table stays `const`;
//! they are generated once when the catalogue is built.

use crate::domain::DomainSpec;
use crate::error::Result;

use super::descriptor::{FeatureDescriptor, ReductionMode};

/// Base URL of the reference page for each media feature.
const REFERENCE_BASE: &str = "https://developer.mozilla.org/en-US/docs/Web/CSS/@media/";

/// Largest numerator/denominator used for aspect ratio domains.
const ASPECT_RATIO_MAX: u32 = 16;

/// Domain of a built-in entry.
enum BuiltinDomain {
    Keywords(&'static [&'static str]),
    Integers(i64, i64),
    Powers(i64, i64, i64),
    Decimals(f64, f64, f64, u32),
    AspectRatios,
}

impl BuiltinDomain {
    fn to_spec(&self) -> DomainSpec {
        match self {
            Self::Keywords(values) => DomainSpec::Keywords {
                values: values.iter().map(|v| v.to_string()).collect(),
            },
            Self::Integers(start, end) => DomainSpec::IntegerRange {
                start: *start,
                end: *end,
            },
            Self::Powers(base, min_exponent, max_exponent) => DomainSpec::PowerRange {
                base: *base,
                min_exponent: *min_exponent,
                max_exponent: *max_exponent,
            },
            Self::Decimals(start, end, step, precision) => DomainSpec::DecimalRange {
                start: *start,
                end: *end,
                step: *step,
                precision: *precision,
            },
            Self::AspectRatios => DomainSpec::Fractions {
                max: ASPECT_RATIO_MAX,
            },
        }
    }
}

/// Definition of a built-in descriptor.
struct BuiltinDef {
    template: &'static str,
    mode: ReductionMode,
    domain: BuiltinDomain,
}

use BuiltinDomain::{AspectRatios, Decimals, Integers, Keywords, Powers};
use ReductionMode::{Enumeration, Range};

const HOVER: &[&str] = &["none", "hover"];
const POINTER: &[&str] = &["none", "coarse", "fine"];
const DYNAMIC_RANGE: &[&str] = &["standard", "high"];
const BINARY: &[&str] = &["0", "1"];
const PREFERENCE: &[&str] = &["no-preference", "reduce"];
const RESOLUTION_MULTIPLIER: BuiltinDomain = Decimals(0.0, 10.0, 0.01, 3);

const fn def(template: &'static str, mode: ReductionMode, domain: BuiltinDomain) -> BuiltinDef {
    BuiltinDef {
        template,
        mode,
        domain,
    }
}

/// Built-in descriptor definitions.
const BUILTIN_DEFS: &[BuiltinDef] = &[
    def("(any-hover: {value})", Enumeration, Keywords(HOVER)),
    def("(any-pointer: {value})", Enumeration, Keywords(POINTER)),
    def("(min-aspect-ratio: {value})", Range, AspectRatios),
    def("(max-aspect-ratio: {value})", Range, AspectRatios),
    def("(min-color: {value})", Range, Integers(1, 33)),
    def("(max-color: {value})", Range, Integers(1, 33)),
    def(
        "(color-gamut: {value})",
        Enumeration,
        Keywords(&["srgb", "p3", "rec2020"]),
    ),
    def("(min-color-index: {value})", Enumeration, Powers(2, 0, 25)),
    def("(max-color-index: {value})", Enumeration, Powers(2, 0, 25)),
    def(
        "(display-mode: {value})",
        Enumeration,
        Keywords(&[
            "browser",
            "fullscreen",
            "minimal-ui",
            "picture-in-picture",
            "standalone",
            "window-controls-overlay",
        ]),
    ),
    def("(dynamic-range: {value})", Enumeration, Keywords(DYNAMIC_RANGE)),
    def(
        "(forced-colors: {value})",
        Enumeration,
        Keywords(&["none", "active"]),
    ),
    def("(grid: {value})", Enumeration, Keywords(BINARY)),
    def("(min-height: {value}px)", Range, Integers(1, 5001)),
    def("(min-height: {value}rem)", Range, Integers(1, 321)),
    def("(max-height: {value}px)", Range, Integers(1, 5001)),
    def("(max-height: {value}rem)", Range, Integers(1, 321)),
    def("(hover: {value})", Enumeration, Keywords(HOVER)),
    def(
        "(inverted-colors: {value})",
        Enumeration,
        Keywords(&["none", "inverted"]),
    ),
    def("(monochrome: {value})", Enumeration, Keywords(BINARY)),
    def(
        "(orientation: {value})",
        Enumeration,
        Keywords(&["portrait", "landscape"]),
    ),
    def(
        "(overflow-block: {value})",
        Enumeration,
        Keywords(&["none", "scroll", "optional-paged", "paged"]),
    ),
    def(
        "(overflow-inline: {value})",
        Enumeration,
        Keywords(&["none", "scroll"]),
    ),
    def("(pointer: {value})", Enumeration, Keywords(POINTER)),
    def(
        "(prefers-color-scheme: {value})",
        Enumeration,
        Keywords(&["light", "dark"]),
    ),
    def(
        "(prefers-contrast: {value})",
        Enumeration,
        Keywords(&["no-preference", "more", "less", "custom"]),
    ),
    def("(prefers-reduced-data: {value})", Enumeration, Keywords(PREFERENCE)),
    def("(prefers-reduced-motion: {value})", Enumeration, Keywords(PREFERENCE)),
    def(
        "(prefers-reduced-transparency: {value})",
        Enumeration,
        Keywords(PREFERENCE),
    ),
    def("(min-resolution: {value}x)", Range, RESOLUTION_MULTIPLIER),
    def("(min-resolution: {value}dppx)", Range, RESOLUTION_MULTIPLIER),
    def("(min-resolution: {value}dpcm)", Range, Integers(1, 1001)),
    def("(min-resolution: {value}dpi)", Range, Integers(1, 2501)),
    def("(max-resolution: {value}x)", Range, RESOLUTION_MULTIPLIER),
    def("(max-resolution: {value}dppx)", Range, RESOLUTION_MULTIPLIER),
    def("(max-resolution: {value}dpcm)", Range, Integers(1, 1001)),
    def("(max-resolution: {value}dpi)", Range, Integers(1, 2501)),
    def(
        "(scan: {value})",
        Enumeration,
        Keywords(&["interlace", "progressive"]),
    ),
    def(
        "(scripting: {value})",
        Enumeration,
        Keywords(&["none", "initial-only", "enabled"]),
    ),
    def(
        "(update: {value})",
        Enumeration,
        Keywords(&["none", "slow", "fast"]),
    ),
    def(
        "(video-dynamic-range: {value})",
        Enumeration,
        Keywords(DYNAMIC_RANGE),
    ),
    def("(min-width: {value}px)", Range, Integers(1, 5001)),
    def("(min-width: {value}rem)", Range, Integers(1, 321)),
    def("(max-width: {value}px)", Range, Integers(1, 5001)),
    def("(max-width: {value}rem)", Range, Integers(1, 321)),
];

/// Media feature name of a template, without any `min-`/`max-` prefix.
///
/// `"(min-aspect-ratio: {value})"` becomes `"aspect-ratio"`.
pub fn feature_name(template: &str) -> Option<&str> {
    let inner = template.trim().strip_prefix('(')?;
    let (name, _) = inner.split_once(':')?;
    let name = name.trim();
    let name = name
        .strip_prefix("min-")
        .or_else(|| name.strip_prefix("max-"))
        .unwrap_or(name);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Reference link for a template's media feature.
pub fn reference_link(template: &str) -> Option<String> {
    feature_name(template).map(|name| format!("{}{}", REFERENCE_BASE, name))
}

/// Build every built-in descriptor, generating its domain.
pub fn builtin_descriptors() -> Result<Vec<FeatureDescriptor>> {
    BUILTIN_DEFS
        .iter()
        .map(|def| {
            let descriptor = FeatureDescriptor::from_spec(def.template, def.mode, &def.domain.to_spec())?;
            Ok(match reference_link(def.template) {
                Some(link) => descriptor.with_link(link),
                None => descriptor,
            })
        })
        .collect()
}
