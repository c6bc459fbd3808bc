//! mqprobe - Discover which media feature values a display environment matches.
//!
//! mqprobe renders a media query for every candidate value of a media
//! feature, asks an evaluator which queries hold, and summarizes the
//! matches per feature. In watch mode it repeats this on a timer and only
//! redraws when the summaries change.
//!
//! # Modules
//!
//! - [`catalogue`] - Feature descriptors and the built-in media feature catalogue
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`domain`] - Candidate value generators
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Probe engine and result reduction
//! - [`profile`] - Simulated display environments and their evaluator
//! - [`render`] - Change detection, tables, and presenters
//! - [`scheduler`] - Probe sessions and the poll loop
//!
//! # Example
//!
//! ```
//! use mqprobe::catalogue::{FeatureDescriptor, ReductionMode};
//! use mqprobe::domain::DomainSpec;
//! use mqprobe::probe::probe;
//! use mqprobe::profile::{EnvironmentProfile, ProfileEvaluator};
//!
//! let descriptor = FeatureDescriptor::from_spec(
//!     "(min-width: {value}px)",
//!     ReductionMode::Range,
//!     &DomainSpec::IntegerRange { start: 1, end: 2000 },
//! )
//! .unwrap();
//!
//! let evaluator = ProfileEvaluator::new(EnvironmentProfile {
//!     width: 1024.0,
//!     ..Default::default()
//! });
//!
//! let reduction = probe(&descriptor, &evaluator).reduce().unwrap();
//! assert_eq!(reduction.matched, "1 to 1024");
//! assert_eq!(reduction.domain, "1 to 1999");
//! ```

pub mod catalogue;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod probe;
pub mod profile;
pub mod render;
pub mod scheduler;

pub use error::{ProbeError, Result};
