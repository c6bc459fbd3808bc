//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Configuration loading and
//! presenter selection live in [`context`] so every command resolves them
//! the same way.

pub mod catalogue;
pub mod context;
pub mod dispatcher;
pub mod run;
pub mod watch;

pub use context::{GlobalOptions, ProbeContext};
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
