//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// mqprobe - Find the media feature values a display environment matches.
#[derive(Debug, Parser)]
#[command(name = "mqprobe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .mqprobe/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Environment profile to probe (YAML, re-read every watch cycle)
    #[arg(short, long, global = true, env = "MQPROBE_PROFILE")]
    pub profile: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Probe once and print the matching features (default if no command specified)
    Run(RunArgs),

    /// Probe repeatedly, redrawing whenever the matches change
    Watch(WatchArgs),

    /// List the descriptors that would be probed
    Catalogue(CatalogueArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show a reference link for each feature
    #[arg(long)]
    pub links: bool,
}

/// Arguments for the `watch` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct WatchArgs {
    /// Pause between cycles in milliseconds (overrides settings.interval_ms)
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: Option<u64>,

    /// Stop after this many cycles
    #[arg(long, value_name = "N")]
    pub max_cycles: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show a reference link for each feature
    #[arg(long)]
    pub links: bool,
}

/// Arguments for the `catalogue` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CatalogueArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
