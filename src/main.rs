//! mqprobe CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use console::style;
use mqprobe::cli::{Cli, CommandDispatcher, GlobalOptions};
use mqprobe::render::should_use_colors;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries the rendered output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("mqprobe=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mqprobe=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("mqprobe starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let project_root = std::env::current_dir().unwrap_or_default();
    let options = GlobalOptions::from_cli(&cli, project_root, should_use_colors());
    let dispatcher = CommandDispatcher::new(options);

    match dispatcher.dispatch(&cli) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            // Configuration problems exit with 2, runtime failures with 1.
            if e.is_configuration_error() {
                ExitCode::from(2)
            } else {
                ExitCode::from(1)
            }
        }
    }
}
