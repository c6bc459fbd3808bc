//! Watch command implementation.
//!
//! The `mqprobe watch` command probes on a trailing timer and redraws the
//! output whenever the matches change.

use std::time::Duration;

use tracing::info;

use crate::cli::args::WatchArgs;
use crate::error::Result;
use crate::render::Presenter;
use crate::scheduler::{Clock, PollScheduler, ProbeSession, SystemClock};

use super::context::{GlobalOptions, ProbeContext};
use super::dispatcher::{Command, CommandResult};

/// The watch command implementation.
pub struct WatchCommand {
    options: GlobalOptions,
    args: WatchArgs,
}

impl WatchCommand {
    /// Create a new watch command.
    pub fn new(options: &GlobalOptions, args: WatchArgs) -> Self {
        Self {
            options: options.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &WatchArgs {
        &self.args
    }

    /// Pause between cycles, with `--interval-ms` overriding the config.
    pub fn interval(&self, context: &ProbeContext) -> Duration {
        let millis = self
            .args
            .interval_ms
            .unwrap_or(context.config().settings.interval_ms);
        Duration::from_millis(millis)
    }

    /// Run the poll loop on `clock` until `--max-cycles` is reached.
    ///
    /// Returns the number of completed cycles.
    pub fn watch_with<C: Clock>(
        &self,
        context: ProbeContext,
        clock: C,
        presenter: &mut dyn Presenter,
    ) -> Result<u64> {
        let interval = self.interval(&context);
        let mut evaluator = context.evaluator()?;
        let session = ProbeSession::new(context.into_catalogue());
        let mut scheduler = PollScheduler::new(session, clock).with_interval(interval);

        info!("Watching with a {:?} pause between cycles", interval);
        scheduler.run(&mut evaluator, presenter, self.args.max_cycles)
    }
}

impl Command for WatchCommand {
    fn execute(&self) -> Result<CommandResult> {
        let context = ProbeContext::load(&self.options)?;
        let mut presenter = context.presenter(self.args.json, true, self.args.links);

        let cycles = self.watch_with(context, SystemClock::new(), presenter.as_mut())?;
        info!("Stopped after {} cycles", cycles);

        Ok(CommandResult::success())
    }
}
