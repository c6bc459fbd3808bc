//! Run command implementation.
//!
//! The `mqprobe run` command probes the catalogue once and renders the
//! matching features.

use crate::cli::args::RunArgs;
use crate::error::Result;
use crate::render::Presenter;
use crate::scheduler::{CycleOutcome, ProbeSession};

use super::context::{GlobalOptions, ProbeContext};
use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    options: GlobalOptions,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(options: &GlobalOptions, args: RunArgs) -> Self {
        Self {
            options: options.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    /// Probe every descriptor once and render the result.
    pub fn probe_once(
        &self,
        context: ProbeContext,
        presenter: &mut dyn Presenter,
    ) -> Result<CycleOutcome> {
        let mut evaluator = context.evaluator()?;
        let mut session = ProbeSession::new(context.into_catalogue());
        session.run_cycle(&mut evaluator, presenter)
    }
}

impl Command for RunCommand {
    fn execute(&self) -> Result<CommandResult> {
        let context = ProbeContext::load(&self.options)?;
        let mut presenter = context.presenter(self.args.json, false, self.args.links);

        let outcome = self.probe_once(context, presenter.as_mut())?;
        tracing::debug!("Run matched {} descriptors", outcome.rows);

        Ok(CommandResult::success())
    }
}
