//! Setup shared by every command.

use std::path::PathBuf;

use tracing::info;

use crate::catalogue::Catalogue;
use crate::cli::args::Cli;
use crate::config::{load_config, validate, MqprobeConfig, OutputFormat};
use crate::error::Result;
use crate::profile::ProfileEvaluator;
use crate::render::{JsonPresenter, Presenter, ProbeTheme, TerminalPresenter};

/// Global flags, resolved once in `main`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Directory searched for `.mqprobe/config.yml`.
    pub project_root: PathBuf,
    /// Explicit config file.
    pub config: Option<PathBuf>,
    /// Profile file to evaluate against.
    pub profile: Option<PathBuf>,
    /// Whether to style terminal output.
    pub colors: bool,
}

impl GlobalOptions {
    pub fn from_cli(cli: &Cli, project_root: PathBuf, colors: bool) -> Self {
        Self {
            project_root,
            config: cli.config.clone(),
            profile: cli.profile.clone(),
            colors,
        }
    }
}

/// Loaded configuration and the catalogue built from it.
#[derive(Debug)]
pub struct ProbeContext {
    config: MqprobeConfig,
    catalogue: Catalogue,
    profile_path: Option<PathBuf>,
    colors: bool,
}

impl ProbeContext {
    /// Load and validate the configuration, then build the catalogue.
    ///
    /// Every domain is generated here, so configuration errors surface
    /// before anything is probed.
    pub fn load(options: &GlobalOptions) -> Result<Self> {
        let config = load_config(&options.project_root, options.config.as_deref())?;
        validate(&config)?;
        let catalogue = Catalogue::from_config(&config)?;

        info!(
            "Loaded {} descriptors ({} queries per cycle)",
            catalogue.len(),
            catalogue.query_count()
        );

        Ok(Self {
            config,
            catalogue,
            profile_path: options.profile.clone(),
            colors: options.colors,
        })
    }

    pub fn config(&self) -> &MqprobeConfig {
        &self.config
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn into_catalogue(self) -> Catalogue {
        self.catalogue
    }

    /// Evaluator for this run.
    ///
    /// A `--profile` file wins over the config's `profile` section, which
    /// wins over the default desktop profile.
    pub fn evaluator(&self) -> Result<ProfileEvaluator> {
        if let Some(path) = &self.profile_path {
            return ProfileEvaluator::from_file(path);
        }

        Ok(match &self.config.profile {
            Some(profile) => ProfileEvaluator::new(profile.clone()),
            None => ProfileEvaluator::default(),
        })
    }

    /// Output format, with `--json` overriding the config.
    pub fn output_format(&self, json: bool) -> OutputFormat {
        if json {
            OutputFormat::Json
        } else {
            self.config.settings.output
        }
    }

    /// Presenter for the chosen output format.
    ///
    /// `redraw` clears the terminal before each table render.
    pub fn presenter(&self, json: bool, redraw: bool, links: bool) -> Box<dyn Presenter> {
        match self.output_format(json) {
            OutputFormat::Json => Box::new(JsonPresenter::stdout()),
            OutputFormat::Table => Box::new(
                TerminalPresenter::new(ProbeTheme::for_colors(self.colors))
                    .with_clear_screen(redraw)
                    .with_links(links),
            ),
        }
    }
}
