//! Catalogue command implementation.
//!
//! The `mqprobe catalogue` command lists every descriptor that would be
//! probed, with its reduction mode and domain.

use console::Term;
use serde::Serialize;

use crate::catalogue::{Catalogue, ReductionMode};
use crate::cli::args::CatalogueArgs;
use crate::config::OutputFormat;
use crate::error::{ProbeError, Result};
use crate::probe::domain_summary;
use crate::render::{ProbeTheme, Table};

use super::context::{GlobalOptions, ProbeContext};
use super::dispatcher::{Command, CommandResult};

/// One catalogue listing entry.
#[derive(Debug, Serialize)]
pub struct CatalogueEntry<'a> {
    pub label: &'a str,
    pub template: &'a str,
    pub mode: ReductionMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'a str>,
    /// Number of values probed per cycle.
    pub size: usize,
    pub domain: String,
}

/// List the catalogue in probe order.
pub fn catalogue_entries(catalogue: &Catalogue) -> Vec<CatalogueEntry<'_>> {
    catalogue
        .iter()
        .map(|descriptor| CatalogueEntry {
            label: descriptor.label(),
            template: descriptor.template(),
            mode: descriptor.mode(),
            link: descriptor.link(),
            size: descriptor.domain().len(),
            domain: domain_summary(descriptor),
        })
        .collect()
}

/// Render entries as a table.
pub fn render_catalogue(entries: &[CatalogueEntry<'_>], theme: &ProbeTheme) -> String {
    let mut table = Table::new(&["Descriptor", "Mode", "Values", "Domain"]);
    for entry in entries {
        table.add_row(&[
            entry.label.to_string(),
            entry.mode.to_string(),
            entry.size.to_string(),
            entry.domain.clone(),
        ]);
    }
    table.render_styled(&theme.header, &theme.border)
}

/// The catalogue command implementation.
pub struct CatalogueCommand {
    options: GlobalOptions,
    args: CatalogueArgs,
}

impl CatalogueCommand {
    /// Create a new catalogue command.
    pub fn new(options: &GlobalOptions, args: CatalogueArgs) -> Self {
        Self {
            options: options.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CatalogueArgs {
        &self.args
    }

    /// Produce the listing for `context` in the requested format.
    pub fn listing(&self, context: &ProbeContext) -> Result<String> {
        let entries = catalogue_entries(context.catalogue());

        match context.output_format(self.args.json) {
            OutputFormat::Json => serde_json::to_string_pretty(&entries)
                .map_err(|e| ProbeError::Other(e.into())),
            OutputFormat::Table => {
                let theme = ProbeTheme::for_colors(self.options.colors);
                let title = format!(
                    "{} descriptors, {} queries per cycle",
                    entries.len(),
                    context.catalogue().query_count()
                );
                Ok(format!(
                    "{}\n{}",
                    theme.format_title(&title),
                    render_catalogue(&entries, &theme)
                ))
            }
        }
    }
}

impl Command for CatalogueCommand {
    fn execute(&self) -> Result<CommandResult> {
        let context = ProbeContext::load(&self.options)?;
        let listing = self.listing(&context)?;
        Term::stdout().write_line(&listing)?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn context(temp: &TempDir) -> ProbeContext {
        ProbeContext::load(&GlobalOptions {
            project_root: temp.path().to_path_buf(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn entries_follow_catalogue_order() {
        let temp = TempDir::new().unwrap();
        let context = context(&temp);
        let entries = catalogue_entries(context.catalogue());

        assert_eq!(entries.len(), 45);
        assert_eq!(entries[0].label, "(any-hover: {value})");
        assert_eq!(entries[0].size, 2);
        assert_eq!(entries[0].domain, "none, hover");
        assert_eq!(entries[44].label, "(max-width: {value}rem)");
        assert_eq!(entries[44].domain, "1 to 320");
    }

    #[test]
    fn table_listing_has_title_and_rows() {
        let temp = TempDir::new().unwrap();
        let cmd = CatalogueCommand::new(&GlobalOptions::default(), CatalogueArgs::default());
        let listing = cmd.listing(&context(&temp)).unwrap();

        assert!(listing.starts_with("45 descriptors"));
        assert!(listing.contains("(min-resolution: {value}dppx)"));
        assert!(listing.contains("enumeration"));
    }

    #[test]
    fn json_listing_is_an_array() {
        let temp = TempDir::new().unwrap();
        let args = CatalogueArgs { json: true };
        let cmd = CatalogueCommand::new(&GlobalOptions::default(), args);
        let listing = cmd.listing(&context(&temp)).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&listing).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 45);
        assert_eq!(entries[2]["mode"], "range");
        assert_eq!(entries[2]["domain"], "1/16 to 16/1");
        assert!(entries[2]["link"]
            .as_str()
            .unwrap()
            .ends_with("/aspect-ratio"));
    }

    #[test]
    fn custom_descriptors_are_listed() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".mqprobe");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("config.yml"),
            r#"
settings:
  include_builtin: false
descriptors:
  - label: Pixel ratio
    template: "(min-resolution: {value}x)"
    mode: range
    domain: { kind: power_range, base: 2, min_exponent: 0, max_exponent: 4 }
"#,
        )
        .unwrap();

        let entries_context = context(&temp);
        let entries = catalogue_entries(entries_context.catalogue());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "Pixel ratio");
        assert_eq!(entries[0].size, 4);
        assert_eq!(entries[0].domain, "1 to 8");
    }
}
