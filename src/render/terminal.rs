//! Table presenter for interactive terminals.

use console::Term;

use crate::error::Result;

use super::{Presenter, ProbeTheme, RowRecord, Table};

/// Column headers of the results table.
const HEADERS: [&str; 3] = ["Media query", "Matches", "Probed values"];

/// Message shown when no descriptor matched anything.
pub const NO_MATCHES: &str = "No media features matched.";

/// Render rows as the results table.
///
/// With `show_links`, rows carrying a reference link get a fourth column.
pub fn render_rows(rows: &[RowRecord], theme: &ProbeTheme, show_links: bool) -> String {
    if rows.is_empty() {
        return theme.dim.apply_to(NO_MATCHES).to_string();
    }

    let mut headers = HEADERS.to_vec();
    if show_links {
        headers.push("Reference");
    }

    let mut table = Table::new(&headers);
    for row in rows {
        let mut cells = vec![
            row.label.as_str(),
            row.matched_summary.as_str(),
            row.domain_summary.as_str(),
        ];
        if show_links {
            cells.push(row.link.as_deref().unwrap_or(""));
        }
        table.add_row(cells.as_slice());
    }

    table.render_styled(&theme.header, &theme.border)
}

/// Presenter drawing the results table on stdout.
pub struct TerminalPresenter {
    term: Term,
    theme: ProbeTheme,
    clear_screen: bool,
    show_links: bool,
}

impl TerminalPresenter {
    /// Create a presenter writing to stdout.
    pub fn new(theme: ProbeTheme) -> Self {
        Self {
            term: Term::stdout(),
            theme,
            clear_screen: false,
            show_links: false,
        }
    }

    /// Clear the screen before each render, so the table is redrawn in
    /// place. Only takes effect on a real terminal.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Add a reference link column.
    pub fn with_links(mut self, show: bool) -> Self {
        self.show_links = show;
        self
    }
}

impl Presenter for TerminalPresenter {
    fn replace(&mut self, rows: &[RowRecord]) -> Result<()> {
        if self.clear_screen && self.term.is_term() {
            self.term.clear_screen()?;
        }

        let title = format!("Matching media features ({})", rows.len());
        self.term.write_line(&self.theme.format_title(&title))?;
        self.term
            .write_line(&render_rows(rows, &self.theme, self.show_links))?;
        self.term.flush()?;
        Ok(())
    }
}
