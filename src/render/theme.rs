//! Visual theme and styling.

use console::Style;

/// Terminal styles used by the table presenter.
#[derive(Debug, Clone)]
pub struct ProbeTheme {
    /// Style for the title line (magenta bold).
    pub title: Style,
    /// Style for the table header row (bold).
    pub header: Style,
    /// Style for box-drawing borders (dim).
    pub border: Style,
    /// Style for secondary text such as timestamps (dim).
    pub dim: Style,
}

impl Default for ProbeTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            title: Style::new().bold().magenta(),
            header: Style::new().bold(),
            border: Style::new().dim(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            title: Style::new(),
            header: Style::new(),
            border: Style::new(),
            dim: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_colors(colors: bool) -> Self {
        if colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format the title line.
    pub fn format_title(&self, title: &str) -> String {
        self.title.apply_to(title).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
