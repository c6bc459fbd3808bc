//! Table rendering for formatted output.

use console::Style;

/// A simple box-drawn table.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: &[&str]) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| display_width(h)).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row to the table. Missing cells render empty; extra cells are
    /// ignored.
    pub fn add_row<S: AsRef<str>>(&mut self, row: &[S]) {
        let row: Vec<String> = row.iter().map(|s| s.as_ref().to_string()).collect();

        for (i, cell) in row.iter().enumerate() {
            if i < self.column_widths.len() {
                self.column_widths[i] = self.column_widths[i].max(display_width(cell));
            }
        }

        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        self.render_styled(&Style::new(), &Style::new())
    }

    /// Render with `header` applied to the header row and `border` to every
    /// border line. Styles wrap whole lines so column alignment is kept.
    pub fn render_styled(&self, header: &Style, border: &Style) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);

        lines.push(border.apply_to(self.render_border('┌', '┬', '┐')).to_string());
        lines.push(header.apply_to(self.render_row(&self.headers)).to_string());
        lines.push(border.apply_to(self.render_border('├', '┼', '┤')).to_string());
        for row in &self.rows {
            lines.push(self.render_row(row));
        }
        lines.push(border.apply_to(self.render_border('└', '┴', '┘')).to_string());

        lines.join("\n")
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let mut s = String::new();
        s.push(left);

        for (i, width) in self.column_widths.iter().enumerate() {
            s.push_str(&"─".repeat(width + 2));
            if i < self.column_widths.len() - 1 {
                s.push(mid);
            }
        }

        s.push(right);
        s
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::from("│");

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
            s.push_str(&format!(" {:width$} │", cell, width = width));
        }

        s
    }
}

// `format!` pads by chars, so widths are measured in chars too.
fn display_width(s: &str) -> usize {
    s.chars().count()
}
