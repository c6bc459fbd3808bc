//! JSON presenter: one document per render.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{ProbeError, Result};

use super::{Presenter, RowRecord};

/// A single rendered document.
#[derive(Debug, Serialize)]
struct JsonRender<'a> {
    rendered_at: DateTime<Utc>,
    rows: &'a [RowRecord],
}

/// Presenter writing each row set as a JSON document on its own line.
pub struct JsonPresenter<W: Write> {
    writer: W,
}

impl JsonPresenter<std::io::Stdout> {
    /// Create a presenter writing to stdout.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> JsonPresenter<W> {
    /// Create a presenter writing compact JSON lines to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn replace(&mut self, rows: &[RowRecord]) -> Result<()> {
        let document = JsonRender {
            rendered_at: Utc::now(),
            rows,
        };

        let encoded =
            serde_json::to_string(&document).map_err(|e| ProbeError::Other(e.into()))?;

        writeln!(self.writer, "{}", encoded)?;
        self.writer.flush()?;
        Ok(())
    }
}
