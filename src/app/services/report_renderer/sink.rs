//! Drawing backends for rendered reports

use super::pagination::PlacedLine;
use crate::{Error, Result};
use std::io::Write;

/// Receives pages and placed lines in drawing order
pub trait PageSink {
    fn begin_page(&mut self, number: usize) -> Result<()>;

    fn draw_line(&mut self, line: &PlacedLine) -> Result<()>;

    fn end_page(&mut self, _number: usize) -> Result<()> {
        Ok(())
    }

    /// Called once after the last page
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes a report as plain text, pages separated by form feeds
#[derive(Debug)]
pub struct PlainTextSink<W: Write> {
    writer: W,
    spaces_per_indent: usize,
}

impl<W: Write> PlainTextSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            spaces_per_indent: 2,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .map_err(|e| Error::io("Failed to write report text", e))
    }
}

impl<W: Write> PageSink for PlainTextSink<W> {
    fn begin_page(&mut self, number: usize) -> Result<()> {
        if number > 1 {
            self.write("\u{000c}\n")?;
        }
        Ok(())
    }

    fn draw_line(&mut self, placed: &PlacedLine) -> Result<()> {
        let indent = " ".repeat(usize::from(placed.line.indent) * self.spaces_per_indent);
        self.write(&format!("{}{}\n", indent, placed.line.text))
    }

    fn finish(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| Error::io("Failed to flush report text", e))
    }
}
