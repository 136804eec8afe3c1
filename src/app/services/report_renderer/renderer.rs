//! Report renderer orchestration

use super::layout::PageLayout;
use super::lines::{ReportLine, record_lines};
use super::pagination::{Page, paginate};
use super::sink::PageSink;
use crate::Result;
use crate::app::models::DatasetRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Turns stored dataset records into paginated reports
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    layout: PageLayout,
}

impl ReportRenderer {
    pub fn new(layout: PageLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// All report lines for a record, before pagination
    pub fn lines(&self, record: &DatasetRecord) -> Vec<ReportLine> {
        record_lines(record)
    }

    /// Place already-materialized lines onto pages
    pub fn paginate(&self, lines: Vec<ReportLine>) -> Vec<Page> {
        paginate(lines, &self.layout)
    }

    /// Lines then pages for one record
    pub fn render(&self, record: &DatasetRecord) -> RenderedReport {
        let lines = self.lines(record);
        let line_count = lines.len();
        let pages = self.paginate(lines);

        debug!(
            "Rendered report for dataset {}: {} lines on {} pages",
            record.id,
            line_count,
            pages.len()
        );

        RenderedReport {
            dataset_id: record.id,
            pages,
        }
    }
}

/// A fully paginated report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedReport {
    pub dataset_id: u64,
    pub pages: Vec<Page>,
}

impl RenderedReport {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|page| page.lines.len()).sum()
    }

    /// Suggested download name
    pub fn file_name(&self, extension: &str) -> String {
        format!("report_{}.{}", self.dataset_id, extension)
    }

    /// Feed every page, in order, to a drawing backend
    pub fn draw_to<S: PageSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        for page in &self.pages {
            sink.begin_page(page.number)?;
            for line in &page.lines {
                sink.draw_line(line)?;
            }
            sink.end_page(page.number)?;
        }
        sink.finish()
    }
}
