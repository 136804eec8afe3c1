//! Report content as a sequence of styled lines

use crate::app::models::{DatasetRecord, NumericColumn, Summary};
use crate::constants::{fonts, report_text};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Visual role of a report line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Title,
    SectionHeader,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Weight and size a drawing backend should use for a line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontHint {
    pub weight: FontWeight,
    pub size: f32,
}

impl LineStyle {
    pub fn font(&self) -> FontHint {
        match self {
            LineStyle::Title => FontHint {
                weight: FontWeight::Bold,
                size: fonts::TITLE_SIZE,
            },
            LineStyle::SectionHeader => FontHint {
                weight: FontWeight::Bold,
                size: fonts::SECTION_HEADER_SIZE,
            },
            LineStyle::Body => FontHint {
                weight: FontWeight::Regular,
                size: fonts::BODY_SIZE,
            },
        }
    }
}

/// One line of report text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub text: String,
    pub style: LineStyle,

    /// Indent level, 0 for flush-left
    pub indent: u8,
}

impl ReportLine {
    pub fn title(text: impl Into<String>) -> Self {
        Self::styled(text, LineStyle::Title)
    }

    pub fn section_header(text: impl Into<String>) -> Self {
        Self::styled(text, LineStyle::SectionHeader)
    }

    pub fn body(text: impl Into<String>) -> Self {
        Self::styled(text, LineStyle::Body)
    }

    /// An empty spacing line
    pub fn blank() -> Self {
        Self::body(String::new())
    }

    pub fn indented(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    fn styled(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
            indent: 0,
        }
    }
}

/// Every line of the report for one upload, in drawing order
///
/// Averages are rounded here and nowhere earlier. Distribution entries follow
/// the chart order, most frequent type first.
pub fn report_lines(filename: &str, uploaded_at: DateTime<Utc>, summary: &Summary) -> Vec<ReportLine> {
    let distribution = &summary.type_distribution;
    let mut lines = Vec::with_capacity(10 + distribution.len());

    lines.push(ReportLine::title(report_text::TITLE));
    lines.push(ReportLine::body(format!("Filename: {}", filename)));
    lines.push(ReportLine::body(format!(
        "Uploaded At: {}",
        uploaded_at.format(report_text::TIMESTAMP_FORMAT)
    )));
    lines.push(ReportLine::blank());

    lines.push(ReportLine::section_header(report_text::SUMMARY_HEADER));
    lines.push(ReportLine::body(format!(
        "Total Equipment: {}",
        summary.total_equipment
    )));
    for column in NumericColumn::ALL {
        lines.push(ReportLine::body(format!(
            "Average {}: {}",
            column.label(),
            summary.display_average(column)
        )));
    }

    lines.push(ReportLine::section_header(report_text::DISTRIBUTION_HEADER));
    for (label, count) in distribution.entries() {
        lines.push(ReportLine::body(format!("{}: {}", label, count)).indented(1));
    }

    lines
}

/// Report lines for a stored record
pub fn record_lines(record: &DatasetRecord) -> Vec<ReportLine> {
    report_lines(&record.filename, record.uploaded_at, &record.summary)
}
