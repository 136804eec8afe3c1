//! Placement of report lines onto fixed-size pages

use super::layout::PageLayout;
use super::lines::ReportLine;
use serde::{Deserialize, Serialize};

/// A report line with its position on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLine {
    pub x: f32,
    pub y: f32,
    pub line: ReportLine,
}

/// One page of placed lines, top to bottom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number
    pub number: usize,
    pub lines: Vec<PlacedLine>,
}

/// Place lines top to bottom, starting a new page whenever the next line
/// would fall below the bottom margin
///
/// Line `i` lands in slot `i % capacity` of page `i / capacity`, which is the
/// same as stepping a cursor down by one line height per line and wrapping to
/// the top when it passes the margin. Lines are never split.
pub fn paginate(lines: Vec<ReportLine>, layout: &PageLayout) -> Vec<Page> {
    let capacity = layout.lines_per_page().max(1);
    let total = lines.len();
    let mut pages: Vec<Page> = Vec::with_capacity(total.div_ceil(capacity));

    for (index, line) in lines.into_iter().enumerate() {
        let slot = index % capacity;
        if slot == 0 {
            pages.push(Page {
                number: pages.len() + 1,
                lines: Vec::with_capacity(capacity.min(total - index)),
            });
        }

        let placed = PlacedLine {
            x: layout.line_x(line.indent),
            y: layout.first_line_y() - layout.line_height * slot as f32,
            line,
        };

        if let Some(page) = pages.last_mut() {
            page.lines.push(placed);
        }
    }

    pages
}
