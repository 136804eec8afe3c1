//! Page geometry for rendered reports

use crate::constants::page;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Fixed page geometry, in points with the origin at the bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub page_width: f32,
    pub page_height: f32,

    /// X position of unindented lines
    pub left_margin: f32,

    /// Distance from the top edge to the first line on a page
    pub top_margin: f32,

    /// No line is placed below this height
    pub bottom_margin: f32,

    /// Vertical advance per line
    pub line_height: f32,

    /// Horizontal offset per indent level
    pub indent: f32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_width: page::WIDTH,
            page_height: page::HEIGHT,
            left_margin: page::LEFT_MARGIN,
            top_margin: page::TOP_MARGIN,
            bottom_margin: page::BOTTOM_MARGIN,
            line_height: page::LINE_HEIGHT,
            indent: page::INDENT,
        }
    }
}

impl PageLayout {
    /// Set the vertical advance per line
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Pick the line height so that exactly `lines` lines fit on a page
    pub fn with_lines_per_page(mut self, lines: usize) -> Self {
        let usable = self.first_line_y() - self.bottom_margin;
        // Aim between n-1 and n line advances so float rounding cannot tip the count
        self.line_height = usable / (lines.max(1) as f32 - 0.5);
        self
    }

    /// Set top and bottom margins
    pub fn with_vertical_margins(mut self, top: f32, bottom: f32) -> Self {
        self.top_margin = top;
        self.bottom_margin = bottom;
        self
    }

    /// Y position of the first line on every page
    pub fn first_line_y(&self) -> f32 {
        self.page_height - self.top_margin
    }

    /// Number of lines that fit on one page
    ///
    /// The first line sits at [`first_line_y`](Self::first_line_y) and each
    /// further line one line height lower, as long as it stays at or above
    /// the bottom margin.
    pub fn lines_per_page(&self) -> usize {
        let usable = self.first_line_y() - self.bottom_margin;
        if usable < 0.0 || self.line_height <= 0.0 {
            return 0;
        }
        // Float to int casts saturate, so tiny line heights cannot wrap
        ((usable / self.line_height).floor() as usize).saturating_add(1)
    }

    /// X position for a line at the given indent level
    pub fn line_x(&self, indent: u8) -> f32 {
        self.left_margin + self.indent * f32::from(indent)
    }

    /// Check the geometry leaves room for at least one line
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("page_width", self.page_width),
            ("page_height", self.page_height),
            ("left_margin", self.left_margin),
            ("top_margin", self.top_margin),
            ("bottom_margin", self.bottom_margin),
            ("line_height", self.line_height),
            ("indent", self.indent),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::configuration(format!(
                    "Page layout {} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.line_height == 0.0 {
            return Err(Error::configuration(
                "Page layout line_height must be greater than 0",
            ));
        }

        if self.left_margin >= self.page_width {
            return Err(Error::configuration(format!(
                "Left margin {} leaves no horizontal space on a {} wide page",
                self.left_margin, self.page_width
            )));
        }

        if self.first_line_y() < self.bottom_margin {
            return Err(Error::configuration(format!(
                "Margins (top {}, bottom {}) leave no vertical space on a {} high page",
                self.top_margin, self.bottom_margin, self.page_height
            )));
        }

        if self.lines_per_page() > page::MAX_LINES_PER_PAGE {
            return Err(Error::configuration(format!(
                "Line height {} fits more than {} lines on a page",
                self.line_height,
                page::MAX_LINES_PER_PAGE
            )));
        }

        Ok(())
    }
}
