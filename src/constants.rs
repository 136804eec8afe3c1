//! Application constants for the equipment analyzer
//!
//! This module contains the required dataset columns, history retention
//! defaults, report layout geometry and report text used throughout the
//! application.

// =============================================================================
// Dataset Columns
// =============================================================================

/// Equipment name column (normalized form)
pub const COLUMN_EQUIPMENT_NAME: &str = "equipment name";

/// Equipment type column (normalized form)
pub const COLUMN_TYPE: &str = "type";

/// Flowrate column (normalized form)
pub const COLUMN_FLOWRATE: &str = "flowrate";

/// Pressure column (normalized form)
pub const COLUMN_PRESSURE: &str = "pressure";

/// Temperature column (normalized form)
pub const COLUMN_TEMPERATURE: &str = "temperature";

/// Required columns in the order they are checked
pub const REQUIRED_COLUMNS: &[&str] = &[
    COLUMN_EQUIPMENT_NAME,
    COLUMN_TYPE,
    COLUMN_FLOWRATE,
    COLUMN_PRESSURE,
    COLUMN_TEMPERATURE,
];

/// Decimal places shown for averages in reports and console output
pub const DISPLAY_DECIMALS: usize = 2;

// =============================================================================
// History Retention
// =============================================================================

/// Number of dataset records kept before the oldest is evicted
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Upper bound accepted for a configured history capacity
pub const MAX_HISTORY_CAPACITY: usize = 1_000;

/// Application directory name under the platform data/config directories
pub const APP_DIR_NAME: &str = "equipment-analyzer";

/// History snapshot file name
pub const HISTORY_FILE_NAME: &str = "history.json";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.json";

// =============================================================================
// Report Layout
// =============================================================================

/// Report page geometry in points (A4 portrait)
pub mod page {
    /// Page width
    pub const WIDTH: f32 = 595.0;

    /// Page height
    pub const HEIGHT: f32 = 842.0;

    /// Left edge of unindented lines
    pub const LEFT_MARGIN: f32 = 50.0;

    /// Distance from the top edge to the first line
    pub const TOP_MARGIN: f32 = 50.0;

    /// Lines are never placed below this height
    pub const BOTTOM_MARGIN: f32 = 100.0;

    /// Vertical advance per line
    pub const LINE_HEIGHT: f32 = 20.0;

    /// Horizontal offset per indent level
    pub const INDENT: f32 = 20.0;

    /// Upper bound on lines per page accepted from configuration
    pub const MAX_LINES_PER_PAGE: usize = 1000;
}

/// Font hints for the report line styles
pub mod fonts {
    pub const TITLE_SIZE: f32 = 16.0;
    pub const SECTION_HEADER_SIZE: f32 = 12.0;
    pub const BODY_SIZE: f32 = 11.0;
}

/// Report text
pub mod report_text {
    pub const TITLE: &str = "Chemical Equipment Report";
    pub const SUMMARY_HEADER: &str = "Summary";
    pub const DISTRIBUTION_HEADER: &str = "Equipment Type Distribution";
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";
}

// =============================================================================
// Logging
// =============================================================================

/// Crate target used in the default log filter
pub const LOG_TARGET: &str = "equipment_analyzer";
