//! Equipment Analyzer Library
//!
//! A Rust library for summarizing chemical-process equipment datasets uploaded
//! as CSV, keeping a bounded history of the results and rendering printable
//! reports from stored summaries.
//!
//! This library provides tools for:
//! - Reading delimited tables and validating the required equipment columns
//! - Computing column averages and an equipment type distribution
//! - Retaining the most recent uploads with strict oldest-first eviction
//! - Laying out a stored summary as paginated report lines
//! - Comprehensive error handling for every stage of the pipeline

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod analysis;
        pub mod history_store;
        pub mod report_renderer;
        pub mod schema_validator;
        pub mod summarizer;
        pub mod table_reader;
    }
    pub mod adapters {
        pub mod history_file;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Analysis, CellValue, DatasetRecord, NumericColumn, Summary};
pub use app::services::analysis::{analyze_csv, analyze_table};
pub use app::services::history_store::HistoryStore;
pub use app::services::report_renderer::{PageLayout, ReportRenderer};
pub use config::Config;

/// Result type alias for the equipment analyzer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for dataset analysis, history and report operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required column is absent after header normalization
    #[error("Missing required column: {column}")]
    Schema { column: String },

    /// The table has a header but no data rows
    #[error("Dataset contains no equipment rows")]
    EmptyDataset,

    /// A numeric column holds a value that is not a number
    #[error("Column '{column}' has non-numeric value '{value}' in row {row}")]
    TypeCoercion {
        column: String,
        row: usize,
        value: String,
    },

    /// No dataset record with this id is stored
    #[error("Dataset not found: id = {id}")]
    NotFound { id: u64 },

    /// CSV parsing error
    #[error("CSV parsing error in '{source_name}': {message}")]
    CsvParsing {
        source_name: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON (de)serialization failed
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },
}

impl Error {
    /// Create a missing column error
    pub fn schema(column: impl Into<String>) -> Self {
        Self::Schema {
            column: column.into(),
        }
    }

    /// Create a type coercion error for a 1-based data row
    pub fn type_coercion(column: impl Into<String>, row: usize, value: impl Into<String>) -> Self {
        Self::TypeCoercion {
            column: column.into(),
            row,
            value: value.into(),
        }
    }

    /// Create a dataset not found error
    pub fn not_found(id: u64) -> Self {
        Self::NotFound { id }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        source_name: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            source_name: source_name.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Whether the error was caused by the uploaded data rather than the environment
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Error::Schema { .. }
                | Error::EmptyDataset
                | Error::TypeCoercion { .. }
                | Error::CsvParsing { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            source_name: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
