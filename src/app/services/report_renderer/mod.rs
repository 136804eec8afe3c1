//! Paginated report rendering for stored datasets
//!
//! A report is produced in two strictly separate steps:
//!
//! 1. [`lines`] materializes the full sequence of styled text lines for one
//!    dataset record (title, file metadata, summary, type distribution).
//! 2. [`pagination`] places those lines onto fixed-size pages. Every line has
//!    the same height, so page breaks depend only on the line count and the
//!    [`PageLayout`], never on line content.
//!
//! The resulting [`RenderedReport`] is handed to a [`PageSink`], the seam to
//! whatever draws the final document. [`PlainTextSink`] writes pages as text.
//!
//! # Example Usage
//!
//! ```rust
//! use equipment_analyzer::app::models::NewDataset;
//! use equipment_analyzer::app::services::report_renderer::PlainTextSink;
//! use equipment_analyzer::{HistoryStore, PageLayout, ReportRenderer, analyze_csv};
//!
//! # fn example() -> equipment_analyzer::Result<()> {
//! let csv = "Equipment Name,Type,Flowrate,Pressure,Temperature\nP-1,Pump,10,2,80\n";
//! let analysis = analyze_csv(csv.as_bytes(), "plant.csv")?;
//! let store = HistoryStore::new();
//! let id = store.insert(NewDataset::new("plant.csv", analysis.summary));
//!
//! let renderer = ReportRenderer::new(PageLayout::default());
//! let report = renderer.render(&store.get(id)?);
//!
//! let mut sink = PlainTextSink::new(Vec::new());
//! report.draw_to(&mut sink)?;
//! # Ok(())
//! # }
//! ```

pub mod layout;
pub mod lines;
pub mod pagination;
pub mod renderer;
pub mod sink;

#[cfg(test)]
pub mod tests;

pub use layout::PageLayout;
pub use lines::{FontHint, FontWeight, LineStyle, ReportLine, report_lines};
pub use pagination::{Page, PlacedLine, paginate};
pub use renderer::{RenderedReport, ReportRenderer};
pub use sink::{PageSink, PlainTextSink};
