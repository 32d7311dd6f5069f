//! Report module: training summaries and their export.

pub mod exporter;
pub mod summary;

pub use exporter::{export_summaries, ExportError, OutputFormat, SummaryExporter};
pub use summary::Summary;
