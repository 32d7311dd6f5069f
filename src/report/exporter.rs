//! Summary export in text, JSON lines and CSV formats.

use crate::report::summary::Summary;
use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;

/// CSV column header.
const CSV_HEADER: &str = "training_type,duration_h,distance_km,speed_kmh,calories";

/// Output format for training summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable report line per summary
    #[default]
    Text,
    /// One JSON object per line
    Json,
    /// Header row followed by one row per summary
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

/// Errors that can occur while exporting summaries.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to write to the output stream
    #[error("Failed to write data: {0}")]
    WriteFailed(#[from] std::io::Error),

    /// Failed to serialize a summary
    #[error("Failed to serialize summary: {0}")]
    SerializeFailed(#[from] serde_json::Error),
}

/// Writes summaries to an output stream one at a time.
pub struct SummaryExporter<W: Write> {
    out: W,
    format: OutputFormat,
    header_written: bool,
}

impl<W: Write> SummaryExporter<W> {
    /// Create an exporter writing to `out`.
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            header_written: false,
        }
    }

    /// Output format in use.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write one summary.
    pub fn write(&mut self, summary: &Summary) -> Result<(), ExportError> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", summary)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, summary)?;
                writeln!(self.out)?;
            }
            OutputFormat::Csv => {
                if !self.header_written {
                    writeln!(self.out, "{}", CSV_HEADER)?;
                    self.header_written = true;
                }
                writeln!(
                    self.out,
                    "{},{:.3},{:.3},{:.3},{:.3}",
                    summary.training_type(),
                    summary.duration(),
                    summary.distance(),
                    summary.speed(),
                    summary.calories(),
                )?;
            }
        }
        Ok(())
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> Result<(), ExportError> {
        self.out.flush()?;
        Ok(())
    }

    /// Consume the exporter and return the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Export a list of summaries to a string.
pub fn export_summaries(summaries: &[Summary], format: OutputFormat) -> Result<String, ExportError> {
    let mut exporter = SummaryExporter::new(Vec::new(), format);
    for summary in summaries {
        exporter.write(summary)?;
    }
    Ok(String::from_utf8_lossy(&exporter.into_inner()).into_owned())
}
