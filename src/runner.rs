//! Batch runner: turns sensor packages into written summaries.
//!
//! Packages are processed in order. Each one is dispatched, summarized and
//! handed to the exporter before the next is read.

use crate::report::exporter::{ExportError, OutputFormat, SummaryExporter};
use crate::report::summary::Summary;
use crate::workouts::dispatcher::read_package;
use crate::workouts::types::WorkoutError;
use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;

/// One raw sensor package: a workout type code and positional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Workout type code (`SWM`, `RUN`, `WLK`)
    pub code: String,
    /// Positional values in the order the workout type expects
    pub data: Vec<f64>,
}

impl Package {
    /// Create a package.
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }

    /// Dispatch the package and build its summary.
    pub fn summarize(&self) -> Result<Summary, WorkoutError> {
        let training = read_package(&self.code, &self.data)?;
        Ok(training.show_training_info())
    }
}

/// Built-in sample batch: one package per workout type.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// What to do when a package cannot be turned into a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop the batch at the first faulty package
    #[default]
    Abort,
    /// Log the fault, record it and continue with the next package
    Skip,
}

/// A package that failed while the batch continued.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageFailure {
    /// Position of the package in the batch
    pub index: usize,
    /// Workout type code of the package
    pub code: String,
    /// Why the package failed
    pub error: WorkoutError,
}

/// Outcome of a completed batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Summaries written, in input order
    pub summaries: Vec<Summary>,
    /// Packages skipped under [`FailurePolicy::Skip`]
    pub failures: Vec<PackageFailure>,
}

impl BatchReport {
    /// Number of summaries written.
    pub fn written(&self) -> usize {
        self.summaries.len()
    }

    /// Whether every package produced a summary.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Errors that stop a batch.
#[derive(Debug, Error)]
pub enum RunError {
    /// A package could not be turned into a summary
    #[error("Package {index} ({code}) failed: {source}")]
    Workout {
        index: usize,
        code: String,
        #[source]
        source: WorkoutError,
    },

    /// Writing a summary failed
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

/// Runs batches of packages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Runner {
    format: OutputFormat,
    policy: FailurePolicy,
}

impl Runner {
    /// Create a runner.
    pub fn new(format: OutputFormat, policy: FailurePolicy) -> Self {
        Self { format, policy }
    }

    /// Output format used for summaries.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Failure policy applied to faulty packages.
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Process `packages` in order, writing each summary to `out`.
    pub fn run<W: Write>(&self, packages: &[Package], out: W) -> Result<BatchReport, RunError> {
        let mut exporter = SummaryExporter::new(out, self.format);
        let mut report = BatchReport::default();

        tracing::info!(
            "Processing {} packages ({} output, {:?} on failure)",
            packages.len(),
            self.format,
            self.policy
        );

        for (index, package) in packages.iter().enumerate() {
            let summary = match package.summarize() {
                Ok(summary) => summary,
                Err(error) => match self.policy {
                    FailurePolicy::Abort => {
                        return Err(RunError::Workout {
                            index,
                            code: package.code.clone(),
                            source: error,
                        });
                    }
                    FailurePolicy::Skip => {
                        tracing::error!("Skipping package {} ({}): {}", index, package.code, error);
                        report.failures.push(PackageFailure {
                            index,
                            code: package.code.clone(),
                            error,
                        });
                        continue;
                    }
                },
            };

            exporter.write(&summary)?;
            report.summaries.push(summary);
        }

        exporter.flush()?;

        tracing::info!(
            "Batch finished: {} written, {} skipped",
            report.written(),
            report.failures.len()
        );

        Ok(report)
    }
}
