use std::path::Path;
use log::{debug, info};

use crate::error::MetricsError;
use crate::metrics::collector::FileCollector;
use crate::metrics::parser::SignatureParser;
use crate::metrics::report::{self, OutputTarget};
use crate::metrics::types::{ElementKind, RunningStats, ScanOptions, ScanReport, ScanSummary};
use crate::utils::file_utils;

/// Aggregator that computes parameter-count metrics for one directory of
/// signature documents and writes the report line.
#[derive(Debug)]
pub struct MetricsAggregator {
    /// Configuration options for scanning
    options: ScanOptions,

    /// File collector for finding signature documents
    collector: FileCollector,

    /// Parser for extracting constructor and method elements
    parser: SignatureParser,
}

impl MetricsAggregator {
    /// Create a new aggregator with the given options
    pub fn new(options: ScanOptions) -> Self {
        Self {
            parser: SignatureParser::new(options.verbose_elements),
            collector: FileCollector::new(),
            options,
        }
    }

    /// Create a new aggregator with default options
    pub fn with_defaults() -> Self {
        Self::new(ScanOptions::default())
    }

    /// Scan one directory and write its report.
    ///
    /// Files are processed strictly in sequence; the accumulation order is
    /// semantically load-bearing, so this is never parallelized. The first
    /// error aborts the run with no report written.
    pub fn run(&self, input_dir: impl AsRef<Path>) -> Result<ScanReport, MetricsError> {
        let input_dir = input_dir.as_ref();
        info!("Scanning directory: {}", input_dir.display());

        // Resolve the destination up front so an unrecognized directory
        // aborts before any parsing work.
        let target = OutputTarget::resolve(input_dir)?;

        let files = self.collector.collect_files(input_dir)?;
        info!("Found {} files to process", files.len());

        let mut stats = RunningStats::new();
        let mut summary = ScanSummary::new();

        for file in &files {
            self.process_file(file, &mut stats, &mut summary)?;
        }

        let output_path = target.output_path(&self.options.output_dir);
        let line = report::format_line(&stats);
        file_utils::write_string_to_file(&output_path, &line)?;

        info!(
            "Processed {} files ({} constructors, {} methods), wrote report to {}",
            summary.total_files,
            summary.total_constructors,
            summary.total_methods,
            output_path.display()
        );

        Ok(ScanReport {
            stats,
            summary,
            output_path,
        })
    }

    /// Accumulate one file's elements into the running stats.
    ///
    /// `max_params` and `mean_accumulator` persist across files, while the
    /// element count is reset here, so it only ever reflects the current
    /// file. After every method (and only methods) the accumulator is
    /// collapsed into a running mean; that per-method collapse is legacy
    /// behavior and is deliberately left uncorrected.
    pub fn process_file(
        &self,
        path: impl AsRef<Path>,
        stats: &mut RunningStats,
        summary: &mut ScanSummary,
    ) -> Result<(), MetricsError> {
        let path = path.as_ref();
        let elements = self.parser.parse_file(path)?;

        stats.element_count = 0;

        for element in &elements {
            stats.observe(element.param_count);

            match element.kind {
                ElementKind::Constructor => {
                    summary.total_constructors += 1;
                }
                ElementKind::Method => {
                    summary.total_methods += 1;
                    if !stats.try_collapse() {
                        return Err(MetricsError::DivisionByZero {
                            path: path.to_path_buf(),
                        });
                    }
                }
            }
        }

        summary.total_files += 1;
        if elements.is_empty() {
            summary.empty_files += 1;
        } else {
            summary.files_with_elements += 1;
        }

        debug!(
            "Accumulated {} elements from {} (max {}, mean accumulator {})",
            elements.len(),
            path.display(),
            stats.max_params,
            stats.mean_accumulator
        );

        Ok(())
    }

    /// Get the options this aggregator was created with
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }
}
