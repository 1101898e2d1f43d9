use std::path::PathBuf;
use serde::{Serialize, Deserialize};

/// Kind of callable element extracted from a signature document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    Constructor,
    Method,
}

/// One constructor or method element extracted from a parsed document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceElement {
    /// Whether this element is a constructor or a method
    pub kind: ElementKind,

    /// Number of `parameter` elements found anywhere beneath it
    pub param_count: usize,
}

/// Running accumulators for one directory scan.
///
/// `max_params` and `mean_accumulator` persist across every file of the scan;
/// `element_count` is overwritten per file (reset before a file's elements are
/// accumulated). The per-method mean collapse divides `mean_accumulator` by
/// `element_count` after every single method, so the final value depends on
/// file boundaries and processing order. That legacy behavior is preserved
/// exactly; the result is not a true corpus-wide mean.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningStats {
    /// Largest parameter count seen so far, monotonically non-decreasing
    pub max_params: f64,

    /// Running sum of parameter counts, collapsed after every method
    pub mean_accumulator: f64,

    /// Constructor+method elements seen in the current file
    pub element_count: usize,
}

impl RunningStats {
    /// Create a new stats instance with all accumulators at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one element's parameter count
    pub fn observe(&mut self, param_count: usize) {
        let count = param_count as f64;
        self.mean_accumulator += count;
        if self.max_params < count {
            self.max_params = count;
        }
        self.element_count += 1;
    }

    /// Collapse the accumulator into a running mean.
    ///
    /// Returns false instead of dividing when the element count is zero.
    #[must_use]
    pub fn try_collapse(&mut self) -> bool {
        if self.element_count == 0 {
            return false;
        }
        self.mean_accumulator /= self.element_count as f64;
        true
    }
}

/// Statistics about the scanning process, for summary logging
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Total number of files processed
    pub total_files: usize,

    /// Number of files containing at least one constructor or method
    pub files_with_elements: usize,

    /// Number of files containing no constructor or method elements
    pub empty_files: usize,

    /// Total number of constructor elements seen
    pub total_constructors: usize,

    /// Total number of method elements seen
    pub total_methods: usize,
}

impl ScanSummary {
    /// Create a new summary instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of constructor+method elements seen
    pub fn total_elements(&self) -> usize {
        self.total_constructors + self.total_methods
    }

    /// Average number of elements per file that had any
    pub fn avg_elements_per_file(&self) -> f64 {
        if self.files_with_elements == 0 {
            return 0.0;
        }

        self.total_elements() as f64 / self.files_with_elements as f64
    }
}

/// Configuration options for a directory scan
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Whether to log each element as it is accumulated
    pub verbose_elements: bool,

    /// Directory the recognized report filenames are rooted in
    pub output_dir: PathBuf,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            verbose_elements: false,
            output_dir: PathBuf::from("."),
        }
    }
}

/// Result of one directory scan
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// The final accumulators after the last file was processed
    pub stats: RunningStats,

    /// Statistics about the scanning process
    pub summary: ScanSummary,

    /// Path of the report file that was written
    pub output_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn observe_tracks_maximum_and_sum() {
        let mut stats = RunningStats::new();
        stats.observe(3);
        stats.observe(1);
        stats.observe(5);

        assert_eq!(stats.max_params, 5.0);
        assert_eq!(stats.mean_accumulator, 9.0);
        assert_eq!(stats.element_count, 3);
    }

    #[test]
    fn maximum_never_decreases() {
        let mut stats = RunningStats::new();
        stats.observe(4);
        stats.observe(0);
        stats.observe(2);

        assert_eq!(stats.max_params, 4.0);
    }

    #[test]
    fn collapse_divides_by_element_count() {
        let mut stats = RunningStats::new();
        stats.observe(2);
        stats.observe(4);

        assert!(stats.try_collapse());
        assert_eq!(stats.mean_accumulator, 3.0);
        // the count itself is untouched by a collapse
        assert_eq!(stats.element_count, 2);
    }

    #[test]
    fn collapse_refuses_zero_count() {
        let mut stats = RunningStats::new();
        stats.mean_accumulator = 7.0;

        assert!(!stats.try_collapse());
        assert_eq!(stats.mean_accumulator, 7.0);
    }

    #[test]
    fn summary_average_handles_no_files() {
        let summary = ScanSummary::new();
        assert_eq!(summary.avg_elements_per_file(), 0.0);
    }

    #[test]
    fn summary_counts_elements() {
        let summary = ScanSummary {
            total_files: 3,
            files_with_elements: 2,
            empty_files: 1,
            total_constructors: 2,
            total_methods: 4,
        };

        assert_eq!(summary.total_elements(), 6);
        assert_eq!(summary.avg_elements_per_file(), 3.0);
    }
}
