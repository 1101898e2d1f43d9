use std::path::{Path, PathBuf};

use crate::error::MetricsError;
use crate::metrics::types::RunningStats;

/// Recognized section-directory suffixes and the report filename each maps to
const OUTPUT_TARGETS: &[(&str, &str)] = &[
    ("sections/android-packages/", "metricsAndroid.txt"),
    ("sections/cloud-packages/", "metricsCloud.txt"),
];

/// Destination for a scan's report, resolved from the input directory path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputTarget {
    /// The directory-path suffix that selected this target
    pub suffix: &'static str,

    /// Filename the report is written to
    pub file_name: &'static str,
}

impl OutputTarget {
    /// Resolve the output target for an input directory.
    ///
    /// Matching is an exact, case-sensitive suffix comparison after the path
    /// is normalized to a trailing slash. A directory matching neither
    /// recognized suffix is an error; no report file is created for it.
    pub fn resolve(input_dir: impl AsRef<Path>) -> Result<Self, MetricsError> {
        let input_dir = input_dir.as_ref();
        let mut normalized = input_dir.to_string_lossy().into_owned();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }

        OUTPUT_TARGETS
            .iter()
            .find(|(suffix, _)| normalized.ends_with(suffix))
            .map(|&(suffix, file_name)| Self { suffix, file_name })
            .ok_or_else(|| MetricsError::UnmatchedDirectory {
                path: input_dir.to_path_buf(),
            })
    }

    /// Full path of the report file under the given output directory
    pub fn output_path(&self, output_dir: impl AsRef<Path>) -> PathBuf {
        output_dir.as_ref().join(self.file_name)
    }
}

/// Format the report line: maximum, one space, collapsed mean.
///
/// No trailing newline. Whole values keep a trailing `.0` since both
/// accumulators are float-valued.
pub fn format_line(stats: &RunningStats) -> String {
    format!(
        "{} {}",
        format_stat(stats.max_params),
        format_stat(stats.mean_accumulator)
    )
}

fn format_stat(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
