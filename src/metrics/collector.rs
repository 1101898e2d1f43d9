use std::path::{Path, PathBuf};
use log::{debug, trace};
use walkdir::WalkDir;

use crate::error::MetricsError;
use crate::utils::file_utils;

/// File collector for finding signature documents in a directory
#[derive(Debug)]
pub struct FileCollector {
    /// File extension to collect
    extension: String,
}

impl Default for FileCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FileCollector {
    /// Create a new collector for `.xml` documents
    pub fn new() -> Self {
        Self {
            extension: "xml".to_string(),
        }
    }

    /// Collect every matching file directly inside the input directory.
    ///
    /// The listing is non-recursive and is returned in whatever order the
    /// filesystem yields it; no sorting is applied. An unreadable directory
    /// aborts with a filesystem error before any file is processed.
    pub fn collect_files(&self, input_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, MetricsError> {
        let input_dir = input_dir.as_ref();
        debug!("Collecting .{} files from directory: {}", self.extension, input_dir.display());

        let mut files = Vec::new();

        for entry in WalkDir::new(input_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = entry.map_err(|e| {
                MetricsError::filesystem(
                    format!("failed to list directory {}", input_dir.display()),
                    e.into(),
                )
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            if file_utils::has_extension(entry.path(), &self.extension) {
                trace!("Found file: {}", entry.path().display());
                files.push(entry.path().to_owned());
            }
        }

        debug!("Collected {} files for processing", files.len());
        Ok(files)
    }

    /// Get the extension this collector matches
    pub fn extension(&self) -> &str {
        &self.extension
    }
}
