use std::path::Path;
use std::fs;
use log::debug;

use crate::error::MetricsError;

/// Check if a file has a specific extension (exact match)
pub fn has_extension(path: impl AsRef<Path>, extension: &str) -> bool {
    let path = path.as_ref();
    if let Some(ext) = path.extension() {
        if let Some(ext_str) = ext.to_str() {
            return ext_str == extension;
        }
    }
    false
}

/// Read a file to a UTF-8 string with path context on failure
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String, MetricsError> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .map_err(|e| MetricsError::filesystem(format!("failed to read file {}", path.display()), e))
}

/// Write a string to a file, truncating any prior contents
pub fn write_string_to_file(path: impl AsRef<Path>, content: &str) -> Result<(), MetricsError> {
    let path = path.as_ref();
    debug!("Writing {} bytes to {}", content.len(), path.display());

    fs::write(path, content)
        .map_err(|e| MetricsError::filesystem(format!("failed to write file {}", path.display()), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_is_exact() {
        assert!(has_extension("sections/foo.xml", "xml"));
        assert!(!has_extension("sections/foo.XML", "xml"));
        assert!(!has_extension("sections/foo.txt", "xml"));
        assert!(!has_extension("sections/xml", "xml"));
    }

    #[test]
    fn write_truncates_previous_contents() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.txt");

        write_string_to_file(&path, "first run with a longer line")?;
        write_string_to_file(&path, "second")?;

        assert_eq!(fs::read_to_string(&path)?, "second");
        Ok(())
    }
}
