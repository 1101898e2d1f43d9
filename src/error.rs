use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning a directory of signature documents.
///
/// None of these are recovered from internally: the first error aborts the
/// whole run and no (further) output is written.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// A file was not well-formed XML
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    /// The input directory matches none of the recognized section suffixes
    #[error("input directory matches no recognized section: {}", path.display())]
    UnmatchedDirectory { path: PathBuf },

    /// A mean collapse was attempted while the element count was zero
    #[error("mean collapse with zero elements while processing {}", path.display())]
    DivisionByZero { path: PathBuf },

    /// Directory listing, file read or report write failed
    #[error("{context}: {source}")]
    Filesystem {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl MetricsError {
    /// Wrap an I/O error with a human-readable context line
    pub(crate) fn filesystem(context: impl Into<String>, source: io::Error) -> Self {
        Self::Filesystem {
            context: context.into(),
            source,
        }
    }
}
