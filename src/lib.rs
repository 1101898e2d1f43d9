pub mod error;
pub mod metrics;
pub mod utils;

// Re-export main types and functions for easier access
pub use error::MetricsError;
pub use metrics::aggregator::MetricsAggregator;
pub use metrics::collector::FileCollector;
pub use metrics::parser::SignatureParser;
pub use metrics::report::OutputTarget;
pub use metrics::types::{
    ElementKind, RunningStats, ScanOptions, ScanReport, ScanSummary, SourceElement,
};

// Re-export utility functions
pub use utils::file_utils;
