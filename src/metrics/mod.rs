pub mod types;
pub mod collector;
pub mod parser;
pub mod aggregator;
pub mod report;

// Re-export the main API for easier access
pub use aggregator::MetricsAggregator;
pub use collector::FileCollector;
pub use parser::SignatureParser;
pub use report::OutputTarget;
pub use types::{RunningStats, ScanOptions, ScanReport, ScanSummary};
