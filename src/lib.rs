pub mod error;
pub mod grammar;
pub mod parsers;
pub mod report;
pub mod time;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export for easy access
pub use error::Error;
pub use grammar::LogFormat;
pub use parsers::{parse, parse_bytes, LogRecord};
pub use report::ReportAggregator;
