// Household Roster - Core Library
// Exposes the record model, loader and reports for the CLI and tests

pub mod catalog;
pub mod diagnostics;
pub mod error;
pub mod parser;
pub mod record;
pub mod report;

// Re-export commonly used types
pub use catalog::{Catalog, Household, LoadSummary, DEFAULT_INPUT_PATH};
pub use diagnostics::{Diagnostics, MemoryDiagnostics, TracingDiagnostics};
pub use error::LoadError;
pub use parser::{parse_quoted_fields, parse_record, FIELD_COUNT};
pub use record::{normalize_address, Record, ADULT_AGE};
pub use report::{adult_roster, household_counts, write_report, HouseholdCount};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
