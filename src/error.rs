// ⚠️ Load errors - every way a load can fail

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    /// The input file could not be opened or read
    #[error("Error reading file: {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line did not contain exactly six quoted fields
    #[error("Invalid data: {line} parts count:{count}")]
    FieldCount {
        line_number: usize,
        line: String,
        count: usize,
    },

    /// The sixth field was not a base-10 integer
    #[error("Error parsing integer: {value:?} on line {line_number}: {source}")]
    InvalidAge {
        line_number: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl LoadError {
    /// Input line the error refers to (1-based), if any
    pub fn line_number(&self) -> Option<usize> {
        match self {
            LoadError::Io { .. } => None,
            LoadError::FieldCount { line_number, .. } => Some(*line_number),
            LoadError::InvalidAge { line_number, .. } => Some(*line_number),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
