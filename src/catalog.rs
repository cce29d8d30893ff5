// 📚 Catalog - all records plus the household grouping
//
// One load = one sequential pass over a file:
//   line → parse → Record → records list → households[normalized_address]
//
// Loads are all-or-nothing: records are staged while the file is read and
// committed only once every line has parsed. A failed load leaves the catalog
// exactly as it was.

use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::{LoadError, Result};
use crate::parser::parse_record;
use crate::record::Record;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Used when no path (or an empty one) is given
pub const DEFAULT_INPUT_PATH: &str = "input.txt";

// ============================================================================
// LOAD SUMMARY
// ============================================================================

/// Outcome of a successful load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    /// Path actually read (after default substitution)
    pub path: PathBuf,

    /// Records added by this load
    pub records: usize,
}

// ============================================================================
// HOUSEHOLD VIEW
// ============================================================================

/// Borrowed view of one household: its key and occupants in first-seen order
#[derive(Debug, Clone, Copy)]
pub struct Household<'a> {
    address: &'a str,
    members: &'a [usize],
    records: &'a [Record],
}

impl<'a> Household<'a> {
    /// Normalized address shared by every occupant
    pub fn address(&self) -> &'a str {
        self.address
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn occupants(&self) -> impl Iterator<Item = &'a Record> + 'a {
        let members = self.members;
        let records = self.records;
        members.iter().map(move |&i| &records[i])
    }
}

// ============================================================================
// CATALOG
// ============================================================================

pub struct Catalog {
    /// Every record, in file line order
    records: Vec<Record>,

    /// normalized address → indexes into `records`
    households: BTreeMap<String, Vec<usize>>,

    diagnostics: Arc<dyn Diagnostics>,
}

impl Catalog {
    /// Empty catalog that reports failures through `tracing`
    pub fn new() -> Self {
        Self::with_diagnostics(Arc::new(TracingDiagnostics))
    }

    /// Empty catalog that reports failures to the given sink
    pub fn with_diagnostics(diagnostics: Arc<dyn Diagnostics>) -> Self {
        Catalog {
            records: Vec::new(),
            households: BTreeMap::new(),
            diagnostics,
        }
    }

    /// Load every line of a file
    ///
    /// `None` or an empty path reads [`DEFAULT_INPUT_PATH`]. The first bad
    /// line stops the load: later lines are never read. Every failure is
    /// recorded on the diagnostics sink before being returned.
    pub fn load(&mut self, path: Option<&Path>) -> Result<LoadSummary> {
        let path = path
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new(DEFAULT_INPUT_PATH));

        let staged = read_records(path).map_err(|error| {
            self.diagnostics.record(&error);
            error
        })?;

        let summary = LoadSummary {
            path: path.to_path_buf(),
            records: staged.len(),
        };
        for record in staged {
            self.insert(record);
        }

        tracing::debug!(
            path = %summary.path.display(),
            records = summary.records,
            households = self.households.len(),
            "catalog loaded"
        );

        Ok(summary)
    }

    fn insert(&mut self, record: Record) {
        let index = self.records.len();
        self.households
            .entry(record.normalized_address())
            .or_default()
            .push(index);
        self.records.push(record);
    }

    /// All records, in load order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn household_count(&self) -> usize {
        self.households.len()
    }

    /// Households in ascending key order
    pub fn households(&self) -> impl Iterator<Item = Household<'_>> {
        self.households
            .iter()
            .map(move |(address, members)| self.view(address, members))
    }

    /// Look up a household by its normalized address
    pub fn household(&self, normalized_address: &str) -> Option<Household<'_>> {
        self.households
            .get_key_value(normalized_address)
            .map(|(address, members)| self.view(address, members))
    }

    fn view<'a>(&'a self, address: &'a str, members: &'a [usize]) -> Household<'a> {
        Household {
            address,
            members,
            records: &self.records,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// FILE READING
// ============================================================================

/// Read and parse a whole file; the handle is closed on every return path
///
/// Lines end at LF, CR LF or a lone CR. Bytes that are not valid UTF-8
/// become U+FFFD, which address normalization later drops.
fn read_records(path: &Path) -> Result<Vec<Record>> {
    let io_error = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let mut reader = BufReader::new(file);

    let mut records = Vec::new();
    let mut buf = Vec::new();
    let mut line_number = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(io_error)? == 0 {
            break;
        }

        for line in split_lines(&buf) {
            line_number += 1;
            records.push(parse_record(line_number, &String::from_utf8_lossy(line))?);
        }
    }

    Ok(records)
}

/// Lines in a chunk read up to (and including) one LF
///
/// A CR immediately before the LF, or at the very end of the file, only
/// terminates the last line. Any other CR ends a line of its own.
fn split_lines<'a>(chunk: &'a [u8]) -> impl Iterator<Item = &'a [u8]> + 'a {
    let chunk = chunk.strip_suffix(b"\n").unwrap_or(chunk);
    let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);
    chunk.split(|&b| b == b'\r')
}
