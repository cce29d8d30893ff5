// 🏗️ Line Parser - quoted fields → Record
//
// Input format: one record per line, six double-quoted fields:
//   "John" "Doe" "123 Main St." "Springfield" "IL" "25"
// Only the quoted spans matter. Separators between them are ignored and a
// quote can never appear inside a field (there is no escape syntax).

use crate::error::{LoadError, Result};
use crate::record::Record;
use once_cell::sync::Lazy;
use regex::Regex;

/// first name, last name, address, city, state, age
pub const FIELD_COUNT: usize = 6;

static QUOTED_FIELD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]*)""#).expect("quoted field pattern is valid"));

/// Every `"..."` span in the line, left to right, without the quotes
///
/// An unterminated trailing quote contributes no field.
pub fn parse_quoted_fields(line: &str) -> Vec<&str> {
    QUOTED_FIELD
        .captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Parse one input line (`line_number` is 1-based, for diagnostics)
pub fn parse_record(line_number: usize, line: &str) -> Result<Record> {
    let fields = parse_quoted_fields(line);

    if fields.len() != FIELD_COUNT {
        return Err(LoadError::FieldCount {
            line_number,
            line: line.to_string(),
            count: fields.len(),
        });
    }

    let raw_age = fields[5];
    let age = raw_age.parse::<i32>().map_err(|source| LoadError::InvalidAge {
        line_number,
        value: raw_age.to_string(),
        source,
    })?;

    Ok(Record::new(fields[0], fields[1], fields[2], fields[3], fields[4], age))
}
