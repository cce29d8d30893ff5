// 🏠 Record - One person entry and its household key
//
// "123 Main St., Apt. 4B" and "123 main st apt 4b" are the same household.
// The normalized address is a pure function of (address, city, state).

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Age above which a person appears in the roster
pub const ADULT_AGE: i32 = 18;

// ============================================================================
// RECORD
// ============================================================================

/// Immutable person record as read from one input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    state: String,
    age: i32,
}

impl Record {
    /// Construction never fails: any strings, any age (zero and negative included)
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        age: i32,
    ) -> Self {
        Record {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            city: city.into(),
            state: state.into(),
            age,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    /// Strictly older than [`ADULT_AGE`]
    pub fn is_adult(&self) -> bool {
        self.age > ADULT_AGE
    }

    /// "address, city, state" - components are not trimmed
    pub fn full_address(&self) -> String {
        format!("{}, {}, {}", self.address, self.city, self.state)
    }

    /// Household grouping key
    pub fn normalized_address(&self) -> String {
        normalize_address(&self.full_address())
    }

    /// "First Last, address, City, STATE, age"
    ///
    /// Names and city get only their first character uppercased; the state
    /// is uppercased entirely; the street address is printed as given.
    pub fn display_string(&self) -> String {
        format!(
            "{} {}, {}, {}, {}, {}",
            capitalize(&self.first_name),
            capitalize(&self.last_name),
            self.address,
            capitalize(&self.city),
            self.state.to_uppercase(),
            self.age
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Fold an address into its household key
///
/// Steps, in order:
/// 1. Canonical decomposition (NFD): "é" → "e" + U+0301
/// 2. Drop everything outside 7-bit ASCII (the combining accents go here)
/// 3. Drop ASCII punctuation
/// 4. Collapse whitespace runs to a single space
/// 5. Lowercase
/// 6. Trim
pub fn normalize_address(full_address: &str) -> String {
    let mut folded = String::with_capacity(full_address.len());
    let mut in_whitespace = false;

    for c in full_address.nfd() {
        if !c.is_ascii() || c.is_ascii_punctuation() {
            continue;
        }

        if is_whitespace(c) {
            if !in_whitespace {
                folded.push(' ');
            }
            in_whitespace = true;
        } else {
            folded.push(c.to_ascii_lowercase());
            in_whitespace = false;
        }
    }

    folded.trim_matches(|c: char| c <= ' ').to_string()
}

/// Space, tab, LF, VT, FF, CR
fn is_whitespace(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// Uppercase the first character only ("mcDonald" → "McDonald", not "Mcdonald")
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(address: &str, city: &str, state: &str) -> Record {
        Record::new("jane", "doe", address, city, state, 30)
    }

    #[test]
    fn test_full_address_format() {
        let record = create_test_record(" 1 Elm St ", "Town", "CA");
        assert_eq!(record.full_address(), " 1 Elm St , Town, CA");
    }

    #[test]
    fn test_normalized_address_strips_punctuation_and_case() {
        assert_eq!(
            normalize_address("123 Main St., Apt. 4B, Springfield, IL"),
            normalize_address("123 main st apt 4b springfield il")
        );
        assert_eq!(
            normalize_address("123 Main St., Apt. 4B, Springfield, IL"),
            "123 main st apt 4b springfield il"
        );
    }

    #[test]
    fn test_normalized_address_folds_accents() {
        let accented = create_test_record("12 Rue de la Paix", "Montréal", "QC");
        let plain = create_test_record("12 rue de la paix", "Montreal", "qc");

        assert_eq!(accented.normalized_address(), "12 rue de la paix montreal qc");
        assert_eq!(accented.normalized_address(), plain.normalized_address());
    }

    #[test]
    fn test_normalized_address_drops_non_decomposable_characters() {
        // No ASCII base letter to fall back to
        assert_eq!(normalize_address("Straße 5, Köln, NW"), "strae 5 koln nw");
        assert_eq!(normalize_address("東京 1, Tokyo, JP"), "1 tokyo jp");
    }

    #[test]
    fn test_normalized_address_collapses_whitespace() {
        assert_eq!(
            normalize_address("  1\t\tElm   St ,\r\nTown ,  CA  "),
            "1 elm st town ca"
        );
    }

    #[test]
    fn test_normalized_address_is_idempotent() {
        let inputs = [
            "123 Main St., Apt. 4B, Springfield, IL",
            "  Ünïcödé -- Lane!!, Città, ZZ ",
            "",
            "...,,,",
        ];

        for input in inputs {
            let once = normalize_address(input);
            assert_eq!(normalize_address(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_normalized_address_only_punctuation_is_empty() {
        let record = create_test_record(".", ",", "-");
        assert_eq!(record.normalized_address(), "");
    }

    #[test]
    fn test_display_string_capitalizes_first_letter_only() {
        let record = Record::new("jane", "doe", "1 elm st", "town", "ca", 30);
        assert_eq!(record.display_string(), "Jane Doe, 1 elm st, Town, CA, 30");
        assert_eq!(record.to_string(), record.display_string());
    }

    #[test]
    fn test_display_string_is_not_title_case() {
        let record = Record::new("mary-ann", "mcDONALD", "9 Oak", "new york", "ny", 41);
        assert_eq!(
            record.display_string(),
            "Mary-ann McDONALD, 9 Oak, New york, NY, 41"
        );
    }

    #[test]
    fn test_display_string_empty_fields() {
        let record = Record::new("", "", "", "", "", -3);
        assert_eq!(record.display_string(), " , , , , -3");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize("élise"), "Élise");
        assert_eq!(capitalize("1st"), "1st");
    }

    #[test]
    fn test_is_adult_boundary() {
        assert!(!Record::new("a", "b", "c", "d", "e", 18).is_adult());
        assert!(Record::new("a", "b", "c", "d", "e", 19).is_adult());
        assert!(!Record::new("a", "b", "c", "d", "e", -1).is_adult());
    }

    #[test]
    fn test_record_deserializes_from_json() {
        let record: Record = serde_json::from_str(
            r#"{"first_name":"John","last_name":"Doe","address":"123 Main St.",
                "city":"Springfield","state":"IL","age":25}"#,
        )
        .unwrap();

        assert_eq!(
            record,
            Record::new("John", "Doe", "123 Main St.", "Springfield", "IL", 25)
        );
    }
}
