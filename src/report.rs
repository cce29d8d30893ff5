// 📊 Reports - household occupancy and the adult roster

use crate::catalog::Catalog;
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

pub const HOUSEHOLDS_HEADER: &str = "Households and number of occupants:";
pub const ROSTER_HEADER: &str = "Occupants older than 18, sorted by last name then first name:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdCount {
    pub address: String,
    pub occupants: usize,
}

/// One entry per household, in the catalog's key order
pub fn household_counts(catalog: &Catalog) -> Vec<HouseholdCount> {
    catalog
        .households()
        .map(|household| HouseholdCount {
            address: household.address().to_string(),
            occupants: household.len(),
        })
        .collect()
}

/// Records older than 18, by last name then first name
///
/// Byte-wise, case-sensitive comparison. The sort is stable, so full-name
/// ties keep their load order.
pub fn adult_roster(catalog: &Catalog) -> Vec<&Record> {
    let mut roster: Vec<&Record> = catalog
        .records()
        .iter()
        .filter(|record| record.is_adult())
        .collect();

    roster.sort_by(|a, b| {
        a.last_name()
            .cmp(b.last_name())
            .then_with(|| a.first_name().cmp(b.first_name()))
    });

    roster
}

/// Household counts, a blank line, then the roster
pub fn write_report<W: Write>(catalog: &Catalog, mut out: W) -> io::Result<()> {
    writeln!(out, "{}", HOUSEHOLDS_HEADER)?;
    for count in household_counts(catalog) {
        writeln!(out, "{}: {}", count.address, count.occupants)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", ROSTER_HEADER)?;
    for record in adult_roster(catalog) {
        writeln!(out, "{}", record)?;
    }

    out.flush()
}
