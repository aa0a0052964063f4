//! Impression record schema
//!
//! The source header names seven fields. Output files reuse a fixed header
//! that renames `ts` to `date_time` but keeps the same positional order.

use csv::StringRecord;

/// Number of columns every source header must declare
pub const EXPECTED_COLUMNS: usize = 7;

/// Source field keys in canonical order
pub const SOURCE_FIELDS: [&str; EXPECTED_COLUMNS] = [
    "ts",
    "domain",
    "city",
    "country",
    "browser_version",
    "os_version",
    "device",
];

/// Header written to both output files
pub const OUTPUT_HEADER: [&str; EXPECTED_COLUMNS] = [
    "date_time",
    "domain",
    "city",
    "country",
    "browser_version",
    "os_version",
    "device",
];

/// Maps each canonical field to its column position in the source header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderProjection {
    positions: [usize; EXPECTED_COLUMNS],
}

impl HeaderProjection {
    /// Build a projection from a header, returning the canonical keys it lacks
    ///
    /// Names are matched exactly; `TS` does not satisfy `ts`.
    pub fn from_header(header: &StringRecord) -> Result<Self, Vec<&'static str>> {
        let mut positions = [0usize; EXPECTED_COLUMNS];
        let mut missing = Vec::new();

        for (slot, key) in SOURCE_FIELDS.iter().enumerate() {
            match header.iter().position(|name| name == *key) {
                Some(index) => positions[slot] = index,
                None => missing.push(*key),
            }
        }

        if missing.is_empty() {
            Ok(Self { positions })
        } else {
            Err(missing)
        }
    }

    /// Project a raw source row into a record in canonical field order
    ///
    /// Returns `None` when the row is too short to hold every mapped column.
    pub fn project<'a>(&self, row: &'a StringRecord) -> Option<Record<'a>> {
        let mut fields = [""; EXPECTED_COLUMNS];
        for (slot, &index) in self.positions.iter().enumerate() {
            fields[slot] = row.get(index)?;
        }
        Some(Record { fields })
    }
}

impl Default for HeaderProjection {
    fn default() -> Self {
        Self {
            positions: [0, 1, 2, 3, 4, 5, 6],
        }
    }
}

/// One impression row, borrowed from the source record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    fields: [&'a str; EXPECTED_COLUMNS],
}

impl<'a> Record<'a> {
    /// Build a record from values already in canonical order
    pub fn new(fields: [&'a str; EXPECTED_COLUMNS]) -> Self {
        Self { fields }
    }

    pub fn ts(&self) -> &'a str {
        self.fields[0]
    }

    pub fn domain(&self) -> &'a str {
        self.fields[1]
    }

    pub fn city(&self) -> &'a str {
        self.fields[2]
    }

    pub fn country(&self) -> &'a str {
        self.fields[3]
    }

    pub fn browser_version(&self) -> &'a str {
        self.fields[4]
    }

    pub fn os_version(&self) -> &'a str {
        self.fields[5]
    }

    pub fn device(&self) -> &'a str {
        self.fields[6]
    }

    /// Field values in output column order
    pub fn values(&self) -> &[&'a str; EXPECTED_COLUMNS] {
        &self.fields
    }
}
