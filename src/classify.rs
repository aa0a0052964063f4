//! Row classification
//!
//! A record is valid only when every field predicate holds. There is no
//! partial credit; a record failing any predicate goes to the invalid output.

use crate::record::Record;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").expect("Invalid regex pattern")
});

// `\w` is the full word class (letters, digits, underscore), not letters only.
static COUNTRY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w{2}$").expect("Invalid regex pattern"));

/// A single failed field predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    MalformedTimestamp,
    EmptyDomain,
    EmptyCity,
    MalformedCountry,
    EmptyBrowserVersion,
    EmptyOsVersion,
    EmptyDevice,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedTimestamp => write!(f, "ts is not YYYY-MM-DD HH:MM:SS"),
            Self::EmptyDomain => write!(f, "domain is empty"),
            Self::EmptyCity => write!(f, "city is empty"),
            Self::MalformedCountry => write!(f, "country is not two word characters"),
            Self::EmptyBrowserVersion => write!(f, "browser_version is empty"),
            Self::EmptyOsVersion => write!(f, "os_version is empty"),
            Self::EmptyDevice => write!(f, "device is empty"),
        }
    }
}

/// Outcome of classifying one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Valid,
    Invalid { rejections: Vec<Rejection> },
}

impl Classification {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Check whether a timestamp is exactly `YYYY-MM-DD HH:MM:SS`
pub fn is_valid_timestamp(ts: &str) -> bool {
    TIMESTAMP_REGEX.is_match(ts)
}

/// Check whether a country code is exactly two word characters
pub fn is_valid_country(country: &str) -> bool {
    COUNTRY_REGEX.is_match(country)
}

/// Classify a record, collecting every failed predicate
pub fn classify(record: &Record<'_>) -> Classification {
    let checks = [
        (is_valid_timestamp(record.ts()), Rejection::MalformedTimestamp),
        (!record.domain().is_empty(), Rejection::EmptyDomain),
        (!record.city().is_empty(), Rejection::EmptyCity),
        (is_valid_country(record.country()), Rejection::MalformedCountry),
        (
            !record.browser_version().is_empty(),
            Rejection::EmptyBrowserVersion,
        ),
        (!record.os_version().is_empty(), Rejection::EmptyOsVersion),
        (!record.device().is_empty(), Rejection::EmptyDevice),
    ];

    let rejections: Vec<Rejection> = checks
        .into_iter()
        .filter(|(passed, _)| !passed)
        .map(|(_, rejection)| rejection)
        .collect();

    if rejections.is_empty() {
        Classification::Valid
    } else {
        Classification::Invalid { rejections }
    }
}
