//! Bundle and record types.

use std::fmt;

/// Name carried by every generated bundle.
pub const FIXTURE_NAME: &str = "perf-fixture";

/// Semantic version carried by every generated bundle.
pub const FIXTURE_VERSION: &str = "1.0.0";

/// Description shared by every record.
pub const DESCRIPTION: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";

/// Number of records in the default bundle.
pub const DEFAULT_RECORD_COUNT: u32 = 10;

/// An RFC 3339 UTC timestamp string, e.g. `2026-10-19T12:00:00.000Z`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp(String);

impl Timestamp {
    /// Wraps a timestamp string without validating it.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the timestamp string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the value parses as RFC 3339.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        chrono::DateTime::parse_from_rfc3339(&self.0).is_ok()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Creation and modification times of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    pub created: Timestamp,
    pub modified: Timestamp,
}

/// One synthetic data item.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Zero-based position in the bundle.
    pub id: u32,
    /// `"Item {id}"`.
    pub name: String,
    pub description: String,
    pub metadata: Metadata,
}

/// A named, versioned sequence of records.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bundle {
    pub name: String,
    pub version: String,
    /// Records ordered by id.
    pub data: Vec<Record>,
}

impl Bundle {
    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the bundle has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the records in id order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.data
    }

    /// Returns the record at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.data.get(index)
    }
}
