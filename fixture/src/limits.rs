//! Limits for bounded bundle generation.

/// Generation limits enforced before any records are allocated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureLimits {
    /// Maximum number of records in a single bundle.
    pub max_records: usize,
}

impl Default for FixtureLimits {
    fn default() -> Self {
        Self {
            // Fixtures are meant to stay small; 64K leaves room for scaling studies.
            max_records: 64 * 1024,
        }
    }
}

impl FixtureLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self { max_records: 64 }
    }

    /// Creates limits bounded only by the record id range.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_records: u32::MAX as usize,
        }
    }
}
