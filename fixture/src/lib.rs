//! Synthetic record bundles for performance fixtures.
//!
//! This crate produces the fixture a performance suite loads to measure
//! bundling and loading overhead:
//! - Record and bundle model (`id`, `name`, `description`, `metadata`)
//! - Index-to-record generation with a single time-source read per bundle
//! - A process-wide default bundle of ten records
//! - Invariant validation for bundles read back from disk
//!
//! # Design Principles
//!
//! - **Predictable size** - Every field except the timestamps is a pure function of the index.
//! - **Injected time** - Timestamps come from a [`TimeSource`], so tests can pin them.
//! - **Bounded generation** - Counts are checked against [`FixtureLimits`] before allocating.

mod clock;
mod error;
mod generate;
mod limits;
mod types;

pub use clock::{FixedClock, SystemClock, TimeSource};
pub use error::{FixtureError, FixtureResult};
pub use generate::{default_bundle, generate, generate_with, record_at, validate_bundle};
pub use limits::FixtureLimits;
pub use types::{
    Bundle, Metadata, Record, Timestamp, DEFAULT_RECORD_COUNT, DESCRIPTION, FIXTURE_NAME,
    FIXTURE_VERSION,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = FixtureLimits::default();
        let _ = SystemClock;
        let _ = FixedClock::new("2026-10-19T00:00:00.000Z");
        let _ = record_at(0, &Timestamp::new("2026-10-19T00:00:00.000Z"));
        let _ = DEFAULT_RECORD_COUNT;

        // Error types
        let _: FixtureResult<()> = Ok(());
    }

    #[test]
    fn constants_match_fixture_contract() {
        assert_eq!(DEFAULT_RECORD_COUNT, 10);
        assert_eq!(
            DESCRIPTION,
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit."
        );
        assert_eq!(FIXTURE_VERSION.split('.').count(), 3);
    }
}
