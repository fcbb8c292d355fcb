//! Bundle generation and validation.

use std::sync::OnceLock;

use crate::clock::{SystemClock, TimeSource};
use crate::error::{FixtureError, FixtureResult};
use crate::limits::FixtureLimits;
use crate::types::{
    Bundle, Metadata, Record, Timestamp, DEFAULT_RECORD_COUNT, DESCRIPTION, FIXTURE_NAME,
    FIXTURE_VERSION,
};

/// Generates a bundle of `count` records stamped with the current wall-clock time.
///
/// A negative `count` fails with [`FixtureError::InvalidArgument`].
pub fn generate(count: i64) -> FixtureResult<Bundle> {
    generate_with(count, &FixtureLimits::default(), &SystemClock)
}

/// Generates a bundle of `count` records using explicit limits and time source.
///
/// The time source is read exactly once; every record shares that value for
/// both `created` and `modified`.
pub fn generate_with<C>(count: i64, limits: &FixtureLimits, clock: &C) -> FixtureResult<Bundle>
where
    C: TimeSource + ?Sized,
{
    let requested = usize::try_from(count).map_err(|_| FixtureError::InvalidArgument { count })?;
    let limit = limits.max_records.min(u32::MAX as usize);
    if requested > limit {
        return Err(FixtureError::LimitsExceeded {
            limit,
            actual: requested,
        });
    }
    let count = u32::try_from(requested).map_err(|_| FixtureError::LimitsExceeded {
        limit,
        actual: requested,
    })?;

    let now = clock.now();
    let bundle = build_bundle(count, &now);
    tracing::debug!(records = count, timestamp = %now, "generated fixture bundle");
    Ok(bundle)
}

/// Builds the record at `index`.
#[must_use]
pub fn record_at(index: u32, timestamp: &Timestamp) -> Record {
    Record {
        id: index,
        name: format!("Item {index}"),
        description: DESCRIPTION.to_string(),
        metadata: Metadata {
            created: timestamp.clone(),
            modified: timestamp.clone(),
        },
    }
}

/// Returns the process-wide default bundle of [`DEFAULT_RECORD_COUNT`] records.
///
/// Built on first access and immutable afterwards.
pub fn default_bundle() -> &'static Bundle {
    static DEFAULT: OnceLock<Bundle> = OnceLock::new();
    DEFAULT.get_or_init(|| build_bundle(DEFAULT_RECORD_COUNT, &SystemClock.now()))
}

/// Checks a bundle against the fixture invariants, reporting the first violation.
pub fn validate_bundle(bundle: &Bundle) -> FixtureResult<()> {
    let result = check_bundle(bundle);
    match &result {
        Ok(()) => tracing::debug!(records = bundle.len(), "fixture bundle valid"),
        Err(err) => tracing::warn!(error = %err, "fixture bundle invalid"),
    }
    result
}

fn check_bundle(bundle: &Bundle) -> FixtureResult<()> {
    if bundle.name != FIXTURE_NAME {
        return Err(FixtureError::UnexpectedName {
            found: bundle.name.clone(),
        });
    }
    if bundle.version != FIXTURE_VERSION {
        return Err(FixtureError::UnexpectedVersion {
            found: bundle.version.clone(),
        });
    }
    for (index, record) in bundle.data.iter().enumerate() {
        if usize::try_from(record.id).ok() != Some(index) {
            return Err(FixtureError::IdMismatch {
                index,
                found: record.id,
            });
        }
        if record.name != format!("Item {}", record.id) {
            return Err(FixtureError::NameMismatch {
                index,
                found: record.name.clone(),
            });
        }
        if record.description != DESCRIPTION {
            return Err(FixtureError::DescriptionMismatch { index });
        }
        for ts in [&record.metadata.created, &record.metadata.modified] {
            if !ts.is_valid() {
                return Err(FixtureError::InvalidTimestamp {
                    index,
                    value: ts.as_str().to_string(),
                });
            }
        }
    }
    Ok(())
}

fn build_bundle(count: u32, now: &Timestamp) -> Bundle {
    Bundle {
        name: FIXTURE_NAME.to_string(),
        version: FIXTURE_VERSION.to_string(),
        data: (0..count).map(|index| record_at(index, now)).collect(),
    }
}
