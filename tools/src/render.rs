//! Bundle serialization.

use anyhow::{Context, Result};
use fixture::Bundle;

/// JSON layout for rendered bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Single-line JSON, the size a loader actually reads.
    #[default]
    Json,
    /// Indented JSON for humans.
    Pretty,
}

/// Serializes a bundle to JSON.
pub fn render_bundle(bundle: &Bundle, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(bundle),
        OutputFormat::Pretty => serde_json::to_string_pretty(bundle),
    };
    rendered.context("serialize bundle")
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixture::{generate_with, FixedClock, FixtureLimits};

    fn bundle(count: i64) -> Bundle {
        let clock = FixedClock::new("2026-10-19T12:00:00.000Z");
        generate_with(count, &FixtureLimits::default(), &clock).unwrap()
    }

    #[test]
    fn json_shape() {
        let json = render_bundle(&bundle(1), OutputFormat::Json).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"name":"perf-fixture","version":"1.0.0","data":[{"id":0,"name":"Item 0","#,
                r#""description":"Lorem ipsum dolor sit amet, consectetur adipiscing elit.","#,
                r#""metadata":{"created":"2026-10-19T12:00:00.000Z","#,
                r#""modified":"2026-10-19T12:00:00.000Z"}}]}"#
            )
        );
    }

    #[test]
    fn empty_bundle_keeps_name_and_version() {
        let json = render_bundle(&bundle(0), OutputFormat::Json).unwrap();
        assert_eq!(json, r#"{"name":"perf-fixture","version":"1.0.0","data":[]}"#);
    }

    #[test]
    fn pretty_is_multiline_and_equivalent() {
        let bundle = bundle(3);
        let pretty = render_bundle(&bundle, OutputFormat::Pretty).unwrap();
        assert!(pretty.lines().count() > 1);
        let parsed: Bundle = serde_json::from_str(&pretty).unwrap();
        assert_eq!(parsed, bundle);
    }

    #[test]
    fn size_is_stable_for_fixed_clock() {
        let a = render_bundle(&bundle(10), OutputFormat::Json).unwrap();
        let b = render_bundle(&bundle(10), OutputFormat::Json).unwrap();
        assert_eq!(a.len(), b.len());
    }
}
