//! Bundle inspection.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use fixture::{validate_bundle, Bundle};
use serde::Serialize;

/// Summary of a serialized bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub name: String,
    pub version: String,
    pub records: usize,
    /// Serialized size as read.
    pub bytes: usize,
    /// Creation time of the first record.
    pub created: Option<String>,
}

/// Parses JSON bytes into a bundle and checks the fixture invariants.
pub fn load_bundle(bytes: &[u8]) -> Result<Bundle> {
    let bundle: Bundle = serde_json::from_slice(bytes).context("parse bundle json")?;
    validate_bundle(&bundle).context("validate bundle")?;
    Ok(bundle)
}

/// Loads a serialized bundle and summarizes it.
pub fn inspect_bundle(bytes: &[u8]) -> Result<InspectReport> {
    let bundle = load_bundle(bytes)?;
    Ok(InspectReport {
        records: bundle.len(),
        bytes: bytes.len(),
        created: bundle
            .get(0)
            .map(|record| record.metadata.created.as_str().to_string()),
        name: bundle.name,
        version: bundle.version,
    })
}

/// Reads a single bundle file and summarizes it.
pub fn inspect_file(path: &Path) -> Result<InspectReport> {
    if path.is_dir() {
        anyhow::bail!("{} is a directory, expected a bundle file", path.display());
    }
    let bytes = fs::read(path).with_context(|| format!("read bundle {}", path.display()))?;
    inspect_bundle(&bytes).with_context(|| format!("inspect {}", path.display()))
}

/// Formats a report as human-readable lines.
pub fn format_inspect_report(report: &InspectReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "bundle: {} v{}", report.name, report.version);
    let _ = writeln!(out, "records: {} ({} bytes)", report.records, report.bytes);
    match &report.created {
        Some(created) => {
            let _ = write!(out, "created: {created}");
        }
        None => out.push_str("created: n/a"),
    }
    out
}
