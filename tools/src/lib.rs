//! Rendering and inspection tools for fixgen bundles.
//!
//! This crate provides the outer surfaces around the fixture generator:
//!
//! - Render a bundle as compact or pretty JSON
//! - Inspect a bundle file and validate them against the fixture invariants
//! - Logging setup shared by the workspace binaries
//!
//! # Design Principles
//!
//! - **Stdout is data** - Diagnostics go to stderr through `tracing`.
//! - **Validate on load** - Bundles read from disk are checked before they are reported.

mod inspect;
mod render;

pub use inspect::{
    format_inspect_report, inspect_bundle, inspect_file, load_bundle, InspectReport,
};
pub use render::{render_bundle, OutputFormat};

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
