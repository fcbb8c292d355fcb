//! Load-overhead measurement for fixgen bundles.
//!
//! This crate provides:
//!
//! - A timing summary for generate/serialize/load runs
//! - Percentile reduction and budget checks for CI regression tracking
//!
//! # Design Principles
//!
//! - **Reproducible** - Bundle size depends only on the record count.
//! - **Measurable** - Output format suitable for CI regression tracking.

use anyhow::Result;
use serde::Serialize;

/// Timing summary written to `summary.json`.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub count: u32,
    pub iterations: u32,
    pub bundle_bytes: u64,
    pub generate_us: u64,
    pub serialize_us: u64,
    pub avg_load_us: u64,
    pub p95_load_us: u64,
    pub max_load_us: u64,
    #[serde(skip)]
    load_us: Vec<u64>,
}

impl Summary {
    pub fn new(count: u32, iterations: u32) -> Self {
        Self {
            count,
            iterations,
            bundle_bytes: 0,
            generate_us: 0,
            serialize_us: 0,
            avg_load_us: 0,
            p95_load_us: 0,
            max_load_us: 0,
            load_us: Vec::with_capacity(iterations as usize),
        }
    }

    pub fn push_load(&mut self, micros: u64) {
        self.load_us.push(micros);
    }

    pub fn finalize(&mut self) {
        if self.load_us.is_empty() {
            return;
        }
        self.load_us.sort_unstable();
        let total: u64 = self.load_us.iter().sum();
        self.avg_load_us = total / self.load_us.len() as u64;
        let idx = ((self.load_us.len() as f64) * 0.95).ceil() as usize;
        let idx = idx.saturating_sub(1).min(self.load_us.len() - 1);
        self.p95_load_us = self.load_us[idx];
        self.max_load_us = self.load_us[self.load_us.len() - 1];
    }

    pub fn assert_budgets(&self, max_p95_us: Option<u64>, max_bytes: Option<u64>) -> Result<()> {
        if let Some(max_p95_us) = max_p95_us {
            if self.p95_load_us > max_p95_us {
                anyhow::bail!(
                    "p95 load time {}us exceeds budget {}us",
                    self.p95_load_us,
                    max_p95_us
                );
            }
        }
        if let Some(max_bytes) = max_bytes {
            if self.bundle_bytes > max_bytes {
                anyhow::bail!(
                    "bundle size {} bytes exceeds budget {}",
                    self.bundle_bytes,
                    max_bytes
                );
            }
        }
        Ok(())
    }
}
