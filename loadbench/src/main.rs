use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use loadbench::Summary;
use tools::{load_bundle, render_bundle, OutputFormat};

#[derive(Parser)]
#[command(
    name = "loadbench",
    version,
    about = "fixgen bundle load-overhead benchmark"
)]
struct Cli {
    /// Number of records in the bundle.
    #[arg(long, default_value_t = fixture::DEFAULT_RECORD_COUNT)]
    count: u32,
    /// Number of timed loads.
    #[arg(long, default_value_t = 1000)]
    iterations: u32,
    /// Output directory for summary.json and bundle.json.
    #[arg(long, default_value = "target/loadbench")]
    out_dir: PathBuf,
    /// Fail if p95 load time (microseconds) exceeds this value.
    #[arg(long)]
    max_p95_load_us: Option<u64>,
    /// Fail if the serialized bundle exceeds this many bytes.
    #[arg(long)]
    max_bundle_bytes: Option<u64>,
}

fn main() -> Result<()> {
    tools::init_tracing();
    let cli = Cli::parse();

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("create output dir {}", cli.out_dir.display()))?;

    let mut summary = Summary::new(cli.count, cli.iterations);

    let start = Instant::now();
    let bundle = fixture::generate(i64::from(cli.count)).context("generate bundle")?;
    summary.generate_us = micros(start.elapsed());

    let start = Instant::now();
    let json = render_bundle(&bundle, OutputFormat::Json)?;
    summary.serialize_us = micros(start.elapsed());
    summary.bundle_bytes = json.len() as u64;
    write_file(&cli.out_dir.join("bundle.json"), json.as_bytes())?;

    for _ in 0..cli.iterations {
        let start = Instant::now();
        let loaded = load_bundle(json.as_bytes())?;
        summary.push_load(micros(start.elapsed()));
        if loaded.len() != bundle.len() {
            anyhow::bail!(
                "loaded {} records, generated {}",
                loaded.len(),
                bundle.len()
            );
        }
    }

    summary.finalize();
    tracing::info!(
        records = summary.count,
        bytes = summary.bundle_bytes,
        avg_load_us = summary.avg_load_us,
        p95_load_us = summary.p95_load_us,
        "load benchmark complete"
    );
    summary.assert_budgets(cli.max_p95_load_us, cli.max_bundle_bytes)?;
    write_summary_json(&cli.out_dir, &summary)?;

    Ok(())
}

fn micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))
}

fn write_summary_json(out_dir: &Path, summary: &Summary) -> Result<()> {
    let path = out_dir.join("summary.json");
    let contents = serde_json::to_string_pretty(summary).context("serialize summary")?;
    write_file(&path, contents.as_bytes())
}
