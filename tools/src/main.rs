use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fixgen_tools::{
    format_inspect_report, init_tracing, inspect_file, render_bundle, OutputFormat,
};

#[derive(Parser)]
#[command(
    name = "fixgen",
    version,
    about = "fixgen fixture generation and inspection"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a fixture bundle.
    Generate {
        /// Number of records.
        #[arg(
            long,
            default_value_t = i64::from(fixture::DEFAULT_RECORD_COUNT),
            allow_hyphen_values = true
        )]
        count: i64,
        /// Output format.
        #[arg(long, value_enum, default_value_t = RenderFormat::Json)]
        format: RenderFormat,
        /// Write to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Validate a bundle file and report its size.
    Inspect {
        /// Path to the bundle JSON.
        bundle_path: PathBuf,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RenderFormat {
    Json,
    Pretty,
}

impl From<RenderFormat> for OutputFormat {
    fn from(format: RenderFormat) -> Self {
        match format {
            RenderFormat::Json => Self::Json,
            RenderFormat::Pretty => Self::Pretty,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Generate { count, format, out } => {
            let bundle = fixture::generate(count).context("generate bundle")?;
            let rendered = render_bundle(&bundle, format.into())?;
            match out {
                Some(path) => {
                    fs::write(&path, &rendered)
                        .with_context(|| format!("write {}", path.display()))?;
                    tracing::info!(
                        path = %path.display(),
                        records = bundle.len(),
                        bytes = rendered.len(),
                        "wrote fixture bundle"
                    );
                }
                None => println!("{rendered}"),
            }
        }
        Command::Inspect { bundle_path, json } => {
            let report = inspect_file(&bundle_path)?;
            if json {
                let json = serde_json::to_string(&report).context("serialize report")?;
                println!("{json}");
            } else {
                println!("{}", format_inspect_report(&report));
            }
        }
    }
    Ok(())
}
