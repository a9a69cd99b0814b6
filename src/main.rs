//! Command-line interface for fakery
//!
//! # Usage Examples
//!
//! ```bash
//! # Ten people as JSON lines, reproducible from a seed
//! fakery person --count 10 --seed 42
//!
//! # Addresses for the British locale, pretty-printed
//! fakery address --locale en_GB --format text
//!
//! # Settings from a config file, with the seed overridden on the command line
//! fakery book --config fakery.toml --seed 7
//!
//! # Locale data from disk
//! FAKERY_DATA_DIR=./locales fakery name --locale fr_FR --fallback-locale en_US
//! ```
//!
//! Logs go to stderr and are controlled with `RUST_LOG`, so stdout carries only
//! generated records.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use fakery::{EntityKind, FakeryConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "fakery")]
#[command(about = "Generate realistic fake data from weighted locale datasets")]
#[command(long_about = None)]
struct Cli {
    /// Kind of record to generate
    #[arg(value_enum)]
    kind: EntityKind,

    /// Number of records to generate
    #[arg(short = 'n', long, default_value = "1")]
    count: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Seed for reproducible output (random when omitted)
    #[arg(long, env = "FAKERY_SEED")]
    seed: Option<u64>,

    /// Locale, e.g. en_US or en_GB
    #[arg(long, env = "FAKERY_LOCALE")]
    locale: Option<String>,

    /// Directory of locale datasets (<dir>/<locale>/<dataset>.json)
    #[arg(long, value_name = "PATH", env = "FAKERY_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Locale to use when the requested one has no data
    #[arg(long, env = "FAKERY_FALLBACK_LOCALE")]
    fallback_locale: Option<String>,

    /// TOML config file; flags take precedence over its values
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> FakeryConfig {
        FakeryConfig {
            locale: self.locale.clone(),
            seed: self.seed,
            data_dir: self.data_dir.clone(),
            fallback_locale: self.fallback_locale.clone(),
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => FakeryConfig::from_file(path)?,
        None => FakeryConfig::default(),
    };
    let config = file_config.merged_with(cli.overrides());

    let mut faker = config
        .build_faker()
        .context("Failed to set up the generator")?;
    tracing::info!(
        "Generating {} {:?} record(s) for locale {} with seed {}",
        cli.count,
        cli.kind,
        faker.locale(),
        faker.seed()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for i in 0..cli.count {
        let record = cli
            .kind
            .generate(&mut faker)
            .with_context(|| format!("Failed to generate record {}", i + 1))?;
        writeln!(out, "{}", record.render(cli.format)).context("Failed to write output")?;
    }
    out.flush().context("Failed to write output")?;

    Ok(())
}
