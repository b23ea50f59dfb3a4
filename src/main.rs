use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use saucer::sink::{ExceptionSink, TableSink};

/// Reads raw scraped JSON reports and processes them into a CSV file,
/// normalizing dates and categorical fields along the way. A report that
/// can't be cleaned automatically is appended to the exceptions file with
/// the failure reason added as a field.
#[derive(Parser)]
#[command(name = "saucer", version, about = "saucer — sighting report cleanup")]
struct Cli {
    /// Raw scraped report file, one JSON object per line.
    raw_report_file: PathBuf,

    /// Destination for normalized tabular records.
    #[arg(short, long, default_value = "output.csv")]
    output_file: PathBuf,

    /// Destination for records that failed normalization, one JSON object
    /// per line.
    #[arg(short, long, default_value = "exceptions.json")]
    exceptions_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; both outputs may be redirected or inspected live.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let input = File::open(&cli.raw_report_file)
        .with_context(|| format!("opening {}", cli.raw_report_file.display()))?;
    let output = File::create(&cli.output_file)
        .with_context(|| format!("creating {}", cli.output_file.display()))?;
    let exceptions = File::create(&cli.exceptions_file)
        .with_context(|| format!("creating {}", cli.exceptions_file.display()))?;

    let mut table = TableSink::new(output)?;
    let mut exception_sink = ExceptionSink::new(exceptions);

    let stats = saucer::run(BufReader::new(input), &mut table, &mut exception_sink)?;
    tracing::info!(
        "wrote {} clean records to {} and {} exceptions to {}",
        stats.cleaned,
        cli.output_file.display(),
        stats.diverted,
        cli.exceptions_file.display(),
    );

    Ok(())
}
