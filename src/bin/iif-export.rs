//! iif-export - write a QuickBooks IIF file from JSON records
//!
//! Input is a JSON array of `{"type": "ACCNT", "fields": [{"name": "NAME", "value": "..."}]}`.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use iif::core::{IifConfigBuilder, LineEnding, MissingTransactions, RawRecord};

#[derive(Parser)]
#[command(name = "iif-export")]
#[command(version, about = "Export JSON records to a QuickBooks IIF file", long_about = None)]
struct Cli {
    /// JSON file with the records to export
    input: PathBuf,

    /// Output file; the extension is replaced by .iif
    #[arg(short, long)]
    output: PathBuf,

    /// Separate lines with CRLF instead of LF
    #[arg(long)]
    crlf: bool,

    /// Fail if the input holds no TRNS or SPL record
    #[arg(long)]
    require_transactions: bool,

    /// Fail if records of one type have different columns
    #[arg(long)]
    check_headers: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = fs::read_to_string(&cli.input)?;
    let records: Vec<RawRecord> = serde_json::from_str(&json)?;

    let config = IifConfigBuilder::new()
        .line_ending(if cli.crlf { LineEnding::CrLf } else { LineEnding::Lf })
        .missing_transactions(if cli.require_transactions {
            MissingTransactions::Error
        } else {
            MissingTransactions::OmitSection
        })
        .check_headers(cli.check_headers)
        .build();

    let path = iif::export(&records, &cli.output, &config)?;
    tracing::info!(records = records.len(), path = %path.display(), "export complete");
    Ok(())
}
