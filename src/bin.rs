use ceos_sar::{ceos::report, CeosFileReader, ReportFormat, ReportOptions, Summary};
use clap::{Parser, ValueEnum};
use pretty_duration::pretty_duration;
use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

#[derive(Parser)]
#[command(name = "ceos-sar-cli")]
#[command(about = "Print the records of a CEOS-SAR file", long_about = None)]
struct Cli {
    /// Leader, trailer or volume directory file to read
    file: PathBuf,

    /// Also list fields that have no value
    #[arg(short, long)]
    all: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Csv,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => ReportFormat::Text,
            Format::Csv => ReportFormat::Csv,
            Format::Json => ReportFormat::Json,
        }
    }
}

pub fn main() -> ExitCode {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let start = Instant::now();
    let reader = match CeosFileReader::open(&cli.file) {
        Ok(reader) => reader,
        Err(error) => {
            log::error!("{error}");
            return ExitCode::FAILURE;
        }
    };
    let entries = reader.records().collect::<Vec<_>>();
    for diagnostic in entries.iter().flat_map(|e| e.diagnostics.iter()) {
        log::log!(diagnostic.level(), "{diagnostic}");
    }

    let options = ReportOptions {
        include_empty: cli.all,
    };
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if let Err(error) = report::render(&mut out, cli.format.into(), &entries, options)
        .and_then(|()| out.flush())
    {
        // A closed pipe is not worth reporting.
        if error.kind() != io::ErrorKind::BrokenPipe {
            log::error!("Could not write report: {error}");
            return ExitCode::FAILURE;
        }
    }

    let summary = Summary::of(&entries);
    log::info!(
        "{}: decoded {} records, skipped {}, {} diagnostics in {}",
        reader.file_name.display(),
        summary.decoded,
        summary.skipped,
        summary.diagnostics,
        pretty_duration(&start.elapsed(), None)
    );
    ExitCode::SUCCESS
}
