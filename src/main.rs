use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::debug;

use peakdet::report::{write_peaks, write_preview, OutputFormat};
use peakdet::{Analysis, DetectorConfig, HeaderSkip};

/// Threshold peak detection over a raw series file.
#[derive(Parser)]
#[command(name = "peakdet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Series file to analyse
    #[arg(value_name = "INPUT", default_value = "data/data0.txt")]
    input: PathBuf,

    /// JSON config file; command-line options override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of series entries, header slot included
    #[arg(long)]
    capacity: Option<usize>,

    /// Samples strictly above this value are reported
    #[arg(long, allow_negative_numbers = true)]
    threshold: Option<i64>,

    /// How the input header is discarded
    #[arg(long, value_enum)]
    header_skip: Option<HeaderSkip>,

    /// What to print
    #[arg(long, value_enum, default_value_t = RunMode::Peaks)]
    mode: RunMode,

    /// Number of raw values printed in preview mode
    #[arg(long)]
    preview_len: Option<usize>,

    /// Output format for peak indices
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Verbosity level; the run summary is shown by default (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RunMode {
    /// Print the first raw values of the series
    Preview,
    /// Print indices above the threshold
    Peaks,
}

impl Cli {
    fn detector_config(&self) -> Result<DetectorConfig> {
        let mut config = match &self.config {
            Some(path) => DetectorConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => DetectorConfig::default(),
        };

        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(header_skip) = self.header_skip {
            config.header_skip = header_skip;
        }
        if let Some(preview_len) = self.preview_len {
            config.preview_len = preview_len;
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

/// Default log filter; `info` carries the "Analyzing" / "Found" summary lines.
fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_filter(cli.verbose)),
    )
    .init();

    let config = cli.detector_config()?;
    debug!("running with {config:?}");

    let analysis = Analysis::from_path(&cli.input, &config)
        .with_context(|| format!("analysing {}", cli.input.display()))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.mode {
        RunMode::Preview => write_preview(&mut out, &analysis.series, config.preview_len)?,
        RunMode::Peaks => write_peaks(&mut out, &analysis, cli.format)?,
    }
    out.flush().context("flushing output")?;

    Ok(())
}
