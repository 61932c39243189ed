use std::io::Write;

use anyhow::{Context, Result};
use log::warn;
use serde::Serialize;

use crate::analysis::Analysis;
use crate::data::model::Series;

// ---------------------------------------------------------------------------
// Output formats
// ---------------------------------------------------------------------------

/// How the peak list is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One index per line.
    #[default]
    Plain,
    /// `index,value` rows with a header.
    Csv,
}

#[derive(Debug, Serialize)]
struct PeakRecord {
    index: usize,
    value: i64,
}

/// Write the first `n` raw samples, one per line.
pub fn write_preview<W: Write>(out: &mut W, series: &Series, n: usize) -> Result<()> {
    if n > series.len() {
        warn!(
            "preview of {n} values requested but series has only {}",
            series.len()
        );
    }
    for value in series.head(n) {
        writeln!(out, "{value}").context("writing preview")?;
    }
    Ok(())
}

/// Write the detected peaks in the chosen format.
pub fn write_peaks<W: Write>(out: &mut W, analysis: &Analysis, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            for index in analysis.peaks.iter() {
                writeln!(out, "{index}").context("writing peak index")?;
            }
        }
        OutputFormat::Csv => {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(out);
            writer
                .write_record(["index", "value"])
                .context("writing CSV header")?;
            for (index, value) in analysis.peaks.with_values(&analysis.series) {
                writer
                    .serialize(PeakRecord { index, value })
                    .with_context(|| format!("writing CSV row for index {index}"))?;
            }
            writer.flush().context("flushing CSV output")?;
        }
    }
    Ok(())
}
