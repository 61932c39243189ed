use std::io::Read;
use std::path::Path;

use log::info;

use crate::config::DetectorConfig;
use crate::data::detector::detect;
use crate::data::error::Result;
use crate::data::loader::{load_file, parse_series};
use crate::data::model::{PeakIndexList, Series};

// ---------------------------------------------------------------------------
// Analysis – one parse + detect run
// ---------------------------------------------------------------------------

/// The outcome of a single run: the parsed series and its peaks.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub series: Series,
    pub peaks: PeakIndexList,
    /// Threshold the peaks were detected with.
    pub threshold: i64,
}

impl Analysis {
    /// Parse `source` and detect peaks according to `config`.
    pub fn run<R: Read>(source: R, config: &DetectorConfig) -> Result<Self> {
        config.validate()?;
        let series = parse_series(source, config.capacity, config.header_skip)?;
        Self::from_series(series, config.threshold)
    }

    /// Same as [`Analysis::run`] but opens `path` first.
    pub fn from_path(path: &Path, config: &DetectorConfig) -> Result<Self> {
        config.validate()?;
        let series = load_file(path, config.capacity, config.header_skip)?;
        Self::from_series(series, config.threshold)
    }

    /// Detect peaks in an already parsed series.
    pub fn from_series(series: Series, threshold: i64) -> Result<Self> {
        info!("Analyzing {} elements", series.len());
        let peaks = detect(&series, threshold)?;
        info!("Found {} peaks above {threshold}", peaks.len());

        Ok(Analysis {
            series,
            peaks,
            threshold,
        })
    }
}
