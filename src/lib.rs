//! Threshold peak detection over raw mindwave time series.
//!
//! A run reads a fixed-capacity integer series from text
//! ([`data::loader`]), then reports every index whose sample is strictly
//! above a threshold ([`data::detector`]). [`analysis::Analysis`] composes
//! both stages from a [`config::DetectorConfig`].

pub mod analysis;
pub mod config;
pub mod data;
pub mod report;

pub use analysis::Analysis;
pub use config::{ConfigError, DetectorConfig};
pub use data::detector::detect;
pub use data::error::SeriesError;
pub use data::loader::{load_file, parse_series};
pub use data::model::{HeaderSkip, PeakIndexList, Series};
