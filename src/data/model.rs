use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// HeaderSkip – how leading non-data content is discarded
// ---------------------------------------------------------------------------

/// Policy for the header at the start of a series file.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderSkip {
    /// Drop the whole first line; index 0 stays `0` and data starts at index 1.
    #[default]
    LineSkip,
    /// Drop three fields plus one delimiter character, then read one digit
    /// per index starting at index 0.
    FieldSkip,
}

impl HeaderSkip {
    /// Number of data entries this mode reads for a series of `capacity`.
    pub fn data_entries(self, capacity: usize) -> usize {
        match self {
            HeaderSkip::LineSkip => capacity.saturating_sub(1),
            HeaderSkip::FieldSkip => capacity,
        }
    }
}

impl fmt::Display for HeaderSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderSkip::LineSkip => write!(f, "line-skip"),
            HeaderSkip::FieldSkip => write!(f, "field-skip"),
        }
    }
}

// ---------------------------------------------------------------------------
// Series – the parsed dataset
// ---------------------------------------------------------------------------

/// An immutable, ordered sequence of integer samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    values: Vec<i64>,
}

impl Series {
    pub fn new(values: Vec<i64>) -> Self {
        Series { values }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.iter().copied()
    }

    /// The first `n` samples (fewer if the series is shorter).
    pub fn head(&self, n: usize) -> &[i64] {
        &self.values[..n.min(self.values.len())]
    }
}

impl Index<usize> for Series {
    type Output = i64;

    fn index(&self, index: usize) -> &i64 {
        &self.values[index]
    }
}

impl From<Vec<i64>> for Series {
    fn from(values: Vec<i64>) -> Self {
        Series::new(values)
    }
}

// ---------------------------------------------------------------------------
// PeakIndexList – result of a threshold scan
// ---------------------------------------------------------------------------

/// Strictly increasing positions whose value exceeded the threshold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeakIndexList {
    indices: Vec<usize>,
}

impl PeakIndexList {
    /// Callers inside the crate guarantee `indices` is strictly increasing.
    pub(crate) fn from_sorted(indices: Vec<usize>) -> Self {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        PeakIndexList { indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Pair every index with its sample from `series`. Indices past the
    /// end of `series` are skipped.
    pub fn with_values<'a>(&'a self, series: &'a Series) -> impl Iterator<Item = (usize, i64)> + 'a {
        self.indices
            .iter()
            .filter_map(move |&i| series.get(i).map(|value| (i, value)))
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.indices
    }
}
