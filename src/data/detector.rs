use super::error::{Result, SeriesError};
use super::model::{PeakIndexList, Series};

// ---------------------------------------------------------------------------
// Threshold crossing scan
// ---------------------------------------------------------------------------

/// Return the indices whose sample is strictly greater than `threshold`.
///
/// A single pass in index order, so the result is ascending and has no
/// duplicates. Samples equal to the threshold are not peaks.
pub fn detect(series: &Series, threshold: i64) -> Result<PeakIndexList> {
    if series.is_empty() {
        return Err(SeriesError::InvalidArgument(
            "cannot detect peaks in an empty series".to_string(),
        ));
    }

    let indices = series
        .iter()
        .enumerate()
        .filter(|&(_, value)| value > threshold)
        .map(|(i, _)| i)
        .collect();

    Ok(PeakIndexList::from_sorted(indices))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_values_above_threshold() {
        let series = Series::new(vec![0, 10, 600, 200, 900]);
        let peaks = detect(&series, 500).unwrap();
        assert_eq!(peaks.indices(), &[2, 4]);
    }

    #[test]
    fn equal_to_threshold_is_excluded() {
        let series = Series::new(vec![500, 501, 499, 500]);
        let peaks = detect(&series, 500).unwrap();
        assert_eq!(peaks.indices(), &[1]);
    }

    #[test]
    fn threshold_at_max_is_empty() {
        let series = Series::new(vec![3, 9, 1, 9]);
        assert!(detect(&series, 9).unwrap().is_empty());
    }

    #[test]
    fn threshold_below_min_is_everything() {
        let series = Series::new(vec![-5, -2, -9]);
        let peaks = detect(&series, -10).unwrap();
        assert_eq!(peaks.indices(), &[0, 1, 2]);
    }

    #[test]
    fn empty_series_is_invalid() {
        let err = detect(&Series::new(Vec::new()), 0).unwrap_err();
        assert!(matches!(err, SeriesError::InvalidArgument(_)));
    }

    #[test]
    fn repeated_scans_agree() {
        let series = Series::new(vec![7, 1, 8, 2, 8]);
        assert_eq!(detect(&series, 5).unwrap(), detect(&series, 5).unwrap());
    }
}
