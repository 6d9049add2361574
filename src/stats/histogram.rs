// src/stats/histogram.rs
//
// Fixed-count price-distribution binning for the brand-stats sparklines.
// Pure and allocation-light so callers can recompute per refresh, or hold
// the result as long as the underlying price series is unchanged.

use crate::config::consts::HISTOGRAM_BINS;

/// One of the ten equal-width sub-intervals of a brand's price range.
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramBin {
    pub index: usize,
    /// Samples falling in this bin's half-open range (the last bin is
    /// closed above so the maximum lands in it).
    pub count: usize,
    /// `count` scaled by the largest count across all bins, in [0, 1].
    /// Used to size chart bars uniformly.
    pub normalized: f64,
    pub range_start: f64,
    pub range_end: f64,
}

/// Bin a price series into exactly `HISTOGRAM_BINS` equal-width bins.
///
/// An empty series yields an empty Vec (nothing to draw). A zero-spread
/// series (all prices identical) puts every sample in bin 0. Out-of-range
/// float artifacts at the maximum clamp into the last bin, so
/// `sum(count) == prices.len()` always holds. Input is expected finite;
/// the scrape layer never produces NaN or infinite prices.
pub fn bin_prices(prices: &[f64]) -> Vec<HistogramBin> {
    if prices.is_empty() {
        return Vec::new();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &p in prices {
        if p < min { min = p; }
        if p > max { max = p; }
    }

    let width = (max - min) / HISTOGRAM_BINS as f64;

    let mut counts = [0usize; HISTOGRAM_BINS];
    for &p in prices {
        let ix = if width > 0.0 {
            (((p - min) / width) as usize).min(HISTOGRAM_BINS - 1)
        } else {
            0 // zero spread: everything lands in bin 0
        };
        counts[ix] += 1;
    }

    let max_count = counts.iter().copied().max().unwrap_or(0);

    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| HistogramBin {
            index: i,
            count,
            normalized: if max_count > 0 {
                count as f64 / max_count as f64
            } else {
                0.0
            },
            range_start: min + i as f64 * width,
            range_end: min + (i + 1) as f64 * width,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_yields_no_bins() {
        assert!(bin_prices(&[]).is_empty());
    }

    #[test]
    fn non_empty_series_always_yields_ten_bins() {
        for series in [vec![1.0], vec![5.0, 5.0], (0..137).map(|i| i as f64).collect()] {
            assert_eq!(bin_prices(&series).len(), HISTOGRAM_BINS);
        }
    }

    #[test]
    fn counts_sum_to_series_length() {
        let series: Vec<f64> = [10.0, 11.5, 99.9, 42.0, 42.0, 0.5, 63.2].to_vec();
        let bins = bin_prices(&series);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, series.len());
    }

    #[test]
    fn evenly_spread_series_fills_every_bin_once() {
        // 10..=100 in steps of 10: one sample per bin, width 9
        let series: Vec<f64> = (1..=10).map(|i| (i * 10) as f64).collect();
        let bins = bin_prices(&series);

        for (i, b) in bins.iter().enumerate() {
            assert_eq!(b.index, i);
            assert_eq!(b.count, 1, "bin {i}");
            assert_eq!(b.normalized, 1.0);
            assert!((b.range_start - (10.0 + i as f64 * 9.0)).abs() < 1e-9);
            assert!((b.range_end - (10.0 + (i + 1) as f64 * 9.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_spread_series_lands_in_bin_zero() {
        let bins = bin_prices(&[50.0, 50.0, 50.0]);
        assert_eq!(bins[0].count, 3);
        assert_eq!(bins[0].normalized, 1.0);
        for b in &bins[1..] {
            assert_eq!(b.count, 0);
            assert_eq!(b.normalized, 0.0);
        }
    }

    #[test]
    fn maximum_value_clamps_into_last_bin() {
        let bins = bin_prices(&[0.0, 100.0]);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[9].count, 1);
    }

    #[test]
    fn normalized_counts_stay_in_unit_range() {
        let series = [3.0, 3.0, 3.0, 3.0, 9.0, 27.0, 81.0];
        for b in bin_prices(&series) {
            assert!((0.0..=1.0).contains(&b.normalized), "bin {}", b.index);
        }
    }

    #[test]
    fn negative_prices_are_binned_not_rejected() {
        let bins = bin_prices(&[-10.0, 0.0, 10.0]);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 3);
        assert_eq!(bins[0].range_start, -10.0);
    }

    #[test]
    fn ranges_tile_the_span() {
        let bins = bin_prices(&[2.0, 7.0, 19.0]);
        for w in bins.windows(2) {
            assert!((w[0].range_end - w[1].range_start).abs() < 1e-12);
        }
        assert_eq!(bins[0].range_start, 2.0);
        assert!((bins[9].range_end - 19.0).abs() < 1e-9);
    }
}
