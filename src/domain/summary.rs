// Aggregate summaries computed fresh for each chart
use super::shipment::ShipmentTable;
use std::collections::{BTreeMap, HashMap};

/// Mean rating at or above this value is drawn as "meets threshold".
pub const RATING_THRESHOLD: f64 = 3.0;

/// Number of equal-width bins used for the weight distribution.
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

impl CategoryCount {
    pub fn new(category: String, count: usize) -> Self {
        Self { category, count }
    }
}

/// Counts occurrences of each distinct value, most frequent first.
///
/// Categories with the same count keep the order in which they first appeared.
pub fn frequency_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<CategoryCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for value in values {
        match positions.get(value) {
            Some(&idx) => counts[idx].count += 1,
            None => {
                positions.insert(value, counts.len());
                counts.push(CategoryCount::new(value.to_string(), 1));
            }
        }
    }

    // sort_by is stable, so ties stay in first-appearance order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Whether a group's mean rating reaches [`RATING_THRESHOLD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingBand {
    MeetsThreshold,
    BelowThreshold,
}

impl RatingBand {
    pub fn classify(mean: f64) -> Self {
        if mean >= RATING_THRESHOLD {
            Self::MeetsThreshold
        } else {
            Self::BelowThreshold
        }
    }
}

/// Min, max and mean customer rating for one shipment mode.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingRange {
    pub mode: String,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl RatingRange {
    pub fn band(&self) -> RatingBand {
        RatingBand::classify(self.mean)
    }
}

/// Groups ratings by shipment mode. Groups come back sorted by mode name.
pub fn rating_ranges(table: &ShipmentTable) -> Vec<RatingRange> {
    let mut groups: BTreeMap<&str, Vec<i64>> = BTreeMap::new();
    for record in table.records() {
        groups
            .entry(record.mode_of_shipment.as_str())
            .or_default()
            .push(record.customer_rating);
    }

    groups
        .into_iter()
        .filter_map(|(mode, ratings)| {
            let min = *ratings.iter().min()?;
            let max = *ratings.iter().max()?;
            let mean = ratings.iter().map(|&r| r as f64).sum::<f64>() / ratings.len() as f64;
            Some(RatingRange {
                mode: mode.to_string(),
                min: min as f64,
                max: max as f64,
                mean,
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bins finite values into `bin_count` equal-width bins spanning the observed range.
    ///
    /// Every bin is half-open except the last, which also holds the maximum.
    /// A single distinct value is spread over `[v - 0.5, v + 0.5]`.
    /// Returns `None` when there is nothing to bin.
    pub fn from_values(values: impl IntoIterator<Item = f64>, bin_count: usize) -> Option<Self> {
        let values: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        if values.is_empty() || bin_count == 0 {
            return None;
        }

        let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bin_count as f64;
        let mut bins: Vec<HistogramBin> = (0..bin_count)
            .map(|i| HistogramBin {
                start: lo + i as f64 * width,
                end: if i + 1 == bin_count {
                    hi
                } else {
                    lo + (i + 1) as f64 * width
                },
                count: 0,
            })
            .collect();

        for value in values {
            let idx = ((value - lo) / width).floor() as isize;
            let idx = idx.clamp(0, bin_count as isize - 1) as usize;
            bins[idx].count += 1;
        }

        Some(Self { bins })
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    pub fn range(&self) -> (f64, f64) {
        match (self.bins.first(), self.bins.last()) {
            (Some(first), Some(last)) => (first.start, last.end),
            _ => (0.0, 0.0),
        }
    }
}
