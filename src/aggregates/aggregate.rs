use std::collections::{BTreeMap, HashMap};

use crate::aggregates::types::{CategoryCount, HistogramBin, RatingRange};
use crate::aggregates::utility::{mean, min_max};

/// Bin count used for the weight histogram unless configured otherwise.
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

/// Counts occurrences of each distinct value.
///
/// Results are ordered by descending count; equal counts keep the order in
/// which the value first appeared.
pub fn value_counts<'a, I>(values: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for value in values {
        match positions.get(value) {
            Some(&i) => counts[i].count += 1,
            None => {
                positions.insert(value, counts.len());
                counts.push(CategoryCount {
                    category: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Groups `(category, rating)` pairs and computes mean/min/max per group.
///
/// Groups come out sorted by category name.
pub fn rating_ranges<'a, I>(pairs: I) -> Vec<RatingRange>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for (category, rating) in pairs {
        groups.entry(category).or_default().push(rating);
    }

    groups
        .into_iter()
        .filter_map(|(mode, ratings)| {
            let (min, max) = min_max(&ratings)?;
            Some(RatingRange {
                mode: mode.to_string(),
                count: ratings.len(),
                mean: mean(&ratings),
                min,
                max,
            })
        })
        .collect()
}

/// Splits values into `bins` equal-width bins spanning their observed range.
///
/// All bins are half-open except the last, which also takes the maximum.
/// A single distinct value `v` spans `[v - 0.5, v + 0.5]`; no values span
/// `[0, 1]`.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let bins = bins.max(1);
    let (lo, hi) = match min_max(values) {
        Some((lo, hi)) if lo < hi => (lo, hi),
        Some((v, _)) => (v - 0.5, v + 0.5),
        None => (0.0, 1.0),
    };
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in values {
        let index = (((v - lo) / width).floor() as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: lo + width * i as f64,
            end: if i + 1 == bins {
                hi
            } else {
                lo + width * (i + 1) as f64
            },
            count,
        })
        .collect()
}
