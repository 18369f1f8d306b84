//! Equal-width binning for continuous columns
//!
//! Converts a continuous column into `category_count` ordered categorical
//! buckets labeled `cat_0` through `cat_{category_count-1}`.

/// Default number of buckets for continuous columns
pub const DEFAULT_CATEGORY_COUNT: usize = 10;

/// Generate the ordered bucket labels for a given bucket count
pub fn bin_labels(category_count: usize) -> Vec<String> {
    (0..category_count).map(|i| format!("cat_{}", i)).collect()
}

/// Encode a continuous column into `category_count` equal-width buckets.
///
/// The value range [min, max] is split into `category_count` intervals of
/// equal width. Intervals are right-closed: a value sitting exactly on a
/// boundary falls into the lower of the two adjoining intervals. The global
/// minimum falls into the first interval and the global maximum into the
/// last. A constant column maps entirely to `cat_0`.
///
/// Output preserves input length and order. Buckets are allowed to be empty.
pub fn encode_continuous_column(values: &[f64], category_count: usize) -> Vec<String> {
    let labels = bin_labels(category_count.max(1));

    if values.is_empty() {
        return Vec::new();
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    if span <= 0.0 {
        // Constant column - everything lands in the first bucket
        return values.iter().map(|_| labels[0].clone()).collect();
    }

    let width = span / labels.len() as f64;

    values
        .iter()
        .map(|&v| {
            let idx = bucket_index(v, min, width, labels.len());
            labels[idx].clone()
        })
        .collect()
}

/// Map a value to its bucket index under right-closed interval semantics
fn bucket_index(value: f64, min: f64, width: f64, bucket_count: usize) -> usize {
    if value <= min {
        return 0;
    }
    let steps = ((value - min) / width).ceil() as usize;
    steps.saturating_sub(1).min(bucket_count - 1)
}
