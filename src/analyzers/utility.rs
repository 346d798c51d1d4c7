use std::collections::HashMap;
use std::hash::Hash;

/// Computes the arithmetic mean of a slice of values. Returns `None` for empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Counts occurrences of each value, ordered by descending count.
/// Values with equal counts keep the order in which they were first seen.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    // value -> (count, position of first occurrence)
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (pos, value) in values.into_iter().enumerate() {
        counts.entry(value).or_insert((0, pos)).0 += 1;
    }

    let mut counted: Vec<_> = counts.into_iter().collect();
    counted.sort_by(|a, b| b.1.0.cmp(&a.1.0).then(a.1.1.cmp(&b.1.1)));
    counted.into_iter().map(|(v, (count, _))| (v, count)).collect()
}

/// Returns the most frequent value, or `None` for empty input.
pub fn most_common<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    value_counts(values).into_iter().next().map(|(v, _)| v)
}
