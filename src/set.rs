//! Slice deduplication with set semantics.

use std::collections::HashSet;
use std::hash::Hash;

/// Return each distinct element of `items` exactly once.
///
/// Comparison is exact (not case-folded). Result order is unspecified by
/// contract; this implementation keeps the first occurrence.
pub fn dedupe<T>(items: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert((*item).clone()))
        .cloned()
        .collect()
}

/// Deduplicate `items` with `item` appended.
pub fn dedupe_append<T>(items: &[T], item: T) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut out = dedupe(items);
    if !out.contains(&item) {
        out.push(item);
    }
    out
}
