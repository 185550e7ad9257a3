//! Case-insensitive string comparison and blank checks.
//!
//! All comparisons fold through `str::to_lowercase`, so they are
//! Unicode-aware rather than ASCII-only. Inputs are small
//! configuration-sized lists; the pairwise scans here are O(|a|·|b|) and
//! deliberately unoptimized.

/// Case-insensitive equality under Unicode lowercase folding.
pub fn eq_fold(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// True iff any element of `list` case-insensitively equals `target`.
///
/// An empty list contains nothing.
pub fn contains_fold<S: AsRef<str>>(list: &[S], target: &str) -> bool {
    list.iter().any(|item| eq_fold(item.as_ref(), target))
}

/// True iff some element of `a` case-insensitively equals some element of `b`.
///
/// Either side being empty yields false.
pub fn any_overlap_fold<A: AsRef<str>, B: AsRef<str>>(a: &[A], b: &[B]) -> bool {
    a.iter().any(|item| contains_fold(b, item.as_ref()))
}

/// Case-insensitive substring containment.
pub fn contains_fold_substr(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True iff `input` is empty or whitespace-only.
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}
