//! First-occurrence deduplication of ordered collections.

use std::collections::HashSet;
use std::hash::Hash;

/// Remove repeated elements, keeping the first occurrence of each.
///
/// The source is left untouched; the result is a new vector in
/// first-occurrence order. Runs in O(n) using an auxiliary hash set.
pub fn dedup<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen: HashSet<&T> = HashSet::with_capacity(items.len());
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Remove repeated elements by pairwise scan against the retained prefix.
///
/// Same result as [`dedup`] but O(n²), and needs only `PartialEq`.
pub fn dedup_by_scan<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrence_order() {
        let v = ["x", "y", "x", "z", "y"];
        assert_eq!(dedup(&v), vec!["x", "y", "z"]);
        assert_eq!(dedup_by_scan(&v), vec!["x", "y", "z"]);
    }

    #[test]
    fn string_content_equality_not_identity() {
        let a = String::from("cat");
        let b = "c".to_string() + "at";
        assert_eq!(dedup(&[a.clone(), b.clone()]), vec![a.clone()]);
        assert_eq!(dedup_by_scan(&[a.clone(), b]), vec![a]);
    }

    #[test]
    fn numeric_equality() {
        assert_eq!(dedup(&[3u32, 1, 3, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[test]
    fn empty_and_unique_inputs() {
        assert!(dedup::<u32>(&[]).is_empty());
        assert_eq!(dedup(&[1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn source_is_not_mutated() {
        let v = vec![1, 1, 2];
        let _ = dedup(&v);
        assert_eq!(v, vec![1, 1, 2]);
    }
}
