//! Word shingles (k-grams over tokens).

use std::num::NonZeroUsize;

/// Build all shingles of `k` consecutive tokens.
///
/// Produces `max(0, n - k + 1)` shingles; shingle `i` is `tokens[i..i+k]`
/// joined by single spaces. Fewer than `k` tokens yields an empty vector.
/// Duplicates are kept: reduce with [`crate::dedup::dedup`] when a set is wanted.
pub fn shingles<S: AsRef<str>>(tokens: &[S], k: NonZeroUsize) -> Vec<String> {
    let k = k.get();
    if tokens.len() < k {
        return Vec::new();
    }
    tokens
        .windows(k)
        .map(|w| {
            let cap = w.iter().map(|t| t.as_ref().len()).sum::<usize>() + (k - 1);
            let mut s = String::with_capacity(cap);
            for (i, t) in w.iter().enumerate() {
                if i > 0 {
                    s.push(' ');
                }
                s.push_str(t.as_ref());
            }
            s
        })
        .collect()
}

/// Join items with a single separator character (no trailing separator).
pub fn join_delimited<S: AsRef<str>>(items: &[S], separator: char) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(item.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn bigrams() {
        assert_eq!(shingles(&["a", "b", "c"], k(2)), vec!["a b", "b c"]);
    }

    #[test]
    fn unigrams_are_the_tokens() {
        assert_eq!(shingles(&["a", "b", "c"], k(1)), vec!["a", "b", "c"]);
    }

    #[test]
    fn k_larger_than_input_is_empty() {
        assert!(shingles(&["a", "b", "c"], k(4)).is_empty());
        assert!(shingles::<&str>(&[], k(1)).is_empty());
    }

    #[test]
    fn k_equal_to_input_is_one_shingle() {
        assert_eq!(shingles(&["a", "b", "c"], k(3)), vec!["a b c"]);
    }

    #[test]
    fn repeated_shingles_are_kept() {
        let toks = ["to", "be", "to", "be"];
        assert_eq!(shingles(&toks, k(2)), vec!["to be", "be to", "to be"]);
    }

    #[test]
    fn join_has_no_trailing_separator() {
        assert_eq!(join_delimited(&["a b", "b c"], ','), "a b,b c");
        assert_eq!(join_delimited(&["only"], ','), "only");
        assert_eq!(join_delimited::<&str>(&[], ','), "");
    }
}
