//! Exact Jaccard similarity between documents.
//!
//! \(J(A,B) = |A ∩ B| / |A ∪ B|\), computed over deduplicated token-hash sets.
//! Two empty sets have no defined similarity; that case is reported as
//! [`Similarity::Undefined`] instead of dividing by zero.

use std::fmt;

use crate::hash::{hash_str, TokenHash};
use crate::set::OrderedSet;

/// Outcome of a Jaccard comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Similarity {
    /// A ratio in `[0, 1]`.
    Defined(f64),
    /// Both sides were empty (0/0).
    Undefined,
}

impl Similarity {
    /// Build from intersection and union sizes.
    ///
    /// `intersection` must not exceed `union`.
    pub fn from_counts(intersection: usize, union: usize) -> Self {
        debug_assert!(intersection <= union, "intersection larger than union");
        if union == 0 {
            Similarity::Undefined
        } else {
            Similarity::Defined(intersection as f64 / union as f64)
        }
    }

    /// The ratio, if defined.
    pub fn ratio(self) -> Option<f64> {
        match self {
            Similarity::Defined(r) => Some(r),
            Similarity::Undefined => None,
        }
    }

    /// The ratio as a percentage in `[0, 100]`, if defined.
    pub fn percent(self) -> Option<f64> {
        self.ratio().map(|r| r * 100.0)
    }

    /// True for the 0/0 case.
    pub fn is_undefined(self) -> bool {
        matches!(self, Similarity::Undefined)
    }
}

impl fmt::Display for Similarity {
    /// `50.00%`, or `undefined`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.percent() {
            Some(p) => write!(f, "{p:.2}%"),
            None => f.write_str("undefined"),
        }
    }
}

/// Jaccard similarity of two slices (duplicates allowed; they are collapsed).
pub fn jaccard<T: Eq + std::hash::Hash + Clone>(a: &[T], b: &[T]) -> Similarity {
    OrderedSet::from_slice(a).jaccard(&OrderedSet::from_slice(b))
}

/// A named document reduced to its deduplicated token hashes.
#[derive(Debug, Clone)]
pub struct Document {
    /// External identifier (e.g. a file name).
    pub id: String,
    hashes: OrderedSet<TokenHash>,
}

impl Document {
    /// Hash `tokens` and keep each distinct hash once.
    pub fn from_tokens<S: AsRef<str>>(id: impl Into<String>, tokens: &[S]) -> Self {
        let hashes = tokens.iter().map(|t| hash_str(t.as_ref())).collect();
        Self {
            id: id.into(),
            hashes,
        }
    }

    /// Wrap an existing hash set.
    pub fn from_hashes(id: impl Into<String>, hashes: OrderedSet<TokenHash>) -> Self {
        Self {
            id: id.into(),
            hashes,
        }
    }

    /// The document's distinct hashes, in first-occurrence order.
    pub fn hashes(&self) -> &OrderedSet<TokenHash> {
        &self.hashes
    }

    /// Number of distinct hashes.
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    /// True if the document has no tokens.
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Full comparison against `other`.
    pub fn compare(&self, other: &Self) -> Comparison {
        let union = self.hashes.union(&other.hashes);
        let intersection = self.hashes.intersection(&other.hashes);
        Comparison {
            intersection_len: intersection.len(),
            union_len: union.len(),
            similarity: Similarity::from_counts(intersection.len(), union.len()),
        }
    }
}

/// Sizes and similarity from comparing two documents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    /// Distinct hashes present in both.
    pub intersection_len: usize,
    /// Distinct hashes present in either.
    pub union_len: usize,
    /// `intersection_len / union_len`.
    pub similarity: Similarity,
}

/// One unordered document pair and its comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct PairReport {
    /// Index of the first document (`left < right`).
    pub left: usize,
    /// Index of the second document.
    pub right: usize,
    /// Identifier of the first document.
    pub left_id: String,
    /// Identifier of the second document.
    pub right_id: String,
    /// The comparison result.
    pub comparison: Comparison,
}

/// Compare every unordered pair `(i, k)`, `i < k`, in lexicographic order.
///
/// Returns `n * (n - 1) / 2` reports; fewer than two documents yields none.
pub fn pairwise(docs: &[Document]) -> Vec<PairReport> {
    let n = docs.len();
    let mut out = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for k in (i + 1)..n {
            out.push(PairReport {
                left: i,
                right: k,
                left_id: docs[i].id.clone(),
                right_id: docs[k].id.clone(),
                comparison: docs[i].compare(&docs[k]),
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_counts_policy() {
        assert_eq!(Similarity::from_counts(0, 0), Similarity::Undefined);
        assert_eq!(Similarity::from_counts(0, 3), Similarity::Defined(0.0));
        assert_eq!(Similarity::from_counts(3, 3), Similarity::Defined(1.0));
    }

    #[test]
    fn display() {
        assert_eq!(Similarity::Defined(0.5).to_string(), "50.00%");
        assert_eq!(Similarity::from_counts(1, 3).to_string(), "33.33%");
        assert_eq!(Similarity::Defined(1.0).to_string(), "100.00%");
        assert_eq!(Similarity::Undefined.to_string(), "undefined");
    }

    #[test]
    fn the_cat_sat_vs_the_cat_ran() {
        let a = Document::from_tokens("a", &["the", "cat", "sat"]);
        let b = Document::from_tokens("b", &["the", "cat", "ran"]);
        let c = a.compare(&b);
        assert_eq!(c.intersection_len, 2);
        assert_eq!(c.union_len, 4);
        assert_eq!(c.similarity, Similarity::Defined(0.5));
    }

    #[test]
    fn duplicate_tokens_are_collapsed_per_document() {
        let a = Document::from_tokens("a", &["x", "x", "y"]);
        assert_eq!(a.len(), 2);
        assert_eq!(
            jaccard(&["x", "x", "y"], &["y", "x"]),
            Similarity::Defined(1.0)
        );
    }

    #[test]
    fn empty_documents() {
        let e1 = Document::from_tokens::<&str>("e1", &[]);
        let e2 = Document::from_tokens::<&str>("e2", &[]);
        let a = Document::from_tokens("a", &["x"]);
        assert!(e1.compare(&e2).similarity.is_undefined());
        assert_eq!(a.compare(&e1).similarity, Similarity::Defined(0.0));
    }

    #[test]
    fn symmetric() {
        let a = Document::from_tokens("a", &["p", "q", "r", "s"]);
        let b = Document::from_tokens("b", &["s", "t", "p"]);
        assert_eq!(a.compare(&b).similarity, b.compare(&a).similarity);
    }

    #[test]
    fn pairwise_covers_every_unordered_pair_in_order() {
        let docs: Vec<Document> = ["a", "b", "c", "d"]
            .iter()
            .map(|id| Document::from_tokens(*id, &[*id]))
            .collect();
        let pairs: Vec<(usize, usize)> = pairwise(&docs)
            .iter()
            .map(|p| (p.left, p.right))
            .collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        assert!(pairwise(&docs[..1]).is_empty());
        assert!(pairwise(&[]).is_empty());
    }
}
