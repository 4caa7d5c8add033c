//! Union and intersection over ordered collections.
//!
//! Two forms are provided:
//! - free functions [`union`] and [`intersection`] over slices that may still
//!   hold duplicates (they deduplicate their output);
//! - [`OrderedSet`], an insertion-ordered set used to hold a document's
//!   deduplicated tokens or hashes across many comparisons.
//!
//! Result order is always "first occurrence": for a union, the left side's
//! order followed by the right side's new elements; for an intersection, the
//! left side's order.

use std::collections::HashSet;
use std::hash::Hash;

use crate::similarity::Similarity;

/// Deduplicated concatenation of `a` then `b`.
pub fn union<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut seen: HashSet<&T> = HashSet::with_capacity(a.len() + b.len());
    let mut out = Vec::with_capacity(a.len() + b.len());
    for item in a.iter().chain(b.iter()) {
        if seen.insert(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Elements of `a` that also occur in `b`, once each, in `a`'s order.
pub fn intersection<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let in_b: HashSet<&T> = b.iter().collect();
    let mut seen: HashSet<&T> = HashSet::new();
    let mut out = Vec::new();
    for item in a {
        if in_b.contains(item) && seen.insert(item) {
            out.push(item.clone());
        }
    }
    out
}

/// An insertion-ordered set.
///
/// Iteration yields elements in first-insertion order; inserting an element
/// that is already present is a no-op.
#[derive(Debug, Clone)]
pub struct OrderedSet<T> {
    items: Vec<T>,
    index: HashSet<T>,
}

impl<T: Eq + Hash + Clone> OrderedSet<T> {
    /// An empty set.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index: HashSet::new(),
        }
    }

    /// An empty set with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            index: HashSet::with_capacity(capacity),
        }
    }

    /// Deduplicate `items` into a set, keeping first occurrences.
    pub fn from_slice(items: &[T]) -> Self {
        let mut set = Self::with_capacity(items.len());
        for item in items {
            set.insert(item.clone());
        }
        set
    }

    /// Insert `item`; returns `false` if it was already present.
    pub fn insert(&mut self, item: T) -> bool {
        if self.index.contains(&item) {
            return false;
        }
        self.index.insert(item.clone());
        self.items.push(item);
        true
    }

    /// True if `item` is present.
    pub fn contains(&self, item: &T) -> bool {
        self.index.contains(item)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Elements in first-insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Elements in first-insertion order, as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the set, returning its elements in order.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// `self` followed by the elements of `other` not already in `self`.
    pub fn union(&self, other: &Self) -> Self {
        let mut out = Self::with_capacity(self.len() + other.len());
        for item in self.iter().chain(other.iter()) {
            out.insert(item.clone());
        }
        out
    }

    /// Elements of `self` also in `other`, in `self`'s order.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut out = Self::with_capacity(self.len().min(other.len()));
        for item in self.iter() {
            if other.contains(item) {
                out.insert(item.clone());
            }
        }
        out
    }

    /// Exact Jaccard similarity `|self ∩ other| / |self ∪ other|`.
    pub fn jaccard(&self, other: &Self) -> Similarity {
        let inter = self.iter().filter(|&x| other.contains(x)).count();
        let union = self.len() + other.len() - inter;
        Similarity::from_counts(inter, union)
    }
}

impl<T: Eq + Hash + Clone> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> PartialEq for OrderedSet<T> {
    /// Order-sensitive: two sets with the same elements in a different
    /// insertion order are not equal.
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq + Hash + Clone> Eq for OrderedSet<T> {}

impl<T: Eq + Hash + Clone> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

impl<T: Eq + Hash + Clone> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
