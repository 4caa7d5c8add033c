//! End-to-end text flows: raw text to shingle list, and raw texts to pairwise
//! similarity reports.
//!
//! These are what the `shingle` and `jaccard` binaries call. Stage-by-stage
//! progress is reported through `tracing` at `debug`; degenerate inputs are
//! reported at `warn` and resolved to empty results.
//!
//! # Example
//!
//! ```rust
//! use shingleset::pipeline::{shingle_text, ShingleConfig};
//!
//! let cfg = ShingleConfig::default();
//! let out = shingle_text("a b c", &cfg).unwrap();
//! assert_eq!(out.delimited, "a b,b c");
//! ```

use std::num::NonZeroUsize;

use tracing::{debug, info, warn};

use crate::dedup::dedup;
use crate::error::{Error, Result};
use crate::hash::hash_tokens;
use crate::shingle::{join_delimited, shingles};
use crate::similarity::{pairwise, Document, PairReport};
use crate::tokenize::{tokenize_owned, Delimiters};

/// Configuration for turning text into a delimited shingle list.
#[derive(Debug, Clone)]
pub struct ShingleConfig {
    /// Words per shingle (must be >= 1).
    pub size: usize,
    /// Characters separating words in the input.
    pub delimiters: Delimiters,
    /// Character placed between shingles in the output.
    pub separator: char,
}

impl Default for ShingleConfig {
    fn default() -> Self {
        Self {
            size: 2,
            delimiters: Delimiters::words(),
            separator: ',',
        }
    }
}

impl ShingleConfig {
    /// Check the configuration and return the shingle size as `NonZeroUsize`.
    ///
    /// The separator may (and by default does) appear among the delimiters;
    /// that only guarantees no shingle ever contains it.
    pub fn validate(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.size).ok_or(Error::InvalidParam("shingle size must be at least 1"))
    }
}

/// Result of shingling one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShingleOutput {
    /// Number of tokens the input produced.
    pub token_count: usize,
    /// Distinct shingles, in first-occurrence order.
    pub shingles: Vec<String>,
    /// `shingles` joined by the configured separator.
    pub delimited: String,
}

/// Tokenize, shingle, deduplicate and join `text`.
///
/// Text with no tokens, or with fewer tokens than the shingle size, yields
/// an empty output rather than an error.
pub fn shingle_text(text: &str, config: &ShingleConfig) -> Result<ShingleOutput> {
    let size = config.validate()?;

    let tokens = tokenize_owned(text, &config.delimiters);
    debug!(tokens = tokens.len(), "tokenized input");
    if tokens.is_empty() {
        warn!("input contains no tokens; output will be empty");
    } else if tokens.len() < size.get() {
        warn!(
            tokens = tokens.len(),
            size = size.get(),
            "fewer tokens than the shingle size; output will be empty"
        );
    }

    let all = shingles(&tokens, size);
    debug!(shingles = all.len(), size = size.get(), "generated shingles");

    let distinct = dedup(&all);
    debug!(
        distinct = distinct.len(),
        removed = all.len() - distinct.len(),
        "removed duplicate shingles"
    );

    let delimited = join_delimited(&distinct, config.separator);
    Ok(ShingleOutput {
        token_count: tokens.len(),
        shingles: distinct,
        delimited,
    })
}

/// Configuration for comparing documents.
#[derive(Debug, Clone)]
pub struct JaccardConfig {
    /// Characters separating tokens in each document.
    pub delimiters: Delimiters,
}

impl Default for JaccardConfig {
    fn default() -> Self {
        Self {
            delimiters: Delimiters::shingle_list(),
        }
    }
}

/// Reduce one document's text to its distinct token hashes.
pub fn load_document(
    id: impl Into<String>,
    text: &str,
    config: &JaccardConfig,
) -> Document {
    let id = id.into();
    let tokens = tokenize_owned(text, &config.delimiters);
    debug!(document = %id, tokens = tokens.len(), "tokenized document");
    if tokens.is_empty() {
        warn!(document = %id, "document contains no tokens");
    }

    let hashes = hash_tokens(&tokens);
    let hashed = hashes.len();
    let doc = Document::from_hashes(id, hashes.into_iter().collect());
    debug!(document = %doc.id, hashed, distinct = doc.len(), "hashed document");
    doc
}

/// Compare every unordered pair of `(id, text)` documents.
///
/// Documents are processed in the given order; reports come back in
/// `(0,1), (0,2), ..., (1,2), ...` order.
pub fn compare_documents<I, S>(inputs: I, config: &JaccardConfig) -> Vec<PairReport>
where
    I: IntoIterator<Item = (S, String)>,
    S: Into<String>,
{
    let docs: Vec<Document> = inputs
        .into_iter()
        .map(|(id, text)| load_document(id, &text, config))
        .collect();
    if docs.len() < 2 {
        warn!(
            documents = docs.len(),
            "need at least two documents to compare"
        );
    }

    let reports = pairwise(&docs);
    for r in &reports {
        debug!(
            left = %r.left_id,
            right = %r.right_id,
            intersection = r.comparison.intersection_len,
            union = r.comparison.union_len,
            "compared documents"
        );
        if r.comparison.similarity.is_undefined() {
            warn!(
                left = %r.left_id,
                right = %r.right_id,
                "both documents are empty; similarity is undefined"
            );
        }
    }
    info!(documents = docs.len(), pairs = reports.len(), "comparison complete");
    reports
}
