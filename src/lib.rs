//! `shingleset`: word shingling and exact Jaccard similarity.
//!
//! This crate covers two small text-analysis flows:
//! - decompose a document into overlapping word groups (shingles) and emit
//!   them as a comma-delimited, duplicate-free list;
//! - hash each document's tokens and compare documents pairwise by
//!   \(J(A,B) = |A ∩ B| / |A ∪ B|\).
//!
//! Scope here is *primitives plus the two flows*: tokenizing, shingling,
//! a small polynomial token hash, first-occurrence deduplication, ordered
//! set algebra, and similarity reports. File handling and flag parsing live
//! in the `shingle` and `jaccard` binaries.
//!
//! Everything is sequential and deterministic: the same input always yields
//! the same tokens, hashes, and output order.

#![warn(missing_docs)]

pub mod dedup;
pub mod error;
pub mod hash;
pub mod pipeline;
pub mod set;
pub mod shingle;
pub mod similarity;
pub mod tokenize;

pub use dedup::{dedup, dedup_by_scan};
pub use error::{validate_text, Error, Result};
pub use hash::{
    hash_bytes, hash_str, hash_tokens, hash_value, try_hash, PolyHasher, TokenHash, TABLE_SIZE,
};
pub use pipeline::{
    compare_documents, load_document, shingle_text, JaccardConfig, ShingleConfig, ShingleOutput,
};
pub use set::{intersection, union, OrderedSet};
pub use shingle::{join_delimited, shingles};
pub use similarity::{jaccard, pairwise, Comparison, Document, PairReport, Similarity};
pub use tokenize::{tokenize, tokenize_owned, Delimiters};
