//! Core types for the spotlight unified search engine
//!
//! This crate defines the foundational types used throughout the system:
//! - SearchableItem: One indexable unit, keyed by a source-prefixed id
//! - ItemType: Discriminates between kinds of searchable content
//! - SearchResult / SearchResultTree: Scored, categorized query output
//! - Span / MatchLocation: Highlighting metadata
//! - IndexStats: Index introspection counts
//! - Error: Error type hierarchy
//! - Keyword extraction: normalized tokens, prefixes, and bigrams

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod keywords;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use keywords::{extract_keywords, generate_bigrams};
pub use types::{
    IndexStats, ItemType, MatchLocation, SearchResult, SearchResultTree, SearchableItem, Span,
    Spans,
};
