//! Search engine for the spotlight "search everything" feature
//!
//! This crate provides:
//! - SearchIndex: immutable snapshot with by-id/category/keyword lookups
//! - match_string / score_item: tiered fuzzy matching with highlights
//! - rank: deduplication, global ordering, and category grouping
//! - UnifiedSearch: the orchestrator owning snapshot and query state
//!
//! # Usage
//!
//! ```ignore
//! use spotlight_search::UnifiedSearch;
//!
//! let search = UnifiedSearch::new(menu, routes, projects, skills, storage);
//! search.set_query("sett");
//! for tree in search.results() {
//!     println!("{} ({} hits)", tree.category, tree.items.len());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod orchestrator;
pub mod ranker;
pub mod scorer;

// Re-export commonly used types
pub use index::SearchIndex;
pub use orchestrator::UnifiedSearch;
pub use ranker::{rank, MAX_PER_CATEGORY, MAX_RESULTS};
pub use scorer::{match_string, score_item, ItemMatch, StringMatch};
