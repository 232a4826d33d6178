//! Spotlight - unified "search everything" engine
//!
//! Spotlight unifies heterogeneous content (navigation entries, route
//! definitions, a project catalog, a skills list, and user-editable
//! collections read from a key-value store) into one queryable index,
//! matches free-text queries against multiple weighted fields, and
//! returns scored, highlighted results grouped by category in global
//! best-first order.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use spotlight::{
//!     MemoryStore, NavMenu, ProjectCatalog, RouteDef, RouteTable, SkillSet, UnifiedSearch,
//! };
//!
//! let storage = Arc::new(MemoryStore::new());
//! let routes = RouteTable::new().with_route(RouteDef::new("/settings", "Settings"));
//!
//! let search = UnifiedSearch::new(
//!     NavMenu::new(),
//!     routes,
//!     ProjectCatalog::new(),
//!     SkillSet::new(),
//!     storage,
//! );
//!
//! search.set_query("settings");
//! let trees = search.results();
//! assert_eq!(trees[0].items[0].title, "Settings");
//! ```
//!
//! # Architecture
//!
//! Content indexers map each source to a flat item list; the index
//! builder assembles one immutable snapshot; the scorer and ranker turn
//! `(query, snapshot)` into an ordered result tree. The [`UnifiedSearch`]
//! orchestrator owns the snapshot and exposes full, per-source, and
//! single-item rebuild paths.

pub use spotlight_core::{
    extract_keywords, generate_bigrams, Error, IndexStats, ItemType, MatchLocation, Result,
    SearchResult, SearchResultTree, SearchableItem, Span,
};
pub use spotlight_search::{
    match_string, rank, score_item, SearchIndex, UnifiedSearch, MAX_PER_CATEGORY, MAX_RESULTS,
};
pub use spotlight_sources::{
    slug, ContentIndexer, MenuEntry, MenuIndexer, MenuSection, NavMenu, Project, ProjectCatalog,
    ProjectIndexer, RouteDef, RouteIndexer, RouteTable, Skill, SkillIndexer, SkillSet, Source,
};
pub use spotlight_storage::{JsonFileStore, MemoryStore, Storage};
