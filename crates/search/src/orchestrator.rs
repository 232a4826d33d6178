//! Unified search orchestrator
//!
//! This module provides:
//! - UnifiedSearch: owner of the current index snapshot and query
//! - Full and per-source incremental rebuild paths
//! - Single-item upsert/remove maintenance
//! - Query handling with empty-query short-circuit
//!
//! UnifiedSearch holds one mutable reference to the current immutable
//! SearchIndex snapshot and is otherwise stateless. Rebuilds swap in a
//! brand-new snapshot rather than mutating the old one, so a query in
//! flight against an old snapshot is never torn by a concurrent
//! rebuild. Callers should debounce keystrokes (~150ms) before calling
//! set_query: every result computation is a full linear scan over the
//! item list.

use crate::index::SearchIndex;
use crate::ranker::rank;
use crate::scorer::score_item;
use parking_lot::RwLock;
use spotlight_core::{IndexStats, SearchResultTree, SearchableItem};
use spotlight_sources::{
    CalendarIndexer, ContentIndexer, GalleryIndexer, MenuIndexer, NavMenu, ProjectCatalog,
    ProjectIndexer, RouteIndexer, RouteTable, SkillIndexer, SkillSet, Source, TodoIndexer,
};
use spotlight_storage::Storage;
use std::sync::Arc;
use tracing::{debug, info};

// ============================================================================
// UnifiedSearch
// ============================================================================

/// Orchestrator for the "search everything" feature
///
/// Owns all seven content indexers and the current snapshot. The host
/// application constructs exactly one instance and calls the update
/// hooks after mutating a persisted collection (or on a storage-change
/// notification from another session).
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use spotlight_search::UnifiedSearch;
/// use spotlight_sources::{NavMenu, ProjectCatalog, RouteTable, SkillSet};
/// use spotlight_storage::MemoryStore;
///
/// let storage = Arc::new(MemoryStore::new());
/// let search = UnifiedSearch::new(
///     NavMenu::new(),
///     RouteTable::new(),
///     ProjectCatalog::new(),
///     SkillSet::new(),
///     storage,
/// );
///
/// search.set_query("anything");
/// assert!(search.results().is_empty());
/// ```
pub struct UnifiedSearch {
    menu: MenuIndexer,
    routes: RouteIndexer,
    projects: ProjectIndexer,
    skills: SkillIndexer,
    todos: TodoIndexer,
    gallery: GalleryIndexer,
    calendar: CalendarIndexer,
    index: RwLock<Arc<SearchIndex>>,
    query: RwLock<String>,
}

impl UnifiedSearch {
    /// Create the orchestrator and build the first snapshot
    ///
    /// Runs every indexer once; the instance is Ready as soon as this
    /// returns. Dynamic sources with missing or malformed data simply
    /// contribute no items.
    pub fn new(
        menu: NavMenu,
        routes: RouteTable,
        projects: ProjectCatalog,
        skills: SkillSet,
        storage: Arc<dyn Storage>,
    ) -> Self {
        let orchestrator = UnifiedSearch {
            menu: MenuIndexer::new(menu),
            routes: RouteIndexer::new(routes),
            projects: ProjectIndexer::new(projects),
            skills: SkillIndexer::new(skills),
            todos: TodoIndexer::new(storage.clone()),
            gallery: GalleryIndexer::new(storage.clone()),
            calendar: CalendarIndexer::new(storage),
            index: RwLock::new(Arc::new(SearchIndex::empty())),
            query: RwLock::new(String::new()),
        };
        orchestrator.rebuild_index();
        orchestrator
    }

    // ========================================================================
    // Index Maintenance
    // ========================================================================

    /// Discard the snapshot and rebuild from all sources
    pub fn rebuild_index(&self) {
        let snapshot = Arc::new(SearchIndex::build(self.collect_all()));
        let stats = snapshot.stats();
        *self.index.write() = snapshot;
        info!(
            target: "spotlight::search",
            items = stats.total_items,
            categories = stats.categories,
            "Index rebuilt"
        );
    }

    /// Re-index only the todo collection
    pub fn update_todos(&self) {
        self.rebuild_source(Source::Todos);
    }

    /// Re-index only the gallery collection
    pub fn update_gallery(&self) {
        self.rebuild_source(Source::Gallery);
    }

    /// Re-index only the calendar collection
    pub fn update_calendar(&self) {
        self.rebuild_source(Source::Calendar);
    }

    /// Dispatch a storage-change notification to the owning source
    ///
    /// Another tab or session writing a collection key lands here;
    /// unknown keys are ignored.
    pub fn on_storage_change(&self, key: &str) {
        match Source::for_storage_key(key) {
            Some(source) => self.rebuild_source(source),
            None => debug!(target: "spotlight::search", key, "Ignoring unrelated storage key"),
        }
    }

    /// Remove an item by id, if present
    pub fn remove_item(&self, id: &str) {
        let current = self.snapshot();
        if !current.contains(id) {
            return;
        }
        let items: Vec<SearchableItem> = current
            .items()
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        *self.index.write() = Arc::new(SearchIndex::build(items));
    }

    /// Insert or replace a single item by id
    pub fn upsert_item(&self, item: SearchableItem) {
        let current = self.snapshot();
        let mut items: Vec<SearchableItem> = current
            .items()
            .iter()
            .filter(|existing| existing.id != item.id)
            .cloned()
            .collect();
        items.push(item);
        *self.index.write() = Arc::new(SearchIndex::build(items));
    }

    /// Replace one dynamic source's subset and rebuild the snapshot
    ///
    /// Other sources' items are carried over untouched, never
    /// re-derived; indexers are pure functions keyed by stable id
    /// prefixes, which is what makes this selective replacement sound.
    fn rebuild_source(&self, source: Source) {
        let fresh = match source {
            Source::Todos => self.todos.index(),
            Source::Gallery => self.gallery.index(),
            Source::Calendar => self.calendar.index(),
        };
        let fresh_count = fresh.len();

        let current = self.snapshot();
        let mut items: Vec<SearchableItem> = current
            .items()
            .iter()
            .filter(|item| !item.id.starts_with(source.prefix()))
            .cloned()
            .collect();
        items.extend(fresh);

        *self.index.write() = Arc::new(SearchIndex::build(items));
        debug!(
            target: "spotlight::search",
            key = source.storage_key(),
            items = fresh_count,
            "Source re-indexed"
        );
    }

    /// Run all indexers in their fixed order
    fn collect_all(&self) -> Vec<SearchableItem> {
        let mut items = Vec::new();
        items.extend(self.menu.index());
        items.extend(self.routes.index());
        items.extend(self.projects.index());
        items.extend(self.skills.index());
        items.extend(self.todos.index());
        items.extend(self.gallery.index());
        items.extend(self.calendar.index());
        items
    }

    // ========================================================================
    // Query Handling
    // ========================================================================

    /// Set the held query text
    pub fn set_query(&self, text: impl Into<String>) {
        *self.query.write() = text.into();
    }

    /// Clear the held query
    pub fn clear_query(&self) {
        self.query.write().clear();
    }

    /// The held query text, as set
    pub fn query(&self) -> String {
        self.query.read().clone()
    }

    /// Results for the held query against the current snapshot
    ///
    /// Pure function of (query, snapshot); recomputed on every call, no
    /// result is cached across snapshots.
    pub fn results(&self) -> Vec<SearchResultTree> {
        let query = self.query.read().clone();
        Self::compute(&query, &self.snapshot())
    }

    /// One-shot query against the current snapshot
    pub fn search(&self, query: &str) -> Vec<SearchResultTree> {
        Self::compute(query, &self.snapshot())
    }

    /// Score, rank, and group; empty queries short-circuit before the
    /// scorer ever runs
    fn compute(query: &str, index: &SearchIndex) -> Vec<SearchResultTree> {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            return vec![];
        }

        let scored = index
            .items()
            .iter()
            .filter_map(|item| score_item(&normalized, item).map(|m| m.into_result(item)))
            .collect();
        rank(scored)
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// The current immutable snapshot
    pub fn snapshot(&self) -> Arc<SearchIndex> {
        self.index.read().clone()
    }

    /// Index introspection counts for diagnostics
    pub fn stats(&self) -> IndexStats {
        self.snapshot().stats()
    }
}

// ============================================================================
// Tests
// ============================================================================
