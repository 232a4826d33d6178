//! Immutable index snapshot and its builder
//!
//! This module provides:
//! - SearchIndex: one fully-built, immutable snapshot of all searchable
//!   items with by-id, by-category, and by-keyword lookup structures
//! - SearchIndex::build: the single-pass builder
//!
//! Rebuilding is the only mutation path: every update constructs a new
//! snapshot from a complete item list rather than touching map entries
//! in place, so a query in flight against an old snapshot is never torn
//! by a concurrent rebuild. The builder itself has no concept of
//! "incremental" - callers assemble the item list and hand it over.

use rustc_hash::FxHashMap;
use spotlight_core::{IndexStats, SearchableItem};
use std::collections::BTreeSet;
use tracing::debug;

// ============================================================================
// SearchIndex
// ============================================================================

/// Immutable snapshot of the searchable content
///
/// Insertion order of `items` is preserved and doubles as the stable
/// tie-break proxy during ranking. Duplicate ids are not validated:
/// the last write wins in the by-id lookup while earlier duplicates
/// remain in `items` - callers guarantee id-prefix uniqueness per
/// source.
#[derive(Debug, Default)]
pub struct SearchIndex {
    items: Vec<SearchableItem>,
    items_by_id: FxHashMap<String, usize>,
    ids_by_category: FxHashMap<String, BTreeSet<String>>,
    ids_by_keyword: FxHashMap<String, BTreeSet<String>>,
}

impl SearchIndex {
    /// Create an empty snapshot
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot from a complete item list, single pass
    pub fn build(items: Vec<SearchableItem>) -> Self {
        let mut items_by_id = FxHashMap::default();
        let mut ids_by_category: FxHashMap<String, BTreeSet<String>> = FxHashMap::default();
        let mut ids_by_keyword: FxHashMap<String, BTreeSet<String>> = FxHashMap::default();

        for (position, item) in items.iter().enumerate() {
            items_by_id.insert(item.id.clone(), position);
            ids_by_category
                .entry(item.category.clone())
                .or_default()
                .insert(item.id.clone());
            for keyword in &item.keywords {
                ids_by_keyword
                    .entry(keyword.clone())
                    .or_default()
                    .insert(item.id.clone());
            }
        }

        debug!(
            target: "spotlight::index",
            items = items.len(),
            categories = ids_by_category.len(),
            keywords = ids_by_keyword.len(),
            "Index snapshot built"
        );

        SearchIndex {
            items,
            items_by_id,
            ids_by_category,
            ids_by_keyword,
        }
    }

    /// All items in insertion (indexing) order
    pub fn items(&self) -> &[SearchableItem] {
        &self.items
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&SearchableItem> {
        self.items_by_id.get(id).map(|&i| &self.items[i])
    }

    /// Check whether an id is indexed
    pub fn contains(&self, id: &str) -> bool {
        self.items_by_id.contains_key(id)
    }

    /// Ids indexed under a display category
    pub fn ids_for_category(&self, category: &str) -> Option<&BTreeSet<String>> {
        self.ids_by_category.get(category)
    }

    /// Ids indexed under a keyword token
    pub fn ids_for_keyword(&self, keyword: &str) -> Option<&BTreeSet<String>> {
        self.ids_by_keyword.get(keyword)
    }

    /// Number of indexed items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the snapshot holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Introspection counts for diagnostics
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            total_items: self.items.len(),
            categories: self.ids_by_category.len(),
            keywords: self.ids_by_keyword.len(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
