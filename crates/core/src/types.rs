//! Core data model for the unified search engine
//!
//! This module defines the foundational search types used throughout the system:
//! - SearchableItem: One indexable unit produced by a content indexer
//! - ItemType: Discriminates between kinds of searchable content
//! - Span: Half-open character range used for match highlighting
//! - MatchLocation: Which field of an item a query matched
//! - SearchResult: Output of scoring one item against one query
//! - SearchResultTree: One display category's ordered results
//! - IndexStats: Index introspection counts for diagnostics

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ============================================================================
// ItemType
// ============================================================================

/// Kind of searchable content
///
/// Determines how the rendering collaborator presents a result
/// (navigation target, feature entry, settings toggle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemType {
    /// An application route (page)
    Route,
    /// An entry from the navigation menu
    MenuItem,
    /// A feature-owned record (project, skill, todo, gallery image, event)
    Feature,
    /// A settings entry
    Setting,
}

// ============================================================================
// SearchableItem
// ============================================================================

/// One indexable unit
///
/// Produced by a content indexer, consumed by the index builder.
/// The `id` is globally unique and namespaced by source (`todo-<id>`,
/// `route-<path>`, ...); it is stable across rebuilds for the same
/// underlying record and serves as the deduplication and
/// incremental-update key.
///
/// # Example
///
/// ```
/// use spotlight_core::{ItemType, SearchableItem};
///
/// let item = SearchableItem::new("route-/settings", ItemType::Route, "Settings", "Routes")
///     .with_route("/settings")
///     .with_keywords(vec!["settings".into(), "set".into()]);
///
/// assert_eq!(item.id, "route-/settings");
/// assert!(item.description.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchableItem {
    /// Globally unique id, namespaced by source prefix
    pub id: String,

    /// Kind of content
    #[serde(rename = "type")]
    pub item_type: ItemType,

    /// Display title (primary match field)
    pub title: String,

    /// Optional longer description (secondary match field)
    pub description: Option<String>,

    /// Optional navigation target
    pub route: Option<String>,

    /// Precomputed lowercase search tokens; not deduplicated,
    /// order irrelevant to matching
    pub keywords: Vec<String>,

    /// Grouping key for display (e.g. "Projects", "Todo Items")
    pub category: String,

    /// Optional breadcrumb ancestor category (e.g. "Features")
    pub parent: Option<String>,

    /// Optional icon name for the rendering layer
    pub icon: Option<String>,
}

impl SearchableItem {
    /// Create a new SearchableItem with required fields
    pub fn new(
        id: impl Into<String>,
        item_type: ItemType,
        title: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        SearchableItem {
            id: id.into(),
            item_type,
            title: title.into(),
            description: None,
            route: None,
            keywords: vec![],
            category: category.into(),
            parent: None,
            icon: None,
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set navigation route
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Builder: set keyword list
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    /// Builder: set breadcrumb parent category
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Builder: set icon name
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

// ============================================================================
// Span
// ============================================================================

/// Half-open character range `[start, end)` into a matched field
///
/// Offsets are character offsets, not byte offsets, so the rendering
/// layer can slice multi-byte text safely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start offset
    pub start: usize,
    /// Exclusive end offset
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check whether the span covers no characters
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Highlight span list
///
/// Most matches produce one or two spans; SmallVec keeps the common
/// case off the heap.
pub type Spans = SmallVec<[Span; 4]>;

// ============================================================================
// MatchLocation
// ============================================================================

/// Which field group of an item the winning match came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLocation {
    /// Matched against the title
    Title,
    /// Matched against the description
    Description,
    /// Matched against a precomputed keyword
    Keyword,
}

// ============================================================================
// SearchResult
// ============================================================================

/// Output of scoring one item against one query
///
/// Item fields are copied out so the rendering layer never holds a
/// reference into an index snapshot. Title and description highlighting
/// are mutually exclusive: only one field is visually emphasized per
/// result, and keyword-only matches carry no highlight spans at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Source item id
    pub id: String,
    /// Source item title
    pub title: String,
    /// Source item description
    pub description: Option<String>,
    /// Source item navigation target
    pub route: Option<String>,
    /// Source item display category
    pub category: String,
    /// Source item kind
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Source item icon
    pub icon: Option<String>,
    /// Source item breadcrumb parent
    pub parent: Option<String>,
    /// Combined match score (string tier x location multiplier)
    pub match_score: f32,
    /// Character ranges to emphasize in `title`
    pub highlight_ranges: Spans,
    /// Character ranges to emphasize in `description`; populated only
    /// when the winning match came from the description
    pub description_highlight_ranges: Spans,
    /// Field group the winning match came from
    pub match_location: MatchLocation,
    /// Breadcrumb path, `[parent?, category]`
    pub path: Vec<String>,
}

// ============================================================================
// SearchResultTree
// ============================================================================

/// One category's results, in best-first order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultTree {
    /// Display category
    pub category: String,
    /// Ordered results within the category
    pub items: Vec<SearchResult>,
}

impl SearchResultTree {
    /// Create a new tree for a category
    pub fn new(category: impl Into<String>) -> Self {
        SearchResultTree {
            category: category.into(),
            items: vec![],
        }
    }
}

// ============================================================================
// IndexStats
// ============================================================================

/// Index introspection counts for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndexStats {
    /// Total indexed items
    pub total_items: usize,
    /// Distinct display categories
    pub categories: usize,
    /// Distinct keyword tokens
    pub keywords: usize,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_builder() {
        let item = SearchableItem::new("project-blog", ItemType::Feature, "Blog", "Projects")
            .with_description("A static blog")
            .with_route("/projects")
            .with_parent("Features")
            .with_icon("folder")
            .with_keywords(vec!["blog".into()]);

        assert_eq!(item.id, "project-blog");
        assert_eq!(item.description.as_deref(), Some("A static blog"));
        assert_eq!(item.route.as_deref(), Some("/projects"));
        assert_eq!(item.parent.as_deref(), Some("Features"));
        assert_eq!(item.icon.as_deref(), Some("folder"));
        assert_eq!(item.keywords, vec!["blog".to_string()]);
    }

    #[test]
    fn test_item_type_serde_kebab_case() {
        let json = serde_json::to_string(&ItemType::MenuItem).unwrap();
        assert_eq!(json, "\"menu-item\"");

        let back: ItemType = serde_json::from_str("\"setting\"").unwrap();
        assert_eq!(back, ItemType::Setting);
    }

    #[test]
    fn test_span_len() {
        let span = Span::new(2, 6);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
        assert!(Span::new(3, 3).is_empty());
    }

    #[test]
    fn test_match_location_serde() {
        let json = serde_json::to_string(&MatchLocation::Keyword).unwrap();
        assert_eq!(json, "\"keyword\"");
    }

    #[test]
    fn test_item_serde_round_trip() {
        let item = SearchableItem::new("todo-1", ItemType::Feature, "Buy milk", "Todo Items")
            .with_route("/todo");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"feature\""));

        let back: SearchableItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
