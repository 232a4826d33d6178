//! Content indexers for the spotlight unified search index
//!
//! This crate provides:
//! - ContentIndexer trait: pure source -> items mapping
//! - Static indexers over in-process configuration (menu, routes,
//!   projects, skills)
//! - Dynamic indexers over persisted JSON collections (todos, gallery,
//!   calendar)
//! - Source enum naming each dynamic source's storage key and id prefix
//!
//! Every item id is namespaced by a stable source prefix (`todo-`,
//! `route-`, ...) so the orchestrator can select and replace exactly one
//! source's subset during incremental rebuilds.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collections;
pub mod menu;
pub mod projects;
pub mod routes;
pub mod skills;

use spotlight_core::SearchableItem;

pub use collections::{CalendarIndexer, GalleryIndexer, TodoIndexer};
pub use menu::{MenuEntry, MenuIndexer, MenuSection, NavMenu};
pub use projects::{Project, ProjectCatalog, ProjectIndexer};
pub use routes::{RouteDef, RouteIndexer, RouteTable};
pub use skills::{Skill, SkillIndexer, SkillSet};

// ============================================================================
// ContentIndexer Trait
// ============================================================================

/// Pure mapping from one content source to searchable items
///
/// Indexers have no side effects beyond reading their source. Static
/// indexers always succeed; dynamic indexers recover from a missing key
/// or malformed JSON by returning an empty list, so the index simply
/// omits that source until its data becomes valid again.
///
/// # Thread Safety
///
/// Indexers must be Send + Sync: the orchestrator re-runs them from
/// whichever thread triggers a rebuild.
pub trait ContentIndexer: Send + Sync {
    /// Produce this source's items
    fn index(&self) -> Vec<SearchableItem>;
}

// ============================================================================
// Source
// ============================================================================

/// Dynamic content source, the unit of incremental rebuild
///
/// Each source owns one storage key and one id prefix. The prefix is the
/// selector used to drop a source's old items before appending fresh
/// ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// Todo list collection
    Todos,
    /// Image gallery collection
    Gallery,
    /// Calendar event collection
    Calendar,
}

impl Source {
    /// All dynamic sources
    pub fn all() -> [Source; 3] {
        [Source::Todos, Source::Gallery, Source::Calendar]
    }

    /// Fixed storage key the source's JSON document lives under
    pub fn storage_key(&self) -> &'static str {
        match self {
            Source::Todos => "todos",
            Source::Gallery => "gallery",
            Source::Calendar => "calendarEvents",
        }
    }

    /// Id namespace prefix for this source's items
    pub fn prefix(&self) -> &'static str {
        match self {
            Source::Todos => "todo-",
            Source::Gallery => "gallery-",
            Source::Calendar => "calendar-",
        }
    }

    /// Map a storage key back to its source
    ///
    /// Used to dispatch storage-change notifications; unknown keys
    /// return None.
    pub fn for_storage_key(key: &str) -> Option<Source> {
        Source::all().into_iter().find(|s| s.storage_key() == key)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Build a stable id slug from arbitrary text
///
/// Lowercases and collapses runs of non-alphanumeric characters into
/// single dashes, trimming dashes at both ends.
///
/// # Example
///
/// ```
/// use spotlight_sources::slug;
///
/// assert_eq!(slug("/settings"), "settings");
/// assert_eq!(slug("Color Palette Generator"), "color-palette-generator");
/// ```
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            for lc in c.to_lowercase() {
                out.push(lc);
            }
        } else {
            pending_dash = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_round_trip() {
        for source in Source::all() {
            assert_eq!(Source::for_storage_key(source.storage_key()), Some(source));
        }
        assert_eq!(Source::for_storage_key("unrelated"), None);
    }

    #[test]
    fn test_source_prefixes_are_distinct() {
        let prefixes: Vec<_> = Source::all().iter().map(|s| s.prefix()).collect();
        assert_eq!(prefixes, vec!["todo-", "gallery-", "calendar-"]);
    }

    #[test]
    fn test_slug_basic() {
        assert_eq!(slug("Buy Milk"), "buy-milk");
        assert_eq!(slug("/projects"), "projects");
        assert_eq!(slug("Rust & WASM!"), "rust-wasm");
    }

    #[test]
    fn test_slug_collapses_runs() {
        assert_eq!(slug("a  --  b"), "a-b");
        assert_eq!(slug("---"), "");
    }
}
