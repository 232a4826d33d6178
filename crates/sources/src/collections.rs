//! Dynamic collection indexers (todos, gallery, calendar)
//!
//! These sources live in the persistence substrate as JSON array
//! documents under fixed keys. Reads happen only at (re)build time.
//! A missing key, an unreadable store, or malformed JSON all degrade to
//! an empty item list: the failure is logged and the index simply omits
//! that source until the data becomes valid and a rebuild occurs.

use crate::{ContentIndexer, Source};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use spotlight_core::{extract_keywords, ItemType, SearchableItem};
use spotlight_storage::Storage;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

// ============================================================================
// Record shapes
// ============================================================================

/// Record id as stored: features write string ids, older data may carry
/// numeric ones
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RecordId {
    Text(String),
    Number(i64),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Text(s) => f.write_str(s),
            RecordId::Number(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TodoRecord {
    id: RecordId,
    title: String,
    #[serde(default)]
    priority: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct GalleryRecord {
    id: RecordId,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CalendarRecord {
    id: RecordId,
    title: String,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

// ============================================================================
// Shared read path
// ============================================================================

/// Read and parse one source's JSON array document
///
/// Every failure mode returns an empty list; parse failures are logged
/// so a host that cares can surface them.
fn read_records<T: DeserializeOwned>(storage: &dyn Storage, source: Source) -> Vec<T> {
    let key = source.storage_key();
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return vec![],
        Err(e) => {
            warn!(target: "spotlight::sources", key, error = %e, "Storage read failed");
            return vec![];
        }
    };
    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(records) => records,
        Err(e) => {
            warn!(target: "spotlight::sources", key, error = %e, "Malformed collection document");
            vec![]
        }
    }
}

// ============================================================================
// TodoIndexer
// ============================================================================

/// Indexer over the persisted todo list
pub struct TodoIndexer {
    storage: Arc<dyn Storage>,
}

impl TodoIndexer {
    /// Create an indexer reading from the given store
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        TodoIndexer { storage }
    }
}

impl ContentIndexer for TodoIndexer {
    fn index(&self) -> Vec<SearchableItem> {
        read_records::<TodoRecord>(self.storage.as_ref(), Source::Todos)
            .into_iter()
            .map(|record| {
                let mut keywords = vec![record.title.to_lowercase(), "todo".to_string()];
                keywords.extend(extract_keywords(&record.title));
                if let Some(priority) = &record.priority {
                    keywords.push(priority.to_lowercase());
                }
                if let Some(category) = &record.category {
                    keywords.push(category.to_lowercase());
                }
                let status = if record.completed { "done" } else { "pending" };
                keywords.push(status.to_string());

                SearchableItem::new(
                    format!("todo-{}", record.id),
                    ItemType::Feature,
                    record.title,
                    "Todo Items",
                )
                .with_route("/todo")
                .with_parent("Features")
                .with_keywords(keywords)
            })
            .collect()
    }
}

// ============================================================================
// GalleryIndexer
// ============================================================================

/// Indexer over the persisted image gallery
pub struct GalleryIndexer {
    storage: Arc<dyn Storage>,
}

impl GalleryIndexer {
    /// Create an indexer reading from the given store
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        GalleryIndexer { storage }
    }
}

impl ContentIndexer for GalleryIndexer {
    fn index(&self) -> Vec<SearchableItem> {
        read_records::<GalleryRecord>(self.storage.as_ref(), Source::Gallery)
            .into_iter()
            .map(|record| {
                let mut keywords = vec![record.title.to_lowercase(), "gallery".to_string()];
                keywords.extend(extract_keywords(&record.title));
                keywords.extend(record.tags.iter().map(|t| t.to_lowercase()));

                let mut item = SearchableItem::new(
                    format!("gallery-{}", record.id),
                    ItemType::Feature,
                    record.title,
                    "Gallery",
                )
                .with_route("/gallery")
                .with_parent("Features")
                .with_keywords(keywords);
                if let Some(description) = record.description {
                    item = item.with_description(description);
                }
                item
            })
            .collect()
    }
}

// ============================================================================
// CalendarIndexer
// ============================================================================

/// Indexer over the persisted calendar events
pub struct CalendarIndexer {
    storage: Arc<dyn Storage>,
}

impl CalendarIndexer {
    /// Create an indexer reading from the given store
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        CalendarIndexer { storage }
    }
}

impl ContentIndexer for CalendarIndexer {
    fn index(&self) -> Vec<SearchableItem> {
        read_records::<CalendarRecord>(self.storage.as_ref(), Source::Calendar)
            .into_iter()
            .map(|record| {
                let mut keywords = vec![record.title.to_lowercase(), "event".to_string()];
                keywords.extend(extract_keywords(&record.title));
                if let Some(date) = &record.date {
                    keywords.push(date.to_lowercase());
                    // ISO dates additionally index as month name + year so
                    // "august" or "2026" find the event
                    if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
                        keywords.push(parsed.format("%B").to_string().to_lowercase());
                        keywords.push(parsed.format("%Y").to_string());
                    }
                }

                let mut item = SearchableItem::new(
                    format!("calendar-{}", record.id),
                    ItemType::Feature,
                    record.title,
                    "Calendar Events",
                )
                .with_route("/calendar")
                .with_parent("Features")
                .with_keywords(keywords);
                if let Some(description) = record.description {
                    item = item.with_description(description);
                }
                item
            })
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use spotlight_storage::MemoryStore;

    fn store_with(key: &str, doc: &str) -> Arc<dyn Storage> {
        Arc::new(MemoryStore::with_entries([(key, doc)]))
    }

    #[test]
    fn test_todos_basic() {
        let storage = store_with(
            "todos",
            r#"[{"id":"1","title":"Buy milk","priority":"low"}]"#,
        );
        let items = TodoIndexer::new(storage).index();

        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.id, "todo-1");
        assert_eq!(item.title, "Buy milk");
        assert_eq!(item.category, "Todo Items");
        assert_eq!(item.route.as_deref(), Some("/todo"));
        assert!(item.keywords.contains(&"low".to_string()));
        assert!(item.keywords.contains(&"milk".to_string()));
        assert!(item.keywords.contains(&"pending".to_string()));
    }

    #[test]
    fn test_todos_numeric_ids() {
        let storage = store_with("todos", r#"[{"id":42,"title":"Water plants"}]"#);
        let items = TodoIndexer::new(storage).index();
        assert_eq!(items[0].id, "todo-42");
    }

    #[test]
    fn test_missing_key_yields_empty() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStore::new());
        assert!(TodoIndexer::new(storage.clone()).index().is_empty());
        assert!(GalleryIndexer::new(storage.clone()).index().is_empty());
        assert!(CalendarIndexer::new(storage).index().is_empty());
    }

    #[test]
    fn test_malformed_json_yields_empty() {
        let storage = store_with("gallery", "{not json");
        let items = GalleryIndexer::new(storage).index();
        assert!(items.is_empty());
    }

    #[test]
    fn test_wrong_shape_yields_empty() {
        // Valid JSON, but an object where an array is expected
        let storage = store_with("todos", r#"{"id":"1","title":"x"}"#);
        assert!(TodoIndexer::new(storage).index().is_empty());
    }

    #[test]
    fn test_gallery_tags_indexed() {
        let storage = store_with(
            "gallery",
            r#"[{"id":"sunset","title":"Harbor Sunset","tags":["Travel","Sea"],"description":"Golden hour at the harbor"}]"#,
        );
        let items = GalleryIndexer::new(storage).index();

        let item = &items[0];
        assert_eq!(item.id, "gallery-sunset");
        assert_eq!(item.category, "Gallery");
        assert!(item.keywords.contains(&"travel".to_string()));
        assert!(item.keywords.contains(&"sea".to_string()));
        assert_eq!(
            item.description.as_deref(),
            Some("Golden hour at the harbor")
        );
    }

    #[test]
    fn test_calendar_date_keywords() {
        let storage = store_with(
            "calendarEvents",
            r#"[{"id":"1","title":"Dentist","date":"2026-08-14"}]"#,
        );
        let items = CalendarIndexer::new(storage).index();

        let item = &items[0];
        assert_eq!(item.id, "calendar-1");
        assert_eq!(item.category, "Calendar Events");
        assert!(item.keywords.contains(&"2026-08-14".to_string()));
        assert!(item.keywords.contains(&"august".to_string()));
        assert!(item.keywords.contains(&"2026".to_string()));
    }

    #[test]
    fn test_calendar_unparseable_date_still_indexed() {
        let storage = store_with(
            "calendarEvents",
            r#"[{"id":"1","title":"Standup","date":"next tuesday"}]"#,
        );
        let items = CalendarIndexer::new(storage).index();
        assert!(items[0].keywords.contains(&"next tuesday".to_string()));
        assert!(!items[0].keywords.iter().any(|k| k == "august"));
    }

    #[test]
    fn test_indexers_are_pure() {
        let storage = store_with("todos", r#"[{"id":"1","title":"Buy milk"}]"#);
        let indexer = TodoIndexer::new(storage);
        assert_eq!(indexer.index(), indexer.index());
    }
}
