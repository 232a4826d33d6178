//! Route table indexer
//!
//! Reads the application's route table (paths plus view names, the view
//! references themselves being opaque to this engine) and maps every
//! route to a searchable item so pages are reachable from search.

use crate::ContentIndexer;
use spotlight_core::{extract_keywords, ItemType, SearchableItem};

// ============================================================================
// Configuration
// ============================================================================

/// One route definition
#[derive(Debug, Clone)]
pub struct RouteDef {
    /// URL path (e.g. "/settings")
    pub path: String,
    /// Human-readable page name
    pub name: String,
    /// Optional short description
    pub description: Option<String>,
    /// Optional icon name
    pub icon: Option<String>,
}

impl RouteDef {
    /// Create a new route definition
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        RouteDef {
            path: path.into(),
            name: name.into(),
            description: None,
            icon: None,
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set icon name
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// The application route table
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    /// Ordered route definitions
    pub routes: Vec<RouteDef>,
}

impl RouteTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append a route
    pub fn with_route(mut self, route: RouteDef) -> Self {
        self.routes.push(route);
        self
    }
}

// ============================================================================
// RouteIndexer
// ============================================================================

/// Indexer over the application route table
pub struct RouteIndexer {
    table: RouteTable,
}

impl RouteIndexer {
    /// Create an indexer over the given table
    pub fn new(table: RouteTable) -> Self {
        RouteIndexer { table }
    }
}

impl ContentIndexer for RouteIndexer {
    fn index(&self) -> Vec<SearchableItem> {
        self.table
            .routes
            .iter()
            .map(|route| {
                let mut keywords = vec![route.name.to_lowercase()];
                // Path segments double as tags ("/settings/appearance"
                // should match "appearance")
                keywords.extend(
                    route
                        .path
                        .split('/')
                        .filter(|s| !s.is_empty())
                        .map(str::to_lowercase),
                );
                keywords.extend(extract_keywords(&route.name));

                let mut item = SearchableItem::new(
                    format!("route-{}", route.path),
                    ItemType::Route,
                    route.name.clone(),
                    "Routes",
                )
                .with_route(route.path.clone())
                .with_keywords(keywords);
                if let Some(description) = &route.description {
                    item = item.with_description(description.clone());
                }
                if let Some(icon) = &route.icon {
                    item = item.with_icon(icon.clone());
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

    fn test_table() -> RouteTable {
        RouteTable::new()
            .with_route(RouteDef::new("/", "Home"))
            .with_route(
                RouteDef::new("/settings", "Settings").with_description("Application settings"),
            )
            .with_route(RouteDef::new("/todo", "Todo List"))
    }

    #[test]
    fn test_index_maps_all_routes() {
        let items = RouteIndexer::new(test_table()).index();
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|i| i.item_type == ItemType::Route));
        assert!(items.iter().all(|i| i.category == "Routes"));
    }

    #[test]
    fn test_id_carries_path() {
        let items = RouteIndexer::new(test_table()).index();
        assert_eq!(items[1].id, "route-/settings");
        assert_eq!(items[1].route.as_deref(), Some("/settings"));
    }

    #[test]
    fn test_keywords_include_path_segments() {
        let items = RouteIndexer::new(test_table()).index();
        let settings = &items[1];
        assert!(settings.keywords.contains(&"settings".to_string()));
        // Extractor prefixes support partial typing ("sett")
        assert!(settings.keywords.contains(&"sett".to_string()));
    }

    #[test]
    fn test_description_carried_over() {
        let items = RouteIndexer::new(test_table()).index();
        assert_eq!(
            items[1].description.as_deref(),
            Some("Application settings")
        );
        assert!(items[0].description.is_none());
    }
}
