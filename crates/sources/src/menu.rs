//! Navigation menu indexer
//!
//! Reads the application's menu configuration (ordered sections of
//! labeled, routable entries) and maps every entry to a searchable item.
//! Entries in a section marked as settings index as `ItemType::Setting`
//! so the rendering layer can badge them differently.

use crate::{slug, ContentIndexer};
use spotlight_core::{extract_keywords, ItemType, SearchableItem};

// ============================================================================
// Configuration
// ============================================================================

/// One routable menu entry
#[derive(Debug, Clone)]
pub struct MenuEntry {
    /// Display label
    pub label: String,
    /// Navigation target
    pub route: String,
    /// Optional icon name
    pub icon: Option<String>,
    /// Optional short description
    pub description: Option<String>,
}

impl MenuEntry {
    /// Create a new entry
    pub fn new(label: impl Into<String>, route: impl Into<String>) -> Self {
        MenuEntry {
            label: label.into(),
            route: route.into(),
            icon: None,
            description: None,
        }
    }

    /// Builder: set icon name
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One labeled menu section
#[derive(Debug, Clone)]
pub struct MenuSection {
    /// Section label, used as the display category of its entries
    pub label: String,
    /// Ordered entries
    pub entries: Vec<MenuEntry>,
    /// Whether entries in this section are settings
    pub settings: bool,
}

impl MenuSection {
    /// Create a new empty section
    pub fn new(label: impl Into<String>) -> Self {
        MenuSection {
            label: label.into(),
            entries: vec![],
            settings: false,
        }
    }

    /// Builder: append an entry
    pub fn with_entry(mut self, entry: MenuEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Builder: mark this section's entries as settings
    pub fn as_settings(mut self) -> Self {
        self.settings = true;
        self
    }
}

/// The application navigation menu
#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    /// Ordered sections
    pub sections: Vec<MenuSection>,
}

impl NavMenu {
    /// Create an empty menu
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append a section
    pub fn with_section(mut self, section: MenuSection) -> Self {
        self.sections.push(section);
        self
    }
}

// ============================================================================
// MenuIndexer
// ============================================================================

/// Indexer over the navigation menu configuration
pub struct MenuIndexer {
    menu: NavMenu,
}

impl MenuIndexer {
    /// Create an indexer over the given menu
    pub fn new(menu: NavMenu) -> Self {
        MenuIndexer { menu }
    }
}

impl ContentIndexer for MenuIndexer {
    fn index(&self) -> Vec<SearchableItem> {
        let mut items = Vec::new();
        for section in &self.menu.sections {
            let item_type = if section.settings {
                ItemType::Setting
            } else {
                ItemType::MenuItem
            };
            for entry in &section.entries {
                let mut keywords = vec![entry.label.to_lowercase(), section.label.to_lowercase()];
                keywords.extend(extract_keywords(&entry.label));

                // Root-like routes ("/") slug to nothing; the label
                // keeps the id unique and stable
                let mut id_slug = slug(&entry.route);
                if id_slug.is_empty() {
                    id_slug = slug(&entry.label);
                }

                let mut item = SearchableItem::new(
                    format!("menu-{id_slug}"),
                    item_type,
                    entry.label.clone(),
                    section.label.clone(),
                )
                .with_route(entry.route.clone())
                .with_keywords(keywords);
                if let Some(description) = &entry.description {
                    item = item.with_description(description.clone());
                }
                if let Some(icon) = &entry.icon {
                    item = item.with_icon(icon.clone());
                }
                items.push(item);
            }
        }
        items
    }
}

// ============================================================================
// Tests
// ============================================================================
