//! Project catalog indexer
//!
//! Projects carry the longest free text in the system, so this indexer
//! goes further than the others: besides the usual title tokens and tags
//! it indexes the full lowercase description as one keyword token and
//! every description bigram, so multi-word phrase queries match even when
//! plain substring matching on the title would miss.

use crate::{slug, ContentIndexer};
use spotlight_core::{extract_keywords, generate_bigrams, ItemType, SearchableItem};

// ============================================================================
// Configuration
// ============================================================================

/// One catalog project
#[derive(Debug, Clone)]
pub struct Project {
    /// Project title
    pub title: String,
    /// Long-form description
    pub description: String,
    /// Project's own category tag (e.g. "Web", "CLI")
    pub category: Option<String>,
    /// Status tag (e.g. "active", "archived")
    pub status: Option<String>,
    /// Technology tags
    pub technologies: Vec<String>,
}

impl Project {
    /// Create a new project
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Project {
            title: title.into(),
            description: description.into(),
            category: None,
            status: None,
            technologies: vec![],
        }
    }

    /// Builder: set the project's category tag
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Builder: set the status tag
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Builder: set technology tags
    pub fn with_technologies(mut self, technologies: Vec<String>) -> Self {
        self.technologies = technologies;
        self
    }
}

/// The static project catalog
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    /// Catalog entries
    pub projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append a project
    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }
}

// ============================================================================
// ProjectIndexer
// ============================================================================

/// Indexer over the static project catalog
pub struct ProjectIndexer {
    catalog: ProjectCatalog,
}

impl ProjectIndexer {
    /// Create an indexer over the given catalog
    pub fn new(catalog: ProjectCatalog) -> Self {
        ProjectIndexer { catalog }
    }
}

impl ContentIndexer for ProjectIndexer {
    fn index(&self) -> Vec<SearchableItem> {
        self.catalog
            .projects
            .iter()
            .map(|project| {
                let mut keywords = vec![project.title.to_lowercase()];
                keywords.extend(extract_keywords(&project.title));
                keywords.extend(project.technologies.iter().map(|t| t.to_lowercase()));
                if let Some(category) = &project.category {
                    keywords.push(category.to_lowercase());
                }
                if let Some(status) = &project.status {
                    keywords.push(status.to_lowercase());
                }

                // Whole description as one token, plus bigrams over its
                // longer words, for multi-word phrase matches
                let description_lower = project.description.to_lowercase();
                let long_words: Vec<String> = description_lower
                    .split_whitespace()
                    .filter(|w| w.chars().count() > 2)
                    .map(str::to_string)
                    .collect();
                keywords.extend(generate_bigrams(&long_words));
                keywords.push(description_lower);

                SearchableItem::new(
                    format!("project-{}", slug(&project.title)),
                    ItemType::Feature,
                    project.title.clone(),
                    "Projects",
                )
                .with_description(project.description.clone())
                .with_route("/projects")
                .with_parent("Features")
                .with_keywords(keywords)
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

    fn test_catalog() -> ProjectCatalog {
        ProjectCatalog::new()
            .with_project(
                Project::new(
                    "Color Palette Generator",
                    "Generates accessible color palettes from a seed color",
                )
                .with_category("Web")
                .with_status("active")
                .with_technologies(vec!["Rust".into(), "WASM".into()]),
            )
            .with_project(Project::new("Dotfiles", "My shell and editor configuration"))
    }

    #[test]
    fn test_index_maps_all_projects() {
        let items = ProjectIndexer::new(test_catalog()).index();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.category == "Projects"));
        assert!(items.iter().all(|i| i.parent.as_deref() == Some("Features")));
        assert!(items.iter().all(|i| i.route.as_deref() == Some("/projects")));
    }

    #[test]
    fn test_id_is_title_slug() {
        let items = ProjectIndexer::new(test_catalog()).index();
        assert_eq!(items[0].id, "project-color-palette-generator");
    }

    #[test]
    fn test_keywords_include_tags() {
        let items = ProjectIndexer::new(test_catalog()).index();
        let kw = &items[0].keywords;
        assert!(kw.contains(&"rust".to_string()));
        assert!(kw.contains(&"wasm".to_string()));
        assert!(kw.contains(&"web".to_string()));
        assert!(kw.contains(&"active".to_string()));
    }

    #[test]
    fn test_full_description_is_one_token() {
        let items = ProjectIndexer::new(test_catalog()).index();
        assert!(items[0]
            .keywords
            .contains(&"generates accessible color palettes from a seed color".to_string()));
    }

    #[test]
    fn test_description_bigrams_skip_short_words() {
        let items = ProjectIndexer::new(test_catalog()).index();
        let kw = &items[0].keywords;
        assert!(kw.contains(&"color palettes".to_string()));
        assert!(kw.contains(&"accessible color".to_string()));
        // "a" (too short) never joins a bigram; its neighbors pair up
        assert!(kw.contains(&"from seed".to_string()));
        assert!(!kw.iter().any(|k| k == "a seed" || k == "from a"));
    }
}
