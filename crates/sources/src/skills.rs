//! Skills list indexer
//!
//! Maps the static skills list to searchable items. Skill names are
//! short labels, so keyword construction stays minimal: the lowercase
//! name, its extractor tokens, and the optional group tag.

use crate::{slug, ContentIndexer};
use spotlight_core::{extract_keywords, ItemType, SearchableItem};

// ============================================================================
// Configuration
// ============================================================================

/// One listed skill
#[derive(Debug, Clone)]
pub struct Skill {
    /// Skill name (e.g. "Rust", "Distributed Systems")
    pub name: String,
    /// Optional grouping tag (e.g. "Languages")
    pub group: Option<String>,
}

impl Skill {
    /// Create a new skill
    pub fn new(name: impl Into<String>) -> Self {
        Skill {
            name: name.into(),
            group: None,
        }
    }

    /// Builder: set the grouping tag
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// The static skills list
#[derive(Debug, Clone, Default)]
pub struct SkillSet {
    /// Listed skills
    pub skills: Vec<Skill>,
}

impl SkillSet {
    /// Create an empty skill set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append a skill
    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }
}

// ============================================================================
// SkillIndexer
// ============================================================================

/// Indexer over the static skills list
pub struct SkillIndexer {
    set: SkillSet,
}

impl SkillIndexer {
    /// Create an indexer over the given skill set
    pub fn new(set: SkillSet) -> Self {
        SkillIndexer { set }
    }
}

impl ContentIndexer for SkillIndexer {
    fn index(&self) -> Vec<SearchableItem> {
        self.set
            .skills
            .iter()
            .map(|skill| {
                let mut keywords = vec![skill.name.to_lowercase()];
                keywords.extend(extract_keywords(&skill.name));
                if let Some(group) = &skill.group {
                    keywords.push(group.to_lowercase());
                }

                SearchableItem::new(
                    format!("skill-{}", slug(&skill.name)),
                    ItemType::Feature,
                    skill.name.clone(),
                    "Skills",
                )
                .with_route("/skills")
                .with_parent("Features")
                .with_keywords(keywords)
            })
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
