//! End-to-end pipeline test over a file-backed store
//!
//! Exercises the full composition the way a host application would:
//! a persistent store on disk, static configuration, queries, and
//! cross-session collection edits arriving as storage-change
//! notifications.

use spotlight::{
    JsonFileStore, MenuEntry, MenuSection, NavMenu, Project, ProjectCatalog, RouteDef, RouteTable,
    Skill, SkillSet, Storage, UnifiedSearch,
};
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn site_config() -> (NavMenu, RouteTable, ProjectCatalog, SkillSet) {
    let menu = NavMenu::new()
        .with_section(
            MenuSection::new("General")
                .with_entry(MenuEntry::new("Home", "/").with_icon("house"))
                .with_entry(MenuEntry::new("Todo", "/todo"))
                .with_entry(MenuEntry::new("Gallery", "/gallery")),
        )
        .with_section(
            MenuSection::new("Settings")
                .as_settings()
                .with_entry(MenuEntry::new("Appearance", "/settings/appearance")),
        );
    let routes = RouteTable::new()
        .with_route(RouteDef::new("/", "Home"))
        .with_route(RouteDef::new("/todo", "Todo List"))
        .with_route(RouteDef::new("/gallery", "Gallery"))
        .with_route(RouteDef::new("/settings", "Settings"));
    let projects = ProjectCatalog::new().with_project(
        Project::new(
            "Color Palette Generator",
            "Generates accessible color palettes from a seed color",
        )
        .with_category("Web")
        .with_status("active")
        .with_technologies(vec!["Rust".into(), "WASM".into()]),
    );
    let skills = SkillSet::new().with_skill(Skill::new("Rust").with_group("Languages"));
    (menu, routes, projects, skills)
}

#[test]
fn test_full_pipeline_with_file_store() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("collections.json");

    // A previous session wrote collections to disk
    {
        let store = JsonFileStore::open(&path).unwrap();
        store
            .set(
                "todos",
                r#"[{"id":"1","title":"Buy milk","priority":"low"}]"#,
            )
            .unwrap();
        store
            .set(
                "calendarEvents",
                r#"[{"id":"c1","title":"Release day","date":"2026-08-14"}]"#,
            )
            .unwrap();
    }

    let storage = Arc::new(JsonFileStore::open(&path).unwrap());
    let (menu, routes, projects, skills) = site_config();
    let search = UnifiedSearch::new(menu, routes, projects, skills, storage.clone());

    // Persisted collections are searchable at session start; the
    // exact keyword hit owns the top of the tree, ahead of any weak
    // fuzzy matches elsewhere in the index
    let milk = search.search("milk");
    assert_eq!(milk[0].category, "Todo Items");
    assert_eq!(milk[0].items.len(), 1);
    assert_eq!(milk[0].items[0].id, "todo-1");
    assert_eq!(milk[0].items[0].route.as_deref(), Some("/todo"));

    // Month names derived from event dates are queryable
    assert!(!search.search("august").is_empty());

    // Fuzzy matching reaches the project despite no literal substring
    let fuzzy = search.search("clr plt");
    assert_eq!(fuzzy[0].items[0].title, "Color Palette Generator");
    let score = fuzzy[0].items[0].match_score;
    assert!(score > 40.0 && score <= 60.0, "score = {score}");

    // Multi-word phrase hits the description bigrams
    assert!(!search.search("color palettes").is_empty());

    // Another session edits the todo collection on disk
    storage
        .set(
            "todos",
            r#"[{"id":"1","title":"Buy milk","priority":"low"},
                {"id":"2","title":"Water plants"}]"#,
        )
        .unwrap();
    search.on_storage_change("todos");
    assert!(!search.search("plants").is_empty());

    // The project result is untouched by the todo edit
    let fuzzy_after = search.search("clr plt");
    assert_eq!(fuzzy_after[0].items[0].match_score, score);
}

#[test]
fn test_session_restart_rebuilds_from_disk() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("collections.json");

    let (menu, routes, projects, skills) = site_config();
    {
        let storage = Arc::new(JsonFileStore::open(&path).unwrap());
        storage
            .set("gallery", r#"[{"id":"g1","title":"Harbor Sunset"}]"#)
            .unwrap();
        let search = UnifiedSearch::new(
            menu.clone(),
            routes.clone(),
            projects.clone(),
            skills.clone(),
            storage,
        );
        search.update_gallery();
        assert!(!search.search("sunset").is_empty());
    }

    // The index itself is never persisted; a new session rebuilds it
    // from the stored source data
    let storage = Arc::new(JsonFileStore::open(&path).unwrap());
    let search = UnifiedSearch::new(menu, routes, projects, skills, storage);
    assert!(!search.search("sunset").is_empty());
}

#[test]
fn test_settings_entries_are_typed() {
    use spotlight::ItemType;

    let (menu, routes, projects, skills) = site_config();
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(JsonFileStore::open(dir.path().join("s.json")).unwrap());
    let search = UnifiedSearch::new(menu, routes, projects, skills, storage);

    let trees = search.search("appearance");
    let hit = trees
        .iter()
        .flat_map(|t| &t.items)
        .find(|r| r.title == "Appearance")
        .unwrap();
    assert_eq!(hit.item_type, ItemType::Setting);
}
