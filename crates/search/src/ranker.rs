//! Result ranking and category grouping
//!
//! This module turns the flat list of scored results into the ordered,
//! categorized tree handed to the rendering collaborator:
//!
//! 1. Deduplicate by id (first occurrence wins)
//! 2. Sort by score descending, ties broken by shorter title first
//! 3. Truncate to the global result cap
//! 4. Group by category, preserving each result's position in the
//!    globally sorted sequence
//! 5. Order categories by their best item (max score, then earliest
//!    global position), truncating each to the per-category cap
//!
//! The whole pass is deterministic for a fixed input: the sort is
//! stable, and category order falls out of first occurrence in the
//! sorted sequence rather than any map iteration order.

use rustc_hash::{FxHashMap, FxHashSet};
use spotlight_core::{SearchResult, SearchResultTree};

/// Global cap on ranked results before grouping
pub const MAX_RESULTS: usize = 50;

/// Cap on results within one category tree
pub const MAX_PER_CATEGORY: usize = 15;

/// Rank scored results and group them by category
///
/// Input order is the index scan order, which the stable sort preserves
/// across equal (score, title-length) keys. Because grouping walks the
/// globally sorted sequence, the first category emitted is always the
/// one containing the single best match.
pub fn rank(results: Vec<SearchResult>) -> Vec<SearchResultTree> {
    // Dedup by id, first occurrence wins
    let mut seen = FxHashSet::default();
    let mut unique: Vec<SearchResult> = results
        .into_iter()
        .filter(|r| seen.insert(r.id.clone()))
        .collect();

    // Best-first global order; at equal score the shorter title is
    // assumed more relevant
    unique.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.title.chars().count().cmp(&b.title.chars().count()))
    });
    unique.truncate(MAX_RESULTS);

    // Group in first-occurrence order over the sorted sequence; this
    // realizes the (max score desc, earliest position asc) category
    // contract without a second sort
    let mut trees: Vec<SearchResultTree> = Vec::new();
    let mut tree_index: FxHashMap<String, usize> = FxHashMap::default();
    for result in unique {
        let slot = match tree_index.get(&result.category) {
            Some(&slot) => slot,
            None => {
                trees.push(SearchResultTree::new(result.category.clone()));
                tree_index.insert(result.category.clone(), trees.len() - 1);
                trees.len() - 1
            }
        };
        if trees[slot].items.len() < MAX_PER_CATEGORY {
            trees[slot].items.push(result);
        }
    }

    trees
}

// ============================================================================
// Tests
// ============================================================================
