//! Tiered string matching and per-item scoring
//!
//! This module provides:
//! - match_string: the five-tier string matcher (exact, prefix,
//!   word-boundary substring, substring, fuzzy subsequence) with
//!   highlight span computation
//! - score_item: field combination across title, description, and
//!   keywords with location-based multipliers
//!
//! Queries reach this module pre-trimmed and pre-lowercased. Matching is
//! case-insensitive via per-character folding of the candidate text, so
//! highlight offsets always index the original text's characters.

use spotlight_core::{MatchLocation, SearchResult, SearchableItem, Span, Spans};

// ============================================================================
// Score constants
// ============================================================================

/// Whole text equals the query
pub const SCORE_EXACT: f32 = 100.0;
/// Text starts with the query
pub const SCORE_PREFIX: f32 = 80.0;
/// Query found at a word boundary inside the text
pub const SCORE_WORD_BOUNDARY: f32 = 70.0;
/// Query found mid-word inside the text
pub const SCORE_SUBSTRING: f32 = 60.0;
/// Fuzzy subsequence floor; the fuzzy tier scores in (40, 50]
const FUZZY_BASE: f32 = 40.0;
/// Fuzzy subsequence cap, below every literal tier
const FUZZY_CAP: f32 = 50.0;

/// Title matches outrank equivalent description and keyword matches
pub const TITLE_MULTIPLIER: f32 = 1.2;
/// Description multiplier
pub const DESCRIPTION_MULTIPLIER: f32 = 1.1;
/// Keyword equal to the query
pub const KEYWORD_EXACT_MULTIPLIER: f32 = 1.2;
/// Keyword containing the query with at least as many words
pub const KEYWORD_SUPERSTRING_MULTIPLIER: f32 = 1.1;
/// Any other positive keyword score; tag matches never outrank an
/// explicit textual match
pub const KEYWORD_PENALTY_MULTIPLIER: f32 = 0.9;

// ============================================================================
// String-tier matching
// ============================================================================

/// Result of matching a query against one string
#[derive(Debug, Clone, PartialEq)]
pub struct StringMatch {
    /// String-tier score, before any location multiplier
    pub score: f32,
    /// Character spans of the match within the text
    pub spans: Spans,
}

/// Case-fold one character without changing its offset
///
/// Multi-character lowercase expansions are truncated to their first
/// character so span offsets stay aligned with the original text.
#[inline]
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Match a lowercase query against a text, best tier wins
///
/// Returns None when nothing matches (including the empty query).
///
/// # Example
///
/// ```
/// use spotlight_search::scorer::match_string;
///
/// let m = match_string("sett", "Settings").unwrap();
/// assert_eq!(m.score, 80.0);
/// assert_eq!(m.spans[0].start, 0);
/// assert_eq!(m.spans[0].end, 4);
/// ```
pub fn match_string(query: &str, text: &str) -> Option<StringMatch> {
    let query_chars: Vec<char> = query.chars().collect();
    if query_chars.is_empty() || text.is_empty() {
        return None;
    }
    let text_chars: Vec<char> = text.chars().map(fold).collect();

    if text_chars == query_chars {
        return Some(StringMatch {
            score: SCORE_EXACT,
            spans: Spans::from_slice(&[Span::new(0, text_chars.len())]),
        });
    }

    if text_chars.starts_with(&query_chars) {
        return Some(StringMatch {
            score: SCORE_PREFIX,
            spans: Spans::from_slice(&[Span::new(0, query_chars.len())]),
        });
    }

    if let Some((offset, boundary)) = find_substring(&text_chars, &query_chars) {
        let score = if boundary {
            SCORE_WORD_BOUNDARY
        } else {
            SCORE_SUBSTRING
        };
        return Some(StringMatch {
            score,
            spans: Spans::from_slice(&[Span::new(offset, offset + query_chars.len())]),
        });
    }

    fuzzy_match(&text_chars, &query_chars)
}

/// Locate the query inside the text, preferring a word-boundary hit
///
/// Returns the match offset and whether it sits at a word boundary
/// (start of string or preceded by whitespace). A later boundary
/// occurrence wins over an earlier mid-word one because the boundary
/// tier scores higher and its span is the one worth highlighting.
fn find_substring(text: &[char], query: &[char]) -> Option<(usize, bool)> {
    if query.len() > text.len() {
        return None;
    }
    let mut first_plain = None;
    for start in 0..=(text.len() - query.len()) {
        if text[start..start + query.len()] == *query {
            let boundary = start == 0 || text[start - 1].is_whitespace();
            if boundary {
                return Some((start, true));
            }
            if first_plain.is_none() {
                first_plain = Some(start);
            }
        }
    }
    first_plain.map(|offset| (offset, false))
}

/// Fuzzy subsequence tier
///
/// Walks text and query simultaneously: consecutive matches extend the
/// current highlight span; a text mismatch closes it without advancing
/// the query. Scoring rewards coverage, an early first hit, and long
/// consecutive runs, capped below every literal tier:
///
/// `min(50, 40 + 10*matchRatio + 5*positionBonus + 5*continuityBonus)`
fn fuzzy_match(text: &[char], query: &[char]) -> Option<StringMatch> {
    let mut spans = Spans::new();
    let mut current: Option<Span> = None;
    let mut query_pos = 0;
    let mut matched = 0usize;
    let mut first_offset = None;
    let mut run = 0usize;
    let mut longest_run = 0usize;

    for (text_pos, &c) in text.iter().enumerate() {
        if query_pos < query.len() && c == query[query_pos] {
            query_pos += 1;
            matched += 1;
            run += 1;
            longest_run = longest_run.max(run);
            if first_offset.is_none() {
                first_offset = Some(text_pos);
            }
            match current.as_mut() {
                Some(span) => span.end = text_pos + 1,
                None => current = Some(Span::new(text_pos, text_pos + 1)),
            }
            if query_pos == query.len() {
                break;
            }
        } else {
            run = 0;
            if let Some(span) = current.take() {
                spans.push(span);
            }
        }
    }
    if let Some(span) = current {
        spans.push(span);
    }

    if matched == 0 {
        return None;
    }

    let match_ratio = matched as f32 / query.len() as f32;
    let position_bonus =
        (1.0 - first_offset.unwrap_or(0) as f32 / text.len() as f32).max(0.0);
    let continuity_bonus = longest_run as f32 / query.len() as f32;
    let score = (FUZZY_BASE + 10.0 * match_ratio + 5.0 * position_bonus + 5.0 * continuity_bonus)
        .min(FUZZY_CAP);

    Some(StringMatch { score, spans })
}

// ============================================================================
// Per-item scoring
// ============================================================================

/// Winning match for one item: combined score, location, and highlights
///
/// Title and description spans are mutually exclusive; keyword wins
/// carry no spans at all.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemMatch {
    /// Combined score (string tier x location multiplier)
    pub score: f32,
    /// Field group the winning match came from
    pub location: MatchLocation,
    /// Spans into the title, when the title won
    pub title_spans: Spans,
    /// Spans into the description, when the description won
    pub description_spans: Spans,
}

impl ItemMatch {
    /// Assemble the outward-facing result for the matched item
    pub fn into_result(self, item: &SearchableItem) -> SearchResult {
        let mut path = Vec::with_capacity(2);
        if let Some(parent) = &item.parent {
            path.push(parent.clone());
        }
        path.push(item.category.clone());

        SearchResult {
            id: item.id.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            route: item.route.clone(),
            category: item.category.clone(),
            item_type: item.item_type,
            icon: item.icon.clone(),
            parent: item.parent.clone(),
            match_score: self.score,
            highlight_ranges: self.title_spans,
            description_highlight_ranges: self.description_spans,
            match_location: self.location,
            path,
        }
    }
}

/// Score one item against a pre-normalized query
///
/// Matching proceeds independently against the title, the description,
/// and every keyword; the best applicable result wins after the
/// location multipliers:
///
/// 1. A title match scores `titleScore * 1.2`.
/// 2. A description match replaces it when `descScore * 1.1` is
///    strictly greater (or when there was no title match), clearing the
///    title spans - only one field is visually emphasized per result.
/// 3. The best keyword match (`* 1.2` exact, `* 1.1` superstring,
///    `* 0.9` otherwise) replaces either when strictly greater, with no
///    spans.
///
/// Returns None when no field matches; zero-scoring items never reach
/// the ranker.
pub fn score_item(query: &str, item: &SearchableItem) -> Option<ItemMatch> {
    let mut best: Option<ItemMatch> = None;

    if let Some(title) = match_string(query, &item.title) {
        best = Some(ItemMatch {
            score: title.score * TITLE_MULTIPLIER,
            location: MatchLocation::Title,
            title_spans: title.spans,
            description_spans: Spans::new(),
        });
    }

    if let Some(description) = &item.description {
        if let Some(m) = match_string(query, description) {
            let boosted = m.score * DESCRIPTION_MULTIPLIER;
            if best.as_ref().map_or(true, |b| boosted > b.score) {
                best = Some(ItemMatch {
                    score: boosted,
                    location: MatchLocation::Description,
                    title_spans: Spans::new(),
                    description_spans: m.spans,
                });
            }
        }
    }

    let mut best_keyword: Option<f32> = None;
    for keyword in &item.keywords {
        if let Some(m) = match_string(query, keyword) {
            let boosted = m.score * keyword_multiplier(query, keyword);
            if best_keyword.map_or(true, |k| boosted > k) {
                best_keyword = Some(boosted);
            }
        }
    }
    if let Some(keyword_score) = best_keyword {
        if best.as_ref().map_or(true, |b| keyword_score > b.score) {
            best = Some(ItemMatch {
                score: keyword_score,
                location: MatchLocation::Keyword,
                title_spans: Spans::new(),
                description_spans: Spans::new(),
            });
        }
    }

    best
}

/// Location multiplier for one keyword candidate
fn keyword_multiplier(query: &str, keyword: &str) -> f32 {
    let keyword_words = keyword.split_whitespace().count();
    let query_words = query.split_whitespace().count();
    if keyword.contains(query) && keyword_words >= query_words {
        if keyword == query {
            KEYWORD_EXACT_MULTIPLIER
        } else {
            KEYWORD_SUPERSTRING_MULTIPLIER
        }
    } else {
        KEYWORD_PENALTY_MULTIPLIER
    }
}

// ============================================================================
// Tests
// ============================================================================
