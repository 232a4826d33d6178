//! Keyword extraction for index construction
//!
//! This module produces normalized search tokens from free text:
//! lowercase words, short word-prefixes for partial-typing tolerance,
//! and adjacent-word bigrams for long free-text fields.
//!
//! Prefix fan-out trades index size for tolerance to partial typing
//! without a true edit-distance search.

/// Shortest word (and prefix) worth indexing, in characters
const MIN_TOKEN_LEN: usize = 3;

/// Longest prefix emitted per word, in characters
const MAX_PREFIX_LEN: usize = 5;

/// Extract normalized search tokens from free text
///
/// Splits on whitespace; for every word longer than 2 characters, emits
/// the full lowercase word plus its 3-, 4-, and 5-character prefixes
/// where the prefix is shorter than the word.
///
/// # Example
///
/// ```
/// use spotlight_core::extract_keywords;
///
/// let tokens = extract_keywords("Settings");
/// assert_eq!(tokens, vec!["settings", "set", "sett", "setti"]);
/// ```
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for word in text.split_whitespace() {
        let lower: String = word.to_lowercase();
        let len = lower.chars().count();
        if len < MIN_TOKEN_LEN {
            continue;
        }
        tokens.push(lower.clone());
        for prefix_len in MIN_TOKEN_LEN..=MAX_PREFIX_LEN.min(len - 1) {
            tokens.push(lower.chars().take(prefix_len).collect());
        }
    }
    tokens
}

/// Join adjacent word pairs into bigram tokens
///
/// Used only for long free-text fields (descriptions), not short labels.
/// Callers filter the word list first (e.g. to words longer than 2
/// characters) so the bigrams stay meaningful.
///
/// # Example
///
/// ```
/// use spotlight_core::generate_bigrams;
///
/// let words = vec!["color".to_string(), "palette".to_string(), "tool".to_string()];
/// assert_eq!(generate_bigrams(&words), vec!["color palette", "palette tool"]);
/// ```
pub fn generate_bigrams(words: &[String]) -> Vec<String> {
    words
        .windows(2)
        .map(|pair| format!("{} {}", pair[0], pair[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_basic() {
        let tokens = extract_keywords("settings");
        assert_eq!(tokens, vec!["settings", "set", "sett", "setti"]);
    }

    #[test]
    fn test_extract_lowercases() {
        let tokens = extract_keywords("TODO");
        assert_eq!(tokens, vec!["todo", "tod"]);
    }

    #[test]
    fn test_extract_skips_short_words() {
        // "a" and "of" are below the minimum token length
        let tokens = extract_keywords("a list of tasks");
        assert_eq!(tokens, vec!["list", "lis", "tasks", "tas", "task"]);
    }

    #[test]
    fn test_extract_no_prefix_equal_to_word() {
        // 3-char word emits only itself, never a duplicate prefix
        let tokens = extract_keywords("api");
        assert_eq!(tokens, vec!["api"]);

        // 4-char word emits itself plus the 3-char prefix
        let tokens = extract_keywords("gray");
        assert_eq!(tokens, vec!["gray", "gra"]);
    }

    #[test]
    fn test_extract_prefix_cap() {
        // Long words cap prefixes at 5 characters
        let tokens = extract_keywords("visualization");
        assert_eq!(tokens, vec!["visualization", "vis", "visu", "visua"]);
    }

    #[test]
    fn test_extract_empty() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   ").is_empty());
    }

    #[test]
    fn test_extract_multibyte() {
        // Prefixes count characters, not bytes
        let tokens = extract_keywords("café-menü");
        assert_eq!(tokens[0], "café-menü");
        assert_eq!(tokens[1], "caf");
        assert_eq!(tokens[2], "café");
        assert_eq!(tokens[3], "café-");
    }

    #[test]
    fn test_bigrams_basic() {
        let words: Vec<String> = ["quick", "brown", "fox"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(generate_bigrams(&words), vec!["quick brown", "brown fox"]);
    }

    #[test]
    fn test_bigrams_short_input() {
        assert!(generate_bigrams(&[]).is_empty());
        assert!(generate_bigrams(&["one".to_string()]).is_empty());
    }
}
