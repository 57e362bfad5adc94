//! The completion engine: validation, prefix filtering, and ordering
//!
//! This module provides:
//! - Case-sensitive prefix matching over an immutable vocabulary
//! - Deterministic two-key ordering (length, then lexicographic) via a stable sort
//! - Minimum-query-length validation surfaced as a structured error
//!
//! The engine holds no mutable state: the vocabulary and minimum length are
//! fixed at construction, so any number of threads may query one engine
//! concurrently without coordination.

use thiserror::Error;
use tracing::{debug, trace};

use crate::vocabulary::lua_vocabulary;

/// Default minimum query length, in Unicode characters
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Error returned when a completion query is shorter than the configured minimum
///
/// Carries the rejected query and the minimum that was required, so callers
/// can render a precise user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("completion query '{query}' is too short, minimum length required: {min_length}")]
pub struct QueryTooShortError {
    /// The query that was rejected
    pub query: String,
    /// Minimum query length, in Unicode characters
    pub min_length: usize,
}

/// Prefix-completion engine over an immutable vocabulary
///
/// The vocabulary is injected at construction and never mutated afterwards,
/// keeping the engine testable with arbitrary candidate sets. For the built-in
/// Lua vocabulary use [`CompletionEngine::lua`].
#[derive(Debug, Clone)]
pub struct CompletionEngine {
    vocabulary: Vec<String>,
    min_query_len: usize,
}

impl CompletionEngine {
    /// Create an engine over the given vocabulary with the default minimum
    /// query length
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            vocabulary: vocabulary.into_iter().map(Into::into).collect(),
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }

    /// Create an engine over the built-in Lua keyword/builtin vocabulary
    pub fn lua() -> Self {
        Self::new(lua_vocabulary().iter().copied())
    }

    /// Override the minimum query length (default 2, in Unicode characters)
    pub fn with_min_query_len(mut self, min_query_len: usize) -> Self {
        self.min_query_len = min_query_len;
        self
    }

    /// The configured minimum query length
    pub fn min_query_len(&self) -> usize {
        self.min_query_len
    }

    /// The vocabulary this engine matches against
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Get completion suggestions for a query
    ///
    /// Matching is an exact, case-sensitive prefix comparison: an entry is
    /// returned iff its leading characters equal `query`. No fuzzy matching,
    /// no case folding, no normalization.
    ///
    /// # Arguments
    /// * `query` - The partial input to complete (minimum length applies,
    ///   measured in Unicode characters)
    ///
    /// # Returns
    /// Matching entries sorted by length (shorter first), then
    /// lexicographically among entries of equal length. The sort is stable, so
    /// entries equal under both keys keep their vocabulary order. An empty
    /// vector when nothing matches.
    ///
    /// # Errors
    /// [`QueryTooShortError`] when the query has fewer characters than the
    /// configured minimum. This is the only error condition.
    pub fn complete(&self, query: &str) -> Result<Vec<String>, QueryTooShortError> {
        let query_len = query.chars().count();
        if query_len < self.min_query_len {
            trace!(
                query,
                query_len,
                min_length = self.min_query_len,
                "rejecting completion query below minimum length"
            );
            return Err(QueryTooShortError {
                query: query.to_string(),
                min_length: self.min_query_len,
            });
        }

        let mut matches: Vec<String> = self
            .vocabulary
            .iter()
            .filter(|entry| entry.starts_with(query))
            .cloned()
            .collect();

        // Length then alphabetical, for better UX. Vec::sort_by is stable, so
        // duplicate-key entries keep vocabulary order.
        matches.sort_by(|a, b| {
            a.chars()
                .count()
                .cmp(&b.chars().count())
                .then_with(|| a.cmp(b))
        });

        debug!(query, matches = matches.len(), "prefix completion");

        Ok(matches)
    }
}

impl Default for CompletionEngine {
    fn default() -> Self {
        Self::lua()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(vocab: &[&str]) -> CompletionEngine {
        CompletionEngine::new(vocab.iter().copied())
    }

    #[test]
    fn test_query_too_short_carries_query_and_minimum() {
        let engine = CompletionEngine::lua();

        let err = engine.complete("a").unwrap_err();
        assert_eq!(err.query, "a");
        assert_eq!(err.min_length, DEFAULT_MIN_QUERY_LEN);

        let err = engine.complete("").unwrap_err();
        assert_eq!(err.query, "");
        assert_eq!(err.min_length, DEFAULT_MIN_QUERY_LEN);
    }

    #[test]
    fn test_error_message_names_both_fields() {
        let err = CompletionEngine::lua().complete("x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "completion query 'x' is too short, minimum length required: 2"
        );
    }

    #[test]
    fn test_minimum_length_counts_characters_not_bytes() {
        let engine = engine(&["日本語", "été"]);

        // Two characters, more than two bytes: accepted
        let results = engine.complete("日本").unwrap();
        assert_eq!(results, vec!["日本語"]);

        // One character, two bytes in UTF-8: rejected
        let err = engine.complete("é").unwrap_err();
        assert_eq!(err.query, "é");
    }

    #[test]
    fn test_min_query_len_override() {
        let engine = engine(&["alpha", "beta"]).with_min_query_len(4);
        assert_eq!(engine.min_query_len(), 4);

        let err = engine.complete("alp").unwrap_err();
        assert_eq!(err.min_length, 4);

        assert_eq!(engine.complete("alph").unwrap(), vec!["alpha"]);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let engine = CompletionEngine::lua();

        let results = engine.complete("For").unwrap();
        assert!(
            !results.iter().any(|e| e == "for"),
            "'For' must not match 'for' (case differs)"
        );
        assert!(results.is_empty());
    }

    #[test]
    fn test_no_match_returns_empty_not_error() {
        let results = CompletionEngine::lua().complete("xyz_nonexistent").unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_ordering_by_length_then_lexicographic() {
        let engine = engine(&["bbb", "aa", "aab", "ab", "aaa"]);

        let results = engine.complete("aa").unwrap();
        assert_eq!(results, vec!["aa", "aaa", "aab"]);

        let results = engine.complete("ab").unwrap();
        assert_eq!(results, vec!["ab"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        // Equal under both sort keys: relative order must follow the
        // vocabulary table
        let engine = engine(&["dup", "dup"]);
        let results = engine.complete("du").unwrap();
        assert_eq!(results, vec!["dup", "dup"]);
    }

    #[test]
    fn test_dot_is_a_plain_character() {
        let engine = engine(&["string.len", "string.lower", "stringify"]);

        let results = engine.complete("string.").unwrap();
        assert_eq!(results, vec!["string.len", "string.lower"]);

        // A query spanning the dot still matches character-for-character
        let results = engine.complete("string.lo").unwrap();
        assert_eq!(results, vec!["string.lower"]);
    }

    #[test]
    fn test_completion_is_pure_and_deterministic() {
        let engine = CompletionEngine::lua();
        let first = engine.complete("str").unwrap();
        let second = engine.complete("str").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        let engine = std::sync::Arc::new(CompletionEngine::lua());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = std::sync::Arc::clone(&engine);
                std::thread::spawn(move || engine.complete("lo").unwrap())
            })
            .collect();

        let expected = engine.complete("lo").unwrap();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
