//! Centralized term matching.
//!
//! Both the terminology policy and the compliance auditor match policy
//! terms against narrative text. Matching semantics (Unicode case
//! folding for accented Portuguese terms, word-boundary behavior) live
//! here so the two components cannot drift apart.

use regex::Regex;

use crate::error::CoreError;

/// Case-insensitive substring containment.
///
/// Uses full Unicode lowercasing, so accented terms ("diagnóstico")
/// match regardless of the case mix in the haystack.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// A compiled case-insensitive whole-word matcher for a single term.
///
/// The term is escaped before compilation, so any policy-supplied
/// string is matched literally. Word boundaries are Unicode-aware:
/// "laudo" matches inside "um laudo psicológico" but not inside
/// "laudos".
#[derive(Debug, Clone)]
pub struct WordMatcher {
    pattern: Regex,
}

impl WordMatcher {
    pub fn new(term: &str) -> Result<Self, CoreError> {
        let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))?;
        Ok(Self { pattern })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    pub fn replace_all(&self, text: &str, replacement: &str) -> String {
        self.pattern.replace_all(text, replacement).into_owned()
    }
}
