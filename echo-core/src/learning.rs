//! Learned patterns: truncated-text notes kept for substantial
//! interactions.
//!
//! This is an append-only log of excerpts, not a model: an interaction
//! longer than the configured threshold leaves behind one fixed-template
//! note embedding the participant name and the leading characters of the
//! text.

use serde::{Deserialize, Serialize};

use crate::config::LearningConfig;

/// Append-only log of derived pattern strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatternLog {
    entries: Vec<String>,
}

impl PatternLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consider `text` from `participant` and record a derived pattern
    /// when the interaction is substantial enough. Returns whether an
    /// entry was added.
    pub fn observe(&mut self, participant: &str, text: &str, learning: &LearningConfig) -> bool {
        match derive_pattern(participant, text, learning) {
            Some(pattern) => {
                self.entries.push(pattern);
                true
            }
            None => false,
        }
    }

    /// Number of patterns recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no pattern has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all patterns in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Derive the pattern note for a substantial interaction.
///
/// Returns `None` when the text is at or below the minimum length. The
/// excerpt is taken in characters, never bytes, so truncation cannot
/// split a code point.
#[must_use]
pub fn derive_pattern(
    participant: &str,
    text: &str,
    learning: &LearningConfig,
) -> Option<String> {
    if text.chars().count() <= learning.pattern_min_chars {
        return None;
    }
    let excerpt: String = text.chars().take(learning.pattern_excerpt_chars).collect();
    Some(format!("Humans like {participant} tend to: {excerpt}..."))
}
