//! Thought records and the append-only journal of exchanges.
//!
//! Every call to the engine's think operation produces exactly one
//! [`Thought`]; thoughts are never mutated or discarded, so the journal
//! length equals the number of think calls made over the engine's life.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ThoughtId;

/// One recorded exchange: the prompting input (if any), the reply, and
/// whether the per-turn curiosity draw fired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thought {
    /// Unique identifier for this thought.
    pub id: ThoughtId,
    /// Wall-clock time the thought was recorded.
    pub timestamp: DateTime<Utc>,
    /// The prompting input. `None` for spontaneous thoughts.
    pub input: Option<String>,
    /// The generated response text.
    pub response: String,
    /// Whether the Bernoulli curiosity draw (p = curiosity trait)
    /// succeeded this turn.
    pub curiosity_sparked: bool,
}

/// Append-only journal of every thought the engine has produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThoughtJournal {
    entries: Vec<Thought>,
}

impl ThoughtJournal {
    /// Create an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a thought at the end of the journal.
    pub fn record(&mut self, thought: Thought) {
        self.entries.push(thought);
    }

    /// Number of thoughts recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no thoughts have been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent thought, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Thought> {
        self.entries.last()
    }

    /// The responses of the last `n` thoughts in chronological order,
    /// most-recent last. Returns fewer when fewer exist.
    #[must_use]
    pub fn recent_responses(&self, n: usize) -> Vec<String> {
        let start = self.entries.len().saturating_sub(n);
        self.entries[start..]
            .iter()
            .map(|t| t.response.clone())
            .collect()
    }

    /// Iterate over all thoughts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Thought> {
        self.entries.iter()
    }
}
