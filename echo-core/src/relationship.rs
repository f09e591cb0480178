//! Relationship bookkeeping: per-participant trust and interaction counts.
//!
//! A [`Relationship`] is created lazily on first interaction with a name
//! and mutated in place afterwards; entries are never deleted. Trust
//! starts at a configured floor, rises by a fixed step per interaction,
//! and is clamped so it can never exceed [`TRUST_CEILING`].

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::LearningConfig;

/// Trust never exceeds this bound, regardless of interaction count.
pub const TRUST_CEILING: f32 = 1.0;

/// Per-participant accumulator of interaction count and trust level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    /// Participant name. Doubles as the ledger key.
    pub participant: String,
    /// When this participant was first seen.
    pub first_met: DateTime<Utc>,
    /// Number of interactions recorded with this participant.
    pub interaction_count: u32,
    /// Bounded trust scalar. Monotonically non-decreasing.
    pub trust_level: f32,
}

/// The ledger of every participant the engine has interacted with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelationshipLedger {
    relationships: HashMap<String, Relationship>,
}

impl RelationshipLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one interaction with `participant`, creating the
    /// relationship on first sight. Returns the updated record.
    pub fn record_interaction(
        &mut self,
        participant: &str,
        learning: &LearningConfig,
        now: DateTime<Utc>,
    ) -> &Relationship {
        let rel = self
            .relationships
            .entry(participant.to_string())
            .or_insert_with(|| Relationship {
                participant: participant.to_string(),
                first_met: now,
                interaction_count: 0,
                trust_level: learning.trust_initial,
            });

        rel.interaction_count += 1;
        rel.trust_level = (rel.trust_level + learning.trust_step).min(TRUST_CEILING);
        rel
    }

    /// Look up a relationship by participant name.
    #[must_use]
    pub fn get(&self, participant: &str) -> Option<&Relationship> {
        self.relationships.get(participant)
    }

    /// Number of distinct participants met.
    #[must_use]
    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    /// Whether no participant has been met yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }

    /// Iterate over all relationships in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn learning() -> LearningConfig {
        LearningConfig::default()
    }

    #[test]
    fn first_interaction_creates_relationship_at_floor_plus_step() {
        let mut ledger = RelationshipLedger::new();
        let rel = ledger.record_interaction("Ann", &learning(), Utc::now());
        assert_eq!(rel.interaction_count, 1);
        assert!((rel.trust_level - 0.2).abs() < 1e-6);
    }

    #[test]
    fn repeat_interactions_mutate_the_same_entry() {
        let mut ledger = RelationshipLedger::new();
        let first_met = {
            ledger.record_interaction("Ann", &learning(), Utc::now());
            ledger.get("Ann").map(|r| r.first_met)
        };
        ledger.record_interaction("Ann", &learning(), Utc::now());

        assert_eq!(ledger.len(), 1);
        let rel = ledger.get("Ann").expect("Ann exists");
        assert_eq!(rel.interaction_count, 2);
        assert!((rel.trust_level - 0.3).abs() < 1e-6);
        assert_eq!(Some(rel.first_met), first_met, "first_met never changes");
    }

    #[test]
    fn trust_caps_at_exactly_one() {
        let mut ledger = RelationshipLedger::new();
        for _ in 0..20 {
            ledger.record_interaction("Ann", &learning(), Utc::now());
        }
        let rel = ledger.get("Ann").expect("Ann exists");
        assert_eq!(rel.interaction_count, 20);
        assert!(
            (rel.trust_level - TRUST_CEILING).abs() < f32::EPSILON,
            "trust must sit exactly at the ceiling, got {}",
            rel.trust_level
        );
    }

    #[test]
    fn distinct_participants_get_distinct_entries() {
        let mut ledger = RelationshipLedger::new();
        ledger.record_interaction("Ann", &learning(), Utc::now());
        ledger.record_interaction("Ben", &learning(), Utc::now());
        assert_eq!(ledger.len(), 2);
        assert_eq!(
            ledger.get("Ben").map(|r| r.interaction_count),
            Some(1)
        );
    }
}
