//! The interaction engine: all persona state and its operations.
//!
//! An [`Engine`] is an explicitly constructed, explicitly passed value;
//! there is no ambient global instance. It is intended for exclusive use
//! by one driving loop and provides no internal synchronization.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::config::PersonaSeed;
use crate::learning::PatternLog;
use crate::relationship::{Relationship, RelationshipLedger};
use crate::response;
use crate::thought::{Thought, ThoughtJournal};
use crate::types::{ThoughtId, TraitProfile};

/// Number of recent thought responses included in a snapshot.
const SNAPSHOT_RECENT: usize = 3;

/// The stateful persona engine.
#[derive(Debug, Clone)]
pub struct Engine {
    seed: PersonaSeed,
    birth_time: DateTime<Utc>,
    journal: ThoughtJournal,
    ledger: RelationshipLedger,
    patterns: PatternLog,
}

impl Engine {
    /// Construct an engine from a persona seed, capturing the birth time.
    #[must_use]
    pub fn new(mut seed: PersonaSeed) -> Self {
        // gen_bool panics outside [0, 1]; hand-built seeds may skip
        // validation, so clamp here as well.
        seed.traits = seed.traits.clamped();
        Self {
            seed,
            birth_time: Utc::now(),
            journal: ThoughtJournal::new(),
            ledger: RelationshipLedger::new(),
            patterns: PatternLog::new(),
        }
    }

    /// The persona seed this engine was built from.
    #[must_use]
    pub fn seed(&self) -> &PersonaSeed {
        &self.seed
    }

    /// When the engine was constructed.
    #[must_use]
    pub fn birth_time(&self) -> DateTime<Utc> {
        self.birth_time
    }

    /// Process one turn: draw the curiosity flag, generate a response,
    /// and append the resulting [`Thought`] to the journal.
    ///
    /// `None` or empty input selects spontaneous-thought mode; anything
    /// else goes through the keyword reply rules.
    pub fn think(&mut self, input: Option<&str>, rng: &mut impl Rng) -> Thought {
        let curiosity_sparked = rng.gen_bool(f64::from(self.seed.traits.curiosity));

        let prompt = input.filter(|text| !text.is_empty());
        let response = match prompt {
            Some(text) => {
                response::compose_reply(text, &self.seed.identity, &self.seed.voice, rng)
            }
            None => response::spontaneous_thought(&self.seed.voice, rng),
        };

        let thought = Thought {
            id: ThoughtId::new(),
            timestamp: Utc::now(),
            input: prompt.map(str::to_string),
            response,
            curiosity_sparked,
        };
        self.journal.record(thought.clone());
        thought
    }

    /// Record an interaction with `participant`: bump the relationship
    /// bookkeeping and, for substantial text, note a learned pattern.
    /// Returns the updated relationship.
    pub fn learn_from_interaction(&mut self, participant: &str, text: &str) -> &Relationship {
        let noted = self.patterns.observe(participant, text, &self.seed.learning);
        let rel = self
            .ledger
            .record_interaction(participant, &self.seed.learning, Utc::now());
        debug!(
            participant,
            interactions = rel.interaction_count,
            trust = rel.trust_level,
            pattern_noted = noted,
            "learned from interaction"
        );
        rel
    }

    /// The thought journal.
    #[must_use]
    pub fn journal(&self) -> &ThoughtJournal {
        &self.journal
    }

    /// Look up the relationship with a participant, if any.
    #[must_use]
    pub fn relationship(&self, participant: &str) -> Option<&Relationship> {
        self.ledger.get(participant)
    }

    /// The relationship ledger.
    #[must_use]
    pub fn ledger(&self) -> &RelationshipLedger {
        &self.ledger
    }

    /// The learned-pattern log.
    #[must_use]
    pub fn patterns(&self) -> &PatternLog {
        &self.patterns
    }

    /// Read-only projection of the engine's current state. Mutates
    /// nothing; repeated calls with no intervening operation report the
    /// same counts and recent thoughts.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            name: self.seed.identity.name.clone(),
            age_seconds: (Utc::now() - self.birth_time).num_seconds(),
            thought_count: self.journal.len(),
            relationship_count: self.ledger.len(),
            pattern_count: self.patterns.len(),
            recent_thoughts: self.journal.recent_responses(SNAPSHOT_RECENT),
            traits: self.seed.traits,
        }
    }
}

/// Read-only projection of an engine's state.
#[derive(Debug, Clone, Serialize)]
pub struct EngineSnapshot {
    /// Persona name.
    pub name: String,
    /// Whole seconds elapsed since construction.
    pub age_seconds: i64,
    /// Thoughts recorded so far.
    pub thought_count: usize,
    /// Distinct participants met.
    pub relationship_count: usize,
    /// Learned patterns noted.
    pub pattern_count: usize,
    /// Responses of the most recent thoughts, chronological,
    /// most-recent last.
    pub recent_thoughts: Vec<String>,
    /// The trait profile (read-only configuration).
    pub traits: TraitProfile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn engine() -> Engine {
        Engine::new(PersonaSeed::default())
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn journal_length_tracks_think_calls() {
        let mut engine = engine();
        let mut rng = rng();
        for n in 1..=10 {
            if n % 2 == 0 {
                engine.think(None, &mut rng);
            } else {
                engine.think(Some("hello there"), &mut rng);
            }
            assert_eq!(engine.journal().len(), n);
        }
    }

    #[test]
    fn empty_input_takes_spontaneous_mode() {
        let mut engine = engine();
        let mut rng = rng();
        let thought = engine.think(Some(""), &mut rng);
        assert!(thought.input.is_none());
        assert!(
            engine
                .seed()
                .voice
                .spontaneous_thoughts
                .contains(&thought.response)
        );
    }

    #[test]
    fn prompted_thought_keeps_the_original_input() {
        let mut engine = engine();
        let thought = engine.think(Some("why though?"), &mut rng());
        assert_eq!(thought.input.as_deref(), Some("why though?"));
        assert!(thought.response.ends_with(" why though?"));
    }

    #[test]
    fn curiosity_never_sparks_at_zero_and_always_at_one() {
        let mut rng = rng();

        let mut seed = PersonaSeed::default();
        seed.traits.curiosity = 0.0;
        let mut inert = Engine::new(seed);
        assert!(!inert.think(None, &mut rng).curiosity_sparked);

        let mut seed = PersonaSeed::default();
        seed.traits.curiosity = 1.0;
        let mut eager = Engine::new(seed);
        assert!(eager.think(None, &mut rng).curiosity_sparked);
    }

    #[test]
    fn learn_scenario_matches_the_bookkeeping_contract() {
        let mut engine = engine();

        let rel = engine.learn_from_interaction("Ann", "hi");
        assert_eq!(rel.interaction_count, 1);
        assert!((rel.trust_level - 0.2).abs() < 1e-6);
        assert_eq!(engine.ledger().len(), 1);
        assert!(engine.patterns().is_empty());

        let long = "x".repeat(60);
        let rel = engine.learn_from_interaction("Ann", &long);
        assert_eq!(rel.interaction_count, 2);
        assert!((rel.trust_level - 0.3).abs() < 1e-6);
        assert_eq!(engine.patterns().len(), 1);
    }

    #[test]
    fn snapshot_is_idempotent_between_operations() {
        let mut engine = engine();
        let mut rng = rng();
        for _ in 0..4 {
            engine.think(Some("what if we tried"), &mut rng);
        }
        engine.learn_from_interaction("Ann", "hi");

        let first = engine.snapshot();
        let second = engine.snapshot();
        assert_eq!(first.thought_count, second.thought_count);
        assert_eq!(first.relationship_count, second.relationship_count);
        assert_eq!(first.pattern_count, second.pattern_count);
        assert_eq!(first.recent_thoughts, second.recent_thoughts);
        assert_eq!(first.recent_thoughts.len(), 3);
    }

    #[test]
    fn snapshot_reports_recent_thoughts_most_recent_last() {
        let mut engine = engine();
        let mut rng = rng();
        engine.think(Some("why one"), &mut rng);
        engine.think(Some("why two"), &mut rng);

        let snap = engine.snapshot();
        assert_eq!(snap.thought_count, 2);
        assert_eq!(snap.recent_thoughts.len(), 2);
        assert!(snap.recent_thoughts[0].ends_with(" why one"));
        assert!(snap.recent_thoughts[1].ends_with(" why two"));
        assert!(snap.age_seconds >= 0);
    }

    #[test]
    fn wild_trait_values_are_clamped_at_construction() {
        let mut seed = PersonaSeed::default();
        seed.traits.curiosity = 42.0;
        let mut engine = Engine::new(seed);
        // Would panic inside gen_bool if the clamp were missing.
        let thought = engine.think(None, &mut rng());
        assert!(thought.curiosity_sparked);
    }
}
