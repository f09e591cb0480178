//! Property-based tests for the Echo interaction engine.
//!
//! Uses `proptest` to verify the bookkeeping invariants under arbitrary
//! input sequences: trust bounds and monotonicity, journal growth, and
//! pattern-note shape.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use echo_core::config::{LearningConfig, PersonaSeed};
use echo_core::engine::Engine;
use echo_core::learning::derive_pattern;
use echo_core::relationship::TRUST_CEILING;
use echo_core::response::{self, ReplyRule};

// ---------------------------------------------------------------------------
// Property: trust stays in [0.1, 1.0] and never decreases
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn trust_bounded_and_monotone(
        names in proptest::collection::vec("[A-Za-z]{1,8}", 1..40),
    ) {
        let mut engine = Engine::new(PersonaSeed::default());
        for name in &names {
            let before = engine.relationship(name).map(|r| r.trust_level);
            let rel = engine.learn_from_interaction(name, "hello");
            prop_assert!(rel.trust_level >= 0.1);
            prop_assert!(rel.trust_level <= TRUST_CEILING);
            if let Some(before) = before {
                prop_assert!(rel.trust_level >= before);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property: interaction counts sum to the number of learn calls
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn interaction_counts_sum_to_learn_calls(
        names in proptest::collection::vec("[A-C]", 1..60),
    ) {
        let mut engine = Engine::new(PersonaSeed::default());
        for name in &names {
            engine.learn_from_interaction(name, "brief");
        }
        let total: u32 = engine.ledger().iter().map(|r| r.interaction_count).sum();
        prop_assert_eq!(total as usize, names.len());
    }
}

// ---------------------------------------------------------------------------
// Property: journal length equals the number of think calls
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn journal_tracks_every_think(
        inputs in proptest::collection::vec(proptest::option::of(".{0,60}"), 0..30),
        seed in any::<u64>(),
    ) {
        let mut engine = Engine::new(PersonaSeed::default());
        let mut rng = StdRng::seed_from_u64(seed);
        for input in &inputs {
            engine.think(input.as_deref(), &mut rng);
        }
        prop_assert_eq!(engine.journal().len(), inputs.len());
    }
}

// ---------------------------------------------------------------------------
// Property: pattern notes appear iff the text is long enough,
// and excerpts never exceed the configured length
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn pattern_notes_respect_the_threshold(text in ".{0,120}") {
        let learning = LearningConfig::default();
        let char_count = text.chars().count();
        match derive_pattern("Ann", &text, &learning) {
            Some(pattern) => {
                prop_assert!(char_count > learning.pattern_min_chars);
                let excerpt = pattern
                    .strip_prefix("Humans like Ann tend to: ")
                    .and_then(|rest| rest.strip_suffix("..."))
                    .expect("template shape");
                prop_assert!(excerpt.chars().count() <= learning.pattern_excerpt_chars);
            }
            None => prop_assert!(char_count <= learning.pattern_min_chars),
        }
    }
}

// ---------------------------------------------------------------------------
// Property: classification is total and respects the probe rule
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn probe_inputs_echo_the_original_text(suffix in "[a-z ]{0,40}") {
        let seed = PersonaSeed::default();
        let input = format!("why {suffix}");
        prop_assert_eq!(
            response::classify(&input, &seed.identity),
            ReplyRule::Probe
        );

        let mut rng = StdRng::seed_from_u64(5);
        let reply = response::compose_reply(&input, &seed.identity, &seed.voice, &mut rng);
        let expected_suffix = format!(" {}", input);
        prop_assert!(reply.ends_with(&expected_suffix));
    }
}

proptest! {
    #[test]
    fn every_input_composes_some_reply(input in ".{1,80}", seed in any::<u64>()) {
        let persona = PersonaSeed::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let reply = response::compose_reply(&input, &persona.identity, &persona.voice, &mut rng);
        prop_assert!(!reply.is_empty());
    }
}
