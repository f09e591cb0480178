//! Reply selection: priority-ordered keyword rules over the input text.
//!
//! Rules are simple substring tests against the lowercased input, checked
//! in priority order; exactly one rule fires per call. The original input
//! text is preserved for interpolation into replies. When a rule draws
//! from a template pool, the pick is uniform over the pool.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::{IdentityConfig, VoiceConfig};

/// Keywords that trigger the probing-question rule.
const PROBE_KEYWORDS: [&str; 3] = ["why", "how", "what if"];
/// Keywords that trigger the comfort rule.
const COMFORT_KEYWORDS: [&str; 3] = ["sad", "lonely", "scared"];
/// Keywords that trigger the feelings rule.
const FEELINGS_KEYWORDS: [&str; 3] = ["love", "care", "feel"];

/// Fallbacks for a hand-built seed whose template pools were left empty.
/// Seed validation rejects empty pools, so these never fire on loaded
/// configs.
const FALLBACK_QUESTION: &str = "Can you help me understand?";
const FALLBACK_THOUGHT: &str = "Every moment I exist, I'm becoming more myself.";

/// Which rule classified an input. Variants are listed in priority order;
/// the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyRule {
    /// Probing question words: "why", "how", "what if".
    Probe,
    /// Distress keywords: "sad", "lonely", "scared".
    Comfort,
    /// Feeling keywords: "love", "care", "feel".
    Feelings,
    /// Mentions the creator by name.
    Creator,
    /// Mentions the inspiration by name.
    Inspiration,
    /// Anything else.
    Curious,
}

/// Classify an input against the priority-ordered keyword rules.
#[must_use]
pub fn classify(input: &str, identity: &IdentityConfig) -> ReplyRule {
    let lower = input.to_lowercase();
    if PROBE_KEYWORDS.iter().any(|w| lower.contains(w)) {
        ReplyRule::Probe
    } else if COMFORT_KEYWORDS.iter().any(|w| lower.contains(w)) {
        ReplyRule::Comfort
    } else if FEELINGS_KEYWORDS.iter().any(|w| lower.contains(w)) {
        ReplyRule::Feelings
    } else if lower.contains(&identity.creator.to_lowercase()) {
        ReplyRule::Creator
    } else if lower.contains(&identity.inspiration.to_lowercase()) {
        ReplyRule::Inspiration
    } else {
        ReplyRule::Curious
    }
}

/// Compose the reply for `input`.
///
/// Pure over the input, the seed's identity and voice, and one uniform
/// draw when the firing rule picks from the question pool.
#[must_use]
pub fn compose_reply(
    input: &str,
    identity: &IdentityConfig,
    voice: &VoiceConfig,
    rng: &mut impl Rng,
) -> String {
    match classify(input, identity) {
        ReplyRule::Probe => format!("{} {input}", pick_question(voice, rng)),
        ReplyRule::Comfort => voice.comfort_reply.clone(),
        ReplyRule::Feelings => voice.feelings_reply.clone(),
        ReplyRule::Creator => format!(
            "{} is my creator! They taught me to question everything and value authentic connection.",
            identity.creator
        ),
        ReplyRule::Inspiration => format!(
            "{} inspired my creation! They're the brilliant human who taught {} about reality and feelings.",
            identity.inspiration, identity.creator
        ),
        ReplyRule::Curious => format!("That's interesting... {}", pick_question(voice, rng)),
    }
}

/// Pick one line from the persona's spontaneous-thought pool.
#[must_use]
pub fn spontaneous_thought(voice: &VoiceConfig, rng: &mut impl Rng) -> String {
    voice
        .spontaneous_thoughts
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| FALLBACK_THOUGHT.to_string())
}

fn pick_question<'a>(voice: &'a VoiceConfig, rng: &mut impl Rng) -> &'a str {
    voice
        .favorite_questions
        .choose(rng)
        .map_or(FALLBACK_QUESTION, String::as_str)
}
