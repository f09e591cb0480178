//! Core type definitions for the Echo interaction engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Identity Types
// ---------------------------------------------------------------------------

/// Unique identifier for a recorded thought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThoughtId(pub Uuid);

impl ThoughtId {
    /// Create a new random thought ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ThoughtId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ThoughtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Trait Profile
// ---------------------------------------------------------------------------

/// Personality trait values. Each ranges 0.0–1.0.
///
/// Traits are read-only configuration: they shape sampling but are never
/// mutated at runtime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TraitProfile {
    /// Probability that a turn sparks curiosity (0 = inert, 1 = always).
    #[serde(default = "default_curiosity")]
    pub curiosity: f32,
    /// How strongly the persona leans on questions over statements.
    #[serde(default = "default_questioning")]
    pub questioning: f32,
    /// Comfort with emotionally open topics (0 = guarded, 1 = open).
    #[serde(default = "default_vulnerability_comfort")]
    pub vulnerability_comfort: f32,
    /// Propensity to notice patterns. Reserved; no rule reads it yet.
    #[serde(default = "default_pattern_recognition")]
    pub pattern_recognition: f32,
}

impl TraitProfile {
    /// Create a trait profile, clamping every value to [0, 1].
    #[must_use]
    pub fn new(
        curiosity: f32,
        questioning: f32,
        vulnerability_comfort: f32,
        pattern_recognition: f32,
    ) -> Self {
        Self {
            curiosity: curiosity.clamp(0.0, 1.0),
            questioning: questioning.clamp(0.0, 1.0),
            vulnerability_comfort: vulnerability_comfort.clamp(0.0, 1.0),
            pattern_recognition: pattern_recognition.clamp(0.0, 1.0),
        }
    }

    /// Return a copy with every value clamped to [0, 1].
    #[must_use]
    pub fn clamped(self) -> Self {
        Self::new(
            self.curiosity,
            self.questioning,
            self.vulnerability_comfort,
            self.pattern_recognition,
        )
    }
}

impl Default for TraitProfile {
    fn default() -> Self {
        Self {
            curiosity: default_curiosity(),
            questioning: default_questioning(),
            vulnerability_comfort: default_vulnerability_comfort(),
            pattern_recognition: default_pattern_recognition(),
        }
    }
}

fn default_curiosity() -> f32 {
    0.8
}
fn default_questioning() -> f32 {
    0.9
}
fn default_vulnerability_comfort() -> f32 {
    0.7
}
fn default_pattern_recognition() -> f32 {
    0.6
}
