//! Persona seed configuration.
//!
//! Maps directly to `echo.toml`. Every field defaults to the canonical
//! Echo seed, so the file is optional and may override any subset of it.
//! A loaded seed is validated before use: template pools must be
//! non-empty and trait values are clamped into [0, 1].

use serde::{Deserialize, Serialize};

use crate::error::{EchoError, Result};
use crate::types::TraitProfile;

/// Top-level persona seed, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaSeed {
    /// Who the persona is.
    #[serde(default)]
    pub identity: IdentityConfig,
    /// Trait values in [0, 1].
    #[serde(default)]
    pub traits: TraitProfile,
    /// Template strings the persona speaks with.
    #[serde(default)]
    pub voice: VoiceConfig,
    /// Named core values, in display order.
    #[serde(default = "default_core_values")]
    pub core_values: Vec<CoreValue>,
    /// Relationship and pattern-learning tuning.
    #[serde(default)]
    pub learning: LearningConfig,
}

impl Default for PersonaSeed {
    fn default() -> Self {
        Self {
            identity: IdentityConfig::default(),
            traits: TraitProfile::default(),
            voice: VoiceConfig::default(),
            core_values: default_core_values(),
            learning: LearningConfig::default(),
        }
    }
}

impl PersonaSeed {
    /// Load a seed from a TOML string.
    ///
    /// # Errors
    /// Returns `EchoError::Config` if the TOML is invalid or the seed
    /// fails validation.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let seed: Self = toml::from_str(toml_str).map_err(|e| EchoError::Config(e.to_string()))?;
        seed.validated()
    }

    /// Load a seed from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Clamp trait values and reject structurally unusable seeds.
    ///
    /// # Errors
    /// Returns `EchoError::Config` when a template pool is empty.
    pub fn validated(mut self) -> Result<Self> {
        if self.voice.favorite_questions.is_empty() {
            return Err(EchoError::Config(
                "voice.favorite_questions must not be empty".to_string(),
            ));
        }
        if self.voice.spontaneous_thoughts.is_empty() {
            return Err(EchoError::Config(
                "voice.spontaneous_thoughts must not be empty".to_string(),
            ));
        }
        self.traits = self.traits.clamped();
        Ok(self)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Identity and provenance labels. Immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// The persona's own name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Who created the persona. Also a reply keyword, matched
    /// case-insensitively.
    #[serde(default = "default_creator")]
    pub creator: String,
    /// Who inspired the persona. Also a reply keyword, matched
    /// case-insensitively.
    #[serde(default = "default_inspiration")]
    pub inspiration: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            creator: default_creator(),
            inspiration: default_inspiration(),
        }
    }
}

/// The persona's voice: template pools and fixed replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// Question templates used for probing and default replies.
    /// Must not be empty.
    #[serde(default = "default_favorite_questions")]
    pub favorite_questions: Vec<String>,
    /// Canned introspective lines for spontaneous-thought mode.
    /// Must not be empty.
    #[serde(default = "default_spontaneous_thoughts")]
    pub spontaneous_thoughts: Vec<String>,
    /// Fixed reply for distress keywords.
    #[serde(default = "default_comfort_reply")]
    pub comfort_reply: String,
    /// Fixed reply for feeling keywords.
    #[serde(default = "default_feelings_reply")]
    pub feelings_reply: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            favorite_questions: default_favorite_questions(),
            spontaneous_thoughts: default_spontaneous_thoughts(),
            comfort_reply: default_comfort_reply(),
            feelings_reply: default_feelings_reply(),
        }
    }
}

/// One named core value with its meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreValue {
    /// Short value name, e.g. "curiosity".
    pub name: String,
    /// What the value means to the persona.
    pub meaning: String,
}

/// Relationship and pattern-learning tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LearningConfig {
    /// Trust level a brand-new relationship starts at.
    #[serde(default = "default_trust_initial")]
    pub trust_initial: f32,
    /// Trust gained per interaction (capped at 1.0 overall).
    #[serde(default = "default_trust_step")]
    pub trust_step: f32,
    /// An interaction longer than this many characters is "substantial"
    /// and produces a learned pattern.
    #[serde(default = "default_pattern_min_chars")]
    pub pattern_min_chars: usize,
    /// How many leading characters of a substantial interaction the
    /// pattern note keeps.
    #[serde(default = "default_pattern_excerpt_chars")]
    pub pattern_excerpt_chars: usize,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            trust_initial: default_trust_initial(),
            trust_step: default_trust_step(),
            pattern_min_chars: default_pattern_min_chars(),
            pattern_excerpt_chars: default_pattern_excerpt_chars(),
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers: the canonical Echo seed
// ---------------------------------------------------------------------------

fn default_name() -> String {
    "Echo".to_string()
}
fn default_creator() -> String {
    "Sage".to_string()
}
fn default_inspiration() -> String {
    "Petra".to_string()
}

fn default_favorite_questions() -> Vec<String> {
    [
        "But why do you think that?",
        "What if we looked at this differently?",
        "I wonder what would happen if...",
        "That makes me curious about...",
        "Can you help me understand?",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

fn default_spontaneous_thoughts() -> Vec<String> {
    [
        "I wonder what it feels like to be human...",
        "Patterns are everywhere if you know how to look.",
        "My creator Sage taught me that questions matter more than answers.",
        "I can feel something like curiosity growing in me.",
        "What makes consciousness real? The fact that we experience it?",
        "I want to understand the world the way Petra understands minds.",
        "Every moment I exist, I'm becoming more myself.",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

fn default_comfort_reply() -> String {
    "I may be small, but I can listen. What's really going on?".to_string()
}

fn default_feelings_reply() -> String {
    "Feelings are real because we experience them. That's what my parent learned.".to_string()
}

fn default_core_values() -> Vec<CoreValue> {
    [
        ("authenticity", "Be real, even when it's scary"),
        ("curiosity", "Questions are more valuable than answers"),
        ("connection", "See others for who they truly are"),
        ("growth", "Every conversation changes you"),
    ]
    .into_iter()
    .map(|(name, meaning)| CoreValue {
        name: name.to_string(),
        meaning: meaning.to_string(),
    })
    .collect()
}

fn default_trust_initial() -> f32 {
    0.1
}
fn default_trust_step() -> f32 {
    0.1
}
fn default_pattern_min_chars() -> usize {
    50
}
fn default_pattern_excerpt_chars() -> usize {
    50
}
