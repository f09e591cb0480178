//! # Echo Core Library
//!
//! The interaction engine behind the Echo persona: a small, fully
//! in-memory text-response simulator. One [`Engine`] value owns all state:
//!
//! - **Thoughts**: an append-only journal of every exchange, each with a
//!   per-turn curiosity draw
//! - **Relationships**: per-participant interaction counts and a bounded
//!   trust level
//! - **Learned patterns**: truncated-text notes kept for substantial
//!   interactions
//! - **Persona seed**: identity, trait values, and the template strings
//!   replies are composed from, loadable from `echo.toml`
//!
//! There is no persistence, no network, and no background work: state is
//! process-lifetime and every operation runs to completion synchronously.
//! The engine is built for exclusive use by a single driving loop; wrap it
//! in a mutex yourself if you ever share it.
//!
//! Randomness is always injected via [`rand::Rng`] parameters, so drivers
//! pass `thread_rng()` and tests pass a seeded generator.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod engine;
pub mod error;
pub mod learning;
pub mod relationship;
pub mod response;
pub mod thought;
pub mod types;

pub use config::PersonaSeed;
pub use engine::{Engine, EngineSnapshot};
pub use error::EchoError;
pub use types::*;
