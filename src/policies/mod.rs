//! Policies deciding what gets logged.
//!
//! - [`LevelFilter`] predicate consulted for every log call.
//! - [`TagLevelFilter`] default level with per-tag overrides.
//! - [`TagThreshold`] per-tag minimum level or suppression.

mod filter;

pub use filter::{LevelFilter, TagLevelFilter, TagThreshold};
