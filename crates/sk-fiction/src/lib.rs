//! Interactive fiction engine for Skoolach.
//!
//! Turns raw player input into commands with a parser that grows more
//! permissive as AI components are recovered, and runs those commands
//! against the world, the player and, in the final room, the boss fight.

/// Game configuration.
pub mod config;
/// Error types for the fiction engine.
pub mod error;
/// Fixed narrative text: banners, help, upgrade notices.
pub mod narrator;
/// Tiered command parsing and item resolution.
pub mod parser;
/// What a processed command hands back to the front end.
pub mod response;
/// Game session management.
pub mod session;

pub use config::GameConfig;
pub use error::{FictionError, FictionResult};
pub use parser::{Command, Verb, parse, parse_combat};
pub use response::{Response, ResponseKind, StatusSnapshot};
pub use session::{Ending, GameSession};
