//! Turn-based boss combat for Skoolach.
//!
//! A [`CombatSession`] is created when the player attacks SKOOLACH and thrown
//! away when the fight ends. The player's collected AI components decide which
//! actions are on offer; the boss escalates through three phases as its
//! health drops.

pub mod combat;
pub mod config;
pub mod error;
pub mod roll;

pub use combat::{
    ActionEffect, Actor, Boss, BossMove, BossPhase, CombatAction, CombatEvent, CombatOutcome,
    CombatSession, CombatState, TurnReport, player_actions,
};
pub use config::CombatConfig;
pub use error::{MechError, MechResult};
pub use roll::vary;
