//! Error types for the fiction engine.
//!
//! The Display text of each variant is the message the player sees.

use sk_core::CoreError;
use sk_mechanics::MechError;
use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while processing a command.
#[derive(Debug, Error)]
pub enum FictionError {
    /// The input did not fit the current parser tier's grammar.
    #[error("{hint}")]
    ParseFailure {
        /// Help-oriented message for the player.
        hint: String,
    },

    /// A verb that needs an object was given none.
    #[error("{prompt}")]
    Incomplete {
        /// The follow-up question, such as "Take what?".
        prompt: &'static str,
    },

    /// No exit that way, or the exit needs an item the player lacks.
    #[error("{0}")]
    NavigationBlocked(String),

    /// Nothing in reach matches the phrase.
    #[error("You don't see any '{0}' here.")]
    ItemNotFound(String),

    /// The inventory has no free slot.
    #[error("Your inventory is full. You can only carry {capacity} items.")]
    InventoryFull {
        /// Maximum number of carried items.
        capacity: usize,
    },

    /// The item is fixed scenery.
    #[error("You can't take the {0}.")]
    CannotTake(String),

    /// The player is not carrying anything matching the phrase.
    #[error("You don't have any '{0}'.")]
    NotHeld(String),

    /// The item has no use.
    #[error("You can't use the {0} that way.")]
    CannotUse(String),

    /// No valid target, or the player is not strong enough to fight.
    #[error("{0}")]
    CombatIneligible(String),

    /// The action number is not on the menu.
    #[error("Invalid action number. Choose 1-{available}.")]
    InvalidCombatSelection {
        /// How many actions are on the menu.
        available: usize,
    },

    /// An action was selected outside a fight.
    #[error("You're not in combat.")]
    NotInCombat,

    /// World construction or an item transfer failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<MechError> for FictionError {
    fn from(err: MechError) -> Self {
        match err {
            MechError::TooWeak { .. } => Self::CombatIneligible(err.to_string()),
            MechError::InvalidSelection { available, .. } => {
                Self::InvalidCombatSelection { available }
            }
            MechError::NotInProgress => Self::NotInCombat,
        }
    }
}
