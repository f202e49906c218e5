//! Error types for the combat engine.

/// Errors that can occur during combat.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// The player has not collected enough AI components to fight.
    #[error(
        "You attempt to engage SKOOLACH, but you're too weak!\n\n\
         You've only collected {have} AI components. You need at least {need} \
         to have a fighting chance against the virus.\n\n\
         SKOOLACH laughs: 'Come back when you're stronger, little coder...'"
    )]
    TooWeak {
        /// Components collected so far.
        have: usize,
        /// Components required.
        need: usize,
    },

    /// The selected action number is not on the list.
    #[error("Invalid action number. Choose 1-{available}.")]
    InvalidSelection {
        /// The number the player typed.
        index: usize,
        /// How many actions are available.
        available: usize,
    },

    /// The combat has not started or is already over.
    #[error("the fight is not in progress")]
    NotInProgress,
}

/// Convenience result type for combat operations.
pub type MechResult<T> = Result<T, MechError>;
