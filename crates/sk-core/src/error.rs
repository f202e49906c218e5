use crate::room::{Direction, RoomId};

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or mutating the game state.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested room does not exist in the world.
    #[error("room not found: {0}")]
    UnknownRoom(RoomId),

    /// A room with the same identity was already added.
    #[error("room already exists: \"{0}\"")]
    DuplicateRoom(RoomId),

    /// An exit points at a room that was never added.
    #[error("exit {direction} from {from} leads to unknown room {to}")]
    DanglingExit {
        /// The room the exit belongs to.
        from: RoomId,
        /// The direction of the exit.
        direction: Direction,
        /// The missing destination.
        to: RoomId,
    },

    /// The world has no rooms, so there is nowhere to start.
    #[error("world has no starting room")]
    NoStartRoom,

    /// The destination container is at capacity.
    #[error("Your inventory is full. You can only carry {capacity} items.")]
    InventoryFull {
        /// The capacity that was reached.
        capacity: usize,
    },

    /// The source container has no item at the given index.
    #[error("no item at slot {0}")]
    EmptySlot(usize),
}
