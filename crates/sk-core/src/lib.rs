//! Core types for Skoolach: items, AI components, rooms, and the player.
//!
//! This crate holds the data the game engine mutates. It knows nothing about
//! command parsing or combat; a world is assembled programmatically (see the
//! `sk-content` crate) and then handed to a session.

/// Error types used throughout the crate.
pub mod error;
/// Bounded inventories and the item transfer primitive.
pub mod inventory;
/// Items, AI components, and keyword matching.
pub mod item;
/// Player state and the derived parser tier.
pub mod player;
/// Rooms, exits, and compass directions.
pub mod room;
/// The room graph that owns every room.
pub mod world;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export inventory types.
pub use inventory::{DEFAULT_CAPACITY, Inventory, ItemContainer, transfer};
/// Re-export item types.
pub use item::{AiComponent, ComponentKind, Item, ItemId, MatchMode};
/// Re-export player types.
pub use player::{ParserTier, Player};
/// Re-export room types.
pub use room::{Direction, Exit, Room, RoomId};
/// Re-export world types.
pub use world::World;
