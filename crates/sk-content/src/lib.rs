//! The Skoolach world: rooms, items, and the nine AI components.
//!
//! Everything here is static data assembled into a [`sk_core::World`] at
//! startup. The engine never parses files; it receives the result of
//! [`build_world`].

/// The nine AI components and their educational notes.
pub mod components;
/// Room layout and scenery.
pub mod rooms;

pub use components::component;
pub use rooms::{build_world, ids, room_id};

/// Item ID of the final boss.
pub const BOSS_ID: &str = "skoolach";

/// Item ID of the flashlight that opens the Dark Archives.
pub const FLASHLIGHT_ID: &str = "flashlight";

/// Item ID of the debugger that opens the way into the Virus Lair.
pub const DEBUGGER_ID: &str = "debugger";
