use std::collections::BTreeMap;
use std::fmt;

use crate::inventory::ItemContainer;
use crate::item::{Item, ItemId};

/// Stable identity of a room, stored as a lowercase slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(String);

impl RoomId {
    /// Create a room ID from a slug. The slug is lowercased.
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into().to_lowercase())
    }

    /// The slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Direction of an exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Northeast.
    Northeast,
    /// Northwest.
    Northwest,
    /// Southeast.
    Southeast,
    /// Southwest.
    Southwest,
    /// Up.
    Up,
    /// Down.
    Down,
}

impl Direction {
    /// Every direction, in display order.
    pub const ALL: [Self; 10] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Northeast,
        Self::Northwest,
        Self::Southeast,
        Self::Southwest,
        Self::Up,
        Self::Down,
    ];

    /// Parse a direction from a word or abbreviation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            "ne" | "northeast" => Some(Self::Northeast),
            "nw" | "northwest" => Some(Self::Northwest),
            "se" | "southeast" => Some(Self::Southeast),
            "sw" | "southwest" => Some(Self::Southwest),
            "u" | "up" => Some(Self::Up),
            "d" | "down" => Some(Self::Down),
            _ => None,
        }
    }

    /// Get the display name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Northeast => "northeast",
            Self::Northwest => "northwest",
            Self::Southeast => "southeast",
            Self::Southwest => "southwest",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// The direction leading back.
    pub fn opposite(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::Northeast => Self::Southwest,
            Self::Northwest => Self::Southeast,
            Self::Southeast => Self::Northwest,
            Self::Southwest => Self::Northeast,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An edge of the room graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    /// Where the exit leads.
    pub target: RoomId,
    /// Item the player must carry to pass, if any.
    pub requires: Option<ItemId>,
}

/// A location in the world.
#[derive(Debug, Clone)]
pub struct Room {
    /// Stable identity.
    pub id: RoomId,
    /// Display name.
    pub name: String,
    /// Long description, used during the first stay.
    pub description: String,
    /// Short description, used on later visits.
    pub short_description: String,
    exits: BTreeMap<Direction, Exit>,
    items: Vec<Item>,
    visits: u32,
}

impl Room {
    /// Create a room with no exits or items. The short description
    /// defaults to the room name.
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: RoomId::new(id),
            short_description: name.clone(),
            name,
            description: description.into(),
            exits: BTreeMap::new(),
            items: Vec::new(),
            visits: 0,
        }
    }

    /// Set the short description.
    pub fn with_short(mut self, short: impl Into<String>) -> Self {
        self.short_description = short.into();
        self
    }

    /// Add an item at world-build time.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Add or replace an open exit.
    pub fn add_exit(&mut self, direction: Direction, target: RoomId) {
        self.exits.insert(
            direction,
            Exit {
                target,
                requires: None,
            },
        );
    }

    /// Add or replace an exit that needs an item to pass.
    pub fn add_gated_exit(&mut self, direction: Direction, target: RoomId, requires: ItemId) {
        self.exits.insert(
            direction,
            Exit {
                target,
                requires: Some(requires),
            },
        );
    }

    /// The exit in a direction, if any.
    pub fn exit(&self, direction: Direction) -> Option<&Exit> {
        self.exits.get(&direction)
    }

    /// All exits in display order.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, &Exit)> {
        self.exits.iter().map(|(d, e)| (*d, e))
    }

    /// Record that the player has entered the room.
    pub fn enter(&mut self) {
        self.visits = self.visits.saturating_add(1);
    }

    /// Whether the current stay is a return visit.
    pub fn is_revisit(&self) -> bool {
        self.visits > 1
    }

    /// Describe the room: full text during the first stay, short text on
    /// return visits, followed by visible items and exits.
    pub fn describe(&self) -> String {
        let mut output = if self.is_revisit() {
            self.short_description.clone()
        } else {
            self.description.clone()
        };

        if !self.items.is_empty() {
            let names: Vec<&str> = self.items.iter().map(|i| i.name.as_str()).collect();
            output.push_str(&format!("\n\nYou can see: {}", names.join(", ")));
        }

        if !self.exits.is_empty() {
            let exits: Vec<&str> = self.exits.keys().map(|d| d.name()).collect();
            output.push_str(&format!("\n\nExits: {}", exits.join(", ")));
        }

        output
    }
}

impl ItemContainer for Room {
    fn items(&self) -> &[Item] {
        &self.items
    }

    fn remove_at(&mut self, index: usize) -> Option<Item> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    fn insert(&mut self, item: Item) -> Result<(), Item> {
        self.items.push(item);
        Ok(())
    }
}
