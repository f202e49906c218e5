use std::fmt;

use crate::inventory::{Inventory, ItemContainer};
use crate::item::{ComponentKind, ItemId};
use crate::room::RoomId;

/// How permissive the command parser is.
///
/// Always derived from the number of collected components, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParserTier(usize);

impl ParserTier {
    /// Exact two-word commands only.
    pub const BASIC: Self = Self(0);
    /// Articles and "to" are skipped.
    pub const TOKENIZED: Self = Self(1);
    /// Synonyms and partial item names are understood.
    pub const SEMANTIC: Self = Self(2);

    /// The tier reached with `count` collected components.
    pub fn from_components(count: usize) -> Self {
        Self(count)
    }

    /// Numeric level.
    pub fn level(&self) -> usize {
        self.0
    }

    /// Whether stop-words are stripped before matching.
    pub fn strips_stopwords(&self) -> bool {
        *self >= Self::TOKENIZED
    }

    /// Whether verb synonyms and fuzzy item names are recognised.
    pub fn understands_synonyms(&self) -> bool {
        *self >= Self::SEMANTIC
    }
}

impl fmt::Display for ParserTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The player's state for one session.
#[derive(Debug, Clone)]
pub struct Player {
    /// Name shown in the status line.
    pub name: String,
    /// Hit points. May go negative outside combat.
    pub health: i32,
    /// The room the player is in.
    pub location: RoomId,
    /// Carried items.
    pub inventory: Inventory,
    collected: Vec<ComponentKind>,
}

impl Player {
    /// Create a player at a location.
    pub fn new(location: RoomId, capacity: usize, health: i32) -> Self {
        Self {
            name: "Coder".to_string(),
            health,
            location,
            inventory: Inventory::new(capacity),
            collected: Vec::new(),
        }
    }

    /// Record a collected component. Returns false if already collected.
    ///
    /// Collection is permanent: dropping the item later does not undo it.
    pub fn collect(&mut self, kind: ComponentKind) -> bool {
        if self.collected.contains(&kind) {
            return false;
        }
        self.collected.push(kind);
        log::debug!(
            "collected {kind}; parser tier is now {}",
            self.parser_tier()
        );
        true
    }

    /// Collected components in collection order.
    pub fn collected(&self) -> &[ComponentKind] {
        &self.collected
    }

    /// Number of collected components.
    pub fn component_count(&self) -> usize {
        self.collected.len()
    }

    /// Whether a component kind has been collected.
    pub fn has_component(&self, kind: ComponentKind) -> bool {
        self.collected.contains(&kind)
    }

    /// Whether an item is carried.
    pub fn has_item(&self, id: &ItemId) -> bool {
        self.inventory.contains(id)
    }

    /// The current parser tier.
    pub fn parser_tier(&self) -> ParserTier {
        ParserTier::from_components(self.collected.len())
    }
}
