use sk_core::ParserTier;

/// How a command went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// The command did something.
    Success,
    /// The command was understood or attempted but refused.
    Failure,
    /// Nothing to show, e.g. blank input.
    Silent,
}

/// Player-facing state for a status bar or sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// Name of the current room.
    pub room: String,
    /// Current health.
    pub health: i32,
    /// AI components collected so far.
    pub components: usize,
    /// Total AI components in the game.
    pub total_components: usize,
    /// Current parser tier.
    pub tier: ParserTier,
    /// Carried item names in pickup order.
    pub inventory: Vec<String>,
    /// Combat summary line while a fight is in progress.
    pub combat: Option<String>,
}

impl StatusSnapshot {
    /// One-line summary for text front ends.
    pub fn summary(&self) -> String {
        match &self.combat {
            Some(line) => line.clone(),
            None => format!(
                "Location: {} | Components: {}/{} | Health: {} | Parser Level: {}",
                self.room, self.components, self.total_components, self.health, self.tier
            ),
        }
    }
}

/// The result of processing one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Narrative text; empty for silent responses.
    pub text: String,
    /// Outcome category.
    pub kind: ResponseKind,
    /// State after the command.
    pub status: StatusSnapshot,
    /// Whether the session has ended.
    pub game_over: bool,
}

impl Response {
    /// Whether the front end should print anything.
    pub fn is_silent(&self) -> bool {
        self.kind == ResponseKind::Silent
    }
}
