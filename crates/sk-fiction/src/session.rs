//! Game session management.
//!
//! A [`GameSession`] owns the world, the player, the RNG and, once the fight
//! starts, the combat state. Every line of input goes through
//! [`GameSession::process_command`], which never fails: errors become
//! [`ResponseKind::Failure`] responses.

use rand::SeedableRng;
use rand::rngs::StdRng;
use sk_content::{BOSS_ID, FLASHLIGHT_ID};
use sk_core::{
    ComponentKind, CoreError, Direction, ItemContainer, ItemId, Player, Room, World, transfer,
};
use sk_mechanics::{CombatOutcome, CombatSession};

use crate::config::GameConfig;
use crate::error::{FictionError, FictionResult};
use crate::narrator;
use crate::parser::{Command, match_mode, parse, parse_combat, resolve_item};
use crate::response::{Response, ResponseKind, StatusSnapshot};

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// SKOOLACH was destroyed.
    Victory,
    /// The player was destroyed.
    Defeat,
    /// The player quit.
    Quit,
}

/// A single playthrough.
pub struct GameSession {
    world: World,
    player: Player,
    config: GameConfig,
    combat: Option<CombatSession>,
    rng: StdRng,
    ending: Option<Ending>,
}

impl GameSession {
    /// Start a session in the world's start room.
    pub fn new(mut world: World, config: GameConfig) -> FictionResult<Self> {
        let start = world.start()?.clone();
        world
            .room_mut(&start)
            .ok_or_else(|| CoreError::UnknownRoom(start.clone()))?
            .enter();

        let player = Player::new(start, config.inventory_capacity, config.starting_health);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        log::debug!("session started in {}", player.location);

        Ok(Self {
            world,
            player,
            config,
            combat: None,
            rng,
            ending: None,
        })
    }

    /// Start a session in the standard SKOOLACH world.
    pub fn standard(config: GameConfig) -> FictionResult<Self> {
        Self::new(sk_content::build_world()?, config)
    }

    /// Opening banner and the first room.
    pub fn intro(&self) -> String {
        format!("{}\n\n{}", narrator::intro(), self.describe_here())
    }

    /// The world being explored.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable access to the player.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// The boss fight, once started.
    pub fn combat(&self) -> Option<&CombatSession> {
        self.combat.as_ref()
    }

    /// Whether a fight is waiting for an action.
    pub fn in_combat(&self) -> bool {
        self.combat.as_ref().is_some_and(CombatSession::is_active)
    }

    /// Whether the session has ended.
    pub fn is_over(&self) -> bool {
        self.ending.is_some()
    }

    /// How the session ended, if it has.
    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    /// The player's current room.
    pub fn current_room(&self) -> FictionResult<&Room> {
        self.world
            .room(&self.player.location)
            .ok_or_else(|| CoreError::UnknownRoom(self.player.location.clone()).into())
    }

    /// Snapshot of what a status bar should show.
    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            room: self
                .current_room()
                .map(|r| r.name.clone())
                .unwrap_or_default(),
            health: self.player.health,
            components: self.player.component_count(),
            total_components: ComponentKind::ALL.len(),
            tier: self.player.parser_tier(),
            inventory: self.player.inventory.names().into_iter().map(String::from).collect(),
            combat: self
                .combat
                .as_ref()
                .filter(|c| c.is_active())
                .map(|c| c.status_line(&self.player)),
        }
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Process one line of raw input.
    ///
    /// Total over all strings: blank input and anything after the game has
    /// ended produce a silent response, everything else a success or a
    /// failure with a message.
    pub fn process_command(&mut self, input: &str) -> Response {
        if self.is_over() {
            return self.respond(String::new(), ResponseKind::Silent);
        }

        let parsed = if self.in_combat() {
            parse_combat(input)
        } else {
            parse(input, self.player.parser_tier())
        };

        let result = match parsed {
            Ok(None) => return self.respond(String::new(), ResponseKind::Silent),
            Ok(Some(command)) => self.execute(command),
            Err(err) => Err(err),
        };

        match result {
            Ok(text) => self.respond(text, ResponseKind::Success),
            Err(err) => {
                log::debug!("command failed: {err}");
                self.respond(err.to_string(), ResponseKind::Failure)
            }
        }
    }

    fn respond(&self, text: String, kind: ResponseKind) -> Response {
        Response {
            text,
            kind,
            status: self.status(),
            game_over: self.is_over(),
        }
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> FictionResult<String> {
        match command {
            Command::Go(direction) => self.go(direction),
            Command::Take(phrase) => self.take(&phrase),
            Command::Drop(phrase) => self.drop(&phrase),
            Command::Look(phrase) => self.look(phrase.as_deref()),
            Command::Inventory => Ok(self.inventory()),
            Command::Use(phrase) => self.use_item(&phrase),
            Command::Help => Ok(self.help()),
            Command::Quit => Ok(self.quit()),
            Command::Attack(phrase) => self.attack(&phrase),
            Command::Talk(phrase) => Ok(self.talk(&phrase)),
            Command::Select(index) => self.select_action(index),
        }
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Move through the exit in a direction.
    pub fn go(&mut self, direction: Direction) -> FictionResult<String> {
        let exit = self
            .current_room()?
            .exit(direction)
            .cloned()
            .ok_or_else(|| FictionError::NavigationBlocked("You can't go that way.".to_string()))?;

        if let Some(required) = &exit.requires {
            if !self.player.has_item(required) {
                let name = self.item_name(required);
                return Err(FictionError::NavigationBlocked(format!(
                    "You need the {name} to go that way."
                )));
            }
        }

        self.world
            .room_mut(&exit.target)
            .ok_or_else(|| CoreError::UnknownRoom(exit.target.clone()))?
            .enter();
        log::debug!("{} -> {} ({direction})", self.player.location, exit.target);
        self.player.location = exit.target;
        Ok(self.describe_here())
    }

    /// Pick up the item in the room that matches the phrase.
    pub fn take(&mut self, phrase: &str) -> FictionResult<String> {
        let mode = match_mode(self.player.parser_tier());
        let here = self.player.location.clone();
        let room = self
            .world
            .room_mut(&here)
            .ok_or_else(|| CoreError::UnknownRoom(here.clone()))?;

        let index = resolve_item(room.items(), phrase, mode)
            .ok_or_else(|| FictionError::ItemNotFound(phrase.to_string()))?;
        let item = &room.items()[index];
        if !item.takeable {
            return Err(FictionError::CannotTake(item.name.clone()));
        }
        let name = item.name.clone();
        let kind = item.component_kind();

        transfer(room, index, &mut self.player.inventory).map_err(|err| match err {
            CoreError::InventoryFull { capacity } => FictionError::InventoryFull { capacity },
            other => FictionError::Core(other),
        })?;

        let mut text = format!("You take the {name}.");
        if let Some(kind) = kind {
            let before = self.player.parser_tier();
            if self.player.collect(kind) {
                text.push_str("\n\n");
                text.push_str(&narrator::component_acquired(kind, self.player.component_count()));
                let after = self.player.parser_tier();
                if after > before {
                    if let Some(notice) = narrator::upgrade_notice(after) {
                        text.push('\n');
                        text.push_str(notice);
                    }
                }
            }
        }
        Ok(text)
    }

    /// Put down the carried item that matches the phrase.
    pub fn drop(&mut self, phrase: &str) -> FictionResult<String> {
        let mode = match_mode(self.player.parser_tier());
        let index = resolve_item(self.player.inventory.items(), phrase, mode)
            .ok_or_else(|| FictionError::NotHeld(phrase.to_string()))?;
        let name = self.player.inventory.items()[index].name.clone();

        let here = self.player.location.clone();
        let room = self
            .world
            .room_mut(&here)
            .ok_or_else(|| CoreError::UnknownRoom(here.clone()))?;
        transfer(&mut self.player.inventory, index, room)?;
        Ok(format!("You drop the {name}."))
    }

    /// Describe the room, or examine an item in the room or inventory.
    pub fn look(&self, phrase: Option<&str>) -> FictionResult<String> {
        let Some(phrase) = phrase else {
            return Ok(self.describe_here());
        };

        let mode = match_mode(self.player.parser_tier());
        let room = self.current_room()?;
        let item = resolve_item(room.items(), phrase, mode)
            .map(|i| &room.items()[i])
            .or_else(|| {
                resolve_item(self.player.inventory.items(), phrase, mode)
                    .map(|i| &self.player.inventory.items()[i])
            })
            .ok_or_else(|| FictionError::ItemNotFound(phrase.to_string()))?;
        Ok(item.examine())
    }

    /// List what the player carries.
    pub fn inventory(&self) -> String {
        let names = self.player.inventory.names();
        let mut text = if names.is_empty() {
            "You aren't carrying anything.".to_string()
        } else {
            let mut text = String::from("You are carrying:");
            for name in names {
                text.push_str("\n  - ");
                text.push_str(name);
            }
            text
        };
        text.push_str(&format!(
            "\n\nAI components collected: {}/{}",
            self.player.component_count(),
            ComponentKind::ALL.len()
        ));
        text
    }

    /// Use a carried item.
    pub fn use_item(&mut self, phrase: &str) -> FictionResult<String> {
        let mode = match_mode(self.player.parser_tier());
        let index = resolve_item(self.player.inventory.items(), phrase, mode)
            .ok_or_else(|| FictionError::NotHeld(phrase.to_string()))?;
        let item = &self.player.inventory.items()[index];

        if item.is_component() {
            Ok(format!(
                "The {} hums with restored power. It is already part of your model.",
                item.name
            ))
        } else if item.id.as_str() == FLASHLIGHT_ID {
            Ok(format!(
                "You switch on the {}. Its beam illuminates the way ahead.",
                item.name
            ))
        } else {
            Err(FictionError::CannotUse(item.name.clone()))
        }
    }

    /// Talk to something. Nothing here talks back.
    pub fn talk(&self, _phrase: &str) -> String {
        "There's no response.".to_string()
    }

    /// Tier-appropriate help, or the action list during a fight.
    pub fn help(&self) -> String {
        match self.combat.as_ref().filter(|c| c.is_active()) {
            Some(combat) => format!(
                "Available actions:\n{}\n\nType the number of the action you want to use.",
                combat.menu(&self.player)
            ),
            None => narrator::help(self.player.parser_tier()).to_string(),
        }
    }

    /// End the session. Accepted at any time, including mid-fight.
    pub fn quit(&mut self) -> String {
        log::info!("player quit");
        self.ending = Some(Ending::Quit);
        narrator::farewell().to_string()
    }

    /// Start the boss fight against the target matching the phrase.
    pub fn attack(&mut self, phrase: &str) -> FictionResult<String> {
        let mode = match_mode(self.player.parser_tier());
        let boss = ItemId::new(BOSS_ID);
        let room = self.current_room()?;
        let targets_boss = resolve_item(room.items(), phrase, mode)
            .is_some_and(|i| room.items()[i].id == boss);
        if !targets_boss {
            return Err(FictionError::CombatIneligible(
                "There's nothing to attack here.".to_string(),
            ));
        }

        let mut combat = CombatSession::new(self.config.combat.clone());
        combat.begin(&self.player)?;

        let text = format!(
            "{}\n\n{}\n\n{}",
            narrator::battle_intro(self.player.component_count()),
            combat.status_line(&self.player),
            combat.menu(&self.player)
        );
        self.combat = Some(combat);
        Ok(text)
    }

    /// Play one combat turn with the action at `index` (1-based).
    pub fn select_action(&mut self, index: usize) -> FictionResult<String> {
        let combat = self
            .combat
            .as_mut()
            .filter(|c| c.is_active())
            .ok_or(FictionError::NotInCombat)?;
        let report = combat.select(index, &mut self.player, &mut self.rng)?;
        let narration = report.narrate();

        match report.outcome {
            CombatOutcome::Continue => Ok(format!(
                "{narration}\n\n{}\n\n{}",
                combat.status_line(&self.player),
                combat.menu(&self.player)
            )),
            CombatOutcome::Victory => {
                log::info!("victory on turn {}", report.turn);
                self.ending = Some(Ending::Victory);
                self.remove_boss();
                Ok(format!("{narration}\n\n{}", narrator::victory()))
            }
            CombatOutcome::Defeat => {
                log::info!("defeat on turn {}", report.turn);
                self.ending = Some(Ending::Defeat);
                Ok(format!("{narration}\n\n{}", narrator::defeat()))
            }
        }
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn describe_here(&self) -> String {
        match self.current_room() {
            Ok(room) => format!("== {} ==\n{}", room.name, room.describe()),
            Err(err) => err.to_string(),
        }
    }

    /// Display name of an item wherever it is, falling back to its ID.
    fn item_name(&self, id: &ItemId) -> String {
        self.player
            .inventory
            .items()
            .iter()
            .chain(self.world.rooms().flat_map(|r| r.items().iter()))
            .find(|i| &i.id == id)
            .map(|i| i.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    fn remove_boss(&mut self) {
        let boss = ItemId::new(BOSS_ID);
        let here = self.player.location.clone();
        if let Some(room) = self.world.room_mut(&here) {
            if let Some(index) = room.position(&boss) {
                room.remove_at(index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sk_content::{component, ids, room_id};

    fn session() -> GameSession {
        GameSession::standard(GameConfig::default().with_seed(7)).unwrap()
    }

    fn run(session: &mut GameSession, input: &str) -> Response {
        session.process_command(input)
    }

    #[test]
    fn starts_at_crash_site() {
        let session = session();
        assert_eq!(session.player().location, room_id(ids::CRASH_SITE));
        assert!(session.intro().contains("S K O O L A C H"));
        assert!(session.intro().contains("The Crash Site"));
    }

    #[test]
    fn blank_input_is_silent() {
        let mut session = session();
        for input in ["", "   ", "\t\n"] {
            let response = run(&mut session, input);
            assert!(response.is_silent());
            assert!(response.text.is_empty());
        }
    }

    #[test]
    fn take_and_drop_flashlight() {
        let mut session = session();
        let response = run(&mut session, "TAKE FLASHLIGHT");
        assert_eq!(response.kind, ResponseKind::Success);
        assert_eq!(response.status.inventory, vec!["LED flashlight"]);

        let response = run(&mut session, "DROP FLASHLIGHT");
        assert_eq!(response.kind, ResponseKind::Success);
        assert!(response.status.inventory.is_empty());
        assert!(session.current_room().unwrap().contains(&ItemId::new(FLASHLIGHT_ID)));
    }

    #[test]
    fn missing_item_message() {
        let mut session = session();
        let response = run(&mut session, "take banana");
        assert_eq!(response.kind, ResponseKind::Failure);
        assert_eq!(response.text, "You don't see any 'banana' here.");
    }

    #[test]
    fn scenery_cannot_be_taken() {
        let mut session = session();
        let response = run(&mut session, "take keyboard");
        assert_eq!(response.text, "You can't take the broken keyboard.");
        assert!(session.player().inventory.is_empty());
    }

    #[test]
    fn blocked_exit() {
        let mut session = session();
        let response = run(&mut session, "go south");
        assert_eq!(response.kind, ResponseKind::Failure);
        assert_eq!(response.text, "You can't go that way.");
        assert_eq!(session.player().location, room_id(ids::CRASH_SITE));
    }

    #[test]
    fn component_raises_tier() {
        let mut session = session();
        run(&mut session, "n");
        run(&mut session, "n");
        let response = run(&mut session, "take tokenizer");
        assert!(response.text.contains("[AI COMPONENT ACQUIRED: TOKENIZER]"));
        assert!(response.text.contains("Tokenizer restored"));
        assert_eq!(response.status.tier, sk_core::ParserTier::TOKENIZED);

        let response = run(&mut session, "drop the tokenizer");
        assert_eq!(response.kind, ResponseKind::Success);
        assert_eq!(session.player().component_count(), 1);
    }

    #[test]
    fn inventory_is_capped() {
        let mut session =
            GameSession::standard(GameConfig::default().with_seed(1).with_capacity(1)).unwrap();
        run(&mut session, "take flashlight");
        session
            .world
            .room_mut(&room_id(ids::CRASH_SITE))
            .unwrap()
            .insert(component(ComponentKind::Context))
            .unwrap();
        let response = run(&mut session, "take context");
        assert_eq!(response.kind, ResponseKind::Failure);
        assert_eq!(response.text, "Your inventory is full. You can only carry 1 items.");
        assert_eq!(session.player().inventory.len(), 1);
        assert!(session.current_room().unwrap().contains(&ItemId::new("context")));
    }

    #[test]
    fn use_items() {
        let mut session = session();
        assert_eq!(run(&mut session, "use flashlight").text, "You don't have any 'flashlight'.");
        run(&mut session, "take flashlight");
        assert!(run(&mut session, "use flashlight").text.contains("illuminates"));
    }

    #[test]
    fn talk_gets_no_answer() {
        let mut session = session();
        assert_eq!(run(&mut session, "talk keyboard").text, "There's no response.");
    }

    #[test]
    fn attack_needs_a_target_here() {
        let mut session = session();
        let response = run(&mut session, "attack skoolach");
        assert_eq!(response.text, "There's nothing to attack here.");
        assert_eq!(run(&mut session, "attack").text, "Attack what?");
    }

    #[test]
    fn too_weak_to_fight() {
        let mut session = session();
        session.player_mut().location = room_id(ids::VIRUS_LAIR);
        let response = run(&mut session, "attack skoolach");
        assert_eq!(response.kind, ResponseKind::Failure);
        assert!(response.text.contains("too weak"));
        assert!(session.combat().is_none());
        assert_eq!(session.player().health, 100);
    }

    #[test]
    fn quit_ends_the_game() {
        let mut session = session();
        let response = run(&mut session, "quit");
        assert!(response.game_over);
        assert_eq!(session.ending(), Some(Ending::Quit));
        assert!(run(&mut session, "look").is_silent());
    }

    #[test]
    fn select_outside_combat_fails() {
        let mut session = session();
        assert!(matches!(session.select_action(1), Err(FictionError::NotInCombat)));
        assert_eq!(run(&mut session, "1").text, narrator_hint_basic());
    }

    fn narrator_hint_basic() -> &'static str {
        crate::parser::BASIC_HINT
    }
}
