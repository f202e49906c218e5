//! Combat state machine for the SKOOLACH fight.
//!
//! One turn is: the player's action, a phase check, a victory check, the
//! boss's move, then a defeat check. Every step is appended to the log.

pub mod action;
pub mod boss;

pub use action::{ActionEffect, Actor, CombatAction, CombatEvent, player_actions};
pub use boss::{Boss, BossMove, BossPhase, behaviour};

use rand::rngs::StdRng;
use sk_core::Player;

use crate::config::CombatConfig;
use crate::error::{MechError, MechResult};
use crate::roll::vary;

/// Lifecycle of a combat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatState {
    /// Created but not yet begun.
    NotStarted,
    /// Waiting for the player's next action.
    InProgress,
    /// SKOOLACH is destroyed.
    Victory,
    /// The player's health ran out.
    Defeat,
}

/// How a single turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    /// The fight goes on.
    Continue,
    /// The player won on this turn.
    Victory,
    /// The player lost on this turn.
    Defeat,
}

/// Everything that happened in one turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    /// Turn number (1-based).
    pub turn: u32,
    /// Events in the order they happened.
    pub events: Vec<CombatEvent>,
    /// How the turn ended.
    pub outcome: CombatOutcome,
}

impl TurnReport {
    /// The events of this turn as narrated lines.
    pub fn narrate(&self) -> String {
        self.events
            .iter()
            .filter(|e| !matches!(e, CombatEvent::Ended { .. }))
            .map(CombatEvent::narrate)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A fight with SKOOLACH.
#[derive(Debug, Clone)]
pub struct CombatSession {
    config: CombatConfig,
    boss: Boss,
    state: CombatState,
    turn: u32,
    /// Log of all combat events.
    pub log: Vec<CombatEvent>,
}

impl CombatSession {
    /// Create a fight that has not started yet.
    pub fn new(config: CombatConfig) -> Self {
        let boss = Boss::new(config.boss_max_health, config.regen_uses);
        Self {
            config,
            boss,
            state: CombatState::NotStarted,
            turn: 0,
            log: Vec::new(),
        }
    }

    /// Start the fight if the player is strong enough.
    pub fn begin(&mut self, player: &Player) -> MechResult<()> {
        if self.state != CombatState::NotStarted {
            return Err(MechError::NotInProgress);
        }
        let have = player.component_count();
        if have < self.config.min_components {
            return Err(MechError::TooWeak {
                have,
                need: self.config.min_components,
            });
        }
        log::info!("combat begins with {have} components");
        self.state = CombatState::InProgress;
        Ok(())
    }

    /// Current lifecycle state.
    pub fn state(&self) -> CombatState {
        self.state
    }

    /// Whether the fight is waiting for a player action.
    pub fn is_active(&self) -> bool {
        self.state == CombatState::InProgress
    }

    /// Whether the fight has been decided.
    pub fn is_over(&self) -> bool {
        matches!(self.state, CombatState::Victory | CombatState::Defeat)
    }

    /// The boss.
    pub fn boss(&self) -> &Boss {
        &self.boss
    }

    /// Turns played so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The configuration this fight runs with.
    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Actions the player may choose from, in menu order.
    pub fn actions(&self, player: &Player) -> Vec<CombatAction> {
        player_actions(player.collected())
    }

    /// The numbered action menu.
    pub fn menu(&self, player: &Player) -> String {
        let mut out = String::from("Choose your action:");
        for (i, action) in self.actions(player).iter().enumerate() {
            out.push_str(&format!("\n  {}. {}", i + 1, action.summary()));
            out.push_str(&format!("\n     {}", action.description));
        }
        out.push_str("\n\nEnter the number of your action:");
        out
    }

    /// One-line health summary shown during the fight.
    pub fn status_line(&self, player: &Player) -> String {
        format!(
            "YOUR HP: {}/{} | SKOOLACH HP: {}/{} | PHASE {}",
            player.health,
            self.config.player_max_health,
            self.boss.health,
            self.boss.max_health,
            self.boss.phase()
        )
    }

    /// Play one turn with the action at `index` (1-based) in the menu.
    ///
    /// An out-of-range index leaves every piece of state untouched.
    pub fn select(
        &mut self,
        index: usize,
        player: &mut Player,
        rng: &mut StdRng,
    ) -> MechResult<TurnReport> {
        if self.state != CombatState::InProgress {
            return Err(MechError::NotInProgress);
        }
        let actions = self.actions(player);
        let action = index
            .checked_sub(1)
            .and_then(|i| actions.get(i))
            .cloned()
            .ok_or(MechError::InvalidSelection {
                index,
                available: actions.len(),
            })?;

        self.turn += 1;
        let turn = self.turn;
        let mut events = vec![self.player_turn(&action, player, rng)];

        if let Some(phase) = self.boss.update_phase() {
            events.push(CombatEvent::PhaseChange { turn, phase });
        }

        if !self.boss.is_alive() {
            return Ok(self.finish(events, Actor::Player));
        }

        events.push(self.boss_turn(player, rng));

        if player.health <= 0 {
            return Ok(self.finish(events, Actor::Boss));
        }

        self.log.extend(events.iter().cloned());
        Ok(TurnReport {
            turn,
            events,
            outcome: CombatOutcome::Continue,
        })
    }

    fn player_turn(&mut self, action: &CombatAction, player: &mut Player, rng: &mut StdRng) -> CombatEvent {
        let variance = self.config.variance_percent;
        let (amount, description) = match action.effect {
            ActionEffect::Damage(base) => {
                let dmg = vary(base, variance, rng);
                self.boss.take_damage(dmg);
                (dmg, format!("You use {}! SKOOLACH takes {dmg} damage!", action.name))
            }
            ActionEffect::Heal(base) => {
                let rolled = vary(base, variance, rng);
                let healed = rolled.min(self.config.player_max_health - player.health).max(0);
                player.health += healed;
                (healed, format!("You use {}! You restore {healed} health!", action.name))
            }
        };
        log::debug!("turn {}: player {} for {amount}", self.turn, action.name);
        CombatEvent::PlayerAction {
            turn: self.turn,
            action: action.name,
            amount,
            description,
        }
    }

    fn boss_turn(&mut self, player: &mut Player, rng: &mut StdRng) -> CombatEvent {
        let mv = self.boss.choose_move(rng);
        let (amount, description) = if mv == BossMove::Regenerate {
            let healed = self.boss.regenerate(self.config.regen_amount);
            (
                healed,
                format!("SKOOLACH uses {}! {} (+{healed} HP)", mv.name(), mv.description()),
            )
        } else {
            let dmg = vary(mv.base_damage(), self.config.variance_percent, rng);
            player.health -= dmg;
            (
                dmg,
                format!("SKOOLACH uses {}! {} You take {dmg} damage!", mv.name(), mv.description()),
            )
        };
        log::debug!("turn {}: boss {} for {amount}", self.turn, mv.name());
        CombatEvent::BossAction {
            turn: self.turn,
            action: mv,
            amount,
            description,
        }
    }

    fn finish(&mut self, mut events: Vec<CombatEvent>, winner: Actor) -> TurnReport {
        let turn = self.turn;
        events.push(CombatEvent::Ended { turn, winner });
        let (state, outcome) = match winner {
            Actor::Player => (CombatState::Victory, CombatOutcome::Victory),
            Actor::Boss => (CombatState::Defeat, CombatOutcome::Defeat),
        };
        log::info!("combat ended on turn {turn}: {state:?}");
        self.state = state;
        self.log.extend(events.iter().cloned());
        TurnReport { turn, events, outcome }
    }
}
