//! Player combat actions and event logging.

use sk_core::ComponentKind;

use super::boss::{BossMove, BossPhase};

/// What an action does when used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionEffect {
    /// Hurt the boss by roughly this much.
    Damage(i32),
    /// Restore roughly this much player health.
    Heal(i32),
}

/// An action the player can choose on their turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatAction {
    /// Display name.
    pub name: &'static str,
    /// Flavour text shown when listed and used.
    pub description: &'static str,
    /// The mechanical effect.
    pub effect: ActionEffect,
    /// Component that unlocked this action; `None` for the basic attack.
    pub unlocked_by: Option<ComponentKind>,
}

impl CombatAction {
    /// The attack that is always available.
    pub fn debug_attack() -> Self {
        Self {
            name: "Debug Attack",
            description: "A basic debugging attempt. Weak but reliable.",
            effect: ActionEffect::Damage(10),
            unlocked_by: None,
        }
    }

    /// The themed attack unlocked by a component.
    pub fn themed_attack(kind: ComponentKind) -> Self {
        let (name, description, damage) = match kind {
            ComponentKind::Tokenizer => (
                "Token Blast",
                "Break the virus into manageable tokens and eliminate them.",
                20,
            ),
            ComponentKind::Embedding => (
                "Semantic Strike",
                "Use vector space to find the virus's weak points.",
                25,
            ),
            ComponentKind::Attention => (
                "Focused Attention",
                "Focus all processing power on the virus's critical components.",
                30,
            ),
            ComponentKind::NeuralLayer => (
                "Neural Surge",
                "Channel neural network power through every layer.",
                35,
            ),
            ComponentKind::TrainingData => (
                "Knowledge Beam",
                "Deploy accumulated knowledge against the virus.",
                28,
            ),
            ComponentKind::Optimizer => (
                "Gradient Descent",
                "Optimise damage output through iterative improvement.",
                32,
            ),
            ComponentKind::Inference => (
                "Prediction Strike",
                "Predict and counter the virus's next move.",
                40,
            ),
            ComponentKind::Context => (
                "Contextual Barrage",
                "Use long-range context to overwhelm the virus.",
                38,
            ),
            ComponentKind::FineTuning => (
                "Calibrated Strike",
                "A precisely tuned blow aimed at the virus's exact weaknesses.",
                33,
            ),
        };
        Self {
            name,
            description,
            effect: ActionEffect::Damage(damage),
            unlocked_by: Some(kind),
        }
    }

    /// The healing action granted by the optimizer.
    pub fn self_optimize() -> Self {
        Self {
            name: "Self-Optimize",
            description: "Optimise your own systems to restore health.",
            effect: ActionEffect::Heal(30),
            unlocked_by: Some(ComponentKind::Optimizer),
        }
    }

    /// One-line summary used in numbered action menus.
    pub fn summary(&self) -> String {
        match self.effect {
            ActionEffect::Damage(d) => format!("{} [DMG: {d}]", self.name),
            ActionEffect::Heal(h) => format!("{} [HEAL: {h}]", self.name),
        }
    }
}

/// Actions available to a player holding the given components.
///
/// Debug Attack comes first, then one themed attack per component in
/// collection order, then Self-Optimize if the optimizer was collected.
pub fn player_actions(collected: &[ComponentKind]) -> Vec<CombatAction> {
    let mut actions = vec![CombatAction::debug_attack()];
    actions.extend(collected.iter().map(|&k| CombatAction::themed_attack(k)));
    if collected.contains(&ComponentKind::Optimizer) {
        actions.push(CombatAction::self_optimize());
    }
    actions
}

/// Who did something in a combat event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    /// The player.
    Player,
    /// SKOOLACH.
    Boss,
}

/// A recorded combat event.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    /// The player used an action.
    PlayerAction {
        /// Turn number (1-based).
        turn: u32,
        /// Name of the action.
        action: &'static str,
        /// The rolled amount (damage dealt or health restored).
        amount: i32,
        /// The narrated result.
        description: String,
    },
    /// The boss used a move.
    BossAction {
        /// Turn number (1-based).
        turn: u32,
        /// The move.
        action: BossMove,
        /// The rolled amount (damage dealt or health restored).
        amount: i32,
        /// The narrated result.
        description: String,
    },
    /// The boss escalated to a new phase.
    PhaseChange {
        /// Turn number (1-based).
        turn: u32,
        /// The phase entered.
        phase: BossPhase,
    },
    /// The fight ended.
    Ended {
        /// Turn number (1-based).
        turn: u32,
        /// Who won.
        winner: Actor,
    },
}

impl CombatEvent {
    /// The narrated text for this event.
    pub fn narrate(&self) -> String {
        match self {
            Self::PlayerAction { description, .. } | Self::BossAction { description, .. } => {
                description.clone()
            }
            Self::PhaseChange { phase, .. } => phase.announcement().to_string(),
            Self::Ended { winner, .. } => match winner {
                Actor::Player => "SKOOLACH has been defeated!".to_string(),
                Actor::Boss => "Your systems fail...".to_string(),
            },
        }
    }
}
