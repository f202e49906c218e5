//! SKOOLACH: health, phases, and the behaviour table.

use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;

/// Escalation stage of the boss fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BossPhase {
    /// Above two thirds of maximum health.
    Probing,
    /// Below two thirds.
    Destabilized,
    /// Below one third.
    FinalForm,
}

impl BossPhase {
    /// Ordinal, 1 to 3.
    pub fn number(&self) -> u8 {
        match self {
            Self::Probing => 1,
            Self::Destabilized => 2,
            Self::FinalForm => 3,
        }
    }

    /// The phase a boss at `health` out of `max` belongs in.
    pub fn for_health(health: i32, max: i32) -> Self {
        let (health, max) = (i64::from(health), i64::from(max.max(1)));
        if health * 3 < max {
            Self::FinalForm
        } else if health * 3 < max * 2 {
            Self::Destabilized
        } else {
            Self::Probing
        }
    }

    /// Message shown when the phase begins.
    pub fn announcement(&self) -> &'static str {
        match self {
            Self::Probing => "SKOOLACH writhes menacingly...",
            Self::Destabilized => {
                "*** SKOOLACH'S CODE DESTABILIZES! The virus grows more aggressive! ***"
            }
            Self::FinalForm => "*** CRITICAL: SKOOLACH ENTERS FINAL FORM! MAXIMUM CORRUPTION! ***",
        }
    }
}

impl fmt::Display for BossPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Something the boss can do on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossMove {
    /// Light damage.
    DataLeak,
    /// Moderate damage.
    MemoryCorruption,
    /// Heavy damage.
    ParserDegradation,
    /// Massive damage.
    StackOverflow,
    /// Heal itself; limited uses.
    Regenerate,
}

impl BossMove {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DataLeak => "Data Leak",
            Self::MemoryCorruption => "Memory Corruption",
            Self::ParserDegradation => "Parser Degradation",
            Self::StackOverflow => "Stack Overflow",
            Self::Regenerate => "Regenerate",
        }
    }

    /// Flavour text.
    pub fn description(&self) -> &'static str {
        match self {
            Self::DataLeak => "SKOOLACH siphons your training data, dealing light damage.",
            Self::MemoryCorruption => "SKOOLACH corrupts your memory, dealing moderate damage.",
            Self::ParserDegradation => {
                "SKOOLACH attacks your language processing, dealing heavy damage."
            }
            Self::StackOverflow => "SKOOLACH causes a cascade failure, dealing massive damage!",
            Self::Regenerate => "SKOOLACH absorbs corrupted data to heal itself.",
        }
    }

    /// Base damage to the player; zero for healing moves.
    pub fn base_damage(&self) -> i32 {
        match self {
            Self::DataLeak => 10,
            Self::MemoryCorruption => 15,
            Self::ParserDegradation => 25,
            Self::StackOverflow => 30,
            Self::Regenerate => 0,
        }
    }
}

/// The boss behaviour table: weighted moves for a phase.
///
/// Pure function of the phase, the boss's health fraction and whether a
/// regeneration is still available. Evaluated fresh on every boss turn.
pub fn behaviour(phase: BossPhase, health_fraction: f64, can_regenerate: bool) -> Vec<(BossMove, u32)> {
    let mut table = match phase {
        BossPhase::Probing => vec![(BossMove::DataLeak, 1), (BossMove::MemoryCorruption, 1)],
        BossPhase::Destabilized => vec![
            (BossMove::DataLeak, 1),
            (BossMove::MemoryCorruption, 2),
            (BossMove::ParserDegradation, 2),
            (BossMove::StackOverflow, 1),
        ],
        BossPhase::FinalForm => vec![(BossMove::ParserDegradation, 2), (BossMove::StackOverflow, 2)],
    };

    if can_regenerate {
        match phase {
            BossPhase::Probing => {}
            BossPhase::Destabilized if health_fraction < 0.4 => {
                table.push((BossMove::Regenerate, 3));
            }
            BossPhase::Destabilized => {}
            BossPhase::FinalForm => table.push((BossMove::Regenerate, 1)),
        }
    }

    table
}

/// Pick one move from a weighted table.
fn pick(table: &[(BossMove, u32)], rng: &mut StdRng) -> BossMove {
    let total: u32 = table.iter().map(|(_, w)| w).sum();
    if total == 0 {
        return BossMove::DataLeak;
    }
    let mut roll = rng.random_range(0..total);
    for &(mv, weight) in table {
        if roll < weight {
            return mv;
        }
        roll -= weight;
    }
    BossMove::DataLeak
}

/// SKOOLACH's state during a fight.
#[derive(Debug, Clone, PartialEq)]
pub struct Boss {
    /// Display name.
    pub name: &'static str,
    /// Current health. May drop below zero on the killing blow.
    pub health: i32,
    /// Maximum health.
    pub max_health: i32,
    phase: BossPhase,
    regen_left: u32,
}

impl Boss {
    /// Create the boss at full health.
    pub fn new(max_health: i32, regen_uses: u32) -> Self {
        let max_health = max_health.max(1);
        Self {
            name: "SKOOLACH",
            health: max_health,
            max_health,
            phase: BossPhase::Probing,
            regen_left: regen_uses,
        }
    }

    /// The current phase.
    pub fn phase(&self) -> BossPhase {
        self.phase
    }

    /// Regenerations still available.
    pub fn regen_left(&self) -> u32 {
        self.regen_left
    }

    /// Health as a fraction of maximum.
    pub fn health_fraction(&self) -> f64 {
        f64::from(self.health) / f64::from(self.max_health)
    }

    /// Whether the boss is still standing.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Apply damage.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount.max(0);
    }

    /// Advance the phase if health has crossed a threshold.
    ///
    /// Returns the new phase only on the call that crosses it; phases never
    /// go backwards, even after regeneration.
    pub fn update_phase(&mut self) -> Option<BossPhase> {
        let target = BossPhase::for_health(self.health, self.max_health);
        if target > self.phase {
            log::debug!("boss phase {} -> {}", self.phase, target);
            self.phase = target;
            Some(target)
        } else {
            None
        }
    }

    /// Choose this turn's move from the behaviour table.
    pub fn choose_move(&self, rng: &mut StdRng) -> BossMove {
        let table = behaviour(self.phase, self.health_fraction(), self.regen_left > 0);
        pick(&table, rng)
    }

    /// Spend one regeneration, healing up to `amount`. Returns health gained.
    pub fn regenerate(&mut self, amount: i32) -> i32 {
        if self.regen_left == 0 {
            return 0;
        }
        self.regen_left -= 1;
        let before = self.health;
        self.health = (self.health + amount.max(0)).min(self.max_health);
        self.health - before
    }
}
