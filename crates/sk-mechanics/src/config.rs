//! Tuning knobs for the boss fight.

/// Configuration for a combat session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatConfig {
    /// SKOOLACH's starting and maximum health.
    pub boss_max_health: i32,
    /// Ceiling for player healing.
    pub player_max_health: i32,
    /// AI components needed before the fight may start.
    pub min_components: usize,
    /// Damage spread in percent: 10 means 90% to 110% of the base value.
    pub variance_percent: u32,
    /// How many times the boss may regenerate.
    pub regen_uses: u32,
    /// Health restored by one regeneration.
    pub regen_amount: i32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            boss_max_health: 150,
            player_max_health: 100,
            min_components: 3,
            variance_percent: 10,
            regen_uses: 2,
            regen_amount: 20,
        }
    }
}

impl CombatConfig {
    /// Set the boss's maximum health (at least 1).
    pub fn with_boss_health(mut self, health: i32) -> Self {
        self.boss_max_health = health.max(1);
        self
    }

    /// Set the player's healing ceiling (at least 1).
    pub fn with_player_max_health(mut self, health: i32) -> Self {
        self.player_max_health = health.max(1);
        self
    }

    /// Set the number of components needed to start the fight.
    pub fn with_min_components(mut self, count: usize) -> Self {
        self.min_components = count;
        self
    }

    /// Set the damage spread (clamped to 0-100 percent).
    pub fn with_variance(mut self, percent: u32) -> Self {
        self.variance_percent = percent.min(100);
        self
    }

    /// Set how often and how much the boss can regenerate.
    pub fn with_regen(mut self, uses: u32, amount: i32) -> Self {
        self.regen_uses = uses;
        self.regen_amount = amount.max(0);
        self
    }
}
