use sk_core::DEFAULT_CAPACITY;
use sk_mechanics::CombatConfig;

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// RNG seed for combat rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// How many items the player can carry.
    pub inventory_capacity: usize,
    /// Health at the start of the game.
    pub starting_health: i32,
    /// Boss fight tuning.
    pub combat: CombatConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            inventory_capacity: DEFAULT_CAPACITY,
            starting_health: 100,
            combat: CombatConfig::default(),
        }
    }
}

impl GameConfig {
    /// Use a fixed seed so combat is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the inventory capacity (at least 1).
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.inventory_capacity = capacity.max(1);
        self
    }

    /// Set the starting health.
    pub fn with_starting_health(mut self, health: i32) -> Self {
        self.starting_health = health;
        self
    }

    /// Replace the combat tuning.
    pub fn with_combat(mut self, combat: CombatConfig) -> Self {
        self.combat = combat;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.inventory_capacity, 10);
        assert_eq!(config.starting_health, 100);
    }

    #[test]
    fn builder_methods() {
        let config = GameConfig::default()
            .with_seed(42)
            .with_capacity(0)
            .with_combat(CombatConfig::default().with_boss_health(50));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.inventory_capacity, 1);
        assert_eq!(config.combat.boss_max_health, 50);
    }
}
