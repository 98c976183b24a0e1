// Actor stats - every combatant starts from the same baseline
// Differentiation comes from loadout, not base stats

/// Combat stats of an actor
#[derive(Debug, Clone, PartialEq)]
pub struct ActorStats {
    /// Current health points
    pub health: i32,
    /// Maximum health points
    pub health_max: i32,
    /// Damage absorbed before health is touched
    pub block: i32,
    /// Current stamina (shown as energy)
    pub stamina: i32,
    /// Maximum stamina
    pub stamina_max: i32,
}

/// The baseline every actor spawns with
pub const BASE_STATS: ActorStats = ActorStats {
    health: 100,
    health_max: 100,
    block: 0,
    stamina: 100,
    stamina_max: 100,
};

impl Default for ActorStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl ActorStats {
    /// Get the standard actor stats (same for all actors)
    pub fn standard() -> Self {
        BASE_STATS
    }

    /// Look a stat up by its display key
    pub fn get_stat(&self, key: &str) -> Option<i32> {
        match key {
            "health" => Some(self.health),
            "healthmax" => Some(self.health_max),
            "block" => Some(self.block),
            "stamina" => Some(self.stamina),
            "staminamax" => Some(self.stamina_max),
            _ => None,
        }
    }

    /// Apply damage, block first. Returns true when health hits zero
    pub fn take_damage(&mut self, damage: i32) -> bool {
        let absorbed = damage.min(self.block).max(0);
        self.block -= absorbed;
        self.health = (self.health - (damage - absorbed)).max(0);
        self.health == 0
    }
}
