// Spawn point selection

use glam::Vec3;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use crate::engine::resources::Level;

/// Marker groups a level uses for spawn points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpawnGroup {
    Player,
    Enemy,
    Item,
}

impl SpawnGroup {
    /// Marker tag in level files
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Player => "PlayerSpawnPoint",
            Self::Enemy => "EnemySpawnPoint",
            Self::Item => "ItemSpawnPoint",
        }
    }
}

impl fmt::Display for SpawnGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Spawn positions collected once from a level
#[derive(Debug, Clone, Default)]
pub struct SpawnPoints {
    player: Vec<Vec3>,
    enemy: Vec<Vec3>,
    item: Vec<Vec3>,
}

impl SpawnPoints {
    pub fn from_level(level: &Level) -> Self {
        let points = Self {
            player: level.positions_in_group(SpawnGroup::Player.tag()),
            enemy: level.positions_in_group(SpawnGroup::Enemy.tag()),
            item: level.positions_in_group(SpawnGroup::Item.tag()),
        };
        log::debug!(
            "Spawn points: {} player, {} enemy, {} item",
            points.player.len(),
            points.enemy.len(),
            points.item.len()
        );
        points
    }

    pub fn points(&self, group: SpawnGroup) -> &[Vec3] {
        match group {
            SpawnGroup::Player => &self.player,
            SpawnGroup::Enemy => &self.enemy,
            SpawnGroup::Item => &self.item,
        }
    }

    /// Uniformly random point of `group`, `None` if the group is empty
    pub fn random<R: Rng + ?Sized>(&self, group: SpawnGroup, rng: &mut R) -> Option<Vec3> {
        self.points(group).choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn level() -> Level {
        Level::new("grid")
            .with_marker("PlayerSpawnPoint", Vec3::ZERO)
            .with_marker("EnemySpawnPoint", Vec3::X)
            .with_marker("EnemySpawnPoint", Vec3::Y)
            .with_marker("EnemySpawnPoint", Vec3::Z)
    }

    #[test]
    fn test_collects_by_tag() {
        let spawns = SpawnPoints::from_level(&level());
        assert_eq!(spawns.points(SpawnGroup::Player), &[Vec3::ZERO]);
        assert_eq!(spawns.points(SpawnGroup::Enemy).len(), 3);
        assert!(spawns.points(SpawnGroup::Item).is_empty());
    }

    #[test]
    fn test_random_stays_in_group() {
        let spawns = SpawnPoints::from_level(&level());
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let p = spawns.random(SpawnGroup::Enemy, &mut rng).unwrap();
            assert!(spawns.points(SpawnGroup::Enemy).contains(&p));
        }
    }

    #[test]
    fn test_random_covers_every_point() {
        let spawns = SpawnPoints::from_level(&level());
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let p = spawns.random(SpawnGroup::Enemy, &mut rng).unwrap();
            let i = spawns.points(SpawnGroup::Enemy).iter().position(|q| *q == p).unwrap();
            seen[i] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_empty_group_is_none() {
        let spawns = SpawnPoints::from_level(&level());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(spawns.random(SpawnGroup::Item, &mut rng).is_none());
    }
}
