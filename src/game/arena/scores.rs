// Kill tally per actor

use std::collections::HashMap;

use crate::game::actors::ActorId;

/// Kill counts keyed by actor id. Entries outlive their actors.
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    scores: HashMap<ActorId, u32>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a zeroed entry. Returns false if the id already had one
    pub fn register(&mut self, id: ActorId) -> bool {
        if self.scores.contains_key(&id) {
            return false;
        }
        self.scores.insert(id, 0);
        true
    }

    /// Credit one kill. Returns false for an id without an entry
    pub fn award(&mut self, id: ActorId) -> bool {
        match self.scores.get_mut(&id) {
            Some(score) => {
                *score += 1;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: ActorId) -> Option<u32> {
        self.scores.get(&id).copied()
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.scores.contains_key(&id)
    }

    /// True unless some other id strictly outscores `player`. Ties go to
    /// the player.
    pub fn player_won(&self, player: ActorId) -> bool {
        let player_score = self.get(player).unwrap_or(0);
        !self
            .scores
            .iter()
            .any(|(&id, &score)| id != player && score > player_score)
    }

    /// Highest scoring ids, ties included, sorted by id
    pub fn leaders(&self) -> Vec<ActorId> {
        let Some(best) = self.scores.values().copied().max() else {
            return Vec::new();
        };
        let mut ids: Vec<ActorId> = self
            .scores
            .iter()
            .filter(|(_, score)| **score == best)
            .map(|(&id, _)| id)
            .collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
