// Actor entity and management

use glam::Vec3;

use crate::core::WorldId;
use crate::engine::events::NodePath;
use crate::game::items::{Hotbar, Inventory, ItemKind};

use super::state::{ActorState, ActorStateMachine};
use super::stats::ActorStats;

/// Node every arena actor is parented under
pub const ARENA_NODE: &str = "Arena";

/// Unique identifier for an actor
pub type ActorId = WorldId;

/// What drives an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brain {
    /// The local human player
    Player1,
    /// Computer controlled
    Ai,
}

impl Brain {
    pub fn is_human(&self) -> bool {
        matches!(self, Self::Player1)
    }

    fn name_prefix(&self) -> &'static str {
        match self {
            Self::Player1 => "Player1",
            Self::Ai => "Bot",
        }
    }
}

/// Everything needed to build an actor
#[derive(Debug, Clone, Default)]
pub struct ActorData {
    pub id: ActorId,
    pub position: Vec3,
    pub stats: ActorStats,
    pub inventory: Inventory,
}

/// A combatant in the arena, human or AI
#[derive(Debug)]
pub struct Actor {
    /// Unique identifier
    pub id: ActorId,
    /// Node name, also used to resolve event paths
    pub name: String,
    /// Control source
    pub brain: Brain,
    /// World position
    pub position: Vec3,
    /// Combat stats
    pub stats: ActorStats,
    /// Carried items
    pub inventory: Inventory,
    /// Equipped slot
    pub hotbar: Hotbar,
    state_machine: ActorStateMachine,
}

impl Actor {
    /// Build an actor from spawn data
    pub fn factory(brain: Brain, data: ActorData) -> Self {
        Self {
            id: data.id,
            name: format!("{}_{}", brain.name_prefix(), data.id),
            brain,
            position: data.position,
            stats: data.stats,
            inventory: data.inventory,
            hotbar: Hotbar::new(),
            state_machine: ActorStateMachine::new(),
        }
    }

    /// Path other systems use to refer to this actor in events
    pub fn path(&self) -> NodePath {
        NodePath::child_of(ARENA_NODE, &self.name)
    }

    pub fn state(&self) -> ActorState {
        self.state_machine.state()
    }

    pub fn is_alive(&self) -> bool {
        self.state().is_alive()
    }

    pub fn is_paused(&self) -> bool {
        self.state().is_paused()
    }

    pub fn toggle_pause(&mut self) {
        self.state_machine.toggle_pause();
    }

    /// Apply damage; the actor dies when health reaches zero
    pub fn take_damage(&mut self, damage: i32) -> bool {
        let killed = self.stats.take_damage(damage);
        if killed {
            self.state_machine.die();
        }
        killed
    }

    pub fn die(&mut self) {
        self.state_machine.die();
    }

    /// Slot of a carried item
    pub fn index_of(&self, kind: ItemKind, name: &str) -> Option<usize> {
        self.inventory.index_of(kind, name)
    }

    /// Put an inventory slot in hand. Returns false for an empty slot
    pub fn equip_item(&mut self, index: usize) -> bool {
        if self.inventory.get(index).is_none() {
            return false;
        }
        self.hotbar.equip(index);
        true
    }

    /// Hotbar summary for the HUD
    pub fn hotbar_info(&self) -> String {
        self.hotbar.info(&self.inventory)
    }
}

/// Live actors of a round
#[derive(Debug, Default)]
pub struct ActorManager {
    actors: Vec<Actor>,
}

impl ActorManager {
    pub fn new() -> Self {
        Self { actors: Vec::new() }
    }

    /// Add an actor, returns its id
    pub fn add(&mut self, actor: Actor) -> ActorId {
        let id = actor.id;
        self.actors.push(actor);
        id
    }

    /// Get an actor by ID
    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    /// Get a mutable actor by ID
    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.id == id)
    }

    /// Resolve a node path to a live actor
    pub fn find_by_path(&self, path: &NodePath) -> Option<&Actor> {
        let name = path.name();
        self.actors.iter().find(|a| a.name == name)
    }

    /// The human controlled actor, if still alive
    pub fn player(&self) -> Option<&Actor> {
        self.actors.iter().find(|a| a.brain.is_human())
    }

    /// Get all actors
    pub fn all(&self) -> &[Actor] {
        &self.actors
    }

    /// Remove an actor by ID
    pub fn remove(&mut self, id: ActorId) -> Option<Actor> {
        let pos = self.actors.iter().position(|a| a.id == id)?;
        Some(self.actors.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Flip every actor's pause state
    pub fn toggle_pause(&mut self) {
        for actor in &mut self.actors {
            actor.toggle_pause();
        }
    }

    /// Force every actor into the given pause state
    pub fn set_pause(&mut self, paused: bool) {
        for actor in &mut self.actors {
            if actor.is_paused() != paused {
                actor.toggle_pause();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::items::Item;

    fn actor(brain: Brain, id: ActorId) -> Actor {
        Actor::factory(
            brain,
            ActorData {
                id,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_factory_names() {
        assert_eq!(actor(Brain::Ai, -5).name, "Bot_-5");
        assert_eq!(actor(Brain::Player1, 3).name, "Player1_3");
        assert_eq!(actor(Brain::Ai, 7).path().as_str(), "Arena/Bot_7");
    }

    #[test]
    fn test_find_by_path() {
        let mut manager = ActorManager::new();
        manager.add(actor(Brain::Player1, 1));
        manager.add(actor(Brain::Ai, 2));

        let found = manager.find_by_path(&NodePath::new("/root/Arena/Bot_2"));
        assert_eq!(found.map(|a| a.id), Some(2));
        assert!(manager.find_by_path(&NodePath::new("Arena/Bot_9")).is_none());
        assert_eq!(manager.player().map(|a| a.id), Some(1));
    }

    #[test]
    fn test_remove() {
        let mut manager = ActorManager::new();
        manager.add(actor(Brain::Ai, 1));
        assert!(manager.remove(1).is_some());
        assert!(manager.remove(1).is_none());
        assert!(manager.is_empty());
    }

    #[test]
    fn test_set_pause_is_idempotent() {
        let mut manager = ActorManager::new();
        manager.add(actor(Brain::Ai, 1));
        manager.add(actor(Brain::Ai, 2));
        manager.get_mut(2).unwrap().toggle_pause();

        manager.set_pause(true);
        assert!(manager.all().iter().all(Actor::is_paused));
        manager.set_pause(true);
        assert!(manager.all().iter().all(Actor::is_paused));

        manager.toggle_pause();
        assert!(manager.all().iter().all(|a| !a.is_paused()));
    }

    #[test]
    fn test_equip_item() {
        let mut a = actor(Brain::Player1, 1);
        assert!(!a.equip_item(0));

        a.inventory.receive_item(Item::factory(ItemKind::Pistol));
        let index = a.index_of(ItemKind::Pistol, "Pistol").unwrap();
        assert!(a.equip_item(index));
        assert_eq!(a.hotbar_info(), "Pistol\nAmmo: 0");
    }

    #[test]
    fn test_lethal_damage_kills() {
        let mut a = actor(Brain::Ai, 1);
        assert!(a.take_damage(150));
        assert!(!a.is_alive());
    }
}
