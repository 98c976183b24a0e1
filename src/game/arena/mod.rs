// Arena game mode
//
// A self-contained round: actors score points by killing each other until
// the last enemy falls, the player dies, or the clock is stopped.
//
// - `settings`: round configuration
// - `clock`: whole-second countdown
// - `scores`: kill tally and winner check
// - `spawn`: spawn point collection and random selection

pub mod clock;
pub mod scores;
pub mod settings;
pub mod spawn;

pub use clock::RoundClock;
pub use scores::ScoreTable;
pub use settings::ArenaSettings;
pub use spawn::{SpawnGroup, SpawnPoints};

use log::{debug, info, warn};
use rand::Rng;

use crate::core::{IdAllocator, WorldId};
use crate::engine::events::{EventKind, NodePath, SessionEvent};
use crate::engine::resources::{Level, ResourceError};
use crate::game::actors::{Actor, ActorData, ActorId, ActorManager, Brain};
use crate::game::career::Career;
use crate::game::items::{Item, ItemData, ItemKind};

/// Objective text before a player exists
pub const NOT_INITIALIZED: &str = "Player not initialized.";

/// Rounds of ammo in a starting kit
const KIT_AMMO: u32 = 100;

/// Arena errors
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("Level has no {0} markers")]
    NoSpawnPoints(SpawnGroup),

    #[error("Failed to load terrain: {0}")]
    Terrain(#[from] ResourceError),
}

/// What a death event did to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathOutcome {
    /// Payload was empty or the victim could not be found
    Ignored,
    /// The human player died; the encounter failed
    PlayerDied,
    /// An enemy died and enemies remain
    EnemyDied,
    /// The last enemy died; the encounter is complete
    LastEnemyDied,
}

/// Round controller
#[derive(Debug)]
pub struct Arena {
    local: bool,
    settings: ArenaSettings,
    terrain: Level,
    spawns: SpawnPoints,
    actors: ActorManager,
    items: Vec<Item>,
    ids: IdAllocator,
    scores: ScoreTable,
    clock: RoundClock,
    score_presented: bool,
    player_id: Option<ActorId>,
}

impl Arena {
    /// Set up a round on `terrain`: spawn points, player, bots, power-ups.
    /// The clock is left stopped.
    pub fn init<R: Rng + ?Sized>(
        settings: Option<ArenaSettings>,
        local: bool,
        terrain: Level,
        rng: &mut R,
    ) -> Result<Self, ArenaError> {
        let settings = settings.unwrap_or_else(|| {
            info!("Using default arena settings.");
            ArenaSettings::default()
        });

        let spawns = SpawnPoints::from_level(&terrain);
        let clock = RoundClock::new(settings.round_seconds());

        let mut arena = Self {
            local,
            settings,
            terrain,
            spawns,
            actors: ActorManager::new(),
            items: Vec::new(),
            ids: IdAllocator::new(),
            scores: ScoreTable::new(),
            clock,
            score_presented: false,
            player_id: None,
        };
        arena.local_init(rng)?;

        info!(
            "Arena '{}' ready: {} bots, {} items, {} round",
            arena.terrain.name,
            arena.settings.bots,
            arena.items.len(),
            arena.round_time_text()
        );
        Ok(arena)
    }

    fn local_init<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ArenaError> {
        if self.settings.use_powerups {
            self.spawn_item(ItemKind::AmmoPack, 10, rng)?;
            self.spawn_item(ItemKind::HealthPack, 1, rng)?;
        }

        self.init_actor(Brain::Player1, rng)?;
        for _ in 0..self.settings.bots {
            self.init_actor(Brain::Ai, rng)?;
        }

        Ok(())
    }

    /// Take a fresh id, open its score entry, then spawn the actor
    fn init_actor<R: Rng + ?Sized>(
        &mut self,
        brain: Brain,
        rng: &mut R,
    ) -> Result<ActorId, ArenaError> {
        let id = self.ids.next_id();
        self.scores.register(id);
        self.spawn_actor(brain, id, rng)?;

        if brain.is_human() {
            self.player_id = Some(id);
        }
        Ok(id)
    }

    /// Place an actor at a random spawn point of its side. `id` must come
    /// from `init_actor`
    fn spawn_actor<R: Rng + ?Sized>(
        &mut self,
        brain: Brain,
        id: ActorId,
        rng: &mut R,
    ) -> Result<ActorId, ArenaError> {
        let group = if brain.is_human() {
            SpawnGroup::Player
        } else {
            SpawnGroup::Enemy
        };
        let position = self
            .spawns
            .random(group, rng)
            .ok_or(ArenaError::NoSpawnPoints(group))?;

        let mut data = ActorData {
            id,
            position,
            ..Default::default()
        };
        if self.settings.use_kits {
            data.inventory.receive_item(Item::factory(ItemKind::Rifle));
            if let Some(ammo) = Item::bulk_factory(ItemKind::Ammo, KIT_AMMO).into_iter().next() {
                data.inventory.receive_item(ammo);
            }
        }

        let actor = Actor::factory(brain, data);
        debug!("Spawned {} at {}", actor.name, actor.position);
        self.actors.add(actor);

        if self.settings.use_kits {
            self.equip_actor(id, ItemKind::Rifle, "Rifle");
        }

        Ok(id)
    }

    /// Drop `quantity` of `kind` at a random item spawn point
    pub fn spawn_item<R: Rng + ?Sized>(
        &mut self,
        kind: ItemKind,
        quantity: u32,
        rng: &mut R,
    ) -> Result<WorldId, ArenaError> {
        let position = self
            .spawns
            .random(SpawnGroup::Item, rng)
            .ok_or(ArenaError::NoSpawnPoints(SpawnGroup::Item))?;

        let (id, name) = self.ids.next_name("Item");
        let mut item = Item::from_data(ItemData::new(kind, quantity));
        item.position = position;
        debug!("Spawned {} ({}) at {}", name, item.data, position);
        item.placement = Some((id, name));
        self.items.push(item);

        Ok(id)
    }

    /// Equip an actor with a carried item. Returns false if it isn't carried
    pub fn equip_actor(&mut self, id: ActorId, kind: ItemKind, name: &str) -> bool {
        let Some(actor) = self.actors.get_mut(id) else {
            warn!("No actor {} to equip", id);
            return false;
        };

        match actor.index_of(kind, name) {
            Some(index) => {
                debug!("Equipping {} with {}", actor.name, kind);
                actor.equip_item(index)
            }
            None => {
                warn!("Actor {} doesn't have {}", actor.name, name);
                false
            }
        }
    }

    /// Advance the round clock by a frame
    pub fn advance_clock(&mut self, delta: f32) {
        self.clock.advance(delta);
    }

    /// Start the countdown
    pub fn start_round(&mut self) {
        info!("Round started: {}", self.round_time_text());
        self.clock.start();
    }

    /// Stop the countdown and switch the objective text to the result
    pub fn end_round(&mut self) {
        self.clock.stop();
        self.score_presented = true;
        info!(
            "Round over: {}, top scorers {:?}",
            if self.player_won() { "victory" } else { "defeat" },
            self.scores.leaders()
        );
    }

    /// Dispatch a session event
    pub fn handle_event(&mut self, event: &SessionEvent, career: &mut Career) {
        match event.kind {
            EventKind::ActorDied => {
                self.handle_actor_death(event, career);
            }
            EventKind::Pause => self.toggle_pause(),
        }
    }

    /// Resolve victim (arg 0) and killer (arg 1), clear the victim, and
    /// score or end the encounter.
    ///
    /// The encounter completes when the player is the last actor standing.
    /// A single surviving bot does not count, so a failed encounter is never
    /// followed by a completion.
    pub fn handle_actor_death(&mut self, event: &SessionEvent, career: &mut Career) -> DeathOutcome {
        let Some(victim_path) = event.arg(0).map(NodePath::new) else {
            return DeathOutcome::Ignored;
        };
        let Some((victim, brain)) = self
            .actors
            .find_by_path(&victim_path)
            .map(|a| (a.id, a.brain))
        else {
            warn!("Dead actor {} not found", victim_path);
            return DeathOutcome::Ignored;
        };

        if brain.is_human() {
            self.clear_actor(victim);
            career.fail_encounter();
            return DeathOutcome::PlayerDied;
        }

        // Resolve the killer while the victim is still around, it may be
        // credited with its own death
        let killer = self.resolve_killer(event);
        self.clear_actor(victim);

        if let Some(killer) = killer {
            if !self.scores.award(killer) {
                warn!("Killer {} has no score entry", killer);
            }
        }

        // Only the player surviving alone completes; a lone bot left after
        // the player died never does
        if self.actors.len() == 1 && self.actors.player().is_some() {
            career.complete_encounter();
            return DeathOutcome::LastEnemyDied;
        }

        DeathOutcome::EnemyDied
    }

    fn resolve_killer(&self, event: &SessionEvent) -> Option<ActorId> {
        let Some(path) = event.arg(1).map(NodePath::new) else {
            warn!("No killer specified");
            return None;
        };

        let killer = self.actors.find_by_path(&path).map(|a| a.id);
        if killer.is_none() {
            warn!("Killer {} not found", path);
        }
        killer
    }

    fn clear_actor(&mut self, id: ActorId) {
        if let Some(mut actor) = self.actors.remove(id) {
            actor.die();
            debug!("Cleared {}", actor.name);
        }
    }

    /// Force every actor's pause state
    pub fn set_pause(&mut self, paused: bool) {
        self.actors.set_pause(paused);
    }

    /// Flip every actor's pause state
    pub fn toggle_pause(&mut self) {
        self.actors.toggle_pause();
    }

    /// True unless another actor strictly outscored the player
    pub fn player_won(&self) -> bool {
        match self.player_id {
            Some(id) => self.scores.player_won(id),
            None => false,
        }
    }

    /// Bots the player still has to take down
    pub fn enemies_remaining(&self) -> u32 {
        let score = self
            .player_id
            .and_then(|id| self.scores.get(id))
            .unwrap_or(0);
        self.settings.bots.saturating_sub(score)
    }

    pub fn objective_text(&self) -> String {
        let Some(player) = self.player_id else {
            return NOT_INITIALIZED.to_string();
        };

        if self.score_presented {
            let text = if self.player_won() { "Victory!" } else { "Defeat!" };
            return text.to_string();
        }

        let score = self.scores.get(player).unwrap_or(0);
        let remaining = self.enemies_remaining();
        let noun = if remaining == 1 { "enemy" } else { "enemies" };
        format!("Arena\nScore: {score}\n{remaining} {noun} left.")
    }

    pub fn round_time_text(&self) -> String {
        self.clock.time_text()
    }

    pub fn time_remaining(&self) -> f32 {
        self.clock.remaining()
    }

    pub fn clock(&self) -> &RoundClock {
        &self.clock
    }

    pub fn score_presented(&self) -> bool {
        self.score_presented
    }

    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    pub fn actors(&self) -> &ActorManager {
        &self.actors
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn player_id(&self) -> Option<ActorId> {
        self.player_id
    }

    /// The human player, while alive
    pub fn player(&self) -> Option<&Actor> {
        self.actors.player()
    }

    pub fn settings(&self) -> &ArenaSettings {
        &self.settings
    }

    pub fn is_local(&self) -> bool {
        self.local
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ids::FIRST_ID;
    use crate::game::career::EncounterOutcome;
    use glam::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn level() -> Level {
        Level::new("test_pit")
            .with_marker("PlayerSpawnPoint", Vec3::new(0.0, 1.0, 0.0))
            .with_marker("EnemySpawnPoint", Vec3::new(10.0, 1.0, 0.0))
            .with_marker("EnemySpawnPoint", Vec3::new(-10.0, 1.0, 0.0))
            .with_marker("ItemSpawnPoint", Vec3::new(0.0, 0.0, 5.0))
    }

    fn settings(bots: u32) -> ArenaSettings {
        ArenaSettings {
            duration: 1.0,
            bots,
            use_powerups: true,
            use_kits: true,
        }
    }

    fn arena(bots: u32) -> Arena {
        let mut rng = StdRng::seed_from_u64(42);
        Arena::init(Some(settings(bots)), true, level(), &mut rng).unwrap()
    }

    fn bot_paths(arena: &Arena) -> Vec<NodePath> {
        arena
            .actors()
            .all()
            .iter()
            .filter(|a| !a.brain.is_human())
            .map(Actor::path)
            .collect()
    }

    fn player_path(arena: &Arena) -> NodePath {
        arena.player().unwrap().path()
    }

    #[test]
    fn test_init_spawns_player_bots_and_items() {
        let arena = arena(3);
        assert_eq!(arena.actors().len(), 4);
        assert_eq!(arena.items().len(), 2);
        assert!(arena.player().is_some());
        assert!(!arena.clock().is_active());
        assert_eq!(arena.time_remaining(), 60.0);
        assert!(arena.is_local());
    }

    #[test]
    fn test_every_actor_has_a_score_entry() {
        let arena = arena(5);
        for actor in arena.actors().all() {
            assert_eq!(arena.scores().get(actor.id), Some(0));
        }
    }

    #[test]
    fn test_late_actor_gets_fresh_id_and_score_entry() {
        let mut arena = arena(2);
        let mut career = Career::new();
        let mut rng = StdRng::seed_from_u64(7);
        let known: HashSet<ActorId> = arena.actors().all().iter().map(|a| a.id).collect();

        let id = arena.init_actor(Brain::Ai, &mut rng).unwrap();
        assert!(!known.contains(&id));
        assert_eq!(arena.scores().get(id), Some(0));

        // Kills by the new actor are credited
        let killer = arena.actors().get(id).unwrap().path();
        let victim = bot_paths(&arena)[0].clone();
        arena.handle_actor_death(&SessionEvent::actor_died(&victim, Some(&killer)), &mut career);
        assert_eq!(arena.scores().get(id), Some(1));
    }

    #[test]
    fn test_ids_unique_across_actors_and_items() {
        let arena = arena(6);
        let mut ids = HashSet::new();
        for actor in arena.actors().all() {
            assert!(ids.insert(actor.id));
        }
        for item in arena.items() {
            let (id, name) = item.placement.as_ref().unwrap();
            assert!(ids.insert(*id));
            assert_eq!(name, &format!("Item_{id}"));
        }
        // Items are placed first, so they take the lowest ids
        assert!(ids.contains(&FIRST_ID));
    }

    #[test]
    fn test_spawn_positions_come_from_groups() {
        let arena = arena(4);
        let level = level();
        let enemy = level.positions_in_group("EnemySpawnPoint");
        for actor in arena.actors().all() {
            if actor.brain.is_human() {
                assert_eq!(actor.position, Vec3::new(0.0, 1.0, 0.0));
            } else {
                assert!(enemy.contains(&actor.position));
            }
        }
    }

    #[test]
    fn test_kits_equip_rifle() {
        let arena = arena(1);
        let player = arena.player().unwrap();
        assert_eq!(player.hotbar_info(), "Rifle\nAmmo: 100");
    }

    #[test]
    fn test_no_kits_no_items() {
        let mut rng = StdRng::seed_from_u64(1);
        let cfg = ArenaSettings {
            use_kits: false,
            use_powerups: false,
            ..settings(2)
        };
        let arena = Arena::init(Some(cfg), false, level(), &mut rng).unwrap();
        assert!(arena.items().is_empty());
        assert!(arena.player().unwrap().inventory.is_empty());
        assert_eq!(arena.player_id(), Some(FIRST_ID));
    }

    #[test]
    fn test_default_settings_when_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let arena = Arena::init(None, true, level(), &mut rng).unwrap();
        assert_eq!(arena.settings(), &ArenaSettings::default());
    }

    #[test]
    fn test_missing_spawn_group_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let bare = Level::new("bare").with_marker("PlayerSpawnPoint", Vec3::ZERO);
        let err = Arena::init(Some(settings(1)), true, bare, &mut rng).unwrap_err();
        // Power-ups spawn first and need item markers
        assert!(matches!(err, ArenaError::NoSpawnPoints(SpawnGroup::Item)));
    }

    #[test]
    fn test_clock_only_runs_after_start() {
        let mut arena = arena(1);
        arena.advance_clock(5.0);
        assert_eq!(arena.time_remaining(), 60.0);

        arena.start_round();
        arena.advance_clock(2.5);
        assert_eq!(arena.time_remaining(), 58.0);
        assert_eq!(arena.round_time_text(), "00:58");
    }

    #[test]
    fn test_kill_awards_killer() {
        let mut arena = arena(3);
        let mut career = Career::new();
        let bots = bot_paths(&arena);
        let player = player_path(&arena);

        let event = SessionEvent::actor_died(&bots[0], Some(&player));
        let outcome = arena.handle_actor_death(&event, &mut career);

        assert_eq!(outcome, DeathOutcome::EnemyDied);
        assert_eq!(arena.scores().get(arena.player_id().unwrap()), Some(1));
        assert_eq!(arena.actors().len(), 3);
        assert!(career.last_outcome().is_none());
        assert_eq!(arena.objective_text(), "Arena\nScore: 1\n2 enemies left.");
    }

    #[test]
    fn test_score_entry_survives_death() {
        let mut arena = arena(2);
        let mut career = Career::new();
        let bots = bot_paths(&arena);
        let dead_id = arena.actors().find_by_path(&bots[0]).unwrap().id;

        arena.handle_actor_death(&SessionEvent::actor_died(&bots[0], Some(&bots[1])), &mut career);

        assert!(arena.actors().get(dead_id).is_none());
        assert_eq!(arena.scores().get(dead_id), Some(0));
        let killer_id = arena.actors().find_by_path(&bots[1]).unwrap().id;
        assert_eq!(arena.scores().get(killer_id), Some(1));
    }

    #[test]
    fn test_missing_killer_scores_nothing() {
        let mut arena = arena(2);
        let mut career = Career::new();
        let bots = bot_paths(&arena);

        let outcome = arena.handle_actor_death(&SessionEvent::actor_died(&bots[0], None), &mut career);
        assert_eq!(outcome, DeathOutcome::EnemyDied);

        let ghost = NodePath::new("Arena/Bot_12345");
        arena.handle_actor_death(&SessionEvent::actor_died(&bots[1], Some(&ghost)), &mut career);

        for actor in arena.actors().all() {
            assert_eq!(arena.scores().get(actor.id), Some(0));
        }
    }

    #[test]
    fn test_last_enemy_completes_encounter() {
        let mut arena = arena(2);
        let mut career = Career::new();
        let bots = bot_paths(&arena);
        let player = player_path(&arena);

        arena.handle_actor_death(&SessionEvent::actor_died(&bots[0], Some(&player)), &mut career);
        assert_eq!(arena.objective_text(), "Arena\nScore: 1\n1 enemy left.");

        let outcome =
            arena.handle_actor_death(&SessionEvent::actor_died(&bots[1], Some(&player)), &mut career);
        assert_eq!(outcome, DeathOutcome::LastEnemyDied);
        assert_eq!(career.last_outcome(), Some(EncounterOutcome::Completed));
        assert_eq!(arena.objective_text(), "Arena\nScore: 2\n0 enemies left.");
    }

    #[test]
    fn test_player_death_fails_encounter() {
        let mut arena = arena(2);
        let mut career = Career::new();
        let bots = bot_paths(&arena);
        let player = player_path(&arena);

        let outcome =
            arena.handle_actor_death(&SessionEvent::actor_died(&player, Some(&bots[0])), &mut career);

        assert_eq!(outcome, DeathOutcome::PlayerDied);
        assert_eq!(career.outcomes(), &[EncounterOutcome::Failed]);
        assert!(arena.player().is_none());
        // No points for killing the player
        let bot_id = arena.actors().find_by_path(&bots[0]).unwrap().id;
        assert_eq!(arena.scores().get(bot_id), Some(0));

        // Bots dying afterwards never complete the encounter
        arena.handle_actor_death(&SessionEvent::actor_died(&bots[1], None), &mut career);
        assert_eq!(career.outcomes().len(), 1);
    }

    #[test]
    fn test_malformed_death_payloads_are_ignored() {
        let mut arena = arena(1);
        let mut career = Career::new();

        let empty = SessionEvent::new(EventKind::ActorDied, Vec::new());
        let blank = SessionEvent::new(EventKind::ActorDied, vec![String::new()]);
        let unknown = SessionEvent::new(EventKind::ActorDied, vec!["Arena/Nobody".into()]);

        for event in [empty, blank, unknown] {
            assert_eq!(arena.handle_actor_death(&event, &mut career), DeathOutcome::Ignored);
        }
        assert_eq!(arena.actors().len(), 2);
        assert!(career.outcomes().is_empty());
    }

    #[test]
    fn test_pause_event_toggles_actors() {
        let mut arena = arena(2);
        let mut career = Career::new();

        arena.handle_event(&SessionEvent::pause(), &mut career);
        assert!(arena.actors().all().iter().all(Actor::is_paused));

        arena.set_pause(false);
        assert!(arena.actors().all().iter().all(|a| !a.is_paused()));
    }

    #[test]
    fn test_objective_text_after_presentation() {
        let mut arena = arena(2);
        let mut career = Career::new();
        let bots = bot_paths(&arena);

        // Bot 1 kills bot 0 and leads the table
        arena.handle_actor_death(&SessionEvent::actor_died(&bots[0], Some(&bots[1])), &mut career);
        arena.end_round();
        assert!(arena.score_presented());
        assert!(!arena.clock().is_active());
        assert_eq!(arena.objective_text(), "Defeat!");
    }

    #[test]
    fn test_tie_is_victory() {
        let mut arena = arena(0);
        arena.end_round();
        assert!(arena.player_won());
        assert_eq!(arena.objective_text(), "Victory!");
    }

    #[test]
    fn test_equip_missing_item() {
        let mut arena = arena(1);
        let id = arena.player_id().unwrap();
        assert!(!arena.equip_actor(id, ItemKind::Shotgun, "Shotgun"));
        assert!(!arena.equip_actor(999, ItemKind::Rifle, "Rifle"));
    }
}
