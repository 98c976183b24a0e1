// Session context shared by game modes and menus

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine::events::{EventQueue, SessionEvent};
use crate::engine::resources::SceneLoader;
use crate::game::actors::Actor;
use crate::game::arena::{Arena, ArenaError, ArenaSettings, NOT_INITIALIZED};
use crate::game::career::Career;
use crate::ui::HudSource;

/// State that outlives a single round: settings, randomness, progression,
/// and the mode currently being played.
pub struct Session {
    /// Settings for the next arena; `None` falls back to defaults
    pub settings: Option<ArenaSettings>,
    pub career: Career,
    rng: StdRng,
    arena: Option<Arena>,
    events: EventQueue,
}

impl Session {
    pub fn new(settings: Option<ArenaSettings>, seed: u64) -> Self {
        Self {
            settings,
            career: Career::new(),
            rng: StdRng::seed_from_u64(seed),
            arena: None,
            events: EventQueue::new(),
        }
    }

    /// Load `terrain_path` and set up a new arena round, replacing any
    /// previous one.
    pub fn start_arena(
        &mut self,
        local: bool,
        terrain_path: &str,
        loader: &dyn SceneLoader,
    ) -> Result<&mut Arena, ArenaError> {
        let level = loader.load_level(terrain_path)?;
        let arena = Arena::init(self.settings.clone(), local, level, &mut self.rng)?;
        Ok(self.arena.insert(arena))
    }

    pub fn arena(&self) -> Option<&Arena> {
        self.arena.as_ref()
    }

    pub fn arena_mut(&mut self) -> Option<&mut Arena> {
        self.arena.as_mut()
    }

    /// Queue an event for the next `process` call
    pub fn queue_event(&mut self, event: SessionEvent) {
        self.events.push(event);
    }

    /// Deliver an event to the active mode right away
    pub fn handle_event(&mut self, event: &SessionEvent) {
        match self.arena.as_mut() {
            Some(arena) => arena.handle_event(event, &mut self.career),
            None => log::warn!("No active mode for {:?} event", event.kind),
        }
    }

    /// Per-frame entry point: deliver queued events, then run the clock
    pub fn process(&mut self, delta: f32) {
        for event in self.events.drain() {
            self.handle_event(&event);
        }

        if let Some(arena) = self.arena.as_mut() {
            arena.advance_clock(delta);
        }
    }

    /// Player 1, if a round is running and they are alive
    pub fn player(&self) -> Option<&Actor> {
        self.arena.as_ref().and_then(Arena::player)
    }

    pub fn objective_text(&self) -> String {
        match &self.arena {
            Some(arena) => arena.objective_text(),
            None => NOT_INITIALIZED.to_string(),
        }
    }
}

impl HudSource for Session {
    fn player(&self) -> Option<&Actor> {
        Session::player(self)
    }

    fn objective_text(&self) -> String {
        Session::objective_text(self)
    }
}
