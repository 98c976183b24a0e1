// Actor lifecycle state machine

/// Represents the current lifecycle state of an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActorState {
    /// Taking part in the round
    #[default]
    Active,
    /// Frozen by a pause toggle
    Paused,
    /// Killed, waiting to be cleared from the arena
    Dead,
}

impl ActorState {
    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused)
    }

    pub fn is_alive(&self) -> bool {
        !matches!(self, Self::Dead)
    }
}

/// State machine that handles actor state transitions
#[derive(Debug, Default)]
pub struct ActorStateMachine {
    current_state: ActorState,
    previous_state: ActorState,
}

impl ActorStateMachine {
    pub fn new() -> Self {
        Self {
            current_state: ActorState::Active,
            previous_state: ActorState::Active,
        }
    }

    /// Get the current state
    pub fn state(&self) -> ActorState {
        self.current_state
    }

    /// Get the previous state
    pub fn previous_state(&self) -> ActorState {
        self.previous_state
    }

    /// Transition to a new state
    pub fn transition(&mut self, new_state: ActorState) {
        if self.current_state != new_state {
            self.previous_state = self.current_state;
            self.current_state = new_state;
        }
    }

    /// Flip between active and paused. Dead actors stay dead
    pub fn toggle_pause(&mut self) {
        match self.current_state {
            ActorState::Active => self.transition(ActorState::Paused),
            ActorState::Paused => self.transition(ActorState::Active),
            ActorState::Dead => {}
        }
    }

    pub fn die(&mut self) {
        self.transition(ActorState::Dead);
    }
}
