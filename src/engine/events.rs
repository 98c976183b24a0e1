// Session events dispatched by the host into the active game mode

use std::fmt;

/// Kinds of events a game mode reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// An actor died. Args: `[victim_path, killer_path]`, killer may be empty
    ActorDied,
    /// Toggle pause for everything in the mode
    Pause,
}

/// A typed event with a loosely typed string payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEvent {
    pub kind: EventKind,
    pub args: Vec<String>,
}

impl SessionEvent {
    pub fn new(kind: EventKind, args: Vec<String>) -> Self {
        Self { kind, args }
    }

    /// Death event for `victim`, optionally credited to `killer`
    pub fn actor_died(victim: &NodePath, killer: Option<&NodePath>) -> Self {
        let killer = killer.map(|k| k.as_str().to_string()).unwrap_or_default();
        Self::new(EventKind::ActorDied, vec![victim.as_str().to_string(), killer])
    }

    pub fn pause() -> Self {
        Self::new(EventKind::Pause, Vec::new())
    }

    /// Argument at `index`, `None` when missing or empty
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args
            .get(index)
            .map(String::as_str)
            .filter(|arg| !arg.is_empty())
    }
}

/// Slash separated reference to a node, e.g. `Arena/Bot_-2147483647`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePath(String);

impl NodePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Path of `name` directly under `parent`
    pub fn child_of(parent: &str, name: &str) -> Self {
        Self(format!("{parent}/{name}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment, the node's own name
    pub fn name(&self) -> &str {
        self.0
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// Events raised during a frame, drained once by the session
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<SessionEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, event: SessionEvent) {
        self.events.push(event);
    }

    /// Take every queued event in arrival order
    pub fn drain(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
