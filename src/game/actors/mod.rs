// Actor system
//
// This module contains everything related to arena combatants:
// - Actor data structure and management
// - Combat stats
// - Lifecycle state machine

pub mod actor;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use actor::{Actor, ActorData, ActorId, ActorManager, Brain};
