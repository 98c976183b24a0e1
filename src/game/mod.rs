// Gameplay: actors, items, the arena mode, and session state

pub mod actors;
pub mod arena;
pub mod career;
pub mod items;
pub mod session;
