// Core utilities shared by engine and game code

pub mod ids;

pub use ids::{IdAllocator, WorldId};
