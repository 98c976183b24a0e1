// Engine modules: frame timing, events, resources

pub mod events;
pub mod game_loop;
pub mod resources;
