//! Player module - the shared player record enemies read and strike.

mod components;
mod plugin;
mod systems;

pub use components::*;
pub use plugin::PlayerPlugin;
pub use systems::spawn_player;
