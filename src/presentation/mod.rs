//! Presentation module - animator parameters, facing, and hit markers.

mod components;
mod plugin;
mod profiles;
mod systems;
#[cfg(test)]
mod tests;

pub use components::*;
pub use plugin::PresentationPlugin;
pub use profiles::command_for;
pub use systems::sprite_flip;
