//! Core game module - states and global events.
//!
//! This module provides the foundation that all other game systems build upon.

mod events;
mod ground;
mod plugin;
mod sets;
mod states;

pub use events::*;
pub use ground::{ground_position, set_ground_position};
pub use plugin::CorePlugin;
pub use sets::TickSet;
pub use states::*;
