//! Combat module - player attack query, damage, and deferred strikes.

mod components;
mod plugin;
mod scheduler;
mod systems;

pub use components::*;
pub use plugin::CombatPlugin;
pub use scheduler::{DeferredEffect, DeferredEffects};
pub use systems::{
    advance_deferred_clock, apply_damage_to_enemies, resolve_strike, run_deferred_effects,
};
