//! Skirmish AI - per-frame behavior controllers for hostile combat entities.
//!
//! Enemies patrol, chase, swing, recoil from hits and die. Three movement
//! variants (direct chase, waypoint patrol, chase delegated to a movement
//! backend) share one controller.
//!
//! # Architecture
//!
//! The crate is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, per-frame ordering
//! - **Player**: The shared player record enemies read and strike
//! - **Combat**: Player attack query, damage, deferred strikes
//! - **Enemies**: Definitions, behavior tick, spawning, death
//! - **Presentation**: Cue to animator mapping, facing, hit markers

pub mod combat;
pub mod core;
pub mod enemies;
pub mod player;
pub mod presentation;

use bevy::prelude::*;

/// Main plugin that adds all sub-plugins.
///
/// Includes the straight-line movement backend; add the sub-plugins
/// individually to plug in a different one.
pub struct SkirmishPlugin;

impl Plugin for SkirmishPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Shared player record
            .add_plugins(player::PlayerPlugin)

            // Combat systems
            .add_plugins(combat::CombatPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)
            .add_plugins(enemies::StraightLineNavPlugin)

            // Animator and marker systems
            .add_plugins(presentation::PresentationPlugin);
    }
}
