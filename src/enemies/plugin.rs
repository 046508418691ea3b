//! Enemy plugin - registers all enemy systems.

use bevy::prelude::*;

use super::ai;
use super::data::{load_enemy_definitions, EnemyRegistry};
use super::spawning::tick_spawners;
use crate::core::{GameState, TickSet};

/// Enemy plugin - handles definitions, spawning, behavior and death.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<EnemyRegistry>()
            // Definitions are in place before the game starts
            .add_systems(OnEnter(GameState::Loading), load_enemy_definitions)
            .add_systems(Update, ai::run_enemy_behavior.in_set(TickSet::Behavior))
            .add_systems(
                Update,
                (ai::tick_death_grace, tick_spawners)
                    .chain()
                    .in_set(TickSet::Lifecycle),
            );
    }
}
