//! Player plugin - shared player state and player-side bookkeeping.

use bevy::prelude::*;

use super::components::*;
use super::systems;

/// Player plugin - owns the shared `PlayerState` record.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        // Set up player systems
        systems::setup_player_systems(app);

        // Available before Startup so other plugins can read it immediately
        app.init_resource::<PlayerState>();
    }
}
