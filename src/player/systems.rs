//! Player bookkeeping systems: shared-state sync, regeneration, game over.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::*;
use crate::core::{ground_position, GameState, TickSet};
use crate::presentation::{AnimRig, Animator};

/// Set up player systems.
pub fn setup_player_systems(app: &mut App) {
    app
        .init_resource::<Difficulty>()
        .init_resource::<PlayerRegen>()
        .add_systems(Startup, init_player_state)
        .add_systems(
            Update,
            (sync_player_position, regenerate_player_health).in_set(TickSet::Sense),
        )
        .add_systems(Update, check_player_down.in_set(TickSet::Lifecycle));
}

/// Build the shared player record from the chosen difficulty.
fn init_player_state(mut commands: Commands, difficulty: Res<Difficulty>) {
    let state = PlayerState::for_difficulty(*difficulty);
    info!(
        "Player health set to {} for {:?} difficulty",
        state.max_health(),
        *difficulty
    );
    commands.insert_resource(state);
}

/// Copy the player's ground position into the shared record.
pub fn sync_player_position(
    player_query: Query<&Transform, With<Player>>,
    mut player: ResMut<PlayerState>,
) {
    let Ok(transform) = player_query.get_single() else {
        return;
    };
    player.position = ground_position(transform.translation);
}

/// Regain health over time while injured.
pub fn regenerate_player_health(
    time: Res<Time>,
    mut regen: ResMut<PlayerRegen>,
    mut player: ResMut<PlayerState>,
) {
    if !player.is_injured() || player.is_down() {
        regen.timer.reset();
        return;
    }

    regen.timer.tick(time.delta());
    if regen.timer.just_finished() {
        let healed = player.heal(regen.amount);
        debug!("Player regenerated {} health ({})", healed, player.health());
    }
}

/// Leave gameplay once the player has no health left.
fn check_player_down(player: Res<PlayerState>, mut next_state: ResMut<NextState<GameState>>) {
    if player.is_down() {
        info!("Player died! Transitioning to Game Over...");
        next_state.set(GameState::GameOver);
    }
}

/// Spawn the player body. Movement and input belong to the player-control
/// subsystem; this only provides the entity enemies track.
pub fn spawn_player(commands: &mut Commands, position: Vec3) -> Entity {
    commands
        .spawn((
            Player,
            Name::new("Player"),
            Animator::new(AnimRig::HeroKnight),
            Transform::from_translation(position),
            Collider::capsule_y(0.5, 0.3),
            RigidBody::KinematicPositionBased,
        ))
        .id()
}
