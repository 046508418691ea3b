//! Core plugin that sets up game states and global events.

use bevy::prelude::*;

use super::events::*;
use super::sets::TickSet;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame, GameOver)
/// - Global events (DamageEvent, DeathEvent, EnemyCue, ...)
/// - The per-frame `TickSet` ordering
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<DamageEvent>()
            .add_event::<DeathEvent>()
            .add_event::<EnemyCue>()
            .add_event::<PlayerAttackEvent>()
            .add_event::<PlayerHitEvent>()
            .add_event::<HitEffectEvent>()

            // Frame ordering
            .configure_sets(
                Update,
                (
                    TickSet::Sense,
                    TickSet::Navigation,
                    TickSet::Behavior,
                    TickSet::PlayerAttack,
                    TickSet::Damage,
                    TickSet::Deferred,
                    TickSet::Lifecycle,
                    TickSet::Presentation,
                )
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )

            // Data loading is synchronous, so leave Loading on the next frame
            .add_systems(OnEnter(GameState::Loading), transition_to_in_game);
    }
}

/// Transition from Loading to InGame once definitions are in place.
fn transition_to_in_game(mut next_state: ResMut<NextState<GameState>>) {
    info!("Loading complete, entering game");
    next_state.set(GameState::InGame);
}
