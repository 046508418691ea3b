//! Enemy AI systems: the per-frame behavior tick and death cleanup.

use std::time::Duration;

use bevy::prelude::*;

use super::attack::STRIKE_DELAY_SECS;
use super::behavior::{BehaviorController, TickContext, TickReport};
use super::components::{DeathTimer, Enemy, GroundContact, NavAgent};
use crate::combat::{DeferredEffect, DeferredEffects, EnemyStrikeConfig};
use crate::core::{ground_position, set_ground_position, EnemyCue};
use crate::player::PlayerState;

/// Run every live enemy's behavior tick.
pub fn run_enemy_behavior(
    time: Res<Time>,
    player: Res<PlayerState>,
    strike: Res<EnemyStrikeConfig>,
    mut effects: ResMut<DeferredEffects>,
    mut enemy_query: Query<
        (
            Entity,
            &mut Transform,
            &mut BehaviorController,
            Option<&mut NavAgent>,
            Option<&GroundContact>,
        ),
        With<Enemy>,
    >,
    mut cue_events: EventWriter<EnemyCue>,
    mut report: Local<TickReport>,
) {
    let ctx = TickContext {
        dt: time.delta_secs(),
        player: &*player,
    };

    for (entity, mut transform, mut controller, nav, ground) in enemy_query.iter_mut() {
        report.clear();

        let mut position = ground_position(transform.translation);
        let start = position;
        controller.tick(
            &mut position,
            nav.map(Mut::into_inner),
            ground,
            &ctx,
            &mut report,
        );

        // Only touch the transform when it moved, keeps change detection quiet
        if position != start {
            set_ground_position(&mut transform, position);
        }

        if report.wants_strike() {
            effects.schedule(
                strike_delay(strike.delay),
                DeferredEffect::StrikePlayer {
                    damage: strike.damage,
                    source: entity,
                },
            );
        }

        for cue in report.cues.drain(..) {
            cue_events.send(EnemyCue { entity, cue });
        }
    }
}

/// Convert the configured strike delay, falling back to the default when it
/// cannot be represented.
pub fn strike_delay(secs: f32) -> Duration {
    Duration::try_from_secs_f32(secs.max(0.0)).unwrap_or_else(|e| {
        warn!(
            "Invalid strike delay {}: {}; using {}s",
            secs, e, STRIKE_DELAY_SECS
        );
        Duration::from_secs_f32(STRIKE_DELAY_SECS)
    })
}

/// Despawn enemies once the death grace delay has passed.
pub fn tick_death_grace(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &DeathTimer, Option<&mut BehaviorController>)>,
) {
    let now = time.elapsed();

    for (entity, death_timer, controller) in query.iter_mut() {
        if death_timer.is_due(now) {
            if let Some(mut controller) = controller {
                controller.finish_dying();
            }
            debug!("Despawning dead enemy {:?}", entity);
            commands.entity(entity).despawn_recursive();
        }
    }
}
