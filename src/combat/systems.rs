//! Combat systems - player attack query, damage application, deferred strikes.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::*;
use super::scheduler::{DeferredEffect, DeferredEffects};
use crate::core::{
    DamageEvent, DeathEvent, EnemyCue, HitEffectEvent, PlayerAttackEvent, PlayerHitEvent, TickSet,
};
use crate::enemies::{BehaviorController, DamageOutcome, DeathTimer, Enemy, NavAgent};
use crate::player::{PlayerState, StrikeOutcome};

/// Configure combat systems.
pub fn setup_combat_systems(app: &mut App) {
    app
        // Resources
        .init_resource::<PlayerAttackConfig>()
        .init_resource::<EnemyStrikeConfig>()
        .init_resource::<DeferredEffects>()

        .add_systems(Update, advance_deferred_clock.in_set(TickSet::Sense))
        .add_systems(Update, resolve_player_attacks.in_set(TickSet::PlayerAttack))
        .add_systems(Update, apply_damage_to_enemies.in_set(TickSet::Damage))
        .add_systems(Update, run_deferred_effects.in_set(TickSet::Deferred));
}

/// Advance the scheduler clock by this frame's elapsed time.
pub fn advance_deferred_clock(time: Res<Time>, mut effects: ResMut<DeferredEffects>) {
    effects.advance(time.delta());
}

/// Turn player swings into damage events for every enemy in the circle.
pub fn resolve_player_attacks(
    mut attack_events: EventReader<PlayerAttackEvent>,
    config: Res<PlayerAttackConfig>,
    rapier_context: Query<&RapierContext>,
    enemy_query: Query<(), With<Enemy>>,
    mut damage_events: EventWriter<DamageEvent>,
) {
    let Ok(context) = rapier_context.get_single() else {
        // No physics world, nothing can be hit
        attack_events.clear();
        return;
    };

    let shape = Collider::ball(config.radius);

    for attack in attack_events.read() {
        context.intersections_with_shape(
            attack.origin,
            Quat::IDENTITY,
            &shape,
            QueryFilter::default().exclude_collider(attack.attacker),
            |hit_entity| {
                // Only damage enemies
                if enemy_query.contains(hit_entity) {
                    damage_events.send(DamageEvent {
                        target: hit_entity,
                        source: Some(attack.attacker),
                        amount: config.damage,
                    });
                }
                true // Continue checking other entities
            },
        );
    }
}

/// Apply damage events through each enemy's health controller.
pub fn apply_damage_to_enemies(
    mut commands: Commands,
    time: Res<Time>,
    mut damage_events: EventReader<DamageEvent>,
    mut enemy_query: Query<
        (&Transform, &mut BehaviorController, Option<&mut NavAgent>),
        With<Enemy>,
    >,
    mut cue_events: EventWriter<EnemyCue>,
    mut hit_effects: EventWriter<HitEffectEvent>,
    mut death_events: EventWriter<DeathEvent>,
) {
    let mut cues = Vec::new();

    for event in damage_events.read() {
        let Ok((transform, mut controller, nav)) = enemy_query.get_mut(event.target) else {
            continue;
        };

        let outcome = controller.apply_damage(event.amount, &mut cues);
        for cue in cues.drain(..) {
            cue_events.send(EnemyCue {
                entity: event.target,
                cue,
            });
        }

        match outcome {
            DamageOutcome::Ignored => {}
            DamageOutcome::Hurt { remaining } => {
                hit_effects.send(HitEffectEvent {
                    position: transform.translation,
                });
                debug!("Enemy {:?} hit, {} health left", event.target, remaining);
            }
            DamageOutcome::Killed => {
                hit_effects.send(HitEffectEvent {
                    position: transform.translation,
                });
                if let Some(mut agent) = nav {
                    agent.halt();
                }

                // Collision goes now; the body stays for the grace delay
                commands
                    .entity(event.target)
                    .remove::<Collider>()
                    .insert(DeathTimer::starting_at(time.elapsed()));

                death_events.send(DeathEvent {
                    entity: event.target,
                    killed_by: event.source,
                });
                info!("Enemy {:?} died", event.target);
            }
        }
    }
}

/// Run every deferred effect that is due.
pub fn run_deferred_effects(
    mut effects: ResMut<DeferredEffects>,
    mut player: ResMut<PlayerState>,
    mut hit_events: EventWriter<PlayerHitEvent>,
) {
    while let Some(effect) = effects.pop_due() {
        match effect {
            DeferredEffect::StrikePlayer { damage, source } => {
                if let Some(hit) = resolve_strike(&mut player, damage) {
                    debug!("Strike from {:?} landed (fatal: {})", source, hit.fatal);
                    hit_events.send(hit);
                }
            }
        }
    }
}

/// Apply a strike to the player, returning the hit notification if it landed.
pub fn resolve_strike(player: &mut PlayerState, damage: u32) -> Option<PlayerHitEvent> {
    match player.receive_strike(damage) {
        StrikeOutcome::Wounded => Some(PlayerHitEvent { fatal: false }),
        StrikeOutcome::Killed => Some(PlayerHitEvent { fatal: true }),
        StrikeOutcome::Blocked | StrikeOutcome::AlreadyDown => None,
    }
}
