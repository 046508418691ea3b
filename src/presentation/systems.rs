//! Presentation systems: cues into animators, facing, hit markers.

use bevy::prelude::*;

use super::components::*;
use super::profiles::command_for;
use crate::core::{Cue, EnemyCue, HitEffectEvent, PlayerHitEvent, TickSet};
use crate::enemies::{BehaviorController, Facing};
use crate::player::Player;

/// Set up presentation systems.
pub fn setup_presentation_systems(app: &mut App) {
    app.add_systems(
        Update,
        (
            apply_enemy_cues,
            play_player_hit,
            sync_enemy_facing,
            spawn_hit_markers,
            expire_hit_markers,
            consume_animator_triggers,
        )
            .chain()
            .in_set(TickSet::Presentation),
    );
}

/// Write each enemy cue into that enemy's animator.
pub fn apply_enemy_cues(mut cue_events: EventReader<EnemyCue>, mut animators: Query<&mut Animator>) {
    for event in cue_events.read() {
        // Entity may already be gone
        let Ok(mut animator) = animators.get_mut(event.entity) else {
            continue;
        };
        let command = command_for(animator.rig, event.cue);
        animator.apply(command);
    }
}

/// Play the player's hurt or death clip when a strike lands.
pub fn play_player_hit(
    mut hit_events: EventReader<PlayerHitEvent>,
    mut player_query: Query<&mut Animator, With<Player>>,
) {
    for hit in hit_events.read() {
        let Ok(mut animator) = player_query.get_single_mut() else {
            continue;
        };
        let cue = if hit.fatal { Cue::Death } else { Cue::Hurt };
        let command = command_for(animator.rig, cue);
        animator.apply(command);
    }
}

/// Mirror sprites to match the direction each enemy last moved.
pub fn sync_enemy_facing(
    mut query: Query<(&BehaviorController, &mut Animator), Changed<BehaviorController>>,
) {
    for (controller, mut animator) in query.iter_mut() {
        let flip = sprite_flip(animator.rig, controller.locomotion.facing);
        if animator.flip_x != flip {
            animator.flip_x = flip;
        }
    }
}

/// Sprite flip for a rig facing a direction.
pub fn sprite_flip(rig: AnimRig, facing: Facing) -> bool {
    match facing {
        Facing::Left => rig.flip_for_left(),
        Facing::Right => !rig.flip_for_left(),
    }
}

/// Drop a marker wherever a hit landed.
pub fn spawn_hit_markers(mut commands: Commands, mut hit_events: EventReader<HitEffectEvent>) {
    for hit in hit_events.read() {
        commands.spawn((
            HitMarker::default(),
            Name::new("HitMarker"),
            Transform::from_translation(hit.position),
        ));
    }
}

/// Remove markers whose lifetime ran out.
pub fn expire_hit_markers(
    mut commands: Commands,
    time: Res<Time>,
    mut markers: Query<(Entity, &mut HitMarker)>,
) {
    for (entity, mut marker) in markers.iter_mut() {
        marker.lifetime.tick(time.delta());
        if marker.lifetime.finished() {
            commands.entity(entity).despawn_recursive();
        }
    }
}

/// Fire the triggers set this frame.
pub fn consume_animator_triggers(mut animators: Query<(Entity, &mut Animator)>) {
    for (entity, mut animator) in animators.iter_mut() {
        if animator.pending_triggers().is_empty() {
            continue;
        }
        let rig = animator.rig;
        let fired = animator.consume_triggers();
        debug!(
            "{:?} ({:?}) fired {} trigger(s), last {:?}",
            entity, rig, fired, animator.last_trigger
        );
    }
}
