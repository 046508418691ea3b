//! Enemy spawning: timed spawners and the enemy bundle itself.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::behavior::BehaviorController;
use super::components::{Enemy, EnemyType, GroundContact, NavAgent};
use super::data::{EnemyDefinition, EnemyRegistry};
use super::movement::MovementKind;
use crate::core::ground_position;
use crate::presentation::Animator;

/// Spawns one enemy of `enemy_type` at its own position every interval.
///
/// The timer repeats, so leftover time carries into the next interval and a
/// long frame can spawn more than one enemy.
#[derive(Component, Debug, Clone)]
pub struct Spawner {
    pub enemy_type: String,
    pub timer: Timer,
    /// Patrol points handed to every spawned enemy
    pub waypoints: Vec<Vec2>,
}

impl Spawner {
    pub fn new(enemy_type: impl Into<String>, interval_secs: f32) -> Self {
        Self {
            enemy_type: enemy_type.into(),
            timer: Timer::from_seconds(interval_secs.max(0.01), TimerMode::Repeating),
            waypoints: Vec::new(),
        }
    }

    pub fn with_waypoints(mut self, waypoints: Vec<Vec2>) -> Self {
        self.waypoints = waypoints;
        self
    }
}

/// Tick every spawner and spawn the enemies that are due.
pub fn tick_spawners(
    mut commands: Commands,
    time: Res<Time>,
    registry: Res<EnemyRegistry>,
    mut spawners: Query<(&mut Spawner, &Transform)>,
) {
    for (mut spawner, transform) in spawners.iter_mut() {
        spawner.timer.tick(time.delta());

        let due = spawner.timer.times_finished_this_tick();
        if due == 0 {
            continue;
        }

        let Some(definition) = registry.get(&spawner.enemy_type) else {
            warn!("Spawner references unknown enemy type: {}", spawner.enemy_type);
            continue;
        };

        for _ in 0..due {
            spawn_enemy(
                &mut commands,
                &spawner.enemy_type,
                definition,
                transform.translation,
                &spawner.waypoints,
            );
        }
    }
}

/// Spawn a single enemy from its definition.
pub fn spawn_enemy(
    commands: &mut Commands,
    enemy_type: &str,
    definition: &EnemyDefinition,
    position: Vec3,
    waypoints: &[Vec2],
) -> Entity {
    let collider_config = definition.collider.clone().unwrap_or_default();
    let controller =
        BehaviorController::from_definition(definition, ground_position(position), waypoints);

    let mut entity = commands.spawn((
        Enemy,
        EnemyType(enemy_type.to_string()),
        Name::new(definition.name.clone()),
        controller,
        Animator::new(definition.rig),
        Transform::from_translation(position),
        Collider::capsule_y(collider_config.half_height, collider_config.radius),
        RigidBody::KinematicPositionBased,
    ));

    if definition.movement == MovementKind::DelegatedChase {
        entity.insert(NavAgent::grounded());
    } else {
        entity.insert(GroundContact::for_capsule(
            collider_config.half_height,
            collider_config.radius,
        ));
    }

    info!("Spawned {} at {:?}", definition.name, position);
    entity.id()
}
