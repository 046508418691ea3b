//! Movement backend: straight-line steering for `NavAgent` enemies and the
//! ground probe for enemies that move themselves.
//!
//! The straight-line walker stands in for a path planner.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::{GroundContact, NavAgent};
use crate::core::{ground_position, set_ground_position, TickSet};

/// Default movement backend. Swap it for a path-planning plugin to change how
/// delegated enemies move.
pub struct StraightLineNavPlugin;

impl Plugin for StraightLineNavPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (probe_ground_contact, move_nav_agents).in_set(TickSet::Navigation),
        );
    }
}

/// Step every agent toward its destination at its requested speed.
pub fn move_nav_agents(time: Res<Time>, mut agents: Query<(&mut Transform, &mut NavAgent)>) {
    let dt = time.delta_secs();

    for (mut transform, mut agent) in agents.iter_mut() {
        let Some(destination) = agent.destination else {
            continue;
        };

        let position = ground_position(transform.translation);
        let next = step_toward(position, destination, agent.speed * dt);
        if next != position {
            set_ground_position(&mut transform, next);
        }
        agent.grounded = true;
    }
}

/// Cast a short ray down from each self-moving enemy to detect the floor.
pub fn probe_ground_contact(
    rapier_context: Query<&RapierContext>,
    mut query: Query<(Entity, &Transform, &mut GroundContact), With<Collider>>,
) {
    // No physics world, keep the last known contact
    let Ok(context) = rapier_context.get_single() else {
        return;
    };

    for (entity, transform, mut contact) in query.iter_mut() {
        let grounded = context
            .cast_ray(
                transform.translation,
                Vec3::NEG_Y,
                contact.probe_length,
                true,
                QueryFilter::default().exclude_collider(entity),
            )
            .is_some();

        if contact.grounded != grounded {
            contact.grounded = grounded;
        }
    }
}

/// Move at most `max_step` toward `destination` without overshooting.
pub fn step_toward(position: Vec2, destination: Vec2, max_step: f32) -> Vec2 {
    let offset = destination - position;
    let distance = offset.length();
    if max_step <= 0.0 || distance <= f32::EPSILON {
        return position;
    }
    if distance <= max_step {
        return destination;
    }
    position + offset / distance * max_step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_toward_does_not_overshoot() {
        let next = step_toward(Vec2::ZERO, Vec2::new(1.0, 0.0), 5.0);
        assert_eq!(next, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_step_toward_moves_by_max_step() {
        let next = step_toward(Vec2::ZERO, Vec2::new(0.0, 10.0), 2.0);
        assert!((next - Vec2::new(0.0, 2.0)).length() < 1e-5);
    }

    #[test]
    fn test_zero_speed_holds_position() {
        let start = Vec2::new(3.0, 4.0);
        assert_eq!(step_toward(start, Vec2::ZERO, 0.0), start);
    }
}
