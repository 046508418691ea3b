//! Ground-plane helpers.
//!
//! Gameplay runs on the horizontal (x, z) plane of the 3D world. Height is
//! owned by physics and never touched by AI.

use bevy::prelude::*;

/// Project a world translation onto the ground plane.
pub fn ground_position(translation: Vec3) -> Vec2 {
    Vec2::new(translation.x, translation.z)
}

/// Write a ground-plane position back into a transform, keeping its height.
pub fn set_ground_position(transform: &mut Transform, position: Vec2) {
    transform.translation.x = position.x;
    transform.translation.z = position.y;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_round_trip_keeps_height() {
        let mut transform = Transform::from_xyz(1.0, 4.0, -2.0);
        assert_eq!(ground_position(transform.translation), Vec2::new(1.0, -2.0));

        set_ground_position(&mut transform, Vec2::new(3.0, 5.0));
        assert_eq!(transform.translation, Vec3::new(3.0, 4.0, 5.0));
    }
}
