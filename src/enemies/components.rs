//! Enemy-related components.

use std::time::Duration;

use bevy::prelude::*;

/// Marker component for all enemies.
#[derive(Component)]
pub struct Enemy;

/// Enemy type identifier (matches RON file name).
#[derive(Component, Clone, Debug)]
pub struct EnemyType(pub String);

/// Behavior state, recomputed every tick by the behavior controller.
#[derive(Default, PartialEq, Eq, Clone, Copy, Debug)]
pub enum EnemyState {
    /// Alive, not moving, no target.
    #[default]
    Idle,
    /// Moving along a patrol route.
    Patrolling,
    /// Moving toward the player.
    Pursuing,
    /// Swinging at the player or waiting on cooldown in range.
    Attacking,
    /// Hit-stunned; movement and aggression suppressed.
    Dazed,
    /// Health reached zero, waiting out the death grace delay.
    Dying,
    /// Grace delay over, entity is being removed.
    Dead,
}

impl EnemyState {
    /// Dying and Dead enemies no longer think or move.
    pub fn is_terminal(self) -> bool {
        matches!(self, EnemyState::Dying | EnemyState::Dead)
    }
}

/// Grace delay between death and despawn.
pub const DEATH_GRACE_SECS: f32 = 2.0;

/// Despawn deadline set when an enemy dies.
///
/// Stored as an absolute elapsed time so the frame of death never counts
/// toward the grace delay.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeathTimer {
    pub remove_at: Duration,
}

impl DeathTimer {
    /// Grace delay starting at elapsed time `died_at`.
    pub fn starting_at(died_at: Duration) -> Self {
        Self {
            remove_at: died_at + Duration::from_secs_f32(DEATH_GRACE_SECS),
        }
    }

    pub fn is_due(&self, now: Duration) -> bool {
        now >= self.remove_at
    }
}

/// Handle into the external movement backend.
///
/// The behavior controller writes `destination` and `speed` every tick; the
/// backend moves the transform on its own schedule and reports `grounded`.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct NavAgent {
    pub destination: Option<Vec2>,
    pub speed: f32,
    pub grounded: bool,
}

impl NavAgent {
    pub fn grounded() -> Self {
        Self {
            grounded: true,
            ..default()
        }
    }

    /// Stop where the agent stands.
    pub fn halt(&mut self) {
        self.destination = None;
        self.speed = 0.0;
    }
}

/// Ground sensor for enemies that move themselves, refreshed by a downward
/// ray each frame.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct GroundContact {
    pub grounded: bool,
    /// Ray length from the body centre; reaches just past the collider bottom
    pub probe_length: f32,
}

impl GroundContact {
    pub fn for_capsule(half_height: f32, radius: f32) -> Self {
        Self {
            grounded: false,
            probe_length: half_height + radius + 0.2,
        }
    }
}
