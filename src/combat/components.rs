//! Combat configuration.

use bevy::prelude::*;

use crate::enemies::STRIKE_DELAY_SECS;

/// Parameters of the player's attack query.
#[derive(Resource, Debug, Clone)]
pub struct PlayerAttackConfig {
    /// Radius of the overlap circle around the attack origin
    pub radius: f32,
    /// Damage dealt to every enemy caught in the circle
    pub damage: i32,
}

impl Default for PlayerAttackConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            damage: 1,
        }
    }
}

/// Parameters of deferred enemy strikes.
#[derive(Resource, Debug, Clone)]
pub struct EnemyStrikeConfig {
    /// Time between the swing and the damage landing
    pub delay: f32,
    /// Health removed from an unblocking player
    pub damage: u32,
}

impl Default for EnemyStrikeConfig {
    fn default() -> Self {
        Self {
            delay: STRIKE_DELAY_SECS,
            damage: 1,
        }
    }
}
