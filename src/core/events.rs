//! Global events used for cross-system communication.
//!
//! The behavior controller never talks to the presentation layer, the physics
//! world or the player directly. It sends these events and lets the owning
//! plugin decide what they mean.

use bevy::prelude::*;

/// Semantic presentation cue emitted by an enemy.
///
/// This is the closed set the presentation layer must understand. How a cue
/// maps onto animator parameters is owned by the presentation plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Standing still.
    Idle,
    /// Moving horizontally.
    Run,
    /// An attack fired. `Some(n)` carries the combo step (1..=3) for melee
    /// rigs, `None` is the single-swing attack of the ranged rig.
    Attack(Option<u8>),
    /// Took damage while alive.
    Hurt,
    /// Health reached zero.
    Death,
    /// Ground contact changed.
    Grounded(bool),
    /// Death should be played without blood.
    NoBlood(bool),
}

/// Sent whenever an enemy emits a presentation cue.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyCue {
    pub entity: Entity,
    pub cue: Cue,
}

/// Sent when an entity should take damage.
///
/// Produced by the player-attack query, consumed by the enemy health
/// controller.
#[derive(Event, Debug, Clone, Copy)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage (if known)
    pub source: Option<Entity>,
    /// Damage amount; non-positive amounts are ignored
    pub amount: i32,
}

/// Sent once when an enemy's health reaches zero.
#[derive(Event, Debug, Clone, Copy)]
pub struct DeathEvent {
    /// Entity that died
    pub entity: Entity,
    /// Entity that killed them (if any)
    pub killed_by: Option<Entity>,
}

/// Sent by the player-control subsystem when the player swings.
///
/// `origin` is the centre of the attack circle in world space.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerAttackEvent {
    pub attacker: Entity,
    pub origin: Vec3,
}

/// Sent when a deferred enemy strike lands on the player.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerHitEvent {
    /// Player health reached zero with this hit
    pub fatal: bool,
}

/// Sent when a cosmetic hit marker should appear.
#[derive(Event, Debug, Clone, Copy)]
pub struct HitEffectEvent {
    pub position: Vec3,
}
