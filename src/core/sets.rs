//! Frame ordering shared by every gameplay plugin.

use bevy::prelude::*;

/// Per-frame phases, chained in this order while `InGame`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// Advance clocks and copy the player into the shared record.
    Sense,
    /// Movement backend consumes last frame's destinations.
    Navigation,
    /// Every enemy's behavior tick.
    Behavior,
    /// Player attack queries turn into damage events.
    PlayerAttack,
    /// Damage is applied to enemies.
    Damage,
    /// Due deferred effects run against the player.
    Deferred,
    /// Death grace timers and spawners.
    Lifecycle,
    /// Cues are forwarded to animators.
    Presentation,
}
