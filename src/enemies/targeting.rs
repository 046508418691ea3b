//! Target acquisition: decide each tick whether to pursue the player.

use serde::Deserialize;

/// Where the enemy wants to go this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetIntent {
    /// Target self: stay put, or follow the patrol route.
    #[default]
    Hold,
    /// Chase the player.
    Player,
}

/// How the band between aggro and disengage range is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum AggroPolicy {
    /// Only pursue inside `aggro_range`; the outer band holds.
    #[default]
    Banded,
    /// Pursue anywhere inside `disengage_range`; aggro collapses onto it.
    SingleThreshold,
}

/// What a holding enemy does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum DisengageResponse {
    /// Stand idle (or patrol) and stay ready to fight.
    #[default]
    Idle,
    /// Treat the enemy as dazed for every tick it holds.
    Dazed,
}

/// Aggression ranges and the intent picked on the last tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggro {
    pub aggro_range: f32,
    pub disengage_range: f32,
    pub policy: AggroPolicy,
    pub response: DisengageResponse,
    pub intent: TargetIntent,
}

impl Aggro {
    pub fn new(
        aggro_range: f32,
        disengage_range: f32,
        policy: AggroPolicy,
        response: DisengageResponse,
    ) -> Self {
        Self {
            aggro_range,
            disengage_range: disengage_range.max(aggro_range),
            policy,
            response,
            intent: TargetIntent::Hold,
        }
    }

    /// Distance under which pursuit starts for the configured policy.
    pub fn engage_range(&self) -> f32 {
        match self.policy {
            AggroPolicy::Banded => self.aggro_range,
            AggroPolicy::SingleThreshold => self.disengage_range,
        }
    }

    /// Pick an intent for the given distance and record it.
    pub fn acquire(&mut self, distance: f32, alive: bool, dazed: bool) -> TargetIntent {
        self.intent = acquire(
            distance,
            self.engage_range(),
            self.disengage_range,
            alive,
            dazed,
        );
        self.intent
    }

    /// Whether holding this tick forces a daze.
    pub fn holding_dazes(&self) -> bool {
        self.intent == TargetIntent::Hold && self.response == DisengageResponse::Dazed
    }
}

/// Intent for a single distance check.
///
/// `engage_range` is the aggro range already resolved for the policy in use.
pub fn acquire(
    distance: f32,
    engage_range: f32,
    disengage_range: f32,
    alive: bool,
    dazed: bool,
) -> TargetIntent {
    if distance >= disengage_range {
        return TargetIntent::Hold;
    }

    if distance < engage_range && alive && !dazed {
        TargetIntent::Player
    } else {
        TargetIntent::Hold
    }
}
