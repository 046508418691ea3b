//! The behavior controller: one enemy's full tick.
//!
//! Order per tick: timers, daze, target acquisition, movement, then
//! attack/run/idle selection. Dying enemies skip all of it; only the death
//! grace timer runs for them.

use bevy::prelude::*;

use super::attack::{AttackController, AttackFired, AttackStyle};
use super::components::{EnemyState, GroundContact, NavAgent};
use super::daze::Daze;
use super::data::EnemyDefinition;
use super::health::{DamageOutcome, Vitals};
use super::movement::{Locomotion, MovementStrategy, IDLE_DELAY_SECS};
use super::targeting::{Aggro, TargetIntent};
use crate::core::Cue;
use crate::player::PlayerState;

/// Read-only inputs shared by every enemy for one frame.
pub struct TickContext<'a> {
    pub dt: f32,
    pub player: &'a PlayerState,
}

/// What an enemy's tick produced, drained by the calling system.
#[derive(Debug, Default)]
pub struct TickReport {
    pub cues: Vec<Cue>,
    pub attack: Option<AttackFired>,
}

impl TickReport {
    pub fn clear(&mut self) {
        self.cues.clear();
        self.attack = None;
    }

    /// True when a deferred strike must be scheduled.
    pub fn wants_strike(&self) -> bool {
        self.attack
            .is_some_and(|fired| fired.style == AttackStyle::Deferred)
    }
}

/// Per-enemy behavior state, composed of the individual controllers.
#[derive(Component, Debug, Clone)]
pub struct BehaviorController {
    pub state: EnemyState,
    pub vitals: Vitals,
    pub daze: Daze,
    pub attack: AttackController,
    pub aggro: Aggro,
    pub locomotion: Locomotion,
    pub movement: MovementStrategy,
}

impl BehaviorController {
    pub fn from_definition(definition: &EnemyDefinition, spawn: Vec2, waypoints: &[Vec2]) -> Self {
        let mut vitals = Vitals::new(definition.max_health);
        vitals.no_blood = definition.no_blood;

        Self {
            state: EnemyState::Idle,
            vitals,
            daze: Daze::new(definition.daze_duration),
            attack: AttackController::new(
                definition.attack_range,
                definition.attack_cooldown,
                definition.attack_style,
            ),
            aggro: Aggro::new(
                definition.aggro_range,
                definition.disengage_range,
                definition.aggro_policy,
                definition.disengage_response,
            ),
            locomotion: Locomotion::new(definition.speed, spawn),
            movement: MovementStrategy::from_kind(definition.movement, spawn, waypoints),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.vitals.is_alive() && !self.state.is_terminal()
    }

    /// Run one tick. `position` is the enemy's ground position and is moved
    /// in place by direct strategies.
    pub fn tick(
        &mut self,
        position: &mut Vec2,
        mut nav: Option<&mut NavAgent>,
        ground: Option<&GroundContact>,
        ctx: &TickContext,
        report: &mut TickReport,
    ) {
        if self.state.is_terminal() {
            return;
        }

        let dt = ctx.dt.max(0.0);
        let player = ctx.player.position;
        let alive = self.vitals.is_alive();

        // Timers
        self.attack.tick(dt);
        let mut dazed = self.daze.update(dt);

        // Target acquisition
        let intent = self.aggro.acquire(position.distance(player), alive, dazed);
        if self.aggro.holding_dazes() {
            self.daze.hold();
            dazed = true;
        }

        self.locomotion.speed = if dazed || !alive {
            0.0
        } else {
            self.locomotion.nominal_speed
        };

        // Movement
        let destination = self.movement.destination(*position, intent, player);
        *position = self.movement.step(
            *position,
            destination,
            self.locomotion.speed,
            dt,
            nav.as_deref_mut(),
        );
        self.locomotion.observe(*position);

        let grounded = match (&self.movement, nav.as_deref()) {
            (MovementStrategy::DelegatedChase, Some(agent)) => Some(agent.grounded),
            _ => ground.map(|contact| contact.grounded),
        };
        if let Some(grounded) = grounded {
            if self.locomotion.set_grounded(grounded) {
                report.cues.push(Cue::Grounded(grounded));
            }
        }

        // Action selection
        let distance = position.distance(player);
        let fired = self.attack.try_attack(distance, alive, dazed);
        if let Some(fired) = fired {
            if fired.style == AttackStyle::Deferred {
                // Ranged swings plant the enemy for the tick they fire.
                if let Some(agent) = nav.as_deref_mut() {
                    agent.halt();
                }
            }
            report.cues.push(fired.cue());
            report.attack = Some(fired);
        } else if self.locomotion.moved_horizontally() && self.locomotion.speed > 0.0 && !dazed {
            self.locomotion.delay_to_idle = IDLE_DELAY_SECS;
            if self.locomotion.set_running(true) {
                report.cues.push(Cue::Run);
            }
        } else {
            // Debounced so single still frames don't flicker to idle.
            self.locomotion.delay_to_idle -= dt;
            if self.locomotion.delay_to_idle < 0.0 && self.locomotion.set_running(false) {
                report.cues.push(Cue::Idle);
            }
        }

        self.state = if fired.is_some() {
            EnemyState::Attacking
        } else if dazed {
            EnemyState::Dazed
        } else if intent == TargetIntent::Player && self.attack.in_range(distance) {
            EnemyState::Attacking
        } else if intent == TargetIntent::Player {
            EnemyState::Pursuing
        } else if self.locomotion.moved() {
            EnemyState::Patrolling
        } else {
            EnemyState::Idle
        };
    }

    /// Apply incoming damage.
    ///
    /// Dying and dead enemies ignore damage, so the death cue fires at most
    /// once and the grace timer is never restarted.
    pub fn apply_damage(&mut self, amount: i32, cues: &mut Vec<Cue>) -> DamageOutcome {
        if amount <= 0 || self.state.is_terminal() || !self.vitals.is_alive() {
            return DamageOutcome::Ignored;
        }

        cues.push(Cue::Hurt);
        self.daze.stun();
        self.vitals.take_damage(amount.unsigned_abs());

        if self.vitals.is_alive() {
            return DamageOutcome::Hurt {
                remaining: self.vitals.health(),
            };
        }

        self.state = EnemyState::Dying;
        self.locomotion.speed = 0.0;
        cues.push(Cue::NoBlood(self.vitals.no_blood));
        cues.push(Cue::Death);
        DamageOutcome::Killed
    }

    /// Grace delay elapsed; the entity is about to be removed.
    pub fn finish_dying(&mut self) {
        self.state = EnemyState::Dead;
    }
}
