//! Movement strategies and locomotion bookkeeping.
//!
//! The three enemy variants only differ in how "move toward the target" is
//! realized, so that part is a swappable [`MovementStrategy`]. Everything
//! else about an enemy's tick is shared.

use bevy::prelude::*;
use serde::Deserialize;

use super::components::NavAgent;
use super::targeting::TargetIntent;

/// Distance at which a patrol waypoint counts as reached.
pub const WAYPOINT_REACHED: f32 = 0.1;
/// Idle cue debounce after the last run cue.
pub const IDLE_DELAY_SECS: f32 = 0.05;

/// Movement variant named in enemy definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum MovementKind {
    #[default]
    DirectChase,
    WaypointPatrol,
    DelegatedChase,
}

/// Closed loop of patrol points. Never empty: the spawn point always closes
/// the loop.
#[derive(Debug, Clone, PartialEq)]
pub struct PatrolRoute {
    points: Vec<Vec2>,
    current: usize,
}

impl PatrolRoute {
    pub fn new(waypoints: &[Vec2], spawn: Vec2) -> Self {
        let mut points = waypoints.to_vec();
        points.push(spawn);
        Self { points, current: 0 }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_point(&self) -> Vec2 {
        self.points[self.current]
    }

    /// Move to the next point once `position` is close enough to the current
    /// one. Returns true when the index advanced.
    pub fn advance_if_reached(&mut self, position: Vec2) -> bool {
        if position.distance(self.current_point()) > WAYPOINT_REACHED {
            return false;
        }
        self.current = (self.current + 1) % self.points.len();
        true
    }
}

/// How an enemy turns a destination into motion.
#[derive(Debug, Clone, PartialEq)]
pub enum MovementStrategy {
    /// Interpolate toward the destination.
    DirectChase,
    /// Interpolate along a patrol route while not pursuing.
    WaypointPatrol(PatrolRoute),
    /// Hand the destination to the movement backend.
    DelegatedChase,
}

impl MovementStrategy {
    pub fn from_kind(kind: MovementKind, spawn: Vec2, waypoints: &[Vec2]) -> Self {
        match kind {
            MovementKind::DirectChase => MovementStrategy::DirectChase,
            MovementKind::WaypointPatrol => {
                MovementStrategy::WaypointPatrol(PatrolRoute::new(waypoints, spawn))
            }
            MovementKind::DelegatedChase => MovementStrategy::DelegatedChase,
        }
    }

    pub fn route(&self) -> Option<&PatrolRoute> {
        match self {
            MovementStrategy::WaypointPatrol(route) => Some(route),
            _ => None,
        }
    }

    /// Resolve where to head this tick.
    ///
    /// Patrol progress is tracked every tick, but the waypoint is only used
    /// while the enemy is not chasing the player.
    pub fn destination(&mut self, position: Vec2, intent: TargetIntent, player: Vec2) -> Vec2 {
        if let MovementStrategy::WaypointPatrol(route) = self {
            route.advance_if_reached(position);
        }

        match (intent, &*self) {
            (TargetIntent::Player, _) => player,
            (TargetIntent::Hold, MovementStrategy::WaypointPatrol(route)) => route.current_point(),
            (TargetIntent::Hold, _) => position,
        }
    }

    /// Advance `position` toward `destination` for one tick.
    ///
    /// Delegated movement only updates the backend and leaves the position
    /// alone; without a backend it falls back to direct interpolation.
    pub fn step(
        &self,
        position: Vec2,
        destination: Vec2,
        speed: f32,
        dt: f32,
        nav: Option<&mut NavAgent>,
    ) -> Vec2 {
        match (self, nav) {
            (MovementStrategy::DelegatedChase, Some(agent)) => {
                agent.destination = Some(destination);
                agent.speed = speed;
                position
            }
            _ => interpolate(position, destination, speed, dt),
        }
    }
}

/// Constant-rate interpolation toward `destination`, scaled by `speed * dt`.
pub fn interpolate(position: Vec2, destination: Vec2, speed: f32, dt: f32) -> Vec2 {
    let t = (speed * dt).clamp(0.0, 1.0);
    position.lerp(destination, t)
}

/// Sprite facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Speed, facing and run/idle debounce for one enemy.
#[derive(Debug, Clone, PartialEq)]
pub struct Locomotion {
    /// Speed restored whenever the enemy is free to move
    pub nominal_speed: f32,
    /// Speed used this tick (0 while dazed or dead)
    pub speed: f32,
    pub facing: Facing,
    /// Ground-plane displacement observed on the last tick
    pub last_displacement: Vec2,
    pub delay_to_idle: f32,
    previous_position: Vec2,
    running: Option<bool>,
    grounded: Option<bool>,
}

impl Locomotion {
    pub fn new(nominal_speed: f32, spawn: Vec2) -> Self {
        Self {
            nominal_speed,
            speed: nominal_speed,
            facing: Facing::default(),
            last_displacement: Vec2::ZERO,
            delay_to_idle: 0.0,
            previous_position: spawn,
            running: None,
            grounded: None,
        }
    }

    /// Record where the enemy ended up this tick and update facing.
    ///
    /// Facing only changes when the position actually moved.
    pub fn observe(&mut self, position: Vec2) {
        self.last_displacement = position - self.previous_position;
        if self.last_displacement == Vec2::ZERO {
            return;
        }
        self.previous_position = position;

        if self.last_displacement.x > 0.0 {
            self.facing = Facing::Right;
        } else if self.last_displacement.x < 0.0 {
            self.facing = Facing::Left;
        }
    }

    /// Whether the position changed at all on the last tick.
    pub fn moved(&self) -> bool {
        self.last_displacement != Vec2::ZERO
    }

    /// Whether the sprite-facing axis changed; drives the run cue.
    pub fn moved_horizontally(&self) -> bool {
        self.last_displacement.x.abs() > f32::EPSILON
    }

    /// Switch the looping run/idle state. Returns true if it changed.
    pub fn set_running(&mut self, running: bool) -> bool {
        let changed = self.running != Some(running);
        self.running = Some(running);
        changed
    }

    /// Record ground contact. Returns true if it changed.
    pub fn set_grounded(&mut self, grounded: bool) -> bool {
        let changed = self.grounded != Some(grounded);
        self.grounded = Some(grounded);
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_route_holds_spawn() {
        let mut route = PatrolRoute::new(&[], Vec2::new(3.0, 3.0));
        assert_eq!(route.points().len(), 1);
        assert!(route.advance_if_reached(Vec2::new(3.0, 3.05)));
        assert_eq!(route.current_index(), 0);
        assert_eq!(route.current_point(), Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_route_wraps_through_spawn() {
        let spawn = Vec2::ZERO;
        let mut route = PatrolRoute::new(&[Vec2::new(5.0, 0.0), Vec2::new(5.0, 5.0)], spawn);
        assert_eq!(route.points().len(), 3);

        assert!(!route.advance_if_reached(Vec2::new(4.0, 0.0)));
        assert!(route.advance_if_reached(Vec2::new(4.95, 0.0)));
        assert_eq!(route.current_index(), 1);
        assert!(route.advance_if_reached(Vec2::new(5.0, 5.0)));
        assert_eq!(route.current_point(), spawn);
        assert!(route.advance_if_reached(spawn));
        assert_eq!(route.current_index(), 0);
    }

    #[test]
    fn test_patrol_destination_only_when_holding() {
        let mut strategy =
            MovementStrategy::from_kind(MovementKind::WaypointPatrol, Vec2::ZERO, &[Vec2::X * 4.0]);
        let player = Vec2::new(-2.0, 0.0);

        assert_eq!(
            strategy.destination(Vec2::new(1.0, 0.0), TargetIntent::Hold, player),
            Vec2::X * 4.0
        );
        assert_eq!(
            strategy.destination(Vec2::new(1.0, 0.0), TargetIntent::Player, player),
            player
        );
    }

    #[test]
    fn test_patrol_advances_while_pursuing() {
        let mut strategy =
            MovementStrategy::from_kind(MovementKind::WaypointPatrol, Vec2::ZERO, &[Vec2::X * 4.0]);
        strategy.destination(Vec2::X * 4.0, TargetIntent::Player, Vec2::ZERO);
        assert_eq!(strategy.route().map(PatrolRoute::current_index), Some(1));
    }

    #[test]
    fn test_interpolation_never_overshoots() {
        let next = interpolate(Vec2::ZERO, Vec2::X * 10.0, 2.0, 0.1);
        assert!((next.x - 2.0).abs() < 1e-5);

        let clamped = interpolate(Vec2::ZERO, Vec2::X * 10.0, 50.0, 1.0);
        assert_eq!(clamped, Vec2::X * 10.0);
    }

    #[test]
    fn test_delegated_writes_backend_or_falls_back() {
        let strategy = MovementStrategy::DelegatedChase;
        let mut agent = NavAgent::default();
        let held = strategy.step(Vec2::ZERO, Vec2::X * 4.0, 2.0, 0.1, Some(&mut agent));
        assert_eq!(held, Vec2::ZERO);
        assert_eq!(agent.destination, Some(Vec2::X * 4.0));
        assert_eq!(agent.speed, 2.0);

        let moved = strategy.step(Vec2::ZERO, Vec2::X * 4.0, 2.0, 0.1, None);
        assert!(moved.x > 0.0);
    }

    #[test]
    fn test_facing_follows_displacement() {
        let mut locomotion = Locomotion::new(2.0, Vec2::ZERO);
        locomotion.observe(Vec2::new(-0.5, 0.0));
        assert_eq!(locomotion.facing, Facing::Left);

        // Standing still keeps the last facing.
        locomotion.observe(Vec2::new(-0.5, 0.0));
        assert_eq!(locomotion.facing, Facing::Left);
        assert!(!locomotion.moved_horizontally());

        // Pure vertical motion keeps it too.
        locomotion.observe(Vec2::new(-0.5, 1.0));
        assert_eq!(locomotion.facing, Facing::Left);

        locomotion.observe(Vec2::new(0.5, 1.0));
        assert_eq!(locomotion.facing, Facing::Right);
    }
}
