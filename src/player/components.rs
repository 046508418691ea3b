//! Player-related components and the shared player state.

use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Difficulty setting - decides the player's health pool.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// Player max health for this difficulty.
    pub fn player_max_health(self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Normal => 8,
            Difficulty::Hard => 6,
        }
    }
}

/// Result of an enemy strike landing on the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeOutcome {
    /// Player was blocking, nothing changed.
    Blocked,
    /// Health went down but the player is still standing.
    Wounded,
    /// This strike took the last point of health.
    Killed,
    /// Player was already at zero health.
    AlreadyDown,
}

/// Shared player record read by every enemy each tick.
///
/// Written by the player-control subsystem (`blocking`, `position`, healing)
/// and by deferred enemy strikes. Health can only change through
/// [`PlayerState::receive_strike`] and [`PlayerState::heal`].
#[derive(Resource, Debug, Clone)]
pub struct PlayerState {
    /// Ground-plane position, synced from the player transform each frame
    pub position: Vec2,
    /// True while the player holds a block
    pub blocking: bool,
    health: u32,
    max_health: u32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::default())
    }
}

impl PlayerState {
    pub fn new(max_health: u32) -> Self {
        let max_health = max_health.max(1);
        Self {
            position: Vec2::ZERO,
            blocking: false,
            health: max_health,
            max_health,
        }
    }

    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.player_max_health())
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn is_down(&self) -> bool {
        self.health == 0
    }

    pub fn is_injured(&self) -> bool {
        self.health < self.max_health
    }

    /// Apply an enemy strike. Blocking is evaluated now, at execution time.
    pub fn receive_strike(&mut self, damage: u32) -> StrikeOutcome {
        if self.blocking {
            return StrikeOutcome::Blocked;
        }
        if self.health == 0 {
            return StrikeOutcome::AlreadyDown;
        }

        self.health = self.health.saturating_sub(damage);
        if self.health == 0 {
            StrikeOutcome::Killed
        } else {
            StrikeOutcome::Wounded
        }
    }

    /// Restore health, capped at max. Returns the amount actually healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.max_health - self.health);
        self.health += actual;
        actual
    }
}

/// Passive regeneration while injured.
#[derive(Resource)]
pub struct PlayerRegen {
    pub timer: Timer,
    pub amount: u32,
}

impl Default for PlayerRegen {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(5.0, TimerMode::Repeating),
            amount: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_health_pools() {
        assert_eq!(PlayerState::for_difficulty(Difficulty::Easy).max_health(), 10);
        assert_eq!(PlayerState::for_difficulty(Difficulty::Normal).max_health(), 8);
        assert_eq!(PlayerState::for_difficulty(Difficulty::Hard).max_health(), 6);
    }

    #[test]
    fn test_strike_respects_block() {
        let mut player = PlayerState::new(3);
        player.blocking = true;
        assert_eq!(player.receive_strike(1), StrikeOutcome::Blocked);
        assert_eq!(player.health(), 3);

        player.blocking = false;
        assert_eq!(player.receive_strike(1), StrikeOutcome::Wounded);
        assert_eq!(player.health(), 2);
    }

    #[test]
    fn test_strike_kills_then_reports_down() {
        let mut player = PlayerState::new(1);
        assert_eq!(player.receive_strike(1), StrikeOutcome::Killed);
        assert!(player.is_down());
        assert_eq!(player.receive_strike(1), StrikeOutcome::AlreadyDown);
        assert_eq!(player.health(), 0);
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut player = PlayerState::new(4);
        player.receive_strike(2);
        assert_eq!(player.heal(5), 2);
        assert_eq!(player.health(), 4);
        assert!(!player.is_injured());
    }
}
