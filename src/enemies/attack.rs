//! Attack cooldown and combo counter.

use serde::Deserialize;

use crate::core::Cue;

/// Gap after which the next attack restarts the combo.
pub const COMBO_WINDOW_SECS: f32 = 1.0;
/// Combo steps before wrapping back to the first.
pub const MAX_COMBO: u8 = 3;
/// Delay between a deferred-style swing and its damage landing.
pub const STRIKE_DELAY_SECS: f32 = 0.5;

/// How a fired attack is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum AttackStyle {
    /// Melee chain: cue carries the combo step, damage is the rig's business.
    #[default]
    Combo,
    /// Single swing whose damage lands on the player after a fixed delay.
    Deferred,
}

/// Whether the cooldown has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackPhase {
    Ready,
    Cooldown,
}

/// A swing that fired this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackFired {
    pub combo: u8,
    pub style: AttackStyle,
}

impl AttackFired {
    pub fn cue(&self) -> Cue {
        match self.style {
            AttackStyle::Combo => Cue::Attack(Some(self.combo)),
            AttackStyle::Deferred => Cue::Attack(None),
        }
    }
}

/// Attack controller for one enemy.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackController {
    pub range: f32,
    pub cooldown: f32,
    pub style: AttackStyle,
    combo: u8,
    since_last_attack: f32,
}

impl AttackController {
    pub fn new(range: f32, cooldown: f32, style: AttackStyle) -> Self {
        Self {
            range,
            cooldown,
            style,
            combo: 0,
            since_last_attack: 0.0,
        }
    }

    pub fn combo(&self) -> u8 {
        self.combo
    }

    pub fn since_last_attack(&self) -> f32 {
        self.since_last_attack
    }

    pub fn tick(&mut self, dt: f32) {
        self.since_last_attack += dt;
    }

    pub fn phase(&self) -> AttackPhase {
        if self.since_last_attack > self.cooldown {
            AttackPhase::Ready
        } else {
            AttackPhase::Cooldown
        }
    }

    pub fn in_range(&self, distance: f32) -> bool {
        distance <= self.range
    }

    /// Fire if the target is in range, the cooldown elapsed and the enemy
    /// can act.
    pub fn try_attack(&mut self, distance: f32, alive: bool, dazed: bool) -> Option<AttackFired> {
        let ready = self.in_range(distance) && self.phase() == AttackPhase::Ready;
        (ready && alive && !dazed).then(|| self.fire())
    }

    fn fire(&mut self) -> AttackFired {
        // A stale chain starts over.
        if self.since_last_attack > COMBO_WINDOW_SECS {
            self.combo = 0;
        }
        self.combo += 1;
        if self.combo > MAX_COMBO {
            self.combo = 1;
        }
        self.since_last_attack = 0.0;

        AttackFired {
            combo: self.combo,
            style: self.style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combo_cycles_inside_window() {
        let mut attack = AttackController::new(1.0, 0.25, AttackStyle::Combo);
        let mut seen = Vec::new();
        for _ in 0..7 {
            attack.tick(0.5);
            let fired = attack.try_attack(0.5, true, false).expect("cooldown elapsed");
            seen.push(fired.combo);
        }
        assert_eq!(seen, vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn test_long_gap_resets_combo() {
        let mut attack = AttackController::new(1.0, 0.25, AttackStyle::Combo);
        attack.tick(0.5);
        attack.try_attack(0.5, true, false);
        attack.tick(0.5);
        assert_eq!(attack.try_attack(0.5, true, false).map(|f| f.combo), Some(2));

        attack.tick(1.01);
        assert_eq!(attack.try_attack(0.5, true, false).map(|f| f.combo), Some(1));
    }

    #[test]
    fn test_gates() {
        let mut attack = AttackController::new(1.8, 1.5, AttackStyle::Deferred);
        attack.tick(1.0);
        assert_eq!(attack.phase(), AttackPhase::Cooldown);
        assert!(attack.try_attack(1.0, true, false).is_none());

        attack.tick(1.0);
        assert!(attack.try_attack(2.0, true, false).is_none());
        assert!(attack.try_attack(1.0, false, false).is_none());
        assert!(attack.try_attack(1.0, true, true).is_none());

        let fired = attack.try_attack(1.8, true, false).expect("in range and ready");
        assert_eq!(fired.cue(), Cue::Attack(None));
        assert_eq!(attack.since_last_attack(), 0.0);
    }
}
