//! Enemy health pool.

/// What a damage application did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Non-positive amount, or the enemy was already dying.
    Ignored,
    /// Health went down, enemy still alive.
    Hurt { remaining: u32 },
    /// This hit brought health to zero.
    Killed,
}

/// Health controller data. `max_health` is fixed at spawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Vitals {
    health: u32,
    max_health: u32,
    /// Play the bloodless death variant.
    pub no_blood: bool,
}

impl Vitals {
    pub fn new(max_health: u32) -> Self {
        let max_health = max_health.max(1);
        Self {
            health: max_health,
            max_health,
            no_blood: false,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn percentage(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }

    /// Subtract damage, saturating at zero. Returns the damage actually taken.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.health);
        self.health -= actual;
        actual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_saturates_at_zero() {
        let mut vitals = Vitals::new(1);
        assert_eq!(vitals.take_damage(2), 1);
        assert_eq!(vitals.health(), 0);
        assert!(!vitals.is_alive());
    }

    #[test]
    fn test_zero_max_health_is_clamped() {
        let vitals = Vitals::new(0);
        assert_eq!(vitals.max_health(), 1);
        assert_eq!(vitals.percentage(), 1.0);
    }
}
