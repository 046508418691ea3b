//! Hit-stun timer.

/// Daze controller: counts down hit-stun and reports whether the enemy is
/// dazed this tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Daze {
    /// Seconds of stun left
    pub timer: f32,
    /// Stun applied by each hit
    pub duration: f32,
    dazed: bool,
}

impl Daze {
    pub fn new(duration: f32) -> Self {
        Self {
            timer: 0.0,
            duration,
            dazed: false,
        }
    }

    /// Start (or restart) a stun of `duration` seconds.
    pub fn apply(&mut self, duration: f32) {
        self.timer = duration.max(0.0);
    }

    /// Start a stun of the configured length.
    pub fn stun(&mut self) {
        self.apply(self.duration);
    }

    /// Advance the countdown. Returns true while the enemy is dazed.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.timer > 0.0 {
            self.timer = (self.timer - dt).max(0.0);
            self.dazed = true;
        } else {
            self.dazed = false;
        }
        self.dazed
    }

    /// Hold the enemy dazed for the current tick without touching the timer.
    pub fn hold(&mut self) {
        self.dazed = true;
    }

    pub fn is_dazed(&self) -> bool {
        self.dazed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daze_counts_down_by_elapsed_time() {
        let mut daze = Daze::new(1.5);
        daze.stun();

        let mut previous = daze.timer;
        while daze.timer > 0.0 {
            assert!(daze.update(0.25));
            assert!((previous - daze.timer - 0.25).abs() < 1e-5);
            previous = daze.timer;
        }

        assert!(!daze.update(0.25));
        assert_eq!(daze.timer, 0.0);
    }

    #[test]
    fn test_overshooting_tick_clamps_to_zero() {
        let mut daze = Daze::new(0.6);
        daze.stun();
        assert!(daze.update(1.0));
        assert_eq!(daze.timer, 0.0);
        assert!(!daze.update(0.016));
    }

    #[test]
    fn test_hold_lasts_one_tick() {
        let mut daze = Daze::new(0.6);
        daze.hold();
        assert!(daze.is_dazed());
        assert!(!daze.update(0.016));
    }
}
