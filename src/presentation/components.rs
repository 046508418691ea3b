//! Animator parameters and cosmetic markers.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;

/// Which animator profile a body uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum AnimRig {
    /// Side-on knight rig: run/idle states 1/0, sprite faces right.
    #[default]
    HeroKnight,
    /// Top-down rig: run/idle states 2/1, sprite art faces left.
    TopDown,
}

impl AnimRig {
    /// `AnimState` value for the looping run clip.
    pub fn run_state(self) -> i32 {
        match self {
            AnimRig::HeroKnight => 1,
            AnimRig::TopDown => 2,
        }
    }

    /// `AnimState` value for the looping idle clip.
    pub fn idle_state(self) -> i32 {
        match self {
            AnimRig::HeroKnight => 0,
            AnimRig::TopDown => 1,
        }
    }

    /// Whether the sprite must be flipped to face left.
    pub fn flip_for_left(self) -> bool {
        matches!(self, AnimRig::HeroKnight)
    }
}

/// One write into an animator's parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorCommand {
    SetInt(&'static str, i32),
    SetBool(&'static str, bool),
    Trigger(&'static str),
}

/// Parameter store driven by cues, read by whatever renders the body.
#[derive(Component, Debug, Clone, Default)]
pub struct Animator {
    pub rig: AnimRig,
    pub flip_x: bool,
    /// Most recent trigger consumed by the animator
    pub last_trigger: Option<&'static str>,
    ints: HashMap<&'static str, i32>,
    bools: HashMap<&'static str, bool>,
    pending: Vec<&'static str>,
}

impl Animator {
    pub fn new(rig: AnimRig) -> Self {
        Self { rig, ..default() }
    }

    pub fn apply(&mut self, command: AnimatorCommand) {
        match command {
            AnimatorCommand::SetInt(name, value) => {
                self.ints.insert(name, value);
            }
            AnimatorCommand::SetBool(name, value) => {
                self.bools.insert(name, value);
            }
            AnimatorCommand::Trigger(name) => self.pending.push(name),
        }
    }

    pub fn int(&self, name: &str) -> Option<i32> {
        self.ints.get(name).copied()
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        self.bools.get(name).copied()
    }

    /// Triggers set since the last consume, oldest first.
    pub fn pending_triggers(&self) -> &[&'static str] {
        &self.pending
    }

    /// Fire every pending trigger. Returns how many were consumed.
    pub fn consume_triggers(&mut self) -> usize {
        let count = self.pending.len();
        if let Some(last) = self.pending.last() {
            self.last_trigger = Some(*last);
        }
        self.pending.clear();
        count
    }
}

/// How long a hit marker stays up.
pub const HIT_MARKER_SECS: f32 = 0.5;

/// Short-lived cosmetic marker left where a hit landed.
#[derive(Component)]
pub struct HitMarker {
    pub lifetime: Timer,
}

impl Default for HitMarker {
    fn default() -> Self {
        Self {
            lifetime: Timer::from_seconds(HIT_MARKER_SECS, TimerMode::Once),
        }
    }
}
