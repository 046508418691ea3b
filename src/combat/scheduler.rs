//! Time-ordered queue of deferred effects.
//!
//! Effects are fire-and-forget: once scheduled they always run, in the first
//! frame whose accumulated time reaches their deadline. Effects due in the
//! same frame run in the order they were scheduled.

use bevy::prelude::*;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

/// Payload of a deferred effect. Carries only plain data, never a reference
/// into the entity that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredEffect {
    /// Damage the player unless they are blocking when it lands.
    StrikePlayer { damage: u32, source: Entity },
}

#[derive(Debug)]
struct Scheduled {
    deadline: Duration,
    seq: u64,
    effect: DeferredEffect,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        self.deadline
            .cmp(&other.deadline)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Scheduler resource with its own simulation clock.
#[derive(Resource, Debug, Default)]
pub struct DeferredEffects {
    clock: Duration,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Scheduled>>,
}

impl DeferredEffects {
    /// Accumulated simulation time.
    pub fn now(&self) -> Duration {
        self.clock
    }

    pub fn advance(&mut self, delta: Duration) {
        self.clock += delta;
    }

    /// Schedule `effect` to run `delay` after the current clock. Returns the
    /// deadline.
    pub fn schedule(&mut self, delay: Duration, effect: DeferredEffect) -> Duration {
        let deadline = self.clock + delay;
        self.schedule_at(deadline, effect);
        deadline
    }

    pub fn schedule_at(&mut self, deadline: Duration, effect: DeferredEffect) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Scheduled {
            deadline,
            seq,
            effect,
        }));
    }

    /// Pop the earliest effect whose deadline has been reached.
    pub fn pop_due(&mut self) -> Option<DeferredEffect> {
        let Reverse(next) = self.queue.peek()?;
        if next.deadline > self.clock {
            return None;
        }
        self.queue.pop().map(|Reverse(scheduled)| scheduled.effect)
    }

    /// Remove and return every due effect in execution order.
    pub fn drain_due(&mut self) -> Vec<DeferredEffect> {
        std::iter::from_fn(|| self.pop_due()).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
