//! Single-slot debounce timer.
//!
//! A `Debouncer` holds at most one pending payload. Scheduling a new payload
//! replaces the old one and bumps the generation, so tickets handed out for
//! earlier schedules go stale. Time comes from a `Clock` so hosts and tests
//! can drive it explicitly.

use std::sync::Mutex;
use std::time::{Duration, Instant};

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Used by tests and script replay.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        if let Ok(mut now) = self.now.lock() {
            *now += by;
        }
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        match self.now.lock() {
            Ok(now) => *now,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

/// Handle for one scheduled payload. The host timer sleeps until `deadline`
/// and then asks the owner to fire `generation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub deadline: Instant,
}

#[derive(Debug)]
struct Pending<T> {
    payload: T,
    ticket: Ticket,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    generation: u64,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            generation: 0,
            pending: None,
        }
    }

    /// Replace any pending payload with `payload`, due `quiet` after `now`.
    pub fn schedule(&mut self, payload: T, now: Instant) -> Ticket {
        self.generation += 1;
        let ticket = Ticket {
            generation: self.generation,
            deadline: now + self.quiet,
        };
        self.pending = Some(Pending { payload, ticket });
        ticket
    }

    /// Drop the pending payload. Outstanding tickets become stale.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            self.generation += 1;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| p.ticket.generation == generation)
    }

    pub fn ticket(&self) -> Option<Ticket> {
        self.pending.as_ref().map(|p| p.ticket)
    }

    /// Take the pending payload if `generation` is still the latest schedule.
    /// Used when an external timer armed from a `Ticket` expires.
    pub fn take_if_current(&mut self, generation: u64) -> Option<T> {
        if !self.is_current(generation) {
            return None;
        }
        self.pending.take().map(|p| p.payload)
    }

    /// Take the pending payload if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| now >= p.ticket.deadline);
        if !due {
            return None;
        }
        self.pending.take().map(|p| p.payload)
    }
}
