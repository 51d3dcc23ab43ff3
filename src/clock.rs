//! Session timing: play time shown on the status bar and the step cadence.
//!
//! Every method takes `now` from the caller, so tests drive the clock with
//! synthetic instants.

use std::time::{Duration, Instant};

/// Play time and step timer that both stand still while stopped (paused, or
/// the game is over).
#[derive(Clone, Debug)]
pub struct Clock {
    running_since: Option<Instant>,
    banked: Duration,
    last_tick: Instant,
    since_step: Duration,
}

impl Clock {
    pub fn start(now: Instant) -> Self {
        Clock {
            running_since: Some(now),
            banked: Duration::ZERO,
            last_tick: now,
            since_step: Duration::ZERO,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    /// Play time up to `now`.
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.banked
            + self
                .running_since
                .map(|since| now.saturating_duration_since(since))
                .unwrap_or_default()
    }

    pub fn stop(&mut self, now: Instant) {
        if let Some(since) = self.running_since.take() {
            self.banked += now.saturating_duration_since(since);
            self.since_step += now.saturating_duration_since(self.last_tick);
            self.last_tick = now;
        }
    }

    pub fn resume(&mut self, now: Instant) {
        if self.running_since.is_none() {
            self.running_since = Some(now);
            self.last_tick = now;
        }
    }

    /// True when a step falls due at `now`.  At most one step per call;
    /// the remainder carries over to the next call.
    pub fn step_due(&mut self, now: Instant, interval: Duration) -> bool {
        if !self.is_running() {
            return false;
        }
        self.since_step += now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        if self.since_step >= interval {
            self.since_step -= interval;
            return true;
        }
        false
    }
}
