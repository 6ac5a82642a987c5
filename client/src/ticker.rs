//! Periodic render scheduler.
//!
//! The render loop runs on this ticker rather than on message arrival, so a
//! burst of pointer-move frames costs at most one repaint per period. When
//! the connection dies the ticker is not stopped — local pan/zoom still needs
//! repaints — it is slowed down instead. Dropping the session drops the
//! ticker; there is no detached timer to leak.

#[cfg(test)]
#[path = "ticker_test.rs"]
mod ticker_test;

use std::time::Duration;

use tokio::time::{Interval, MissedTickBehavior, interval};

/// Periodic tick source for the render loop.
#[derive(Debug)]
pub struct RenderTicker {
    period: Duration,
    interval: Interval,
}

impl RenderTicker {
    /// Create a ticker firing every `period`. The first tick completes
    /// immediately.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self { period, interval: make_interval(period) }
    }

    /// Wait for the next tick.
    pub async fn tick(&mut self) {
        self.interval.tick().await;
    }

    /// Multiply the period and restart the schedule at the new cadence.
    pub fn slow_down(&mut self, factor: u32) {
        self.period *= factor;
        self.interval = make_interval(self.period);
    }

    /// The current tick period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }
}

fn make_interval(period: Duration) -> Interval {
    let mut interval = interval(period);
    // Late ticks reschedule from now; no catch-up burst after a stall.
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}
