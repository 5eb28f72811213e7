//! Elapsed-time counter driven by the event loop.

use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::{debug, instrument};

/// Default period between ticks.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Counts whole periods while running.
///
/// The timer owns its [`Interval`]; there is no background task. The event
/// loop awaits [`Timer::tick`] alongside its other inputs, and each resolved
/// tick adds one to the count. Stopping or dropping the timer releases the
/// interval, so nothing keeps firing after its owner is gone.
#[derive(Debug)]
pub struct Timer {
    count: u64,
    period: Duration,
    interval: Option<Interval>,
}

impl Timer {
    /// Creates a stopped timer at zero.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn new(period: Duration) -> Self {
        assert!(!period.is_zero(), "timer period must be non-zero");
        Self {
            count: 0,
            period,
            interval: None,
        }
    }

    /// Creates a timer at zero and starts it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn started(period: Duration) -> Self {
        let mut timer = Self::new(period);
        timer.start();
        timer
    }

    /// Number of periods counted so far.
    pub fn elapsed(&self) -> u64 {
        self.count
    }

    /// Period between ticks.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Checks if the timer is counting.
    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Starts counting from the current value.
    ///
    /// The first tick lands one full period from now. Starting a running
    /// timer has no effect.
    #[instrument(skip(self), fields(count = self.count))]
    pub fn start(&mut self) {
        if self.interval.is_some() {
            return;
        }
        let mut interval = interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
        self.interval = Some(interval);
        debug!("Timer started");
    }

    /// Stops counting. Stopping a stopped timer has no effect.
    #[instrument(skip(self), fields(count = self.count))]
    pub fn stop(&mut self) {
        if self.interval.take().is_some() {
            debug!("Timer stopped");
        }
    }

    /// Sets the count back to zero and starts counting again.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.interval = None;
        self.count = 0;
        self.start();
    }

    /// Waits for the next tick and counts it.
    ///
    /// Never resolves while the timer is stopped. Cancel-safe: dropping the
    /// future before it resolves neither loses nor double-counts a tick.
    pub async fn tick(&mut self) -> u64 {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
                self.count += 1;
                self.count
            }
            None => std::future::pending().await,
        }
    }
}
