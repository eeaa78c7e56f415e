//! Fixed-interval tick source

use std::time::Duration;

/// Messages driving the app loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Advance the simulation by one timestep
    Tick,
    /// State changed; paint it
    RedrawRequested,
}

/// Accumulates elapsed time and releases it as whole ticks
#[derive(Debug, Clone)]
pub struct TickTimer {
    interval: Duration,
    max_ticks_per_frame: u32,
    accumulator: Duration,
}

impl TickTimer {
    /// `interval` is clamped to at least 1ms, `max_ticks_per_frame` to at least 1.
    pub fn new(interval: Duration, max_ticks_per_frame: u32) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            max_ticks_per_frame: max_ticks_per_frame.max(1),
            accumulator: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time carried over toward the next tick
    pub fn pending(&self) -> Duration {
        self.accumulator
    }

    /// Add elapsed time and return how many ticks are due
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.interval && ticks < self.max_ticks_per_frame {
            self.accumulator -= self.interval;
            ticks += 1;
        }

        // Drop backlog past the cap (window was dragged, minimized, etc.)
        if self.accumulator >= self.interval {
            log::debug!(
                "Dropping {:?} of tick backlog after {} ticks",
                self.accumulator,
                ticks
            );
            self.accumulator = Duration::ZERO;
        }

        ticks
    }

    /// One `Event::Tick` per due tick
    pub fn events(&mut self, elapsed: Duration) -> impl Iterator<Item = Event> + use<> {
        let due = self.advance(elapsed);
        (0..due).map(|_| Event::Tick)
    }
}
