//! Fixed-timestep accumulator.
//!
//! The render loop measures real elapsed time and asks how many fixed
//! simulation ticks to run. Leftover time carries over to the next frame.
//! When the game falls too far behind (window dragged, debugger paused) the
//! backlog is dropped instead of being replayed all at once.

use std::time::Duration;

/// Default cap on ticks run for a single frame
pub const DEFAULT_MAX_STEPS: u32 = 5;

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: Duration,
    accumulator: Duration,
    max_steps: u32,
}

impl FixedTimestep {
    /// # Panics
    ///
    /// Panics if `step` is zero.
    pub fn new(step: Duration) -> Self {
        assert!(!step.is_zero(), "timestep must be positive");
        FixedTimestep {
            step,
            accumulator: Duration::ZERO,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Timestep for a tick rate in Hz. A rate of zero is treated as 1 Hz.
    pub fn from_rate(ticks_per_second: u32) -> Self {
        Self::new(Duration::from_secs(1) / ticks_per_second.max(1))
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Adds real elapsed time and returns how many ticks to simulate.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }

        if self.accumulator >= self.step {
            log::debug!("Dropping {:?} of simulation backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        steps
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    pub fn step_secs(&self) -> f32 {
        self.step.as_secs_f32()
    }
}
