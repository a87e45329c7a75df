//! Time management utilities

use std::time::Instant;

use crate::config::ConfigError;

/// High-precision timer for frame timing
pub struct Timer {
    start: Instant,
    last_frame: Instant,
    delta_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            delta_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Milliseconds since the timer was created
    pub fn timestamp_ms(&self) -> f64 {
        self.last_frame.duration_since(self.start).as_secs_f64() * 1000.0
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Fixed-step accumulator
///
/// Converts variable frame deltas into a whole number of fixed simulation
/// steps plus an interpolation factor for rendering between steps.
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    max_steps_per_frame: u32,
    accumulator: f32,
}

impl FixedStep {
    /// Create an accumulator producing steps of `step` seconds
    ///
    /// The step must be positive and finite and at least one step per frame
    /// must be allowed.
    pub fn new(step: f32, max_steps_per_frame: u32) -> Result<Self, ConfigError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(ConfigError::Invalid(format!("fixed step must be positive, got {}", step)));
        }
        if max_steps_per_frame == 0 {
            return Err(ConfigError::Invalid("max steps per frame must be at least 1".to_string()));
        }
        Ok(Self {
            step,
            max_steps_per_frame,
            accumulator: 0.0,
        })
    }

    /// Fixed step length in seconds
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Add a frame delta and return how many fixed steps are due
    ///
    /// When more than `max_steps_per_frame` steps are due the backlog is
    /// dropped so a slow frame cannot spiral.
    pub fn advance(&mut self, frame_delta: f32) -> u32 {
        self.accumulator += frame_delta.max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps_per_frame {
            self.accumulator -= self.step;
            steps += 1;
        }

        if self.accumulator >= self.step {
            log::debug!(
                "Dropping {:.4}s of simulation backlog after {} steps",
                self.accumulator,
                steps
            );
            self.accumulator %= self.step;
        }

        steps
    }

    /// Fraction of a step left in the accumulator, in `[0, 1)`
    pub fn interpolation(&self) -> f32 {
        if self.step > 0.0 {
            self.accumulator / self.step
        } else {
            0.0
        }
    }
}
