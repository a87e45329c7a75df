//! Fixed-step frame driver
//!
//! Drives one or more scenes through the frame contract: `begin` once, then as
//! many fixed `update` steps as the elapsed time calls for, then `render` with
//! the leftover fraction of a step as the interpolation factor.

use crate::{
    core::config::{ConfigError, GameConfig},
    foundation::time::FixedStep,
    render::Renderer,
    state::systems::{SceneSystems, SystemsError},
};

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameSummary {
    /// Fixed steps run
    pub steps: u32,
    /// Child update faults reported across all steps and scenes
    pub faults: usize,
    /// Interpolation factor passed to render
    pub interpolation: f32,
}

/// Fixed-step scheduler
#[derive(Debug, Clone)]
pub struct FixedStepLoop {
    fixed: FixedStep,
    frames: u64,
}

impl FixedStepLoop {
    /// Create a loop stepping `step` seconds at a time
    pub fn new(step: f32, max_steps_per_frame: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            fixed: FixedStep::new(step, max_steps_per_frame)?,
            frames: 0,
        })
    }

    /// Create a loop from the game's step settings
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::new(config.fixed_step, config.max_steps_per_frame)
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame for a single scene
    pub fn tick(
        &mut self,
        systems: &mut SceneSystems,
        timestamp: f64,
        frame_delta: f32,
        renderer: &mut dyn Renderer,
    ) -> Result<FrameSummary, SystemsError> {
        self.tick_all(std::slice::from_mut(systems), timestamp, frame_delta, renderer)
    }

    /// Run one frame for several scenes, in slice order
    ///
    /// Every scene sees the same number of steps. Each phase completes for all
    /// scenes before the next begins.
    pub fn tick_all(
        &mut self,
        scenes: &mut [SceneSystems],
        timestamp: f64,
        frame_delta: f32,
        renderer: &mut dyn Renderer,
    ) -> Result<FrameSummary, SystemsError> {
        for systems in scenes.iter_mut() {
            systems.begin(timestamp, frame_delta)?;
        }

        let steps = self.fixed.advance(frame_delta);
        let step = self.fixed.step();
        let mut faults = 0;

        for _ in 0..steps {
            for systems in scenes.iter_mut() {
                faults += systems.update(step, step)?.faults.len();
            }
        }

        let interpolation = self.fixed.interpolation();
        for systems in scenes.iter_mut() {
            systems.render(interpolation, renderer)?;
        }

        self.frames += 1;
        log::trace!("Frame {}: {} step(s), {} fault(s)", self.frames, steps, faults);

        Ok(FrameSummary {
            steps,
            faults,
            interpolation,
        })
    }
}
