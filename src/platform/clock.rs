//! Fixed timestep accumulator
//!
//! The platform frame callback reports elapsed wall time; the clock answers
//! how many simulation steps are due.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
    last_time_ms: Option<f64>,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedTimestep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps,
            accumulator: 0.0,
            last_time_ms: None,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Feed a frame timestamp (milliseconds, as given to rAF callbacks) and
    /// return the number of steps to run. The first frame after a reset runs
    /// exactly one step.
    pub fn advance_to(&mut self, time_ms: f64) -> u32 {
        let dt = match self.last_time_ms {
            Some(last) => ((time_ms - last) / 1000.0) as f32,
            None => self.step,
        };
        self.last_time_ms = Some(time_ms);
        self.advance(dt)
    }

    /// Add elapsed seconds and return the number of steps due
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut steps = 0;
        // Small epsilon so a frame of exactly one step is never lost to rounding
        while self.accumulator + 1e-6 >= self.step && steps < self.max_substeps {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps == self.max_substeps {
            // Drop the backlog rather than spiral
            self.accumulator = 0.0;
        }
        self.accumulator = self.accumulator.max(0.0);
        steps
    }

    /// Forget accumulated time, e.g. while paused or after a restart
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_time_ms = None;
    }
}
