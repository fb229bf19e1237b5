//! Simulation driver: builds the body and runs the frame loop.

use crate::config::SimConfig;
use crate::error::SimError;
use crate::float::Float;
use crate::grid::SoftGrid;
use crate::recorder::FrameRecorder;

/// Owns a [`SoftGrid`] and its configuration and drives the recorded run.
///
/// The whole trajectory is a deterministic function of the configuration:
/// identical configs produce bit-identical runs.
pub struct Simulation<F: Float> {
    grid: SoftGrid<F>,
    config: SimConfig<F>,
}

impl<F: Float> Simulation<F> {
    /// Validate the configuration and build the body at its drop position.
    pub fn new(config: SimConfig<F>) -> Result<Self, SimError> {
        let grid = SoftGrid::new(&config)?;
        Ok(Simulation { grid, config })
    }

    /// Run the configured number of frames, recording each one.
    ///
    /// Each frame is `substeps_per_frame` physics sub-steps followed by
    /// one recorder call. A recorder failure aborts the run.
    pub fn run<R: FrameRecorder<F>>(&mut self, recorder: &mut R) -> Result<(), SimError> {
        for _ in 0..self.config.frames {
            self.grid.advance_frame(&self.config);
            recorder.record_frame(self.grid.particles())?;
        }
        Ok(())
    }

    /// Advance a single frame without recording.
    pub fn step_frame(&mut self) {
        self.grid.advance_frame(&self.config);
    }

    pub fn grid(&self) -> &SoftGrid<F> {
        &self.grid
    }

    pub fn config(&self) -> &SimConfig<F> {
        &self.config
    }
}
