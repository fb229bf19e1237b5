//! Frame recorder trait for capturing simulation snapshots.

use crate::error::SimError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec;

/// Receives one snapshot of the particle arena per recorded frame.
///
/// The simulation hands the recorder the full arena in index order after
/// each frame's sub-steps. A failed recording aborts the run: the
/// trajectory file is the simulation's only product.
pub trait FrameRecorder<F: Float> {
    /// Record one frame. Particles are in grid-row-major index order.
    fn record_frame(&mut self, particles: &[Particle<F>]) -> Result<(), SimError>;
}

/// A recorder that discards every frame. Use for headless stepping and
/// benchmarks.
pub struct NoOpRecorder;

impl<F: Float> FrameRecorder<F> for NoOpRecorder {
    fn record_frame(&mut self, _particles: &[Particle<F>]) -> Result<(), SimError> {
        Ok(())
    }
}

/// Collects frame position snapshots in memory.
pub struct MemoryRecorder<F: Float> {
    pub frames: Vec<Vec<Vec2<F>>>,
}

impl<F: Float> MemoryRecorder<F> {
    pub fn new() -> Self {
        MemoryRecorder { frames: Vec::new() }
    }
}

impl<F: Float> Default for MemoryRecorder<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> FrameRecorder<F> for MemoryRecorder<F> {
    fn record_frame(&mut self, particles: &[Particle<F>]) -> Result<(), SimError> {
        self.frames.push(particles.iter().map(|p| p.pos).collect());
        Ok(())
    }
}
