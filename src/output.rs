//! Trajectory file emission.
//!
//! The format is one header line `width,height,frames` followed by one
//! line per frame: `x0,y0,x1,y1,...,` — every particle position in index
//! order, comma-separated, with a trailing comma before the newline.

use crate::error::SimError;
use crate::float::Float;
use crate::particle::Particle;
use crate::recorder::FrameRecorder;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the trajectory format to any [`Write`] sink.
///
/// The header is emitted at construction; one position line per
/// [`record_frame`](FrameRecorder::record_frame) call after that.
pub struct TrajectoryWriter<W: Write> {
    inner: W,
}

impl<W: Write> TrajectoryWriter<W> {
    /// Wrap a sink and write the header line.
    pub fn new(mut inner: W, width: usize, height: usize, frames: usize) -> Result<Self, SimError> {
        writeln!(inner, "{},{},{}", width, height, frames)?;
        Ok(TrajectoryWriter { inner })
    }

    /// Flush and return the underlying sink.
    pub fn finish(mut self) -> Result<W, SimError> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl TrajectoryWriter<BufWriter<File>> {
    /// Create the trajectory file at `path` and write the header.
    pub fn create<P: AsRef<Path>>(
        path: P,
        width: usize,
        height: usize,
        frames: usize,
    ) -> Result<Self, SimError> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file), width, height, frames)
    }
}

impl<F: Float, W: Write> FrameRecorder<F> for TrajectoryWriter<W> {
    fn record_frame(&mut self, particles: &[Particle<F>]) -> Result<(), SimError> {
        for p in particles {
            write!(self.inner, "{},{},", p.pos.x, p.pos.y)?;
        }
        writeln!(self.inner)?;
        Ok(())
    }
}
