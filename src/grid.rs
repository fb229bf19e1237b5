//! The soft body: a rectangular particle lattice and its spring set.

use crate::config::SimConfig;
use crate::error::SimError;
use crate::float::Float;
use crate::particle::Particle;
use crate::spring::Spring;
use crate::vec::Vec2;
use alloc::vec::Vec;

/// Maximum initial separation for which two particles get connected by a
/// spring. At 1.5 lattice units this links immediate (distance 1) and
/// diagonal (distance sqrt 2) neighbours only.
pub const CONNECT_THRESHOLD: f32 = 1.5;

/// A `width x height` lattice of particles joined by springs.
///
/// Particle at (col, row) has index `row * width + col`; row 0 is the
/// bottom of the body, offset above the ground by the configured drop
/// height. The spring set is built once from the initial layout and never
/// changes.
pub struct SoftGrid<F: Float> {
    particles: Vec<Particle<F>>,
    springs: Vec<Spring<F>>,
    width: usize,
    height: usize,
}

impl<F: Float> SoftGrid<F> {
    /// Build the lattice and its spring set from a configuration.
    ///
    /// Every particle pair within [`CONNECT_THRESHOLD`] of each other in
    /// the initial layout gets a spring at its current separation; the
    /// pass is a one-time O(n^2) sweep over index pairs `i < j`.
    pub fn new(config: &SimConfig<F>) -> Result<Self, SimError> {
        if config.width == 0 || config.height == 0 {
            return Err(SimError::EmptyGrid {
                width: config.width,
                height: config.height,
            });
        }
        if !(config.dt > F::zero()) {
            return Err(SimError::InvalidTimestep);
        }
        if config.substeps_per_frame == 0 {
            return Err(SimError::ZeroSubsteps);
        }

        let width = config.width;
        let height = config.height;
        let size = width * height;

        let mut particles = Vec::with_capacity(size);
        for row in 0..height {
            for col in 0..width {
                let x = F::from_f32(col as f32);
                let y = F::from_f32(row as f32) + config.drop_height;
                particles.push(Particle::new(Vec2::new(x, y), config.gravity));
            }
        }

        let threshold = F::from_f32(CONNECT_THRESHOLD);
        let mut springs = Vec::new();
        for i in 0..size {
            for j in (i + 1)..size {
                if particles[i].pos.distance(particles[j].pos) < threshold {
                    springs.push(Spring::from_particles(
                        i,
                        j,
                        &particles,
                        config.stiffness,
                        config.damping,
                    ));
                }
            }
        }

        Ok(SoftGrid { particles, springs, width, height })
    }

    /// Advance one physics sub-step: all springs contribute, then every
    /// particle integrates and resets its force accumulator.
    pub fn step(&mut self, config: &SimConfig<F>) {
        for spring in self.springs.iter() {
            spring.apply(&mut self.particles);
        }
        for p in self.particles.iter_mut() {
            p.integrate(config.dt, config.ground_response);
            p.reset_forces(config.gravity);
        }
    }

    /// Advance one recorded frame's worth of sub-steps.
    pub fn advance_frame(&mut self, config: &SimConfig<F>) {
        for _ in 0..config.substeps_per_frame {
            self.step(config);
        }
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.width + col
    }

    pub fn position_at(&self, col: usize, row: usize) -> Vec2<F> {
        self.particles[self.index(col, row)].pos
    }

    /// The particle arena in index order.
    pub fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    /// The spring set, in construction order (pairs `i < j`).
    pub fn springs(&self) -> &[Spring<F>] {
        &self.springs
    }

    /// Snapshot of every particle position, in index order.
    pub fn positions(&self) -> Vec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }
}
