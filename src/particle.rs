//! Mass points making up the soft body.

use crate::config::GroundResponse;
use crate::float::Float;
use crate::vec::Vec2;

/// A unit-mass point with an explicit force accumulator.
///
/// Springs add into `force` between integration steps; the accumulator is
/// reset to the gravity-only state after each step.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub vel: Vec2<F>,
    pub force: Vec2<F>,
}

impl<F: Float> Particle<F> {
    /// Create a particle at rest with only gravity acting on it.
    pub fn new(pos: Vec2<F>, gravity: F) -> Self {
        Particle {
            pos,
            vel: Vec2::zero(),
            force: Vec2::new(F::zero(), -gravity),
        }
    }

    /// Reset the force accumulator to the gravity-only state.
    pub fn reset_forces(&mut self, gravity: F) {
        self.force = Vec2::new(F::zero(), -gravity);
    }

    /// Advance one timestep using the average of old and new velocity.
    ///
    /// If the step ends below the ground plane the vertical velocity is
    /// inverted; [`GroundResponse::ReflectAndRepel`] additionally replaces
    /// the force accumulator with a unit upward force.
    pub fn integrate(&mut self, dt: F, ground: GroundResponse) {
        let new_vel = self.vel + self.force.scale(dt);
        self.pos = self.pos + (self.vel + new_vel).scale(F::half() * dt);
        self.vel = new_vel;

        if self.pos.y < F::zero() {
            self.vel.y = -self.vel.y;
            if ground == GroundResponse::ReflectAndRepel {
                self.force = Vec2::new(F::zero(), F::one());
            }
        }
    }

    /// Kinetic energy, `|v|^2 / 2` for unit mass.
    pub fn kinetic_energy(&self) -> F {
        F::half() * self.vel.length_sq()
    }
}
