//! Damped Hooke springs between particle pairs, with a contact rule.

use crate::float::Float;
use crate::particle::Particle;

/// Separation below which a spring stops pushing and instead reflects its
/// endpoints' velocities along the connecting axis (self-collision guard).
pub const CONTACT_THRESHOLD: f32 = 0.1;

/// A spring between two particles, stored as indices into the body's
/// particle arena.
///
/// Undirected: both endpoints receive equal-and-opposite force. The rest
/// length is captured once at construction and never recomputed.
#[derive(Clone, Debug)]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
    pub stiffness: F,
    pub damping: F,
}

impl<F: Float> Spring<F> {
    /// Create a spring with an explicit rest length.
    pub fn new(a: usize, b: usize, rest_length: F, stiffness: F, damping: F) -> Self {
        Spring { a, b, rest_length, stiffness, damping }
    }

    /// Create a spring whose rest length is the endpoints' current distance.
    pub fn from_particles(
        a: usize,
        b: usize,
        particles: &[Particle<F>],
        stiffness: F,
        damping: F,
    ) -> Self {
        let rest_length = particles[a].pos.distance(particles[b].pos);
        Spring { a, b, rest_length, stiffness, damping }
    }

    /// Accumulate this spring's contribution into both endpoints.
    ///
    /// Normally adds the damped Hooke force to the endpoints' force
    /// accumulators. When the endpoints sit closer than
    /// [`CONTACT_THRESHOLD`], the spring instead reflects each endpoint's
    /// velocity along the connecting axis, each using its own projection.
    /// Two contact-branch springs sharing a particle in the same sub-step
    /// produce an evaluation-order-dependent result; tolerated as an
    /// approximation.
    pub fn apply(&self, particles: &mut [Particle<F>]) {
        let pos_a = particles[self.a].pos;
        let pos_b = particles[self.b].pos;
        let vel_a = particles[self.a].vel;
        let vel_b = particles[self.b].vel;

        let relative = pos_b - pos_a;
        let length = relative.length();
        if length.is_near_zero(F::from_f32(1e-10)) {
            return; // coincident endpoints, no defined axis
        }
        let unit = relative.scale(F::one() / length);

        if length < F::from_f32(CONTACT_THRESHOLD) {
            let along_a = vel_a.dot(unit);
            particles[self.a].vel = vel_a - unit.scale(F::two() * along_a);
            let along_b = vel_b.dot(unit);
            particles[self.b].vel = vel_b + unit.scale(F::two() * along_b);
        } else {
            let rel_vel = vel_b - vel_a;
            let magnitude = (length - self.rest_length) * self.stiffness
                + unit.dot(rel_vel) * self.damping;
            let force = unit.scale(magnitude);

            particles[self.a].force = particles[self.a].force + force;
            particles[self.b].force = particles[self.b].force - force;
        }
    }
}
