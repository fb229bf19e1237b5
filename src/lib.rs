//! 2D soft-body (mass-spring-damper) drop simulation.
//!
//! `softfall` models a rectangular lattice of unit-mass points connected by
//! damped Hooke springs to their immediate and diagonal neighbours, drops the
//! body under gravity onto the ground plane at y = 0, and records particle
//! trajectories frame by frame for later playback or plotting.
//!
//! # Features
//!
//! - **Explicit integration**: semi-implicit trapezoidal step with elastic
//!   ground reflection (policy selectable via [`GroundResponse`])
//! - **Damped springs**: Hooke + relative-velocity damping, with a
//!   velocity-reflection contact rule for near-coincident endpoints
//! - **Threshold topology**: springs generated from the initial layout by a
//!   pairwise distance test, fixed for the whole run
//! - **Recordable**: frame snapshots via the [`FrameRecorder`] trait;
//!   [`TrajectoryWriter`] emits the `width,height,frames` header format
//! - **Deterministic**: the trajectory is a pure function of [`SimConfig`]
//! - **`no_std` compatible**: the physics core needs only `alloc`; file
//!   output sits behind the default `std` feature

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod float;
pub mod vec;
pub mod particle;
pub mod spring;
pub mod config;
pub mod grid;
pub mod sim;
pub mod recorder;
#[cfg(feature = "std")]
pub mod output;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::Particle;
pub use spring::Spring;
pub use config::{SimConfig, GroundResponse};
pub use grid::SoftGrid;
pub use sim::Simulation;
pub use recorder::{FrameRecorder, NoOpRecorder, MemoryRecorder};
#[cfg(feature = "std")]
pub use output::TrajectoryWriter;
pub use error::SimError;
