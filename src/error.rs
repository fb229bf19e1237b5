//! Error types for simulation setup and output.

use core::fmt;

/// Errors that can occur while building a simulation or writing frames.
///
/// The physics itself is unconditional numerics over fixed-size arrays and
/// cannot fail; everything here is raised at construction time or by the
/// output stream.
#[derive(Debug)]
pub enum SimError {
    /// Both grid dimensions must be at least 1.
    EmptyGrid { width: usize, height: usize },
    /// Timestep must be positive and finite.
    InvalidTimestep,
    /// At least one sub-step must run between recorded frames.
    ZeroSubsteps,
    /// The output stream failed; there is no meaningful partial result.
    #[cfg(feature = "std")]
    Io(std::io::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::EmptyGrid { width, height } => {
                write!(f, "grid must be at least 1x1 (got {}x{})", width, height)
            }
            SimError::InvalidTimestep => write!(f, "timestep must be positive and finite"),
            SimError::ZeroSubsteps => write!(f, "substeps_per_frame must be at least 1"),
            #[cfg(feature = "std")]
            SimError::Io(e) => write!(f, "output stream error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for SimError {
    fn from(e: std::io::Error) -> Self {
        SimError::Io(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Io(e) => Some(e),
            _ => None,
        }
    }
}
