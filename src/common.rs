// src/common.rs

use core::fmt;

/// Error taxonomy for the engine's entry points.
///
/// Inner routines are infallible given their preconditions (see the crate
/// docs): every failure mode the engine can hit is one of these two.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum FftError {
    /// Rejected aliasing, a zero destination stride, or a non-power-of-two
    /// size while the `npot` feature is disabled.
    InvalidArgument,
    /// The Bluestein (NPOT) scratch allocation failed.
    OutOfMemory,
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::InvalidArgument => write!(f, "invalid argument to fft transform"),
            FftError::OutOfMemory => write!(f, "allocation failure while computing fft"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}
