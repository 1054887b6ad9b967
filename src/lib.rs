#![no_std]

// Enables the standard library only for tests and the `std` feature (for
// `std::error::Error` and the SIMD capability cache), so the crate still
// builds `no_std` by default for embedded/kernel callers.
#[cfg(any(feature = "std", test))]
extern crate std;

extern crate alloc;

mod bitrev;
mod bluestein;
mod butterfly;
mod config;
mod element;
mod entry;
mod interleave;
mod leaf8;
mod pot;
mod simd;
mod twiddle;

pub mod common;

pub use common::FftError;
pub use element::FftFloat;
pub use entry::{
    fft_forward, fft_forward_complex, fft_forward_from, fft_forward_interleaved, fft_forward_interleaved_from,
    fft_forward_strided, fft_forward_strided_from, fft_inverse, fft_inverse_complex, fft_inverse_from,
    fft_inverse_interleaved, fft_inverse_interleaved_from, fft_inverse_strided, fft_inverse_strided_from,
};
pub use simd::{detect_simd, SimdMask};
