// src/element.rs

use core::ops::{Add, Mul, Neg, Sub};

#[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
use crate::simd::{self, SimdMask};

/// The real floating-point field a single transform is instantiated over.
///
/// All of +, -, *, unary -, and the literals 0/1 are required; nothing
/// else is. The engine never calls `sin`/`cos`/`sqrt` on `T` at runtime —
/// twiddles are built from tabulated or polynomial seeds using only these
/// operations (see [`crate::twiddle`]), so `T` does not need a transcendental
/// function library.
pub trait FftFloat:
    Copy
    + Clone
    + PartialEq
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;

    /// Lossy conversion used only to seed compile-time-derived constants
    /// (twiddle table literals, the leaf-8 `c = sqrt(2)/2` constant).
    fn from_f64(v: f64) -> Self;

    #[inline]
    fn is_one(self) -> bool {
        self == Self::one()
    }

    /// Attempts a SIMD-accelerated butterfly pass for this element type;
    /// returns `false` (leaving `real`/`imag` untouched) when no kernel
    /// matches `h`'s alignment or this type has none. The generic scalar
    /// path in [`crate::butterfly`] is always correct as a fallback.
    #[inline]
    #[allow(unused_variables)]
    fn try_simd_butterfly_pass(
        mask: crate::simd::SimdMask,
        h: usize,
        c: usize,
        n: usize,
        real: &mut [Self],
        imag: &mut [Self],
        tr: &[Self],
        ti: &[Self],
    ) -> bool {
        false
    }
}

impl FftFloat for f32 {
    #[inline]
    fn zero() -> Self {
        0.0
    }
    #[inline]
    fn one() -> Self {
        1.0
    }
    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
    #[inline]
    fn try_simd_butterfly_pass(
        mask: SimdMask,
        h: usize,
        c: usize,
        n: usize,
        real: &mut [Self],
        imag: &mut [Self],
        tr: &[Self],
        ti: &[Self],
    ) -> bool {
        unsafe {
            if mask.contains(SimdMask::F8) && h % 8 == 0 {
                simd::butterfly_pass_f32x8(h, c, n, real, imag, tr, ti);
                true
            } else if mask.contains(SimdMask::F4) && h % 4 == 0 {
                simd::butterfly_pass_f32x4(h, c, n, real, imag, tr, ti);
                true
            } else {
                false
            }
        }
    }
}

impl FftFloat for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }
    #[inline]
    fn one() -> Self {
        1.0
    }
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
    #[inline]
    fn try_simd_butterfly_pass(
        mask: SimdMask,
        h: usize,
        c: usize,
        n: usize,
        real: &mut [Self],
        imag: &mut [Self],
        tr: &[Self],
        ti: &[Self],
    ) -> bool {
        unsafe {
            if mask.contains(SimdMask::D4) && h % 4 == 0 {
                simd::butterfly_pass_f64x4(h, c, n, real, imag, tr, ti);
                true
            } else if mask.contains(SimdMask::D2) && h % 2 == 0 {
                simd::butterfly_pass_f64x2(h, c, n, real, imag, tr, ti);
                true
            } else {
                false
            }
        }
    }
}
