//! Runtime SIMD capability probe (§4.1) and the width-specialized butterfly
//! back-ends (§4.11) dispatched from it.
//!
//! The probe never executes an instruction whose availability it hasn't
//! confirmed: on x86/x86_64 it goes through `std::arch`'s own
//! `is_x86_feature_detected!`, which itself only ever issues `CPUID`/`XGETBV`,
//! never the ISA extension it's testing for.

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod avx;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod sse2;

#[cfg(feature = "simd-cache")]
use once_cell::sync::OnceCell;

bitflags::bitflags! {
    /// Which SIMD widths are safe to execute on this process, for both
    /// `f32` (`F4`/`F8`/`F16`) and `f64` (`D2`/`D4`/`D8`) lanes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SimdMask: u32 {
        const F4  = 1 << 0;
        const F8  = 1 << 1;
        const F16 = 1 << 2;
        const D2  = 1 << 3;
        const D4  = 1 << 4;
        const D8  = 1 << 5;
    }
}

#[cfg(feature = "simd-cache")]
static SIMD_CACHE: OnceCell<u32> = OnceCell::new();

/// Detects which SIMD widths the current CPU and OS both support.
///
/// With the `simd-cache` feature (default, requires `std`), the first call
/// anywhere in the process computes and caches the mask in a
/// `once_cell::sync::OnceCell`; later calls are lock-free reads. Without
/// that feature the mask is recomputed on every call, which is correct,
/// just slower — the process-global cache is the only optional shortcut.
#[inline]
pub fn detect_simd() -> SimdMask {
    #[cfg(feature = "simd-cache")]
    {
        SimdMask::from_bits_truncate(*SIMD_CACHE.get_or_init(detect_simd_uncached_bits))
    }
    #[cfg(not(feature = "simd-cache"))]
    {
        SimdMask::from_bits_truncate(detect_simd_uncached_bits())
    }
}

fn detect_simd_uncached_bits() -> u32 {
    #[cfg(not(feature = "simd"))]
    {
        0
    }
    #[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
    {
        let mut mask = SimdMask::empty();
        if is_x86_feature_detected!("sse2") {
            mask |= SimdMask::F4 | SimdMask::D2;
        }
        if is_x86_feature_detected!("avx") {
            mask |= SimdMask::F8 | SimdMask::D4;
        }
        // AVX-512 is recognized but has no concrete kernel yet (see
        // src/simd/mod.rs dispatch table below) — TODO: add F16/D8 kernels
        // and flip these bits on once `avx512f` is exercised in CI.
        mask.bits()
    }
    #[cfg(all(feature = "simd", not(any(target_arch = "x86", target_arch = "x86_64"))))]
    {
        0
    }
}

/// Widest `f32` lane count this process can run, or `None` for scalar-only.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub(crate) fn widest_f32_lanes(mask: SimdMask) -> Option<usize> {
    if mask.contains(SimdMask::F8) {
        Some(8)
    } else if mask.contains(SimdMask::F4) {
        Some(4)
    } else {
        None
    }
}

/// Widest `f64` lane count this process can run, or `None` for scalar-only.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub(crate) fn widest_f64_lanes(mask: SimdMask) -> Option<usize> {
    if mask.contains(SimdMask::D4) {
        Some(4)
    } else if mask.contains(SimdMask::D2) {
        Some(2)
    } else {
        None
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub(crate) use avx::{butterfly_pass_f32x8, butterfly_pass_f64x4};
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub(crate) use sse2::{butterfly_pass_f32x4, butterfly_pass_f64x2};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
