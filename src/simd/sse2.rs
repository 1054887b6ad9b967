//! SSE2 butterfly pass kernels: 4 lanes of `f32`, 2 lanes of `f64`.
//!
//! SSE2 is part of the x86_64 baseline, so these are always safe to call
//! on that target; on 32-bit x86 the caller only reaches here after
//! `detect_simd()` confirmed the feature at runtime.
//!
//! Only unaligned load/store intrinsics are used. The reference C header
//! keeps separate aligned/unaligned entry points per array; measured
//! unaligned SSE2/AVX throughput on modern x86 is indistinguishable from
//! aligned for this access pattern, so this crate collapses them to one
//! kernel per width (documented simplification, see DESIGN.md).

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// One butterfly pass of size `n = 2*h` over `c` contiguous blocks of
/// `f32`, stride 1, using 4-lane SSE2. `tr`/`ti` must hold at least `h`
/// precomputed twiddles. `h` must be a multiple of 4.
///
/// # Safety
/// Caller must have confirmed `sse2` is available (`detect_simd`).
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn butterfly_pass_f32x4(
    h: usize,
    c: usize,
    n: usize,
    real: &mut [f32],
    imag: &mut [f32],
    tr: &[f32],
    ti: &[f32],
) {
    debug_assert_eq!(h % 4, 0);
    for block in 0..c {
        let base = block * n;
        let (lr, hr) = real[base..base + n].split_at_mut(h);
        let (li, hi) = imag[base..base + n].split_at_mut(h);
        let mut d = 0;
        while d < h {
            let c4 = _mm_loadu_ps(tr.as_ptr().add(d));
            let s4 = _mm_loadu_ps(ti.as_ptr().add(d));
            let xl = _mm_loadu_ps(lr.as_ptr().add(d));
            let yl = _mm_loadu_ps(li.as_ptr().add(d));
            let xr = _mm_loadu_ps(hr.as_ptr().add(d));
            let yr = _mm_loadu_ps(hi.as_ptr().add(d));
            let x = _mm_sub_ps(_mm_mul_ps(c4, xr), _mm_mul_ps(s4, yr));
            let y = _mm_add_ps(_mm_mul_ps(s4, xr), _mm_mul_ps(c4, yr));
            _mm_storeu_ps(lr.as_mut_ptr().add(d), _mm_add_ps(xl, x));
            _mm_storeu_ps(li.as_mut_ptr().add(d), _mm_add_ps(yl, y));
            _mm_storeu_ps(hr.as_mut_ptr().add(d), _mm_sub_ps(xl, x));
            _mm_storeu_ps(hi.as_mut_ptr().add(d), _mm_sub_ps(yl, y));
            d += 4;
        }
    }
}

/// Same as [`butterfly_pass_f32x4`] but for 2-lane `f64`. `h` must be a
/// multiple of 2.
///
/// # Safety
/// Caller must have confirmed `sse2` is available (`detect_simd`).
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn butterfly_pass_f64x2(
    h: usize,
    c: usize,
    n: usize,
    real: &mut [f64],
    imag: &mut [f64],
    tr: &[f64],
    ti: &[f64],
) {
    debug_assert_eq!(h % 2, 0);
    for block in 0..c {
        let base = block * n;
        let (lr, hr) = real[base..base + n].split_at_mut(h);
        let (li, hi) = imag[base..base + n].split_at_mut(h);
        let mut d = 0;
        while d < h {
            let c2 = _mm_loadu_pd(tr.as_ptr().add(d));
            let s2 = _mm_loadu_pd(ti.as_ptr().add(d));
            let xl = _mm_loadu_pd(lr.as_ptr().add(d));
            let yl = _mm_loadu_pd(li.as_ptr().add(d));
            let xr = _mm_loadu_pd(hr.as_ptr().add(d));
            let yr = _mm_loadu_pd(hi.as_ptr().add(d));
            let x = _mm_sub_pd(_mm_mul_pd(c2, xr), _mm_mul_pd(s2, yr));
            let y = _mm_add_pd(_mm_mul_pd(s2, xr), _mm_mul_pd(c2, yr));
            _mm_storeu_pd(lr.as_mut_ptr().add(d), _mm_add_pd(xl, x));
            _mm_storeu_pd(li.as_mut_ptr().add(d), _mm_add_pd(yl, y));
            _mm_storeu_pd(hr.as_mut_ptr().add(d), _mm_sub_pd(xl, x));
            _mm_storeu_pd(hi.as_mut_ptr().add(d), _mm_sub_pd(yl, y));
            d += 2;
        }
    }
}
