//! AVX butterfly pass kernels: 8 lanes of `f32`, 4 lanes of `f64`.
//!
//! See `sse2.rs` for why only unaligned load/store intrinsics are used.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// One butterfly pass of size `n = 2*h` over `c` contiguous blocks of
/// `f32`, stride 1, using 8-lane AVX. `h` must be a multiple of 8.
///
/// # Safety
/// Caller must have confirmed `avx` is available (`detect_simd`).
#[target_feature(enable = "avx")]
pub(crate) unsafe fn butterfly_pass_f32x8(
    h: usize,
    c: usize,
    n: usize,
    real: &mut [f32],
    imag: &mut [f32],
    tr: &[f32],
    ti: &[f32],
) {
    debug_assert_eq!(h % 8, 0);
    for block in 0..c {
        let base = block * n;
        let (lr, hr) = real[base..base + n].split_at_mut(h);
        let (li, hi) = imag[base..base + n].split_at_mut(h);
        let mut d = 0;
        while d < h {
            let c8 = _mm256_loadu_ps(tr.as_ptr().add(d));
            let s8 = _mm256_loadu_ps(ti.as_ptr().add(d));
            let xl = _mm256_loadu_ps(lr.as_ptr().add(d));
            let yl = _mm256_loadu_ps(li.as_ptr().add(d));
            let xr = _mm256_loadu_ps(hr.as_ptr().add(d));
            let yr = _mm256_loadu_ps(hi.as_ptr().add(d));
            let x = _mm256_sub_ps(_mm256_mul_ps(c8, xr), _mm256_mul_ps(s8, yr));
            let y = _mm256_add_ps(_mm256_mul_ps(s8, xr), _mm256_mul_ps(c8, yr));
            _mm256_storeu_ps(lr.as_mut_ptr().add(d), _mm256_add_ps(xl, x));
            _mm256_storeu_ps(li.as_mut_ptr().add(d), _mm256_add_ps(yl, y));
            _mm256_storeu_ps(hr.as_mut_ptr().add(d), _mm256_sub_ps(xl, x));
            _mm256_storeu_ps(hi.as_mut_ptr().add(d), _mm256_sub_ps(yl, y));
            d += 8;
        }
    }
}

/// Same as [`butterfly_pass_f32x8`] but for 4-lane `f64`. `h` must be a
/// multiple of 4.
///
/// # Safety
/// Caller must have confirmed `avx` is available (`detect_simd`).
#[target_feature(enable = "avx")]
pub(crate) unsafe fn butterfly_pass_f64x4(
    h: usize,
    c: usize,
    n: usize,
    real: &mut [f64],
    imag: &mut [f64],
    tr: &[f64],
    ti: &[f64],
) {
    debug_assert_eq!(h % 4, 0);
    for block in 0..c {
        let base = block * n;
        let (lr, hr) = real[base..base + n].split_at_mut(h);
        let (li, hi) = imag[base..base + n].split_at_mut(h);
        let mut d = 0;
        while d < h {
            let c4 = _mm256_loadu_pd(tr.as_ptr().add(d));
            let s4 = _mm256_loadu_pd(ti.as_ptr().add(d));
            let xl = _mm256_loadu_pd(lr.as_ptr().add(d));
            let yl = _mm256_loadu_pd(li.as_ptr().add(d));
            let xr = _mm256_loadu_pd(hr.as_ptr().add(d));
            let yr = _mm256_loadu_pd(hi.as_ptr().add(d));
            let x = _mm256_sub_pd(_mm256_mul_pd(c4, xr), _mm256_mul_pd(s4, yr));
            let y = _mm256_add_pd(_mm256_mul_pd(s4, xr), _mm256_mul_pd(c4, yr));
            _mm256_storeu_pd(lr.as_mut_ptr().add(d), _mm256_add_pd(xl, x));
            _mm256_storeu_pd(li.as_mut_ptr().add(d), _mm256_add_pd(yl, y));
            _mm256_storeu_pd(hr.as_mut_ptr().add(d), _mm256_sub_pd(xl, x));
            _mm256_storeu_pd(hi.as_mut_ptr().add(d), _mm256_sub_pd(yl, y));
            d += 4;
        }
    }
}
