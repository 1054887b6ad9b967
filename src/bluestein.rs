//! NPOT (Bluestein / chirp-z) driver (§4.10).
//!
//! Any size `N` is rewritten as a length-`M` power-of-two convolution,
//! `M` the smallest power of two with `M >= 2N - 1` so the linear
//! convolution the chirp trick relies on never aliases. The per-sample
//! chirp angle `k^2 mod 2N` is built incrementally (`j += 2k+1 (mod 2N)`)
//! rather than squaring `k` directly, which would overflow long before `k`
//! gets anywhere near a size this engine is meant to handle.
//!
//! Scale is distributed as `(1/M, 1, scale)` across (forward-FFT of `a`,
//! forward-FFT of `b`, inverse-FFT of the product) rather than the more
//! obvious `(1, 1, scale/M)`: folding `1/M` into the first transform keeps
//! the pointwise product and the final inverse transform working on
//! values that are already back down near unit magnitude, instead of
//! carrying the full `M`-factor blowup through both.

use crate::common::FftError;
use crate::element::FftFloat;
use crate::pot::{fft_pot, Source};
use crate::twiddle::compute_twiddles_npot;

use alloc::vec::Vec;

fn next_pow2_at_least(x: usize) -> u32 {
    let mut log2m = 0u32;
    while (1usize << log2m) < x {
        log2m += 1;
    }
    log2m
}

fn try_zeroed_vec<T: FftFloat>(len: usize) -> Result<Vec<T>, FftError> {
    let mut v: Vec<T> = Vec::new();
    v.try_reserve_exact(len).map_err(|_| FftError::OutOfMemory)?;
    v.resize(len, T::zero());
    Ok(v)
}

/// Runs the length-`n` (arbitrary `n >= 1`) transform via Bluestein's
/// algorithm, writing the result into `dst_re`/`dst_im` (each exactly `n`
/// elements, stride 1). `src_re`/`src_im` follow [`Source`]'s same
/// null/in-place/external convention as the power-of-two driver.
pub(crate) fn fft_npot<T: FftFloat>(
    n: usize,
    src_re: Source<'_, T>,
    src_im: Source<'_, T>,
    dst_re: &mut [T],
    dst_im: &mut [T],
    forward: bool,
    scale: T,
) -> Result<(), FftError> {
    debug_assert_eq!(dst_re.len(), n);
    debug_assert_eq!(dst_im.len(), n);

    if n == 1 {
        let x_re = match src_re {
            Source::Zero => T::zero(),
            Source::Same => dst_re[0],
            Source::External(s, stride) => s[(0isize * stride) as usize],
        };
        let x_im = match src_im {
            Source::Zero => T::zero(),
            Source::Same => dst_im[0],
            Source::External(s, stride) => s[(0isize * stride) as usize],
        };
        dst_re[0] = x_re * scale;
        dst_im[0] = x_im * scale;
        return Ok(());
    }

    let two_n = 2 * n;
    let log2m = next_pow2_at_least(2 * n - 1);
    let m = 1usize << log2m;

    let mut chirp_r = try_zeroed_vec::<T>(two_n)?;
    let mut chirp_i = try_zeroed_vec::<T>(two_n)?;
    compute_twiddles_npot(two_n, &mut chirp_r, &mut chirp_i, !forward);

    // chirp[k] = table[k^2 mod 2n], walked incrementally.
    let mut chirp_at = try_zeroed_vec::<T>(n)?;
    let mut chirp_at_im = try_zeroed_vec::<T>(n)?;
    {
        let mut idx = 0usize;
        for k in 0..n {
            chirp_at[k] = chirp_r[idx];
            chirp_at_im[k] = chirp_i[idx];
            idx = (idx + 2 * k + 1) % two_n;
        }
    }

    let inv_m = T::from_f64(1.0 / m as f64);

    let mut ar = try_zeroed_vec::<T>(m)?;
    let mut ai = try_zeroed_vec::<T>(m)?;
    let mut br = try_zeroed_vec::<T>(m)?;
    let mut bi = try_zeroed_vec::<T>(m)?;

    match src_re {
        Source::Zero => {}
        Source::Same => {
            for j in 0..n {
                let (cr, ci) = (chirp_at[j], chirp_at_im[j]);
                let xr = dst_re[j];
                ar[j] = xr * cr;
                ai[j] = xr * ci;
            }
        }
        Source::External(s, stride) => {
            for j in 0..n {
                let (cr, ci) = (chirp_at[j], chirp_at_im[j]);
                let xr = s[(j as isize * stride) as usize];
                ar[j] = xr * cr;
                ai[j] = xr * ci;
            }
        }
    }
    match src_im {
        Source::Zero => {}
        Source::Same => {
            for j in 0..n {
                let (cr, ci) = (chirp_at[j], chirp_at_im[j]);
                let xi = dst_im[j];
                ar[j] = ar[j] - xi * ci;
                ai[j] = ai[j] + xi * cr;
            }
        }
        Source::External(s, stride) => {
            for j in 0..n {
                let (cr, ci) = (chirp_at[j], chirp_at_im[j]);
                let xi = s[(j as isize * stride) as usize];
                ar[j] = ar[j] - xi * ci;
                ai[j] = ai[j] + xi * cr;
            }
        }
    }

    br[0] = chirp_at[0];
    bi[0] = -chirp_at_im[0];
    for j in 1..n {
        br[j] = chirp_at[j];
        bi[j] = -chirp_at_im[j];
        br[m - j] = chirp_at[j];
        bi[m - j] = -chirp_at_im[j];
    }

    fft_pot(log2m, Source::Same, Source::Same, &mut ar, &mut ai, true, inv_m);
    fft_pot(log2m, Source::Same, Source::Same, &mut br, &mut bi, true, T::one());

    for i in 0..m {
        let (arr, aii) = (ar[i], ai[i]);
        let (brr, bii) = (br[i], bi[i]);
        ar[i] = arr * brr - aii * bii;
        ai[i] = arr * bii + aii * brr;
    }

    fft_pot(log2m, Source::Same, Source::Same, &mut ar, &mut ai, false, scale);

    for k in 0..n {
        let (cr, ci) = (chirp_at[k], chirp_at_im[k]);
        let (xr, xi) = (ar[k], ai[k]);
        dst_re[k] = xr * cr - xi * ci;
        dst_im[k] = xr * ci + xi * cr;
    }

    Ok(())
}

#[cfg(test)]
#[path = "bluestein_tests.rs"]
mod tests;
