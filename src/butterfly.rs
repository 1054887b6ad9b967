//! The Cooley-Tukey butterfly chain (§4.5-4.7): block, pass, and multipass,
//! the generic scalar core that the leaf and the SIMD kernels bracket.
//!
//! Data enters already bit-reversed (§4.2) and is combined bottom-up:
//! [`crate::leaf8`] handles the first three doublings (size 1 to 8) in one
//! unrolled step, then `butterfly_multipass` walks `h` from 8 up to `n/2`,
//! doubling each time, building that level's twiddle table once and
//! applying it across every block of the current size with `butterfly_pass`.

use crate::config::TWIDDLES_BUF_SIZE;
use crate::element::FftFloat;
use crate::leaf8::fft8;
use crate::twiddle::compute_twiddles;

/// Combines two adjacent length-`h` blocks at `real/imag[base..base+2h)`
/// into one length-`2h` DFT, using the `h`-entry twiddle table `tr`/`ti`.
#[inline]
pub(crate) fn butterfly_block<T: FftFloat>(h: usize, real: &mut [T], imag: &mut [T], base: usize, tr: &[T], ti: &[T]) {
    for d in 0..h {
        let (ar, ai) = (real[base + d], imag[base + d]);
        let (xr, xi) = (real[base + h + d], imag[base + h + d]);
        let (wr, wi) = (tr[d], ti[d]);
        let tr_ = wr * xr - wi * xi;
        let ti_ = wr * xi + wi * xr;
        real[base + d] = ar + tr_;
        imag[base + d] = ai + ti_;
        real[base + h + d] = ar - tr_;
        imag[base + h + d] = ai - ti_;
    }
}

/// Applies [`butterfly_block`] across `c` contiguous blocks of size
/// `n = 2*h`, purely scalar.
#[inline]
fn butterfly_pass_scalar<T: FftFloat>(h: usize, c: usize, n: usize, real: &mut [T], imag: &mut [T], tr: &[T], ti: &[T]) {
    for block in 0..c {
        butterfly_block(h, real, imag, block * n, tr, ti);
    }
}

/// Applies one butterfly pass across `c` contiguous blocks of size
/// `n = 2*h`, trying the type's SIMD kernel first and falling back to the
/// scalar path whenever it declines (block too short, or no SIMD support
/// compiled/detected for `T`).
pub(crate) fn butterfly_pass<T: FftFloat>(
    simd_mask: crate::simd::SimdMask,
    h: usize,
    c: usize,
    n: usize,
    real: &mut [T],
    imag: &mut [T],
    tr: &[T],
    ti: &[T],
) {
    if T::try_simd_butterfly_pass(simd_mask, h, c, n, real, imag, tr, ti) {
        return;
    }
    butterfly_pass_scalar(h, c, n, real, imag, tr, ti);
}

/// Runs the full butterfly chain over `real`/`imag`, viewed as one or more
/// contiguous blocks of `2^log2n` elements (already bit-reversed within
/// each block), leaving each block's DFT (forward if `forward`, else the
/// un-normalized inverse) in place. Batching more than one block lets the
/// power-of-two driver amortize a single twiddle table across all of them.
pub(crate) fn butterfly<T: FftFloat>(log2n: u32, real: &mut [T], imag: &mut [T], forward: bool) {
    let n = 1usize << log2n;
    let sqrt2_2 = T::from_f64(core::f64::consts::FRAC_1_SQRT_2);

    if log2n == 0 {
        return;
    }
    if log2n <= 2 {
        // Smaller than a full leaf-8: a direct size-2/4 scalar DIT chain
        // reusing butterfly_block at each level, no twiddle table needed
        // beyond the trivial size-1 case (h=1 has only the identity twiddle).
        let n_blocks = real.len() / n;
        for block in 0..n_blocks {
            let base = block * n;
            let mut h = 1usize;
            while h < n {
                let mut tr = [T::zero(); 4];
                let mut ti = [T::zero(); 4];
                let log2h = (h as u32).trailing_zeros();
                compute_twiddles(log2h + 1, log2h, &mut tr[..h], &mut ti[..h], !forward);
                butterfly_block(h, real, imag, base, &tr[..h], &ti[..h]);
                h *= 2;
            }
        }
        return;
    }

    let n_blocks = real.len() / n;
    for block in 0..n_blocks {
        let base = block * n;
        for j in (0..n).step_by(8) {
            fft8(real, imag, base + j, 1, sqrt2_2, forward);
        }
    }

    let simd_mask = crate::simd::detect_simd();
    let mut tr_buf = [T::zero(); TWIDDLES_BUF_SIZE];
    let mut ti_buf = [T::zero(); TWIDDLES_BUF_SIZE];

    let mut h = 8usize;
    let mut log2h = 3u32;
    while h < n {
        let log2_2h = log2h + 1;
        if h <= TWIDDLES_BUF_SIZE {
            compute_twiddles(log2_2h, log2h, &mut tr_buf[..h], &mut ti_buf[..h], !forward);
            let blocks_per_n = n / (2 * h);
            for block in 0..n_blocks {
                let base = block * n;
                for sub in 0..blocks_per_n {
                    butterfly_pass(simd_mask, h, 1, 2 * h, &mut real[base + sub * 2 * h..], &mut imag[base + sub * 2 * h..], &tr_buf[..h], &ti_buf[..h]);
                }
            }
        } else {
            // h exceeds the stack twiddle buffer: fall back to a heap table
            // for this (and every larger) level. Large transforms are rare
            // enough in practice that paying one allocation here, rather
            // than sizing the stack buffer for a pathological N, is the
            // right tradeoff (see DESIGN.md).
            let mut tr_heap = alloc_twiddle_vec::<T>(h);
            let mut ti_heap = alloc_twiddle_vec::<T>(h);
            compute_twiddles(log2_2h, log2h, &mut tr_heap, &mut ti_heap, !forward);
            let blocks_per_n = n / (2 * h);
            for block in 0..n_blocks {
                let base = block * n;
                for sub in 0..blocks_per_n {
                    butterfly_pass(simd_mask, h, 1, 2 * h, &mut real[base + sub * 2 * h..], &mut imag[base + sub * 2 * h..], &tr_heap, &ti_heap);
                }
            }
        }
        h *= 2;
        log2h += 1;
    }
}

fn alloc_twiddle_vec<T: FftFloat>(h: usize) -> alloc::vec::Vec<T> {
    alloc::vec![T::zero(); h]
}

#[cfg(test)]
#[path = "butterfly_tests.rs"]
mod tests;
