//! Hand-unrolled size-8 leaf FFT (§4.4).
//!
//! Terminates the recursive butterfly chain: rather than descending all
//! the way to per-pair butterflies, the multipass driver bottoms out at
//! blocks of 8 and calls this fully unrolled three-stage radix-2 DIT
//! transform, skipping the loop overhead and twiddle-table lookups a
//! generic pass would pay for such a small block.
//!
//! Input is assumed already bit-reversed within the 8-element block;
//! output is the block's own DFT, decimation-in-time, stride `stride`
//! starting at `base`.

use crate::element::FftFloat;

/// Size-8 DIT FFT leaf. `c` must be `sqrt(2)/2` in `T`'s precision.
/// `forward` selects `exp(-2*pi*i*k/8)` (true) or `exp(+2*pi*i*k/8)`
/// (false) twiddles.
pub(crate) fn fft8<T: FftFloat>(real: &mut [T], imag: &mut [T], base: usize, stride: usize, c: T, forward: bool) {
    let idx = |k: usize| base + k * stride;

    // Stage 1, h = 1: adjacent pairs, twiddle 1.
    for j in [0usize, 2, 4, 6] {
        let (ar, ai) = (real[idx(j)], imag[idx(j)]);
        let (br, bi) = (real[idx(j + 1)], imag[idx(j + 1)]);
        real[idx(j)] = ar + br;
        imag[idx(j)] = ai + bi;
        real[idx(j + 1)] = ar - br;
        imag[idx(j + 1)] = ai - bi;
    }

    // Stage 2, h = 2: twiddles {1, -i} (forward) or {1, +i} (inverse).
    for base2 in [0usize, 4] {
        let (ar, ai) = (real[idx(base2)], imag[idx(base2)]);
        let (br, bi) = (real[idx(base2 + 2)], imag[idx(base2 + 2)]);
        real[idx(base2)] = ar + br;
        imag[idx(base2)] = ai + bi;
        real[idx(base2 + 2)] = ar - br;
        imag[idx(base2 + 2)] = ai - bi;

        let (ar, ai) = (real[idx(base2 + 1)], imag[idx(base2 + 1)]);
        let (xr, xi) = (real[idx(base2 + 3)], imag[idx(base2 + 3)]);
        // w * x, w = -i (forward) or +i (inverse): (-i)*x = (xi, -xr).
        let (tr, ti) = if forward { (xi, -xr) } else { (-xi, xr) };
        real[idx(base2 + 1)] = ar + tr;
        imag[idx(base2 + 1)] = ai + ti;
        real[idx(base2 + 3)] = ar - tr;
        imag[idx(base2 + 3)] = ai - ti;
    }

    // Stage 3, h = 4: twiddles {1, w, -i, w*-i} with w = exp(-i*pi/4) = c - i*c
    // (forward), conjugated for inverse.
    let (wr1, wi1) = if forward { (c, -c) } else { (c, c) };
    let weights: [(T, T); 4] = [
        (T::one(), T::zero()),
        (wr1, wi1),
        if forward { (T::zero(), -T::one()) } else { (T::zero(), T::one()) },
        if forward { (-c, -c) } else { (-c, c) },
    ];
    for (j, &(wr, wi)) in weights.iter().enumerate() {
        let (ar, ai) = (real[idx(j)], imag[idx(j)]);
        let (xr, xi) = (real[idx(j + 4)], imag[idx(j + 4)]);
        let tr = wr * xr - wi * xi;
        let ti = wr * xi + wi * xr;
        real[idx(j)] = ar + tr;
        imag[idx(j)] = ai + ti;
        real[idx(j + 4)] = ar - tr;
        imag[idx(j + 4)] = ai - ti;
    }
}

#[cfg(test)]
#[path = "leaf8_tests.rs"]
mod tests;
