//! Power-of-two driver (§4.9): the engine's only transform algorithm for
//! sizes that are already `2^log2n`. [`crate::bluestein`] reduces any other
//! size down to a call into this one.

use crate::bitrev::{permute_broadcast, permute_in_place, permute_out_of_place};
use crate::butterfly::butterfly;
use crate::config::TMP_BUF_SIZE;
use crate::element::FftFloat;

/// Where one plane (real or imaginary) of the input comes from.
pub(crate) enum Source<'a, T> {
    /// Absent entirely — every sample on this plane is zero (the
    /// real-input or pure-imaginary-input convenience entry points).
    Zero,
    /// Already sitting in the destination buffer this plane will be
    /// written to: permuted in place, no separate source buffer touched.
    Same,
    /// A separate caller-owned buffer with its own stride.
    External(&'a [T], isize),
}

/// Runs the size-`2^log2n` transform, writing the bit-reversed, combined,
/// scaled result into `dst_re`/`dst_im` (each exactly `2^log2n` elements,
/// stride 1).
///
/// The twiddle/bit-reversal scratch buffer lives on the stack
/// (`TMP_BUF_SIZE` elements) — the power-of-two driver never allocates.
pub(crate) fn fft_pot<T: FftFloat>(
    log2n: u32,
    src_re: Source<'_, T>,
    src_im: Source<'_, T>,
    dst_re: &mut [T],
    dst_im: &mut [T],
    forward: bool,
    scale: T,
) {
    let n = 1usize << log2n;
    debug_assert_eq!(dst_re.len(), n);
    debug_assert_eq!(dst_im.len(), n);

    let mut tmp = [T::zero(); TMP_BUF_SIZE];

    match src_re {
        Source::Zero => permute_broadcast(log2n, T::zero(), dst_re, 1),
        Source::Same => permute_in_place(log2n, dst_re, 1, &mut tmp),
        Source::External(s, stride) => permute_out_of_place(log2n, s, stride, dst_re, 1, &mut tmp),
    }
    match src_im {
        Source::Zero => permute_broadcast(log2n, T::zero(), dst_im, 1),
        Source::Same => permute_in_place(log2n, dst_im, 1, &mut tmp),
        Source::External(s, stride) => permute_out_of_place(log2n, s, stride, dst_im, 1, &mut tmp),
    }

    butterfly(log2n, dst_re, dst_im, forward);

    if !scale.is_one() {
        for i in 0..n {
            dst_re[i] = dst_re[i] * scale;
            dst_im[i] = dst_im[i] * scale;
        }
    }
}

#[cfg(test)]
#[path = "pot_tests.rs"]
mod tests;
