//! Public entry surface (§4.12): validation, dispatch to the power-of-two
//! or Bluestein driver, and the three entry-point shapes from spec §6
//! (contiguous planar, interleaved, strided planar), each in an in-place
//! convenience form and a fully general out-of-place `_from` form that
//! accepts an independent destination and an optional (`None` ⇒
//! zero-broadcast) source, plus a caller-supplied `scale`.
//!
//! Validation always runs in the same order, regardless of which entry
//! point is called: `n == 0` first (success, no-op — §3/§4.12 item 1),
//! shape (matching lengths, non-zero strides) second, aliasing third,
//! `npot`-feature gate last.
//!
//! In-place convenience functions (`fft_forward`, `fft_forward_interleaved`,
//! `fft_forward_strided`, `fft_forward_complex`, and their inverses) take a
//! single buffer used as both source and destination — the "exact overlap"
//! case §6 permits. The `_from` functions take the source and destination
//! as separate bindings instead: safe Rust's borrow checker already
//! forbids an `&` and an overlapping `&mut` to the same storage, so the
//! partial-overlap/cross-channel-alias rejections §6 calls for are upheld
//! by the type system there. The runtime `overlaps` check below guards the
//! one case the type system can't see: two independent `&mut` channel
//! buffers that, within a single in-place call, happen to be the same
//! slice.

#[cfg(feature = "npot")]
use crate::bluestein::fft_npot;
use crate::common::FftError;
use crate::element::FftFloat;
use crate::pot::{fft_pot, Source};

use alloc::vec::Vec;

fn overlaps<T>(a: &[T], b: &[T]) -> bool {
    let elem = core::mem::size_of::<T>().max(1);
    let a_start = a.as_ptr() as usize;
    let a_end = a_start + a.len() * elem;
    let b_start = b.as_ptr() as usize;
    let b_end = b_start + b.len() * elem;
    a_start < b_end && b_start < a_end
}

fn try_zeroed_vec<T: FftFloat>(len: usize) -> Result<Vec<T>, FftError> {
    let mut v: Vec<T> = Vec::new();
    v.try_reserve_exact(len).map_err(|_| FftError::OutOfMemory)?;
    v.resize(len, T::zero());
    Ok(v)
}

fn dispatch<T: FftFloat>(
    n: usize,
    src_re: Source<'_, T>,
    src_im: Source<'_, T>,
    dst_re: &mut [T],
    dst_im: &mut [T],
    forward: bool,
    scale: T,
) -> Result<(), FftError> {
    if n.is_power_of_two() {
        let log2n = n.trailing_zeros();
        fft_pot(log2n, src_re, src_im, dst_re, dst_im, forward, scale);
        Ok(())
    } else {
        #[cfg(feature = "npot")]
        {
            fft_npot(n, src_re, src_im, dst_re, dst_im, forward, scale)
        }
        #[cfg(not(feature = "npot"))]
        {
            let _ = (src_re, src_im, dst_re, dst_im, forward, scale);
            Err(FftError::InvalidArgument)
        }
    }
}

// ---------------------------------------------------------------------
// Contiguous planar
// ---------------------------------------------------------------------

/// Forward complex transform, in place, over contiguous `real`/`imag`
/// planes of equal length `n` (any `n >= 0`; `n == 0` is a no-op).
/// Non-power-of-two `n` requires the `npot` feature.
pub fn fft_forward<T: FftFloat>(real: &mut [T], imag: &mut [T], scale: T) -> Result<(), FftError> {
    transform_planar_inplace(real, imag, true, scale)
}

/// Inverse complex transform, in place, over contiguous planes.
pub fn fft_inverse<T: FftFloat>(real: &mut [T], imag: &mut [T], scale: T) -> Result<(), FftError> {
    transform_planar_inplace(real, imag, false, scale)
}

fn transform_planar_inplace<T: FftFloat>(real: &mut [T], imag: &mut [T], forward: bool, scale: T) -> Result<(), FftError> {
    let n = real.len();
    if n == 0 {
        return Ok(());
    }
    if imag.len() != n {
        return Err(FftError::InvalidArgument);
    }
    if overlaps(real, imag) {
        return Err(FftError::InvalidArgument);
    }
    dispatch(n, Source::Same, Source::Same, real, imag, forward, scale)
}

/// Forward complex transform, out of place. Either source plane may be
/// `None`, treated as a broadcast of zero (spec §3, Testable Property #5).
pub fn fft_forward_from<T: FftFloat>(
    src_real: Option<&[T]>,
    src_imag: Option<&[T]>,
    dst_real: &mut [T],
    dst_imag: &mut [T],
    scale: T,
) -> Result<(), FftError> {
    transform_planar_from(src_real, src_imag, dst_real, dst_imag, true, scale)
}

/// Inverse complex transform, out of place.
pub fn fft_inverse_from<T: FftFloat>(
    src_real: Option<&[T]>,
    src_imag: Option<&[T]>,
    dst_real: &mut [T],
    dst_imag: &mut [T],
    scale: T,
) -> Result<(), FftError> {
    transform_planar_from(src_real, src_imag, dst_real, dst_imag, false, scale)
}

fn transform_planar_from<T: FftFloat>(
    src_real: Option<&[T]>,
    src_imag: Option<&[T]>,
    dst_real: &mut [T],
    dst_imag: &mut [T],
    forward: bool,
    scale: T,
) -> Result<(), FftError> {
    let n = dst_real.len();
    if n == 0 {
        return Ok(());
    }
    if dst_imag.len() != n {
        return Err(FftError::InvalidArgument);
    }
    if let Some(s) = src_real {
        if s.len() != n {
            return Err(FftError::InvalidArgument);
        }
    }
    if let Some(s) = src_imag {
        if s.len() != n {
            return Err(FftError::InvalidArgument);
        }
    }
    if overlaps(dst_real, dst_imag) {
        return Err(FftError::InvalidArgument);
    }
    let src_re = match src_real {
        Some(s) => Source::External(s, 1),
        None => Source::Zero,
    };
    let src_im = match src_imag {
        Some(s) => Source::External(s, 1),
        None => Source::Zero,
    };
    dispatch(n, src_re, src_im, dst_real, dst_imag, forward, scale)
}

// ---------------------------------------------------------------------
// Interleaved
// ---------------------------------------------------------------------

/// Forward complex transform over an interleaved `[re0, im0, re1, im1,
/// ...]` buffer of `2*n` elements, in place.
pub fn fft_forward_interleaved<T: FftFloat>(buf: &mut [T], scale: T) -> Result<(), FftError> {
    transform_interleaved_inplace(buf, true, scale)
}

/// Inverse complex transform over an interleaved buffer, in place.
pub fn fft_inverse_interleaved<T: FftFloat>(buf: &mut [T], scale: T) -> Result<(), FftError> {
    transform_interleaved_inplace(buf, false, scale)
}

fn transform_interleaved_inplace<T: FftFloat>(buf: &mut [T], forward: bool, scale: T) -> Result<(), FftError> {
    if buf.is_empty() {
        return Ok(());
    }
    if buf.len() % 2 != 0 {
        return Err(FftError::InvalidArgument);
    }
    let n = buf.len() / 2;
    let mut re = try_zeroed_vec::<T>(n)?;
    let mut im = try_zeroed_vec::<T>(n)?;
    for k in 0..n {
        re[k] = buf[2 * k];
        im[k] = buf[2 * k + 1];
    }
    dispatch(n, Source::Same, Source::Same, &mut re, &mut im, forward, scale)?;
    crate::interleave::interleave(&re, &im, buf);
    Ok(())
}

/// Forward complex transform over an interleaved buffer, out of place. A
/// `None` source is a broadcast of zero.
pub fn fft_forward_interleaved_from<T: FftFloat>(src: Option<&[T]>, dst: &mut [T], scale: T) -> Result<(), FftError> {
    transform_interleaved_from(src, dst, true, scale)
}

/// Inverse complex transform over an interleaved buffer, out of place.
pub fn fft_inverse_interleaved_from<T: FftFloat>(src: Option<&[T]>, dst: &mut [T], scale: T) -> Result<(), FftError> {
    transform_interleaved_from(src, dst, false, scale)
}

fn transform_interleaved_from<T: FftFloat>(src: Option<&[T]>, dst: &mut [T], forward: bool, scale: T) -> Result<(), FftError> {
    if dst.is_empty() {
        return Ok(());
    }
    if dst.len() % 2 != 0 {
        return Err(FftError::InvalidArgument);
    }
    let n = dst.len() / 2;
    if let Some(s) = src {
        if s.len() != dst.len() {
            return Err(FftError::InvalidArgument);
        }
    }
    let mut out_re = try_zeroed_vec::<T>(n)?;
    let mut out_im = try_zeroed_vec::<T>(n)?;
    let (src_re, src_im): (Source<'_, T>, Source<'_, T>) = match src {
        Some(s) => (Source::External(s, 2), Source::External(&s[1..], 2)),
        None => (Source::Zero, Source::Zero),
    };
    dispatch(n, src_re, src_im, &mut out_re, &mut out_im, forward, scale)?;
    crate::interleave::interleave(&out_re, &out_im, dst);
    Ok(())
}

// ---------------------------------------------------------------------
// Strided planar
// ---------------------------------------------------------------------

/// Forward complex transform, in place, reading/writing `n` samples
/// spaced `real_stride`/`imag_stride` apart within `real`/`imag`.
///
/// Strides are unsigned: spec §3 allows negative strides for a signed
/// index type, but nothing in this crate ever needs to walk an array
/// backwards, so that generality is not carried over (see DESIGN.md).
pub fn fft_forward_strided<T: FftFloat>(
    real: &mut [T],
    real_stride: usize,
    imag: &mut [T],
    imag_stride: usize,
    n: usize,
    scale: T,
) -> Result<(), FftError> {
    transform_strided_inplace(real, real_stride, imag, imag_stride, n, true, scale)
}

/// Inverse complex transform, in place, over strided planes.
pub fn fft_inverse_strided<T: FftFloat>(
    real: &mut [T],
    real_stride: usize,
    imag: &mut [T],
    imag_stride: usize,
    n: usize,
    scale: T,
) -> Result<(), FftError> {
    transform_strided_inplace(real, real_stride, imag, imag_stride, n, false, scale)
}

fn transform_strided_inplace<T: FftFloat>(
    real: &mut [T],
    real_stride: usize,
    imag: &mut [T],
    imag_stride: usize,
    n: usize,
    forward: bool,
    scale: T,
) -> Result<(), FftError> {
    if n == 0 {
        return Ok(());
    }
    if real_stride == 0 || imag_stride == 0 {
        return Err(FftError::InvalidArgument);
    }
    if real.len() < (n - 1) * real_stride + 1 || imag.len() < (n - 1) * imag_stride + 1 {
        return Err(FftError::InvalidArgument);
    }
    if overlaps(real, imag) {
        return Err(FftError::InvalidArgument);
    }

    let mut src_re = try_zeroed_vec::<T>(n)?;
    let mut src_im = try_zeroed_vec::<T>(n)?;
    for k in 0..n {
        src_re[k] = real[k * real_stride];
        src_im[k] = imag[k * imag_stride];
    }

    let mut out_re = try_zeroed_vec::<T>(n)?;
    let mut out_im = try_zeroed_vec::<T>(n)?;
    dispatch(
        n,
        Source::External(&src_re, 1),
        Source::External(&src_im, 1),
        &mut out_re,
        &mut out_im,
        forward,
        scale,
    )?;

    for k in 0..n {
        real[k * real_stride] = out_re[k];
        imag[k * imag_stride] = out_im[k];
    }
    Ok(())
}

/// Forward complex transform, out of place, over independent strided
/// source and destination planes (spec §6's general "strided planar"
/// shape: independent real/imag strides for source and destination).
/// Either source plane may be `None` (broadcast of zero).
pub fn fft_forward_strided_from<T: FftFloat>(
    src_real: Option<(&[T], usize)>,
    src_imag: Option<(&[T], usize)>,
    dst_real: (&mut [T], usize),
    dst_imag: (&mut [T], usize),
    n: usize,
    scale: T,
) -> Result<(), FftError> {
    transform_strided_from(src_real, src_imag, dst_real, dst_imag, n, true, scale)
}

/// Inverse complex transform, out of place, over independent strided
/// source and destination planes.
pub fn fft_inverse_strided_from<T: FftFloat>(
    src_real: Option<(&[T], usize)>,
    src_imag: Option<(&[T], usize)>,
    dst_real: (&mut [T], usize),
    dst_imag: (&mut [T], usize),
    n: usize,
    scale: T,
) -> Result<(), FftError> {
    transform_strided_from(src_real, src_imag, dst_real, dst_imag, n, false, scale)
}

fn transform_strided_from<T: FftFloat>(
    src_real: Option<(&[T], usize)>,
    src_imag: Option<(&[T], usize)>,
    dst_real: (&mut [T], usize),
    dst_imag: (&mut [T], usize),
    n: usize,
    forward: bool,
    scale: T,
) -> Result<(), FftError> {
    if n == 0 {
        return Ok(());
    }
    let (dst_re_buf, dst_re_stride) = dst_real;
    let (dst_im_buf, dst_im_stride) = dst_imag;
    if dst_re_stride == 0 || dst_im_stride == 0 {
        return Err(FftError::InvalidArgument);
    }
    if dst_re_buf.len() < (n - 1) * dst_re_stride + 1 || dst_im_buf.len() < (n - 1) * dst_im_stride + 1 {
        return Err(FftError::InvalidArgument);
    }
    if let Some((s, stride)) = src_real {
        if stride == 0 || s.len() < (n - 1) * stride + 1 {
            return Err(FftError::InvalidArgument);
        }
    }
    if let Some((s, stride)) = src_imag {
        if stride == 0 || s.len() < (n - 1) * stride + 1 {
            return Err(FftError::InvalidArgument);
        }
    }

    let mut out_re = try_zeroed_vec::<T>(n)?;
    let mut out_im = try_zeroed_vec::<T>(n)?;
    let src_re_source = match src_real {
        Some((s, stride)) => Source::External(s, stride as isize),
        None => Source::Zero,
    };
    let src_im_source = match src_imag {
        Some((s, stride)) => Source::External(s, stride as isize),
        None => Source::Zero,
    };
    dispatch(n, src_re_source, src_im_source, &mut out_re, &mut out_im, forward, scale)?;

    for k in 0..n {
        dst_re_buf[k * dst_re_stride] = out_re[k];
        dst_im_buf[k * dst_im_stride] = out_im[k];
    }
    Ok(())
}

// ---------------------------------------------------------------------
// num_complex convenience wrapper
// ---------------------------------------------------------------------

/// Forward complex transform over a `num_complex::Complex<T>` buffer, in
/// place.
pub fn fft_forward_complex<T: FftFloat>(buf: &mut [num_complex::Complex<T>], scale: T) -> Result<(), FftError> {
    transform_complex_inplace(buf, true, scale)
}

/// Inverse complex transform over a `num_complex::Complex<T>` buffer, in
/// place.
pub fn fft_inverse_complex<T: FftFloat>(buf: &mut [num_complex::Complex<T>], scale: T) -> Result<(), FftError> {
    transform_complex_inplace(buf, false, scale)
}

fn transform_complex_inplace<T: FftFloat>(buf: &mut [num_complex::Complex<T>], forward: bool, scale: T) -> Result<(), FftError> {
    let n = buf.len();
    if n == 0 {
        return Ok(());
    }
    let mut re: Vec<T> = Vec::new();
    re.try_reserve_exact(n).map_err(|_| FftError::OutOfMemory)?;
    let mut im: Vec<T> = Vec::new();
    im.try_reserve_exact(n).map_err(|_| FftError::OutOfMemory)?;
    for c in buf.iter() {
        re.push(c.re);
        im.push(c.im);
    }
    dispatch(n, Source::Same, Source::Same, &mut re, &mut im, forward, scale)?;
    for (c, (r, i)) in buf.iter_mut().zip(re.iter().zip(im.iter())) {
        c.re = *r;
        c.im = *i;
    }
    Ok(())
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
