//! Twiddle-factor generation (§4.3).
//!
//! Every stored twiddle is built from a tabulated or Taylor-computed seed
//! using only +, -, * — no runtime `sin`/`cos` calls, so `FftFloat` never
//! needs a transcendental function. Seeds are expressed in the
//! `(cos(theta)-1, sin(theta))` form throughout, converting back to
//! `(cos, sin)` only at the very end: this measurably improves accuracy
//! over working with `(cos, sin)` directly (see DESIGN.md).

use crate::element::FftFloat;

/// `exp(2*pi*i/2^log2n) - 1`, as `(re, im)`.
///
/// `log2n` in `[0, 16]` hits a literal sub-ULP-accurate table; `log2n >=
/// 17` falls back to the degree-8/7 Taylor expansion of `cos(x)-1` and
/// `sin(x)` around `x = 2*pi/2^log2n`, which is accurate to a couple of
/// ULPs for such small `x`.
pub(crate) fn cexpm1<T: FftFloat>(log2n: u32) -> (T, T) {
    const TABLE: [(f64, f64); 17] = [
        (0.0, 0.0),
        (-2.0, 0.0),
        (-1.0, 1.0),
        (-2.928932188134524755991556378951509607151e-1, 7.071067811865475244008443621048490392848e-1),
        (-7.612046748871324387181681060321171317758e-2, 3.826834323650897717284599840303988667613e-1),
        (-1.921471959676955087381776386576096302606e-2, 1.950903220161282678482848684770222409276e-1),
        (-4.815273327803113755163046890520078424525e-3, 9.801714032956060199419556388864184586113e-2),
        (-1.204543794827607285228395240899305556796e-3, 4.906767432741801425495497694268265831474e-2),
        (-3.011813037957798842343503338278031499389e-4, 2.454122852291228803173452945928292506546e-2),
        (-7.529816085545907835350880361677564939353e-5, 1.227153828571992607940826195100321214037e-2),
        (-1.882471739885734300956227143228382608274e-5, 6.135884649154475359640234590372580917057e-3),
        (-4.706190423828488419874299880100447012366e-6, 3.067956762965976270145365490919842518944e-3),
        (-1.176548298090070974289828473980951732077e-6, 1.533980186284765612303697150264079079954e-3),
        (-2.941371177808397717822612343228837361006e-7, 7.669903187427045269385683579485766431409e-4),
        (-7.353428214885526851929261214305179884431e-8, 3.834951875713955890724616811813812633950e-4),
        (-1.838357070619165308459709028549492394875e-8, 1.917475973107033074399095619890009334688e-4),
        (-4.595892687109028066860393851041105696810e-9, 9.587379909597734587051721097647635118706e-5),
    ];
    if (log2n as usize) < TABLE.len() {
        let (re, im) = TABLE[log2n as usize];
        return (T::from_f64(re), T::from_f64(im));
    }
    let n = (1u64 << log2n) as f64;
    let c2 = T::from_f64(5.0e-1);
    let c4 = T::from_f64(4.166666666666666666666666666666666666666e-2);
    let c6 = T::from_f64(1.388888888888888888888888888888888888888e-3);
    let c8 = T::from_f64(2.480158730158730158730158730158730158730e-5);
    let c1 = T::one();
    let c3 = T::from_f64(1.666666666666666666666666666666666666666e-1);
    let c5 = T::from_f64(8.333333333333333333333333333333333333333e-3);
    let c7 = T::from_f64(1.984126984126984126984126984126984126984e-4);
    let x = T::from_f64(6.283185307179586476925286766559005768 / n);
    let x2 = x * x;
    let re = -(x2 * (c2 - x2 * (c4 - x2 * (c6 - x2 * c8))));
    let im = x * (c1 - x2 * (c3 - x2 * (c5 - x2 * c7)));
    (re, im)
}

/// `exp(2*pi*i/2^log2n)`, as `(re, im)`.
pub(crate) fn cexp<T: FftFloat>(log2n: u32) -> (T, T) {
    let (re, im) = cexpm1::<T>(log2n);
    (T::one() + re, im)
}

/// `exp(2*pi*i*p/q) - 1`, as `(re, im)`, via a 33-term continued-fraction
/// style evaluation of `cos`/`sin`'s power series, accurate for modest
/// `p/q` without relying on a tabulated seed.
pub(crate) fn cexpm1_npot<T: FftFloat>(p: usize, q: usize) -> (T, T) {
    let x = T::from_f64(6.283185307179586476925286766559005768 * (p as f64) / (q as f64));
    let x2 = x * x;
    let mut c = T::one();
    let mut s = T::one();
    let mut i = T::from_f64(32.0);
    let two = T::from_f64(2.0);
    let three = T::from_f64(3.0);
    let one = T::one();
    for _ in 0..=32 {
        let j = two * i + three;
        let k = i + i + three;
        let j2 = j * j;
        c = one - x2 * c / (j2 + k);
        s = one - x2 * s / (j2 - k);
        i = i - one;
    }
    let half = T::from_f64(0.5);
    let re = -(c * half * x2);
    let im = s * x;
    (re, im)
}

/// Fills `tr[0..2^log2b)`, `ti[0..2^log2b)` with
/// `exp(+-2*pi*i*k/2^log2n)`, doubling the filled prefix: given the first
/// `2^i` twiddles, `twiddle[2^i+j] = twiddle[j] * exp(+-2*pi*i/2^(log2n-i))`.
/// The multiply is carried out on `(cos-1, sin)` pairs, converted to
/// `(cos, sin)` only at the end, bounding the error to `O(log N)` per
/// entry.
pub(crate) fn compute_twiddles<T: FftFloat>(log2n: u32, log2b: u32, tr: &mut [T], ti: &mut [T], inverse: bool) {
    tr[0] = T::zero();
    ti[0] = T::zero();
    for i in 0..log2b {
        let k = 1usize << i;
        let (x, y0) = cexpm1::<T>(log2n - i);
        let y = if inverse { y0 } else { -y0 };
        for j in 0..k {
            let (rj, ij) = (tr[j], ti[j]);
            tr[k + j] = (x * rj - y * ij) + (x + rj);
            ti[k + j] = (y * rj + x * ij) + (y + ij);
        }
    }
    let b = 1usize << log2b;
    for r in tr.iter_mut().take(b) {
        *r = T::one() + *r;
    }
}

/// Builds the `2N`-long chirp `exp(+-2*pi*i*k/(2N))` for Bluestein's
/// algorithm, in three stages: the first quarter by doubling from
/// `cexpm1_npot` seeds, the second quarter by mirroring the first about
/// the midpoint (real negated, imag copied), and the second half as the
/// first half negated.
pub(crate) fn compute_twiddles_npot<T: FftFloat>(n: usize, tr: &mut [T], ti: &mut [T], inverse: bool) {
    if n < 1 {
        return;
    }
    let m = n >> 1;
    let h = (m + 2) >> 1;
    tr[0] = T::zero();
    ti[0] = T::zero();
    let mut i = 1usize;
    while i < h {
        let (x, y0) = cexpm1_npot::<T>(i, n);
        let y = if inverse { y0 } else { -y0 };
        let j = if h < i * 2 { h - i } else { i };
        for k in 0..j {
            let (rk, ik) = (tr[k], ti[k]);
            tr[i + k] = (x * rk - y * ik) + (x + rk);
            ti[i + k] = (y * rk + x * ik) + (y + ik);
        }
        i *= 2;
    }
    for r in tr.iter_mut().take(h) {
        *r = T::one() + *r;
    }
    for i in h..m {
        tr[i] = -tr[m - i];
        ti[i] = ti[m - i];
    }
    for i in 0..m {
        tr[m + i] = -tr[i];
        ti[m + i] = -ti[i];
    }
}

#[cfg(test)]
#[path = "twiddle_tests.rs"]
mod tests;
