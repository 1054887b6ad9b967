use super::*;
use crate::bitrev::{permute_out_of_place, reverse_bits};
use crate::config::Q;

fn naive_dft(real: &[f64], imag: &[f64], forward: bool) -> (std::vec::Vec<f64>, std::vec::Vec<f64>) {
    let n = real.len();
    let sign = if forward { -1.0 } else { 1.0 };
    let mut or_ = std::vec![0.0; n];
    let mut oi = std::vec![0.0; n];
    for k in 0..n {
        let mut sr = 0.0;
        let mut si = 0.0;
        for j in 0..n {
            let theta = sign * 2.0 * core::f64::consts::PI * (k * j) as f64 / n as f64;
            let (c, s) = (theta.cos(), theta.sin());
            sr += real[j] * c - imag[j] * s;
            si += real[j] * s + imag[j] * c;
        }
        or_[k] = sr;
        oi[k] = si;
    }
    (or_, oi)
}

fn run_butterfly(log2n: u32, input: &[f64], forward: bool) -> (std::vec::Vec<f64>, std::vec::Vec<f64>) {
    let n = 1usize << log2n;
    let mut real = std::vec![0.0f64; n];
    let mut imag = std::vec![0.0f64; n];
    let mut tmp = std::vec![0.0f64; 1 << (2 * Q)];
    permute_out_of_place(log2n, input, 1, &mut real, 1, &mut tmp);
    butterfly(log2n, &mut real, &mut imag, forward);
    (real, imag)
}

#[test]
fn butterfly_matches_naive_dft_for_small_pot_sizes() {
    for log2n in 0u32..=6 {
        let n = 1usize << log2n;
        let input: std::vec::Vec<f64> = (0..n).map(|i| (i as f64 + 1.0).sin()).collect();
        let (expect_re, expect_im) = naive_dft(&input, &std::vec![0.0; n], true);
        let (re, im) = run_butterfly(log2n, &input, true);
        for k in 0..n {
            assert!((re[k] - expect_re[k]).abs() < 1e-8, "log2n={log2n} k={k}: {} vs {}", re[k], expect_re[k]);
            assert!((im[k] - expect_im[k]).abs() < 1e-8, "log2n={log2n} k={k}: {} vs {}", im[k], expect_im[k]);
        }
    }
}

#[test]
fn butterfly_inverse_of_forward_scaled_by_n_is_identity() {
    for log2n in [3u32, 5, 7] {
        let n = 1usize << log2n;
        let input: std::vec::Vec<f64> = (0..n).map(|i| (i as f64 * 0.37).cos()).collect();
        let (re, im) = run_butterfly(log2n, &input, true);

        let mut tmp = std::vec![0.0f64; 1 << (2 * Q)];
        let mut re2 = std::vec![0.0f64; n];
        let mut im2 = std::vec![0.0f64; n];
        permute_out_of_place(log2n, &re, 1, &mut re2, 1, &mut tmp);
        permute_out_of_place(log2n, &im, 1, &mut im2, 1, &mut tmp);
        butterfly(log2n, &mut re2, &mut im2, false);

        for k in 0..n {
            assert!((re2[k] / n as f64 - input[k]).abs() < 1e-8);
            assert!((im2[k] / n as f64).abs() < 1e-8);
        }
    }
}

#[test]
fn reverse_bits_used_in_harness_is_involutive_sanity() {
    assert_eq!(reverse_bits(reverse_bits(5, 4), 4), 5);
}
