use super::*;

fn naive_dft(real: &[f64], imag: &[f64], forward: bool) -> (Vec<f64>, Vec<f64>) {
    let n = real.len();
    let sign = if forward { -1.0 } else { 1.0 };
    let mut or_ = vec![0.0; n];
    let mut oi = vec![0.0; n];
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

fn bitrev8(i: usize) -> usize {
    [0, 4, 2, 6, 1, 5, 3, 7][i]
}

#[test]
fn fft8_forward_matches_naive_dft() {
    let input: Vec<f64> = (0..8).map(|i| (i as f64 + 1.0) * 0.3).collect();
    let input_im = vec![0.0f64; 8];
    let (expect_re, expect_im) = naive_dft(&input, &input_im, true);

    let mut real = vec![0.0f64; 8];
    let mut imag = vec![0.0f64; 8];
    for i in 0..8 {
        real[bitrev8(i)] = input[i];
        imag[bitrev8(i)] = input_im[i];
    }
    let c = core::f64::consts::FRAC_1_SQRT_2;
    fft8(&mut real, &mut imag, 0, 1, c, true);

    for k in 0..8 {
        assert!((real[k] - expect_re[k]).abs() < 1e-9, "re[{k}]: {} vs {}", real[k], expect_re[k]);
        assert!((imag[k] - expect_im[k]).abs() < 1e-9, "im[{k}]: {} vs {}", imag[k], expect_im[k]);
    }
}

#[test]
fn fft8_inverse_matches_naive_dft() {
    let input: Vec<f64> = (0..8).map(|i| (i as f64 - 3.0) * 0.7).collect();
    let input_im: Vec<f64> = (0..8).map(|i| i as f64 * 0.1).collect();
    let (expect_re, expect_im) = naive_dft(&input, &input_im, false);

    let mut real = vec![0.0f64; 8];
    let mut imag = vec![0.0f64; 8];
    for i in 0..8 {
        real[bitrev8(i)] = input[i];
        imag[bitrev8(i)] = input_im[i];
    }
    let c = core::f64::consts::FRAC_1_SQRT_2;
    fft8(&mut real, &mut imag, 0, 1, c, false);

    for k in 0..8 {
        assert!((real[k] - expect_re[k]).abs() < 1e-9);
        assert!((imag[k] - expect_im[k]).abs() < 1e-9);
    }
}

#[test]
fn fft8_at_nonzero_base_and_stride() {
    let input: Vec<f64> = (0..8).map(|i| (i as f64 + 1.0) * 0.3).collect();
    let (expect_re, expect_im) = naive_dft(&input, &vec![0.0; 8], true);

    let mut real = vec![0.0f64; 20];
    let mut imag = vec![0.0f64; 20];
    for i in 0..8 {
        real[2 + bitrev8(i) * 2] = input[i];
    }
    let c = core::f64::consts::FRAC_1_SQRT_2;
    fft8(&mut real, &mut imag, 2, 2, c, true);

    for k in 0..8 {
        assert!((real[2 + k * 2] - expect_re[k]).abs() < 1e-9);
        assert!((imag[2 + k * 2] - expect_im[k]).abs() < 1e-9);
    }
}
