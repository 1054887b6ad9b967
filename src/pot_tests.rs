use super::*;

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

#[test]
fn fft_pot_external_source_matches_naive_dft() {
    let log2n = 4u32;
    let n = 1usize << log2n;
    let input: std::vec::Vec<f64> = (0..n).map(|i| (i as f64 + 1.0).sin()).collect();
    let zero_im = std::vec![0.0f64; n];
    let (expect_re, expect_im) = naive_dft(&input, &zero_im, true);

    let mut re = std::vec![0.0f64; n];
    let mut im = std::vec![0.0f64; n];
    fft_pot(log2n, Source::External(&input, 1), Source::Zero, &mut re, &mut im, true, 1.0f64);

    for k in 0..n {
        assert!((re[k] - expect_re[k]).abs() < 1e-8);
        assert!((im[k] - expect_im[k]).abs() < 1e-8);
    }
}

#[test]
fn fft_pot_same_source_is_in_place() {
    let log2n = 4u32;
    let n = 1usize << log2n;
    let input: std::vec::Vec<f64> = (0..n).map(|i| (i as f64 + 1.0).sin()).collect();

    let mut re_ext = std::vec![0.0f64; n];
    let mut im_ext = std::vec![0.0f64; n];
    fft_pot(log2n, Source::External(&input, 1), Source::Zero, &mut re_ext, &mut im_ext, true, 1.0f64);

    let mut re_ip = input.clone();
    let mut im_ip = std::vec![0.0f64; n];
    fft_pot(log2n, Source::Same, Source::Same, &mut re_ip, &mut im_ip, true, 1.0f64);

    assert_eq!(re_ip, re_ext);
    assert_eq!(im_ip, im_ext);
}

#[test]
fn fft_pot_null_source_is_all_zero_output() {
    let log2n = 3u32;
    let n = 1usize << log2n;
    let mut re = std::vec![1.0f64; n];
    let mut im = std::vec![1.0f64; n];
    fft_pot(log2n, Source::Zero, Source::Zero, &mut re, &mut im, true, 1.0f64);
    assert_eq!(re, std::vec![0.0; n]);
    assert_eq!(im, std::vec![0.0; n]);
}

#[test]
fn fft_pot_applies_scale() {
    let log2n = 3u32;
    let n = 1usize << log2n;
    let input: std::vec::Vec<f64> = (0..n).map(|i| i as f64 + 1.0).collect();

    let mut re1 = std::vec![0.0f64; n];
    let mut im1 = std::vec![0.0f64; n];
    fft_pot(log2n, Source::External(&input, 1), Source::Zero, &mut re1, &mut im1, true, 1.0f64);

    let mut re2 = std::vec![0.0f64; n];
    let mut im2 = std::vec![0.0f64; n];
    fft_pot(log2n, Source::External(&input, 1), Source::Zero, &mut re2, &mut im2, true, 0.5f64);

    for k in 0..n {
        assert!((re2[k] - re1[k] * 0.5).abs() < 1e-9);
        assert!((im2[k] - im1[k] * 0.5).abs() < 1e-9);
    }
}
