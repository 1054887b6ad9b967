// src/config.rs
//
// Compile-time knobs. These mirror the `#define`d constants of the
// reference C header; Rust has no preprocessor, so they are plain `const`
// items instead of being independently user-configurable per build.

/// log2 of the scratch buffer size handed to the power-of-two driver.
pub const TMP_BUF_LOG2: usize = 10;
pub const TMP_BUF_SIZE: usize = 1 << TMP_BUF_LOG2;

/// log2 of the twiddle half of that scratch buffer.
pub const TWIDDLES_BUF_LOG2: usize = TMP_BUF_LOG2 - 1;
pub const TWIDDLES_BUF_SIZE: usize = 1 << TWIDDLES_BUF_LOG2;

/// Block-log2 parameter for the Carter-Gatlin blocked bit-reversal.
pub const Q: usize = if TMP_BUF_LOG2 / 2 < 6 { TMP_BUF_LOG2 / 2 } else { 6 };

const _: () = assert!(TMP_BUF_LOG2 >= 2, "TMP_BUF_LOG2 must be >= 2");
const _: () = assert!(Q >= 1 && 2 * Q <= TMP_BUF_LOG2, "Q must satisfy 1 <= Q and 2*Q <= TMP_BUF_LOG2");
