use bls12_381::{ff::Field, G1Projective, Scalar};
use std::ops::{Add, Mul, Neg, Sub};

/// The element types a radix-2 FFT can be computed over: the scalar field
/// itself and the G1 group, where scalar multiplication takes the place of
/// field multiplication.
pub(crate) trait FFTElement:
    Sized
    + Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Scalar, Output = Self>
    + Neg<Output = Self>
{
}

impl FFTElement for Scalar {}

impl FFTElement for G1Projective {}

/// In-place radix-2 decimation-in-time transform.
///
/// `twiddle_factors[s]` must hold the butterfly root for stage `s`, ie a
/// primitive `2^(s+1)`-th root of unity; the slice must cover `log2(a.len())`
/// stages. Passing the inverse roots computes the unscaled inverse transform.
pub(crate) fn fft_inplace<T: FFTElement>(twiddle_factors: &[Scalar], a: &mut [T]) {
    let n = a.len();
    let log_n = log2_pow2(n);
    assert_eq!(n, 1 << log_n);
    assert!(twiddle_factors.len() >= log_n as usize);

    for k in 0..n {
        let rk = bitreverse(k as u32, log_n) as usize;
        if k < rk {
            a.swap(rk, k);
        }
    }

    let mut m = 1;
    for s in 0..log_n {
        let w_m = twiddle_factors[s as usize];
        for k in (0..n).step_by(2 * m) {
            let mut w = Scalar::ONE;
            for j in 0..m {
                let t = if w == Scalar::ONE {
                    a[k + j + m]
                } else if w == -Scalar::ONE {
                    -a[k + j + m]
                } else {
                    a[k + j + m] * w
                };
                let u = a[k + j];
                a[k + j] = u + t;
                a[k + j + m] = u - t;
                w *= w_m;
            }
        }
        m *= 2;
    }
}

fn bitreverse(mut n: u32, l: u32) -> u32 {
    let mut r = 0;
    for _ in 0..l {
        r = (r << 1) | (n & 1);
        n >>= 1;
    }
    r
}

fn log2_pow2(n: usize) -> u32 {
    n.trailing_zeros()
}

/// Stage roots for a width-`n` transform: entry `s` is `omega^(n / 2^(s+1))`.
///
/// A transform of any power-of-two length `m <= n` uses the first `log2(m)`
/// entries of the same table, since the stage-`s` butterfly root only depends
/// on `s`, not on the transform length.
pub(crate) fn precompute_twiddle_factors<F: Field>(omega: &F, n: usize) -> Vec<F> {
    let log_n = log2_pow2(n);
    (0..log_n)
        .map(|s| omega.pow_vartime([(n / (1 << (s + 1))) as u64]))
        .collect()
}
