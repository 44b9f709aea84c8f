use bls12_381::traits::*;
use bls12_381::{G1Projective, Scalar};

use crate::errors::DomainError;
use crate::fft::{fft_inplace, precompute_twiddle_factors};

/// A power-of-two set of roots of unity, over which polynomials can be
/// efficiently evaluated and interpolated using FFTs.
///
/// Transforms are accepted at any power-of-two length up to the domain width,
/// so a single domain serves every subgroup it contains.
#[derive(Debug, Clone)]
pub struct Domain {
    /// `roots[i] = generator^i`; the length is the domain width.
    pub roots: Vec<Scalar>,
    /// Generator for this domain.
    // Element has order `max_width`.
    pub generator: Scalar,
    /// Inverse of the generator, cached for the inverse transforms.
    pub generator_inv: Scalar,
    /// Per-stage butterfly roots for the forward transform.
    twiddle_factors: Vec<Scalar>,
    /// Per-stage butterfly roots for the inverse transform.
    twiddle_factors_inv: Vec<Scalar>,
}

impl Domain {
    /// Creates a domain of the given width, padded up to the next power of
    /// two if necessary.
    ///
    /// Panics if the width exceeds the two-adicity of the scalar field.
    pub fn new(width: usize) -> Self {
        let width = if width.is_power_of_two() {
            width
        } else {
            width.next_power_of_two()
        };

        let generator = Self::generator_for_width(width);
        let generator_inv = generator.invert().expect("generator is not zero");

        let mut roots = Vec::with_capacity(width);
        roots.push(Scalar::ONE);
        for i in 1..width {
            let prev_root = roots[i - 1];
            roots.push(prev_root * generator);
        }
        // The generator has order `width`, so the powers must close the cycle.
        debug_assert_eq!(roots[width - 1] * generator, Scalar::ONE);

        let twiddle_factors = precompute_twiddle_factors(&generator, width);
        let twiddle_factors_inv = precompute_twiddle_factors(&generator_inv, width);

        Self {
            roots,
            generator,
            generator_inv,
            twiddle_factors,
            twiddle_factors_inv,
        }
    }

    /// Computes a primitive `width`-th root of unity.
    fn generator_for_width(width: usize) -> Scalar {
        assert!(width.is_power_of_two());

        let log_width = width.trailing_zeros();
        assert!(
            log_width <= Scalar::S,
            "two adicity is {} but group width needed is 2^{log_width}",
            Scalar::S
        );

        let exponent: u64 = 1 << (u64::from(Scalar::S) - u64::from(log_width));
        Scalar::ROOT_OF_UNITY.pow_vartime([exponent])
    }

    /// The width of the domain.
    ///
    /// Note: This is always a power of two.
    pub fn max_width(&self) -> usize {
        self.roots.len()
    }

    /// Validates a transform length: it must be a power of two no larger than
    /// the domain width. Returns the number of butterfly stages.
    fn transform_stages(&self, length: usize) -> Result<usize, DomainError> {
        if !length.is_power_of_two() {
            return Err(DomainError::LengthNotPowerOfTwo { length });
        }
        if length > self.max_width() {
            return Err(DomainError::LengthExceedsDomain {
                length,
                max_width: self.max_width(),
            });
        }
        Ok(length.trailing_zeros() as usize)
    }

    /// Evaluates a polynomial at the first `values.len()` subgroup of the
    /// domain, ie the roots of unity of that order.
    pub fn fft_scalars(&self, mut values: Vec<Scalar>) -> Result<Vec<Scalar>, DomainError> {
        let stages = self.transform_stages(values.len())?;
        fft_inplace(&self.twiddle_factors[..stages], &mut values);
        Ok(values)
    }

    /// Interpolates evaluations over the subgroup of order `values.len()`
    /// into a polynomial in monomial form.
    pub fn ifft_scalars(&self, mut values: Vec<Scalar>) -> Result<Vec<Scalar>, DomainError> {
        let stages = self.transform_stages(values.len())?;
        fft_inplace(&self.twiddle_factors_inv[..stages], &mut values);

        let size_inv = Scalar::from(values.len() as u64)
            .invert()
            .expect("transform length is nonzero");
        for value in values.iter_mut() {
            *value *= size_inv;
        }
        Ok(values)
    }

    /// Computes an FFT over G1 group elements.
    ///
    /// Note: Thinking about an FFT as multiple inner products between powers
    /// of the roots and the input makes this easier to visualize.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn fft_g1(&self, mut points: Vec<G1Projective>) -> Result<Vec<G1Projective>, DomainError> {
        let stages = self.transform_stages(points.len())?;
        fft_inplace(&self.twiddle_factors[..stages], &mut points);
        Ok(points)
    }

    /// Computes an inverse FFT over G1 group elements.
    pub fn ifft_g1(&self, points: Vec<G1Projective>) -> Result<Vec<G1Projective>, DomainError> {
        self.ifft_g1_take_n(points, None)
    }

    /// Computes an inverse FFT over G1 group elements, returning only the
    /// first `n` results.
    ///
    /// Truncating before the final scaling saves a scalar multiplication per
    /// dropped element.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn ifft_g1_take_n(
        &self,
        mut points: Vec<G1Projective>,
        n: Option<usize>,
    ) -> Result<Vec<G1Projective>, DomainError> {
        let stages = self.transform_stages(points.len())?;
        fft_inplace(&self.twiddle_factors_inv[..stages], &mut points);

        let transform_len = points.len();
        if let Some(num_to_take) = n {
            assert!(num_to_take <= points.len());
            points.truncate(num_to_take);
        }

        let size_inv = Scalar::from(transform_len as u64)
            .invert()
            .expect("transform length is nonzero");
        for point in points.iter_mut() {
            *point *= size_inv;
        }
        Ok(points)
    }
}
