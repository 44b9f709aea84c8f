use bls12_381::traits::*;
use bls12_381::G1Projective;
use polynomial::PolyCoeff;

use crate::errors::KzgError;
use crate::fk20::toeplitz::{CirculantMatrix, ToeplitzMatrix};
use crate::fk20::{reverse_bit_order, ProofOrder};
use crate::trusted_setup::KzgSettings;

/// Amortized prover for single-point opening proofs.
///
/// For a polynomial of length `n`, produces the proofs for the openings at
/// every `2n`-th root of unity in `O(n log n)` group operations, instead of
/// the `O(n^2)` a proof-by-proof computation would cost.
#[derive(Debug)]
pub struct Fk20SingleProver {
    kzg: KzgSettings,
    /// The number of points opened per invocation, twice the polynomial
    /// length.
    num_points: usize,
    /// FFT of the extended setup vector the Toeplitz system is multiplied
    /// by: the first `n - 1` powers of the secret in reverse order, padded
    /// with the identity.
    x_ext_fft: Vec<G1Projective>,
}

impl Fk20SingleProver {
    /// Builds a prover that opens polynomials of length `num_points / 2` at
    /// every `num_points`-th root of unity.
    pub fn new(kzg: KzgSettings, num_points: usize) -> Result<Self, KzgError> {
        if !num_points.is_power_of_two() {
            return Err(KzgError::PointCountNotPowerOfTwo { count: num_points });
        }
        if num_points < 2 {
            return Err(KzgError::TooFewPointsToOpen { num_points });
        }
        if num_points > kzg.domain().max_width() {
            return Err(KzgError::TooManyPointsToOpen {
                num_points,
                max_width: kzg.domain().max_width(),
            });
        }

        let n = num_points / 2;
        let mut x = Vec::with_capacity(num_points);
        for i in 0..n.saturating_sub(1) {
            x.push(G1Projective::from(kzg.secret_g1[n - 2 - i]));
        }
        x.resize(num_points, G1Projective::identity());
        let x_ext_fft = kzg.domain().fft_g1(x)?;

        Ok(Self {
            kzg,
            num_points,
            x_ext_fft,
        })
    }

    /// The settings the prover was built over.
    pub fn kzg_settings(&self) -> &KzgSettings {
        &self.kzg
    }

    /// The number of proofs produced per invocation.
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// Computes the opening proofs for `polynomial` at every
    /// `num_points`-th root of unity.
    ///
    /// In `Domain` order, proof `j` opens the polynomial at `w^j` and equals
    /// [`KzgSettings::compute_proof_single`] at that point.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn open_all(
        &self,
        polynomial: &PolyCoeff,
        order: ProofOrder,
    ) -> Result<Vec<G1Projective>, KzgError> {
        let n = self.num_points / 2;
        if polynomial.len() != n {
            return Err(KzgError::PolynomialHasInvalidLength {
                num_coefficients: polynomial.len(),
                expected_num_coefficients: n,
            });
        }
        let domain = self.kzg.domain();

        // The quotient coefficient vector is a Toeplitz product against the
        // setup vector; the matrix rows are the reversed coefficients.
        let mut row = polynomial.0.clone();
        row.reverse();
        let circulant = CirculantMatrix::from_toeplitz(ToeplitzMatrix::from_row(row));

        let col_fft = domain.fft_scalars(circulant.row)?;
        let h_ext_fft: Vec<G1Projective> = self
            .x_ext_fft
            .iter()
            .zip(col_fft)
            .map(|(point, scalar)| point * scalar)
            .collect();

        // The first half of the circulant product is the Toeplitz product.
        let mut h = domain.ifft_g1_take_n(h_ext_fft, Some(n))?;

        // Evaluating the quotient commitments over the doubled domain yields
        // one proof per opening point.
        h.resize(self.num_points, G1Projective::identity());
        let mut proofs = domain.fft_g1(h)?;

        if order == ProofOrder::BitReversed {
            reverse_bit_order(&mut proofs);
        }
        Ok(proofs)
    }
}
