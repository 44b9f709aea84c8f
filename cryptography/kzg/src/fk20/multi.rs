use bls12_381::lincomb::g1_lincomb;
use bls12_381::traits::*;
use bls12_381::{g1_batch_normalize, G1Point, G1Projective, Scalar};
use polynomial::PolyCoeff;

use crate::errors::KzgError;
use crate::fk20::toeplitz::{CirculantMatrix, ToeplitzMatrix};
use crate::fk20::{reverse_bit_order, ProofOrder};
use crate::trusted_setup::KzgSettings;

/// Amortized prover for coset opening proofs.
///
/// Covers `num_points` roots of unity with one combined proof per disjoint
/// coset of `coset_size` points. The quotient system for each coset is a sum
/// of `coset_size` Toeplitz products, one per column of the partitioned
/// coefficient matrix, so an invocation costs one chunk worth of FFTs per
/// column rather than one per proof.
#[derive(Debug)]
pub struct Fk20MultiProver {
    kzg: KzgSettings,
    /// The number of points covered per invocation.
    num_points: usize,
    /// The number of points each proof attests to.
    coset_size: usize,
    /// FFTs of the per-column extended setup vectors, stored transposed and
    /// in affine form: entry `i` holds the `i`-th point of every column, so
    /// the per-invocation accumulation is a single MSM per index.
    x_ext_fft_columns: Vec<Vec<G1Point>>,
}

impl Fk20MultiProver {
    /// Builds a prover that opens polynomials of length `num_points / 2`
    /// over all `num_points / coset_size` cosets of size `coset_size`.
    pub fn new(kzg: KzgSettings, num_points: usize, coset_size: usize) -> Result<Self, KzgError> {
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
        if !coset_size.is_power_of_two() || coset_size > n || n % coset_size != 0 {
            return Err(KzgError::CosetSizeDoesNotDivideDomain {
                coset_size,
                num_points,
            });
        }

        // One extended setup vector per column offset: the setup powers below
        // `n - coset_size` taken in reverse order at stride `coset_size`,
        // padded with the identity to twice the chunk count.
        let chunk_count = n / coset_size;
        let mut x_ext_fft_columns: Vec<Vec<G1Point>> =
            vec![Vec::with_capacity(coset_size); chunk_count * 2];
        for offset in 0..coset_size {
            let mut column = Vec::with_capacity(chunk_count * 2);
            for i in 0..chunk_count.saturating_sub(1) {
                let index = n - coset_size - 1 - offset - i * coset_size;
                column.push(G1Projective::from(kzg.secret_g1[index]));
            }
            column.resize(chunk_count * 2, G1Projective::identity());

            let column_fft = g1_batch_normalize(&kzg.domain().fft_g1(column)?);
            for (i, point) in column_fft.into_iter().enumerate() {
                x_ext_fft_columns[i].push(point);
            }
        }

        Ok(Self {
            kzg,
            num_points,
            coset_size,
            x_ext_fft_columns,
        })
    }

    /// The settings the prover was built over.
    pub fn kzg_settings(&self) -> &KzgSettings {
        &self.kzg
    }

    /// The number of proofs produced per invocation.
    pub fn num_proofs(&self) -> usize {
        self.num_points / self.coset_size
    }

    /// The number of points each proof attests to.
    pub fn coset_size(&self) -> usize {
        self.coset_size
    }

    /// Computes one combined opening proof per coset.
    ///
    /// In `Domain` order, proof `c` covers the coset `{w^c * v^i}` where `w`
    /// is the `num_points`-th primitive root and `v` the `coset_size`-th,
    /// and equals [`KzgSettings::compute_proof_multi`] with shift `w^c`.
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
        let chunk_count = n / self.coset_size;
        let num_proofs = chunk_count * 2;

        // One Toeplitz system per column offset: the rows are the reversed
        // coefficients downsampled at stride `coset_size`.
        let mut reversed = polynomial.0.clone();
        reversed.reverse();

        let mut column_fft_scalars: Vec<Vec<Scalar>> =
            vec![Vec::with_capacity(self.coset_size); num_proofs];
        for offset in 0..self.coset_size {
            let row: Vec<Scalar> = reversed
                .iter()
                .copied()
                .skip(offset)
                .step_by(self.coset_size)
                .collect();
            let circulant = CirculantMatrix::from_toeplitz(ToeplitzMatrix::from_row(row));

            let col_fft = domain.fft_scalars(circulant.row)?;
            for (i, scalar) in col_fft.into_iter().enumerate() {
                column_fft_scalars[i].push(scalar);
            }
        }

        // Aggregate the column systems; entry `i` is an MSM across columns.
        let h_ext_fft: Vec<G1Projective> = self
            .x_ext_fft_columns
            .iter()
            .zip(&column_fft_scalars)
            .map(|(points, scalars)| g1_lincomb(points, scalars).expect("one scalar per column"))
            .collect();

        // The first half of the circulant products is the Toeplitz sum.
        let mut h = domain.ifft_g1_take_n(h_ext_fft, Some(chunk_count))?;

        // Evaluating the quotient commitments over the proof domain yields
        // one proof per coset.
        h.resize(num_proofs, G1Projective::identity());
        let mut proofs = domain.fft_g1(h)?;

        if order == ProofOrder::BitReversed {
            reverse_bit_order(&mut proofs);
        }
        Ok(proofs)
    }
}
