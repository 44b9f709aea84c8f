use bls12_381::{ff::Field, G1Projective, Scalar};
use polynomial::PolyCoeff;

use crate::{errors::KzgError, trusted_setup::KzgSettings};

impl KzgSettings {
    /// Computes an opening proof for the evaluation of `polynomial` at `x`.
    ///
    /// The proof is the commitment to the quotient `polynomial / (X - x)`,
    /// computed by Ruffini's rule; this is the one-point specialization of
    /// [`Self::compute_proof_multi`].
    pub fn compute_proof_single(
        &self,
        polynomial: &PolyCoeff,
        x: &Scalar,
    ) -> Result<G1Projective, KzgError> {
        self.commit(&polynomial.divide_by_linear(x))
    }

    /// Computes one combined opening proof for the coset `{x0 * w^i}` of the
    /// `n`-th roots of unity, where `w` is the `n`-th primitive root and `n`
    /// is a power of two.
    ///
    /// The proof is the commitment to the quotient
    /// `polynomial / (X^n - x0^n)`; the divisor vanishes exactly on the
    /// coset. The remainder of the division is the interpolation of the
    /// evaluations over the coset, which has lower degree than the divisor
    /// and therefore does not change the quotient.
    pub fn compute_proof_multi(
        &self,
        polynomial: &PolyCoeff,
        x0: &Scalar,
        n: usize,
    ) -> Result<G1Projective, KzgError> {
        if !n.is_power_of_two() {
            return Err(KzgError::PointCountNotPowerOfTwo { count: n });
        }

        // X^n - x0^n: monic, only the constant term filled in.
        let mut divisor = vec![Scalar::ZERO; n + 1];
        divisor[0] = -x0.pow_vartime([n as u64]);
        divisor[n] = Scalar::ONE;

        let (quotient, _) = polynomial.long_div(&PolyCoeff::from(divisor))?;
        self.commit(&quotient)
    }
}

#[cfg(test)]
mod tests {
    use bls12_381::traits::*;
    use bls12_381::{G1Projective, Scalar};
    use polynomial::PolyCoeff;

    use crate::{insecure_kzg_settings, KzgError};

    #[test]
    fn single_proof_is_the_one_point_coset_proof() {
        let kzg = insecure_kzg_settings(16, 17);
        let poly = PolyCoeff::from((0..16).map(|i| Scalar::from(i as u64 + 5)).collect::<Vec<_>>());
        let x = Scalar::from(25u64);

        let single = kzg.compute_proof_single(&poly, &x).unwrap();
        let multi = kzg.compute_proof_multi(&poly, &x, 1).unwrap();
        assert_eq!(single, multi);
    }

    #[test]
    fn coset_wider_than_polynomial_gives_identity_proof() {
        // The quotient by X^n - x0^n of a polynomial of degree below n is the
        // zero polynomial.
        let kzg = insecure_kzg_settings(16, 17);
        let poly = PolyCoeff::from((0..16).map(|i| Scalar::from(i as u64 + 5)).collect::<Vec<_>>());

        let proof = kzg.compute_proof_multi(&poly, &Scalar::from(3u64), 16).unwrap();
        assert_eq!(proof, G1Projective::identity());
    }

    #[test]
    fn point_count_must_be_a_power_of_two() {
        let kzg = insecure_kzg_settings(16, 17);
        let poly = PolyCoeff::from(vec![Scalar::ONE; 8]);

        assert_eq!(
            kzg.compute_proof_multi(&poly, &Scalar::from(3u64), 6),
            Err(KzgError::PointCountNotPowerOfTwo { count: 6 })
        );
    }
}
