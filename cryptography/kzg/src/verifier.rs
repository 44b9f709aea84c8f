use bls12_381::traits::*;
use bls12_381::{pairings_verify, G1Projective, G2Point, G2Projective, Scalar};
use polynomial::PolyCoeff;

use crate::{errors::KzgError, trusted_setup::KzgSettings};

impl KzgSettings {
    /// Verifies an opening proof that the committed polynomial evaluates to
    /// `y` at `x`.
    ///
    /// Checks the pairing equation
    /// `e(C - [y]_1, [1]_2) == e(proof, [s]_2 - [x]_2)`. A proof that fails
    /// the check yields `Ok(false)`; `Err` means the check could not be
    /// attempted.
    pub fn check_proof_single(
        &self,
        commitment: &G1Projective,
        proof: &G1Projective,
        x: &Scalar,
        y: &Scalar,
    ) -> Result<bool, KzgError> {
        if self.secret_g2.len() < 2 {
            return Err(KzgError::SetupTooSmall {
                required: 2,
                setup_size: self.secret_g2.len(),
            });
        }

        // [s]_2 - [x]_2
        let s_minus_x = G2Projective::from(self.secret_g2[1]) - G2Projective::generator() * x;
        // C - [y]_1
        let commitment_minus_y = *commitment - G1Projective::generator() * y;

        Ok(pairings_verify(
            &commitment_minus_y.into(),
            &G2Point::generator(),
            &(*proof).into(),
            &s_minus_x.into(),
        ))
    }

    /// Verifies a combined opening proof for the evaluations `ys` over the
    /// coset `{x * w^i}`, where `w` is the primitive root of order
    /// `ys.len()`.
    ///
    /// The interpolation polynomial through the coset points is recovered by
    /// an inverse FFT over the subgroup followed by rescaling coefficient `i`
    /// by `x^-i`, and the check is
    /// `e(C - [I(s)]_1, [1]_2) == e(proof, [s^n]_2 - [x^n]_2)`.
    pub fn check_proof_multi(
        &self,
        commitment: &G1Projective,
        proof: &G1Projective,
        x: &Scalar,
        ys: &[Scalar],
    ) -> Result<bool, KzgError> {
        let n = ys.len();
        if !n.is_power_of_two() {
            return Err(KzgError::PointCountNotPowerOfTwo { count: n });
        }
        if n >= self.secret_g2.len() {
            return Err(KzgError::SetupTooSmall {
                required: n + 1,
                setup_size: self.secret_g2.len(),
            });
        }

        // Interpolate over the order-n subgroup, then rescale so the
        // polynomial interpolates the coset: I(x * w^i) = ys[i].
        let mut interpolation = self.domain().ifft_scalars(ys.to_vec())?;
        let x_inv = x.invert().expect("coset shift is not zero");
        let mut x_inv_pow = Scalar::ONE;
        for coeff in interpolation.iter_mut().skip(1) {
            x_inv_pow *= x_inv;
            *coeff *= x_inv_pow;
        }
        let interpolation_commitment = self.commit(&PolyCoeff::from(interpolation))?;

        let x_pow_n = x.pow_vartime([n as u64]);
        // [s^n]_2 - [x^n]_2
        let s_pow_n_minus_x_pow_n =
            G2Projective::from(self.secret_g2[n]) - G2Projective::generator() * x_pow_n;
        // C - [I(s)]_1
        let commitment_minus_interpolation = *commitment - interpolation_commitment;

        Ok(pairings_verify(
            &commitment_minus_interpolation.into(),
            &G2Point::generator(),
            &(*proof).into(),
            &s_pow_n_minus_x_pow_n.into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use bls12_381::traits::*;
    use bls12_381::Scalar;
    use polynomial::{Domain, PolyCoeff};

    use crate::{insecure_kzg_settings, KzgError};

    fn test_polynomial() -> PolyCoeff {
        let coeffs: Vec<Scalar> = [
            1u64, 2, 3, 4, 7, 7, 7, 7, 13, 13, 13, 13, 13, 13, 13, 13,
        ]
        .into_iter()
        .map(Scalar::from)
        .collect();
        PolyCoeff::from(coeffs)
    }

    #[test]
    fn single_opening_roundtrip() {
        let kzg = insecure_kzg_settings(16, 17);
        let poly = test_polynomial();
        let x = Scalar::from(25u64);
        let y = poly.eval(&x);

        let commitment = kzg.commit(&poly).unwrap();
        let proof = kzg.compute_proof_single(&poly, &x).unwrap();

        assert!(kzg.check_proof_single(&commitment, &proof, &x, &y).unwrap());
        // Any other claimed evaluation must be rejected.
        assert!(!kzg
            .check_proof_single(&commitment, &proof, &x, &(y + Scalar::ONE))
            .unwrap());
    }

    #[test]
    fn coset_opening_roundtrip() {
        let kzg = insecure_kzg_settings(16, 17);
        let poly = test_polynomial();
        let n = 8;
        let x0 = Scalar::from(5431u64);

        let coset_domain = Domain::new(n);
        let ys: Vec<Scalar> = coset_domain
            .roots
            .iter()
            .map(|root| poly.eval(&(x0 * root)))
            .collect();

        let commitment = kzg.commit(&poly).unwrap();
        let proof = kzg.compute_proof_multi(&poly, &x0, n).unwrap();

        assert!(kzg
            .check_proof_multi(&commitment, &proof, &x0, &ys)
            .unwrap());

        // Tampering with one evaluation must be caught.
        let mut tampered = ys;
        tampered[4] += Scalar::ONE;
        assert!(!kzg
            .check_proof_multi(&commitment, &proof, &x0, &tampered)
            .unwrap());
    }

    #[test]
    fn verification_rejects_bad_sizes() {
        let kzg = insecure_kzg_settings(16, 17);
        let poly = test_polynomial();
        let commitment = kzg.commit(&poly).unwrap();
        let proof = kzg
            .compute_proof_single(&poly, &Scalar::from(2u64))
            .unwrap();

        // Not a power of two.
        let ys = vec![Scalar::ONE; 6];
        assert_eq!(
            kzg.check_proof_multi(&commitment, &proof, &Scalar::from(2u64), &ys),
            Err(KzgError::PointCountNotPowerOfTwo { count: 6 })
        );

        // Would need [s^32]_2, which a setup of 17 points does not have.
        let ys = vec![Scalar::ONE; 32];
        assert_eq!(
            kzg.check_proof_multi(&commitment, &proof, &Scalar::from(2u64), &ys),
            Err(KzgError::SetupTooSmall {
                required: 33,
                setup_size: 17
            })
        );
    }
}
