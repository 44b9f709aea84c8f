use bls12_381::lincomb::g1_lincomb;
use bls12_381::{G1Point, G1Projective, G2Point};
use polynomial::{Domain, PolyCoeff};

use crate::errors::KzgError;

/// The trusted setup points together with the FFT domain used to create and
/// verify opening proofs.
///
/// `secret_g1[i]` holds `[s^i]_1` and `secret_g2[i]` holds `[s^i]_2` for the
/// unknown setup secret `s`. The settings are immutable after construction
/// and can be shared across threads by reference.
#[derive(Clone, Debug)]
pub struct KzgSettings {
    /// The powers of the secret in G1, used to commit to polynomials.
    pub secret_g1: Vec<G1Point>,
    /// The powers of the secret in G2, used to verify opening proofs.
    pub secret_g2: Vec<G2Point>,
    domain: Domain,
}

impl KzgSettings {
    /// Pairs a trusted setup with the FFT domain proofs will be created over.
    ///
    /// The setup must have as many points as the domain is wide, so that any
    /// polynomial the domain can transform can also be committed to.
    pub fn new(
        secret_g1: Vec<G1Point>,
        secret_g2: Vec<G2Point>,
        domain: Domain,
    ) -> Result<Self, KzgError> {
        if secret_g1.len() != secret_g2.len() {
            return Err(KzgError::SetupLengthMismatch {
                g1_len: secret_g1.len(),
                g2_len: secret_g2.len(),
            });
        }
        if secret_g1.len() < domain.max_width() {
            return Err(KzgError::SetupSmallerThanDomain {
                setup_size: secret_g1.len(),
                max_width: domain.max_width(),
            });
        }

        Ok(Self {
            secret_g1,
            secret_g2,
            domain,
        })
    }

    /// The FFT domain the settings were built over.
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// The number of setup points, one more than the largest available power
    /// of the secret.
    pub fn setup_size(&self) -> usize {
        self.secret_g1.len()
    }

    /// Commits to a polynomial in monomial form: `sum_i p_i * [s^i]_1`.
    ///
    /// The zero polynomial commits to the group identity.
    pub fn commit(&self, polynomial: &PolyCoeff) -> Result<G1Projective, KzgError> {
        if polynomial.len() > self.secret_g1.len() {
            return Err(KzgError::PolynomialTooLarge {
                num_coefficients: polynomial.len(),
                setup_size: self.secret_g1.len(),
            });
        }

        Ok(
            g1_lincomb(&self.secret_g1[..polynomial.len()], polynomial)
                .expect("number of setup points equals the number of coefficients"),
        )
    }
}

#[cfg(test)]
mod tests {
    use bls12_381::traits::*;
    use bls12_381::{G1Projective, Scalar};
    use polynomial::{Domain, PolyCoeff};

    use crate::{insecure_kzg_settings, KzgError, KzgSettings};

    #[test]
    fn commitment_is_linear() {
        let kzg = insecure_kzg_settings(16, 17);

        let p = PolyCoeff::from((0..16).map(|i| Scalar::from(i as u64 + 2)).collect::<Vec<_>>());
        let q = PolyCoeff::from((0..16).map(|i| Scalar::from(i as u64 * 3)).collect::<Vec<_>>());
        let alpha = Scalar::from(91u64);
        let beta = Scalar::from(173u64);

        let scale = |poly: &PolyCoeff, factor: &Scalar| {
            PolyCoeff::from(poly.iter().map(|c| c * factor).collect::<Vec<_>>())
        };
        let combined = scale(&p, &alpha).add(&scale(&q, &beta));

        let commit_combined = kzg.commit(&combined).unwrap();
        let commit_p = kzg.commit(&p).unwrap();
        let commit_q = kzg.commit(&q).unwrap();

        assert_eq!(commit_combined, commit_p * alpha + commit_q * beta);
    }

    #[test]
    fn zero_polynomial_commits_to_identity() {
        let kzg = insecure_kzg_settings(16, 17);
        let commitment = kzg.commit(&PolyCoeff::default()).unwrap();
        assert_eq!(commitment, G1Projective::identity());
    }

    #[test]
    fn too_long_polynomial_is_rejected() {
        let kzg = insecure_kzg_settings(16, 17);
        let poly = PolyCoeff::from(vec![Scalar::ONE; 32]);

        assert_eq!(
            kzg.commit(&poly),
            Err(KzgError::PolynomialTooLarge {
                num_coefficients: 32,
                setup_size: kzg.setup_size()
            })
        );
    }

    #[test]
    fn setup_must_cover_the_domain() {
        let kzg = insecure_kzg_settings(16, 17);

        let result = KzgSettings::new(
            kzg.secret_g1[..8].to_vec(),
            kzg.secret_g2[..8].to_vec(),
            Domain::new(16),
        );
        assert_eq!(
            result.unwrap_err(),
            KzgError::SetupSmallerThanDomain {
                setup_size: 8,
                max_width: 16
            }
        );

        let result = KzgSettings::new(
            kzg.secret_g1.clone(),
            kzg.secret_g2[..8].to_vec(),
            Domain::new(16),
        );
        assert_eq!(
            result.unwrap_err(),
            KzgError::SetupLengthMismatch {
                g1_len: 17,
                g2_len: 8
            }
        );
    }
}
