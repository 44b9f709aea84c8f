mod errors;
pub mod fk20;
mod prover;
mod trusted_setup;
mod verifier;

pub use errors::KzgError;
pub use fk20::{Fk20MultiProver, Fk20SingleProver, ProofOrder};
pub use trusted_setup::KzgSettings;

/// Builds a deterministic setup from a fixed, known secret.
///
/// Insecure by construction and only reachable from tests: anyone who knows
/// the secret can forge opening proofs.
#[cfg(test)]
pub(crate) fn insecure_kzg_settings(width: usize, setup_size: usize) -> KzgSettings {
    use bls12_381::traits::*;
    use bls12_381::{g1_batch_normalize, g2_batch_normalize, G1Projective, G2Projective, Scalar};
    use polynomial::Domain;

    let secret = Scalar::from_u128(1_927_409_816_240_961_209_460_912_649_124u128);

    let g1_gen = G1Projective::generator();
    let g2_gen = G2Projective::generator();

    let mut g1_points = Vec::with_capacity(setup_size);
    let mut g2_points = Vec::with_capacity(setup_size);
    let mut secret_pow = Scalar::ONE;
    for _ in 0..setup_size {
        g1_points.push(g1_gen * secret_pow);
        g2_points.push(g2_gen * secret_pow);
        secret_pow *= secret;
    }

    KzgSettings::new(
        g1_batch_normalize(&g1_points),
        g2_batch_normalize(&g2_points),
        Domain::new(width),
    )
    .expect("setup covers the domain")
}
