use pairing::{MillerLoopResult, MultiMillerLoop};
use traits::*;

pub mod lincomb;

// Re-export ff and group, so other crates do not need to directly
// import (and independently version) them.
pub use ff;
pub use group;

pub mod traits {
    pub use ff::{Field, PrimeField};
    pub use group::{prime::PrimeCurveAffine, Curve, Group};
}

/// Affine representation of a point in the BLS12-381 G1 curve group.
pub type G1Point = blstrs::G1Affine;

/// Projective representation of a point in the BLS12-381 G1 curve group.
pub type G1Projective = blstrs::G1Projective;

/// Affine representation of a point in the BLS12-381 G2 curve group.
pub type G2Point = blstrs::G2Affine;

/// Projective representation of a point in the BLS12-381 G2 curve group.
pub type G2Projective = blstrs::G2Projective;

/// Precomputed G2 point for efficient pairing computations.
pub type G2Prepared = blstrs::G2Prepared;

/// Scalar field element for the BLS12-381 curve.
pub type Scalar = blstrs::Scalar;

/// Checks whether the product of pairings over the given G1 × G2 pairs equals
/// the identity.
pub fn multi_pairings(pairs: &[(&G1Point, &G2Prepared)]) -> bool {
    blstrs::Bls12::multi_miller_loop(pairs)
        .final_exponentiation()
        .is_identity()
        .into()
}

/// Checks the pairing equality `e(a1, a2) == e(b1, b2)`.
///
/// Internally this negates one side and checks that the product of the two
/// pairings is the identity, which needs a single Miller loop.
pub fn pairings_verify(a1: &G1Point, a2: &G2Point, b1: &G1Point, b2: &G2Point) -> bool {
    let neg_a1 = -*a1;
    multi_pairings(&[
        (&neg_a1, &G2Prepared::from(*a2)),
        (b1, &G2Prepared::from(*b2)),
    ])
}

/// Converts G1 projective points to their affine representation in a single
/// batch inversion pass.
pub fn g1_batch_normalize(projective_points: &[G1Projective]) -> Vec<G1Point> {
    batch_normalize_points(projective_points)
}

/// Converts G2 projective points to their affine representation in a single
/// batch inversion pass.
pub fn g2_batch_normalize(projective_points: &[G2Projective]) -> Vec<G2Point> {
    batch_normalize_points(projective_points)
}

fn batch_normalize_points<T: PrimeCurveAffine>(points: &[T::Curve]) -> Vec<T>
where
    T::Curve: Curve<AffineRepr = T>,
{
    let mut affine_points = vec![T::identity(); points.len()];
    T::Curve::batch_normalize(points, &mut affine_points);
    affine_points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairing_product_with_negation() {
        let g1 = G1Point::generator();
        let g2 = G2Point::generator();
        let g2_prep = G2Prepared::from(g2);
        let g1_neg = -g1;

        // e(g1, g2) * e(-g1, g2) == 1
        assert!(multi_pairings(&[(&g1, &g2_prep), (&g1_neg, &g2_prep)]));

        // e(g1, g2)^2 != 1
        assert!(!multi_pairings(&[(&g1, &g2_prep), (&g1, &g2_prep)]));
    }

    #[test]
    fn pairings_verify_is_bilinear() {
        let a = Scalar::from(11u64);
        let b = Scalar::from(29u64);

        let a_g1 = G1Point::from(G1Projective::generator() * a);
        let b_g2 = G2Point::from(G2Projective::generator() * b);
        let ab_g1 = G1Point::from(G1Projective::generator() * (a * b));

        // e([a]_1, [b]_2) == e([ab]_1, [1]_2)
        assert!(pairings_verify(
            &a_g1,
            &b_g2,
            &ab_g1,
            &G2Point::generator()
        ));
        // and not for the wrong product
        assert!(!pairings_verify(
            &a_g1,
            &b_g2,
            &G1Point::generator(),
            &G2Point::generator()
        ));
    }

    #[test]
    fn batch_normalize_matches_pointwise_conversion() {
        use rand::thread_rng;
        let mut rng = thread_rng();
        let points: Vec<G1Projective> = (0..32).map(|_| G1Projective::random(&mut rng)).collect();

        let normalized = g1_batch_normalize(&points);

        assert_eq!(normalized.len(), points.len());
        for (affine, projective) in normalized.iter().zip(points.iter()) {
            assert_eq!(*affine, G1Point::from(*projective));
        }
    }

    #[test]
    fn batch_normalize_empty_and_identity() {
        assert!(g1_batch_normalize(&[]).is_empty());

        let points = vec![
            G1Projective::identity(),
            G1Projective::generator(),
            G1Projective::identity(),
        ];
        let affine = g1_batch_normalize(&points);
        assert!(bool::from(affine[0].is_identity()));
        assert!(!bool::from(affine[1].is_identity()));
        assert!(bool::from(affine[2].is_identity()));
    }

    #[test]
    fn g2_batch_normalize_matches_pointwise_conversion() {
        let points = vec![
            G2Projective::identity(),
            G2Projective::generator(),
            G2Projective::generator() * Scalar::from(2u64),
        ];
        let affine = g2_batch_normalize(&points);
        assert_eq!(affine.len(), points.len());
        for (affine, projective) in affine.iter().zip(points.iter()) {
            assert_eq!(*affine, G2Point::from(*projective));
        }
    }
}
