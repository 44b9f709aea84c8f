use crate::{traits::*, G1Point, G1Projective, Scalar};

/// A multi-scalar multiplication over G1 elements.
///
/// Note: "unchecked" refers to the fact that blst will return the identity
/// element if any of the points are the identity element, so callers must
/// ensure that no identity points are present.
///
/// Returns None if the points and the scalars are not the same length.
pub fn g1_lincomb_unchecked(points: &[G1Point], scalars: &[Scalar]) -> Option<G1Projective> {
    (points.len() == scalars.len()).then(|| {
        // Convert to projective, since the API forces us to do this
        let proj_points: Vec<_> = points.iter().map(Into::into).collect();
        G1Projective::multi_exp(&proj_points, scalars)
    })
}

/// A multi-scalar multiplication over G1 elements.
///
/// Returns None if the points and the scalars are not the same length.
///
/// This is a safe wrapper around [`g1_lincomb_unchecked`]: identity points
/// are filtered out before the MSM, and an all-identity (or empty) input
/// yields the group identity.
pub fn g1_lincomb(points: &[G1Point], scalars: &[Scalar]) -> Option<G1Projective> {
    if points.len() != scalars.len() {
        return None;
    }

    let (points_filtered, scalars_filtered): (Vec<_>, Vec<_>) = points
        .iter()
        .zip(scalars)
        .filter(|(point, _)| !(bool::from(point.is_identity())))
        .map(|(point, scalar)| (*point, *scalar))
        .unzip();

    if points_filtered.is_empty() {
        Some(G1Projective::identity())
    } else {
        g1_lincomb_unchecked(&points_filtered, &scalars_filtered)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn lincomb_empty_input_is_identity() {
        let result = g1_lincomb(&[], &[]).expect("lengths match");
        assert_eq!(result, G1Projective::identity());
    }

    #[test]
    fn lincomb_length_mismatch() {
        let points = vec![G1Point::generator()];
        let scalars = vec![];
        assert_eq!(g1_lincomb(&points, &scalars), None);
        assert_eq!(g1_lincomb_unchecked(&points, &scalars), None);
    }

    #[test]
    fn lincomb_filters_identity_points() {
        let g = G1Point::generator();

        // The identity point in the middle must not collapse the whole sum.
        let points = vec![g, G1Point::identity(), g];
        let scalars = vec![Scalar::ONE, Scalar::ONE, Scalar::ONE];

        let result = g1_lincomb(&points, &scalars).expect("lengths match");
        assert_eq!(result, G1Projective::generator() * Scalar::from(2u64));
    }

    #[test]
    fn lincomb_matches_naive_sum() {
        let mut rng = StdRng::seed_from_u64(42);

        let points: Vec<G1Point> = (0..10)
            .map(|_| G1Projective::random(&mut rng).into())
            .collect();
        let scalars: Vec<Scalar> = (0..10).map(|_| Scalar::random(&mut rng)).collect();

        let expected: G1Projective = points
            .iter()
            .zip(&scalars)
            .map(|(point, scalar)| G1Projective::from(*point) * scalar)
            .sum();

        let result = g1_lincomb(&points, &scalars).expect("lengths match");
        assert_eq!(result, expected);
    }
}
