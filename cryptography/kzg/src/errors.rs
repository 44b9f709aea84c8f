use polynomial::{DomainError, PolyError};

/// Errors returned when a caller violates a precondition of the commitment
/// engine.
///
/// Verification functions do not use the error channel for a failed pairing
/// check; they return `Ok(false)`. An `Err` means the operation could not be
/// attempted at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KzgError {
    /// The polynomial has more coefficients than the trusted setup supports.
    PolynomialTooLarge {
        num_coefficients: usize,
        setup_size: usize,
    },
    /// The G1 and G2 halves of the trusted setup have different lengths.
    SetupLengthMismatch { g1_len: usize, g2_len: usize },
    /// The trusted setup does not cover the FFT domain it was paired with.
    SetupSmallerThanDomain {
        setup_size: usize,
        max_width: usize,
    },
    /// The trusted setup has too few points for the requested operation.
    SetupTooSmall {
        required: usize,
        setup_size: usize,
    },
    /// The number of opening points is not a power of two.
    PointCountNotPowerOfTwo { count: usize },
    /// An amortized prover needs at least two opening points.
    TooFewPointsToOpen { num_points: usize },
    /// The opening points do not fit in the FFT domain.
    TooManyPointsToOpen {
        num_points: usize,
        max_width: usize,
    },
    /// The coset size must divide half the number of opening points.
    CosetSizeDoesNotDivideDomain {
        coset_size: usize,
        num_points: usize,
    },
    /// The polynomial length does not match the one the prover was built for.
    PolynomialHasInvalidLength {
        num_coefficients: usize,
        expected_num_coefficients: usize,
    },
    /// Forwarded FFT domain error.
    Domain(DomainError),
    /// Forwarded polynomial arithmetic error.
    Poly(PolyError),
}

impl From<DomainError> for KzgError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<PolyError> for KzgError {
    fn from(err: PolyError) -> Self {
        Self::Poly(err)
    }
}
