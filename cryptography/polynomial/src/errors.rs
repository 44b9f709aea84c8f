/// Errors returned by the FFT methods on [`crate::Domain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// The input length is not a power of two.
    LengthNotPowerOfTwo { length: usize },
    /// The input is longer than the domain it is being transformed over.
    LengthExceedsDomain { length: usize, max_width: usize },
}

/// Errors returned by polynomial arithmetic on [`crate::PolyCoeff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolyError {
    /// Division by the zero polynomial.
    DivisorIsZero,
}
