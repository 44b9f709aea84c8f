use std::ops::{Deref, DerefMut};

use bls12_381::{ff::Field, Scalar};

use crate::errors::PolyError;

/// A polynomial in monomial form over the field `Scalar`.
///
/// Internally stores coefficients in ascending order of degree:
///
/// ```text
/// Layout: x^0 * a_0 + x^1 * a_1 + ... + x^(n-1) * a_(n-1)
/// ```
///
/// An empty coefficient vector is the zero polynomial.
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct PolyCoeff(pub Vec<Scalar>);

impl PolyCoeff {
    /// Adds two polynomials `self + other` and returns the result.
    ///
    /// Polynomials may have different lengths; the shorter one is padded with
    /// zeros.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut result = self.clone();
        if other.len() > result.len() {
            result.resize(other.len(), Scalar::ZERO);
        }
        for (i, &b) in other.iter().enumerate() {
            result[i] += b;
        }
        result.truncate_trailing_zeros();
        result
    }

    /// Computes the additive inverse `-self` and returns the result.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self(self.iter().map(|c| -*c).collect())
    }

    /// Subtracts `other` from `self`, returning `self - other`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Evaluates the polynomial at the given scalar point `x`.
    ///
    /// Uses Horner's method; the zero polynomial evaluates to zero.
    #[must_use]
    pub fn eval(&self, x: &Scalar) -> Scalar {
        let mut result = Scalar::ZERO;
        for coeff in self.iter().rev() {
            result = result * x + coeff;
        }
        result
    }

    /// Multiplies two polynomials `self * other` and returns the result.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut result = Self(vec![
            Scalar::ZERO;
            (self.len() + other.len()).saturating_sub(1)
        ]);
        for (i, a) in self.iter().enumerate() {
            for (j, b) in other.iter().enumerate() {
                result[i + j] += a * b;
            }
        }

        result.truncate_trailing_zeros();
        result
    }

    /// Dense polynomial long division, returning `(quotient, remainder)`.
    ///
    /// Trailing zero coefficients of the divisor are ignored; dividing by the
    /// zero polynomial is an error. When `self` is shorter than the divisor
    /// the quotient is the zero polynomial and the remainder is `self`.
    pub fn long_div(&self, divisor: &Self) -> Result<(Self, Self), PolyError> {
        let divisor_len = divisor
            .iter()
            .rposition(|c| !bool::from(c.is_zero()))
            .map_or(0, |i| i + 1);
        if divisor_len == 0 {
            return Err(PolyError::DivisorIsZero);
        }
        let divisor = &divisor[..divisor_len];

        if self.len() < divisor_len {
            return Ok((Self(Vec::new()), self.clone()));
        }

        let mut remainder = self.0.clone();
        let mut quotient = vec![Scalar::ZERO; self.len() - divisor_len + 1];
        let leading_inv = divisor[divisor_len - 1]
            .invert()
            .expect("leading coefficient is nonzero");

        for q_index in (0..quotient.len()).rev() {
            let factor = remainder[q_index + divisor_len - 1] * leading_inv;
            if bool::from(factor.is_zero()) {
                continue;
            }
            quotient[q_index] = factor;
            for (i, coeff) in divisor.iter().enumerate() {
                remainder[q_index + i] -= factor * coeff;
            }
        }

        // Everything at or above the divisor degree has been eliminated.
        remainder.truncate(divisor_len - 1);
        let mut remainder = Self(remainder);
        remainder.truncate_trailing_zeros();

        Ok((Self(quotient), remainder))
    }

    /// Divides `self` by `x - z` using Ruffini's rule, discarding the
    /// remainder.
    #[must_use]
    pub fn divide_by_linear(&self, z: &Scalar) -> Self {
        let mut quotient: Vec<Scalar> = Vec::with_capacity(self.len());
        let mut k = Scalar::ZERO;

        for coeff in self.iter().rev() {
            let t = *coeff + k;
            quotient.push(t);
            k = z * t;
        }

        // Pop off the remainder term
        quotient.pop();

        // Reverse the results as monomial form stores coefficients starting
        // with the lowest degree
        quotient.reverse();
        Self(quotient)
    }

    fn truncate_trailing_zeros(&mut self) {
        while self.last().is_some_and(|c| c.is_zero().into()) {
            self.pop();
        }
    }
}

impl Deref for PolyCoeff {
    type Target = Vec<Scalar>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PolyCoeff {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Scalar>> for PolyCoeff {
    fn from(value: Vec<Scalar>) -> Self {
        Self(value)
    }
}
