pub mod domain;
mod errors;
mod fft;
pub mod poly_coeff;

pub use domain::Domain;
pub use errors::{DomainError, PolyError};
pub use poly_coeff::PolyCoeff;
