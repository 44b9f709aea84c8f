use bls12_381::traits::Field;
use bls12_381::Scalar;

/// A matrix that is constant along its diagonals, represented by its first
/// row and first column. The two share their first element.
#[derive(Debug, Clone)]
pub(crate) struct ToeplitzMatrix {
    pub(crate) row: Vec<Scalar>,
    pub(crate) col: Vec<Scalar>,
}

/// A circulant matrix, represented by its defining vector.
///
/// Circulant matrices diagonalize under the DFT: multiplying one by a vector
/// is an FFT of the defining vector, an FFT of the input, a pointwise
/// product and an inverse FFT.
#[derive(Debug, Clone)]
pub(crate) struct CirculantMatrix {
    pub(crate) row: Vec<Scalar>,
}

impl ToeplitzMatrix {
    pub(crate) fn new(row: Vec<Scalar>, col: Vec<Scalar>) -> Self {
        assert!(
            !row.is_empty() && !col.is_empty(),
            "cannot initialize a Toeplitz matrix with an empty row or column"
        );

        Self { row, col }
    }

    /// The Toeplitz matrix whose first row is `row` and whose remaining
    /// column entries are zero. The quotient systems the provers build are
    /// always of this shape.
    pub(crate) fn from_row(row: Vec<Scalar>) -> Self {
        let mut col = vec![Scalar::ZERO; row.len()];
        col[0] = row[0];
        Self::new(row, col)
    }
}

impl CirculantMatrix {
    /// Embeds a `k x k` Toeplitz matrix into a `2k x 2k` circulant whose
    /// top-left block is the Toeplitz matrix.
    ///
    /// Multiplying the circulant by a vector whose upper half is zero and
    /// keeping the first `k` entries of the result recovers the Toeplitz
    /// matrix-vector product.
    pub(crate) fn from_toeplitz(tm: ToeplitzMatrix) -> Self {
        let mut extension_col = tm.row.clone();
        extension_col.rotate_left(1);
        extension_col.reverse();

        Self {
            row: [tm.col, extension_col].concat(),
        }
    }
}
