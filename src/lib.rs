pub mod error;

pub mod matrix {
    pub mod dense;
    pub mod display;
    pub mod element;
    pub mod matrix;
}
pub mod shaped {
    pub mod diagonal;
    pub mod policy;
    pub mod shaped;
    pub mod triangular;
    pub mod unit;
}

#[cfg(feature = "python")]
pub mod python;

pub use error::{Bound, MatrixError, Result};
pub use matrix::dense::{scalar_mul, Matrix};
pub use matrix::element::Element;
pub use matrix::matrix::MatrixRead;
pub use shaped::diagonal::Diagonal;
pub use shaped::shaped::Shaped;
pub use shaped::triangular::{LowerTriangular, UpperTriangular};
pub use shaped::unit::Unit;
