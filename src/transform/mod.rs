pub mod affine;
pub mod matrix;
pub mod projective;
