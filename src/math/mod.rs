//! Mathematical utilities for lamination theory

pub mod integration;
pub mod transform;

use nalgebra::{Matrix3, Matrix6};

pub type Mat3 = Matrix3<f64>;
pub type Mat6 = Matrix6<f64>;

pub use integration::{accumulate_stiffness, ply_boundaries, StiffnessMoment};
pub use transform::{rotate_reduced_stiffness, strain_transformation, stress_transformation};

/// Assemble the 6x6 laminate stiffness matrix from its 3x3 blocks
///
/// ```text
/// | A  B |
/// | B  D |
/// ```
pub fn assemble_abd(a: &Mat3, b: &Mat3, d: &Mat3) -> Mat6 {
    let mut abd = Mat6::zeros();
    abd.fixed_view_mut::<3, 3>(0, 0).copy_from(a);
    abd.fixed_view_mut::<3, 3>(0, 3).copy_from(b);
    abd.fixed_view_mut::<3, 3>(3, 0).copy_from(b);
    abd.fixed_view_mut::<3, 3>(3, 3).copy_from(d);
    abd
}

/// Largest absolute difference between a matrix and its transpose
pub fn symmetry_error(m: &Mat3) -> f64 {
    (m - m.transpose()).amax()
}
