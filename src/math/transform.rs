//! Ply stiffness rotation from material axes into laminate axes
//!
//! References:
//! - Jones, R. M., "Mechanics of Composite Materials", 2nd ed., chapter 2.6
//!
//! Both transformation matrices act on in-plane vectors ordered as
//! (xx, yy, xy). The stress transformation rotates tensorial components; the
//! strain transformation rotates engineering strain, whose shear term carries
//! the factor of two. Because [Q0] maps engineering strain to stress, the
//! rotated stiffness pairs the two:
//!
//! ```text
//! [Q] = [T_stress]^-1 [Q0] [T_strain]
//! ```

use super::Mat3;
use crate::error::{LaminateError, LaminateResult};

/// Direction cosine and sine of a ply angle given in degrees
fn cos_sin(angle_deg: f64) -> (f64, f64) {
    let theta = angle_deg.to_radians();
    (theta.cos(), theta.sin())
}

/// Stress transformation matrix [T_stress] for a ply at `angle_deg`
pub fn stress_transformation(angle_deg: f64) -> Mat3 {
    let (c, s) = cos_sin(angle_deg);
    let (c2, s2, cs) = (c * c, s * s, c * s);

    Mat3::new(
        c2,  s2,  2.0 * cs,
        s2,  c2,  -2.0 * cs,
        -cs, cs,  c2 - s2,
    )
}

/// Engineering strain transformation matrix [T_strain] for a ply at `angle_deg`
pub fn strain_transformation(angle_deg: f64) -> Mat3 {
    let (c, s) = cos_sin(angle_deg);
    let (c2, s2, cs) = (c * c, s * s, c * s);

    Mat3::new(
        c2,        s2,       cs,
        s2,        c2,       -cs,
        -2.0 * cs, 2.0 * cs, c2 - s2,
    )
}

/// Rotate a reduced stiffness matrix from material axes into laminate axes
///
/// # Arguments
/// * `q0` - Reduced stiffness in material principal axes
/// * `angle_deg` - Ply orientation in degrees, any real value
///
/// # Errors
/// `SingularTransform` if [T_stress] cannot be inverted. det(T_stress) is
/// (c² + s²)³ = 1 for every real angle, so this only guards against
/// non-finite input reaching the kernel.
pub fn rotate_reduced_stiffness(q0: &Mat3, angle_deg: f64) -> LaminateResult<Mat3> {
    let t_stress_inv = stress_transformation(angle_deg)
        .try_inverse()
        .filter(|inv| inv.iter().all(|v| v.is_finite()))
        .ok_or(LaminateError::SingularTransform { angle: angle_deg })?;

    Ok(t_stress_inv * q0 * strain_transformation(angle_deg))
}
