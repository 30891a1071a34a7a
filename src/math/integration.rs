//! Through-thickness integration of ply stiffness
//!
//! Plies are stacked from the bottom face at z = -h/2 to the top face at
//! z = +h/2. Each laminate matrix is a thickness moment of the rotated ply
//! stiffness:
//!
//! ```text
//! [A] = Σ (z_k+1 - z_k)          [Q]_k
//! [B] = Σ (z_k+1² - z_k²) / 2    [Q]_k
//! [D] = Σ (z_k+1³ - z_k³) / 3    [Q]_k
//! ```

use super::Mat3;

/// Which thickness moment a laminate matrix integrates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StiffnessMoment {
    /// Zeroth moment - extensional stiffness [A]
    Extensional,
    /// First moment - bending-extension coupling [B]
    Coupling,
    /// Second moment - bending stiffness [D]
    Bending,
}

impl StiffnessMoment {
    /// Weight of one ply spanning `zk0..zk1` for this moment
    pub fn weight(self, zk0: f64, zk1: f64) -> f64 {
        match self {
            Self::Extensional => zk1 - zk0,
            Self::Coupling => 0.5 * (zk1.powi(2) - zk0.powi(2)),
            Self::Bending => (zk1.powi(3) - zk0.powi(3)) / 3.0,
        }
    }

    /// Short label used in reports ("A", "B" or "D")
    pub fn label(self) -> &'static str {
        match self {
            Self::Extensional => "A",
            Self::Coupling => "B",
            Self::Bending => "D",
        }
    }
}

/// Compute ply boundary coordinates from ply thicknesses
///
/// Returns N+1 coordinates for N plies, starting at minus half the total
/// thickness. No ordering is enforced: a non-positive thickness yields a
/// non-increasing step.
pub fn ply_boundaries(thicknesses: &[f64]) -> Vec<f64> {
    let total: f64 = thicknesses.iter().sum();

    let mut current_z = -total / 2.0;
    let mut boundaries = Vec::with_capacity(thicknesses.len() + 1);
    boundaries.push(current_z);
    for t in thicknesses {
        current_z += t;
        boundaries.push(current_z);
    }
    boundaries
}

/// Accumulate one laminate stiffness matrix over all plies, in layup order
///
/// # Arguments
/// * `q_layup` - Rotated ply stiffness matrices, one per ply
/// * `z` - Ply boundaries, `q_layup.len() + 1` entries
/// * `moment` - Which thickness moment to integrate
pub fn accumulate_stiffness(q_layup: &[Mat3], z: &[f64], moment: StiffnessMoment) -> Mat3 {
    debug_assert_eq!(z.len(), q_layup.len() + 1);

    q_layup
        .iter()
        .zip(z.windows(2))
        .fold(Mat3::zeros(), |acc, (q, bounds)| {
            acc + q * moment.weight(bounds[0], bounds[1])
        })
}
