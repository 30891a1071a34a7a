//! Ply material properties

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::math::Mat3;

/// Capability required of anything stacked into a laminate.
///
/// The laminate only needs the ply thickness and its reduced stiffness
/// matrix in material principal axes; how that matrix was obtained
/// (engineering constants, test data, micromechanics) is up to the
/// implementor.
pub trait PlyMaterial {
    /// Ply thickness in length units
    fn thickness(&self) -> f64;

    /// Reduced stiffness matrix [Q0] in material axes (stress units)
    fn q0(&self) -> Mat3;
}

/// A single composite layer with a precomputed reduced stiffness matrix
///
/// Equality compares the material (thickness and [Q0]); the label is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ply {
    /// Thickness in length units
    pub thickness: f64,
    /// Reduced stiffness in material principal axes, symmetric 3x3
    pub q0: Mat3,
    /// Optional label used in reports and serialized layups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Ply {
    /// Create a new ply from its thickness and reduced stiffness matrix
    pub fn new(thickness: f64, q0: Mat3) -> Self {
        Self {
            thickness,
            q0,
            name: None,
        }
    }

    /// Create a ply from the three rows of [Q0]
    pub fn from_rows(thickness: f64, rows: [[f64; 3]; 3]) -> Self {
        let q0 = Mat3::new(
            rows[0][0], rows[0][1], rows[0][2],
            rows[1][0], rows[1][1], rows[1][2],
            rows[2][0], rows[2][1], rows[2][2],
        );
        Self::new(thickness, q0)
    }

    /// Attach a label to the ply
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Rows of [Q0], the inverse of `from_rows`
    pub fn q0_rows(&self) -> [[f64; 3]; 3] {
        let q = &self.q0;
        [
            [q[(0, 0)], q[(0, 1)], q[(0, 2)]],
            [q[(1, 0)], q[(1, 1)], q[(1, 2)]],
            [q[(2, 0)], q[(2, 1)], q[(2, 2)]],
        ]
    }
}

impl PlyMaterial for Ply {
    fn thickness(&self) -> f64 {
        self.thickness
    }

    fn q0(&self) -> Mat3 {
        self.q0
    }
}

impl PartialEq for Ply {
    fn eq(&self, other: &Self) -> bool {
        self.thickness == other.thickness && self.q0 == other.q0
    }
}

impl fmt::Display for Ply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Ply({}, t={})", name, self.thickness),
            None => write!(f, "Ply(t={}, Q0={:?})", self.thickness, self.q0_rows()),
        }
    }
}
