//! Laminate ABD - classical lamination theory for fiber-composite layups
//!
//! Given an ordered stack of plies, each with an orientation angle and a
//! reduced stiffness matrix in its material axes, this library computes:
//! - Ply boundary coordinates through the thickness
//! - Ply stiffness rotated into laminate axes
//! - The extensional [A], coupling [B] and bending [D] stiffness matrices
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use laminate_abd::prelude::*;
//!
//! // One material, shared by every ply
//! let ply = Arc::new(Ply::from_rows(
//!     0.125,
//!     [[20.0, 1.0, 0.0], [1.0, 1.5, 0.0], [0.0, 0.0, 0.8]],
//! ));
//!
//! let laminate: Laminate = Laminate::uniform(&[0.0, 90.0, 90.0, 0.0], &ply).unwrap();
//!
//! let a = laminate.a().unwrap();
//! let b = laminate.b().unwrap();
//! assert!(a[(0, 0)] > 0.0);
//! assert!(b.amax() < 1e-12);
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod laminate;
pub mod layup_data;
pub mod math;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::ValidationOptions;
    pub use crate::elements::{Ply, PlyMaterial, StackingEntry};
    pub use crate::error::{LaminateError, LaminateResult};
    pub use crate::laminate::Laminate;
    pub use crate::layup_data::{LayupData, PlyData};
    pub use crate::math::{Mat3, Mat6};
}
