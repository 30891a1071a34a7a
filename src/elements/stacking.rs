//! Stacking entries - one oriented ply in a layup

use std::fmt;
use std::sync::Arc;

use super::ply::PlyMaterial;

/// One ply of a layup: an orientation angle and a (possibly shared) material
#[derive(Debug)]
pub struct StackingEntry<P> {
    /// Orientation in degrees from the laminate x-axis, not normalized
    pub angle: f64,
    /// Ply material, shared by reference between repeated plies
    pub ply: Arc<P>,
}

impl<P: PlyMaterial> StackingEntry<P> {
    /// Create an entry from an angle and an already shared ply
    pub fn new(angle: f64, ply: Arc<P>) -> Self {
        Self { angle, ply }
    }

    /// Ply thickness
    pub fn thickness(&self) -> f64 {
        self.ply.thickness()
    }
}

impl<P> Clone for StackingEntry<P> {
    fn clone(&self) -> Self {
        Self {
            angle: self.angle,
            ply: Arc::clone(&self.ply),
        }
    }
}

impl<P: PartialEq> PartialEq for StackingEntry<P> {
    fn eq(&self, other: &Self) -> bool {
        self.angle == other.angle && (Arc::ptr_eq(&self.ply, &other.ply) || self.ply == other.ply)
    }
}

impl<P: PlyMaterial> From<(f64, Arc<P>)> for StackingEntry<P> {
    fn from((angle, ply): (f64, Arc<P>)) -> Self {
        Self::new(angle, ply)
    }
}

impl<P: PlyMaterial> From<(f64, &Arc<P>)> for StackingEntry<P> {
    fn from((angle, ply): (f64, &Arc<P>)) -> Self {
        Self::new(angle, Arc::clone(ply))
    }
}

impl<P: fmt::Display> fmt::Display for StackingEntry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.angle, self.ply)
    }
}
