//! Laminate building blocks

mod ply;
mod stacking;

pub use ply::{Ply, PlyMaterial};
pub use stacking::StackingEntry;
