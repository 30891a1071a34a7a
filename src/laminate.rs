//! Laminate - ordered ply stack and its A, B, D stiffness matrices

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::analysis::ValidationOptions;
use crate::elements::{Ply, PlyMaterial, StackingEntry};
use crate::error::{LaminateError, LaminateResult};
use crate::math::{self, Mat3, Mat6, StiffnessMoment};

/// A laminate built from an ordered stack of oriented plies
///
/// The layup is fixed at construction. Derived quantities (ply boundaries,
/// rotated ply stiffness, [A], [B], [D]) are computed on first access and
/// cached for the lifetime of the value; the caches are thread-safe, so a
/// shared `&Laminate` can be queried from several threads.
pub struct Laminate<P = Ply> {
    layup: Vec<StackingEntry<P>>,

    z_position: OnceCell<Vec<f64>>,
    q_layup: OnceCell<Vec<Mat3>>,
    a: OnceCell<Mat3>,
    b: OnceCell<Mat3>,
    d: OnceCell<Mat3>,
}

impl<P: PlyMaterial> Laminate<P> {
    /// Create a laminate from `(angle, ply)` pairs using the default checks
    ///
    /// The defaults reject an empty layup as well as non-positive thicknesses;
    /// use [`Laminate::with_options`] with `ValidationOptions::permissive()`
    /// (or `with_allow_empty(true)`) to accept them.
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use laminate_abd::prelude::*;
    ///
    /// let ply = Arc::new(Ply::from_rows(
    ///     0.125,
    ///     [[20.0, 1.0, 0.0], [1.0, 1.5, 0.0], [0.0, 0.0, 0.8]],
    /// ));
    /// let laminate: Laminate = Laminate::new(vec![(0.0, &ply), (90.0, &ply)]).unwrap();
    /// assert_eq!(laminate.z_position().len(), 3);
    /// ```
    pub fn new<I, E>(layup: I) -> LaminateResult<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<StackingEntry<P>>,
    {
        Self::with_options(layup, ValidationOptions::default())
    }

    /// Create a laminate with explicit validation options
    pub fn with_options<I, E>(layup: I, options: ValidationOptions) -> LaminateResult<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<StackingEntry<P>>,
    {
        let layup: Vec<StackingEntry<P>> = layup.into_iter().map(Into::into).collect();
        validate_layup(&layup, &options)?;

        log::debug!(
            "Laminate created: {} plies, total thickness {}",
            layup.len(),
            layup.iter().map(|e| e.thickness()).sum::<f64>()
        );

        Ok(Self {
            layup,
            z_position: OnceCell::new(),
            q_layup: OnceCell::new(),
            a: OnceCell::new(),
            b: OnceCell::new(),
            d: OnceCell::new(),
        })
    }

    /// Create a laminate where every ply shares one material
    pub fn uniform(angles: &[f64], ply: &Arc<P>) -> LaminateResult<Self> {
        Self::new(angles.iter().map(|&angle| (angle, ply)))
    }

    /// The stacking sequence, bottom ply first
    pub fn layup(&self) -> &[StackingEntry<P>] {
        &self.layup
    }

    /// Number of plies
    pub fn len(&self) -> usize {
        self.layup.len()
    }

    /// True when the layup has no plies
    pub fn is_empty(&self) -> bool {
        self.layup.is_empty()
    }

    /// Ply angles in layup order
    pub fn angles(&self) -> Vec<f64> {
        self.layup.iter().map(|e| e.angle).collect()
    }

    /// Sum of all ply thicknesses
    pub fn total_thickness(&self) -> f64 {
        self.layup.iter().map(|e| e.thickness()).sum()
    }

    /// Ply boundary coordinates, N+1 values from -h/2 to +h/2
    pub fn z_position(&self) -> &[f64] {
        self.z_position.get_or_init(|| {
            let thicknesses: Vec<f64> = self.layup.iter().map(|e| e.thickness()).collect();
            math::ply_boundaries(&thicknesses)
        })
    }

    /// Reduced stiffness of each ply rotated into laminate axes
    pub fn q_layup(&self) -> LaminateResult<&[Mat3]> {
        let q_layup = self.q_layup.get_or_try_init(|| {
            log::trace!("Rotating {} ply stiffness matrices", self.layup.len());
            self.layup
                .iter()
                .map(|e| math::rotate_reduced_stiffness(&e.ply.q0(), e.angle))
                .collect::<LaminateResult<Vec<Mat3>>>()
        })?;
        Ok(q_layup.as_slice())
    }

    /// Extensional stiffness matrix [A]
    pub fn a(&self) -> LaminateResult<&Mat3> {
        self.stiffness(&self.a, StiffnessMoment::Extensional)
    }

    /// Bending-extension coupling matrix [B]
    pub fn b(&self) -> LaminateResult<&Mat3> {
        self.stiffness(&self.b, StiffnessMoment::Coupling)
    }

    /// Bending stiffness matrix [D]
    pub fn d(&self) -> LaminateResult<&Mat3> {
        self.stiffness(&self.d, StiffnessMoment::Bending)
    }

    fn stiffness<'a>(
        &'a self,
        cell: &'a OnceCell<Mat3>,
        moment: StiffnessMoment,
    ) -> LaminateResult<&'a Mat3> {
        cell.get_or_try_init(|| {
            let q_layup = self.q_layup()?;
            let matrix = math::accumulate_stiffness(q_layup, self.z_position(), moment);
            log::debug!("[{}] computed for {} plies", moment.label(), q_layup.len());
            Ok(matrix)
        })
    }

    /// Full 6x6 laminate stiffness matrix [[A, B], [B, D]]
    pub fn abd_matrix(&self) -> LaminateResult<Mat6> {
        Ok(math::assemble_abd(self.a()?, self.b()?, self.d()?))
    }

    /// Human-readable [A], [B] and [D] report
    pub fn abd_report(&self) -> LaminateResult<String> {
        Ok(format!(
            "[A] is:\n{}\n\n[B] is:\n{}\n\n[D] is:\n{}",
            format_matrix(self.a()?),
            format_matrix(self.b()?),
            format_matrix(self.d()?),
        ))
    }

    /// Print the [A], [B] and [D] report to standard output
    pub fn print_abd(&self) -> LaminateResult<()> {
        println!("{}", self.abd_report()?);
        Ok(())
    }
}

impl<P: PlyMaterial + PartialEq> Laminate<P> {
    /// True when ply i and ply N-1-i match in angle and material for every i
    pub fn is_symmetric(&self) -> bool {
        self.layup
            .iter()
            .zip(self.layup.iter().rev())
            .take(self.layup.len() / 2)
            .all(|(bottom, top)| bottom == top)
    }
}

/// Check a stacking sequence before any derived quantity is computed
fn validate_layup<P: PlyMaterial>(
    layup: &[StackingEntry<P>],
    options: &ValidationOptions,
) -> LaminateResult<()> {
    if layup.is_empty() && !options.allow_empty {
        return Err(LaminateError::invalid_layup(
            "layup must contain at least one ply",
        ));
    }

    for (index, entry) in layup.iter().enumerate() {
        if !entry.angle.is_finite() {
            return Err(LaminateError::invalid_entry(
                index,
                format!("the angle must be a real number, got {}", entry.angle),
            ));
        }

        let thickness = entry.thickness();
        if options.require_positive_thickness && !(thickness.is_finite() && thickness > 0.0) {
            return Err(LaminateError::invalid_entry(
                index,
                format!(
                    "ply thickness must be positive, got {} (angle {})",
                    thickness, entry.angle
                ),
            ));
        }

        if options.require_finite_stiffness && !entry.ply.q0().iter().all(|v| v.is_finite()) {
            return Err(LaminateError::invalid_entry(
                index,
                format!("ply Q0 must have finite entries (angle {})", entry.angle),
            ));
        }
    }

    Ok(())
}

/// Format a 3x3 matrix one row per line
fn format_matrix(m: &Mat3) -> String {
    m.row_iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|v| format!("{:>14.6e}", v)).collect();
            format!("[{} ]", cells.join(""))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl<P> Clone for Laminate<P> {
    fn clone(&self) -> Self {
        Self {
            layup: self.layup.clone(),
            z_position: self.z_position.clone(),
            q_layup: self.q_layup.clone(),
            a: self.a.clone(),
            b: self.b.clone(),
            d: self.d.clone(),
        }
    }
}

/// Two laminates are equal when their layups match entry by entry; derived
/// matrices are not compared
impl<P: PartialEq> PartialEq for Laminate<P> {
    fn eq(&self, other: &Self) -> bool {
        self.layup == other.layup
    }
}

impl<P: fmt::Debug> fmt::Debug for Laminate<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Laminate")
            .field("layup", &self.layup)
            .finish()
    }
}

impl<P: fmt::Display> fmt::Display for Laminate<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Laminate(")?;
        write!(f, "[")?;
        for (i, entry) in self.layup.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", entry)?;
        }
        write!(f, "])")
    }
}
