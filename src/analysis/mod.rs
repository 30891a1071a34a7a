//! Layup validation options

use serde::{Deserialize, Serialize};

/// Checks applied to a layup when a laminate is constructed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Reject plies whose thickness is not a positive finite number
    pub require_positive_thickness: bool,
    /// Reject plies whose [Q0] contains NaN or infinite entries
    pub require_finite_stiffness: bool,
    /// Accept a layup with no plies (all laminate matrices are then zero)
    pub allow_empty: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            require_positive_thickness: true,
            require_finite_stiffness: true,
            allow_empty: false,
        }
    }
}

impl ValidationOptions {
    /// Only the structural checks: angles must be real numbers, nothing is
    /// said about thickness or stiffness values, and empty layups pass
    pub fn permissive() -> Self {
        Self {
            require_positive_thickness: false,
            require_finite_stiffness: false,
            allow_empty: true,
        }
    }

    /// Toggle the thickness positivity check
    pub fn with_positive_thickness(mut self, enabled: bool) -> Self {
        self.require_positive_thickness = enabled;
        self
    }

    /// Toggle the finite [Q0] check
    pub fn with_finite_stiffness(mut self, enabled: bool) -> Self {
        self.require_finite_stiffness = enabled;
        self
    }

    /// Toggle acceptance of empty layups
    pub fn with_allow_empty(mut self, enabled: bool) -> Self {
        self.allow_empty = enabled;
        self
    }
}
