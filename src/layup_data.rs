//! Serialized layup definitions
//!
//! A layup document names its ply materials once and references them from
//! the stacking sequence, so repeated plies share one material:
//!
//! ```json
//! {
//!   "plies": {
//!     "UD": { "thickness": 0.125, "q0": [[20, 1, 0], [1, 1.5, 0], [0, 0, 0.8]] }
//!   },
//!   "layup": [[90, "UD"], [0, "UD"], [90, "UD"]]
//! }
//! ```
//!
//! A stacking entry may also carry its ply inline as an object instead of a
//! name. Entries are read as raw JSON so each one is checked individually and
//! a malformed entry is reported by position.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::analysis::ValidationOptions;
use crate::elements::Ply;
use crate::error::{LaminateError, LaminateResult};
use crate::laminate::Laminate;

/// Ply material as written in a layup document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlyData {
    pub thickness: f64,
    /// Rows of the reduced stiffness matrix
    pub q0: [[f64; 3]; 3],
}

impl PlyData {
    fn to_ply(&self, name: Option<&str>) -> Ply {
        let ply = Ply::from_rows(self.thickness, self.q0);
        match name {
            Some(name) => ply.with_name(name),
            None => ply,
        }
    }
}

impl From<&Ply> for PlyData {
    fn from(ply: &Ply) -> Self {
        Self {
            thickness: ply.thickness,
            q0: ply.q0_rows(),
        }
    }
}

/// A complete layup document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayupData {
    /// Named ply materials, written in name order
    #[serde(default)]
    pub plies: BTreeMap<String, PlyData>,
    /// Stacking sequence, a list of `[angle, ply]` pairs
    pub layup: Value,
    /// Validation options (defaults apply when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ValidationOptions>,
}

impl LayupData {
    /// Parse a layup document
    pub fn from_json(json: &str) -> LaminateResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve ply references and build the laminate
    pub fn to_laminate(&self) -> LaminateResult<Laminate<Ply>> {
        let plies: HashMap<&str, Arc<Ply>> = self
            .plies
            .iter()
            .map(|(name, data)| (name.as_str(), Arc::new(data.to_ply(Some(name)))))
            .collect();

        let entries = self.layup.as_array().ok_or_else(|| {
            LaminateError::invalid_layup(format!(
                "layup must be a list of [angle, ply] pairs, got {}",
                self.layup
            ))
        })?;

        let mut layup = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let pair = entry
                .as_array()
                .filter(|pair| pair.len() == 2)
                .ok_or_else(|| {
                    LaminateError::invalid_entry(
                        index,
                        format!("each entry must be an [angle, ply] pair. Check {}", entry),
                    )
                })?;

            let angle = pair[0].as_f64().ok_or_else(|| {
                LaminateError::invalid_entry(
                    index,
                    format!("the angle must be a real number. Check {}", entry),
                )
            })?;

            let ply = match &pair[1] {
                Value::String(name) => plies
                    .get(name.as_str())
                    .cloned()
                    .ok_or_else(|| LaminateError::PlyNotFound(name.clone()))?,
                Value::Object(_) => {
                    let data = PlyData::deserialize(&pair[1]).map_err(|e| {
                        LaminateError::invalid_entry(
                            index,
                            format!(
                                "the ply must define thickness and q0 ({}). Check {}",
                                e, entry
                            ),
                        )
                    })?;
                    Arc::new(data.to_ply(None))
                }
                _ => {
                    return Err(LaminateError::invalid_entry(
                        index,
                        format!("the ply must be a ply name or ply object. Check {}", entry),
                    ))
                }
            };

            layup.push((angle, ply));
        }

        Laminate::with_options(layup, self.options.unwrap_or_default())
    }

    /// Describe an existing laminate; plies shared by reference are written once
    pub fn from_laminate(laminate: &Laminate<Ply>) -> Self {
        let mut names: Vec<(Arc<Ply>, String)> = Vec::new();
        let mut plies: BTreeMap<String, PlyData> = BTreeMap::new();
        let mut layup = Vec::with_capacity(laminate.len());

        for entry in laminate.layup() {
            let known = names
                .iter()
                .find(|(ply, _)| Arc::ptr_eq(ply, &entry.ply))
                .map(|(_, name)| name.clone());
            let name = match known {
                Some(name) => name,
                None => {
                    let label = entry
                        .ply
                        .name
                        .clone()
                        .unwrap_or_else(|| format!("ply_{}", names.len() + 1));
                    // Distinct materials that carry the same label
                    let mut name = label.clone();
                    let mut suffix = 2;
                    while plies.contains_key(&name) {
                        name = format!("{}_{}", label, suffix);
                        suffix += 1;
                    }
                    plies.insert(name.clone(), PlyData::from(entry.ply.as_ref()));
                    names.push((Arc::clone(&entry.ply), name.clone()));
                    name
                }
            };
            layup.push(json!([entry.angle, name]));
        }

        Self {
            plies,
            layup: Value::Array(layup),
            options: None,
        }
    }
}

impl Laminate<Ply> {
    /// Build a laminate from a JSON layup document
    pub fn from_json(json: &str) -> LaminateResult<Self> {
        LayupData::from_json(json)?.to_laminate()
    }

    /// Write the layup as a JSON document
    pub fn to_json(&self) -> LaminateResult<String> {
        Ok(serde_json::to_string_pretty(&LayupData::from_laminate(self))?)
    }
}
