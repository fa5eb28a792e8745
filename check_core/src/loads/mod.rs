//! Loads and load combinations per IS 875
//!
//! This module provides the load side of a compliance check:
//!
//! - [`LoadType`] - the IS 875 load categories (D, L, W, E)
//! - [`LoadCase`] - service-load magnitudes for one member
//! - [`LoadCombination`] / [`CombinationRule`] - IS 456 Table 18 factor sets
//! - [`combine`] - governing-combination selection
//! - [`presets`] - IS 875 Part 1 densities and Part 2 occupancy live loads
//! - [`wind`] - IS 875 Part 3 design wind pressure
//!
//! # Example
//!
//! ```
//! use check_core::loads::{combine, CombinationRule, LoadCase, LoadType};
//!
//! // Service loads on a floor beam (kN/m)
//! let case = LoadCase::new("B-1 loads")
//!     .with_load(LoadType::Dead, 10.0)
//!     .with_load(LoadType::Live, 8.0);
//!
//! let design = combine(&case, CombinationRule::Gravity).unwrap();
//! println!("wu = {} kN/m ({})", design.magnitude, design.combination);
//! ```

pub mod combinations;
pub mod load_types;
pub mod presets;
pub mod wind;

pub use combinations::{
    combine, gravity_combinations, CombinationRule, DesignLoad, LoadCombination,
};
pub use load_types::LoadType;
pub use presets::{BuildingMaterial, Occupancy};
pub use wind::{design_wind_pressure, TerrainCategory, WindPressure, WindZone};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CheckError, CheckResult};

/// Service-load magnitudes by type for one member
///
/// Units are contextual: kN/m for beam line loads, kN/m² for slab area
/// loads, kN for column and footing axial components. Wind and seismic
/// magnitudes are entered positive; reversal is handled by the combination
/// sign variants.
///
/// # Example
/// ```
/// use check_core::loads::{LoadCase, LoadType};
///
/// let case = LoadCase::new("Typical floor")
///     .with_load(LoadType::Dead, 10.0)
///     .with_load(LoadType::Live, 8.0);
///
/// assert_eq!(case.get(LoadType::Dead), 10.0);
/// assert_eq!(case.get(LoadType::Wind), 0.0); // Not specified
/// ```
///
/// # JSON Format
/// ```json
/// {
///   "label": "Typical floor",
///   "loads": { "Dead": 10.0, "Live": 8.0 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCase {
    /// User-provided label for this load case
    pub label: String,

    /// Service-load values keyed by type
    pub loads: HashMap<LoadType, f64>,
}

impl LoadCase {
    /// Create a new empty load case with a label
    pub fn new(label: impl Into<String>) -> Self {
        LoadCase {
            label: label.into(),
            loads: HashMap::new(),
        }
    }

    /// Add or update a load value (builder pattern)
    pub fn with_load(mut self, load_type: LoadType, value: f64) -> Self {
        self.loads.insert(load_type, value);
        self
    }

    /// Set a load value (mutable)
    pub fn set_load(&mut self, load_type: LoadType, value: f64) {
        self.loads.insert(load_type, value);
    }

    /// Get the load value for a type, defaulting to 0.0 if not set
    pub fn get(&self, load_type: LoadType) -> f64 {
        self.loads.get(&load_type).copied().unwrap_or(0.0)
    }

    /// Check if a load type is defined (even if zero)
    pub fn has(&self, load_type: LoadType) -> bool {
        self.loads.contains_key(&load_type)
    }

    /// Validate the load case: gravity loads must be non-negative
    pub fn validate(&self) -> CheckResult<()> {
        for (load_type, value) in &self.loads {
            if load_type.is_gravity() && *value < 0.0 {
                return Err(CheckError::invalid_input(
                    format!("load_{}", load_type.code()),
                    value.to_string(),
                    format!("{} cannot be negative", load_type.description()),
                ));
            }
        }
        Ok(())
    }

    /// Total unfactored gravity load
    pub fn total_gravity(&self) -> f64 {
        LoadType::ALL
            .iter()
            .filter(|lt| lt.is_gravity())
            .map(|lt| self.get(*lt))
            .sum()
    }

    /// Apply every combination of the rule and return all (name, value)
    /// results; useful for report appendices.
    pub fn all_combination_results(&self, rule: CombinationRule) -> Vec<(String, f64)> {
        rule.combinations()
            .iter()
            .map(|combo| (combo.name.clone(), combo.apply(self)))
            .collect()
    }
}

impl Default for LoadCase {
    fn default() -> Self {
        LoadCase::new("Unnamed")
    }
}
