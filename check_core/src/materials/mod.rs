//! # Materials
//!
//! Material grade selections for reinforced-concrete members. A member is
//! checked with one concrete grade and one steel grade; the characteristic
//! strengths behind each grade live in the [`CodeTable`](crate::table::CodeTable)
//! so they are resolved (and can fail) at check time, never defaulted.
//!
//! ## Example
//!
//! ```rust
//! use check_core::materials::{MaterialSpec, ConcreteGrade, SteelGrade};
//! use check_core::table::CodeTable;
//!
//! let spec = MaterialSpec::new(ConcreteGrade::M20, SteelGrade::Fe415);
//! let table = CodeTable::is456();
//! let concrete = table.concrete(spec.concrete).unwrap();
//! assert_eq!(concrete.fck_mpa, 20.0);
//! ```

pub mod concrete;
pub mod steel;

pub use concrete::{ConcreteGrade, ConcreteProperties};
pub use steel::{SteelGrade, SteelProperties};

use serde::{Deserialize, Serialize};

/// Concrete + steel grade pair for one member check
///
/// ## JSON Format
/// ```json
/// { "concrete": "M20", "steel": "Fe415" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Concrete grade (characteristic cube strength)
    pub concrete: ConcreteGrade,
    /// Reinforcement steel grade (characteristic yield strength)
    pub steel: SteelGrade,
}

impl MaterialSpec {
    /// Create a material specification
    pub fn new(concrete: ConcreteGrade, steel: SteelGrade) -> Self {
        MaterialSpec { concrete, steel }
    }

    /// Display string like "M20 / Fe415"
    pub fn display_name(&self) -> String {
        format!("{} / {}", self.concrete, self.steel)
    }
}

impl Default for MaterialSpec {
    fn default() -> Self {
        // The most common combination in Indian practice
        MaterialSpec::new(ConcreteGrade::M20, SteelGrade::Fe500)
    }
}

impl std::fmt::Display for MaterialSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
