//! Reinforcement steel grades per IS 1786
//!
//! High-yield-strength deformed (HYSD) bars. Like concrete grades, these are
//! keys into the [`CodeTable`](crate::table::CodeTable).

use serde::{Deserialize, Serialize};

use crate::errors::{CheckError, CheckResult};

/// Reinforcement steel grades
///
/// The designation is the characteristic yield strength fy in N/mm².
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    Fe415,
    Fe500,
    Fe550,
    Fe600,
}

impl SteelGrade {
    /// All grades in ascending strength order
    pub const ALL: [SteelGrade; 4] = [
        SteelGrade::Fe415,
        SteelGrade::Fe500,
        SteelGrade::Fe550,
        SteelGrade::Fe600,
    ];

    /// Grade designation string (e.g. "Fe500")
    pub fn code(&self) -> &'static str {
        match self {
            SteelGrade::Fe415 => "Fe415",
            SteelGrade::Fe500 => "Fe500",
            SteelGrade::Fe550 => "Fe550",
            SteelGrade::Fe600 => "Fe600",
        }
    }

    /// Parse from common string representations ("Fe500", "fe 500", "500")
    pub fn from_str_flexible(s: &str) -> CheckResult<Self> {
        match s.to_uppercase().replace([' ', '-'], "").as_str() {
            "FE415" | "415" => Ok(SteelGrade::Fe415),
            "FE500" | "500" => Ok(SteelGrade::Fe500),
            "FE550" | "550" => Ok(SteelGrade::Fe550),
            "FE600" | "600" => Ok(SteelGrade::Fe600),
            _ => Err(CheckError::grade_not_found(s)),
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Properties of a steel grade as stored in the code table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelProperties {
    /// Characteristic yield strength fy (N/mm²)
    pub fy_mpa: f64,
    /// Maximum clear distance between tension bars in beams (mm),
    /// IS 456 Table 15 (zero redistribution)
    pub beam_bar_spacing_limit_mm: f64,
    /// Limiting neutral-axis depth ratio xu,max/d for a balanced section,
    /// IS 456 Cl. 38.1
    pub xu_max_ratio: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_codes() {
        assert_eq!(SteelGrade::Fe415.code(), "Fe415");
        assert_eq!(SteelGrade::Fe600.code(), "Fe600");
    }

    #[test]
    fn test_flexible_parsing() {
        assert_eq!(
            SteelGrade::from_str_flexible("fe 415").unwrap(),
            SteelGrade::Fe415
        );
        assert!(SteelGrade::from_str_flexible("Fe250").is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&SteelGrade::Fe500).unwrap();
        assert_eq!(json, "\"Fe500\"");
    }
}
