//! Concrete grades per IS 456:2000 Table 2
//!
//! Grades are keys into the [`CodeTable`](crate::table::CodeTable); the
//! characteristic strengths themselves live in the table so a caller can
//! inject a restricted or extended table without touching these types.

use serde::{Deserialize, Serialize};

use crate::errors::{CheckError, CheckResult};

/// Standard concrete grades (ordinary and standard concrete, IS 456 Table 2)
///
/// The grade designation is the characteristic compressive strength of a
/// 150 mm cube at 28 days, in N/mm².
///
/// # Example
/// ```
/// use check_core::materials::ConcreteGrade;
///
/// let grade = ConcreteGrade::M20;
/// assert_eq!(grade.code(), "M20");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcreteGrade {
    M15,
    M20,
    M25,
    M30,
    M35,
    M40,
    M45,
    M50,
    M55,
    M60,
}

impl ConcreteGrade {
    /// All grades in ascending strength order
    pub const ALL: [ConcreteGrade; 10] = [
        ConcreteGrade::M15,
        ConcreteGrade::M20,
        ConcreteGrade::M25,
        ConcreteGrade::M30,
        ConcreteGrade::M35,
        ConcreteGrade::M40,
        ConcreteGrade::M45,
        ConcreteGrade::M50,
        ConcreteGrade::M55,
        ConcreteGrade::M60,
    ];

    /// Grade designation string (e.g. "M20")
    pub fn code(&self) -> &'static str {
        match self {
            ConcreteGrade::M15 => "M15",
            ConcreteGrade::M20 => "M20",
            ConcreteGrade::M25 => "M25",
            ConcreteGrade::M30 => "M30",
            ConcreteGrade::M35 => "M35",
            ConcreteGrade::M40 => "M40",
            ConcreteGrade::M45 => "M45",
            ConcreteGrade::M50 => "M50",
            ConcreteGrade::M55 => "M55",
            ConcreteGrade::M60 => "M60",
        }
    }

    /// Parse from common string representations ("M20", "m 20", "20")
    pub fn from_str_flexible(s: &str) -> CheckResult<Self> {
        match s.to_uppercase().replace([' ', '-'], "").as_str() {
            "M15" | "15" => Ok(ConcreteGrade::M15),
            "M20" | "20" => Ok(ConcreteGrade::M20),
            "M25" | "25" => Ok(ConcreteGrade::M25),
            "M30" | "30" => Ok(ConcreteGrade::M30),
            "M35" | "35" => Ok(ConcreteGrade::M35),
            "M40" | "40" => Ok(ConcreteGrade::M40),
            "M45" | "45" => Ok(ConcreteGrade::M45),
            "M50" | "50" => Ok(ConcreteGrade::M50),
            "M55" | "55" => Ok(ConcreteGrade::M55),
            "M60" | "60" => Ok(ConcreteGrade::M60),
            _ => Err(CheckError::grade_not_found(s)),
        }
    }
}

impl std::fmt::Display for ConcreteGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Properties of a concrete grade as stored in the code table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteProperties {
    /// Characteristic compressive strength fck (N/mm²)
    pub fck_mpa: f64,
    /// Unit weight of reinforced concrete (kN/m³), IS 875 Part 1
    pub density_kn_m3: f64,
    /// Design bond stress for plain bars in tension (N/mm²), IS 456 Cl. 26.2.1.1.
    /// Deformed (HYSD) bars get a 60 % increase, applied by the checkers.
    pub bond_stress_mpa: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_codes() {
        assert_eq!(ConcreteGrade::M15.code(), "M15");
        assert_eq!(ConcreteGrade::M60.code(), "M60");
    }

    #[test]
    fn test_flexible_parsing() {
        assert_eq!(
            ConcreteGrade::from_str_flexible("m 25").unwrap(),
            ConcreteGrade::M25
        );
        assert_eq!(
            ConcreteGrade::from_str_flexible("30").unwrap(),
            ConcreteGrade::M30
        );
        assert!(ConcreteGrade::from_str_flexible("M70").is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ConcreteGrade::M20).unwrap();
        assert_eq!(json, "\"M20\"");
        let parsed: ConcreteGrade = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ConcreteGrade::M20);
    }
}
