//! # Column Compliance Check
//!
//! Checks a rectangular reinforced-concrete column under axial load against
//! IS 456:2000.
//!
//! ## Assumptions
//!
//! - Rectangular tied column, axial compression only
//! - Braced against sidesway; effective length = k × unsupported length
//! - Short columns use the Cl. 39.3 capacity directly; slender columns
//!   (ratio above 12) get the Cl. B-3.3 reduction factor applied
//!
//! ## Example
//!
//! ```rust
//! use check_core::checks::column::{check, ColumnInput};
//! use check_core::table::CodeTable;
//!
//! let report = check(&ColumnInput::default(), CodeTable::shared()).unwrap();
//! println!("slenderness = {}", report.summary["slenderness_ratio"]);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::bar_area_mm2;
use crate::clauses::is456;
use crate::errors::{CheckError, CheckResult};
use crate::loads::{combine, CombinationRule, LoadCase, LoadType};
use crate::materials::MaterialSpec;
use crate::report::{ClauseResult, ComplianceReport, MemberType};
use crate::table::CodeTable;
use crate::units::{Meters, Millimeters};

/// Longitudinal and tie reinforcement detail for a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnReinforcement {
    /// Diameter of the longitudinal bars (mm)
    pub bar_diameter_mm: f64,
    /// Number of longitudinal bars
    pub bar_count: u32,
    /// Clear cover to the tie (mm)
    pub cover_mm: f64,
    /// Tie bar diameter (mm)
    pub tie_diameter_mm: f64,
    /// Tie spacing along the column (mm c/c)
    pub tie_spacing_mm: f64,
}

impl Default for ColumnReinforcement {
    fn default() -> Self {
        ColumnReinforcement {
            bar_diameter_mm: 16.0,
            bar_count: 8,
            cover_mm: 40.0,
            tie_diameter_mm: 8.0,
            tie_spacing_mm: 200.0,
        }
    }
}

/// Input parameters for a column compliance check
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "C-1",
///   "width_mm": 300.0,
///   "depth_mm": 300.0,
///   "height_m": 3.0,
///   "effective_length_factor": 1.0,
///   "material": { "concrete": "M20", "steel": "Fe415" },
///   "load_case": { "label": "Axial", "loads": { "Dead": 400.0, "Live": 250.0 } },
///   "combination_rule": "Gravity",
///   "reinforcement": { "bar_diameter_mm": 16.0, "bar_count": 8, "cover_mm": 40.0,
///                      "tie_diameter_mm": 8.0, "tie_spacing_mm": 200.0 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnInput {
    /// User label (e.g. "C-1", "Corner column")
    pub label: String,

    /// Section width b (mm)
    pub width_mm: f64,

    /// Section depth D (mm)
    pub depth_mm: f64,

    /// Unsupported length (m)
    pub height_m: f64,

    /// Effective length factor k (1.0 for braced pin-pin)
    pub effective_length_factor: f64,

    /// Concrete and steel grades
    pub material: MaterialSpec,

    /// Axial service-load components (kN) by type
    pub load_case: LoadCase,

    /// Which IS 875 combination sets apply
    pub combination_rule: CombinationRule,

    /// Reinforcement detail
    pub reinforcement: ColumnReinforcement,
}

impl Default for ColumnInput {
    fn default() -> Self {
        ColumnInput {
            label: "C-1".to_string(),
            width_mm: 300.0,
            depth_mm: 300.0,
            height_m: 3.0,
            effective_length_factor: 1.0,
            material: MaterialSpec::default(),
            load_case: LoadCase::new("Axial")
                .with_load(LoadType::Dead, 400.0)
                .with_load(LoadType::Live, 250.0),
            combination_rule: CombinationRule::Gravity,
            reinforcement: ColumnReinforcement::default(),
        }
    }
}

impl ColumnInput {
    /// Validate input parameters before any clause is evaluated.
    pub fn validate(&self) -> CheckResult<()> {
        if self.width_mm <= 0.0 {
            return Err(CheckError::invalid_input(
                "width_mm",
                self.width_mm.to_string(),
                "Width must be positive",
            ));
        }
        if self.depth_mm <= 0.0 {
            return Err(CheckError::invalid_input(
                "depth_mm",
                self.depth_mm.to_string(),
                "Depth must be positive",
            ));
        }
        if self.height_m <= 0.0 {
            return Err(CheckError::invalid_input(
                "height_m",
                self.height_m.to_string(),
                "Height must be positive",
            ));
        }
        if self.effective_length_factor <= 0.0 || self.effective_length_factor > 2.5 {
            return Err(CheckError::invalid_input(
                "effective_length_factor",
                self.effective_length_factor.to_string(),
                "Effective length factor must be between 0 and 2.5",
            ));
        }
        if self.reinforcement.bar_diameter_mm <= 0.0 || self.reinforcement.bar_count == 0 {
            return Err(CheckError::invalid_input(
                "reinforcement",
                format!(
                    "{} x {}mm",
                    self.reinforcement.bar_count, self.reinforcement.bar_diameter_mm
                ),
                "Bar count and diameter must be positive",
            ));
        }
        if self.reinforcement.tie_diameter_mm <= 0.0 || self.reinforcement.tie_spacing_mm <= 0.0 {
            return Err(CheckError::invalid_input(
                "ties",
                format!(
                    "{}mm @ {}mm",
                    self.reinforcement.tie_diameter_mm, self.reinforcement.tie_spacing_mm
                ),
                "Tie diameter and spacing must be positive",
            ));
        }
        Ok(())
    }

    /// Gross cross-sectional area Ag (mm²)
    pub fn gross_area_mm2(&self) -> f64 {
        self.width_mm * self.depth_mm
    }

    /// Least lateral dimension (mm)
    pub fn least_dimension_mm(&self) -> f64 {
        self.width_mm.min(self.depth_mm)
    }

    /// Provided longitudinal steel area (mm²)
    pub fn ast_mm2(&self) -> f64 {
        self.reinforcement.bar_count as f64 * bar_area_mm2(self.reinforcement.bar_diameter_mm)
    }

    /// Effective length (mm)
    pub fn effective_length_mm(&self) -> f64 {
        Millimeters::from(Meters(self.height_m)).0 * self.effective_length_factor
    }

    /// Slenderness ratio: effective length / least lateral dimension
    pub fn slenderness_ratio(&self) -> f64 {
        self.effective_length_mm() / self.least_dimension_mm()
    }
}

/// Check a column against IS 456 and return its compliance report.
///
/// Clause order: minimum dimension, slenderness limit, minimum eccentricity,
/// axial capacity, minimum steel, maximum steel, bar count, tie diameter,
/// tie spacing.
pub fn check(input: &ColumnInput, table: &CodeTable) -> CheckResult<ComplianceReport> {
    input.validate()?;

    let concrete = table.concrete(input.material.concrete)?;
    let steel = table.steel(input.material.steel)?;
    let fck = concrete.fck_mpa;
    let fy = steel.fy_mpa;

    let ag = input.gross_area_mm2();
    let ast = input.ast_mm2();
    let least = input.least_dimension_mm();
    let slenderness = input.slenderness_ratio();
    let short = slenderness < table.limits.short_column_slenderness;

    let design = combine(&input.load_case, input.combination_rule)?;
    let pu_kn = design.magnitude;

    let mut clauses = Vec::new();

    // 1. Minimum lateral dimension
    clauses.push(ClauseResult::at_least(
        is456::COLUMN_MIN_DIMENSION,
        "Minimum column dimension",
        least,
        table.limits.min_column_dimension_mm,
    ));

    // 2. Slenderness cap for braced columns
    clauses.push(ClauseResult::at_most(
        is456::SLENDERNESS_LIMIT,
        "Slenderness ratio (effective length / least dimension)",
        slenderness,
        table.limits.max_column_slenderness,
    ));

    // 3. Minimum eccentricity within the Cl. 39.3 applicability bound 0.05D
    let e_min = (input.effective_length_mm() / 500.0 + least / 30.0)
        .max(table.limits.min_eccentricity_floor_mm);
    clauses.push(ClauseResult::at_most(
        is456::MIN_ECCENTRICITY,
        "Minimum eccentricity vs 0.05 x lateral dimension",
        e_min,
        0.05 * least,
    ));

    // 4. Axial capacity: Pu = 0.4·fck·Ac + 0.67·fy·Asc, reduced for
    //    slender columns by Cr = 1.25 - le/(48·b)
    let reduction = if short {
        1.0
    } else {
        (1.25 - slenderness / 48.0).clamp(0.0, 1.0)
    };
    let capacity_kn = (0.4 * fck * (ag - ast) + 0.67 * fy * ast) * reduction / 1000.0;
    clauses.push(ClauseResult::at_most(
        is456::AXIAL_CAPACITY,
        "Factored axial load vs capacity",
        pu_kn,
        capacity_kn,
    ));

    // 5./6. Longitudinal steel between 0.8 % and 4 % of gross area
    clauses.push(ClauseResult::at_least(
        is456::COLUMN_STEEL,
        "Minimum longitudinal reinforcement (0.8% Ag)",
        ast,
        table.limits.column_min_steel_fraction * ag,
    ));
    clauses.push(ClauseResult::at_most(
        is456::COLUMN_STEEL,
        "Maximum longitudinal reinforcement (4% Ag)",
        ast,
        table.limits.column_max_steel_fraction * ag,
    ));

    // 7. At least four bars in a rectangular column
    clauses.push(ClauseResult::at_least(
        is456::COLUMN_STEEL,
        "Minimum number of longitudinal bars",
        input.reinforcement.bar_count as f64,
        4.0,
    ));

    // 8./9. Tie diameter and spacing
    let tie_dia_required = (input.reinforcement.bar_diameter_mm / 4.0).max(6.0);
    clauses.push(ClauseResult::at_least(
        is456::COLUMN_TIES,
        "Minimum tie diameter",
        input.reinforcement.tie_diameter_mm,
        tie_dia_required,
    ));
    let tie_spacing_limit = least
        .min(16.0 * input.reinforcement.bar_diameter_mm)
        .min(table.limits.tie_spacing_cap_mm);
    clauses.push(ClauseResult::at_most(
        is456::COLUMN_TIES,
        "Maximum tie spacing",
        input.reinforcement.tie_spacing_mm,
        tie_spacing_limit,
    ));

    let mut summary = BTreeMap::new();
    summary.insert("width_mm".to_string(), input.width_mm);
    summary.insert("depth_mm".to_string(), input.depth_mm);
    summary.insert("gross_area_mm2".to_string(), ag);
    summary.insert("ast_mm2".to_string(), ast);
    summary.insert("steel_percent".to_string(), 100.0 * ast / ag);
    summary.insert("slenderness_ratio".to_string(), slenderness);
    summary.insert("short_column".to_string(), if short { 1.0 } else { 0.0 });
    summary.insert("capacity_reduction".to_string(), reduction);
    summary.insert("design_axial_kn".to_string(), pu_kn);
    summary.insert("axial_capacity_kn".to_string(), capacity_kn);
    summary.insert("min_eccentricity_mm".to_string(), e_min);

    Ok(ComplianceReport::new(
        input.label.clone(),
        MemberType::Column,
        design.combination,
        summary,
        clauses,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{ConcreteGrade, SteelGrade};

    /// Scenario column: 300x300, 3 m effective length, M20/Fe415, 8 x 16 mm
    fn test_column() -> ColumnInput {
        ColumnInput {
            material: MaterialSpec::new(ConcreteGrade::M20, SteelGrade::Fe415),
            ..ColumnInput::default()
        }
    }

    #[test]
    fn test_short_classification() {
        let col = test_column();
        // 3000 / 300 = 10, below the short-column threshold of 12
        assert!((col.slenderness_ratio() - 10.0).abs() < 1e-9);

        let report = check(&col, CodeTable::shared()).unwrap();
        assert_eq!(report.summary["short_column"], 1.0);
        assert_eq!(report.summary["capacity_reduction"], 1.0);
    }

    #[test]
    fn test_axial_capacity_short() {
        let report = check(&test_column(), CodeTable::shared()).unwrap();
        // Ast = 8 x 201.06 = 1608.5; Ag = 90000
        // Pu,max = 0.4*20*(90000-1608.5) + 0.67*415*1608.5 = 1154.4 kN
        assert!(
            (report.summary["axial_capacity_kn"] - 1154.4).abs() < 1.0,
            "capacity = {}",
            report.summary["axial_capacity_kn"]
        );
        // Pu = 1.5(400 + 250) = 975 kN passes
        let axial = report
            .clauses
            .iter()
            .find(|c| c.clause == is456::AXIAL_CAPACITY)
            .unwrap();
        assert!((axial.computed - 975.0).abs() < 1e-9);
        assert!(axial.passed);
    }

    #[test]
    fn test_slender_column_reduced_capacity() {
        let mut col = test_column();
        col.height_m = 5.0; // ratio 16.67 -> slender
        let report = check(&col, CodeTable::shared()).unwrap();
        assert_eq!(report.summary["short_column"], 0.0);
        let reduction = report.summary["capacity_reduction"];
        assert!((reduction - (1.25 - 16.666_666_7 / 48.0)).abs() < 1e-6);
        assert!(report.summary["axial_capacity_kn"] < 1154.4);
    }

    #[test]
    fn test_min_eccentricity_small_column_fails() {
        // e_min floors at 20 mm; 0.05 * 300 = 15 mm -> clause fails
        let report = check(&test_column(), CodeTable::shared()).unwrap();
        let ecc = report
            .clauses
            .iter()
            .find(|c| c.clause == is456::MIN_ECCENTRICITY)
            .unwrap();
        assert_eq!(ecc.computed, 20.0);
        assert!(!ecc.passed);
    }

    #[test]
    fn test_min_eccentricity_at_boundary_passes() {
        // 400 mm column: e_min = max(20, 3000/500 + 400/30) = 19.3 -> 20;
        // 0.05 * 400 = 20 -> exactly at the limit, inclusive boundary passes
        let mut col = test_column();
        col.width_mm = 400.0;
        col.depth_mm = 400.0;
        let report = check(&col, CodeTable::shared()).unwrap();
        let ecc = report
            .clauses
            .iter()
            .find(|c| c.clause == is456::MIN_ECCENTRICITY)
            .unwrap();
        assert!(ecc.passed);
    }

    #[test]
    fn test_undersized_column_fails_dimension() {
        let mut col = test_column();
        col.width_mm = 150.0;
        let report = check(&col, CodeTable::shared()).unwrap();
        let dim = report
            .clauses
            .iter()
            .find(|c| c.clause == is456::COLUMN_MIN_DIMENSION)
            .unwrap();
        assert!(!dim.passed);
        assert!(!report.passes());
    }

    #[test]
    fn test_steel_percentage_limits() {
        let report = check(&test_column(), CodeTable::shared()).unwrap();
        // 1608.5 / 90000 = 1.79 %, inside 0.8-4 %
        assert!((report.summary["steel_percent"] - 1.787).abs() < 0.01);
        let min_steel = report
            .clauses
            .iter()
            .find(|c| c.description.starts_with("Minimum longitudinal"))
            .unwrap();
        assert!(min_steel.passed);
    }

    #[test]
    fn test_tie_spacing_limit() {
        let mut col = test_column();
        col.reinforcement.tie_spacing_mm = 350.0;
        let report = check(&col, CodeTable::shared()).unwrap();
        let ties = report
            .clauses
            .iter()
            .find(|c| c.description.starts_with("Maximum tie spacing"))
            .unwrap();
        // Limit: min(300, 16*16 = 256, 300) = 256
        assert_eq!(ties.limit, 256.0);
        assert!(!ties.passed);
    }

    #[test]
    fn test_zero_height_is_validation_error() {
        let mut col = test_column();
        col.height_m = 0.0;
        let err = check(&col, CodeTable::shared()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_idempotence() {
        let col = test_column();
        let a = check(&col, CodeTable::shared()).unwrap();
        let b = check(&col, CodeTable::shared()).unwrap();
        assert_eq!(a.clauses, b.clauses);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let col = test_column();
        let json = serde_json::to_string_pretty(&col).unwrap();
        let parsed: ColumnInput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.height_m, col.height_m);
        assert_eq!(parsed.reinforcement, col.reinforcement);
    }
}
