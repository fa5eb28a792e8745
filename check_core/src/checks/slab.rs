//! # Slab Compliance Check
//!
//! Checks a solid floor/roof slab against IS 456:2000, per metre strip.
//!
//! ## Assumptions
//!
//! - Uniform area loads; slab self-weight is always included in the dead load
//! - One-way behaviour when the panel aspect ratio is 2 or more, otherwise
//!   two-way with the simply-supported moment coefficient 0.087 on the short
//!   span
//! - Main steel parallel to the short span; distribution steel checked for
//!   one-way slabs only
//!
//! ## Example
//!
//! ```rust
//! use check_core::checks::slab::{check, SlabInput};
//! use check_core::table::CodeTable;
//!
//! let report = check(&SlabInput::default(), CodeTable::shared()).unwrap();
//! println!("one-way: {}", report.summary["one_way"] == 1.0);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{bar_area_mm2, required_tension_steel_mm2};
use crate::clauses::is456;
use crate::errors::{CheckError, CheckResult};
use crate::loads::{combine, CombinationRule, LoadCase, LoadType};
use crate::materials::MaterialSpec;
use crate::report::{ClauseResult, ComplianceReport, MemberType};
use crate::table::{CodeTable, SupportCondition};
use crate::units::{KiloNewtonMeters, Meters, Millimeters, NewtonMillimeters};

/// Two-way simply-supported short-span moment coefficient (IS 456 Table 27)
const TWO_WAY_ALPHA_X: f64 = 0.087;

/// Main and distribution reinforcement detail for a slab (per metre strip)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabReinforcement {
    /// Main bar diameter (mm)
    pub bar_diameter_mm: f64,
    /// Main bar spacing (mm c/c)
    pub spacing_mm: f64,
    /// Distribution bar diameter (mm)
    pub distribution_bar_diameter_mm: f64,
    /// Distribution bar spacing (mm c/c)
    pub distribution_spacing_mm: f64,
    /// Clear cover (mm)
    pub cover_mm: f64,
}

impl Default for SlabReinforcement {
    fn default() -> Self {
        SlabReinforcement {
            bar_diameter_mm: 10.0,
            spacing_mm: 150.0,
            distribution_bar_diameter_mm: 8.0,
            distribution_spacing_mm: 200.0,
            cover_mm: 20.0,
        }
    }
}

/// Input parameters for a slab compliance check
///
/// Panel dimensions in metres, thickness in millimetres, area loads in
/// kN/m². The dead-load component should hold finishes and partitions; the
/// slab's own weight is added automatically.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "S-1",
///   "length_m": 4.0,
///   "breadth_m": 3.0,
///   "thickness_mm": 150.0,
///   "support": "SimplySupported",
///   "material": { "concrete": "M20", "steel": "Fe415" },
///   "load_case": { "label": "Floor", "loads": { "Dead": 1.5, "Live": 2.0 } },
///   "combination_rule": "Gravity",
///   "reinforcement": { "bar_diameter_mm": 10.0, "spacing_mm": 150.0,
///                      "distribution_bar_diameter_mm": 8.0,
///                      "distribution_spacing_mm": 200.0, "cover_mm": 20.0 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlabInput {
    /// User label (e.g. "S-1", "Roof panel 2")
    pub label: String,

    /// Panel length (m)
    pub length_m: f64,

    /// Panel breadth (m)
    pub breadth_m: f64,

    /// Overall slab thickness (mm)
    pub thickness_mm: f64,

    /// Support condition of the governing strip
    pub support: SupportCondition,

    /// Concrete and steel grades
    pub material: MaterialSpec,

    /// Service area loads (kN/m²) by type, excluding slab self-weight
    pub load_case: LoadCase,

    /// Which IS 875 combination sets apply
    pub combination_rule: CombinationRule,

    /// Reinforcement detail
    pub reinforcement: SlabReinforcement,
}

impl Default for SlabInput {
    fn default() -> Self {
        SlabInput {
            label: "S-1".to_string(),
            length_m: 4.0,
            breadth_m: 3.0,
            thickness_mm: 150.0,
            support: SupportCondition::SimplySupported,
            material: MaterialSpec::default(),
            load_case: LoadCase::new("Floor")
                .with_load(LoadType::Dead, 1.5)
                .with_load(LoadType::Live, 2.0),
            combination_rule: CombinationRule::Gravity,
            reinforcement: SlabReinforcement::default(),
        }
    }
}

impl SlabInput {
    /// Validate input parameters before any clause is evaluated.
    pub fn validate(&self) -> CheckResult<()> {
        if self.length_m <= 0.0 {
            return Err(CheckError::invalid_input(
                "length_m",
                self.length_m.to_string(),
                "Length must be positive",
            ));
        }
        if self.breadth_m <= 0.0 {
            return Err(CheckError::invalid_input(
                "breadth_m",
                self.breadth_m.to_string(),
                "Breadth must be positive",
            ));
        }
        if self.thickness_mm <= 0.0 {
            return Err(CheckError::invalid_input(
                "thickness_mm",
                self.thickness_mm.to_string(),
                "Thickness must be positive",
            ));
        }
        if self.reinforcement.bar_diameter_mm <= 0.0
            || self.reinforcement.spacing_mm <= 0.0
            || self.reinforcement.distribution_bar_diameter_mm <= 0.0
            || self.reinforcement.distribution_spacing_mm <= 0.0
        {
            return Err(CheckError::invalid_input(
                "reinforcement",
                format!(
                    "{}mm @ {}mm",
                    self.reinforcement.bar_diameter_mm, self.reinforcement.spacing_mm
                ),
                "Bar diameters and spacings must be positive",
            ));
        }
        if self.reinforcement.cover_mm <= 0.0 {
            return Err(CheckError::invalid_input(
                "cover_mm",
                self.reinforcement.cover_mm.to_string(),
                "Cover must be positive",
            ));
        }
        if self.effective_depth_mm() <= 0.0 {
            return Err(CheckError::invalid_input(
                "thickness_mm",
                self.thickness_mm.to_string(),
                "Cover and bar diameter leave no effective depth",
            ));
        }
        Ok(())
    }

    /// Shorter span lx (m) - the design span
    pub fn short_span_m(&self) -> f64 {
        self.length_m.min(self.breadth_m)
    }

    /// Panel aspect ratio ly/lx
    pub fn aspect_ratio(&self) -> f64 {
        self.length_m.max(self.breadth_m) / self.short_span_m()
    }

    /// One-way behaviour when the aspect ratio is 2 or more
    pub fn is_one_way(&self) -> bool {
        self.aspect_ratio() >= 2.0
    }

    /// Effective depth d = t - cover - bar diameter / 2 (mm)
    pub fn effective_depth_mm(&self) -> f64 {
        self.thickness_mm - self.reinforcement.cover_mm - self.reinforcement.bar_diameter_mm / 2.0
    }

    /// Main steel provided per metre strip (mm²/m)
    pub fn ast_provided_mm2(&self) -> f64 {
        1000.0 * bar_area_mm2(self.reinforcement.bar_diameter_mm) / self.reinforcement.spacing_mm
    }

    /// Distribution steel provided per metre strip (mm²/m)
    pub fn ast_distribution_mm2(&self) -> f64 {
        1000.0 * bar_area_mm2(self.reinforcement.distribution_bar_diameter_mm)
            / self.reinforcement.distribution_spacing_mm
    }

    /// Slab self-weight (kN/m²) for a given concrete density
    pub fn self_weight_kn_m2(&self, density_kn_m3: f64) -> f64 {
        self.thickness_mm / 1000.0 * density_kn_m3
    }
}

/// Check a slab against IS 456 and return its compliance report.
///
/// Clause order: minimum thickness, flexure, minimum steel, bar spacing,
/// shear, distribution steel (one-way slabs).
pub fn check(input: &SlabInput, table: &CodeTable) -> CheckResult<ComplianceReport> {
    input.validate()?;

    let concrete = table.concrete(input.material.concrete)?;
    let steel = table.steel(input.material.steel)?;
    let fck = concrete.fck_mpa;
    let fy = steel.fy_mpa;

    let d = input.effective_depth_mm();
    let lx = input.short_span_m();
    let lx_mm = Millimeters::from(Meters(lx)).0;
    let one_way = input.is_one_way();

    // === Design load (self-weight always included) ===
    let self_weight = input.self_weight_kn_m2(concrete.density_kn_m3);
    let mut case = input.load_case.clone();
    case.set_load(LoadType::Dead, case.get(LoadType::Dead) + self_weight);
    let design = combine(&case, input.combination_rule)?;
    let wu = design.magnitude;

    // === Strip moment (kN·m per metre width) ===
    let mu_kn_m = if one_way {
        wu * lx * lx / 8.0
    } else {
        TWO_WAY_ALPHA_X * wu * lx * lx
    };
    let mu_nmm = NewtonMillimeters::from(KiloNewtonMeters(mu_kn_m)).0;

    let mut clauses = Vec::new();

    // 1. Minimum thickness for deflection control
    let basic_ratio = table.basic_span_depth_ratio(input.support)?;
    clauses.push(ClauseResult::at_least(
        is456::DEFLECTION,
        "Minimum thickness for deflection control",
        input.thickness_mm,
        lx_mm / basic_ratio,
    ));

    // 2. Flexural steel per metre strip
    let ast_required =
        required_tension_steel_mm2(mu_nmm, fck, fy, steel.xu_max_ratio, 1000.0, d);
    let ast_provided = input.ast_provided_mm2();
    clauses.push(ClauseResult::at_least(
        is456::FLEXURE,
        "Main steel provided vs required",
        ast_provided,
        ast_required,
    ));

    // 3. Minimum reinforcement (0.12 % of gross for HYSD bars)
    let ast_min = table.limits.slab_min_steel_fraction * 1000.0 * input.thickness_mm;
    clauses.push(ClauseResult::at_least(
        is456::MIN_SLAB_STEEL,
        "Minimum main reinforcement",
        ast_provided,
        ast_min,
    ));

    // 4. Maximum spacing of main bars
    let spacing_limit = (3.0 * d).min(table.limits.slab_spacing_cap_mm);
    clauses.push(ClauseResult::at_most(
        is456::SLAB_BAR_SPACING,
        "Main bar spacing",
        input.reinforcement.spacing_mm,
        spacing_limit,
    ));

    // 5. Shear on the strip at the support
    let vu_kn_per_m = wu * lx / 2.0;
    let tau_v = vu_kn_per_m * 1000.0 / (1000.0 * d);
    clauses.push(ClauseResult::at_most(
        is456::SHEAR,
        "Shear stress vs 0.25 sqrt(fck)",
        tau_v,
        0.25 * fck.sqrt(),
    ));

    // 6. Distribution steel perpendicular to the span (one-way slabs)
    if one_way {
        clauses.push(ClauseResult::at_least(
            is456::MIN_SLAB_STEEL,
            "Distribution reinforcement",
            input.ast_distribution_mm2(),
            ast_min,
        ));
    }

    let mut summary = BTreeMap::new();
    summary.insert("short_span_mm".to_string(), lx_mm);
    summary.insert("thickness_mm".to_string(), input.thickness_mm);
    summary.insert("effective_depth_mm".to_string(), d);
    summary.insert("aspect_ratio".to_string(), input.aspect_ratio());
    summary.insert("one_way".to_string(), if one_way { 1.0 } else { 0.0 });
    summary.insert("self_weight_kn_m2".to_string(), self_weight);
    summary.insert("design_load_kn_m2".to_string(), wu);
    summary.insert("design_moment_kn_m".to_string(), mu_kn_m);
    summary.insert("ast_required_mm2".to_string(), ast_required);
    summary.insert("ast_provided_mm2".to_string(), ast_provided);

    Ok(ComplianceReport::new(
        input.label.clone(),
        MemberType::Slab,
        design.combination,
        summary,
        clauses,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{ConcreteGrade, SteelGrade};

    /// 4 m x 3 m two-way residential panel, 150 mm thick, M20/Fe415
    fn test_slab() -> SlabInput {
        SlabInput {
            material: MaterialSpec::new(ConcreteGrade::M20, SteelGrade::Fe415),
            ..SlabInput::default()
        }
    }

    #[test]
    fn test_two_way_classification() {
        let slab = test_slab();
        assert!((slab.aspect_ratio() - 4.0 / 3.0).abs() < 1e-9);
        assert!(!slab.is_one_way());
    }

    #[test]
    fn test_one_way_classification() {
        let mut slab = test_slab();
        slab.length_m = 6.0;
        slab.breadth_m = 2.5;
        assert!(slab.is_one_way());
    }

    #[test]
    fn test_self_weight_always_included() {
        let report = check(&test_slab(), CodeTable::shared()).unwrap();
        // 0.15 * 25 = 3.75 kN/m² self weight
        assert!((report.summary["self_weight_kn_m2"] - 3.75).abs() < 1e-9);
        // wu = 1.5(1.5 + 3.75 + 2.0) = 10.875 kN/m²
        assert!((report.summary["design_load_kn_m2"] - 10.875).abs() < 1e-9);
    }

    #[test]
    fn test_two_way_moment() {
        let report = check(&test_slab(), CodeTable::shared()).unwrap();
        // Mu = 0.087 * 10.875 * 3² = 8.515 kNm/m
        assert!((report.summary["design_moment_kn_m"] - 8.515).abs() < 0.001);
    }

    #[test]
    fn test_one_way_moment() {
        let mut slab = test_slab();
        slab.length_m = 6.0;
        slab.breadth_m = 2.5;
        let report = check(&slab, CodeTable::shared()).unwrap();
        let wu = report.summary["design_load_kn_m2"];
        let expected = wu * 2.5 * 2.5 / 8.0;
        assert!((report.summary["design_moment_kn_m"] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_typical_slab_passes() {
        let report = check(&test_slab(), CodeTable::shared()).unwrap();
        assert!(
            report.passes(),
            "failed: {:?}",
            report.failed_clauses().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_thickness_exactly_at_limit_passes() {
        // lx/20 = 3000/20 = 150 mm, exactly the provided thickness
        let report = check(&test_slab(), CodeTable::shared()).unwrap();
        let thickness = &report.clauses[0];
        assert_eq!(thickness.computed, 150.0);
        assert_eq!(thickness.limit, 150.0);
        assert!(thickness.passed);
    }

    #[test]
    fn test_thin_slab_fails_thickness() {
        let mut slab = test_slab();
        slab.thickness_mm = 100.0;
        let report = check(&slab, CodeTable::shared()).unwrap();
        assert!(!report.clauses[0].passed);
        assert!(!report.passes());
    }

    #[test]
    fn test_wide_spacing_fails() {
        let mut slab = test_slab();
        slab.reinforcement.spacing_mm = 350.0;
        let report = check(&slab, CodeTable::shared()).unwrap();
        let spacing = report
            .clauses
            .iter()
            .find(|c| c.clause == is456::SLAB_BAR_SPACING)
            .unwrap();
        assert_eq!(spacing.limit, 300.0);
        assert!(!spacing.passed);
    }

    #[test]
    fn test_distribution_clause_only_for_one_way() {
        let two_way = check(&test_slab(), CodeTable::shared()).unwrap();
        assert!(!two_way
            .clauses
            .iter()
            .any(|c| c.description.starts_with("Distribution")));

        let mut slab = test_slab();
        slab.length_m = 6.0;
        slab.breadth_m = 2.5;
        let one_way = check(&slab, CodeTable::shared()).unwrap();
        assert!(one_way
            .clauses
            .iter()
            .any(|c| c.description.starts_with("Distribution")));
    }

    #[test]
    fn test_zero_thickness_is_validation_error() {
        let mut slab = test_slab();
        slab.thickness_mm = 0.0;
        let err = check(&slab, CodeTable::shared()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_idempotence() {
        let slab = test_slab();
        let a = check(&slab, CodeTable::shared()).unwrap();
        let b = check(&slab, CodeTable::shared()).unwrap();
        assert_eq!(a.clauses, b.clauses);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let slab = test_slab();
        let json = serde_json::to_string_pretty(&slab).unwrap();
        let parsed: SlabInput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.thickness_mm, slab.thickness_mm);
        assert_eq!(parsed.reinforcement, slab.reinforcement);
    }
}
