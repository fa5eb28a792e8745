//! # Isolated Footing Compliance Check
//!
//! Checks a rectangular isolated footing under a concentric square column
//! against IS 456:2000.
//!
//! ## Assumptions
//!
//! - Concentric axial load, uniform soil pressure
//! - Bearing checked at service loads (including footing self-weight)
//!   against the supplied safe bearing capacity
//! - Strength checks use the net factored upward pressure (self-weight does
//!   not bend the footing)
//! - Flexure at the column face, one-way shear at distance d from the face,
//!   punching shear on the perimeter at d/2
//!
//! ## Example
//!
//! ```rust
//! use check_core::checks::footing::{check, FootingInput};
//! use check_core::table::CodeTable;
//!
//! let report = check(&FootingInput::default(), CodeTable::shared()).unwrap();
//! println!("bearing pressure = {} kN/m²", report.summary["bearing_pressure_kn_m2"]);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{bar_area_mm2, required_tension_steel_mm2};
use crate::clauses::{is456, BEARING_PRESSURE};
use crate::errors::{CheckError, CheckResult};
use crate::loads::{combine, CombinationRule, LoadCase, LoadType};
use crate::materials::MaterialSpec;
use crate::report::{ClauseResult, ComplianceReport, MemberType};
use crate::table::CodeTable;
use crate::units::{KnPerSquareMeter, Mpa};

/// Bottom reinforcement detail for a footing (per metre strip, both ways)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootingReinforcement {
    /// Bar diameter (mm)
    pub bar_diameter_mm: f64,
    /// Bar spacing (mm c/c)
    pub spacing_mm: f64,
    /// Bottom clear cover (mm)
    pub cover_mm: f64,
}

impl Default for FootingReinforcement {
    fn default() -> Self {
        FootingReinforcement {
            bar_diameter_mm: 16.0,
            spacing_mm: 150.0,
            cover_mm: 50.0,
        }
    }
}

/// Input parameters for an isolated footing compliance check
///
/// Plan dimensions in metres, thickness and column size in millimetres,
/// axial load components in kN, bearing capacity in kN/m².
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "F-1",
///   "length_m": 2.0,
///   "breadth_m": 2.0,
///   "thickness_mm": 450.0,
///   "column_size_mm": 400.0,
///   "safe_bearing_capacity_kn_m2": 200.0,
///   "material": { "concrete": "M20", "steel": "Fe415" },
///   "load_case": { "label": "Column reaction", "loads": { "Dead": 450.0, "Live": 250.0 } },
///   "combination_rule": "Gravity",
///   "reinforcement": { "bar_diameter_mm": 16.0, "spacing_mm": 150.0, "cover_mm": 50.0 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootingInput {
    /// User label (e.g. "F-1")
    pub label: String,

    /// Plan length (m)
    pub length_m: f64,

    /// Plan breadth (m)
    pub breadth_m: f64,

    /// Overall thickness (mm)
    pub thickness_mm: f64,

    /// Side of the (square) supported column (mm)
    pub column_size_mm: f64,

    /// Safe bearing capacity of the soil (kN/m²), from the geotechnical report
    pub safe_bearing_capacity_kn_m2: f64,

    /// Concrete and steel grades
    pub material: MaterialSpec,

    /// Axial service-load components from the column (kN) by type
    pub load_case: LoadCase,

    /// Which IS 875 combination sets apply
    pub combination_rule: CombinationRule,

    /// Reinforcement detail
    pub reinforcement: FootingReinforcement,
}

impl Default for FootingInput {
    fn default() -> Self {
        FootingInput {
            label: "F-1".to_string(),
            length_m: 2.0,
            breadth_m: 2.0,
            thickness_mm: 450.0,
            column_size_mm: 400.0,
            safe_bearing_capacity_kn_m2: 200.0,
            material: MaterialSpec::default(),
            load_case: LoadCase::new("Column reaction")
                .with_load(LoadType::Dead, 450.0)
                .with_load(LoadType::Live, 250.0),
            combination_rule: CombinationRule::Gravity,
            reinforcement: FootingReinforcement::default(),
        }
    }
}

impl FootingInput {
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
        if self.column_size_mm <= 0.0 {
            return Err(CheckError::invalid_input(
                "column_size_mm",
                self.column_size_mm.to_string(),
                "Column size must be positive",
            ));
        }
        if self.column_size_mm >= self.length_m.min(self.breadth_m) * 1000.0 {
            return Err(CheckError::invalid_input(
                "column_size_mm",
                self.column_size_mm.to_string(),
                "Column must fit inside the footing plan",
            ));
        }
        if self.safe_bearing_capacity_kn_m2 <= 0.0 {
            return Err(CheckError::invalid_input(
                "safe_bearing_capacity_kn_m2",
                self.safe_bearing_capacity_kn_m2.to_string(),
                "Safe bearing capacity must be positive",
            ));
        }
        if self.reinforcement.bar_diameter_mm <= 0.0
            || self.reinforcement.spacing_mm <= 0.0
            || self.reinforcement.cover_mm <= 0.0
        {
            return Err(CheckError::invalid_input(
                "reinforcement",
                format!(
                    "{}mm @ {}mm",
                    self.reinforcement.bar_diameter_mm, self.reinforcement.spacing_mm
                ),
                "Bar diameter, spacing and cover must be positive",
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

    /// Plan area (m²)
    pub fn area_m2(&self) -> f64 {
        self.length_m * self.breadth_m
    }

    /// Effective depth d = t - cover - bar diameter / 2 (mm)
    pub fn effective_depth_mm(&self) -> f64 {
        self.thickness_mm - self.reinforcement.cover_mm - self.reinforcement.bar_diameter_mm / 2.0
    }

    /// Cantilever projection from the column face on the long side (mm)
    pub fn projection_mm(&self) -> f64 {
        (self.length_m.max(self.breadth_m) * 1000.0 - self.column_size_mm) / 2.0
    }

    /// Steel provided per metre strip (mm²/m)
    pub fn ast_provided_mm2(&self) -> f64 {
        1000.0 * bar_area_mm2(self.reinforcement.bar_diameter_mm) / self.reinforcement.spacing_mm
    }

    /// Footing self-weight (kN) for a given concrete density
    pub fn self_weight_kn(&self, density_kn_m3: f64) -> f64 {
        self.area_m2() * self.thickness_mm / 1000.0 * density_kn_m3
    }
}

/// Check a footing against IS 456 and return its compliance report.
///
/// Clause order: bearing pressure, minimum thickness, flexure, minimum
/// steel, bar spacing, one-way shear, punching shear.
pub fn check(input: &FootingInput, table: &CodeTable) -> CheckResult<ComplianceReport> {
    input.validate()?;

    let concrete = table.concrete(input.material.concrete)?;
    let steel = table.steel(input.material.steel)?;
    let fck = concrete.fck_mpa;
    let fy = steel.fy_mpa;

    let area = input.area_m2();
    let d = input.effective_depth_mm();
    let projection = input.projection_mm();
    let self_weight = input.self_weight_kn(concrete.density_kn_m3);

    // Service loads govern bearing; gravity components only
    let service_kn = input.load_case.total_gravity();
    let bearing_pressure = (service_kn + self_weight) / area;

    // Factored column reaction for the strength checks
    let design = combine(&input.load_case, input.combination_rule)?;
    let pu_kn = design.magnitude;
    let net_pressure = KnPerSquareMeter(pu_kn / area);
    let net_pressure_mpa = Mpa::from(net_pressure).0;

    let mut clauses = Vec::new();

    // 1. Bearing pressure vs safe bearing capacity
    clauses.push(ClauseResult::at_most(
        BEARING_PRESSURE,
        "Soil bearing pressure at service loads",
        bearing_pressure,
        input.safe_bearing_capacity_kn_m2,
    ));

    // 2. Minimum thickness: 150 mm floor or projection/4
    let min_thickness = table
        .limits
        .min_footing_thickness_mm
        .max(projection / 4.0);
    clauses.push(ClauseResult::at_least(
        is456::FOOTING_THICKNESS,
        "Minimum footing thickness",
        input.thickness_mm,
        min_thickness,
    ));

    // 3. Flexure at the column face (per metre strip)
    let projection_m = projection / 1000.0;
    let mu_kn_m = net_pressure.0 * projection_m * projection_m / 2.0;
    let ast_required =
        required_tension_steel_mm2(mu_kn_m * 1.0e6, fck, fy, steel.xu_max_ratio, 1000.0, d);
    let ast_provided = input.ast_provided_mm2();
    clauses.push(ClauseResult::at_least(
        is456::FOOTING_FLEXURE,
        "Bottom steel provided vs required",
        ast_provided,
        ast_required,
    ));

    // 4. Minimum reinforcement
    let ast_min = table.limits.slab_min_steel_fraction * 1000.0 * input.thickness_mm;
    clauses.push(ClauseResult::at_least(
        is456::MIN_SLAB_STEEL,
        "Minimum reinforcement",
        ast_provided,
        ast_min,
    ));

    // 5. Maximum bar spacing
    let spacing_limit = (3.0 * d).min(table.limits.footing_spacing_cap_mm);
    clauses.push(ClauseResult::at_most(
        is456::SLAB_BAR_SPACING,
        "Bar spacing",
        input.reinforcement.spacing_mm,
        spacing_limit,
    ));

    // 6. One-way shear at distance d from the column face
    let shear_span_mm = (projection - d).max(0.0);
    let tau_v = net_pressure_mpa * shear_span_mm / d;
    let pt = 100.0 * ast_provided / (1000.0 * d);
    let tau_c = table.design_shear_strength(fck, pt)?;
    clauses.push(ClauseResult::at_most(
        is456::SHEAR,
        "One-way shear stress at d from column face",
        tau_v,
        tau_c,
    ));

    // 7. Punching shear on the perimeter at d/2 from the column face
    let critical_side = input.column_size_mm + d;
    let perimeter = 4.0 * critical_side;
    let punching_force_n =
        pu_kn * 1000.0 - net_pressure_mpa * critical_side * critical_side;
    let tau_punch = punching_force_n.max(0.0) / (perimeter * d);
    clauses.push(ClauseResult::at_most(
        is456::PUNCHING_SHEAR,
        "Punching shear stress vs 0.25 sqrt(fck)",
        tau_punch,
        0.25 * fck.sqrt(),
    ));

    let mut summary = BTreeMap::new();
    summary.insert("plan_area_m2".to_string(), area);
    summary.insert("thickness_mm".to_string(), input.thickness_mm);
    summary.insert("effective_depth_mm".to_string(), d);
    summary.insert("projection_mm".to_string(), projection);
    summary.insert("self_weight_kn".to_string(), self_weight);
    summary.insert("service_load_kn".to_string(), service_kn);
    summary.insert("bearing_pressure_kn_m2".to_string(), bearing_pressure);
    summary.insert("design_axial_kn".to_string(), pu_kn);
    summary.insert("net_pressure_kn_m2".to_string(), net_pressure.0);
    summary.insert("design_moment_kn_m".to_string(), mu_kn_m);
    summary.insert("ast_required_mm2".to_string(), ast_required);
    summary.insert("ast_provided_mm2".to_string(), ast_provided);

    Ok(ComplianceReport::new(
        input.label.clone(),
        MemberType::Footing,
        design.combination,
        summary,
        clauses,
    ))
}
