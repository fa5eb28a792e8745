//! # Code Table
//!
//! The static material/code lookup table behind every check: concrete and
//! steel grade properties, the IS 456 Table 19 shear-strength ladder, basic
//! span/depth ratios, and the scalar limits the clauses compare against.
//!
//! The table is an immutable value constructed once and passed by reference
//! into every checker call. [`CodeTable::is456()`] builds the standard
//! IS 456:2000 / IS 875 table; [`CodeTable::shared()`] returns a
//! process-wide lazily-initialized instance for callers that do not inject
//! their own. Lookups are fallible so an injected table with missing entries
//! surfaces a configuration error instead of a silent default.
//!
//! ## Example
//!
//! ```rust
//! use check_core::table::CodeTable;
//! use check_core::materials::ConcreteGrade;
//!
//! let table = CodeTable::shared();
//! let tau_c = table.design_shear_strength(20.0, 0.63).unwrap();
//! assert!((tau_c - 0.39).abs() < 1e-9);
//! assert_eq!(table.concrete(ConcreteGrade::M25).unwrap().fck_mpa, 25.0);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::clauses::is456;
use crate::errors::{CheckError, CheckResult};
use crate::materials::{ConcreteGrade, ConcreteProperties, SteelGrade, SteelProperties};

/// Unit weight of reinforced concrete (kN/m³), IS 875 Part 1
pub const CONCRETE_DENSITY_KN_M3: f64 = 25.0;

/// Support condition of a flexural member, used for the basic span/depth
/// ratios of IS 456 Cl. 23.2.1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SupportCondition {
    /// Cantilever (basic ratio 7)
    Cantilever,
    /// Simply supported (basic ratio 20)
    #[default]
    SimplySupported,
    /// Continuous (basic ratio 26)
    Continuous,
}

impl SupportCondition {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportCondition::Cantilever => "Cantilever",
            SupportCondition::SimplySupported => "Simply supported",
            SupportCondition::Continuous => "Continuous",
        }
    }
}

/// Scalar limits prescribed by IS 456 clauses
///
/// Public fields so an injected table can tighten or relax individual
/// limits; the built-in values are the code-prescribed ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeLimits {
    /// Minimum lateral dimension of a column (mm), Cl. 25.1.2
    pub min_column_dimension_mm: f64,
    /// Slenderness ratio at which a column stops being "short", Cl. 25.1.1
    pub short_column_slenderness: f64,
    /// Maximum slenderness ratio for a braced column, Cl. 25.3.1
    pub max_column_slenderness: f64,
    /// Lower bound on minimum eccentricity (mm), Cl. 25.4
    pub min_eccentricity_floor_mm: f64,
    /// Minimum longitudinal column steel as fraction of gross area, Cl. 26.5.3.1(a)
    pub column_min_steel_fraction: f64,
    /// Maximum longitudinal column steel as fraction of gross area, Cl. 26.5.3.1(b)
    pub column_max_steel_fraction: f64,
    /// Coefficient in beam minimum tension steel As,min = k·b·d/fy, Cl. 26.5.1.1(a)
    pub beam_min_steel_coefficient: f64,
    /// Maximum beam tension steel as fraction of b·D, Cl. 26.5.1.1(b)
    pub beam_max_steel_fraction: f64,
    /// Minimum slab/footing steel as fraction of gross area (HYSD bars), Cl. 26.5.2.1
    pub slab_min_steel_fraction: f64,
    /// Absolute cap on main-bar spacing in slabs (mm), Cl. 26.3.3(b)
    pub slab_spacing_cap_mm: f64,
    /// Absolute cap on bar spacing in footings (mm)
    pub footing_spacing_cap_mm: f64,
    /// Minimum footing thickness at the edge (mm), Cl. 34.1.2
    pub min_footing_thickness_mm: f64,
    /// Absolute cap on column tie spacing (mm), Cl. 26.5.3.2
    pub tie_spacing_cap_mm: f64,
}

/// Immutable material-property and code-limit lookup table
///
/// Constructed once at startup and shared read-only by all checks. The
/// struct is `Serialize`/`Deserialize` so a customized table can be loaded
/// from JSON by the host application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeTable {
    /// Concrete grade properties keyed by grade
    pub concrete_grades: HashMap<ConcreteGrade, ConcreteProperties>,
    /// Steel grade properties keyed by grade
    pub steel_grades: HashMap<SteelGrade, SteelProperties>,
    /// IS 456 Table 19 ladder for M20: (upper bound on pt %, tau_c N/mm²)
    pub shear_strength_table: Vec<(f64, f64)>,
    /// Basic span/depth ratios keyed by support condition, Cl. 23.2.1
    pub basic_span_depth: HashMap<SupportCondition, f64>,
    /// Scalar clause limits
    pub limits: CodeLimits,
}

static SHARED: Lazy<CodeTable> = Lazy::new(CodeTable::is456);

impl CodeTable {
    /// Build the standard IS 456:2000 / IS 875 table
    pub fn is456() -> Self {
        let concrete_grades = ConcreteGrade::ALL
            .iter()
            .map(|grade| {
                // (fck, design bond stress for plain bars, IS 456 Cl. 26.2.1.1)
                let (fck, bond) = match grade {
                    ConcreteGrade::M15 => (15.0, 1.0),
                    ConcreteGrade::M20 => (20.0, 1.2),
                    ConcreteGrade::M25 => (25.0, 1.4),
                    ConcreteGrade::M30 => (30.0, 1.5),
                    ConcreteGrade::M35 => (35.0, 1.7),
                    ConcreteGrade::M40 => (40.0, 1.9),
                    ConcreteGrade::M45 => (45.0, 1.9),
                    ConcreteGrade::M50 => (50.0, 1.9),
                    ConcreteGrade::M55 => (55.0, 1.9),
                    ConcreteGrade::M60 => (60.0, 1.9),
                };
                (
                    *grade,
                    ConcreteProperties {
                        fck_mpa: fck,
                        density_kn_m3: CONCRETE_DENSITY_KN_M3,
                        bond_stress_mpa: bond,
                    },
                )
            })
            .collect();

        let steel_grades = SteelGrade::ALL
            .iter()
            .map(|grade| {
                let (fy, spacing, xu_max) = match grade {
                    SteelGrade::Fe415 => (415.0, 180.0, 0.48),
                    SteelGrade::Fe500 => (500.0, 150.0, 0.46),
                    SteelGrade::Fe550 => (550.0, 135.0, 0.44),
                    SteelGrade::Fe600 => (600.0, 125.0, 0.43),
                };
                (
                    *grade,
                    SteelProperties {
                        fy_mpa: fy,
                        beam_bar_spacing_limit_mm: spacing,
                        xu_max_ratio: xu_max,
                    },
                )
            })
            .collect();

        // IS 456 Table 19, M20 column. Higher grades are scaled in
        // design_shear_strength.
        let shear_strength_table = vec![
            (0.15, 0.28),
            (0.25, 0.30),
            (0.50, 0.35),
            (0.75, 0.39),
            (1.00, 0.42),
            (1.25, 0.45),
            (1.50, 0.48),
            (1.75, 0.50),
            (2.00, 0.52),
            (2.25, 0.54),
            (2.50, 0.56),
            (2.75, 0.57),
            (3.00, 0.58),
        ];

        let basic_span_depth = [
            (SupportCondition::Cantilever, 7.0),
            (SupportCondition::SimplySupported, 20.0),
            (SupportCondition::Continuous, 26.0),
        ]
        .into_iter()
        .collect();

        CodeTable {
            concrete_grades,
            steel_grades,
            shear_strength_table,
            basic_span_depth,
            limits: CodeLimits {
                min_column_dimension_mm: 200.0,
                short_column_slenderness: 12.0,
                max_column_slenderness: 60.0,
                min_eccentricity_floor_mm: 20.0,
                column_min_steel_fraction: 0.008,
                column_max_steel_fraction: 0.04,
                beam_min_steel_coefficient: 0.85,
                beam_max_steel_fraction: 0.04,
                slab_min_steel_fraction: 0.0012,
                slab_spacing_cap_mm: 300.0,
                footing_spacing_cap_mm: 450.0,
                min_footing_thickness_mm: 150.0,
                tie_spacing_cap_mm: 300.0,
            },
        }
    }

    /// Process-wide default table, built on first use
    pub fn shared() -> &'static CodeTable {
        &SHARED
    }

    /// Look up concrete grade properties
    pub fn concrete(&self, grade: ConcreteGrade) -> CheckResult<&ConcreteProperties> {
        self.concrete_grades
            .get(&grade)
            .ok_or_else(|| CheckError::grade_not_found(grade.code()))
    }

    /// Look up steel grade properties
    pub fn steel(&self, grade: SteelGrade) -> CheckResult<&SteelProperties> {
        self.steel_grades
            .get(&grade)
            .ok_or_else(|| CheckError::grade_not_found(grade.code()))
    }

    /// Design shear strength of concrete tau_c (N/mm²), IS 456 Table 19
    ///
    /// Looked up by tension steel percentage pt (clamped to the table range
    /// 0.15–3.0 %). For grades above M20 the M20 ladder is scaled by
    /// sqrt(fck/20) per the Cl. 40.2 footnote.
    pub fn design_shear_strength(&self, fck_mpa: f64, pt_percent: f64) -> CheckResult<f64> {
        let pt = pt_percent.clamp(0.15, 3.0);
        // pt is clamped to the standard table range, but an injected ladder
        // may be shorter; fall back to its last row before erroring.
        let row = self
            .shear_strength_table
            .iter()
            .find(|(bound, _)| pt <= *bound)
            .or_else(|| self.shear_strength_table.last());
        let base = match row {
            Some((_, tau_c)) => *tau_c,
            None => return Err(CheckError::missing_clause(is456::SHEAR)),
        };
        if fck_mpa > 20.0 {
            Ok(base * (fck_mpa / 20.0).sqrt())
        } else {
            Ok(base)
        }
    }

    /// Basic span/effective-depth ratio for deflection control, Cl. 23.2.1
    pub fn basic_span_depth_ratio(&self, support: SupportCondition) -> CheckResult<f64> {
        self.basic_span_depth
            .get(&support)
            .copied()
            .ok_or_else(|| CheckError::missing_clause(is456::DEFLECTION))
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        CodeTable::is456()
    }
}
