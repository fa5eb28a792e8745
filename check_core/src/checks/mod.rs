//! # Compliance Checks
//!
//! One module per member kind. Each follows the pattern:
//!
//! - `*Input` - geometry, materials, reinforcement, loads (JSON-serializable)
//! - `check(&input, &CodeTable) -> CheckResult<ComplianceReport>` - pure
//!   evaluation of a fixed, ordered clause list
//!
//! Validation always precedes clause evaluation: bad geometry aborts the
//! check with an error and no report. A positive-but-unreasonable input
//! proceeds and fails its clauses instead.
//!
//! [`evaluate`] is the single entry point that dispatches on [`MemberItem`].
//!
//! ## Example
//!
//! ```rust
//! use check_core::checks::{evaluate, MemberItem};
//! use check_core::checks::beam::BeamInput;
//! use check_core::table::CodeTable;
//!
//! let item = MemberItem::Beam(BeamInput::default());
//! let report = evaluate(&item, CodeTable::shared()).unwrap();
//! println!("{}: {}", report.label, report.status());
//! ```

pub mod beam;
pub mod column;
pub mod footing;
pub mod slab;

use serde::{Deserialize, Serialize};

pub use beam::{BeamInput, BeamReinforcement};
pub use column::{ColumnInput, ColumnReinforcement};
pub use footing::{FootingInput, FootingReinforcement};
pub use slab::{SlabInput, SlabReinforcement};

use crate::errors::CheckResult;
use crate::report::{ComplianceReport, MemberType};
use crate::table::CodeTable;

/// Cross-sectional area of one bar (mm²)
pub fn bar_area_mm2(diameter_mm: f64) -> f64 {
    std::f64::consts::PI * (diameter_mm / 2.0).powi(2)
}

/// Required area of tension steel per IS 456 Annex G-1.1 (mm²)
///
/// Below the limiting moment the under-reinforced lever-arm solution is
/// used; above it the section needs compression steel and the lever arm is
/// taken as 0.9d, which deliberately overstates the steel demand so the
/// flexure clause fails rather than flattering an over-reinforced section.
///
/// # Arguments
///
/// * `mu_nmm` - design moment (N·mm)
/// * `fck_mpa` / `fy_mpa` - characteristic strengths
/// * `xu_max_ratio` - limiting neutral-axis ratio for the steel grade
/// * `width_mm` - section or strip width b
/// * `effective_depth_mm` - effective depth d
pub fn required_tension_steel_mm2(
    mu_nmm: f64,
    fck_mpa: f64,
    fy_mpa: f64,
    xu_max_ratio: f64,
    width_mm: f64,
    effective_depth_mm: f64,
) -> f64 {
    let b = width_mm;
    let d = effective_depth_mm;
    let xu_max = xu_max_ratio * d;
    let mu_lim = 0.36 * fck_mpa * b * xu_max * (d - 0.42 * xu_max);

    if mu_nmm <= mu_lim {
        let k = mu_nmm / (fck_mpa * b * d * d);
        let j = 1.0 - k / 3.0;
        mu_nmm / (0.87 * fy_mpa * j * d)
    } else {
        mu_nmm / (0.87 * fy_mpa * 0.9 * d)
    }
}

/// Enum wrapper for all member inputs.
///
/// This is the closed set of member kinds the engine can check; the
/// aggregator dispatches on it explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MemberItem {
    /// Flexural beam check
    Beam(BeamInput),
    /// Axially loaded column check
    Column(ColumnInput),
    /// Floor/roof slab check
    Slab(SlabInput),
    /// Isolated footing check
    Footing(FootingInput),
}

impl MemberItem {
    /// Get the user-provided label for this member
    pub fn label(&self) -> &str {
        match self {
            MemberItem::Beam(b) => &b.label,
            MemberItem::Column(c) => &c.label,
            MemberItem::Slab(s) => &s.label,
            MemberItem::Footing(f) => &f.label,
        }
    }

    /// The member kind
    pub fn member_type(&self) -> MemberType {
        match self {
            MemberItem::Beam(_) => MemberType::Beam,
            MemberItem::Column(_) => MemberType::Column,
            MemberItem::Slab(_) => MemberType::Slab,
            MemberItem::Footing(_) => MemberType::Footing,
        }
    }
}

/// Check a member against the code table and return its compliance report.
///
/// Pure and deterministic: the same inputs always produce the same clause
/// results. Errors abort the whole check; there are no partial reports.
pub fn evaluate(item: &MemberItem, table: &CodeTable) -> CheckResult<ComplianceReport> {
    match item {
        MemberItem::Beam(input) => beam::check(input, table),
        MemberItem::Column(input) => column::check(input, table),
        MemberItem::Slab(input) => slab::check(input, table),
        MemberItem::Footing(input) => footing::check(input, table),
    }
}
