//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64
//! wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The IS codes use a consistent set of SI units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units (Primary)
//!
//! The engine works in the units the IS codes are written in:
//! - Length: metres (m) for spans and heights, millimetres (mm) for sections
//! - Force: newtons (N), kilonewtons (kN)
//! - Stress: N/mm² (MPa)
//! - Moment: kilonewton-metres (kN·m), newton-millimetres (N·mm)
//! - Distributed load: kN/m (line), kN/m² (area)
//!
//! ## Example
//!
//! ```rust
//! use check_core::units::{Meters, Millimeters, KiloNewtonMeters, NewtonMillimeters};
//!
//! let span = Meters(4.0);
//! let span_mm: Millimeters = span.into();
//! assert_eq!(span_mm.0, 4000.0);
//!
//! let moment = KiloNewtonMeters(54.0);
//! let moment_nmm: NewtonMillimeters = moment.into();
//! assert_eq!(moment_nmm.0, 54.0e6);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

impl From<KiloNewtons> for Newtons {
    fn from(kn: KiloNewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

impl From<Newtons> for KiloNewtons {
    fn from(n: Newtons) -> Self {
        KiloNewtons(n.0 / 1000.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in N/mm² (megapascals)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mpa(pub f64);

/// Pressure in kN/m² (kilopascals) - used for bearing pressures and area loads
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerSquareMeter(pub f64);

impl From<Mpa> for KnPerSquareMeter {
    fn from(mpa: Mpa) -> Self {
        // 1 N/mm² = 1000 kN/m²
        KnPerSquareMeter(mpa.0 * 1000.0)
    }
}

impl From<KnPerSquareMeter> for Mpa {
    fn from(kpa: KnPerSquareMeter) -> Self {
        Mpa(kpa.0 / 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonMeters(pub f64);

/// Moment in newton-millimetres (the unit the IS 456 flexure formulas use)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimeters(pub f64);

impl From<KiloNewtonMeters> for NewtonMillimeters {
    fn from(knm: KiloNewtonMeters) -> Self {
        // 1 kN·m = 1e6 N·mm
        NewtonMillimeters(knm.0 * 1.0e6)
    }
}

impl From<NewtonMillimeters> for KiloNewtonMeters {
    fn from(nmm: NewtonMillimeters) -> Self {
        KiloNewtonMeters(nmm.0 / 1.0e6)
    }
}
