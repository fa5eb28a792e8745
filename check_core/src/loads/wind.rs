//! Design wind pressure per IS 875 Part 3
//!
//! V_z = V_b × k2 × k3, p_z = 0.6 V_z² (N/m²). The risk coefficient k1 is
//! folded into the caller-supplied importance factor.

use serde::{Deserialize, Serialize};

use crate::errors::{CheckError, CheckResult};
use crate::units::KnPerSquareMeter;

/// Basic wind speed zones of the IS 875 Part 3 wind map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WindZone {
    /// 39 m/s
    Zone1,
    /// 44 m/s (most of central India)
    #[default]
    Zone2,
    /// 47 m/s
    Zone3,
    /// 50 m/s
    Zone4,
    /// 55 m/s
    Zone5,
    /// 60 m/s (cyclonic coastal belts)
    Zone6,
}

impl WindZone {
    /// Basic wind speed V_b (m/s)
    pub fn basic_speed_m_s(&self) -> f64 {
        match self {
            WindZone::Zone1 => 39.0,
            WindZone::Zone2 => 44.0,
            WindZone::Zone3 => 47.0,
            WindZone::Zone4 => 50.0,
            WindZone::Zone5 => 55.0,
            WindZone::Zone6 => 60.0,
        }
    }
}

/// Terrain categories per IS 875 Part 3 Cl. 5.3.2.1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TerrainCategory {
    /// Open terrain with no obstructions
    Category1,
    /// Open terrain with scattered obstructions
    #[default]
    Category2,
    /// Built-up suburban terrain
    Category3,
    /// Dense urban terrain
    Category4,
}

impl TerrainCategory {
    /// Terrain and height factor k2
    ///
    /// Base factor at 10 m, increased with (h/10)^0.15 above 10 m.
    pub fn k2(&self, height_m: f64) -> f64 {
        let base = match self {
            TerrainCategory::Category1 => 1.05,
            TerrainCategory::Category2 => 1.00,
            TerrainCategory::Category3 => 0.91,
            TerrainCategory::Category4 => 0.80,
        };
        if height_m <= 10.0 {
            base
        } else {
            base * (height_m / 10.0).powf(0.15)
        }
    }
}

/// Result of a design wind pressure calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindPressure {
    /// Basic wind speed V_b (m/s)
    pub basic_speed_m_s: f64,
    /// Terrain and height factor k2
    pub terrain_height_factor: f64,
    /// Topography factor k3
    pub topography_factor: f64,
    /// Design wind speed V_z (m/s)
    pub design_speed_m_s: f64,
    /// Design wind pressure including the importance factor (kN/m²)
    pub pressure_kn_m2: f64,
}

impl WindPressure {
    /// The design pressure as a typed value
    pub fn pressure(&self) -> KnPerSquareMeter {
        KnPerSquareMeter(self.pressure_kn_m2)
    }
}

/// Compute the design wind pressure at a given height.
///
/// # Arguments
///
/// * `height_m` - height above ground (m), must be positive
/// * `zone` - basic wind speed zone
/// * `terrain` - terrain category for k2
/// * `importance_factor` - structure importance multiplier (1.0 for normal
///   buildings), must be positive
///
/// # Example
/// ```
/// use check_core::loads::{design_wind_pressure, TerrainCategory, WindZone};
///
/// let wind = design_wind_pressure(10.0, WindZone::Zone2, TerrainCategory::Category2, 1.0)
///     .unwrap();
/// // p_z = 0.6 * 44² / 1000 = 1.16 kN/m²
/// assert!((wind.pressure_kn_m2 - 1.1616).abs() < 1e-4);
/// ```
pub fn design_wind_pressure(
    height_m: f64,
    zone: WindZone,
    terrain: TerrainCategory,
    importance_factor: f64,
) -> CheckResult<WindPressure> {
    if height_m <= 0.0 {
        return Err(CheckError::invalid_input(
            "height_m",
            height_m.to_string(),
            "Height must be positive",
        ));
    }
    if importance_factor <= 0.0 {
        return Err(CheckError::invalid_input(
            "importance_factor",
            importance_factor.to_string(),
            "Importance factor must be positive",
        ));
    }

    let vb = zone.basic_speed_m_s();
    let k2 = terrain.k2(height_m);
    let k3 = 1.0; // Flat topography; hilly sites need a site-specific k3
    let vz = vb * k2 * k3;

    // p_z = 0.6 V_z² in N/m², converted to kN/m²
    let pz = 0.6 * vz * vz / 1000.0;

    Ok(WindPressure {
        basic_speed_m_s: vb,
        terrain_height_factor: k2,
        topography_factor: k3,
        design_speed_m_s: vz,
        pressure_kn_m2: pz * importance_factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_speeds() {
        assert_eq!(WindZone::Zone1.basic_speed_m_s(), 39.0);
        assert_eq!(WindZone::Zone6.basic_speed_m_s(), 60.0);
    }

    #[test]
    fn test_k2_at_reference_height() {
        assert_eq!(TerrainCategory::Category2.k2(10.0), 1.00);
        assert_eq!(TerrainCategory::Category4.k2(5.0), 0.80);
    }

    #[test]
    fn test_k2_grows_with_height() {
        let low = TerrainCategory::Category2.k2(10.0);
        let high = TerrainCategory::Category2.k2(30.0);
        assert!(high > low);
    }

    #[test]
    fn test_pressure_zone2_reference() {
        let wind =
            design_wind_pressure(10.0, WindZone::Zone2, TerrainCategory::Category2, 1.0).unwrap();
        assert_eq!(wind.design_speed_m_s, 44.0);
        assert!((wind.pressure_kn_m2 - 1.1616).abs() < 1e-4);
    }

    #[test]
    fn test_importance_factor_scales_pressure() {
        let normal =
            design_wind_pressure(10.0, WindZone::Zone3, TerrainCategory::Category2, 1.0).unwrap();
        let important =
            design_wind_pressure(10.0, WindZone::Zone3, TerrainCategory::Category2, 1.15).unwrap();
        assert!((important.pressure_kn_m2 - normal.pressure_kn_m2 * 1.15).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_height() {
        assert!(
            design_wind_pressure(0.0, WindZone::Zone2, TerrainCategory::Category2, 1.0).is_err()
        );
    }

    #[test]
    fn test_typed_pressure_accessor() {
        let wind =
            design_wind_pressure(10.0, WindZone::Zone2, TerrainCategory::Category2, 1.0).unwrap();
        assert_eq!(wind.pressure().0, wind.pressure_kn_m2);
    }
}
