//! Load presets from IS 875 Parts 1 and 2
//!
//! Tabulated unit weights and occupancy live loads, used by the shell to
//! derive service loads and by self-weight helpers.

use serde::{Deserialize, Serialize};

/// Common construction materials with unit weights per IS 875 Part 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingMaterial {
    /// Reinforced cement concrete
    ReinforcedConcrete,
    /// Brick masonry
    BrickMasonry,
    /// Stone masonry
    StoneMasonry,
    /// Structural steel
    StructuralSteel,
    /// Timber
    Timber,
    /// Cement plaster
    CementPlaster,
    /// Floor finish materials
    Flooring,
    /// Waterproofing layers
    Waterproofing,
}

impl BuildingMaterial {
    /// All materials for UI selection
    pub const ALL: [BuildingMaterial; 8] = [
        BuildingMaterial::ReinforcedConcrete,
        BuildingMaterial::BrickMasonry,
        BuildingMaterial::StoneMasonry,
        BuildingMaterial::StructuralSteel,
        BuildingMaterial::Timber,
        BuildingMaterial::CementPlaster,
        BuildingMaterial::Flooring,
        BuildingMaterial::Waterproofing,
    ];

    /// Unit weight (kN/m³)
    pub fn density_kn_m3(&self) -> f64 {
        match self {
            BuildingMaterial::ReinforcedConcrete => 25.0,
            BuildingMaterial::BrickMasonry => 19.0,
            BuildingMaterial::StoneMasonry => 24.0,
            BuildingMaterial::StructuralSteel => 78.5,
            BuildingMaterial::Timber => 6.0,
            BuildingMaterial::CementPlaster => 20.0,
            BuildingMaterial::Flooring => 23.0,
            BuildingMaterial::Waterproofing => 1.5,
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            BuildingMaterial::ReinforcedConcrete => "Reinforced concrete",
            BuildingMaterial::BrickMasonry => "Brick masonry",
            BuildingMaterial::StoneMasonry => "Stone masonry",
            BuildingMaterial::StructuralSteel => "Structural steel",
            BuildingMaterial::Timber => "Timber",
            BuildingMaterial::CementPlaster => "Cement plaster",
            BuildingMaterial::Flooring => "Flooring",
            BuildingMaterial::Waterproofing => "Waterproofing",
        }
    }
}

/// Occupancy classes with imposed loads per IS 875 Part 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupancy {
    Residential,
    Office,
    Retail,
    Industrial,
    Warehouse,
    Parking,
    Corridor,
    Stairs,
    /// Accessible terrace
    Terrace,
    /// Non-accessible roof
    Roof,
}

impl Occupancy {
    /// All occupancy classes for UI selection
    pub const ALL: [Occupancy; 10] = [
        Occupancy::Residential,
        Occupancy::Office,
        Occupancy::Retail,
        Occupancy::Industrial,
        Occupancy::Warehouse,
        Occupancy::Parking,
        Occupancy::Corridor,
        Occupancy::Stairs,
        Occupancy::Terrace,
        Occupancy::Roof,
    ];

    /// Imposed floor load (kN/m²)
    pub fn live_load_kn_m2(&self) -> f64 {
        match self {
            Occupancy::Residential => 2.0,
            Occupancy::Office => 3.0,
            Occupancy::Retail => 4.0,
            Occupancy::Industrial => 5.0,
            Occupancy::Warehouse => 7.5,
            Occupancy::Parking => 2.5,
            Occupancy::Corridor => 3.0,
            Occupancy::Stairs => 3.0,
            Occupancy::Terrace => 1.5,
            Occupancy::Roof => 0.75,
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Occupancy::Residential => "Residential",
            Occupancy::Office => "Office",
            Occupancy::Retail => "Retail / commercial",
            Occupancy::Industrial => "Industrial",
            Occupancy::Warehouse => "Warehouse / storage",
            Occupancy::Parking => "Parking",
            Occupancy::Corridor => "Corridor",
            Occupancy::Stairs => "Staircase",
            Occupancy::Terrace => "Accessible terrace",
            Occupancy::Roof => "Non-accessible roof",
        }
    }
}

impl std::fmt::Display for Occupancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_densities() {
        assert_eq!(BuildingMaterial::ReinforcedConcrete.density_kn_m3(), 25.0);
        assert_eq!(BuildingMaterial::StructuralSteel.density_kn_m3(), 78.5);
    }

    #[test]
    fn test_live_loads() {
        assert_eq!(Occupancy::Residential.live_load_kn_m2(), 2.0);
        assert_eq!(Occupancy::Warehouse.live_load_kn_m2(), 7.5);
        assert_eq!(Occupancy::Roof.live_load_kn_m2(), 0.75);
    }

    #[test]
    fn test_warehouse_heaviest_floor_load() {
        let max = Occupancy::ALL
            .iter()
            .map(|o| o.live_load_kn_m2())
            .fold(0.0f64, f64::max);
        assert_eq!(max, Occupancy::Warehouse.live_load_kn_m2());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Occupancy::Office).unwrap();
        assert_eq!(json, "\"Office\"");
    }
}
