//! Load type definitions per IS 875
//!
//! The load categories that enter IS 456 Table 18 load combinations.

use serde::{Deserialize, Serialize};

/// Load types per IS 875 / IS 456 Table 18
///
/// Each load type has the standard abbreviation used in load combination
/// equations (DL, IL, WL, EL in the code; single letters here for brevity).
///
/// # Example
/// ```
/// use check_core::loads::LoadType;
///
/// let dead = LoadType::Dead;
/// assert_eq!(dead.code(), "D");
/// assert_eq!(dead.description(), "Dead load");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadType {
    /// D - Dead load (self-weight, finishes, partitions), IS 875 Part 1
    Dead,
    /// L - Imposed (live) load, IS 875 Part 2
    Live,
    /// W - Wind load, IS 875 Part 3
    Wind,
    /// E - Earthquake load, IS 1893
    Seismic,
}

impl LoadType {
    /// All load types in standard order
    pub const ALL: [LoadType; 4] = [
        LoadType::Dead,
        LoadType::Live,
        LoadType::Wind,
        LoadType::Seismic,
    ];

    /// Standard abbreviation code (D, L, W, E)
    pub fn code(&self) -> &'static str {
        match self {
            LoadType::Dead => "D",
            LoadType::Live => "L",
            LoadType::Wind => "W",
            LoadType::Seismic => "E",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadType::Dead => "Dead load",
            LoadType::Live => "Imposed (live) load",
            LoadType::Wind => "Wind load",
            LoadType::Seismic => "Earthquake load",
        }
    }

    /// Whether this load type is a gravity load (always acts downward, so a
    /// negative magnitude is a validation error)
    pub fn is_gravity(&self) -> bool {
        matches!(self, LoadType::Dead | LoadType::Live)
    }

    /// Whether this load type can reverse direction (requires +/- variants
    /// in the combinations)
    pub fn is_reversible(&self) -> bool {
        matches!(self, LoadType::Wind | LoadType::Seismic)
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_type_codes() {
        assert_eq!(LoadType::Dead.code(), "D");
        assert_eq!(LoadType::Live.code(), "L");
        assert_eq!(LoadType::Wind.code(), "W");
        assert_eq!(LoadType::Seismic.code(), "E");
    }

    #[test]
    fn test_gravity_classification() {
        assert!(LoadType::Dead.is_gravity());
        assert!(LoadType::Live.is_gravity());
        assert!(!LoadType::Wind.is_gravity());
        assert!(!LoadType::Seismic.is_gravity());
    }

    #[test]
    fn test_reversible_classification() {
        assert!(LoadType::Wind.is_reversible());
        assert!(LoadType::Seismic.is_reversible());
        assert!(!LoadType::Dead.is_reversible());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&LoadType::Wind).unwrap();
        assert_eq!(json, "\"Wind\"");
        let parsed: LoadType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, LoadType::Wind);
    }
}
