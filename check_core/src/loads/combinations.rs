//! IS 456 Table 18 / IS 875 load combinations
//!
//! Partial safety factors for loads in limit state design. Wind and seismic
//! loads are entered as positive magnitudes; the combination sets include
//! both +W/-W (and +E/-E) variants so reversal effects are never missed.
//!
//! The governing combination is always selected by evaluating every
//! combination in the applicable set. Because the members checked by this
//! engine carry a single scalar load intensity, one governing magnitude
//! serves bending, shear and axial effects alike (they all scale linearly
//! with it).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::load_types::LoadType;
use super::LoadCase;
use crate::errors::{CheckError, CheckResult};

/// A load combination with factors for each load type
///
/// # Example
/// ```
/// use check_core::loads::{LoadCombination, LoadCase, LoadType};
///
/// let combo = LoadCombination::new("LC-1", "1.5(D + L)")
///     .with_factor(LoadType::Dead, 1.5)
///     .with_factor(LoadType::Live, 1.5);
///
/// let case = LoadCase::new("Floor")
///     .with_load(LoadType::Dead, 10.0)
///     .with_load(LoadType::Live, 8.0);
///
/// assert_eq!(combo.apply(&case), 27.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Combination identifier (e.g. "LC-1", "LC-3a'")
    pub name: String,

    /// Human-readable equation for display (e.g. "1.5(D + L)")
    pub equation: String,

    /// Load factors keyed by load type
    pub factors: HashMap<LoadType, f64>,
}

impl LoadCombination {
    /// Create a new load combination
    pub fn new(name: impl Into<String>, equation: impl Into<String>) -> Self {
        LoadCombination {
            name: name.into(),
            equation: equation.into(),
            factors: HashMap::new(),
        }
    }

    /// Add a load factor (builder pattern)
    pub fn with_factor(mut self, load_type: LoadType, factor: f64) -> Self {
        self.factors.insert(load_type, factor);
        self
    }

    /// Apply this combination to a LoadCase, returning the factored total.
    ///
    /// Load types not in the combination are treated as factor 0; load
    /// types in the combination but not in the case contribute 0.
    pub fn apply(&self, case: &LoadCase) -> f64 {
        self.factors
            .iter()
            .map(|(load_type, factor)| factor * case.get(*load_type))
            .sum()
    }

    /// Get the factor for a specific load type (0.0 if not in combination)
    pub fn get_factor(&self, load_type: LoadType) -> f64 {
        self.factors.get(&load_type).copied().unwrap_or(0.0)
    }
}

/// Which IS 875 factor sets apply to a check
///
/// Each rule names the load components it requires; [`combine`] fails with
/// a validation error when a required component is absent from the case,
/// rather than silently evaluating a meaningless combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CombinationRule {
    /// Gravity loads only: 1.5(D + L)
    #[default]
    Gravity,
    /// Gravity plus wind sets: adds 1.2(D + L ± W), 1.5(D ± W), 0.9D ± 1.5W
    GravityWind,
    /// Gravity plus seismic sets: adds 1.2(D + L ± E), 1.5(D ± E), 0.9D ± 1.5E
    GravitySeismic,
    /// Every combination set; only dead load is mandatory
    Envelope,
}

impl CombinationRule {
    /// Short code for error messages and reports
    pub fn code(&self) -> &'static str {
        match self {
            CombinationRule::Gravity => "Gravity",
            CombinationRule::GravityWind => "GravityWind",
            CombinationRule::GravitySeismic => "GravitySeismic",
            CombinationRule::Envelope => "Envelope",
        }
    }

    /// Load components that must be present in the case for this rule
    pub fn required_components(&self) -> &'static [LoadType] {
        match self {
            CombinationRule::Gravity => &[LoadType::Dead],
            CombinationRule::GravityWind => &[LoadType::Dead, LoadType::Wind],
            CombinationRule::GravitySeismic => &[LoadType::Dead, LoadType::Seismic],
            CombinationRule::Envelope => &[LoadType::Dead],
        }
    }

    /// The combinations this rule evaluates
    pub fn combinations(&self) -> Vec<LoadCombination> {
        match self {
            CombinationRule::Gravity => gravity_combinations(),
            CombinationRule::GravityWind => {
                let mut all = gravity_combinations();
                all.extend(lateral_combinations(LoadType::Wind));
                all
            }
            CombinationRule::GravitySeismic => {
                let mut all = gravity_combinations();
                all.extend(lateral_combinations(LoadType::Seismic));
                all
            }
            CombinationRule::Envelope => {
                let mut all = gravity_combinations();
                all.extend(lateral_combinations(LoadType::Wind));
                all.extend(lateral_combinations(LoadType::Seismic));
                all
            }
        }
    }
}

impl std::fmt::Display for CombinationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Gravity-only combinations (IS 456 Table 18, row 1)
pub fn gravity_combinations() -> Vec<LoadCombination> {
    vec![LoadCombination::new("LC-1", "1.5(D + L)")
        .with_factor(LoadType::Dead, 1.5)
        .with_factor(LoadType::Live, 1.5)]
}

/// Lateral-load combinations (IS 456 Table 18, rows 2-4) for wind or seismic
///
/// Includes the sign-reversal variants (primed names) so suction/uplift and
/// load reversal govern where they should.
fn lateral_combinations(lateral: LoadType) -> Vec<LoadCombination> {
    let tag = lateral.code();
    let suffix = match lateral {
        LoadType::Wind => "a",
        LoadType::Seismic => "b",
        _ => "x",
    };
    vec![
        LoadCombination::new(
            format!("LC-2{suffix}"),
            format!("1.2(D + L + {tag})"),
        )
        .with_factor(LoadType::Dead, 1.2)
        .with_factor(LoadType::Live, 1.2)
        .with_factor(lateral, 1.2),
        LoadCombination::new(
            format!("LC-2{suffix}'"),
            format!("1.2(D + L - {tag})"),
        )
        .with_factor(LoadType::Dead, 1.2)
        .with_factor(LoadType::Live, 1.2)
        .with_factor(lateral, -1.2),
        LoadCombination::new(format!("LC-3{suffix}"), format!("1.5(D + {tag})"))
            .with_factor(LoadType::Dead, 1.5)
            .with_factor(lateral, 1.5),
        LoadCombination::new(format!("LC-3{suffix}'"), format!("1.5(D - {tag})"))
            .with_factor(LoadType::Dead, 1.5)
            .with_factor(lateral, -1.5),
        LoadCombination::new(format!("LC-4{suffix}"), format!("0.9D + 1.5{tag}"))
            .with_factor(LoadType::Dead, 0.9)
            .with_factor(lateral, 1.5),
        LoadCombination::new(format!("LC-4{suffix}'"), format!("0.9D - 1.5{tag}"))
            .with_factor(LoadType::Dead, 0.9)
            .with_factor(lateral, -1.5),
    ]
}

/// The factored design load for a member, with the combinations that govern
///
/// `magnitude` is the maximum factored intensity (governs strength design);
/// `minimum` is the smallest (negative values indicate net reversal/uplift,
/// which governs anchorage).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignLoad {
    /// Governing (maximum) factored load
    pub magnitude: f64,
    /// Name and equation of the governing combination
    pub combination: String,
    /// Minimum factored load across the set
    pub minimum: f64,
    /// Name of the minimum combination
    pub minimum_combination: String,
    /// The rule the combinations were drawn from
    pub rule: CombinationRule,
}

/// Combine a load case under the selected rule and return the governing
/// design load.
///
/// Evaluates every combination in the rule's set and keeps both the maximum
/// and minimum results - never an arbitrary pick.
///
/// # Errors
///
/// Returns a validation error when the case fails [`LoadCase::validate`] or
/// lacks a component the rule requires (e.g. a wind rule with no wind load).
///
/// # Example
/// ```
/// use check_core::loads::{combine, CombinationRule, LoadCase, LoadType};
///
/// let case = LoadCase::new("Floor beam")
///     .with_load(LoadType::Dead, 10.0)
///     .with_load(LoadType::Live, 8.0);
///
/// let design = combine(&case, CombinationRule::Gravity).unwrap();
/// assert_eq!(design.magnitude, 27.0); // 1.5(10 + 8)
/// ```
pub fn combine(case: &LoadCase, rule: CombinationRule) -> CheckResult<DesignLoad> {
    case.validate()?;
    for required in rule.required_components() {
        if !case.has(*required) {
            return Err(CheckError::missing_load(required.description(), rule.code()));
        }
    }

    let combinations = rule.combinations();
    let mut max_load = f64::MIN;
    let mut max_combo = String::new();
    let mut min_load = f64::MAX;
    let mut min_combo = String::new();

    for combo in &combinations {
        let load = combo.apply(case);
        if load > max_load {
            max_load = load;
            max_combo = format!("{}: {}", combo.name, combo.equation);
        }
        if load < min_load {
            min_load = load;
            min_combo = format!("{}: {}", combo.name, combo.equation);
        }
    }

    Ok(DesignLoad {
        magnitude: max_load,
        combination: max_combo,
        minimum: min_load,
        minimum_combination: min_combo,
        rule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_combination_factors() {
        let combos = gravity_combinations();
        assert_eq!(combos.len(), 1);
        assert_eq!(combos[0].get_factor(LoadType::Dead), 1.5);
        assert_eq!(combos[0].get_factor(LoadType::Live), 1.5);
        assert_eq!(combos[0].get_factor(LoadType::Wind), 0.0);
    }

    #[test]
    fn test_wind_rule_combination_count() {
        // 1 gravity + 6 wind variants
        assert_eq!(CombinationRule::GravityWind.combinations().len(), 7);
        // 1 gravity + 6 wind + 6 seismic
        assert_eq!(CombinationRule::Envelope.combinations().len(), 13);
    }

    #[test]
    fn test_combine_gravity() {
        let case = LoadCase::new("Floor")
            .with_load(LoadType::Dead, 10.0)
            .with_load(LoadType::Live, 8.0);

        let design = combine(&case, CombinationRule::Gravity).unwrap();
        assert!((design.magnitude - 27.0).abs() < 1e-9);
        assert!(design.combination.starts_with("LC-1"));
    }

    #[test]
    fn test_combine_governing_with_wind() {
        let case = LoadCase::new("Roof")
            .with_load(LoadType::Dead, 10.0)
            .with_load(LoadType::Live, 4.0)
            .with_load(LoadType::Wind, 12.0);

        let design = combine(&case, CombinationRule::GravityWind).unwrap();
        // 1.5(D + W) = 1.5 * 22 = 33 governs over 1.2(D+L+W) = 31.2
        // and over 1.5(D+L) = 21
        assert!((design.magnitude - 33.0).abs() < 1e-9);
        assert!(design.combination.starts_with("LC-3a"));
    }

    #[test]
    fn test_combine_minimum_reversal() {
        // Light roof with strong wind: 0.9D - 1.5W goes negative
        let case = LoadCase::new("Light roof")
            .with_load(LoadType::Dead, 4.0)
            .with_load(LoadType::Wind, 6.0);

        let design = combine(&case, CombinationRule::GravityWind).unwrap();
        // 0.9*4 - 1.5*6 = -5.4
        assert!((design.minimum - (-5.4)).abs() < 1e-9);
        assert!(design.minimum_combination.starts_with("LC-4a'"));
    }

    #[test]
    fn test_missing_wind_component_errors() {
        let case = LoadCase::new("No wind")
            .with_load(LoadType::Dead, 10.0)
            .with_load(LoadType::Live, 8.0);

        let err = combine(&case, CombinationRule::GravityWind).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_LOAD");
    }

    #[test]
    fn test_missing_dead_component_errors() {
        let case = LoadCase::new("Live only").with_load(LoadType::Live, 8.0);
        assert!(combine(&case, CombinationRule::Gravity).is_err());
    }

    #[test]
    fn test_envelope_requires_only_dead() {
        let case = LoadCase::new("Dead only").with_load(LoadType::Dead, 10.0);
        let design = combine(&case, CombinationRule::Envelope).unwrap();
        // 1.5D governs when nothing else is present
        assert!((design.magnitude - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_combination_serialization() {
        let combo = LoadCombination::new("LC-1", "1.5(D + L)")
            .with_factor(LoadType::Dead, 1.5)
            .with_factor(LoadType::Live, 1.5);

        let json = serde_json::to_string(&combo).unwrap();
        let parsed: LoadCombination = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, "LC-1");
        assert_eq!(parsed.get_factor(LoadType::Dead), 1.5);
    }

    #[test]
    fn test_design_load_monotonic_in_load() {
        // Increasing a component can only increase the governing magnitude
        let base = LoadCase::new("Base")
            .with_load(LoadType::Dead, 10.0)
            .with_load(LoadType::Live, 8.0);
        let heavier = LoadCase::new("Heavier")
            .with_load(LoadType::Dead, 10.0)
            .with_load(LoadType::Live, 12.0);

        let a = combine(&base, CombinationRule::Gravity).unwrap();
        let b = combine(&heavier, CombinationRule::Gravity).unwrap();
        assert!(b.magnitude >= a.magnitude);
    }
}
