//! # IS Code Clause References
//!
//! Clause identifiers for the checks this engine performs. Every
//! [`ClauseResult`](crate::report::ClauseResult) carries one of these
//! references so reports stay traceable to IS 456:2000 / IS 875.
//!
//! Grouped by the part of the code they come from rather than by member
//! type, since several clauses apply to more than one member.

/// IS 456:2000 clause references
pub mod is456 {
    // Flexure and steel limits
    /// Limiting moment / required tension steel (Annex G, G-1.1)
    pub const FLEXURE: &str = "IS 456 Annex G-1.1";
    /// Minimum tension reinforcement in beams
    pub const MIN_TENSION_STEEL: &str = "IS 456 Cl. 26.5.1.1(a)";
    /// Maximum tension reinforcement in beams
    pub const MAX_TENSION_STEEL: &str = "IS 456 Cl. 26.5.1.1(b)";
    /// Minimum reinforcement in slabs and footings
    pub const MIN_SLAB_STEEL: &str = "IS 456 Cl. 26.5.2.1";
    /// Development length of reinforcement
    pub const DEVELOPMENT_LENGTH: &str = "IS 456 Cl. 26.2.1";

    // Spacing
    /// Maximum spacing of main reinforcement in slabs
    pub const SLAB_BAR_SPACING: &str = "IS 456 Cl. 26.3.3(b)";
    /// Maximum clear distance between bars in beams
    pub const BEAM_BAR_SPACING: &str = "IS 456 Cl. 26.3.2 / Table 15";

    // Shear
    /// Design shear strength of concrete (Table 19)
    pub const SHEAR: &str = "IS 456 Cl. 40.2 / Table 19";
    /// Shear reinforcement contribution
    pub const SHEAR_STIRRUPS: &str = "IS 456 Cl. 40.4";
    /// Punching (two-way) shear in slabs and footings
    pub const PUNCHING_SHEAR: &str = "IS 456 Cl. 31.6.3";

    // Deflection
    /// Span to effective depth ratios
    pub const DEFLECTION: &str = "IS 456 Cl. 23.2.1";

    // Columns
    /// Minimum column dimension
    pub const COLUMN_MIN_DIMENSION: &str = "IS 456 Cl. 25.1.2";
    /// Short/slender column classification
    pub const SLENDERNESS: &str = "IS 456 Cl. 25.1.1";
    /// Maximum slenderness limit
    pub const SLENDERNESS_LIMIT: &str = "IS 456 Cl. 25.3.1";
    /// Minimum eccentricity
    pub const MIN_ECCENTRICITY: &str = "IS 456 Cl. 25.4";
    /// Axial load capacity of short columns
    pub const AXIAL_CAPACITY: &str = "IS 456 Cl. 39.3";
    /// Longitudinal reinforcement limits in columns
    pub const COLUMN_STEEL: &str = "IS 456 Cl. 26.5.3.1";
    /// Transverse (tie) reinforcement in columns
    pub const COLUMN_TIES: &str = "IS 456 Cl. 26.5.3.2";

    // Footings
    /// Minimum footing thickness at edge
    pub const FOOTING_THICKNESS: &str = "IS 456 Cl. 34.1.2";
    /// Bending moment at the face of the column
    pub const FOOTING_FLEXURE: &str = "IS 456 Cl. 34.2.3";
}

/// IS 875 load-code references
pub mod is875 {
    /// Unit weights of materials (dead loads)
    pub const DEAD_LOADS: &str = "IS 875 Part 1";
    /// Imposed (live) loads by occupancy
    pub const LIVE_LOADS: &str = "IS 875 Part 2";
    /// Wind loads
    pub const WIND_LOADS: &str = "IS 875 Part 3";
    /// Load combinations (with IS 456 Table 18)
    pub const COMBINATIONS: &str = "IS 875 Part 5 / IS 456 Table 18";
}

/// Bearing capacity is a geotechnical input, not an IS 456 table value
pub const BEARING_PRESSURE: &str = "SBC (geotechnical report)";
