//! # Compliance Reports
//!
//! The output side of the engine: one [`ClauseResult`] per code clause
//! evaluated, collected into an immutable [`ComplianceReport`] per member.
//!
//! A clause that fails is an expected, reportable outcome - never an error.
//! The report's overall status is the logical AND of every clause result
//! and is fixed at construction time.
//!
//! ## Comparison tolerance
//!
//! All clause comparisons share [`LIMIT_TOLERANCE`]: a computed value within
//! 0.1 % beyond its limit counts as *at* the limit and passes. This makes the
//! boundary inclusive and keeps floating-point noise from flipping a check
//! that is exactly at the code limit.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Relative tolerance applied to every clause comparison.
///
/// Shared by all checkers; do not introduce per-checker tolerances.
pub const LIMIT_TOLERANCE: f64 = 0.001;

/// The member kinds this engine can check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberType {
    Beam,
    Column,
    Slab,
    Footing,
}

impl MemberType {
    /// Lower-case code string used in reports and APIs
    pub fn code(&self) -> &'static str {
        match self {
            MemberType::Beam => "beam",
            MemberType::Column => "column",
            MemberType::Slab => "slab",
            MemberType::Footing => "footing",
        }
    }
}

impl std::fmt::Display for MemberType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Outcome of evaluating one code clause
///
/// Produced by the checkers, never mutated. `margin` is signed with positive
/// on the safe side, so a failed clause always has a negative margin beyond
/// tolerance.
///
/// ## JSON Example
///
/// ```json
/// {
///   "clause": "IS 456 Cl. 23.2.1",
///   "description": "Deflection control (span/effective depth)",
///   "computed": 9.59,
///   "limit": 20.0,
///   "passed": true,
///   "margin": 10.41
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseResult {
    /// Code clause reference (see [`crate::clauses`])
    pub clause: String,
    /// What was checked, in report-ready words
    pub description: String,
    /// Value computed from the inputs
    pub computed: f64,
    /// Code limit it is compared against
    pub limit: f64,
    /// Whether the clause is satisfied (inclusive of [`LIMIT_TOLERANCE`])
    pub passed: bool,
    /// Signed margin; positive means on the safe side of the limit
    pub margin: f64,
}

impl ClauseResult {
    /// Clause satisfied when `computed <= limit` (demand vs capacity).
    pub fn at_most(
        clause: impl Into<String>,
        description: impl Into<String>,
        computed: f64,
        limit: f64,
    ) -> Self {
        let passed = computed <= limit + limit.abs() * LIMIT_TOLERANCE;
        ClauseResult {
            clause: clause.into(),
            description: description.into(),
            computed,
            limit,
            passed,
            margin: limit - computed,
        }
    }

    /// Clause satisfied when `computed >= limit` (provision vs requirement).
    pub fn at_least(
        clause: impl Into<String>,
        description: impl Into<String>,
        computed: f64,
        limit: f64,
    ) -> Self {
        let passed = computed >= limit - limit.abs() * LIMIT_TOLERANCE;
        ClauseResult {
            clause: clause.into(),
            description: description.into(),
            computed,
            limit,
            passed,
            margin: computed - limit,
        }
    }

    /// Utilization ratio computed/limit (capacity checks); infinite when the
    /// limit is zero and the computed value is not.
    pub fn utilization(&self) -> f64 {
        if self.limit == 0.0 {
            if self.computed == 0.0 {
                0.0
            } else {
                f64::INFINITY
            }
        } else {
            self.computed / self.limit
        }
    }
}

/// Aggregated compliance verdict for one member
///
/// The terminal artifact of a check: self-contained, immutable, and
/// JSON-serializable for the report renderer. `overall` is fixed at
/// construction as the AND of all clause results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Generated identifier for this report
    pub member_id: Uuid,
    /// User-provided member label (e.g. "B-1")
    pub label: String,
    /// Kind of member checked
    pub member_type: MemberType,
    /// Governing load combination used for the strength checks
    pub governing_combination: String,
    /// Key design quantities for the report body, in insertion-stable order
    pub summary: BTreeMap<String, f64>,
    /// Ordered clause results (order is presentation, not precedence)
    pub clauses: Vec<ClauseResult>,
    /// Overall verdict: true iff every clause passed
    pub overall: bool,
    /// When the check ran
    pub checked_at: DateTime<Utc>,
}

impl ComplianceReport {
    /// Build a report from clause results, deriving the overall status.
    pub fn new(
        label: impl Into<String>,
        member_type: MemberType,
        governing_combination: impl Into<String>,
        summary: BTreeMap<String, f64>,
        clauses: Vec<ClauseResult>,
    ) -> Self {
        let overall = clauses.iter().all(|c| c.passed);
        ComplianceReport {
            member_id: Uuid::new_v4(),
            label: label.into(),
            member_type,
            governing_combination: governing_combination.into(),
            summary,
            clauses,
            overall,
            checked_at: Utc::now(),
        }
    }

    /// Whether every clause passed
    pub fn passes(&self) -> bool {
        self.overall
    }

    /// "PASS" / "FAIL" for display
    pub fn status(&self) -> &'static str {
        if self.overall {
            "PASS"
        } else {
            "FAIL"
        }
    }

    /// The clause results that failed, in report order
    pub fn failed_clauses(&self) -> impl Iterator<Item = &ClauseResult> {
        self.clauses.iter().filter(|c| !c.passed)
    }

    /// The clause with the smallest margin - what governs the design
    pub fn governing_clause(&self) -> Option<&ClauseResult> {
        self.clauses.iter().min_by(|a, b| {
            a.margin
                .partial_cmp(&b.margin)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_most_pass_and_fail() {
        let ok = ClauseResult::at_most("C", "demand", 0.5, 1.0);
        assert!(ok.passed);
        assert!((ok.margin - 0.5).abs() < 1e-12);

        let bad = ClauseResult::at_most("C", "demand", 1.5, 1.0);
        assert!(!bad.passed);
        assert!(bad.margin < 0.0);
    }

    #[test]
    fn test_at_least_pass_and_fail() {
        let ok = ClauseResult::at_least("C", "steel", 600.0, 400.0);
        assert!(ok.passed);

        let bad = ClauseResult::at_least("C", "steel", 300.0, 400.0);
        assert!(!bad.passed);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        // Exactly at the limit passes in both directions
        assert!(ClauseResult::at_most("C", "x", 1.0, 1.0).passed);
        assert!(ClauseResult::at_least("C", "x", 1.0, 1.0).passed);
    }

    #[test]
    fn test_tolerance_absorbs_float_noise() {
        // 0.05 % beyond the limit is still at-limit
        assert!(ClauseResult::at_most("C", "x", 1.0005, 1.0).passed);
        assert!(ClauseResult::at_least("C", "x", 0.9995, 1.0).passed);
        // 0.5 % beyond is a real failure
        assert!(!ClauseResult::at_most("C", "x", 1.005, 1.0).passed);
        assert!(!ClauseResult::at_least("C", "x", 0.995, 1.0).passed);
    }

    #[test]
    fn test_utilization() {
        let r = ClauseResult::at_most("C", "x", 0.5, 2.0);
        assert!((r.utilization() - 0.25).abs() < 1e-12);

        let zero_limit = ClauseResult::at_most("C", "x", 0.0, 0.0);
        assert_eq!(zero_limit.utilization(), 0.0);
    }

    #[test]
    fn test_report_overall_is_and_of_clauses() {
        let clauses = vec![
            ClauseResult::at_most("A", "a", 0.5, 1.0),
            ClauseResult::at_most("B", "b", 2.0, 1.0),
        ];
        let report = ComplianceReport::new(
            "B-1",
            MemberType::Beam,
            "LC-1: 1.5(D + L)",
            BTreeMap::new(),
            clauses,
        );
        assert!(!report.passes());
        assert_eq!(report.status(), "FAIL");
        assert_eq!(report.failed_clauses().count(), 1);
    }

    #[test]
    fn test_all_passing_report() {
        let clauses = vec![
            ClauseResult::at_most("A", "a", 0.5, 1.0),
            ClauseResult::at_least("B", "b", 3.0, 1.0),
        ];
        let report = ComplianceReport::new(
            "S-1",
            MemberType::Slab,
            "LC-1: 1.5(D + L)",
            BTreeMap::new(),
            clauses,
        );
        assert!(report.passes());
        assert_eq!(report.status(), "PASS");
    }

    #[test]
    fn test_governing_clause_is_smallest_margin() {
        let clauses = vec![
            ClauseResult::at_most("A", "a", 0.2, 1.0), // margin 0.8
            ClauseResult::at_most("B", "b", 0.9, 1.0), // margin 0.1
        ];
        let report = ComplianceReport::new(
            "C-1",
            MemberType::Column,
            "LC-1",
            BTreeMap::new(),
            clauses,
        );
        assert_eq!(report.governing_clause().unwrap().clause, "B");
    }

    #[test]
    fn test_report_serialization_roundtrip() {
        let clauses = vec![ClauseResult::at_most("A", "a", 0.5, 1.0)];
        let report = ComplianceReport::new(
            "F-1",
            MemberType::Footing,
            "LC-1",
            BTreeMap::new(),
            clauses,
        );
        let json = serde_json::to_string_pretty(&report).unwrap();
        let parsed: ComplianceReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.member_id, report.member_id);
        assert_eq!(parsed.overall, report.overall);
        assert_eq!(parsed.clauses, report.clauses);
    }
}
