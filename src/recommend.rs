// src/recommend.rs  —  Risk categories and static guidance lookup
use serde::{Deserialize, Serialize};

/// Severity band assigned to a student by the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory { Low, Medium, High }

impl RiskCategory {
    pub const ALL: [RiskCategory; 3] = [RiskCategory::Low, RiskCategory::Medium, RiskCategory::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low    => "Low",
            RiskCategory::Medium => "Medium",
            RiskCategory::High   => "High",
        }
    }

    pub fn parse(label: &str) -> Option<RiskCategory> {
        match label {
            "Low"    => Some(RiskCategory::Low),
            "Medium" => Some(RiskCategory::Medium),
            "High"   => Some(RiskCategory::High),
            _        => None,
        }
    }
}

const LOW: &[&str] = &[
    "Continue current learning approach",
    "Provide enrichment activities",
    "Monitor progress regularly",
    "Encourage independent learning",
    "Maintain engagement",
];

const MEDIUM: &[&str] = &[
    "Additional support recommended",
    "Small group instruction",
    "Regular progress monitoring",
    "Parent-teacher collaboration",
    "Targeted skill building",
    "Use visual learning aids",
];

const HIGH: &[&str] = &[
    "Immediate intervention required",
    "One-on-one tutoring recommended",
    "Consult with learning specialist",
    "Implement individualized learning plan",
    "Regular progress monitoring",
    "Family support engagement",
];

/// Fixed guidance list for a category, ordered by intervention intensity.
pub fn recommendations(category: RiskCategory) -> &'static [&'static str] {
    match category {
        RiskCategory::Low    => LOW,
        RiskCategory::Medium => MEDIUM,
        RiskCategory::High   => HIGH,
    }
}

/// Label-keyed lookup. Labels outside the defined set yield an empty list,
/// never an error.
pub fn recommendations_for(label: &str) -> &'static [&'static str] {
    RiskCategory::parse(label).map(recommendations).unwrap_or(&[])
}

// ── Tests ─────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_guidance() {
        for cat in RiskCategory::ALL {
            assert!(!recommendations(cat).is_empty(), "{cat:?} has no guidance");
        }
    }

    #[test]
    fn intensity_grows_with_risk() {
        assert!(recommendations(RiskCategory::High).len() >= recommendations(RiskCategory::Medium).len());
        assert!(recommendations(RiskCategory::Medium).len() >= recommendations(RiskCategory::Low).len());
    }

    #[test]
    fn unknown_label_yields_empty_list() {
        assert!(recommendations_for("Unknown").is_empty());
        assert!(recommendations_for("").is_empty());
        assert!(recommendations_for("low").is_empty()); // labels are case-sensitive
    }

    #[test]
    fn label_round_trip() {
        for cat in RiskCategory::ALL {
            assert_eq!(RiskCategory::parse(cat.as_str()), Some(cat));
            assert_eq!(recommendations_for(cat.as_str()), recommendations(cat));
        }
    }

    #[test]
    fn low_guidance_starts_with_current_approach() {
        assert_eq!(recommendations(RiskCategory::Low)[0], "Continue current learning approach");
    }
}
