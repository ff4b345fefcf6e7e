// src/data.rs  —  Static demo assessment dataset
use crate::recommend::RiskCategory;

/// One metric card on the dashboard overview. `key` is a localization key.
pub struct Metric {
    pub key:   &'static str,
    pub value: u32,
    pub delta: &'static str,
}

pub const OVERVIEW: [Metric; 4] = [
    Metric { key: "total_students", value: 342, delta: "12 new this month" },
    Metric { key: "on_track",       value: 267, delta: "78% performing well" },
    Metric { key: "at_risk",        value: 52,  delta: "15% need support" },
    Metric { key: "intervention",   value: 23,  delta: "7% urgent attention" },
];

pub struct SubjectScore {
    pub subject: &'static str,
    pub average: u32,
}

pub const SUBJECT_SCORES: [SubjectScore; 5] = [
    SubjectScore { subject: "Mathematics",    average: 78 },
    SubjectScore { subject: "Reading",        average: 82 },
    SubjectScore { subject: "Writing",        average: 75 },
    SubjectScore { subject: "Science",        average: 80 },
    SubjectScore { subject: "Social Studies", average: 77 },
];

/// Risk distribution slices shown next to the subject chart.
/// Keys are localization keys; counts match the overview cards.
pub const RISK_DISTRIBUTION: [(&str, u32); 3] = [
    ("on_track",     267),
    ("at_risk",      52),
    ("intervention", 23),
];

pub struct AssessmentRow {
    pub name:    &'static str,
    pub grade:   &'static str,
    pub math:    u32,
    pub reading: u32,
    pub science: u32,
    pub risk:    RiskCategory,
    pub date:    &'static str,
}

pub const RECENT_ASSESSMENTS: [AssessmentRow; 5] = [
    AssessmentRow { name: "Ahmed Hassan",  grade: "Grade 6", math: 85, reading: 78, science: 82, risk: RiskCategory::Low,    date: "2024-06-15" },
    AssessmentRow { name: "Fatima Ali",    grade: "Grade 5", math: 92, reading: 89, science: 94, risk: RiskCategory::Low,    date: "2024-06-14" },
    AssessmentRow { name: "Omar Mohamed",  grade: "Grade 7", math: 78, reading: 82, science: 76, risk: RiskCategory::Medium, date: "2024-06-13" },
    AssessmentRow { name: "Sahra Abdi",    grade: "Grade 6", math: 88, reading: 91, science: 89, risk: RiskCategory::Low,    date: "2024-06-12" },
    AssessmentRow { name: "Yusuf Ibrahim", grade: "Grade 5", math: 75, reading: 73, science: 78, risk: RiskCategory::Medium, date: "2024-06-11" },
];

// ── Tests ─────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_bands_sum_to_total() {
        let total = OVERVIEW[0].value;
        let banded: u32 = RISK_DISTRIBUTION.iter().map(|(_, n)| n).sum();
        assert_eq!(total, banded);
    }

    #[test]
    fn scores_are_percentages() {
        for s in &SUBJECT_SCORES {
            assert!(s.average <= 100);
        }
        for row in &RECENT_ASSESSMENTS {
            assert!(row.math <= 100 && row.reading <= 100 && row.science <= 100);
        }
    }

    #[test]
    fn assessment_dates_are_iso() {
        for row in &RECENT_ASSESSMENTS {
            assert_eq!(row.date.len(), 10);
            assert_eq!(&row.date[4..5], "-");
            assert_eq!(&row.date[7..8], "-");
        }
    }
}
