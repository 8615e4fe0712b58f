//! Map raw masterlist rows onto `ProjectRecord`s
//!
//! Pure: no I/O, and the import timestamp is passed in. Invalid values are
//! coerced to their defaults, with a warning that keeps "present but
//! invalid" apart from "missing".

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use super::record::{ProjectRecord, ProjectStatus};
use crate::masterlist::RawProjectRow;

static NAME_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,\n]").expect("name separator pattern is valid"));

/// A cell value that was present but could not be used as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeWarning {
    /// Status outside the allowed set; stored as `Idea`
    UnknownStatus(String),
    /// PDSA cycle not made only of digits (or too large); stored as 0
    InvalidPdsaCycle(String),
}

impl fmt::Display for NormalizeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeWarning::UnknownStatus(value) => {
                write!(f, "unknown status {:?}, using {}", value, ProjectStatus::default())
            }
            NormalizeWarning::InvalidPdsaCycle(value) => {
                write!(f, "invalid PDSA cycle {:?}, using 0", value)
            }
        }
    }
}

/// A normalized record together with any coercions applied to it
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub record: ProjectRecord,
    pub warnings: Vec<NormalizeWarning>,
}

pub fn normalize_row(row: &RawProjectRow, imported_at: DateTime<Utc>) -> Normalized {
    let mut warnings = Vec::new();

    let record = ProjectRecord {
        status: coerce_status(row.status.as_deref(), &mut warnings),
        title: row.title.clone(),
        category: optional_text(row.category.as_deref()),
        subcategory: optional_text(row.subcategory.as_deref()),
        primary_outcome: optional_text(row.primary_outcome.as_deref()),
        pdsa_cycle: coerce_pdsa_cycle(row.pdsa_cycle.as_deref(), &mut warnings),
        proponents: parse_name_list(row.proponents.as_deref()),
        faculty: optional_text(row.faculty.as_deref()),
        updates_and_barriers: optional_text(row.updates_and_barriers.as_deref()),
        last_updated_date: imported_at,
    };

    Normalized { record, warnings }
}

/// Exact match against the allowed statuses, `Idea` otherwise
pub fn coerce_status(raw: Option<&str>, warnings: &mut Vec<NormalizeWarning>) -> ProjectStatus {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return ProjectStatus::default();
    };

    ProjectStatus::from_label(raw).unwrap_or_else(|| {
        warnings.push(NormalizeWarning::UnknownStatus(raw.to_string()));
        ProjectStatus::default()
    })
}

/// Digits-only values are taken as the cycle count, anything else is 0
pub fn coerce_pdsa_cycle(raw: Option<&str>, warnings: &mut Vec<NormalizeWarning>) -> u32 {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return 0;
    };

    let parsed = if raw.bytes().all(|b| b.is_ascii_digit()) {
        raw.parse::<u32>().ok()
    } else {
        None
    };

    parsed.unwrap_or_else(|| {
        warnings.push(NormalizeWarning::InvalidPdsaCycle(raw.to_string()));
        0
    })
}

/// Split a free-text name cell on commas and newlines
///
/// Fragments are trimmed, empty ones dropped, order and duplicates kept.
pub fn parse_name_list(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    NAME_SEPARATOR
        .split(raw)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn optional_text(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.trim().is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn imported_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 20, 9, 0, 0).unwrap()
    }

    fn pdsa(raw: Option<&str>) -> (u32, Vec<NormalizeWarning>) {
        let mut warnings = Vec::new();
        let value = coerce_pdsa_cycle(raw, &mut warnings);
        (value, warnings)
    }

    fn status(raw: Option<&str>) -> (ProjectStatus, Vec<NormalizeWarning>) {
        let mut warnings = Vec::new();
        let value = coerce_status(raw, &mut warnings);
        (value, warnings)
    }

    #[test]
    fn test_parse_name_list() {
        assert_eq!(
            parse_name_list(Some("Alice, Bob\nCarol")),
            vec!["Alice", "Bob", "Carol"]
        );
        assert_eq!(
            parse_name_list(Some("  Dr. Cruz ,\n\nDr. Cruz,Dr. Lim  ")),
            vec!["Dr. Cruz", "Dr. Cruz", "Dr. Lim"]
        );
        assert!(parse_name_list(Some(" , ,\n  ,")).is_empty());
        assert!(parse_name_list(Some("")).is_empty());
        assert!(parse_name_list(None).is_empty());
    }

    #[test]
    fn test_status_coercion() {
        assert_eq!(status(Some("Pre-Intervention")), (ProjectStatus::PreIntervention, vec![]));
        assert_eq!(status(None), (ProjectStatus::Idea, vec![]));
        assert_eq!(status(Some("")), (ProjectStatus::Idea, vec![]));
        assert_eq!(
            status(Some("Completed")),
            (
                ProjectStatus::Idea,
                vec![NormalizeWarning::UnknownStatus("Completed".into())]
            )
        );
        // Case and spacing matter
        assert_eq!(status(Some("pre-intervention")).0, ProjectStatus::Idea);
        assert_eq!(status(Some("Sustain the Gains ")).0, ProjectStatus::Idea);
    }

    #[test]
    fn test_pdsa_cycle_coercion() {
        assert_eq!(pdsa(Some("7")), (7, vec![]));
        assert_eq!(pdsa(Some("0")), (0, vec![]));
        assert_eq!(pdsa(None), (0, vec![]));
        assert_eq!(pdsa(Some("")), (0, vec![]));

        for invalid in ["3.5", "-1", "+2", "two", " 4", "99999999999"] {
            assert_eq!(
                pdsa(Some(invalid)),
                (0, vec![NormalizeWarning::InvalidPdsaCycle(invalid.into())]),
                "input {:?}",
                invalid
            );
        }
    }

    #[test]
    fn test_normalize_row() {
        let row = RawProjectRow {
            sheet_row: 6,
            status: Some("On hold".into()),
            title: "Sepsis bundle".into(),
            category: Some("Clinical".into()),
            subcategory: Some("   ".into()),
            primary_outcome: None,
            pdsa_cycle: Some("2.5".into()),
            proponents: Some("Dr. Santos\nNurse Lee".into()),
            faculty: Some("Dr. Tan".into()),
            updates_and_barriers: Some("".into()),
        };

        let normalized = normalize_row(&row, imported_at());
        let record = normalized.record;

        assert_eq!(record.status, ProjectStatus::Idea);
        assert_eq!(record.title, "Sepsis bundle");
        assert_eq!(record.category.as_deref(), Some("Clinical"));
        assert_eq!(record.subcategory, None);
        assert_eq!(record.primary_outcome, None);
        assert_eq!(record.pdsa_cycle, 0);
        assert_eq!(record.proponents, vec!["Dr. Santos", "Nurse Lee"]);
        assert_eq!(record.faculty.as_deref(), Some("Dr. Tan"));
        assert_eq!(record.updates_and_barriers, None);
        assert_eq!(record.last_updated_date, imported_at());

        assert_eq!(
            normalized.warnings,
            vec![
                NormalizeWarning::UnknownStatus("On hold".into()),
                NormalizeWarning::InvalidPdsaCycle("2.5".into()),
            ]
        );
    }

    #[test]
    fn test_missing_values_produce_no_warnings() {
        let row = RawProjectRow {
            sheet_row: 7,
            title: "Bare".into(),
            ..Default::default()
        };

        let normalized = normalize_row(&row, imported_at());
        assert_eq!(normalized.record.status, ProjectStatus::Idea);
        assert_eq!(normalized.record.pdsa_cycle, 0);
        assert!(normalized.record.proponents.is_empty());
        assert!(normalized.warnings.is_empty());
    }
}
