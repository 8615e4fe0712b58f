//! Core record types sent to the `projects` table

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Lifecycle stage of a QI project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ProjectStatus {
    #[default]
    Idea,
    #[serde(rename = "Pre-Intervention")]
    PreIntervention,
    #[serde(rename = "Intervention Ongoing")]
    InterventionOngoing,
    #[serde(rename = "Sustain the Gains")]
    SustainTheGains,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Idea,
        ProjectStatus::PreIntervention,
        ProjectStatus::InterventionOngoing,
        ProjectStatus::SustainTheGains,
    ];

    /// Label as written in the masterlist and stored in the table
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Idea => "Idea",
            ProjectStatus::PreIntervention => "Pre-Intervention",
            ProjectStatus::InterventionOngoing => "Intervention Ongoing",
            ProjectStatus::SustainTheGains => "Sustain the Gains",
        }
    }

    /// Exact, case-sensitive match against the allowed labels
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == label)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the `projects` table, built from one titled masterlist row
///
/// Optional fields serialize as JSON `null` when absent, never as `""`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRecord {
    pub status: ProjectStatus,
    pub title: String,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub primary_outcome: Option<String>,
    pub pdsa_cycle: u32,
    pub proponents: Vec<String>,
    pub faculty: Option<String>,
    pub updates_and_barriers: Option<String>,
    /// Import time, not a spreadsheet value
    pub last_updated_date: DateTime<Utc>,
}
