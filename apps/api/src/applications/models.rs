use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::application::ApplicationStatus;

/// Create/update payload as submitted by the form.
///
/// Optional fields accept `null`, a missing key, or an empty string (the form
/// submits `""` for untouched inputs).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationInput {
    pub company: String,
    pub job_title: String,
    pub date_applied: NaiveDate,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub follow_up_date: Option<NaiveDate>,
    #[serde(default)]
    pub job_url: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
}

/// A validated, normalised application ready to be written to the store.
/// Text is trimmed and blank optionals are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub company: String,
    pub job_title: String,
    pub date_applied: NaiveDate,
    pub status: ApplicationStatus,
    pub notes: Option<String>,
    pub follow_up_date: Option<NaiveDate>,
    pub job_url: Option<String>,
    pub job_description: Option<String>,
    pub location: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
}

/// Application counts per status, as shown on the dashboard tiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusStats {
    pub total: i64,
    pub applied: i64,
    pub interview: i64,
    pub rejected: i64,
    pub success: i64,
}

impl StatusStats {
    pub fn from_counts(counts: &[(ApplicationStatus, i64)]) -> Self {
        let mut stats = StatusStats::default();
        for &(status, count) in counts {
            let slot = match status {
                ApplicationStatus::Applied => &mut stats.applied,
                ApplicationStatus::Interview => &mut stats.interview,
                ApplicationStatus::Rejected => &mut stats.rejected,
                ApplicationStatus::Success => &mut stats.success,
            };
            *slot += count;
            stats.total += count;
        }
        stats
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
