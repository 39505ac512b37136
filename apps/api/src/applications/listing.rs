//! Dashboard list view: search, status filter and sort over stored applications.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::models::application::{ApplicationRow, ApplicationStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Newest application first.
    #[default]
    DateApplied,
    /// Company A→Z, case-insensitive.
    Company,
}

/// Query string for `GET /api/v1/applications`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    /// One of the four statuses; `All` or empty means no filter.
    pub status: Option<String>,
    #[serde(default)]
    pub sort: SortKey,
}

impl ListQuery {
    pub fn status_filter(&self) -> Result<Option<ApplicationStatus>, String> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") | Some("All") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }
}

/// Keeps rows matching `search` (company, job title or notes, case-insensitive) and
/// `status`, then orders them by `sort`.
pub fn filter_and_sort(
    rows: Vec<ApplicationRow>,
    search: Option<&str>,
    status: Option<ApplicationStatus>,
    sort: SortKey,
) -> Vec<ApplicationRow> {
    let needle = search
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    let mut kept: Vec<ApplicationRow> = rows
        .into_iter()
        .filter(|row| status.map_or(true, |s| row.status == s))
        .filter(|row| needle.as_deref().map_or(true, |n| matches_search(row, n)))
        .collect();

    kept.sort_by(|a, b| match sort {
        SortKey::DateApplied => newest_first(a, b),
        SortKey::Company => a
            .company
            .to_lowercase()
            .cmp(&b.company.to_lowercase())
            .then_with(|| newest_first(a, b)),
    });
    kept
}

fn matches_search(row: &ApplicationRow, needle: &str) -> bool {
    row.company.to_lowercase().contains(needle)
        || row.job_title.to_lowercase().contains(needle)
        || row
            .notes
            .as_deref()
            .is_some_and(|notes| notes.to_lowercase().contains(needle))
}

fn newest_first(a: &ApplicationRow, b: &ApplicationRow) -> Ordering {
    b.date_applied
        .cmp(&a.date_applied)
        .then_with(|| b.created_at.cmp(&a.created_at))
}
