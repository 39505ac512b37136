//! CSV export of all applications.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::models::application::ApplicationRow;

pub const EXPORT_FILENAME: &str = "trackr-applications.csv";

const HEADERS: [&str; 13] = [
    "ID",
    "Company",
    "Job Title",
    "Date Applied",
    "Status",
    "Notes",
    "Follow Up Date",
    "Job Link",
    "Job Description",
    "Location",
    "Contact Name",
    "Contact Email",
    "Created At",
];

/// Renders rows as RFC 4180 CSV with a header line. Dates are `YYYY-MM-DD`;
/// missing optionals are empty fields.
pub fn applications_to_csv(rows: &[ApplicationRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADERS)?;

    for row in rows {
        writer.write_record([
            row.id.to_string(),
            row.company.clone(),
            row.job_title.clone(),
            format_date(row.date_applied),
            row.status.to_string(),
            row.notes.clone().unwrap_or_default(),
            row.follow_up_date.map(format_date).unwrap_or_default(),
            row.job_url.clone().unwrap_or_default(),
            row.job_description.clone().unwrap_or_default(),
            row.location.clone().unwrap_or_default(),
            row.contact_name.clone().unwrap_or_default(),
            row.contact_email.clone().unwrap_or_default(),
            format_date(row.created_at.date_naive()),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush CSV writer: {e}"))?;
    Ok(String::from_utf8(bytes)?)
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::application::ApplicationStatus;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn sample() -> ApplicationRow {
        ApplicationRow {
            id: Uuid::nil(),
            company: "Acme, Inc.".to_string(),
            job_title: "Backend Developer".to_string(),
            date_applied: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            status: ApplicationStatus::Interview,
            notes: Some("Asked about \"on-call\"\nFollow up Friday".to_string()),
            follow_up_date: NaiveDate::from_ymd_opt(2025, 6, 9),
            job_url: Some("https://acme.example/jobs/1".to_string()),
            job_description: None,
            location: Some("Berlin".to_string()),
            contact_name: None,
            contact_email: Some("hr@acme.example".to_string()),
            created_at: Utc.with_ymd_and_hms(2025, 6, 2, 8, 30, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 6, 3, 8, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_header_only_when_empty() {
        let csv = applications_to_csv(&[]).unwrap();
        assert_eq!(
            csv,
            "ID,Company,Job Title,Date Applied,Status,Notes,Follow Up Date,Job Link,\
             Job Description,Location,Contact Name,Contact Email,Created At\n"
        );
    }

    #[test]
    fn test_row_columns_and_quoting() {
        let csv = applications_to_csv(&[sample()]).unwrap();
        let expected_row = "00000000-0000-0000-0000-000000000000,\"Acme, Inc.\",Backend Developer,\
            2025-06-02,Interview,\"Asked about \"\"on-call\"\"\nFollow up Friday\",2025-06-09,\
            https://acme.example/jobs/1,,Berlin,,hr@acme.example,2025-06-02\n";
        assert!(csv.ends_with(expected_row), "unexpected CSV:\n{csv}");
    }

    #[test]
    fn test_csv_reads_back_with_same_columns() {
        let csv = applications_to_csv(&[sample(), sample()]).unwrap();
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].len(), HEADERS.len());
        assert_eq!(&records[0][1], "Acme, Inc.");
        assert_eq!(&records[0][5], "Asked about \"on-call\"\nFollow up Friday");
    }
}
