use url::Url;

use crate::applications::models::{ApplicationInput, NewApplication};

/// Validates and normalises a submitted application.
///
/// Every problem is reported, not just the first, so the form can flag all fields at once.
pub fn validate_application(input: ApplicationInput) -> Result<NewApplication, Vec<String>> {
    let mut problems = Vec::new();

    let company = input.company.trim().to_string();
    if company.is_empty() {
        problems.push("company is required".to_string());
    }

    let job_title = input.job_title.trim().to_string();
    if job_title.is_empty() {
        problems.push("jobTitle is required".to_string());
    }

    let job_url = non_blank(input.job_url);
    if let Some(url) = &job_url {
        if let Err(reason) = check_http_url(url) {
            problems.push(format!("jobUrl {reason}"));
        }
    }

    let contact_email = non_blank(input.contact_email);
    if let Some(email) = &contact_email {
        if !looks_like_email(email) {
            problems.push(format!("contactEmail '{email}' is not a valid email address"));
        }
    }

    if !problems.is_empty() {
        return Err(problems);
    }

    Ok(NewApplication {
        company,
        job_title,
        date_applied: input.date_applied,
        status: input.status,
        notes: non_blank(input.notes),
        follow_up_date: input.follow_up_date,
        job_url,
        job_description: non_blank(input.job_description),
        location: non_blank(input.location),
        contact_name: non_blank(input.contact_name),
        contact_email,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_http_url(raw: &str) -> Result<(), String> {
    let parsed = Url::parse(raw).map_err(|e| format!("'{raw}' is not a valid URL: {e}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("'{raw}' must use http or https, not {other}")),
    }
}

/// Exactly one `@` with non-empty local and domain parts.
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::application::ApplicationStatus;
    use chrono::NaiveDate;

    fn input() -> ApplicationInput {
        ApplicationInput {
            company: "  Acme  ".to_string(),
            job_title: "Backend Developer ".to_string(),
            date_applied: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            status: ApplicationStatus::Interview,
            notes: Some("   ".to_string()),
            follow_up_date: NaiveDate::from_ymd_opt(2025, 4, 15),
            job_url: Some(" https://acme.example/jobs/7 ".to_string()),
            job_description: None,
            location: Some("Remote".to_string()),
            contact_name: Some("".to_string()),
            contact_email: Some("recruiter@acme.example".to_string()),
        }
    }

    #[test]
    fn test_valid_input_is_normalised() {
        let app = validate_application(input()).unwrap();
        assert_eq!(app.company, "Acme");
        assert_eq!(app.job_title, "Backend Developer");
        assert_eq!(app.status, ApplicationStatus::Interview);
        assert_eq!(app.notes, None);
        assert_eq!(app.contact_name, None);
        assert_eq!(app.location.as_deref(), Some("Remote"));
        assert_eq!(app.job_url.as_deref(), Some("https://acme.example/jobs/7"));
    }

    #[test]
    fn test_blank_required_fields_are_all_reported() {
        let mut bad = input();
        bad.company = " ".to_string();
        bad.job_title = String::new();

        let problems = validate_application(bad).unwrap_err();
        assert_eq!(problems.len(), 2);
        assert!(problems[0].contains("company"));
        assert!(problems[1].contains("jobTitle"));
    }

    #[test]
    fn test_relative_job_url_rejected() {
        let mut bad = input();
        bad.job_url = Some("jobs/7".to_string());
        let problems = validate_application(bad).unwrap_err();
        assert!(problems[0].starts_with("jobUrl"));
    }

    #[test]
    fn test_non_http_job_url_rejected() {
        let mut bad = input();
        bad.job_url = Some("mailto:jobs@acme.example".to_string());
        assert!(validate_application(bad).is_err());
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email("hr@localhost"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@"));
        assert!(!looks_like_email("a@@b.co"));
        assert!(!looks_like_email("a@b@c.co"));
        assert!(!looks_like_email("no-at-sign"));
    }

    #[test]
    fn test_single_label_contact_domain_accepted() {
        let mut app = input();
        app.contact_email = Some(" hr@localhost ".to_string());
        let app = validate_application(app).unwrap();
        assert_eq!(app.contact_email.as_deref(), Some("hr@localhost"));
    }

    #[test]
    fn test_bad_contact_email_rejected() {
        let mut bad = input();
        bad.contact_email = Some("not-an-email".to_string());
        let problems = validate_application(bad).unwrap_err();
        assert!(problems[0].contains("contactEmail"));
    }
}
