use chrono::Utc;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::applications::models::NewApplication;
use crate::models::application::{ApplicationRow, ApplicationStatus};

/// Inserts a new application. The store assigns `id`, `created_at` and `updated_at`.
pub async fn insert_application(
    pool: &PgPool,
    app: &NewApplication,
) -> Result<ApplicationRow, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query_as::<_, ApplicationRow>(
        r#"
        INSERT INTO applications
            (id, company, job_title, date_applied, status, notes, follow_up_date,
             job_url, job_description, location, contact_name, contact_email,
             created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $13)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&app.company)
    .bind(&app.job_title)
    .bind(app.date_applied)
    .bind(app.status)
    .bind(&app.notes)
    .bind(app.follow_up_date)
    .bind(&app.job_url)
    .bind(&app.job_description)
    .bind(&app.location)
    .bind(&app.contact_name)
    .bind(&app.contact_email)
    .bind(now)
    .fetch_one(pool)
    .await?;

    info!("Created application {id} ({} at {})", row.job_title, row.company);
    Ok(row)
}

/// Returns every application, most recently applied first.
pub async fn list_applications(pool: &PgPool) -> Result<Vec<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        "SELECT * FROM applications ORDER BY date_applied DESC, created_at DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn get_application(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>("SELECT * FROM applications WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Replaces every mutable field of an application. `None` if `id` does not exist.
/// `id` and `created_at` are never touched.
pub async fn update_application(
    pool: &PgPool,
    id: Uuid,
    app: &NewApplication,
) -> Result<Option<ApplicationRow>, sqlx::Error> {
    let row = sqlx::query_as::<_, ApplicationRow>(
        r#"
        UPDATE applications SET
            company = $2,
            job_title = $3,
            date_applied = $4,
            status = $5,
            notes = $6,
            follow_up_date = $7,
            job_url = $8,
            job_description = $9,
            location = $10,
            contact_name = $11,
            contact_email = $12,
            updated_at = $13
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&app.company)
    .bind(&app.job_title)
    .bind(app.date_applied)
    .bind(app.status)
    .bind(&app.notes)
    .bind(app.follow_up_date)
    .bind(&app.job_url)
    .bind(&app.job_description)
    .bind(&app.location)
    .bind(&app.contact_name)
    .bind(&app.contact_email)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?;

    if row.is_some() {
        info!("Updated application {id}");
    }
    Ok(row)
}

/// Returns `true` if a row was deleted.
pub async fn delete_application(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM applications WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    let deleted = result.rows_affected() > 0;
    if deleted {
        info!("Deleted application {id}");
    }
    Ok(deleted)
}

/// Per-status row counts. Statuses without rows are absent.
pub async fn count_by_status(
    pool: &PgPool,
) -> Result<Vec<(ApplicationStatus, i64)>, sqlx::Error> {
    sqlx::query_as::<_, (ApplicationStatus, i64)>(
        "SELECT status, COUNT(*) FROM applications GROUP BY status",
    )
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::NaiveDate;

    use super::*;
    use crate::applications::models::StatusStats;

    fn new_application(company: &str, status: ApplicationStatus) -> NewApplication {
        NewApplication {
            company: company.to_string(),
            job_title: "Backend Developer".to_string(),
            date_applied: NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
            status,
            notes: None,
            follow_up_date: None,
            job_url: Some("https://acme.example/jobs/7".to_string()),
            job_description: None,
            location: None,
            contact_name: None,
            contact_email: None,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_insert_then_get_round_trips(pool: PgPool) {
        let created = insert_application(&pool, &new_application("Acme", ApplicationStatus::Applied))
            .await
            .unwrap();
        assert_eq!(created.created_at, created.updated_at);

        let fetched = get_application(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(fetched.company, "Acme");
        assert_eq!(fetched.status, ApplicationStatus::Applied);
        assert_eq!(fetched.job_url.as_deref(), Some("https://acme.example/jobs/7"));
        assert_eq!(fetched.notes, None);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_keeps_identity_and_refreshes_updated_at(pool: PgPool) {
        let created = insert_application(&pool, &new_application("Acme", ApplicationStatus::Applied))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;

        let mut changes = new_application("Acme Corp", ApplicationStatus::Interview);
        changes.notes = Some("Phone screen booked".to_string());
        let updated = update_application(&pool, created.id, &changes)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.company, "Acme Corp");
        assert_eq!(updated.status, ApplicationStatus::Interview);
        assert_eq!(updated.notes.as_deref(), Some("Phone screen booked"));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_missing_id_is_none_or_false(pool: PgPool) {
        let missing = Uuid::new_v4();
        assert!(get_application(&pool, missing).await.unwrap().is_none());

        let changes = new_application("Acme", ApplicationStatus::Rejected);
        assert!(update_application(&pool, missing, &changes).await.unwrap().is_none());
        assert!(!delete_application(&pool, missing).await.unwrap());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete_removes_row_once(pool: PgPool) {
        let created = insert_application(&pool, &new_application("Acme", ApplicationStatus::Applied))
            .await
            .unwrap();

        assert!(delete_application(&pool, created.id).await.unwrap());
        assert!(get_application(&pool, created.id).await.unwrap().is_none());
        assert!(!delete_application(&pool, created.id).await.unwrap());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_count_by_status_reads_enum_column(pool: PgPool) {
        for (company, status) in [
            ("Acme", ApplicationStatus::Applied),
            ("Globex", ApplicationStatus::Applied),
            ("Initech", ApplicationStatus::Interview),
            ("Hooli", ApplicationStatus::Success),
        ] {
            insert_application(&pool, &new_application(company, status))
                .await
                .unwrap();
        }

        let counts = count_by_status(&pool).await.unwrap();
        assert!(!counts.iter().any(|(status, _)| *status == ApplicationStatus::Rejected));

        let stats = StatusStats::from_counts(&counts);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.applied, 2);
        assert_eq!(stats.interview, 1);
        assert_eq!(stats.rejected, 0);
        assert_eq!(stats.success, 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_is_newest_application_first(pool: PgPool) {
        let mut older = new_application("Acme", ApplicationStatus::Applied);
        older.date_applied = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        insert_application(&pool, &older).await.unwrap();
        insert_application(&pool, &new_application("Globex", ApplicationStatus::Applied))
            .await
            .unwrap();

        let rows = list_applications(&pool).await.unwrap();
        let companies: Vec<&str> = rows.iter().map(|r| r.company.as_str()).collect();
        assert_eq!(companies, vec!["Globex", "Acme"]);
    }
}
