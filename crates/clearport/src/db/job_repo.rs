//! Job repository — CRUD operations for the `jobs` table.
//!
//! The typed `Job` is stored whole in the `doc` JSON column; the
//! scalar columns exist for the list-screen filters and stay in sync
//! with the document on every write.

use chrono::Utc;
use rusqlite::{params, Row};

use crate::model::{DetailedStatus, Job};

use super::{Database, DatabaseError};

/// Query filter parameters for job listing.
#[derive(Debug, Default, Clone)]
pub struct JobFilter {
    pub year: Option<String>,
    pub status: Option<DetailedStatus>,
    pub custom_house: Option<String>,
    /// Case-insensitive substring match on the importer name.
    pub importer_contains: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

fn job_from_row(row: &Row<'_>) -> Result<String, rusqlite::Error> {
    row.get("doc")
}

/// Inserts a new job row.
pub fn insert(db: &Database, job: &Job) -> Result<(), DatabaseError> {
    let doc = serde_json::to_string(job)?;
    let now = Utc::now().to_rfc3339();
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO jobs (year, job_no, custom_house, importer, detailed_status,
             created_at, updated_at, doc)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                job.year,
                job.job_no,
                job.custom_house,
                job.importer,
                job.detailed_status.as_str(),
                now,
                now,
                doc,
            ],
        )?;
        Ok(())
    })
}

/// Updates an existing job row, overwriting the document and every
/// scalar column except `created_at`. Errors when no row matches.
pub fn update(db: &Database, job: &Job) -> Result<(), DatabaseError> {
    let doc = serde_json::to_string(job)?;
    let now = Utc::now().to_rfc3339();
    db.with_conn(|conn| {
        let affected = conn.execute(
            "UPDATE jobs SET custom_house=?3, importer=?4, detailed_status=?5,
             updated_at=?6, doc=?7
             WHERE year=?1 AND job_no=?2",
            params![
                job.year,
                job.job_no,
                job.custom_house,
                job.importer,
                job.detailed_status.as_str(),
                now,
                doc,
            ],
        )?;
        if affected == 0 {
            return Err(DatabaseError::JobNotFound {
                year: job.year.clone(),
                job_no: job.job_no.clone(),
            });
        }
        Ok(())
    })
}

/// Finds a job by its financial year and job number.
pub fn find(db: &Database, year: &str, job_no: &str) -> Result<Option<Job>, DatabaseError> {
    let doc: Option<String> = db.with_conn(|conn| {
        let mut stmt = conn.prepare("SELECT doc FROM jobs WHERE year = ?1 AND job_no = ?2")?;
        let mut rows = stmt.query_map(params![year, job_no], job_from_row)?;
        match rows.next() {
            Some(Ok(doc)) => Ok(Some(doc)),
            Some(Err(e)) => Err(DatabaseError::Sqlite(e)),
            None => Ok(None),
        }
    })?;

    match doc {
        Some(doc) => Ok(Some(serde_json::from_str(&doc)?)),
        None => Ok(None),
    }
}

/// Queries jobs with filters, returning (jobs, total_count).
pub fn query(db: &Database, filter: &JobFilter) -> Result<(Vec<Job>, u64), DatabaseError> {
    let (docs, total) = db.with_conn(|conn| {
        let mut conditions = Vec::new();
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(ref year) = filter.year {
            conditions.push(format!("year = ?{}", param_values.len() + 1));
            param_values.push(Box::new(year.clone()));
        }
        if let Some(status) = filter.status {
            conditions.push(format!("detailed_status = ?{}", param_values.len() + 1));
            param_values.push(Box::new(status.as_str().to_string()));
        }
        if let Some(ref custom_house) = filter.custom_house {
            conditions.push(format!("custom_house = ?{}", param_values.len() + 1));
            param_values.push(Box::new(custom_house.clone()));
        }
        if let Some(ref fragment) = filter.importer_contains {
            conditions.push(format!(
                "importer LIKE ?{} COLLATE NOCASE",
                param_values.len() + 1
            ));
            param_values.push(Box::new(format!("%{}%", fragment)));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        // Count total matching rows.
        let count_sql = format!("SELECT COUNT(*) FROM jobs {}", where_clause);
        let params_ref: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let total: u64 = conn.query_row(&count_sql, params_ref.as_slice(), |r| r.get(0))?;

        // Fetch paginated results.
        let limit = filter.limit.unwrap_or(100) as i64;
        let offset = filter.offset.unwrap_or(0) as i64;
        param_values.push(Box::new(limit));
        param_values.push(Box::new(offset));
        let query_sql = format!(
            "SELECT doc FROM jobs {} ORDER BY created_at DESC, job_no DESC LIMIT ?{} OFFSET ?{}",
            where_clause,
            param_values.len() - 1,
            param_values.len()
        );

        let params_ref: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let mut stmt = conn.prepare(&query_sql)?;
        let docs: Vec<String> = stmt
            .query_map(params_ref.as_slice(), job_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok((docs, total))
    })?;

    let jobs = docs
        .iter()
        .map(|doc| serde_json::from_str(doc))
        .collect::<Result<Vec<Job>, _>>()?;
    Ok((jobs, total))
}

/// Counts jobs with the given status.
pub fn count_by_status(db: &Database, status: DetailedStatus) -> Result<u64, DatabaseError> {
    db.with_conn(|conn| {
        let count: u64 = conn.query_row(
            "SELECT COUNT(*) FROM jobs WHERE detailed_status = ?1",
            params![status.as_str()],
            |r| r.get(0),
        )?;
        Ok(count)
    })
}
