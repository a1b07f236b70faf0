//! # Generation Analytics Service
//!
//! Records one row per generation attempt in a SQLite database and serves
//! aggregate statistics over them. This is the only persistence in the
//! backend; the generation pipeline itself never touches disk.
//!
//! ## Workflow
//!
//! 1. **Schema**: `init_db` runs at startup and creates the `generations`
//!    table when it does not exist yet.
//! 2. **Recording**: the generate handler builds a `GenerationEvent` after
//!    every attempt (successful or not) and calls `record_generation`. A
//!    recording failure is logged and never fails the HTTP response.
//! 3. **Aggregation**: `GET /api/analytics/summary` computes totals,
//!    ready/error counts, the mean duration and per-template counts with
//!    plain SQL over the table.
//!
//! Connections are opened per operation, matching the low request volume.

mod summary;

use actix_web::web::{get, scope};
use actix_web::Scope;
use chrono::Utc;
use rusqlite::{params, Connection};

/// The base path for all analytics API endpoints.
const API_PATH: &str = "/api/analytics";

/// Configures and returns the Actix `Scope` for the analytics routes.
///
/// # Registered Routes:
///
/// *   **`GET /summary`**:
///     - **Handler**: `summary::process`
///     - **Description**: Returns an `AnalyticsSummary` aggregated over all
///       recorded generation events.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/summary", get().to(summary::process))
}

/// Shared handle to the analytics database, injected as `web::Data`.
#[derive(Clone)]
pub struct AnalyticsState {
    pub db_path: String,
}

impl AnalyticsState {
    pub fn open(&self) -> Result<Connection, String> {
        Connection::open(&self.db_path).map_err(|e| e.to_string())
    }
}

/// One recorded generation attempt.
#[derive(Debug)]
pub struct GenerationEvent {
    pub project_id: String,
    /// The selected template, `None` when the attempt failed before selection.
    pub template_id: Option<String>,
    /// `"ready"` when the pipeline completed, `"error"` otherwise. A
    /// completed generation whose content the unsafe-file gate withheld is
    /// still `"ready"`; `unsafe_files > 0` marks those attempts.
    pub status: String,
    pub file_count: usize,
    pub unsafe_files: usize,
    pub duration_ms: u64,
}

/// Creates the schema when missing. Called once at startup.
pub fn init_db(db_path: &str) -> Result<(), String> {
    let conn = Connection::open(db_path).map_err(|e| e.to_string())?;
    create_schema(&conn).map_err(|e| e.to_string())
}

fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS generations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id TEXT NOT NULL,
            template_id TEXT,
            status TEXT NOT NULL,
            file_count INTEGER NOT NULL,
            unsafe_files INTEGER NOT NULL,
            duration_ms INTEGER NOT NULL,
            created_at TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

/// Inserts one event row.
pub fn record_generation(conn: &Connection, event: &GenerationEvent) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO generations
            (project_id, template_id, status, file_count, unsafe_files, duration_ms, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            event.project_id,
            event.template_id,
            event.status,
            event.file_count as i64,
            event.unsafe_files as i64,
            event.duration_ms as i64,
            Utc::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// Aggregates all recorded events into an `AnalyticsSummary`.
pub fn load_summary(
    conn: &Connection,
) -> rusqlite::Result<common::model::analytics::AnalyticsSummary> {
    use common::model::analytics::{AnalyticsSummary, TemplateCount};

    let (total, ready, errors, average_duration_ms) = conn.query_row(
        "SELECT COUNT(*),
                COALESCE(SUM(CASE WHEN status = 'ready' THEN 1 ELSE 0 END), 0),
                COALESCE(SUM(CASE WHEN status = 'error' THEN 1 ELSE 0 END), 0),
                COALESCE(AVG(duration_ms), 0.0)
         FROM generations",
        [],
        |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, f64>(3)?,
            ))
        },
    )?;

    let mut stmt = conn.prepare(
        "SELECT template_id, COUNT(*) AS uses
         FROM generations
         WHERE template_id IS NOT NULL
         GROUP BY template_id
         ORDER BY uses DESC, template_id ASC",
    )?;
    let by_template = stmt
        .query_map([], |row| {
            Ok(TemplateCount {
                template_id: row.get(0)?,
                count: row.get::<_, i64>(1)? as u64,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(AnalyticsSummary {
        total: total as u64,
        ready: ready as u64,
        errors: errors as u64,
        average_duration_ms,
        by_template,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(project_id: &str, template_id: Option<&str>, status: &str, ms: u64) -> GenerationEvent {
        GenerationEvent {
            project_id: project_id.to_string(),
            template_id: template_id.map(str::to_string),
            status: status.to_string(),
            file_count: 8,
            unsafe_files: 0,
            duration_ms: ms,
        }
    }

    fn test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn empty_database_yields_a_zeroed_summary() {
        let summary = load_summary(&test_db()).unwrap();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_duration_ms, 0.0);
        assert!(summary.by_template.is_empty());
    }

    #[test]
    fn summary_aggregates_counts_and_durations() {
        let conn = test_db();
        record_generation(&conn, &event("site_1", Some("modern-landing"), "ready", 10)).unwrap();
        record_generation(&conn, &event("site_2", Some("modern-landing"), "ready", 30)).unwrap();
        record_generation(&conn, &event("site_3", Some("business-portfolio"), "ready", 20))
            .unwrap();
        record_generation(&conn, &event("site_4", None, "error", 4)).unwrap();

        let summary = load_summary(&conn).unwrap();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.ready, 3);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.average_duration_ms, 16.0);
        assert_eq!(summary.by_template.len(), 2);
        assert_eq!(summary.by_template[0].template_id, "modern-landing");
        assert_eq!(summary.by_template[0].count, 2);
    }
}
