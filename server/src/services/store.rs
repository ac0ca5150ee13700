//! Hazard storage backends.
//!
//! DESIGN
//! ======
//! `HazardStore` is the seam between routes and persistence. Two backends
//! exist:
//! - `FileHazardStore`: one JSON record per line, appended. A missing file
//!   is an empty store. This is the default when no database is configured.
//! - `PgHazardStore`: the `hazard_reports` table, selected by `DATABASE_URL`.
//!
//! ERROR HANDLING
//! ==============
//! Lines in the file store that fail to parse are skipped with a warning so
//! one bad line never hides every other report.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::path::{Path, PathBuf};

use hazards::{Accessibility, HazardRecord};
use sqlx::PgPool;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::warn;

use crate::services::hazard;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("accessibility is not numeric: {0}")]
    NonNumericAccessibility(String),
}

/// Append-only hazard storage. Enables swapping backends in tests.
#[async_trait::async_trait]
pub trait HazardStore: Send + Sync {
    /// Persist one stamped record.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the record cannot be written.
    async fn append(&self, record: &HazardRecord) -> Result<(), StoreError>;

    /// Every stored record, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be read.
    async fn load_all(&self) -> Result<Vec<HazardRecord>, StoreError>;

    /// Most recent records whose location contains `query`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend cannot be read.
    async fn recent(&self, query: &str, limit: usize) -> Result<Vec<HazardRecord>, StoreError> {
        Ok(hazard::recent_hazards(self.load_all().await?, query, limit))
    }
}

// =============================================================================
// FILE STORE
// =============================================================================

/// JSON-lines file store.
pub struct FileHazardStore {
    path: PathBuf,
    /// Serializes appends so concurrent reports never interleave lines.
    write_lock: Mutex<()>,
}

impl FileHazardStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), write_lock: Mutex::new(()) }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl HazardStore for FileHazardStore {
    async fn append(&self, record: &HazardRecord) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<HazardRecord>, StoreError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(parse_lines(&contents))
    }
}

fn parse_lines(contents: &str) -> Vec<HazardRecord> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(idx, line)| match serde_json::from_str::<HazardRecord>(line.trim()) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(line = idx + 1, error = %e, "skipping malformed hazard line");
                None
            }
        })
        .collect()
}

// =============================================================================
// POSTGRES STORE
// =============================================================================

/// Postgres-backed store over the `hazard_reports` table.
pub struct PgHazardStore {
    pool: PgPool,
}

impl PgHazardStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

type HazardRow = (String, String, String, String, i64, String, bool, String, Option<String>);

fn row_to_record(row: HazardRow) -> HazardRecord {
    let (timestamp, day, location_name, hazard_type, accessibility, user_type, temporary, description, media_url) =
        row;
    HazardRecord {
        day,
        timestamp,
        location_name,
        hazard_type,
        accessibility: Accessibility::Level(accessibility),
        user_type,
        temporary: Some(temporary),
        description: Some(description),
        media_url,
    }
}

fn accessibility_level(value: &Accessibility) -> Result<i64, StoreError> {
    match value {
        Accessibility::Level(level) => Ok(*level),
        Accessibility::Label(label) => label
            .trim()
            .parse()
            .map_err(|_| StoreError::NonNumericAccessibility(label.clone())),
    }
}

const SELECT_COLUMNS: &str = "SELECT timestamp, day, location_name, hazard_type, accessibility,
        user_type, temporary, description, media_url
 FROM hazard_reports";

#[async_trait::async_trait]
impl HazardStore for PgHazardStore {
    async fn append(&self, record: &HazardRecord) -> Result<(), StoreError> {
        let accessibility = accessibility_level(&record.accessibility)?;
        sqlx::query(
            "INSERT INTO hazard_reports
                (timestamp, day, location_name, hazard_type, accessibility,
                 user_type, temporary, description, media_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(&record.timestamp)
        .bind(&record.day)
        .bind(&record.location_name)
        .bind(&record.hazard_type)
        .bind(accessibility)
        .bind(&record.user_type)
        .bind(record.temporary.unwrap_or(true))
        .bind(record.description.as_deref().unwrap_or_default())
        .bind(record.media_url.as_deref())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<HazardRecord>, StoreError> {
        let rows = sqlx::query_as::<_, HazardRow>(&format!("{SELECT_COLUMNS} ORDER BY id ASC"))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(row_to_record).collect())
    }

    async fn recent(&self, query: &str, limit: usize) -> Result<Vec<HazardRecord>, StoreError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = sqlx::query_as::<_, HazardRow>(&format!(
            "{SELECT_COLUMNS}
             WHERE strpos(lower(location_name), lower($1)) > 0
             ORDER BY timestamp DESC, id ASC
             LIMIT $2"
        ))
        .bind(query)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(row_to_record).collect())
    }
}
