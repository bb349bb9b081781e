//! Document insertion, existence checks, and paginated reads.

use crate::error::DatabaseError;
use crate::types::{Document, DocumentId};
use crate::{Error, Result};

use super::{Database, DocumentRow, NewDocument};

/// Outcome of an insert attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new row was created
    Inserted(DocumentId),
    /// A document with this url already exists; nothing was written
    Duplicate,
}

impl Database {
    /// Check whether a document with this url is already stored
    ///
    /// This is an optimistic fast path to skip redundant fetch/render work.
    /// It is not atomic with a subsequent insert; the UNIQUE constraint on
    /// url remains the dedup correctness mechanism.
    pub async fn exists(&self, url: &str) -> Result<bool> {
        let row: Option<i64> =
            sqlx::query_scalar("SELECT 1 FROM pdf_thumbnails WHERE url = ? LIMIT 1")
                .bind(url)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    Error::Database(DatabaseError::QueryFailed(format!(
                        "Failed to check url existence: {}",
                        e
                    )))
                })?;

        Ok(row.is_some())
    }

    /// Insert a new document
    ///
    /// The creation timestamp is assigned here, in epoch milliseconds. A
    /// unique-violation on url is absorbed and reported as
    /// [`InsertOutcome::Duplicate`]; exactly one row exists for a url no
    /// matter how many concurrent submissions race to create it. Any other
    /// failure is a hard error.
    pub async fn insert_document(&self, doc: &NewDocument) -> Result<InsertOutcome> {
        let created_at = chrono::Utc::now().timestamp_millis();

        let result = sqlx::query(
            r#"
            INSERT INTO pdf_thumbnails (url, thumbnail, pdf, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&doc.url)
        .bind(&doc.thumbnail)
        .bind(&doc.pdf)
        .bind(created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(InsertOutcome::Inserted(DocumentId(done.last_insert_rowid()))),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                tracing::debug!(url = %doc.url, "document already stored, insert absorbed");
                Ok(InsertOutcome::Duplicate)
            }
            Err(e) => Err(Error::Sqlx(e)),
        }
    }

    /// Query stored documents, newest first
    ///
    /// Ordered by creation time descending, ties broken by rowid so the
    /// ordering is total and reverse-insertion even within one timestamp
    /// quantum. `size == 0` returns the entire collection; otherwise at most
    /// `size` rows starting at zero-based offset `from`. Offsets past the end
    /// return fewer rows (possibly none), never an error.
    pub async fn fetch_page(&self, from: u32, size: u32) -> Result<Vec<Document>> {
        let query = if size == 0 {
            sqlx::query_as::<_, DocumentRow>(
                r#"
                SELECT id, url, thumbnail, created_at FROM pdf_thumbnails
                ORDER BY created_at DESC, id DESC
                LIMIT -1 OFFSET ?
                "#,
            )
            .bind(i64::from(from))
        } else {
            sqlx::query_as::<_, DocumentRow>(
                r#"
                SELECT id, url, thumbnail, created_at FROM pdf_thumbnails
                ORDER BY created_at DESC, id DESC
                LIMIT ? OFFSET ?
                "#,
            )
            .bind(i64::from(size))
            .bind(i64::from(from))
        };

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            Error::Database(DatabaseError::QueryFailed(format!(
                "Failed to query documents: {}",
                e
            )))
        })?;

        Ok(rows.into_iter().map(Document::from).collect())
    }

    /// Count stored documents
    pub async fn count_documents(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pdf_thumbnails")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                Error::Database(DatabaseError::QueryFailed(format!(
                    "Failed to count documents: {}",
                    e
                )))
            })?;

        Ok(count)
    }

    /// Fetch the retained PDF bytes for a url, if any were kept
    pub async fn get_pdf(&self, url: &str) -> Result<Option<Vec<u8>>> {
        let row: Option<Option<Vec<u8>>> =
            sqlx::query_scalar("SELECT pdf FROM pdf_thumbnails WHERE url = ?")
                .bind(url)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    Error::Database(DatabaseError::QueryFailed(format!(
                        "Failed to fetch pdf payload: {}",
                        e
                    )))
                })?;

        Ok(row.flatten())
    }
}
