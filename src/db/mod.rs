//! Database layer for pdf-thumbnailer
//!
//! Handles SQLite persistence for processed documents.
//!
//! ## Submodules
//!
//! Methods on [`Database`] are organized by domain:
//! - [`migrations`] — Database lifecycle, schema migrations
//! - [`documents`] — Document insertion, existence checks, paginated reads

use crate::types::{Document, DocumentId};
use sqlx::{FromRow, sqlite::SqlitePool};

mod documents;
mod migrations;

pub use documents::InsertOutcome;

/// New document to be inserted into the database
///
/// The creation timestamp is assigned by the store at insertion time, not by
/// the caller.
#[derive(Debug, Clone)]
pub struct NewDocument {
    /// Source url (the unique key)
    pub url: String,
    /// Rendered thumbnail bytes
    pub thumbnail: Vec<u8>,
    /// Original PDF bytes, retained only when configured
    pub pdf: Option<Vec<u8>>,
}

/// Document record from database (raw from SQLite)
#[derive(Debug, Clone, FromRow)]
pub struct DocumentRow {
    /// Unique database ID
    pub id: i64,
    /// Source url
    pub url: String,
    /// Rendered thumbnail bytes
    pub thumbnail: Vec<u8>,
    /// Unix timestamp in milliseconds when the document was persisted
    pub created_at: i64,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        use chrono::{DateTime, Utc};

        Document {
            id: DocumentId(row.id),
            url: row.url,
            thumbnail: row.thumbnail,
            created_at: DateTime::from_timestamp_millis(row.created_at)
                .unwrap_or_else(Utc::now),
        }
    }
}

/// Database handle for pdf-thumbnailer
pub struct Database {
    pool: SqlitePool,
}
