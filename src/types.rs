//! Core types for pdf-thumbnailer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for a stored document
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct DocumentId(pub i64);

impl DocumentId {
    /// Create a new DocumentId
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for DocumentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<DocumentId> for i64 {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored (url, thumbnail) pair
///
/// Documents are created exactly once by a successful pipeline run and are
/// never mutated afterwards. The thumbnail is serialized as base64 in JSON
/// responses; retained PDF bytes never leave the store through this type.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique database ID
    pub id: DocumentId,
    /// Source url of the PDF (unique per document)
    pub url: String,
    /// Rendered thumbnail bytes (base64 string in JSON)
    #[serde(with = "base64_bytes")]
    #[schema(value_type = String, format = Byte)]
    pub thumbnail: Vec<u8>,
    /// When the document was persisted (assigned by the store)
    pub created_at: DateTime<Utc>,
}

/// Payload delivered to a caller-supplied webhook
///
/// Sent as the JSON body of a single `POST <hook>` once a submission's
/// pipeline has run to completion (successfully or not).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HookPayload {
    /// The url that was submitted for processing
    pub url: String,
    /// True if a thumbnail was stored (or already existed via a lost race)
    pub ok: bool,
    /// Empty on success, else a short description of the first failure
    #[serde(rename = "statusText")]
    pub status_text: String,
}

/// Events emitted by the processing pipeline
///
/// Subscribe via [`PdfProcessor::subscribe`](crate::PdfProcessor::subscribe).
/// Delivery is lossy (broadcast channel semantics) and purely observational:
/// event consumers never influence pipeline outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A thumbnail was rendered and persisted for a url
    DocumentStored {
        /// The processed url
        url: String,
    },

    /// A submission was skipped because the url is already stored
    DuplicateSkipped {
        /// The already-present url
        url: String,
    },

    /// A submission failed before persistence
    ProcessingFailed {
        /// The url that failed
        url: String,
        /// Description of the failure (also the webhook statusText)
        error: String,
    },

    /// A webhook could not be delivered
    WebhookFailed {
        /// The hook endpoint
        url: String,
        /// Description of the delivery failure
        error: String,
    },
}

/// Serialize byte vectors as standard base64 strings
mod base64_bytes {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
