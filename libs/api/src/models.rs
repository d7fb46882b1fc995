//! Wire contract of the Paperless-AI backend.
//!
//! Every optional or occasionally-missing field is defaulted so a sparse
//! payload degrades to placeholders instead of failing deserialization.

use chrono::NaiveDate;
use paperrag_shared::models::chat::Source;
use paperrag_shared::models::status::RagStatus;
use serde::{Deserialize, Serialize};

// =============================================================================
// /api/rag/status
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IndexingStatus {
    #[serde(default)]
    pub running: bool,
    #[serde(default)]
    pub documents_count: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RagStatusResponse {
    #[serde(default)]
    pub server_up: bool,
    #[serde(default)]
    pub data_loaded: bool,
    #[serde(default)]
    pub index_ready: bool,
    #[serde(default)]
    pub indexing_status: IndexingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_model: Option<String>,
}

impl From<RagStatusResponse> for RagStatus {
    fn from(resp: RagStatusResponse) -> Self {
        RagStatus {
            server_up: resp.server_up,
            data_loaded: resp.data_loaded,
            index_ready: resp.index_ready,
            indexing: resp.indexing_status.running,
            documents_count: resp.indexing_status.documents_count,
            ai_status: resp.ai_status,
            ai_model: resp.ai_model,
        }
    }
}

// =============================================================================
// /api/rag/index and /api/rag/index/check
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IndexCheckResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartIndexRequest {
    pub force: bool,
    pub background: bool,
}

impl Default for StartIndexRequest {
    /// The UI trigger always forces a background rebuild.
    fn default() -> Self {
        StartIndexRequest {
            force: true,
            background: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StartIndexResponse {
    #[serde(default)]
    pub status: String,
}

// =============================================================================
// /api/rag/ask
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    /// Camel-cased on the wire for compatibility with the web client.
    #[serde(rename = "useAI")]
    pub use_ai: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correspondent: Option<String>,
}

impl AskRequest {
    pub fn new(question: impl Into<String>, use_ai: bool) -> Self {
        AskRequest {
            question: question.into(),
            use_ai,
            from_date: None,
            to_date: None,
            correspondent: None,
        }
    }

    pub fn with_from_date(mut self, from_date: NaiveDate) -> Self {
        self.from_date = Some(from_date);
        self
    }

    pub fn with_to_date(mut self, to_date: NaiveDate) -> Self {
        self.to_date = Some(to_date);
        self
    }

    pub fn with_correspondent(mut self, correspondent: impl Into<String>) -> Self {
        self.correspondent = Some(correspondent.into());
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SourceEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub correspondent: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl SourceEntry {
    pub fn into_source(self, index: usize) -> Source {
        Source::from_parts(
            index,
            self.title,
            self.snippet,
            self.correspondent,
            self.date,
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<SourceEntry>,
    #[serde(default)]
    pub model: Option<String>,
}

impl AskResponse {
    /// Citation list with 1-based indices, in answer order.
    pub fn citations(&self) -> Vec<Source> {
        self.sources
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, entry)| entry.into_source(i + 1))
            .collect()
    }
}

// =============================================================================
// /manual/* document and tag payloads
// =============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DocumentSummary {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    /// Tag ids; names resolve through `/manual/tags`.
    #[serde(default)]
    pub tags: Vec<i64>,
    #[serde(default)]
    pub correspondent: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DocumentDetail {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<i64>,
    #[serde(default)]
    pub correspondent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(rename = "documentId")]
    pub document_id: i64,
}

/// AI-suggested metadata for one document; tags come back as names.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub correspondent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDocumentRequest {
    #[serde(rename = "documentId")]
    pub document_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correspondent: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpdateDocumentResponse {
    #[serde(default)]
    pub success: bool,
}
