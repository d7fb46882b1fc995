//! Client implementation
//!
//! Provides access to the Paperless-AI backend's RAG and manual-tagging
//! APIs.

use crate::ClientConfig;
use crate::models::*;
use reqwest::{Response, header};
use serde::de::DeserializeOwned;

/// Client for the Paperless-AI backend
#[derive(Clone, Debug)]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

/// API error response format
#[derive(Debug, serde::Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorDetail {
    #[allow(dead_code)]
    key: String,
    message: String,
}

impl Client {
    /// Create a new Client
    pub fn new(config: &ClientConfig) -> Result<Self, String> {
        if config.api_endpoint.is_empty() {
            return Err("API endpoint is required".to_string());
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&format!("Paperrag/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|e| e.to_string())?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Self {
            client,
            base_url: config.api_endpoint.trim_end_matches('/').to_string(),
        })
    }

    // =========================================================================
    // RAG APIs - status, indexing, ask
    // =========================================================================

    /// Poll backend health
    pub async fn rag_status(&self) -> Result<RagStatusResponse, String> {
        let url = format!("{}/api/rag/status", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        self.handle_response(response).await
    }

    /// Check the index for new or changed documents
    pub async fn check_index(&self) -> Result<IndexCheckResponse, String> {
        let url = format!("{}/api/rag/index/check", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        self.handle_response(response).await
    }

    /// Kick off an index rebuild
    pub async fn start_index(&self, req: &StartIndexRequest) -> Result<StartIndexResponse, String> {
        let url = format!("{}/api/rag/index", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(req)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        self.handle_response(response).await
    }

    /// Ask a question against the indexed documents
    pub async fn ask(&self, req: &AskRequest) -> Result<AskResponse, String> {
        let url = format!("{}/api/rag/ask", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(req)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Manual tagging APIs
    // =========================================================================

    /// List all tags
    pub async fn list_tags(&self) -> Result<Vec<Tag>, String> {
        let url = format!("{}/manual/tags", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        self.handle_response(response).await
    }

    /// List documents with their current metadata
    pub async fn list_documents(&self) -> Result<Vec<DocumentSummary>, String> {
        let url = format!("{}/manual/documents", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        self.handle_response(response).await
    }

    /// Fetch one document including its extracted content
    pub async fn get_document_preview(&self, id: i64) -> Result<DocumentDetail, String> {
        let url = format!("{}/manual/preview/{}", self.base_url, id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        self.handle_response(response).await
    }

    /// Ask the backend to suggest metadata for a document
    pub async fn analyze_document(&self, req: &AnalyzeRequest) -> Result<AnalyzeResponse, String> {
        let url = format!("{}/manual/analyze", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(req)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        self.handle_response(response).await
    }

    /// Write metadata back to a document
    pub async fn update_document(
        &self,
        req: &UpdateDocumentRequest,
    ) -> Result<UpdateDocumentResponse, String> {
        let url = format!("{}/manual/updateDocument", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(req)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Helper Methods
    // =========================================================================

    /// Handle response and parse JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, String> {
        let response = self.handle_response_error(response).await?;
        response.json().await.map_err(|e| e.to_string())
    }

    /// Handle response errors
    async fn handle_response_error(&self, response: Response) -> Result<Response, String> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let error_body = response.text().await.unwrap_or_default();

        // Try to parse as API error
        if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_body) {
            return Err(api_error.error.message);
        }

        Err(format!("API error {}: {}", status, error_body))
    }
}
