#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::models::*;
use crate::{Client, ClientConfig};
use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use paperrag_shared::models::chat::NO_EXCERPT_PLACEHOLDER;
use paperrag_shared::models::status::{Connectivity, RagStatus};
use serde_json::{Value, json};

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client_for(endpoint: String) -> Client {
    Client::new(&ClientConfig {
        api_endpoint: endpoint,
        request_timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_rag_status_roundtrip() {
    let router = Router::new().route(
        "/api/rag/status",
        get(|| async {
            Json(json!({
                "server_up": true,
                "data_loaded": true,
                "index_ready": true,
                "indexing_status": {"running": false, "documents_count": 42},
                "ai_status": "ready",
                "ai_model": "gpt-4o-mini"
            }))
        }),
    );
    let client = client_for(serve(router).await);

    let response = client.rag_status().await.unwrap();
    let status: RagStatus = response.into();
    assert_eq!(status.connectivity(), Connectivity::Online);
    assert_eq!(status.documents_count, 42);
    assert_eq!(status.ai_model.as_deref(), Some("gpt-4o-mini"));
}

#[tokio::test]
async fn test_rag_status_sparse_payload_defaults() {
    let router = Router::new().route("/api/rag/status", get(|| async { Json(json!({})) }));
    let client = client_for(serve(router).await);

    let status: RagStatus = client.rag_status().await.unwrap().into();
    assert_eq!(status.connectivity(), Connectivity::Offline);
    assert_eq!(status.documents_count, 0);
    assert!(status.ai_model.is_none());
}

#[tokio::test]
async fn test_api_error_body_is_surfaced() {
    let router = Router::new().route(
        "/api/rag/status",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": {"key": "RAG_UNAVAILABLE", "message": "vector store offline"}})),
            )
        }),
    );
    let client = client_for(serve(router).await);

    let err = client.rag_status().await.unwrap_err();
    assert_eq!(err, "vector store offline");
}

#[tokio::test]
async fn test_unstructured_error_includes_status() {
    let router = Router::new().route(
        "/api/rag/index/check",
        get(|| async { (StatusCode::NOT_FOUND, "nope") }),
    );
    let client = client_for(serve(router).await);

    let err = client.check_index().await.unwrap_err();
    assert!(err.starts_with("API error 404"), "got: {err}");
}

#[tokio::test]
async fn test_ask_wire_format_and_citations() {
    let router = Router::new().route(
        "/api/rag/ask",
        post(|Json(body): Json<Value>| async move {
            // The web client contract: camel-cased useAI, absent filters omitted.
            assert_eq!(body["question"], "where is my rent contract?");
            assert_eq!(body["useAI"], true);
            assert_eq!(body["correspondent"], "Acme Housing");
            assert!(body.get("from_date").is_none());
            assert!(body.get("to_date").is_none());
            Json(json!({
                "answer": "Your rent contract is filed under Acme Housing.",
                "sources": [
                    {"title": "Rent contract", "snippet": "…monthly rent of…",
                     "correspondent": "Acme Housing", "date": "2024-03-02"},
                    {"title": "Reminder letter"}
                ],
                "model": "gpt-4o-mini"
            }))
        }),
    );
    let client = client_for(serve(router).await);

    let request = AskRequest::new("where is my rent contract?", true)
        .with_correspondent("Acme Housing");
    let response = client.ask(&request).await.unwrap();
    assert_eq!(response.model.as_deref(), Some("gpt-4o-mini"));

    let citations = response.citations();
    assert_eq!(citations.len(), 2);
    assert_eq!(citations[0].index, 1);
    assert_eq!(citations[0].title, "Rent contract");
    assert_eq!(citations[1].index, 2);
    assert_eq!(citations[1].snippet, NO_EXCERPT_PLACEHOLDER);
}

#[tokio::test]
async fn test_start_index_posts_force_background() {
    let router = Router::new().route(
        "/api/rag/index",
        post(|Json(body): Json<StartIndexRequest>| async move {
            assert!(body.force);
            assert!(body.background);
            Json(json!({"status": "indexing started"}))
        }),
    );
    let client = client_for(serve(router).await);

    let response = client.start_index(&StartIndexRequest::default()).await.unwrap();
    assert_eq!(response.status, "indexing started");
}

#[tokio::test]
async fn test_check_index_message() {
    let router = Router::new().route(
        "/api/rag/index/check",
        get(|| async { Json(json!({"message": "3 new documents found"})) }),
    );
    let client = client_for(serve(router).await);

    let response = client.check_index().await.unwrap();
    assert_eq!(response.message, "3 new documents found");
}

#[tokio::test]
async fn test_manual_tags_and_update() {
    let router = Router::new()
        .route(
            "/manual/tags",
            get(|| async { Json(json!([{"id": 1, "name": "taxes"}, {"id": 2, "name": "rent"}])) }),
        )
        .route(
            "/manual/updateDocument",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["documentId"], 7);
                assert_eq!(body["title"], "Rent contract 2024");
                assert!(body.get("correspondent").is_none());
                Json(json!({"success": true}))
            }),
        );
    let client = client_for(serve(router).await);

    let tags = client.list_tags().await.unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[1].name, "rent");

    let update = UpdateDocumentRequest {
        document_id: 7,
        title: Some("Rent contract 2024".into()),
        tags: Some(vec!["rent".into()]),
        correspondent: None,
    };
    assert!(client.update_document(&update).await.unwrap().success);
}

#[tokio::test]
async fn test_document_preview_path() {
    let router = Router::new().route(
        "/manual/preview/{id}",
        get(|axum::extract::Path(id): axum::extract::Path<i64>| async move {
            Json(json!({"id": id, "title": "Invoice", "content": "total due", "tags": [1]}))
        }),
    );
    let client = client_for(serve(router).await);

    let detail = client.get_document_preview(9).await.unwrap();
    assert_eq!(detail.id, 9);
    assert_eq!(detail.content, "total due");
}
