use crate::commands::DocumentCommands;
use crate::commands::renderer::OutputRenderer;
use crate::config::AppConfig;
use paperrag_api::Client;
use paperrag_api::models::{AnalyzeRequest, UpdateDocumentRequest};

pub async fn run(config: AppConfig, command: DocumentCommands) -> Result<(), String> {
    let client = Client::new(&config.into())?;
    match command {
        DocumentCommands::List { json } => {
            let documents = client.list_documents().await?;
            OutputRenderer::new(json).render_documents(&documents)
        }
        DocumentCommands::Preview { id } => {
            let detail = client.get_document_preview(id).await?;
            println!("{} (#{})", detail.title, detail.id);
            if let Some(correspondent) = &detail.correspondent {
                println!("Correspondent: {}", correspondent);
            }
            println!();
            println!("{}", detail.content);
            Ok(())
        }
        DocumentCommands::Analyze { id, json } => {
            let analysis = client
                .analyze_document(&AnalyzeRequest { document_id: id })
                .await?;
            OutputRenderer::new(json).render_analysis(&analysis)
        }
        DocumentCommands::Update {
            id,
            title,
            tags,
            correspondent,
        } => {
            if title.is_none() && tags.is_empty() && correspondent.is_none() {
                // Nothing to write; mirror the web client and do nothing.
                return Ok(());
            }
            let request = UpdateDocumentRequest {
                document_id: id,
                title,
                tags: if tags.is_empty() { None } else { Some(tags) },
                correspondent,
            };
            let response = client.update_document(&request).await?;
            if !response.success {
                return Err("Backend rejected the update".to_string());
            }
            println!("Document {} updated", id);
            Ok(())
        }
    }
}

pub async fn run_tags(config: AppConfig, json: bool) -> Result<(), String> {
    let client = Client::new(&config.into())?;
    let tags = client.list_tags().await?;
    OutputRenderer::new(json).render_tags(&tags)
}
