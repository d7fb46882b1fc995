use crate::commands::renderer::OutputRenderer;
use crate::config::AppConfig;
use paperrag_api::Client;
use paperrag_shared::models::status::RagStatus;

pub async fn run_status(config: AppConfig, json: bool) -> Result<(), String> {
    let client = Client::new(&config.into())?;
    let status: RagStatus = client.rag_status().await?.into();
    OutputRenderer::new(json).render_status(&status)
}
