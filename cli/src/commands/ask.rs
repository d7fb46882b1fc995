use crate::commands::renderer::OutputRenderer;
use crate::config::AppConfig;
use chrono::NaiveDate;
use paperrag_api::Client;
use paperrag_api::models::AskRequest;
use paperrag_shared::local_store::LocalStore;

pub struct AskArgs {
    pub question: String,
    /// `None` falls back to the stored preference.
    pub use_ai: Option<bool>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub correspondent: Option<String>,
    pub json: bool,
}

pub async fn run_ask(config: AppConfig, args: AskArgs) -> Result<(), String> {
    let question = args.question.trim();
    // Empty questions are a no-op, not an error.
    if question.is_empty() {
        return Ok(());
    }

    let use_ai = args
        .use_ai
        .unwrap_or_else(|| LocalStore::load_preferences().use_ai);

    let mut request = AskRequest::new(question, use_ai);
    if let Some(from_date) = args.from_date {
        request = request.with_from_date(from_date);
    }
    if let Some(to_date) = args.to_date {
        request = request.with_to_date(to_date);
    }
    if let Some(correspondent) = args.correspondent {
        request = request.with_correspondent(correspondent);
    }

    let client = Client::new(&config.into())?;
    let response = client.ask(&request).await?;
    OutputRenderer::new(args.json).render_answer(&response)
}
