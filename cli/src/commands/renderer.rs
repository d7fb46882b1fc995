//! One-shot output rendering for non-interactive subcommands.

use paperrag_api::models::{AnalyzeResponse, AskResponse, DocumentSummary, Tag};
use paperrag_shared::models::chat::{ChatTurn, Source};
use paperrag_shared::models::status::RagStatus;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub struct OutputRenderer {
    format: OutputFormat,
}

impl OutputRenderer {
    pub fn new(json: bool) -> Self {
        OutputRenderer {
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }

    pub fn render_status(&self, status: &RagStatus) -> Result<(), String> {
        self.emit(status, || format_status(status))
    }

    pub fn render_answer(&self, response: &AskResponse) -> Result<(), String> {
        self.emit(response, || format_answer(response))
    }

    pub fn render_tags(&self, tags: &[Tag]) -> Result<(), String> {
        self.emit(&tags, || {
            tags.iter()
                .map(|t| format!("{:>5}  {}", t.id, t.name))
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    pub fn render_documents(&self, documents: &[DocumentSummary]) -> Result<(), String> {
        self.emit(&documents, || {
            documents
                .iter()
                .map(|d| {
                    format!(
                        "{:>5}  {}  [{}]",
                        d.id,
                        d.title,
                        d.correspondent.as_deref().unwrap_or("-")
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    pub fn render_analysis(&self, analysis: &AnalyzeResponse) -> Result<(), String> {
        self.emit(analysis, || {
            let mut out = Vec::new();
            if let Some(title) = &analysis.title {
                out.push(format!("Title: {}", title));
            }
            if !analysis.tags.is_empty() {
                out.push(format!("Tags: {}", analysis.tags.join(", ")));
            }
            if let Some(correspondent) = &analysis.correspondent {
                out.push(format!("Correspondent: {}", correspondent));
            }
            if out.is_empty() {
                out.push("No suggestions".to_string());
            }
            out.join("\n")
        })
    }

    fn emit<T: Serialize>(
        &self,
        value: &T,
        text: impl FnOnce() -> String,
    ) -> Result<(), String> {
        match self.format {
            OutputFormat::Json => {
                let body = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
                println!("{}", body);
            }
            OutputFormat::Text => println!("{}", text()),
        }
        Ok(())
    }
}

pub(crate) fn format_status(status: &RagStatus) -> String {
    let mut lines = vec![format!("Backend: {}", status.derived().label())];
    for badge in status.badges() {
        lines.push(format!("  {}: {}", badge.label, badge.value));
    }
    if let Some(model) = &status.ai_model {
        lines.push(format!("  Model: {}", model));
    }
    lines.join("\n")
}

pub(crate) fn format_answer(response: &AskResponse) -> String {
    let turn = ChatTurn::assistant(
        response.answer.clone(),
        response.citations(),
        response.model.clone(),
    );
    let mut out = turn.text;
    if let Some(model) = &turn.model_used {
        out.push_str(&format!("\n\nanswered by {}", model));
    }
    if !turn.sources.is_empty() {
        out.push_str(&format!("\n\nSources ({})", turn.sources.len()));
        for source in &turn.sources {
            out.push_str(&format_source(source));
        }
    }
    out
}

fn format_source(source: &Source) -> String {
    format!(
        "\n  [{}] {}  {} · {}\n      {}",
        source.index, source.title, source.correspondent, source.date, source.snippet
    )
}
