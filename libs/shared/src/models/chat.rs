//! Chat conversation model.
//!
//! Turns are immutable once rendered; the conversation history lives in the
//! view, not in a durable structure.

use serde::{Deserialize, Serialize};

pub const NO_EXCERPT_PLACEHOLDER: &str = "No excerpt available";
pub const UNKNOWN_PLACEHOLDER: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// Read-only citation metadata attached to one assistant turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// 1-based position in the answer's citation list.
    pub index: usize,
    pub title: String,
    pub snippet: String,
    pub correspondent: String,
    pub date: String,
}

impl Source {
    /// Build a citation from optional wire fields, degrading absent values
    /// to placeholder text instead of failing.
    pub fn from_parts(
        index: usize,
        title: Option<String>,
        snippet: Option<String>,
        correspondent: Option<String>,
        date: Option<String>,
    ) -> Self {
        let non_empty = |v: Option<String>, placeholder: &str| {
            v.filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| placeholder.to_string())
        };
        Source {
            index,
            title: non_empty(title, UNKNOWN_PLACEHOLDER),
            snippet: non_empty(snippet, NO_EXCERPT_PLACEHOLDER),
            correspondent: non_empty(correspondent, UNKNOWN_PLACEHOLDER),
            date: non_empty(date, UNKNOWN_PLACEHOLDER),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
    pub sources: Vec<Source>,
    pub model_used: Option<String>,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        ChatTurn {
            role: Role::User,
            text: text.into(),
            sources: Vec::new(),
            model_used: None,
        }
    }

    pub fn assistant(
        text: impl Into<String>,
        sources: Vec<Source>,
        model_used: Option<String>,
    ) -> Self {
        ChatTurn {
            role: Role::Assistant,
            text: normalize_answer(&text.into()),
            sources,
            model_used,
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        ChatTurn {
            role: Role::System,
            text: text.into(),
            sources: Vec::new(),
            model_used: None,
        }
    }
}

/// Normalize an answer for terminal rendering: CRLF to LF, trailing
/// whitespace stripped per line, runs of blank lines collapsed to one
/// paragraph break.
pub fn normalize_answer(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0usize;
    for line in text.replace("\r\n", "\n").replace('\r', "\n").lines() {
        let line = line.trim_end();
        if line.is_empty() {
            blank_run += 1;
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
            if blank_run > 0 {
                out.push('\n');
            }
        }
        blank_run = 0;
        out.push_str(line);
    }
    out
}
