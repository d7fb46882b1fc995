use paperrag_shared::models::chat::Source;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use uuid::Uuid;

#[derive(Clone, Debug)]
pub enum MessageContent {
    Plain(String, Style),
    Styled(Line<'static>),
    StyledBlock(Vec<Line<'static>>),
    /// Citation list attached to the preceding assistant turn. Only the
    /// first entry is expanded until the user toggles `show_all`.
    Sources {
        sources: Vec<Source>,
        show_all: bool,
    },
}

#[derive(Clone, Debug)]
pub struct Message {
    pub id: Uuid,
    pub content: MessageContent,
}

impl Message {
    pub fn info(text: impl Into<String>) -> Self {
        Message {
            id: Uuid::new_v4(),
            content: MessageContent::Plain(text.into(), Style::default().fg(Color::DarkGray)),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Message {
            id: Uuid::new_v4(),
            content: MessageContent::Plain(
                format!("❯ {}", text.into()),
                Style::default().fg(Color::Rgb(180, 180, 180)),
            ),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Message {
            id: Uuid::new_v4(),
            content: MessageContent::Plain(text.into(), Style::default()),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Message {
            id: Uuid::new_v4(),
            content: MessageContent::Plain(text.into(), Style::default().fg(Color::LightRed)),
        }
    }

    pub fn styled(line: Line<'static>) -> Self {
        Message {
            id: Uuid::new_v4(),
            content: MessageContent::Styled(line),
        }
    }

    pub fn styled_block(lines: Vec<Line<'static>>) -> Self {
        Message {
            id: Uuid::new_v4(),
            content: MessageContent::StyledBlock(lines),
        }
    }

    pub fn sources(sources: Vec<Source>) -> Self {
        Message {
            id: Uuid::new_v4(),
            content: MessageContent::Sources {
                sources,
                show_all: false,
            },
        }
    }
}

/// Render every message to wrapped lines for the given area width.
pub fn get_wrapped_message_lines(messages: &[Message], width: usize) -> Vec<Line<'static>> {
    let width = width.max(8);
    let mut lines: Vec<Line<'static>> = Vec::new();
    for message in messages {
        match &message.content {
            MessageContent::Plain(text, style) => {
                for line in text.lines() {
                    if line.is_empty() {
                        lines.push(Line::from(""));
                        continue;
                    }
                    for wrapped in textwrap::wrap(line, width) {
                        lines.push(Line::from(Span::styled(wrapped.to_string(), *style)));
                    }
                }
                lines.push(Line::from(""));
            }
            MessageContent::Styled(line) => {
                lines.push(line.clone());
                lines.push(Line::from(""));
            }
            MessageContent::StyledBlock(block) => {
                lines.extend(block.iter().cloned());
                lines.push(Line::from(""));
            }
            MessageContent::Sources { sources, show_all } => {
                lines.extend(render_sources_lines(sources, *show_all, width));
                lines.push(Line::from(""));
            }
        }
    }
    lines
}

fn render_sources_lines(sources: &[Source], show_all: bool, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if sources.is_empty() {
        return lines;
    }

    lines.push(Line::from(Span::styled(
        format!("Sources ({})", sources.len()),
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD),
    )));

    let visible = if show_all { sources.len() } else { 1 };
    for source in sources.iter().take(visible) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  [{}] ", source.index),
                Style::default().fg(Color::LightBlue),
            ),
            Span::styled(
                source.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} · {}", source.correspondent, source.date),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        for wrapped in textwrap::wrap(&source.snippet, width.saturating_sub(6).max(8)) {
            lines.push(Line::from(Span::styled(
                format!("      {}", wrapped),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    if !show_all && sources.len() > 1 {
        lines.push(Line::from(Span::styled(
            format!("  +{} more · /sources to expand", sources.len() - 1),
            Style::default().fg(Color::DarkGray),
        )));
    } else if show_all && sources.len() > 1 {
        lines.push(Line::from(Span::styled(
            "  /sources to collapse".to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(index: usize) -> Source {
        Source {
            index,
            title: format!("Doc {}", index),
            snippet: "snippet text".to_string(),
            correspondent: "Acme".to_string(),
            date: "2024-01-01".to_string(),
        }
    }

    fn rendered_titles(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.clone().into_owned())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn collapsed_sources_show_only_first_entry() {
        let lines = render_sources_lines(&[source(1), source(2), source(3)], false, 80);
        let text = rendered_titles(&lines).join("\n");
        assert!(text.contains("Sources (3)"));
        assert!(text.contains("Doc 1"));
        assert!(!text.contains("Doc 2"));
        assert!(text.contains("+2 more"));
    }

    #[test]
    fn expanded_sources_show_every_entry() {
        let lines = render_sources_lines(&[source(1), source(2), source(3)], true, 80);
        let text = rendered_titles(&lines).join("\n");
        assert!(text.contains("Doc 1"));
        assert!(text.contains("Doc 2"));
        assert!(text.contains("Doc 3"));
        assert!(!text.contains("more"));
    }

    #[test]
    fn single_source_has_no_toggle_hint() {
        let lines = render_sources_lines(&[source(1)], false, 80);
        let text = rendered_titles(&lines).join("\n");
        assert!(!text.contains("/sources"));
    }

    #[test]
    fn plain_messages_wrap_to_width() {
        let messages = vec![Message::assistant("a".repeat(30))];
        let lines = get_wrapped_message_lines(&messages, 10);
        // 30 chars at width 10 plus the trailing blank separator.
        assert_eq!(lines.len(), 4);
    }
}
