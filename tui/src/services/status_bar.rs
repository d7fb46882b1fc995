//! Status header: connectivity indicator plus one chip per subsystem.

use crate::app::AppState;
use paperrag_shared::models::status::{BadgeTone, Connectivity};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, layout::Rect};

pub fn connectivity_color(connectivity: Connectivity) -> Color {
    match connectivity {
        Connectivity::Connecting => Color::Yellow,
        Connectivity::Offline => Color::LightRed,
        Connectivity::Indexing => Color::Yellow,
        Connectivity::Online => Color::LightGreen,
    }
}

pub fn badge_color(tone: BadgeTone) -> Color {
    match tone {
        BadgeTone::Success => Color::LightGreen,
        BadgeTone::Warning => Color::Yellow,
        BadgeTone::Danger => Color::LightRed,
        BadgeTone::Muted => Color::DarkGray,
    }
}

pub fn render_status_header(f: &mut Frame, area: Rect, state: &AppState) {
    let indicator_label = state
        .status
        .as_ref()
        .map(|s| s.derived().label())
        .unwrap_or(state.connectivity.label());

    let mut top = vec![
        Span::styled(
            "● ",
            Style::default().fg(connectivity_color(state.connectivity)),
        ),
        Span::styled(
            indicator_label,
            Style::default()
                .fg(connectivity_color(state.connectivity))
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(model) = state.status.as_ref().and_then(|s| s.ai_model.as_deref()) {
        top.push(Span::styled(
            format!("  {}", model),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if state.use_ai {
        top.push(Span::styled(
            "  AI on",
            Style::default().fg(Color::LightMagenta),
        ));
    }

    let mut chips: Vec<Span<'static>> = Vec::new();
    for badge in &state.badges {
        if !chips.is_empty() {
            chips.push(Span::raw(" "));
        }
        chips.push(Span::styled(
            format!("[{}: {}]", badge.label, badge.value),
            Style::default().fg(badge_color(badge.tone)),
        ));
    }

    let lines = vec![Line::from(top), Line::from(chips)];
    f.render_widget(Paragraph::new(lines), area);
}
