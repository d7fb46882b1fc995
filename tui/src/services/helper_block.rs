use crate::app::AppState;
use crate::services::message::Message;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn get_paperrag_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub fn push_error_message(state: &mut AppState, text: impl Into<String>) {
    state.messages.push(Message::error(text.into()));
    state.stay_at_bottom = true;
}

pub fn push_notice_message(state: &mut AppState, text: impl Into<String>) {
    state.messages.push(Message::info(text.into()));
    state.stay_at_bottom = true;
}

/// System messages carry the green block marker so trigger outcomes stand
/// out from assistant prose.
pub fn push_system_message(state: &mut AppState, text: impl Into<String>) {
    let styled_line = Line::from(vec![
        Span::styled("█ ", Style::default().fg(Color::LightGreen)),
        Span::raw(text.into()),
    ]);
    state.messages.push(Message::styled(styled_line));
    state.stay_at_bottom = true;
}

pub fn spinner_line(frame: usize) -> Line<'static> {
    let glyph = SPINNER_FRAMES[frame % SPINNER_FRAMES.len()];
    Line::from(vec![
        Span::styled(glyph.to_string(), Style::default().fg(Color::LightMagenta)),
        Span::styled(" Thinking…", Style::default().fg(Color::DarkGray)),
    ])
}

pub fn welcome_messages(state: &mut AppState) {
    let version = get_paperrag_version();
    let lines = vec![
        Line::from(vec![Span::styled(
            format!("Paperrag v{}", version),
            Style::default()
                .fg(Color::Reset)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from("Ask questions about your document archive."),
        Line::from(Span::styled(
            "Type / to list commands · Ctrl+C twice to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    state.messages.push(Message::styled_block(lines));
}

/// One-time quick tour, shown until the user has seen it once.
pub fn push_tour_message(state: &mut AppState) {
    let lines = vec![
        Line::from(vec![Span::styled(
            "Quick tour",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from("  L The header shows backend health; chat unlocks when it reads Online."),
        Line::from("  L /check asks the backend to look for new documents."),
        Line::from("  L /index rebuilds the document index in the background."),
        Line::from("  L /ai toggles AI-generated answers; /sources expands citations."),
        Line::from(""),
    ];
    state.messages.push(Message::styled_block(lines));
}

pub fn push_help_message(state: &mut AppState) {
    let mut lines = vec![Line::from(vec![Span::styled(
        "Commands",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )])];
    for helper in &state.helpers {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<10}", helper.command),
                Style::default().fg(Color::LightBlue),
            ),
            Span::styled(
                helper.description.to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    state.messages.push(Message::styled_block(lines));
    state.stay_at_bottom = true;
}

/// Status block for the `/status` command: indicator plus one line per
/// badge, mirroring the header.
pub fn push_status_message(state: &mut AppState) {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            "Backend: ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            state
                .status
                .as_ref()
                .map(|s| s.derived().label())
                .unwrap_or(state.connectivity.label()),
            Style::default().fg(crate::services::status_bar::connectivity_color(
                state.connectivity,
            )),
        ),
    ])];
    for badge in &state.badges {
        lines.push(Line::from(vec![
            Span::raw(format!("  L {}: ", badge.label)),
            Span::styled(
                badge.value.clone(),
                Style::default().fg(crate::services::status_bar::badge_color(badge.tone)),
            ),
        ]));
    }
    if let Some(model) = state.status.as_ref().and_then(|s| s.ai_model.clone()) {
        lines.push(Line::from(Span::styled(
            format!("  L Model: {}", model),
            Style::default().fg(Color::DarkGray),
        )));
    }
    state.messages.push(Message::styled_block(lines));
    state.stay_at_bottom = true;
}
