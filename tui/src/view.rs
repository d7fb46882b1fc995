use crate::app::AppState;
use crate::services::helper_block::spinner_line;
use crate::services::message::get_wrapped_message_lines;
use crate::services::status_bar::render_status_header;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

const HEADER_HEIGHT: u16 = 3;
const INPUT_HEIGHT: u16 = 3;

pub fn view(f: &mut Frame, state: &AppState) {
    let dropdown_showing = state.show_helper_dropdown
        && !state.filtered_helpers.is_empty()
        && state.input.starts_with('/');
    let dropdown_height = if dropdown_showing {
        state.filtered_helpers.len() as u16
    } else {
        0
    };
    let hint_height: u16 = if dropdown_showing { 0 } else { 1 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(dropdown_height),
            Constraint::Length(hint_height),
        ])
        .split(f.area());

    render_status_header(f, chunks[0], state);
    render_messages(f, chunks[1], state);
    render_input(f, chunks[2], state);
    if dropdown_showing {
        render_helper_dropdown(f, chunks[3], state);
    } else {
        render_hint(f, chunks[4], state);
    }
}

fn render_messages(f: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
    let width = area.width.saturating_sub(1) as usize;
    let mut lines = get_wrapped_message_lines(&state.messages, width);
    if state.loading {
        lines.push(spinner_line(state.spinner_frame));
    }

    let height = area.height as usize;
    let max_scroll = lines.len().saturating_sub(height);
    let scroll = if state.stay_at_bottom {
        max_scroll
    } else {
        state.scroll.min(max_scroll)
    };

    let visible: Vec<Line<'static>> = lines.into_iter().skip(scroll).take(height).collect();
    f.render_widget(Paragraph::new(Text::from(visible)), area);
}

fn render_input(f: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
    let input = Paragraph::new(state.input.clone()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if state.loading {
                Color::DarkGray
            } else {
                Color::LightBlue
            })),
    );
    f.render_widget(input, area);

    let cursor_x = area.x
        + 1
        + state
            .input
            .chars()
            .take(state.cursor_position)
            .map(|c| unicode_width::UnicodeWidthChar::width(c).unwrap_or(1) as u16)
            .sum::<u16>();
    f.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
}

fn render_helper_dropdown(f: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
    let lines: Vec<Line<'static>> = state
        .filtered_helpers
        .iter()
        .enumerate()
        .map(|(i, helper)| {
            let selected = i == state.helper_selected;
            let style = if selected {
                Style::default().fg(Color::Black).bg(Color::LightBlue)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(vec![
                Span::styled(format!(" {:<10}", helper.command), style),
                Span::styled(format!(" {}", helper.description), style),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(Text::from(lines)), area);
}

fn render_hint(f: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
    let hint = if state.connectivity.is_online() {
        "Enter to send · / for commands · PgUp/PgDn to scroll"
    } else {
        "Waiting for the backend · /status for details"
    };
    f.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))),
        area,
    );
}
