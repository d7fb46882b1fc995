mod app;
mod event;
mod terminal;
mod view;

pub use app::{AppState, HelperCommand, InputEvent, OutputEvent};
pub use ratatui::style::Color;

pub mod services;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::{execute, terminal::EnterAlternateScreen};
pub use event::map_crossterm_event_to_input_event;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
pub use terminal::TerminalGuard;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::time::{Duration, interval};
pub use view::view;

/// Drive the chat interface until the user quits.
///
/// `input_rx` carries key events and backend responses; `output_tx` carries
/// network requests back to the caller, which owns the API client. The
/// shutdown broadcast fires once on exit so the caller can stop its tasks.
pub async fn run_tui(
    mut input_rx: Receiver<InputEvent>,
    output_tx: Sender<OutputEvent>,
    shutdown_tx: tokio::sync::broadcast::Sender<()>,
    use_ai: bool,
    show_tour: bool,
) -> io::Result<()> {
    let _guard = TerminalGuard;
    crossterm::terminal::enable_raw_mode()?;
    execute!(
        std::io::stdout(),
        EnterAlternateScreen,
        EnableBracketedPaste
    )?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let mut state = AppState::new(use_ai);
    services::helper_block::welcome_messages(&mut state);
    if show_tour {
        services::helper_block::push_tour_message(&mut state);
        if output_tx.try_send(OutputEvent::MarkTourCompleted).is_err() {
            log::warn!("Failed to mark the tour as completed");
        }
    }

    // Internal channel for key events read off the blocking crossterm thread
    let (internal_tx, mut internal_rx) = tokio::sync::mpsc::channel::<InputEvent>(100);
    std::thread::spawn(move || {
        loop {
            if let Ok(event) = crossterm::event::read() {
                if let Some(event) = event::map_crossterm_event_to_input_event(event) {
                    if internal_tx.blocking_send(event).is_err() {
                        break;
                    }
                }
            }
        }
    });

    let mut spinner_interval = interval(Duration::from_millis(100));
    terminal.draw(|f| view::view(f, &state))?;
    loop {
        // Expire the double Ctrl+C window
        if state.ctrl_c_pressed_once
            && let Some(timer) = state.ctrl_c_timer
            && std::time::Instant::now() > timer
        {
            state.ctrl_c_pressed_once = false;
            state.ctrl_c_timer = None;
        }

        let message_area_height = terminal.size()?.height.saturating_sub(7) as usize;
        tokio::select! {
            Some(event) = input_rx.recv() => {
                services::update::update(&mut state, event, message_area_height, &output_tx);
            }
            Some(event) = internal_rx.recv() => {
                services::update::update(&mut state, event, message_area_height, &output_tx);
            }
            _ = spinner_interval.tick() => {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
            }
        }
        if state.should_quit {
            break;
        }
        terminal.draw(|f| view::view(f, &state))?;
    }

    let _ = shutdown_tx.send(());
    crossterm::terminal::disable_raw_mode()?;
    execute!(
        std::io::stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    Ok(())
}
