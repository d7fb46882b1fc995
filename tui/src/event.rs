use crate::app::InputEvent;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

pub fn map_crossterm_event_to_input_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return None;
            }
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(InputEvent::AttemptQuit)
                }
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(InputEvent::InputDeleteLine)
                }
                KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(InputEvent::InputCursorStart)
                }
                KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(InputEvent::InputCursorEnd)
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(InputEvent::InputChanged(c))
                }
                KeyCode::Backspace => Some(InputEvent::InputBackspace),
                KeyCode::Enter => Some(InputEvent::InputSubmitted),
                KeyCode::Tab => Some(InputEvent::Tab),
                KeyCode::Esc => Some(InputEvent::HandleEsc),
                KeyCode::Left => Some(InputEvent::CursorLeft),
                KeyCode::Right => Some(InputEvent::CursorRight),
                KeyCode::Home => Some(InputEvent::InputCursorStart),
                KeyCode::End => Some(InputEvent::InputCursorEnd),
                KeyCode::Up => Some(InputEvent::DropdownUp),
                KeyCode::Down => Some(InputEvent::DropdownDown),
                KeyCode::PageUp => Some(InputEvent::PageUp),
                KeyCode::PageDown => Some(InputEvent::PageDown),
                _ => None,
            }
        }
        Event::Paste(text) => Some(InputEvent::HandlePaste(text)),
        Event::Resize(w, h) => Some(InputEvent::Resized(w, h)),
        _ => None,
    }
}
