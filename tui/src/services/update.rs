//! Event handling for the chat controller.
//!
//! All mutable state lives in [`AppState`] and is touched only here, from
//! the TUI task. Requests that need the network are handed to the CLI chat
//! loop as [`OutputEvent`]s.

use crate::app::{AppState, InputEvent, OutputEvent};
use crate::services::commands::{execute_command, filter_helpers};
use crate::services::helper_block::{push_error_message, push_notice_message, push_system_message};
use crate::services::message::Message;
use paperrag_api::models::AskRequest;
use paperrag_shared::models::chat::normalize_answer;
use paperrag_shared::models::status::{Badge, Connectivity, offline_badges};
use tokio::sync::mpsc::Sender;

const CTRL_C_WINDOW: std::time::Duration = std::time::Duration::from_secs(2);

pub fn update(
    state: &mut AppState,
    event: InputEvent,
    message_area_height: usize,
    output_tx: &Sender<OutputEvent>,
) {
    match event {
        // ========== Poller results ==========
        InputEvent::StatusUpdate { seq, status } => {
            // Responses can resolve out of issue order; only ever move the
            // indicator forward in poll time.
            if seq <= state.last_status_seq {
                return;
            }
            state.last_status_seq = seq;
            match status {
                Some(status) => {
                    state.connectivity = status.connectivity();
                    state.badges = status.badges();
                    state.status = Some(status);
                }
                None => {
                    state.connectivity = Connectivity::Offline;
                    state.badges = offline_badges();
                    state.status = None;
                }
            }
        }

        // ========== Ask results ==========
        InputEvent::AssistantAnswer {
            text,
            sources,
            model,
        } => {
            state.loading = false;
            state.messages.push(Message::assistant(normalize_answer(&text)));
            if let Some(model) = model {
                push_notice_message(state, format!("answered by {}", model));
            }
            if !sources.is_empty() {
                state.messages.push(Message::sources(sources));
            }
            state.stay_at_bottom = true;
        }
        InputEvent::AskFailed(message) => {
            state.loading = false;
            push_error_message(state, format!("Error: {}", message));
            state.connectivity = Connectivity::Offline;
            state.badges = offline_badges();
            state.status = None;
            let _ = output_tx.try_send(OutputEvent::RequestStatusCheck);
        }

        // ========== Indexing trigger results ==========
        InputEvent::IndexCheckCompleted(result) => {
            state.check_in_flight = false;
            match result {
                Ok(message) => {
                    push_system_message(state, message);
                    state.connectivity = Connectivity::Online;
                }
                Err(message) => {
                    push_error_message(state, format!("Error: {}", message));
                    state.connectivity = Connectivity::Offline;
                    state.badges = offline_badges();
                    state.status = None;
                }
            }
        }
        InputEvent::IndexStartCompleted(result) => {
            state.index_in_flight = false;
            match result {
                Ok(status_text) => {
                    push_system_message(
                        state,
                        if status_text.is_empty() {
                            "Indexing started".to_string()
                        } else {
                            status_text
                        },
                    );
                    state.connectivity = Connectivity::Indexing;
                    if let Some(status) = &mut state.status {
                        status.indexing = true;
                        state.badges = status.badges();
                    } else {
                        state.badges.retain(|b| b.label != "Indexing");
                        state.badges.push(Badge::warning("Indexing", "In Progress"));
                    }
                }
                Err(message) => {
                    push_error_message(state, format!("Error: {}", message));
                    state.connectivity = Connectivity::Offline;
                    state.badges = offline_badges();
                    state.status = None;
                }
            }
        }

        // ========== Input editing ==========
        InputEvent::InputChanged(c) => {
            let byte_idx = char_to_byte_index(&state.input, state.cursor_position);
            state.input.insert(byte_idx, c);
            state.cursor_position += 1;
            refresh_helper_dropdown(state);
        }
        InputEvent::InputBackspace => {
            if state.cursor_position > 0 {
                let byte_idx = char_to_byte_index(&state.input, state.cursor_position - 1);
                state.input.remove(byte_idx);
                state.cursor_position -= 1;
            }
            refresh_helper_dropdown(state);
        }
        InputEvent::InputDeleteLine => {
            state.input.clear();
            state.cursor_position = 0;
            state.show_helper_dropdown = false;
        }
        InputEvent::HandlePaste(text) => {
            for c in text.chars().filter(|c| *c != '\r') {
                let byte_idx = char_to_byte_index(&state.input, state.cursor_position);
                state.input.insert(byte_idx, c);
                state.cursor_position += 1;
            }
            refresh_helper_dropdown(state);
        }
        InputEvent::CursorLeft => {
            state.cursor_position = state.cursor_position.saturating_sub(1);
        }
        InputEvent::CursorRight => {
            state.cursor_position = (state.cursor_position + 1).min(state.input.chars().count());
        }
        InputEvent::InputCursorStart => state.cursor_position = 0,
        InputEvent::InputCursorEnd => state.cursor_position = state.input.chars().count(),

        // ========== Helper dropdown ==========
        InputEvent::DropdownUp => {
            if state.show_helper_dropdown {
                state.helper_selected = state.helper_selected.saturating_sub(1);
            }
        }
        InputEvent::DropdownDown => {
            if state.show_helper_dropdown && !state.filtered_helpers.is_empty() {
                state.helper_selected =
                    (state.helper_selected + 1).min(state.filtered_helpers.len() - 1);
            }
        }
        InputEvent::Tab => {
            if state.show_helper_dropdown
                && let Some(helper) = state.filtered_helpers.get(state.helper_selected)
            {
                state.input = helper.command.to_string();
                state.cursor_position = state.input.chars().count();
                refresh_helper_dropdown(state);
            }
        }

        InputEvent::InputSubmitted => handle_submit(state, output_tx),

        // ========== Scrolling ==========
        InputEvent::ScrollUp => {
            state.scroll = state.scroll.saturating_sub(1);
            state.stay_at_bottom = false;
        }
        InputEvent::ScrollDown => {
            state.scroll = state.scroll.saturating_add(1);
        }
        InputEvent::PageUp => {
            state.scroll = state.scroll.saturating_sub(message_area_height.max(1));
            state.stay_at_bottom = false;
        }
        InputEvent::PageDown => {
            state.scroll = state.scroll.saturating_add(message_area_height.max(1));
        }

        InputEvent::HandleEsc => {
            if state.show_helper_dropdown {
                state.show_helper_dropdown = false;
            } else {
                state.stay_at_bottom = true;
            }
        }
        InputEvent::AttemptQuit => {
            if state.ctrl_c_pressed_once {
                state.should_quit = true;
            } else {
                state.ctrl_c_pressed_once = true;
                state.ctrl_c_timer = Some(std::time::Instant::now() + CTRL_C_WINDOW);
                push_notice_message(state, "Press Ctrl+C again to quit");
            }
        }
        InputEvent::Quit => state.should_quit = true,
        InputEvent::Resized(_, _) => {}
    }
}

/// Gate, then send. The user turn is appended before the request is issued;
/// the answer or error arrives later as an [`InputEvent`].
fn handle_submit(state: &mut AppState, output_tx: &Sender<OutputEvent>) {
    if state.show_helper_dropdown
        && let Some(helper) = state.filtered_helpers.get(state.helper_selected)
    {
        let command = helper.command;
        clear_input(state);
        execute_command(state, command, output_tx);
        return;
    }

    let question = state.input.trim().to_string();
    if question.starts_with('/') {
        clear_input(state);
        execute_command(state, &question, output_tx);
        return;
    }
    if question.is_empty() {
        clear_input(state);
        return;
    }
    if !state.connectivity.is_online() {
        push_error_message(
            state,
            format!(
                "Assistant not ready ({}) — wait for the index or run /status",
                state.connectivity.label()
            ),
        );
        return;
    }
    if state.loading {
        push_notice_message(state, "Still answering the previous question");
        return;
    }

    state.messages.push(Message::user(&question));
    state.loading = true;
    state.stay_at_bottom = true;
    let _ = output_tx.try_send(OutputEvent::Ask(AskRequest::new(question, state.use_ai)));
    clear_input(state);
}

fn clear_input(state: &mut AppState) {
    state.input.clear();
    state.cursor_position = 0;
    state.show_helper_dropdown = false;
    state.helper_selected = 0;
}

fn refresh_helper_dropdown(state: &mut AppState) {
    if state.input.starts_with('/') {
        state.filtered_helpers = filter_helpers(&state.helpers, &state.input);
        state.show_helper_dropdown = !state.filtered_helpers.is_empty();
        if state.helper_selected >= state.filtered_helpers.len() {
            state.helper_selected = 0;
        }
    } else {
        state.show_helper_dropdown = false;
        state.filtered_helpers.clear();
    }
}

fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::services::message::MessageContent;
    use paperrag_shared::models::chat::Source;
    use paperrag_shared::models::status::RagStatus;
    use tokio::sync::mpsc;

    fn channel() -> (Sender<OutputEvent>, mpsc::Receiver<OutputEvent>) {
        mpsc::channel(16)
    }

    fn online_state() -> AppState {
        let mut state = AppState::new(false);
        state.connectivity = Connectivity::Online;
        state
    }

    fn type_line(state: &mut AppState, text: &str, tx: &Sender<OutputEvent>) {
        for c in text.chars() {
            update(state, InputEvent::InputChanged(c), 20, tx);
        }
    }

    fn ready_status(documents_count: u64) -> RagStatus {
        RagStatus {
            server_up: true,
            data_loaded: true,
            index_ready: true,
            indexing: false,
            documents_count,
            ..Default::default()
        }
    }

    #[test]
    fn empty_question_issues_no_request() {
        let (tx, mut rx) = channel();
        let mut state = online_state();
        type_line(&mut state, "   ", &tx);
        update(&mut state, InputEvent::InputSubmitted, 20, &tx);

        assert!(rx.try_recv().is_err());
        assert!(state.messages.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn send_while_not_online_shows_error_and_no_request() {
        let (tx, mut rx) = channel();
        let mut state = AppState::new(false);
        assert_eq!(state.connectivity, Connectivity::Connecting);
        type_line(&mut state, "where is my invoice?", &tx);
        update(&mut state, InputEvent::InputSubmitted, 20, &tx);

        assert!(rx.try_recv().is_err());
        assert_eq!(state.messages.len(), 1);
        // The question is kept so the user can retry once online.
        assert_eq!(state.input, "where is my invoice?");
    }

    #[test]
    fn send_appends_user_turn_and_issues_request() {
        let (tx, mut rx) = channel();
        let mut state = online_state();
        state.use_ai = true;
        type_line(&mut state, "where is my invoice?", &tx);
        update(&mut state, InputEvent::InputSubmitted, 20, &tx);

        match rx.try_recv().unwrap() {
            OutputEvent::Ask(req) => {
                assert_eq!(req.question, "where is my invoice?");
                assert!(req.use_ai);
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(state.messages.len(), 1);
        assert!(state.loading);
        assert!(state.input.is_empty());
    }

    #[test]
    fn second_send_while_loading_is_refused() {
        let (tx, mut rx) = channel();
        let mut state = online_state();
        type_line(&mut state, "first", &tx);
        update(&mut state, InputEvent::InputSubmitted, 20, &tx);
        assert!(matches!(rx.try_recv().unwrap(), OutputEvent::Ask(_)));

        type_line(&mut state, "second", &tx);
        update(&mut state, InputEvent::InputSubmitted, 20, &tx);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn answer_appends_one_assistant_turn_with_collapsed_sources() {
        let (tx, _rx) = channel();
        let mut state = online_state();
        state.loading = true;

        let sources = vec![
            Source::from_parts(1, Some("Doc A".into()), None, None, None),
            Source::from_parts(2, Some("Doc B".into()), None, None, None),
            Source::from_parts(3, Some("Doc C".into()), None, None, None),
        ];
        update(
            &mut state,
            InputEvent::AssistantAnswer {
                text: "Found it.\r\n\r\n\r\nIt is filed under taxes.".into(),
                sources,
                model: Some("gpt-4o-mini".into()),
            },
            20,
            &tx,
        );

        assert!(!state.loading);
        let assistant_turns: Vec<_> = state
            .messages
            .iter()
            .filter_map(|m| match &m.content {
                MessageContent::Plain(text, _) if !text.starts_with('❯') => Some(text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(assistant_turns.len(), 2); // answer + model annotation
        assert_eq!(assistant_turns[0], "Found it.\n\nIt is filed under taxes.");

        let sources_blocks: Vec<_> = state
            .messages
            .iter()
            .filter_map(|m| match &m.content {
                MessageContent::Sources { sources, show_all } => Some((sources.len(), *show_all)),
                _ => None,
            })
            .collect();
        assert_eq!(sources_blocks, vec![(3, false)]);
    }

    #[test]
    fn sources_command_toggles_show_all() {
        let (tx, _rx) = channel();
        let mut state = online_state();
        state.messages.push(Message::sources(vec![
            Source::from_parts(1, None, None, None, None),
            Source::from_parts(2, None, None, None, None),
        ]));

        execute_command(&mut state, "/sources", &tx);
        assert!(matches!(
            state.messages.last().unwrap().content,
            MessageContent::Sources { show_all: true, .. }
        ));
        execute_command(&mut state, "/sources", &tx);
        assert!(matches!(
            state.messages.last().unwrap().content,
            MessageContent::Sources {
                show_all: false,
                ..
            }
        ));
    }

    #[test]
    fn ask_failure_downgrades_and_requests_immediate_poll() {
        let (tx, mut rx) = channel();
        let mut state = online_state();
        state.loading = true;
        state.badges = ready_status(10).badges();

        update(
            &mut state,
            InputEvent::AskFailed("connection refused".into()),
            20,
            &tx,
        );

        assert!(!state.loading);
        assert_eq!(state.connectivity, Connectivity::Offline);
        assert_eq!(state.badges, offline_badges());
        let banner = state
            .messages
            .iter()
            .find_map(|m| match &m.content {
                MessageContent::Plain(text, _) => Some(text.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(banner, "Error: connection refused");
        assert!(matches!(
            rx.try_recv().unwrap(),
            OutputEvent::RequestStatusCheck
        ));
    }

    #[test]
    fn status_update_applies_ready_badges() {
        let (tx, _rx) = channel();
        let mut state = AppState::new(false);
        update(
            &mut state,
            InputEvent::StatusUpdate {
                seq: 1,
                status: Some(ready_status(42)),
            },
            20,
            &tx,
        );

        assert_eq!(state.connectivity, Connectivity::Online);
        assert!(
            state
                .badges
                .iter()
                .any(|b| b.label == "Documents" && b.value == "42")
        );
    }

    #[test]
    fn stale_status_results_are_dropped() {
        let (tx, _rx) = channel();
        let mut state = AppState::new(false);
        update(
            &mut state,
            InputEvent::StatusUpdate {
                seq: 3,
                status: Some(ready_status(42)),
            },
            20,
            &tx,
        );
        // An older in-flight poll resolving late must not regress the
        // indicator.
        update(
            &mut state,
            InputEvent::StatusUpdate {
                seq: 2,
                status: None,
            },
            20,
            &tx,
        );

        assert_eq!(state.connectivity, Connectivity::Online);
        assert_eq!(state.last_status_seq, 3);
    }

    #[test]
    fn failed_poll_zeroes_badges() {
        let (tx, _rx) = channel();
        let mut state = AppState::new(false);
        update(
            &mut state,
            InputEvent::StatusUpdate {
                seq: 1,
                status: Some(ready_status(5)),
            },
            20,
            &tx,
        );
        update(
            &mut state,
            InputEvent::StatusUpdate {
                seq: 2,
                status: None,
            },
            20,
            &tx,
        );

        assert_eq!(state.connectivity, Connectivity::Offline);
        assert_eq!(state.badges, offline_badges());
        assert!(state.status.is_none());
    }

    #[test]
    fn check_trigger_disables_until_completion() {
        let (tx, mut rx) = channel();
        let mut state = online_state();

        execute_command(&mut state, "/check", &tx);
        assert!(state.check_in_flight);
        assert!(matches!(rx.try_recv().unwrap(), OutputEvent::CheckIndex));

        // A second trigger while in flight is refused.
        execute_command(&mut state, "/check", &tx);
        assert!(rx.try_recv().is_err());

        update(
            &mut state,
            InputEvent::IndexCheckCompleted(Ok("2 new documents found".into())),
            20,
            &tx,
        );
        assert!(!state.check_in_flight);
        assert_eq!(state.connectivity, Connectivity::Online);
    }

    #[test]
    fn check_trigger_restores_on_failure() {
        let (tx, _rx) = channel();
        let mut state = online_state();
        execute_command(&mut state, "/check", &tx);
        update(
            &mut state,
            InputEvent::IndexCheckCompleted(Err("timeout".into())),
            20,
            &tx,
        );
        assert!(!state.check_in_flight);
        assert_eq!(state.connectivity, Connectivity::Offline);
        assert_eq!(state.badges, offline_badges());
    }

    #[test]
    fn start_indexing_sets_indexing_state_and_badge() {
        let (tx, mut rx) = channel();
        let mut state = online_state();
        state.status = Some(ready_status(7));
        state.badges = ready_status(7).badges();

        execute_command(&mut state, "/index", &tx);
        assert!(state.index_in_flight);
        assert!(matches!(rx.try_recv().unwrap(), OutputEvent::StartIndex));

        update(
            &mut state,
            InputEvent::IndexStartCompleted(Ok("indexing started".into())),
            20,
            &tx,
        );
        assert!(!state.index_in_flight);
        assert_eq!(state.connectivity, Connectivity::Indexing);
        assert!(
            state
                .badges
                .iter()
                .any(|b| b.label == "Indexing" && b.value == "In Progress")
        );
    }

    #[test]
    fn ai_command_toggles_and_persists() {
        let (tx, mut rx) = channel();
        let mut state = online_state();
        execute_command(&mut state, "/ai", &tx);
        assert!(state.use_ai);
        assert!(matches!(rx.try_recv().unwrap(), OutputEvent::SetUseAi(true)));
        execute_command(&mut state, "/ai", &tx);
        assert!(!state.use_ai);
        assert!(matches!(
            rx.try_recv().unwrap(),
            OutputEvent::SetUseAi(false)
        ));
    }

    #[test]
    fn slash_input_runs_command_instead_of_sending() {
        let (tx, mut rx) = channel();
        let mut state = online_state();
        type_line(&mut state, "/ai", &tx);
        assert!(state.show_helper_dropdown);
        update(&mut state, InputEvent::InputSubmitted, 20, &tx);

        assert!(matches!(rx.try_recv().unwrap(), OutputEvent::SetUseAi(true)));
        assert!(state.input.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn double_ctrl_c_quits() {
        let (tx, _rx) = channel();
        let mut state = AppState::new(false);
        update(&mut state, InputEvent::AttemptQuit, 20, &tx);
        assert!(!state.should_quit);
        update(&mut state, InputEvent::AttemptQuit, 20, &tx);
        assert!(state.should_quit);
    }

    #[test]
    fn unicode_input_edits_at_char_boundaries() {
        let (tx, _rx) = channel();
        let mut state = AppState::new(false);
        type_line(&mut state, "héllo", &tx);
        update(&mut state, InputEvent::CursorLeft, 20, &tx);
        update(&mut state, InputEvent::InputBackspace, 20, &tx);
        assert_eq!(state.input, "hélo");
    }
}
