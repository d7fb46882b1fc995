//! Slash commands.
//!
//! Single source of truth for the commands reachable from direct input and
//! the helper dropdown.

use crate::app::{AppState, HelperCommand, OutputEvent};
use crate::services::helper_block::{
    push_error_message, push_help_message, push_notice_message, push_status_message,
    push_system_message,
};
use crate::services::message::MessageContent;
use tokio::sync::mpsc::Sender;

pub fn built_in_helpers() -> Vec<HelperCommand> {
    vec![
        HelperCommand {
            command: "/ai",
            description: "Toggle AI-generated answers on or off",
        },
        HelperCommand {
            command: "/sources",
            description: "Expand or collapse the citations of the last answer",
        },
        HelperCommand {
            command: "/check",
            description: "Check the index for new or changed documents",
        },
        HelperCommand {
            command: "/index",
            description: "Rebuild the document index in the background",
        },
        HelperCommand {
            command: "/status",
            description: "Show backend status and badges",
        },
        HelperCommand {
            command: "/clear",
            description: "Clear the conversation",
        },
        HelperCommand {
            command: "/help",
            description: "Show available commands",
        },
        HelperCommand {
            command: "/quit",
            description: "Exit paperrag",
        },
    ]
}

pub fn filter_helpers(helpers: &[HelperCommand], input: &str) -> Vec<HelperCommand> {
    helpers
        .iter()
        .filter(|h| h.command.starts_with(input.trim()))
        .copied()
        .collect()
}

pub fn execute_command(state: &mut AppState, command: &str, output_tx: &Sender<OutputEvent>) {
    match command {
        "/ai" => {
            state.use_ai = !state.use_ai;
            push_system_message(
                state,
                if state.use_ai {
                    "AI answers enabled"
                } else {
                    "AI answers disabled"
                },
            );
            let _ = output_tx.try_send(OutputEvent::SetUseAi(state.use_ai));
        }
        "/sources" => {
            let toggled = state.messages.iter_mut().rev().find_map(|m| {
                if let MessageContent::Sources { show_all, .. } = &mut m.content {
                    *show_all = !*show_all;
                    Some(())
                } else {
                    None
                }
            });
            if toggled.is_none() {
                push_notice_message(state, "No sources to show yet");
            }
        }
        "/check" => {
            if state.check_in_flight {
                push_notice_message(state, "A check is already running");
                return;
            }
            state.check_in_flight = true;
            push_system_message(state, "Checking index for updates…");
            let _ = output_tx.try_send(OutputEvent::CheckIndex);
        }
        "/index" => {
            if state.index_in_flight {
                push_notice_message(state, "Indexing was already requested");
                return;
            }
            state.index_in_flight = true;
            push_system_message(state, "Requesting index rebuild…");
            let _ = output_tx.try_send(OutputEvent::StartIndex);
        }
        "/status" => {
            push_status_message(state);
            let _ = output_tx.try_send(OutputEvent::RequestStatusCheck);
        }
        "/clear" => {
            state.messages.clear();
            state.scroll = 0;
            state.stay_at_bottom = true;
            push_notice_message(state, "Conversation cleared");
        }
        "/help" => push_help_message(state),
        "/quit" => state.should_quit = true,
        other => push_error_message(state, format!("Unknown command: {}", other)),
    }
}
