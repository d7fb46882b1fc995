use paperrag_api::models::AskRequest;
use paperrag_shared::models::chat::Source;
use paperrag_shared::models::status::RagStatus;

/// Events flowing into the TUI controller: key input mapped by `event.rs`
/// plus responses relayed by the CLI chat loop.
#[derive(Debug)]
pub enum InputEvent {
    /// Result of one status poll. `status` is `None` when the request failed
    /// (network error or non-2xx). `seq` is the poll sequence number; stale
    /// results are dropped by the controller.
    StatusUpdate {
        seq: u64,
        status: Option<RagStatus>,
    },
    /// Successful answer from the ask endpoint.
    AssistantAnswer {
        text: String,
        sources: Vec<Source>,
        model: Option<String>,
    },
    AskFailed(String),
    /// Outcome of the check-for-updates trigger: server message or error.
    IndexCheckCompleted(Result<String, String>),
    /// Outcome of the start-indexing trigger: status text or error.
    IndexStartCompleted(Result<String, String>),

    InputChanged(char),
    InputBackspace,
    InputDeleteLine,
    InputSubmitted,
    HandlePaste(String),
    CursorLeft,
    CursorRight,
    InputCursorStart,
    InputCursorEnd,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    DropdownUp,
    DropdownDown,
    Tab,
    HandleEsc,
    AttemptQuit,
    Quit,
    Resized(u16, u16),
}

/// Requests the controller hands back to the CLI chat loop, which owns the
/// API client and the preference store.
#[derive(Debug, PartialEq)]
pub enum OutputEvent {
    Ask(AskRequest),
    CheckIndex,
    StartIndex,
    /// Out-of-cycle status poll, without waiting for the next tick.
    RequestStatusCheck,
    SetUseAi(bool),
    MarkTourCompleted,
}
