mod events;
mod types;

pub use events::{InputEvent, OutputEvent};
pub use types::*;

use crate::services::commands::built_in_helpers;
use crate::services::message::Message;
use paperrag_shared::models::status::{Badge, Connectivity, RagStatus};

pub struct AppState {
    // ========== Input State ==========
    pub input: String,
    /// Char offset of the cursor within `input`.
    pub cursor_position: usize,
    pub helpers: Vec<HelperCommand>,
    pub show_helper_dropdown: bool,
    pub helper_selected: usize,
    pub filtered_helpers: Vec<HelperCommand>,

    // ========== Messages & Scrolling State ==========
    pub messages: Vec<Message>,
    pub scroll: usize,
    pub stay_at_bottom: bool,

    // ========== Connectivity State ==========
    /// The shared indicator written by the poller, the chat session and the
    /// indexing triggers; chat sends are gated on it.
    pub connectivity: Connectivity,
    pub status: Option<RagStatus>,
    pub badges: Vec<Badge>,
    /// Sequence number of the last applied poll result; older results are
    /// dropped.
    pub last_status_seq: u64,

    // ========== In-flight State ==========
    /// An ask request is outstanding; further sends are refused until it
    /// resolves.
    pub loading: bool,
    pub check_in_flight: bool,
    pub index_in_flight: bool,
    pub spinner_frame: usize,

    // ========== Preferences ==========
    pub use_ai: bool,

    // ========== Misc State ==========
    pub ctrl_c_pressed_once: bool,
    pub ctrl_c_timer: Option<std::time::Instant>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(use_ai: bool) -> Self {
        AppState {
            input: String::new(),
            cursor_position: 0,
            helpers: built_in_helpers(),
            show_helper_dropdown: false,
            helper_selected: 0,
            filtered_helpers: Vec::new(),
            messages: Vec::new(),
            scroll: 0,
            stay_at_bottom: true,
            connectivity: Connectivity::Connecting,
            status: None,
            badges: Vec::new(),
            last_status_seq: 0,
            loading: false,
            check_in_flight: false,
            index_in_flight: false,
            spinner_frame: 0,
            use_ai,
            ctrl_c_pressed_once: false,
            ctrl_c_timer: None,
            should_quit: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(false)
    }
}
