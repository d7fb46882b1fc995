//! Backend health model shared by the TUI and the one-shot commands.

use serde::{Deserialize, Serialize};

/// The single UI-visible indicator summarizing server/data/index health.
///
/// Written only by the status poller, the chat session (on send failure),
/// and the indexing triggers. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connectivity {
    /// Initial state, and any state where the backend is reachable but the
    /// index is not ready yet.
    Connecting,
    Offline,
    Indexing,
    Online,
}

impl Connectivity {
    pub fn label(&self) -> &'static str {
        match self {
            Connectivity::Connecting => "Connecting",
            Connectivity::Offline => "Offline",
            Connectivity::Indexing => "Indexing",
            Connectivity::Online => "Online",
        }
    }

    /// Chat sends are permitted only when the index is ready.
    pub fn is_online(&self) -> bool {
        matches!(self, Connectivity::Online)
    }
}

/// Five-way classification of one status payload.
///
/// Evaluated in precedence order: a downed server wins over everything,
/// a running indexer wins over a ready index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedStatus {
    Offline,
    Indexing,
    Ready,
    CreatingIndex,
    LoadingData,
}

impl DerivedStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DerivedStatus::Offline => "Offline",
            DerivedStatus::Indexing => "Indexing in progress",
            DerivedStatus::Ready => "Ready",
            DerivedStatus::CreatingIndex => "Creating index",
            DerivedStatus::LoadingData => "Loading data",
        }
    }

    pub fn connectivity(&self) -> Connectivity {
        match self {
            DerivedStatus::Offline => Connectivity::Offline,
            DerivedStatus::Indexing => Connectivity::Indexing,
            DerivedStatus::Ready => Connectivity::Online,
            DerivedStatus::CreatingIndex | DerivedStatus::LoadingData => Connectivity::Connecting,
        }
    }
}

/// Snapshot of backend health, rebuilt from every successful poll.
///
/// `indexing` and `server_up` are not mutually exclusive: a poll can report
/// both during a transition window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RagStatus {
    pub server_up: bool,
    pub data_loaded: bool,
    pub index_ready: bool,
    pub indexing: bool,
    pub documents_count: u64,
    pub ai_status: Option<String>,
    pub ai_model: Option<String>,
}

impl RagStatus {
    pub fn derived(&self) -> DerivedStatus {
        if !self.server_up {
            DerivedStatus::Offline
        } else if self.indexing {
            DerivedStatus::Indexing
        } else if self.index_ready {
            DerivedStatus::Ready
        } else if self.data_loaded {
            DerivedStatus::CreatingIndex
        } else {
            DerivedStatus::LoadingData
        }
    }

    pub fn connectivity(&self) -> Connectivity {
        self.derived().connectivity()
    }

    /// Badge chips for the status header, in display order.
    pub fn badges(&self) -> Vec<Badge> {
        let mut badges = vec![
            if self.server_up {
                Badge::success("Server", "Up")
            } else {
                Badge::danger("Server", "Down")
            },
            if self.data_loaded {
                Badge::success("Data", "Loaded")
            } else {
                Badge::warning("Data", "Waiting")
            },
            if self.index_ready {
                Badge::success("Index", "Ready")
            } else {
                Badge::warning("Index", "Building")
            },
        ];
        if self.indexing {
            badges.push(Badge::warning("Indexing", "In Progress"));
        }
        if self.documents_count > 0 {
            badges.push(Badge::success(
                "Documents",
                self.documents_count.to_string(),
            ));
        }
        badges
    }
}

/// Badges shown when the backend is unreachable: dependent subsystems are
/// unknown rather than down.
pub fn offline_badges() -> Vec<Badge> {
    vec![
        Badge::danger("Server", "Down"),
        Badge::muted("Data", "Unknown"),
        Badge::muted("Index", "Unknown"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
    Muted,
}

/// A small status chip rendered per subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub value: String,
    pub tone: BadgeTone,
}

impl Badge {
    fn new(label: &str, value: impl Into<String>, tone: BadgeTone) -> Self {
        Badge {
            label: label.to_string(),
            value: value.into(),
            tone,
        }
    }

    pub fn success(label: &str, value: impl Into<String>) -> Self {
        Self::new(label, value, BadgeTone::Success)
    }

    pub fn warning(label: &str, value: impl Into<String>) -> Self {
        Self::new(label, value, BadgeTone::Warning)
    }

    pub fn danger(label: &str, value: impl Into<String>) -> Self {
        Self::new(label, value, BadgeTone::Danger)
    }

    pub fn muted(label: &str, value: impl Into<String>) -> Self {
        Self::new(label, value, BadgeTone::Muted)
    }
}
