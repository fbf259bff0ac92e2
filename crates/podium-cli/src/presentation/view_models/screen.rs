//! Plain-data description of one frame of the viewer.
//!
//! Nothing in here knows about ratatui; every field is derivable from
//! the navigator position and the deck, which is what makes the
//! presenters testable without a terminal.

use super::common::StatusLevel;

#[derive(Debug, Clone)]
pub struct ScreenViewModel {
    /// Present only before the presentation has started.
    pub front_page: Option<FrontPageViewModel>,
    pub sidebar: SidebarViewModel,
    /// Present once a section is active.
    pub section: Option<SectionViewModel>,
    pub controls: ControlsViewModel,
    pub progress: ProgressViewModel,
    pub status_bar: StatusBarViewModel,
    /// Present while the transcript overlay is open.
    pub transcript: Option<TranscriptViewModel>,
}

#[derive(Debug, Clone)]
pub struct FrontPageViewModel {
    pub title: String,
    pub subtitle: Option<String>,
    pub event: Option<String>,
    pub hint: String,
}

#[derive(Debug, Clone)]
pub struct SidebarViewModel {
    pub visible: bool,
    pub entries: Vec<SidebarEntryViewModel>,
}

#[derive(Debug, Clone)]
pub struct SidebarEntryViewModel {
    pub number: usize,
    pub title: String,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct SectionViewModel {
    pub number: usize,
    pub badge: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub blocks: Vec<BlockViewModel>,
}

/// A displayable block; hands-on blocks that are hidden never make it
/// into the view model.
#[derive(Debug, Clone)]
pub enum BlockViewModel {
    Prose {
        lines: Vec<String>,
    },
    List {
        title: Option<String>,
        items: Vec<String>,
    },
    Code {
        language: String,
        title: Option<String>,
        lines: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct ControlsViewModel {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Debug, Clone)]
pub struct ProgressViewModel {
    /// Exactly `current / total` for a valid section, 0.0 otherwise.
    pub ratio: f64,
    /// Position indicator, e.g. "3 / 9".
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    /// Session timer, formatted, once the presentation has started.
    pub elapsed: Option<String>,
    pub notification: Option<String>,
    pub notification_level: StatusLevel,
    pub key_hints: String,
}

#[derive(Debug, Clone)]
pub struct TranscriptViewModel {
    pub title: String,
    pub entries: Vec<TranscriptEntryViewModel>,
}

#[derive(Debug, Clone)]
pub struct TranscriptEntryViewModel {
    pub number: usize,
    pub title: String,
    pub text: String,
}
