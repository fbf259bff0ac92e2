//! Screen presenter.
//!
//! PURE FUNCTIONS that convert the navigator position plus the deck
//! into the screen ViewModel. No state management happens here: the
//! TUI app owns state, the presenter is stateless, and every facet
//! (section body, sidebar highlight, controls, progress fill, position
//! indicator) is recomputed from `current`/`total` alone; no facet
//! reads another facet's previous value.

use podium_core::{Deck, Navigator, RenderedBlock, SectionStore};

use crate::presentation::view_models::{
    BlockViewModel, ControlsViewModel, FrontPageViewModel, ProgressViewModel, ScreenViewModel,
    SectionViewModel, SidebarEntryViewModel, SidebarViewModel, StatusBarViewModel, StatusLevel,
    TranscriptEntryViewModel, TranscriptViewModel,
};

/// Everything the presenter is allowed to look at for one frame.
pub struct ScreenContext<'a> {
    pub deck: &'a Deck,
    pub navigator: &'a Navigator,
    pub store: &'a SectionStore,
    pub hands_on_visible: bool,
    pub transcript_open: bool,
    pub sidebar_visible: bool,
    pub elapsed_seconds: Option<u64>,
    pub notification: Option<(&'a str, StatusLevel)>,
}

/// Build the complete screen ViewModel for the current frame.
pub fn build_screen_view_model(ctx: &ScreenContext) -> ScreenViewModel {
    let current = ctx.navigator.current();
    let total = ctx.navigator.total();

    let front_page = if ctx.navigator.started() {
        None
    } else {
        Some(build_front_page(ctx.deck))
    };

    // The five facets, each a pure function of current/total.
    let section = build_section(ctx.store, current, ctx.hands_on_visible);
    let sidebar = build_sidebar(ctx.deck, current, ctx.sidebar_visible);
    let controls = build_controls(current, total);
    let progress = build_progress(current, total);

    let status_bar = build_status_bar(ctx);

    let transcript = if ctx.transcript_open {
        Some(build_transcript(ctx.deck))
    } else {
        None
    };

    ScreenViewModel {
        front_page,
        sidebar,
        section,
        controls,
        progress,
        status_bar,
        transcript,
    }
}

fn build_front_page(deck: &Deck) -> FrontPageViewModel {
    FrontPageViewModel {
        title: deck.title.clone(),
        subtitle: deck.subtitle.clone(),
        event: deck.event.clone(),
        hint: "Press Enter to start".to_string(),
    }
}

/// Section visibility facet: exactly one section is active, and its
/// hidden hands-on blocks are filtered out before the renderer ever
/// sees them.
fn build_section(
    store: &SectionStore,
    current: Option<usize>,
    hands_on_visible: bool,
) -> Option<SectionViewModel> {
    let number = current?;
    let rendered = store.get(number)?;

    let blocks = rendered
        .blocks
        .iter()
        .filter(|block| !block.hands_on() || hands_on_visible)
        .map(|block| match block {
            RenderedBlock::Prose { lines, .. } => BlockViewModel::Prose {
                lines: lines.clone(),
            },
            RenderedBlock::List { title, items, .. } => BlockViewModel::List {
                title: title.clone(),
                items: items.clone(),
            },
            RenderedBlock::Code {
                language,
                title,
                lines,
                ..
            } => BlockViewModel::Code {
                language: language.clone(),
                title: title.clone(),
                lines: lines.clone(),
            },
        })
        .collect();

    Some(SectionViewModel {
        number: rendered.number,
        badge: rendered.badge.clone(),
        title: rendered.title.clone(),
        subtitle: rendered.subtitle.clone(),
        blocks,
    })
}

/// Sidebar highlight facet.
fn build_sidebar(deck: &Deck, current: Option<usize>, visible: bool) -> SidebarViewModel {
    let entries = deck
        .sections
        .iter()
        .enumerate()
        .map(|(idx, section)| {
            let number = idx + 1;
            SidebarEntryViewModel {
                number,
                title: section.title.clone(),
                is_active: current == Some(number),
            }
        })
        .collect();

    SidebarViewModel { visible, entries }
}

/// Prev/next enabled-state facet.
fn build_controls(current: Option<usize>, total: usize) -> ControlsViewModel {
    match current {
        Some(current) => ControlsViewModel {
            prev_enabled: current > 1,
            next_enabled: current < total,
        },
        None => ControlsViewModel {
            prev_enabled: false,
            next_enabled: false,
        },
    }
}

/// Progress fill and position indicator facets.
fn build_progress(current: Option<usize>, total: usize) -> ProgressViewModel {
    match current {
        Some(current) if total > 0 => ProgressViewModel {
            ratio: current as f64 / total as f64,
            label: format!("{} / {}", current, total),
        },
        _ => ProgressViewModel {
            ratio: 0.0,
            label: format!("- / {}", total),
        },
    }
}

fn build_status_bar(ctx: &ScreenContext) -> StatusBarViewModel {
    let key_hints = if ctx.navigator.started() {
        "←/→ navigate · 1-9 jump · ^T transcript · c copy · q quit".to_string()
    } else {
        "Enter start · q quit".to_string()
    };

    let (notification, notification_level) = match ctx.notification {
        Some((text, level)) => (Some(text.to_string()), level),
        None => (None, StatusLevel::Info),
    };

    StatusBarViewModel {
        elapsed: ctx.elapsed_seconds.map(format_elapsed),
        notification,
        notification_level,
        key_hints,
    }
}

fn build_transcript(deck: &Deck) -> TranscriptViewModel {
    let entries = deck
        .sections
        .iter()
        .enumerate()
        .map(|(idx, section)| TranscriptEntryViewModel {
            number: idx + 1,
            title: section.title.clone(),
            text: section
                .transcript
                .clone()
                .unwrap_or_else(|| "(no transcript)".to_string()),
        })
        .collect();

    TranscriptViewModel {
        title: format!("Transcript — {}", deck.title),
        entries,
    }
}

// --------------------------------------------------------
// Utility Functions
// --------------------------------------------------------

/// Format elapsed seconds as `M:SS`, or `H:MM:SS` past the hour.
pub fn format_elapsed(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}
