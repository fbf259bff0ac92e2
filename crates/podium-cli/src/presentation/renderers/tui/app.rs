use std::path::PathBuf;
use std::time::{Duration, Instant};

use podium_core::{Deck, Navigator, RenderedBlock, SectionStore, Settings};
use ratatui::layout::Rect;

use crate::input::{Command, InputContext, ResizeDebouncer, SwipeTracker};
use crate::presentation::view_models::StatusLevel;
use crate::ui::clipboard;

/// Sidebar is hidden below this terminal width, mirroring the narrow
/// layout of the source design.
pub(crate) const SIDEBAR_MIN_WIDTH: u16 = 80;

/// How long a position announcement stays in the status bar.
const ANNOUNCE_TTL: Duration = Duration::from_millis(1500);

/// How long copy feedback stays in the status bar.
const COPY_TTL: Duration = Duration::from_secs(2);

pub(crate) struct Notification {
    pub text: String,
    pub level: StatusLevel,
    pub expires_at: Instant,
}

/// Owns every piece of mutable state for one presentation run.
///
/// The composition root: the navigator decides, the store caches, and
/// everything else here is UI bookkeeping (overlay flag, timer,
/// notification, layout hit-test areas).
pub(crate) struct AppState<'a> {
    pub deck: &'a Deck,
    pub navigator: Navigator,
    pub store: SectionStore,
    pub settings_path: PathBuf,
    pub hands_on_visible: bool,
    pub transcript_open: bool,
    pub should_quit: bool,
    pub session_start: Option<Instant>,
    pub notification: Option<Notification>,
    pub width: u16,
    pub sidebar_visible: bool,
    /// Inner sidebar list area recorded during the last draw, used to
    /// hit-test clicks.
    pub sidebar_rows: Option<Rect>,
    pub scroll: u16,
    pub resize: ResizeDebouncer,
    pub swipe: SwipeTracker,
}

impl<'a> AppState<'a> {
    pub fn new(deck: &'a Deck, settle: Duration, settings_path: PathBuf, width: u16) -> Self {
        let mut store = SectionStore::new();
        // All content is rendered up front; later loads are no-ops.
        store.load_all(deck);

        Self {
            deck,
            navigator: Navigator::with_settle(deck.total_sections(), settle),
            store,
            settings_path,
            hands_on_visible: false,
            transcript_open: false,
            should_quit: false,
            session_start: None,
            notification: None,
            width,
            sidebar_visible: false,
            sidebar_rows: None,
            scroll: 0,
            resize: ResizeDebouncer::new(),
            swipe: SwipeTracker::new(),
        }
    }

    pub fn input_context(&self) -> InputContext {
        InputContext {
            started: self.navigator.started(),
            transcript_open: self.transcript_open,
            total: self.navigator.total(),
        }
    }

    pub fn apply(&mut self, command: Command) {
        self.apply_at(command, Instant::now());
    }

    pub(crate) fn apply_at(&mut self, command: Command, now: Instant) {
        match command {
            Command::Start => {
                if self.navigator.start_at(now) {
                    self.session_start = Some(now);
                    self.recompute_layout();
                    self.after_transition(now);
                }
            }
            Command::GoTo(target) => {
                if self.navigator.go_to_at(target, now) {
                    self.after_transition(now);
                }
            }
            Command::Next => {
                if self.navigator.next_at(now) {
                    self.after_transition(now);
                }
            }
            Command::Prev => {
                if self.navigator.prev_at(now) {
                    self.after_transition(now);
                }
            }
            Command::ToggleTranscript => self.transcript_open = !self.transcript_open,
            Command::CloseTranscript => self.transcript_open = false,
            Command::CopyCode => self.copy_current_code(now),
            Command::ScrollUp => self.scroll = self.scroll.saturating_sub(4),
            Command::ScrollDown => self.scroll = self.scroll.saturating_add(4),
            Command::Quit => self.should_quit = true,
        }
    }

    /// Side effects of an accepted transition: ensure content, reset
    /// scroll, announce the position, and consult the persisted flag
    /// when entering the final section.
    fn after_transition(&mut self, now: Instant) {
        let Some(current) = self.navigator.current() else {
            return;
        };

        self.store.ensure_loaded(self.deck, current);
        self.scroll = 0;

        if current == self.navigator.total() {
            self.hands_on_visible = Settings::load_from(&self.settings_path)
                .map(|settings| settings.hands_on_enabled())
                .unwrap_or(false);
        }

        self.notify(
            format!("Section {} of {}", current, self.navigator.total()),
            StatusLevel::Info,
            ANNOUNCE_TTL,
            now,
        );
    }

    fn copy_current_code(&mut self, now: Instant) {
        let Some(current) = self.navigator.current() else {
            return;
        };
        let Some(section) = self.store.get(current) else {
            return;
        };

        let code = section.blocks.iter().find_map(|block| match block {
            RenderedBlock::Code {
                lines, hands_on, ..
            } if !hands_on || self.hands_on_visible => Some(lines.join("\n")),
            _ => None,
        });

        let Some(code) = code else {
            self.notify(
                "No code block on this section".to_string(),
                StatusLevel::Warning,
                COPY_TTL,
                now,
            );
            return;
        };

        if clipboard::copy_best_effort(&code) {
            self.notify(
                "Code copied to clipboard!".to_string(),
                StatusLevel::Success,
                COPY_TTL,
                now,
            );
        } else {
            self.notify(
                "Copy failed".to_string(),
                StatusLevel::Warning,
                COPY_TTL,
                now,
            );
        }
    }

    pub fn notify(&mut self, text: String, level: StatusLevel, ttl: Duration, now: Instant) {
        self.notification = Some(Notification {
            text,
            level,
            expires_at: now + ttl,
        });
    }

    pub fn on_tick(&mut self) {
        let now = Instant::now();

        if let Some(notification) = &self.notification
            && now >= notification.expires_at
        {
            self.notification = None;
        }

        if let Some((width, _height)) = self.resize.poll(now) {
            self.width = width;
            self.recompute_layout();
        }
    }

    pub fn recompute_layout(&mut self) {
        self.sidebar_visible = self.navigator.started() && self.width >= SIDEBAR_MIN_WIDTH;
        if !self.sidebar_visible {
            self.sidebar_rows = None;
        }
    }

    /// Map a click inside the sidebar list to a section number.
    pub fn sidebar_hit(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.sidebar_rows?;
        if column < area.x || column >= area.x + area.width {
            return None;
        }
        if row < area.y || row >= area.y + area.height {
            return None;
        }

        let number = (row - area.y) as usize + 1;
        if number <= self.navigator.total() {
            Some(number)
        } else {
            None
        }
    }
}
