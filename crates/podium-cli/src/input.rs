//! Input binding: translates raw terminal events into navigator
//! commands. This layer makes no state decisions beyond gating on
//! "started" and "transcript open"; the navigator is the authority on
//! whether a transition happens.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::{Duration, Instant};

/// Commands the TUI loop can apply to the application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    GoTo(usize),
    Next,
    Prev,
    ToggleTranscript,
    CloseTranscript,
    CopyCode,
    ScrollUp,
    ScrollDown,
    Quit,
}

/// The slice of application state the key binding needs to see.
#[derive(Debug, Clone, Copy)]
pub struct InputContext {
    pub started: bool,
    pub transcript_open: bool,
    pub total: usize,
}

/// Map a key press to a command.
///
/// Escape has precedence: it closes the transcript when the overlay is
/// open and is otherwise ignored, never reinterpreted as navigation.
pub fn translate_key(key: KeyEvent, ctx: &InputContext) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    if ctx.transcript_open {
        return match key.code {
            KeyCode::Esc => Some(Command::CloseTranscript),
            KeyCode::Char('t') | KeyCode::Char('T')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                Some(Command::CloseTranscript)
            }
            _ => None,
        };
    }

    if !ctx.started {
        return match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Start),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Left | KeyCode::Up => Some(Command::Prev),
        KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => Some(Command::Next),
        KeyCode::Home => Some(Command::GoTo(1)),
        KeyCode::End => Some(Command::GoTo(ctx.total)),
        KeyCode::PageUp => Some(Command::ScrollUp),
        KeyCode::PageDown => Some(Command::ScrollDown),
        KeyCode::Char('t') | KeyCode::Char('T')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(Command::ToggleTranscript)
        }
        KeyCode::Char('c') => Some(Command::CopyCode),
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Esc => None,
        KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
            Some(Command::GoTo(c as usize - '0' as usize))
        }
        _ => None,
    }
}

/// A pointer gesture recognized from a press-to-release pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Horizontal drag exceeding the threshold and dominating the
    /// vertical movement.
    Swipe(SwipeDirection),
    /// Press and release without meaningful movement.
    Click { column: u16, row: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Dragged leftwards: advance to the next section.
    Left,
    /// Dragged rightwards: go back to the previous section.
    Right,
}

/// Minimum horizontal travel, in terminal columns, for a drag to count
/// as a swipe.
pub const SWIPE_THRESHOLD: u16 = 6;

/// Tracks one left-button press so the matching release can be
/// classified as a click or a swipe.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    origin: Option<(u16, u16)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, event: MouseEvent) -> Option<Gesture> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.origin = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (origin_col, origin_row) = self.origin.take()?;
                let dx = event.column as i32 - origin_col as i32;
                let dy = (event.row as i32 - origin_row as i32).abs();

                if dx.abs() < 2 && dy < 2 {
                    return Some(Gesture::Click {
                        column: event.column,
                        row: event.row,
                    });
                }

                // Only a horizontal drag that dominates vertical
                // movement counts as a swipe.
                if dx.unsigned_abs() as u16 > SWIPE_THRESHOLD && dx.abs() > dy {
                    let direction = if dx < 0 {
                        SwipeDirection::Left
                    } else {
                        SwipeDirection::Right
                    };
                    return Some(Gesture::Swipe(direction));
                }

                None
            }
            _ => None,
        }
    }
}

/// Coalesces resize bursts: only the last size observed in a quiet
/// window is reported, so a drag-resize does not recompute layout on
/// every pixel.
#[derive(Debug)]
pub struct ResizeDebouncer {
    pending: Option<(Instant, u16, u16)>,
    quiet: Duration,
}

pub const RESIZE_QUIET: Duration = Duration::from_millis(250);

impl ResizeDebouncer {
    pub fn new() -> Self {
        Self::with_quiet(RESIZE_QUIET)
    }

    pub fn with_quiet(quiet: Duration) -> Self {
        Self {
            pending: None,
            quiet,
        }
    }

    pub fn observe(&mut self, width: u16, height: u16) {
        self.observe_at(width, height, Instant::now());
    }

    pub fn observe_at(&mut self, width: u16, height: u16, now: Instant) {
        self.pending = Some((now, width, height));
    }

    /// Returns the settled size once the burst has been quiet long
    /// enough, then clears it.
    pub fn poll(&mut self, now: Instant) -> Option<(u16, u16)> {
        let (observed_at, width, height) = self.pending?;
        if now.duration_since(observed_at) >= self.quiet {
            self.pending = None;
            Some((width, height))
        } else {
            None
        }
    }
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new()
    }
}
