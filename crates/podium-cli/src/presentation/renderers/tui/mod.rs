mod app;
mod components;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use podium_core::Deck;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::input::{self, Command, Gesture, SwipeDirection};
use app::AppState;

pub struct TuiOptions {
    pub settle: Duration,
    pub mouse: bool,
    pub settings_path: PathBuf,
}

pub fn run(deck: &Deck, options: TuiOptions) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if options.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mouse = options.mouse;
    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        if mouse {
            let _ = execute!(io::stdout(), DisableMouseCapture);
        }
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let (width, _height) = crossterm::terminal::size()?;
    let mut app = AppState::new(deck, options.settle, options.settings_path, width);

    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    while !app.should_quit {
        terminal.draw(|f| {
            ui::draw(f, &mut app);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if let Some(command) = input::translate_key(key, &app.input_context()) {
                        app.apply(command);
                    }
                }
                Event::Mouse(mouse_event) => {
                    match mouse_event.kind {
                        MouseEventKind::ScrollUp => app.apply(Command::ScrollUp),
                        MouseEventKind::ScrollDown => app.apply(Command::ScrollDown),
                        _ => {
                            if let Some(gesture) = app.swipe.observe(mouse_event) {
                                handle_gesture(&mut app, gesture);
                            }
                        }
                    };
                }
                Event::Resize(width, height) => app.resize.observe(width, height),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }

    disable_raw_mode()?;
    if options.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_gesture(app: &mut AppState, gesture: Gesture) {
    // Any click while the transcript is open dismisses it, matching
    // the click-outside-to-close rule of the overlay.
    if app.transcript_open {
        if matches!(gesture, Gesture::Click { .. }) {
            app.apply(Command::CloseTranscript);
        }
        return;
    }

    match gesture {
        Gesture::Swipe(SwipeDirection::Left) => app.apply(Command::Next),
        Gesture::Swipe(SwipeDirection::Right) => app.apply(Command::Prev),
        Gesture::Click { column, row } => {
            if let Some(section) = app.sidebar_hit(column, row) {
                app.apply(Command::GoTo(section));
            }
        }
    }
}
