use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::AppState;
use super::components;
use crate::presentation::presenters::{ScreenContext, build_screen_view_model};

const SIDEBAR_WIDTH: u16 = 28;

pub(crate) fn draw(f: &mut Frame, app: &mut AppState) {
    let view = build_screen_view_model(&ScreenContext {
        deck: app.deck,
        navigator: &app.navigator,
        store: &app.store,
        hands_on_visible: app.hands_on_visible,
        transcript_open: app.transcript_open,
        sidebar_visible: app.sidebar_visible,
        elapsed_seconds: app.session_start.map(|start| start.elapsed().as_secs()),
        notification: app
            .notification
            .as_ref()
            .map(|n| (n.text.as_str(), n.level)),
    });

    if let Some(front_page) = &view.front_page {
        app.sidebar_rows = None;
        components::front_page::render(f, f.area(), front_page);
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // main content
                Constraint::Length(1), // progress + controls
                Constraint::Length(1), // status bar
            ])
            .split(f.area());

        let content_area = if view.sidebar.visible {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .split(rows[0]);

            app.sidebar_rows = Some(components::sidebar::render(f, columns[0], &view.sidebar));
            columns[1]
        } else {
            app.sidebar_rows = None;
            rows[0]
        };

        if let Some(section) = &view.section {
            components::section::render(f, content_area, section, app.scroll);
        }

        components::progress::render(f, rows[1], &view.progress, &view.controls);
        components::status_bar::render(f, rows[2], &view.status_bar);
    }

    if let Some(transcript) = &view.transcript {
        components::transcript::render(f, f.area(), transcript);
    }
}
