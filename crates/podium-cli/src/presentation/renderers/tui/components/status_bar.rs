use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::view_models::{StatusBarViewModel, StatusLevel};

pub(crate) fn render(f: &mut Frame, area: Rect, view: &StatusBarViewModel) {
    let mut spans = Vec::new();

    if let Some(elapsed) = &view.elapsed {
        spans.push(Span::styled(
            format!("⏱ {}  ", elapsed),
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::styled(
        view.key_hints.clone(),
        Style::default().fg(Color::DarkGray),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);

    if let Some(notification) = &view.notification {
        let style = Style::default().fg(level_color(view.notification_level));
        f.render_widget(
            Paragraph::new(Span::styled(notification.clone(), style))
                .alignment(Alignment::Right),
            area,
        );
    }
}

fn level_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Success => Color::Green,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}
