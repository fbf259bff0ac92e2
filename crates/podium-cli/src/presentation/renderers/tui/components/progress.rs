use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Gauge, Paragraph},
};

use crate::presentation::view_models::{ControlsViewModel, ProgressViewModel};

pub(crate) fn render(
    f: &mut Frame,
    area: Rect,
    progress: &ProgressViewModel,
    controls: &ControlsViewModel,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(8),  // prev control
            Constraint::Min(0),     // progress gauge
            Constraint::Length(10), // position indicator
            Constraint::Length(8),  // next control
        ])
        .split(area);

    f.render_widget(
        Paragraph::new("‹ Prev").style(control_style(controls.prev_enabled)),
        chunks[0],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(progress.ratio.clamp(0.0, 1.0))
        .use_unicode(true)
        .label("");
    f.render_widget(gauge, chunks[1]);

    f.render_widget(
        Paragraph::new(format!(" {} ", progress.label))
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        chunks[2],
    );

    f.render_widget(
        Paragraph::new("Next ›").style(control_style(controls.next_enabled)),
        chunks[3],
    );
}

fn control_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
