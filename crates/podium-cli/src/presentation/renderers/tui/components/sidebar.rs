use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::view_models::SidebarViewModel;

/// Renders the section list and returns the inner list area so clicks
/// can be mapped back to section numbers.
pub(crate) fn render(f: &mut Frame, area: Rect, view: &SidebarViewModel) -> Rect {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);

    let items: Vec<ListItem> = view
        .entries
        .iter()
        .map(|entry| {
            let style = if entry.is_active {
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if entry.is_active { "▸" } else { " " };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} {:02} ", marker, entry.number), style),
                Span::styled(entry.title.clone(), style),
            ]))
        })
        .collect();

    f.render_widget(block, area);
    f.render_widget(List::new(items), inner);

    inner
}
