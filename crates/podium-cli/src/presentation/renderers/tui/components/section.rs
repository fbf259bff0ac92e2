use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::view_models::{BlockViewModel, SectionViewModel};
use crate::ui::highlight::{self, TokenKind};

pub(crate) fn render(f: &mut Frame, area: Rect, view: &SectionViewModel, scroll: u16) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(badge) = &view.badge {
        lines.push(Line::from(Span::styled(
            badge.clone(),
            Style::default().fg(Color::Magenta),
        )));
    }

    lines.push(Line::from(Span::styled(
        view.title.clone(),
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
    )));

    if let Some(subtitle) = &view.subtitle {
        lines.push(Line::from(Span::styled(
            subtitle.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    for block in &view.blocks {
        lines.push(Line::from(""));
        match block {
            BlockViewModel::Prose { lines: prose } => {
                for line in prose {
                    lines.push(Line::from(line.clone()));
                }
            }
            BlockViewModel::List { title, items } => {
                if let Some(title) = title {
                    lines.push(Line::from(Span::styled(
                        title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )));
                }
                for item in items {
                    lines.push(Line::from(vec![
                        Span::styled("  • ", Style::default().fg(Color::Cyan)),
                        Span::raw(item.clone()),
                    ]));
                }
            }
            BlockViewModel::Code {
                language,
                title,
                lines: code,
            } => {
                let header = match title {
                    Some(title) => format!("┌─ {} ({})", title, language),
                    None => format!("┌─ {}", language),
                };
                lines.push(Line::from(Span::styled(
                    header,
                    Style::default().fg(Color::DarkGray),
                )));
                for line in code {
                    lines.push(highlight_line(language, line));
                }
                lines.push(Line::from(Span::styled(
                    "└─".to_string(),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::NONE))
        .scroll((scroll, 0));

    f.render_widget(paragraph, area);
}

fn highlight_line(language: &str, line: &str) -> Line<'static> {
    let mut spans = vec![Span::styled("│ ", Style::default().fg(Color::DarkGray))];
    spans.extend(
        highlight::highlight(language, line)
            .into_iter()
            .map(|token| Span::styled(token.text, token_style(token.kind))),
    );
    Line::from(spans)
}

fn token_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Keyword => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        TokenKind::String => Style::default().fg(Color::Green),
        TokenKind::Comment => Style::default().fg(Color::DarkGray),
        TokenKind::Number => Style::default().fg(Color::Yellow),
        TokenKind::Plain => Style::default().fg(Color::White),
    }
}
