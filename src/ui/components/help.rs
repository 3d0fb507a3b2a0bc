use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::{mood::Theme, ui::centered_rect};
use super::super::theme::*;

pub fn render_help(f: &mut Frame, area: Rect, theme: &Theme) {
    let popup_area = centered_rect(60, 60, area);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(Span::styled(" ❓ Keybindings ", title_style(theme)))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(border_style(true, theme))
        .style(surface_style());

    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(inner);

    let section = |name: &'static str| {
        Line::from(Span::styled(format!("  {name}"), accent_style(theme).add_modifier(Modifier::BOLD)))
    };

    let left = vec![
        section("Navigation"),
        Line::from(Span::raw("")),
        key_line("↑ / k", "Move up", theme),
        key_line("↓ / j", "Move down", theme),
        key_line("Tab / ← →", "Moods ⇄ tracks", theme),
        key_line("Esc / b", "Back", theme),
    ];

    let right = vec![
        section("Moods & tracks"),
        Line::from(Span::raw("")),
        key_line("Enter", "Load mood / mark track", theme),
        key_line("1-9", "Pick mood directly", theme),
        key_line("x", "Clear now playing", theme),
        Line::from(Span::raw("")),
        key_line("?", "Toggle this help", theme),
        key_line("q", "Quit", theme),
    ];

    f.render_widget(Paragraph::new(left), cols[0]);
    f.render_widget(Paragraph::new(right), cols[1]);
}

fn key_line(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", muted_style()),
        Span::styled(format!("{key:<11}"), accent_style(theme)),
        Span::styled(desc.to_string(), normal_style()),
    ])
}
