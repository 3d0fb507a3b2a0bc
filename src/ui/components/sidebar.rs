use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::{
    app::state::{AppState, Focus},
    session::PlaylistSession,
    ui::truncate_to_width,
};
use super::super::theme::*;

pub fn render_sidebar(f: &mut Frame, area: Rect, state: &AppState, session: &PlaylistSession) {
    let theme = session.current_theme();
    let focused = state.focus == Focus::Moods;

    let block = Block::default()
        .title(Span::styled(" ♫ MoodSync ", title_style(&theme)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style(focused, &theme))
        .style(surface_style());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // heading
            Constraint::Min(0),    // mood pills
            Constraint::Length(4), // now playing
        ])
        .split(inner);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(" Select Your Mood", header_style())),
        Line::from(Span::raw("")),
    ]);
    f.render_widget(heading, chunks[0]);

    // ── Mood pills ─────────────────────────────────────
    let selected_id = session.state().selected_mood_id.as_deref();
    let pill_width = inner.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = session
        .catalog()
        .list()
        .iter()
        .enumerate()
        .map(|(i, mood)| {
            let is_active = selected_id == Some(mood.id.as_str());
            let under_cursor = focused && i == state.mood_cursor;
            let label = truncate_to_width(
                &format!("[{}] {}", i + 1, mood.decorated_label()),
                pill_width,
            );

            let style = if is_active {
                pill_style(&session.catalog().theme_for(Some(&mood.id)))
            } else if under_cursor {
                selected_style()
            } else {
                normal_style()
            };
            let prefix = if under_cursor { " ▶ " } else { "   " };
            let suffix = if is_active && session.state().is_loading() { " …" } else { "" };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, if under_cursor { accent_style(&theme) } else { muted_style() }),
                Span::styled(label, style),
                Span::styled(suffix, dim_style()),
            ]))
        })
        .collect();
    f.render_widget(List::new(items), chunks[1]);

    // ── Now playing ────────────────────────────────────
    let text_width = inner.width.saturating_sub(4) as usize;
    let lines = match session.now_playing() {
        Some((_, song)) => vec![
            Line::from(Span::styled(" ♪ Now Playing", accent_style(&theme))),
            Line::from(Span::styled(
                format!("   {}", truncate_to_width(&song.title, text_width)),
                playing_style(),
            )),
            Line::from(Span::styled(
                format!("   {}", truncate_to_width(&song.artist, text_width)),
                dim_style(),
            )),
        ],
        None => vec![
            Line::from(Span::styled(" ♪ Now Playing", accent_style(&theme))),
            Line::from(Span::styled("   No track", muted_style())),
        ],
    };
    f.render_widget(Paragraph::new(lines), chunks[2]);
}
