pub mod components;
pub mod theme;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    app::state::AppState,
    session::{Phase, PlaylistSession},
};
use self::theme::*;
use self::components::{
    help::render_help,
    loading::render_loading,
    playlist::render_playlist,
    sidebar::render_sidebar,
    welcome::render_welcome,
};

/// Root render function, called every frame
pub fn render(f: &mut Frame, state: &AppState, session: &PlaylistSession) {
    let size = f.area();
    let theme = session.current_theme();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(26), // sidebar
            Constraint::Min(0),     // main content
        ])
        .split(size);

    render_sidebar(f, chunks[0], state, session);

    let content = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style(false, &theme))
        .style(backdrop_style(&theme));
    let inner = content.inner(chunks[1]);
    f.render_widget(content, chunks[1]);

    match session.state().phase {
        Phase::Idle => render_welcome(f, inner, state, session),
        Phase::Loading => render_loading(f, inner, state, session),
        Phase::Loaded => render_playlist(f, inner, state, session),
    }

    if state.show_help {
        render_help(f, size, &theme);
    }

    if let Some(ref notif) = state.notification {
        render_notification(f, size, notif.is_error, &notif.message);
    }
}

fn render_notification(f: &mut Frame, area: Rect, is_error: bool, message: &str) {
    let message = truncate_to_width(message, 60);
    let toast_width = message.width() as u16 + 6;
    let toast_area = Rect {
        x: area.width.saturating_sub(toast_width + 2),
        y: area.height.saturating_sub(4),
        width: toast_width.min(area.width),
        height: 3.min(area.height),
    };

    f.render_widget(Clear, toast_area);

    let style = if is_error { error_style() } else { playing_style() };
    let icon = if is_error { "✖ " } else { "✔ " };

    let para = Paragraph::new(Line::from(vec![
        Span::styled(icon, style),
        Span::styled(message, style),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style),
    )
    .alignment(Alignment::Left);

    f.render_widget(para, toast_area);
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}

/// Cuts `s` to at most `max` terminal columns, ending in `…` when shortened.
pub(crate) fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
