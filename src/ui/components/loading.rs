use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{app::state::AppState, session::PlaylistSession};
use super::super::theme::*;

const SPINNER: &[&str] = &["◐", "◓", "◑", "◒"];

pub fn render_loading(f: &mut Frame, area: Rect, state: &AppState, session: &PlaylistSession) {
    let theme = session.current_theme();
    let mood = session.selected_mood_label().unwrap_or_default();
    let frame = SPINNER[(state.tick / 3) as usize % SPINNER.len()];

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(area);

    let para = Paragraph::new(vec![
        Line::from(Span::styled(frame, title_style(&theme))),
        Line::from(Span::raw("")),
        Line::from(Span::styled(format!("Creating your {mood} playlist..."), dim_style())),
    ])
    .alignment(Alignment::Center);
    f.render_widget(para, chunks[1]);
}
