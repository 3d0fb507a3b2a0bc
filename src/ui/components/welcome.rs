use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{app::state::AppState, session::PlaylistSession};
use super::super::theme::*;

pub fn render_welcome(f: &mut Frame, area: Rect, state: &AppState, session: &PlaylistSession) {
    let theme = session.current_theme();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // greeting
            Constraint::Length(6), // mood cards
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let greeting = Paragraph::new(vec![
        Line::from(Span::raw("")),
        Line::from(Span::styled("Welcome to MoodSync", title_style(&theme))),
        Line::from(Span::styled(
            "Select a mood from the sidebar to discover your perfect playlist",
            dim_style(),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(greeting, chunks[0]);

    let moods = session.catalog().list();
    if moods.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = moods
        .iter()
        .map(|_| Constraint::Ratio(1, moods.len() as u32))
        .collect();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(chunks[1]);

    for (i, (mood, card)) in moods.iter().zip(cards.iter()).enumerate() {
        let mood_theme = session.catalog().theme_for(Some(&mood.id));
        let highlighted = i == state.mood_cursor;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if highlighted { BorderType::Double } else { BorderType::Rounded })
            .border_style(border_style(true, &mood_theme));
        let body = Paragraph::new(vec![
            Line::from(Span::styled(mood.emoji.clone(), normal_style())),
            Line::from(Span::styled(mood.display_label.clone(), title_style(&mood_theme))),
            Line::from(Span::styled(mood.tagline.clone(), muted_style())),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
        f.render_widget(body, *card);
    }
}
