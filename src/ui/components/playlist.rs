use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::{
    app::state::{AppState, Focus},
    recommend::Playlist,
    session::PlaylistSession,
};
use super::super::theme::*;

const EQ_CHARS: &[&str] = &["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

fn bar_char(height: u8) -> &'static str {
    let idx = ((height as usize).saturating_sub(1)).min(EQ_CHARS.len() - 1);
    EQ_CHARS[idx]
}

pub(crate) fn equalizer(bars: &[u8]) -> String {
    bars.iter().map(|&h| bar_char(h)).collect()
}

pub fn render_playlist(f: &mut Frame, area: Rect, state: &AppState, session: &PlaylistSession) {
    let Some(playlist) = session.state().playlist.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // hero
            Constraint::Min(0),    // songs table
        ])
        .split(area);

    render_hero(f, chunks[0], playlist, session);
    render_songs(f, chunks[1], playlist, state, session);
}

fn render_hero(f: &mut Frame, area: Rect, playlist: &Playlist, session: &PlaylistSession) {
    let theme = session.current_theme();
    let emoji = session
        .state()
        .selected_mood_id
        .as_deref()
        .and_then(|id| session.catalog().lookup(id))
        .map(|m| m.emoji.clone())
        .unwrap_or_default();

    let lines = vec![
        Line::from(Span::styled("PLAYLIST", muted_style())),
        Line::from(vec![
            Span::styled(format!("{emoji} "), normal_style()),
            Span::styled(playlist.title(), title_style(&theme)),
        ]),
        Line::from(Span::styled(playlist.description.clone(), dim_style())),
        Line::from(vec![
            Span::styled(format!("{} songs", playlist.song_count), normal_style()),
            Span::styled(" • ", muted_style()),
            Span::styled(playlist.total_duration.clone(), normal_style()),
        ]),
    ];

    let hero = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(border_style(false, &theme)),
    );
    f.render_widget(hero, area);
}

fn render_songs(
    f: &mut Frame,
    area: Rect,
    playlist: &Playlist,
    state: &AppState,
    session: &PlaylistSession,
) {
    let theme = session.current_theme();
    let focused = state.focus == Focus::Tracks;

    let header = Row::new(vec!["#", "TITLE", "ARTIST", "GENRE", "⏱"]).style(header_style());

    let rows: Vec<Row> = playlist
        .songs
        .iter()
        .enumerate()
        .map(|(i, song)| {
            let playing = session.state().is_now_playing(&song.id);
            let index_cell = if playing {
                Cell::from(Span::styled(equalizer(&state.eq_bars), playing_style()))
            } else {
                Cell::from(Span::styled(format!("{}", i + 1), muted_style()))
            };
            let name_style = if playing { playing_style() } else { normal_style() };
            Row::new(vec![
                index_cell,
                Cell::from(Span::styled(song.title.clone(), name_style)),
                Cell::from(Span::styled(song.artist.clone(), dim_style())),
                Cell::from(Span::styled(song.genre.clone(), dim_style())),
                Cell::from(Span::styled(song.duration.clone(), muted_style())),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Percentage(40),
        Constraint::Percentage(28),
        Constraint::Percentage(18),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(if focused { selected_style() } else { normal_style() })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style(focused, &theme)),
        );

    let mut table_state = TableState::default();
    if !playlist.songs.is_empty() {
        table_state.select(Some(state.track_cursor.min(playlist.songs.len() - 1)));
    }
    f.render_stateful_widget(table, area, &mut table_state);
}
