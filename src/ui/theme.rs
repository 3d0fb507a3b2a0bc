use ratatui::style::{Color, Modifier, Style};

use crate::mood::Theme;

// ─── Color Palette ───────────────────────────────────────────────────────────
pub const BG:          Color = Color::Rgb(18,  18,  18);  // #121212, the welcome backdrop
pub const SURFACE:     Color = Color::Rgb(24,  24,  24);
pub const SURFACE_SEL: Color = Color::Rgb(40,  40,  40);

pub const TEXT:        Color = Color::Rgb(255, 255, 255);
pub const TEXT_DIM:    Color = Color::Rgb(179, 179, 179);
pub const TEXT_MUTED:  Color = Color::Rgb(110, 110, 110);

pub const BORDER:      Color = Color::Rgb(60,  60,  60);
pub const PLAYING:     Color = Color::Rgb(30,  215, 96);  // now-playing green

pub const ERROR:       Color = Color::Rgb(255, 90,  90);

// ─── Styles ──────────────────────────────────────────────────────────────────
pub fn title_style(theme: &Theme) -> Style {
    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
}

pub fn accent_style(theme: &Theme) -> Style {
    Style::default().fg(theme.end)
}

pub fn selected_style() -> Style {
    Style::default()
        .bg(SURFACE_SEL)
        .fg(TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn muted_style() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn border_style(focused: bool, theme: &Theme) -> Style {
    if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(BORDER)
    }
}

pub fn playing_style() -> Style {
    Style::default().fg(PLAYING).add_modifier(Modifier::BOLD)
}

pub fn error_style() -> Style {
    Style::default().fg(ERROR).add_modifier(Modifier::BOLD)
}

pub fn header_style() -> Style {
    Style::default().fg(TEXT_DIM).add_modifier(Modifier::BOLD)
}

/// Filled pill for the active mood.
pub fn pill_style(theme: &Theme) -> Style {
    Style::default()
        .fg(BG)
        .bg(theme.start)
        .add_modifier(Modifier::BOLD)
}

/// Content background: plain dark until a mood is picked, then tinted.
pub fn backdrop_style(theme: &Theme) -> Style {
    let bg = if theme.is_default() { BG } else { theme.backdrop() };
    Style::default().bg(bg).fg(TEXT)
}

pub fn surface_style() -> Style {
    Style::default().bg(SURFACE).fg(TEXT)
}
