use ratatui::style::Color;

pub const DEFAULT_THEME_KEY: &str = "default";

/// Two-stop gradient plus an accent, one per mood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub key: &'static str,
    pub start: Color,
    pub end: Color,
    pub accent: Color,
}

impl Theme {
    pub fn for_key(key: &str) -> Self {
        match key {
            "happy" => Theme {
                key: "happy",
                start: Color::Rgb(240, 147, 251),
                end: Color::Rgb(245, 87, 108),
                accent: Color::Rgb(240, 147, 251),
            },
            "sad" => Theme {
                key: "sad",
                start: Color::Rgb(79, 172, 254),
                end: Color::Rgb(0, 242, 254),
                accent: Color::Rgb(79, 172, 254),
            },
            "calm" => Theme {
                key: "calm",
                start: Color::Rgb(67, 233, 123),
                end: Color::Rgb(56, 249, 215),
                accent: Color::Rgb(67, 233, 123),
            },
            "energetic" => Theme {
                key: "energetic",
                start: Color::Rgb(250, 112, 154),
                end: Color::Rgb(254, 225, 64),
                accent: Color::Rgb(250, 112, 154),
            },
            _ => Theme::default_theme(),
        }
    }

    pub fn default_theme() -> Self {
        Theme {
            key: DEFAULT_THEME_KEY,
            start: Color::Rgb(102, 126, 234),
            end: Color::Rgb(118, 75, 162),
            accent: Color::Rgb(102, 126, 234),
        }
    }

    pub fn is_default(&self) -> bool {
        self.key == DEFAULT_THEME_KEY
    }

    /// Darkened gradient start, used as the content background.
    pub fn backdrop(&self) -> Color {
        match self.start {
            Color::Rgb(r, g, b) => Color::Rgb(r / 6, g / 6, b / 6),
            other => other,
        }
    }
}
