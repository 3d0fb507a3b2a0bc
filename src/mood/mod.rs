pub mod theme;

use thiserror::Error;

pub use self::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mood {
    pub id: String,
    pub display_label: String,
    pub theme_key: String,
    pub emoji: String,
    pub tagline: String,
}

impl Mood {
    pub fn new(id: impl Into<String>, display_label: impl Into<String>, theme_key: impl Into<String>) -> Self {
        Mood {
            id: id.into(),
            display_label: display_label.into(),
            theme_key: theme_key.into(),
            emoji: String::new(),
            tagline: String::new(),
        }
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    /// Label with the emoji prefix, as shown on mood pills.
    pub fn decorated_label(&self) -> String {
        if self.emoji.is_empty() {
            self.display_label.clone()
        } else {
            format!("{} {}", self.emoji, self.display_label)
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("mood catalog is empty")]
    Empty,
    #[error("duplicate mood id in catalog: {0}")]
    DuplicateId(String),
}

/// Ordered, immutable set of moods the user can pick from.
#[derive(Debug, Clone)]
pub struct MoodCatalog {
    moods: Vec<Mood>,
}

/// The four moods the recommendation service knows about.
pub fn reference_moods() -> Vec<Mood> {
    vec![
        Mood::new("Happy", "Happy", "happy")
            .with_emoji("😊")
            .with_tagline("Uplifting, sunny, sing-along"),
        Mood::new("Sad", "Sad", "sad")
            .with_emoji("😢")
            .with_tagline("Slow, tender, a little blue"),
        Mood::new("Calm", "Calm", "calm")
            .with_emoji("😌")
            .with_tagline("Lo-fi, ambient, easy breathing"),
        Mood::new("Energetic", "Energetic", "energetic")
            .with_emoji("⚡")
            .with_tagline("Fast tempo, big drops, move"),
    ]
}

impl MoodCatalog {
    pub fn new(moods: Vec<Mood>) -> Result<Self, CatalogError> {
        if moods.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, mood) in moods.iter().enumerate() {
            if moods[..i].iter().any(|m| m.id == mood.id) {
                return Err(CatalogError::DuplicateId(mood.id.clone()));
            }
        }
        Ok(MoodCatalog { moods })
    }

    #[cfg(test)]
    pub fn reference() -> Self {
        MoodCatalog::new(reference_moods()).expect("reference moods are valid")
    }

    pub fn list(&self) -> &[Mood] {
        &self.moods
    }

    pub fn lookup(&self, id: &str) -> Option<&Mood> {
        self.moods.iter().find(|m| m.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.moods.iter().position(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.moods.len()
    }

    /// Theme for a mood id, falling back to the default theme for unknown ids.
    pub fn theme_for(&self, id: Option<&str>) -> Theme {
        id.and_then(|id| self.lookup(id))
            .map(|mood| Theme::for_key(&mood.theme_key))
            .unwrap_or_else(Theme::default_theme)
    }
}
