use crate::recommend::{Playlist, Song};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum_macros::Display)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded,
}

/// Everything the presentation layer may look at. Only the session mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub selected_mood_id: Option<String>,
    pub phase: Phase,
    /// Present only while `phase == Loaded`.
    pub playlist: Option<Playlist>,
    pub now_playing_song_id: Option<String>,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn songs(&self) -> &[Song] {
        self.playlist.as_ref().map(|p| p.songs.as_slice()).unwrap_or(&[])
    }

    /// Track index and song currently marked as playing.
    pub fn now_playing(&self) -> Option<(usize, &Song)> {
        let id = self.now_playing_song_id.as_deref()?;
        let playlist = self.playlist.as_ref()?;
        let index = playlist.position(id)?;
        Some((index, &playlist.songs[index]))
    }

    pub fn is_now_playing(&self, song_id: &str) -> bool {
        self.now_playing_song_id.as_deref() == Some(song_id)
    }
}
