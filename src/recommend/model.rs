use serde::{Deserialize, Serialize};

use super::error::FetchError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub genre: String,
    /// Human-readable, e.g. "3:40". Never parsed.
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Playlist {
    /// Catalog id the playlist was requested for.
    pub mood_id: String,
    /// The service's own `mood` label; not necessarily equal to `mood_id`.
    pub mood_label: String,
    pub description: String,
    /// Advisory count reported by the service. Iterate `songs` instead.
    pub song_count: u32,
    pub total_duration: String,
    pub songs: Vec<Song>,
}

impl Playlist {
    pub fn song(&self, id: &str) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.songs.iter().position(|s| s.id == id)
    }

    pub fn title(&self) -> String {
        format!("{} Vibes", self.mood_label)
    }
}

// ── Wire format ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistResponse {
    mood: String,
    description: String,
    song_count: u32,
    total_duration: String,
    songs: Vec<SongResponse>,
}

#[derive(Debug, Deserialize)]
struct SongResponse {
    id: SongId,
    title: String,
    artist: String,
    genre: String,
    duration: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SongId {
    Text(String),
    Number(u64),
}

impl SongId {
    fn into_string(self) -> String {
        match self {
            SongId::Text(s) => s,
            SongId::Number(n) => n.to_string(),
        }
    }
}

/// Decodes a recommendation response body into a [`Playlist`] for `mood_id`.
///
/// Missing fields, empty or duplicate song ids are all treated as a decode
/// failure; partial playlists are never produced.
pub fn parse_playlist(mood_id: &str, body: &[u8]) -> Result<Playlist, FetchError> {
    let wire: PlaylistResponse =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    let mut songs: Vec<Song> = Vec::with_capacity(wire.songs.len());
    for (index, raw) in wire.songs.into_iter().enumerate() {
        let id = raw.id.into_string();
        if id.trim().is_empty() {
            return Err(FetchError::Decode(format!("song #{} has an empty id", index + 1)));
        }
        if songs.iter().any(|s| s.id == id) {
            return Err(FetchError::Decode(format!("duplicate song id {id:?}")));
        }
        songs.push(Song {
            id,
            title: raw.title,
            artist: raw.artist,
            genre: raw.genre,
            duration: raw.duration,
        });
    }

    Ok(Playlist {
        mood_id: mood_id.to_string(),
        mood_label: wire.mood,
        description: wire.description,
        song_count: wire.song_count,
        total_duration: wire.total_duration,
        songs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALM: &str = r#"{
        "mood": "Calm",
        "description": "Chill vibes",
        "songCount": 2,
        "totalDuration": "7:20",
        "songs": [
            {"id": "1", "title": "A", "artist": "X", "genre": "Lo-fi", "duration": "3:40"},
            {"id": "2", "title": "B", "artist": "Y", "genre": "Ambient", "duration": "3:40"}
        ]
    }"#;

    #[test]
    fn test_parse_valid_playlist() {
        let playlist = parse_playlist("Calm", CALM.as_bytes()).unwrap();
        assert_eq!(playlist.mood_id, "Calm");
        assert_eq!(playlist.description, "Chill vibes");
        assert_eq!(playlist.songs.len(), 2);
        assert_eq!(playlist.songs[1].genre, "Ambient");
        assert_eq!(playlist.title(), "Calm Vibes");
    }

    #[test]
    fn test_label_kept_separate_from_catalog_id() {
        let body = CALM.replace(r#""mood": "Calm""#, r#""mood": "Calm & Collected""#);
        let playlist = parse_playlist("Calm", body.as_bytes()).unwrap();
        assert_eq!(playlist.mood_id, "Calm");
        assert_eq!(playlist.mood_label, "Calm & Collected");
    }

    #[test]
    fn test_song_count_is_advisory() {
        let body = CALM.replace(r#""songCount": 2"#, r#""songCount": 25"#);
        let playlist = parse_playlist("Calm", body.as_bytes()).unwrap();
        assert_eq!(playlist.song_count, 25);
        assert_eq!(playlist.songs.len(), 2);
    }

    #[test]
    fn test_numeric_song_ids_normalised() {
        let body = CALM.replace(r#""id": "1""#, r#""id": 1"#);
        let playlist = parse_playlist("Calm", body.as_bytes()).unwrap();
        assert_eq!(playlist.songs[0].id, "1");
        assert_eq!(playlist.position("2"), Some(1));
    }

    #[test]
    fn test_missing_field_fails_closed() {
        let body = CALM.replace(r#""artist": "Y", "#, "");
        let err = parse_playlist("Calm", body.as_bytes()).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
    }

    #[test]
    fn test_not_json() {
        let err = parse_playlist("Calm", b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_duplicate_song_ids_rejected() {
        let body = CALM.replace(r#""id": "2""#, r#""id": "1""#);
        let err = parse_playlist("Calm", body.as_bytes()).unwrap_err();
        assert_eq!(err, FetchError::Decode("duplicate song id \"1\"".into()));
    }

    #[test]
    fn test_empty_song_list_allowed() {
        let body = r#"{"mood":"Sad","description":"","songCount":0,"totalDuration":"0:00","songs":[]}"#;
        let playlist = parse_playlist("Sad", body.as_bytes()).unwrap();
        assert!(playlist.songs.is_empty());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let body = CALM.replace(r#""songCount": 2,"#, r#""songCount": 2, "coverUrl": "x","#);
        assert!(parse_playlist("Calm", body.as_bytes()).is_ok());
    }
}
