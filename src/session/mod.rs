pub mod report;
pub mod state;

use std::{sync::Arc, time::Duration};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::{
    mood::{MoodCatalog, Theme},
    recommend::{FetchError, Playlist, RecommendationSource, Song},
};

pub use self::report::{FailureReport, FailureReporter, TracingReporter};
pub use self::state::{Phase, SessionState};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown mood: {0}")]
    UnknownMood(String),
    #[error("no playlist is loaded")]
    NotLoaded,
    #[error("song {0} is not in the current playlist")]
    UnknownSong(String),
}

/// Result of one `select_mood` request, tagged with the generation that issued it.
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub mood_id: String,
    pub result: Result<Playlist, FetchError>,
}

/// What [`PlaylistSession::apply_outcome`] did with an outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    Loaded,
    Failed(FetchError),
    /// A newer selection superseded this request; state was left alone.
    Stale,
}

/// Owns the session state and drives the mood → fetch → render cycle.
///
/// Every `select_mood` bumps a generation counter and spawns one fetch task.
/// Tasks report back over a channel; only the outcome whose generation still
/// matches is committed, so a slow response can never overwrite a newer pick.
pub struct PlaylistSession {
    catalog: MoodCatalog,
    source: Arc<dyn RecommendationSource>,
    reporter: Arc<dyn FailureReporter>,
    timeout: Duration,
    state: SessionState,
    generation: u64,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl PlaylistSession {
    pub fn new(
        catalog: MoodCatalog,
        source: Arc<dyn RecommendationSource>,
        reporter: Arc<dyn FailureReporter>,
        timeout: Duration,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        PlaylistSession {
            catalog,
            source,
            reporter,
            timeout,
            state: SessionState::default(),
            generation: 0,
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn catalog(&self) -> &MoodCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> SessionState {
        self.state.clone()
    }

    // ── Mood selection ───────────────────────────────────────────────────────

    /// Switches to `Loading` for `mood_id` and starts the fetch in the background.
    /// Returns the generation assigned to the request.
    pub fn select_mood(&mut self, mood_id: &str) -> Result<u64, SessionError> {
        if self.catalog.lookup(mood_id).is_none() {
            return Err(SessionError::UnknownMood(mood_id.to_string()));
        }

        self.generation += 1;
        let generation = self.generation;

        self.state.selected_mood_id = Some(mood_id.to_string());
        self.state.now_playing_song_id = None;
        self.state.playlist = None;
        self.state.phase = Phase::Loading;
        info!("Mood selected: {mood_id} (request #{generation})");

        let source = Arc::clone(&self.source);
        let tx = self.outcome_tx.clone();
        let timeout = self.timeout;
        let mood_id = mood_id.to_string();
        tokio::spawn(async move {
            let result = match tokio::time::timeout(timeout, source.recommend(&mood_id)).await {
                Ok(result) => result,
                Err(_) => Err(FetchError::Timeout { after: timeout }),
            };
            // Receiver lives as long as the session; a send error means it is gone.
            let _ = tx.send(FetchOutcome { generation, mood_id, result });
        });

        Ok(generation)
    }

    /// Waits for the next finished fetch, stale or not.
    pub async fn next_outcome(&mut self) -> Option<FetchOutcome> {
        self.outcome_rx.recv().await
    }

    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> Applied {
        if outcome.generation != self.generation {
            debug!(
                "Discarding stale response for {} (request #{}, current #{})",
                outcome.mood_id, outcome.generation, self.generation
            );
            return Applied::Stale;
        }

        match outcome.result {
            Ok(playlist) => {
                info!(
                    "Loaded playlist for {}: {} songs",
                    outcome.mood_id,
                    playlist.songs.len()
                );
                self.state.playlist = Some(playlist);
                self.state.phase = Phase::Loaded;
                Applied::Loaded
            }
            Err(err) => {
                self.reporter.report(&FailureReport::new(&outcome.mood_id, &err));
                self.state.playlist = None;
                self.state.phase = Phase::Idle;
                Applied::Failed(err)
            }
        }
    }

    /// Applies outcomes until one is committed. Waits forever if nothing was
    /// ever selected.
    #[cfg(test)]
    pub async fn settle(&mut self) -> Option<Applied> {
        loop {
            let outcome = self.next_outcome().await?;
            match self.apply_outcome(outcome) {
                Applied::Stale => continue,
                applied => return Some(applied),
            }
        }
    }

    // ── Track selection ──────────────────────────────────────────────────────

    pub fn select_track(&mut self, song_id: &str) -> Result<(), SessionError> {
        if self.state.phase != Phase::Loaded {
            return Err(SessionError::NotLoaded);
        }
        let playlist = self.state.playlist.as_ref().ok_or(SessionError::NotLoaded)?;
        if playlist.song(song_id).is_none() {
            return Err(SessionError::UnknownSong(song_id.to_string()));
        }
        self.state.now_playing_song_id = Some(song_id.to_string());
        Ok(())
    }

    pub fn clear_now_playing(&mut self) {
        self.state.now_playing_song_id = None;
    }

    pub fn now_playing(&self) -> Option<(usize, &Song)> {
        self.state.now_playing()
    }

    // ── Derived ──────────────────────────────────────────────────────────────

    pub fn current_theme(&self) -> Theme {
        self.catalog.theme_for(self.state.selected_mood_id.as_deref())
    }

    pub fn selected_mood_label(&self) -> Option<String> {
        let id = self.state.selected_mood_id.as_deref()?;
        Some(
            self.catalog
                .lookup(id)
                .map(|m| m.display_label.clone())
                .unwrap_or_else(|| id.to_string()),
        )
    }
}
