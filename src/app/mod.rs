pub mod state;

use anyhow::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use std::{sync::Arc, time::Duration};
use tokio::time;
use tracing::{info, warn};

use crate::{
    app::state::{AppState, Focus, Notification},
    config::Config,
    events::{map_key_to_action, UserAction},
    mood::{reference_moods, MoodCatalog},
    recommend::RecommendationClient,
    session::{Applied, FetchOutcome, PlaylistSession, TracingReporter},
};

const TICK_MS: u64 = 80; // UI tick (toasts, equalizer, spinner)

pub struct App {
    pub state: AppState,
    pub session: PlaylistSession,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let client = RecommendationClient::new(&config.api_url, config.request_timeout)?;
        let catalog = MoodCatalog::new(reference_moods())?;
        let session = PlaylistSession::new(
            catalog,
            Arc::new(client),
            Arc::new(TracingReporter),
            config.request_timeout,
        );
        info!("Using recommendation service at {}", config.api_url);
        Ok(App::with_session(session))
    }

    pub fn with_session(session: PlaylistSession) -> Self {
        App { state: AppState::default(), session }
    }

    pub async fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
    ) -> Result<()> {
        let mut tick_interval = time::interval(Duration::from_millis(TICK_MS));
        let mut event_stream = EventStream::new();

        loop {
            terminal.draw(|f| crate::ui::render(f, &self.state, &self.session))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    let playing = self.session.now_playing().is_some();
                    self.state.update_eq_bars(playing);
                    self.state.tick_notification();
                }
                Some(outcome) = self.session.next_outcome() => {
                    self.on_outcome(outcome);
                }
                maybe_event = event_stream.next() => {
                    if let Some(Ok(Event::Key(key))) = maybe_event {
                        if let Some(action) = map_key_to_action(key) {
                            self.handle_action(action);
                        }
                    }
                }
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    // ── Fetch results ─────────────────────────────────────────────────────────
    pub fn on_outcome(&mut self, outcome: FetchOutcome) {
        let mood_id = outcome.mood_id.clone();
        match self.session.apply_outcome(outcome) {
            Applied::Loaded => {
                let count = self.session.state().songs().len();
                let label = self.session.selected_mood_label().unwrap_or(mood_id);
                let selected = self.session.state().selected_mood_id.as_deref();
                if let Some(pos) = selected.and_then(|id| self.session.catalog().position(id)) {
                    self.state.mood_cursor = pos;
                }
                self.state.focus = Focus::Tracks;
                self.state.track_cursor = 0;
                self.state.set_notification(Notification::info(format!(
                    "{count} songs for your {label} mood"
                )));
            }
            Applied::Failed(err) => {
                self.state.focus = Focus::Moods;
                self.state.set_notification(Notification::error(format!(
                    "Couldn't load {mood_id} playlist: {err}"
                )));
            }
            Applied::Stale => {}
        }
    }

    // ── Action handler ────────────────────────────────────────────────────────
    pub fn handle_action(&mut self, action: UserAction) {
        match action {
            UserAction::Quit => {
                self.state.should_quit = true;
            }
            UserAction::ToggleHelp => {
                self.state.show_help = !self.state.show_help;
            }
            UserAction::Back => {
                if self.state.show_help {
                    self.state.show_help = false;
                } else if self.state.focus == Focus::Tracks {
                    self.state.focus = Focus::Moods;
                }
            }
            UserAction::NavigateUp => self.state.cursor_up(),
            UserAction::NavigateDown => {
                let len = match self.state.focus {
                    Focus::Moods => self.session.catalog().len(),
                    Focus::Tracks => self.session.state().songs().len(),
                };
                self.state.cursor_down(len);
            }
            UserAction::SwitchFocus => {
                self.state.focus = match self.state.focus {
                    Focus::Moods if !self.session.state().songs().is_empty() => Focus::Tracks,
                    _ => Focus::Moods,
                };
            }
            UserAction::Select => match self.state.focus {
                Focus::Moods => self.select_mood_at(self.state.mood_cursor),
                Focus::Tracks => self.select_track_at(self.state.track_cursor),
            },
            UserAction::ClearNowPlaying => {
                if self.session.now_playing().is_some() {
                    self.session.clear_now_playing();
                    self.state.set_notification(Notification::info("Now playing cleared"));
                }
            }
            UserAction::PickMood(n) => {
                let index = (n as usize).saturating_sub(1);
                if index < self.session.catalog().len() {
                    self.state.mood_cursor = index;
                    self.select_mood_at(index);
                }
            }
        }
    }

    fn select_mood_at(&mut self, index: usize) {
        let Some(mood_id) = self.session.catalog().list().get(index).map(|m| m.id.clone()) else {
            return;
        };
        match self.session.select_mood(&mood_id) {
            Ok(_) => {
                self.state.focus = Focus::Moods;
                self.state.track_cursor = 0;
            }
            Err(e) => warn!("Mood selection rejected: {e}"),
        }
    }

    fn select_track_at(&mut self, index: usize) {
        let Some(song_id) = self.session.state().songs().get(index).map(|s| s.id.clone()) else {
            return;
        };
        if let Err(e) = self.session.select_track(&song_id) {
            warn!("Track selection rejected: {e}");
        }
    }
}
