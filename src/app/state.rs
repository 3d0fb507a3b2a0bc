#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Moods,
    Tracks,
}

#[derive(Debug, Clone, Default)]
pub struct Notification {
    pub message: String,
    pub remaining_ticks: u8,
    pub is_error: bool,
}

impl Notification {
    pub fn info(msg: impl Into<String>) -> Self {
        Notification { message: msg.into(), remaining_ticks: 30, is_error: false }
    }
    pub fn error(msg: impl Into<String>) -> Self {
        Notification { message: msg.into(), remaining_ticks: 40, is_error: true }
    }
}

/// View-only state: cursors, overlays and animation. Session data lives in
/// `PlaylistSession`.
pub struct AppState {
    pub focus: Focus,
    pub mood_cursor: usize,
    pub track_cursor: usize,
    pub notification: Option<Notification>,
    pub show_help: bool,
    pub should_quit: bool,
    pub eq_bars: [u8; 3],
    pub tick: u64,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            focus: Focus::Moods,
            mood_cursor: 0,
            track_cursor: 0,
            notification: None,
            show_help: false,
            should_quit: false,
            eq_bars: [3, 6, 4],
            tick: 0,
        }
    }
}

impl AppState {
    pub fn set_notification(&mut self, n: Notification) {
        self.notification = Some(n);
    }

    pub fn tick_notification(&mut self) {
        if let Some(ref mut n) = self.notification {
            if n.remaining_ticks > 0 {
                n.remaining_ticks -= 1;
            } else {
                self.notification = None;
            }
        }
    }

    /// Bounces the now-playing equalizer while a track is marked, settles it otherwise.
    pub fn update_eq_bars(&mut self, playing: bool) {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        self.tick += 1;
        if playing {
            for bar in self.eq_bars.iter_mut() {
                let delta: i8 = rng.gen_range(-2..=2);
                *bar = (*bar as i8 + delta).clamp(1, 8) as u8;
            }
        } else {
            for bar in self.eq_bars.iter_mut() {
                if *bar > 1 {
                    *bar -= 1;
                }
            }
        }
    }

    pub fn cursor_up(&mut self) {
        let cursor = self.cursor_mut();
        *cursor = cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self, len: usize) {
        let cursor = self.cursor_mut();
        if *cursor + 1 < len {
            *cursor += 1;
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.focus {
            Focus::Moods => &mut self.mood_cursor,
            Focus::Tracks => &mut self.track_cursor,
        }
    }
}
