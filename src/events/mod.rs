use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    Quit,
    ToggleHelp,
    NavigateUp,
    NavigateDown,
    /// Toggle focus between the mood list and the track list
    SwitchFocus,
    Select,
    Back,
    /// Direct mood pick by 1-based position in the catalog
    PickMood(u8),
    ClearNowPlaying,
}

pub fn map_key_to_action(key: KeyEvent) -> Option<UserAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('q') => Some(UserAction::Quit),
        KeyCode::Char('?') => Some(UserAction::ToggleHelp),
        KeyCode::Up | KeyCode::Char('k') => Some(UserAction::NavigateUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UserAction::NavigateDown),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => Some(UserAction::SwitchFocus),
        KeyCode::Char('h') | KeyCode::Char('l') => Some(UserAction::SwitchFocus),
        KeyCode::Enter | KeyCode::Char(' ') => Some(UserAction::Select),
        KeyCode::Esc | KeyCode::Char('b') => Some(UserAction::Back),
        KeyCode::Char(c @ '1'..='9') => Some(UserAction::PickMood(c as u8 - b'0')),
        KeyCode::Char('x') | KeyCode::Delete => Some(UserAction::ClearNowPlaying),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_pick_moods() {
        assert_eq!(map_key_to_action(press(KeyCode::Char('1'))), Some(UserAction::PickMood(1)));
        assert_eq!(map_key_to_action(press(KeyCode::Char('9'))), Some(UserAction::PickMood(9)));
        assert_eq!(map_key_to_action(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_vim_and_arrow_navigation() {
        assert_eq!(map_key_to_action(press(KeyCode::Char('j'))), Some(UserAction::NavigateDown));
        assert_eq!(map_key_to_action(press(KeyCode::Up)), Some(UserAction::NavigateUp));
        assert_eq!(map_key_to_action(press(KeyCode::Tab)), Some(UserAction::SwitchFocus));
        assert_eq!(map_key_to_action(press(KeyCode::Char('l'))), Some(UserAction::SwitchFocus));
    }

    #[test]
    fn test_key_release_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key_to_action(key), None);
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(map_key_to_action(press(KeyCode::Char('z'))), None);
        assert_eq!(map_key_to_action(press(KeyCode::Char('x'))), Some(UserAction::ClearNowPlaying));
    }
}
