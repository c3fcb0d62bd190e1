use portfolio_core::Key;
use ratzilla::event::KeyCode;

/// Maps a browser key onto the site's key set.
pub fn site_key(code: &KeyCode, shift: bool) -> Option<Key> {
    let key = match code {
        KeyCode::Char(ch) => Key::Char(*ch),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab if shift => Key::BackTab,
        KeyCode::Tab => Key::Tab,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Esc => Key::Esc,
        _ => return None,
    };
    Some(key)
}
