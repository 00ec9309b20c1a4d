use crossterm::event::KeyCode;

use crate::widget::DatePicker;

/// Edits the external field one keystroke at a time. Every edit is handed
/// to the picker immediately, so validity and the change callback track
/// the text live.
pub fn handle_key(key: KeyCode, picker: &mut DatePicker) -> bool {
    if picker.is_disabled() {
        return false;
    }
    let mut text = picker.external_text().to_string();

    match key {
        KeyCode::Char(c) => text.push(c),
        KeyCode::Backspace => {
            if text.pop().is_none() {
                return false;
            }
        }
        KeyCode::Delete => {
            if text.is_empty() {
                return false;
            }
            text.clear();
        }
        _ => return false,
    }

    picker.text_changed(&text);
    true
}
