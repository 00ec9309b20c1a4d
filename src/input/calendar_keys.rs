use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::calendar::{GridMove, Navigation, ViewMode};
use crate::widget::DatePicker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCommand {
    Navigate(Navigation),
    /// Enter/Space: select the focused day, or choose the highlighted
    /// month/year in a selector.
    Activate,
    Close,
}

pub fn map_key(key: KeyEvent, mode: ViewMode) -> Option<CalendarCommand> {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match (key.code, mode) {
        (KeyCode::Esc, _) => Some(CalendarCommand::Close),
        (KeyCode::Enter | KeyCode::Char(' '), _) => Some(CalendarCommand::Activate),
        (code, ViewMode::DayGrid) => day_grid_navigation(code, shift).map(CalendarCommand::Navigate),
        (code, ViewMode::MonthSelect) => {
            let step = match code {
                KeyCode::PageUp => GridMove::First,
                KeyCode::PageDown => GridMove::Last,
                other => grid_move(other)?,
            };
            Some(CalendarCommand::Navigate(Navigation::MoveHighlight(step)))
        }
        (code, ViewMode::YearSelect) => {
            let nav = match code {
                KeyCode::PageUp => Navigation::PreviousYearChunk,
                KeyCode::PageDown => Navigation::NextYearChunk,
                other => Navigation::MoveHighlight(grid_move(other)?),
            };
            Some(CalendarCommand::Navigate(nav))
        }
    }
}

fn day_grid_navigation(code: KeyCode, shift: bool) -> Option<Navigation> {
    let nav = match code {
        KeyCode::Left => Navigation::PreviousDay,
        KeyCode::Right => Navigation::NextDay,
        KeyCode::Up => Navigation::PreviousWeek,
        KeyCode::Down => Navigation::NextWeek,
        KeyCode::PageUp if shift => Navigation::PreviousYear,
        KeyCode::PageDown if shift => Navigation::NextYear,
        KeyCode::PageUp => Navigation::PreviousMonth,
        KeyCode::PageDown => Navigation::NextMonth,
        KeyCode::Home => Navigation::StartOfWeek,
        KeyCode::End => Navigation::EndOfWeek,
        KeyCode::Char('m') => Navigation::OpenMonthSelect,
        KeyCode::Char('y') => Navigation::OpenYearSelect,
        _ => return None,
    };
    Some(nav)
}

fn grid_move(code: KeyCode) -> Option<GridMove> {
    let step = match code {
        KeyCode::Left => GridMove::Left,
        KeyCode::Right => GridMove::Right,
        KeyCode::Up => GridMove::Up,
        KeyCode::Down => GridMove::Down,
        KeyCode::Home => GridMove::RowStart,
        KeyCode::End => GridMove::RowEnd,
        _ => return None,
    };
    Some(step)
}

/// Routes a key pressed while the calendar has focus. Returns whether the
/// key was consumed.
pub fn handle_key(key: KeyEvent, picker: &mut DatePicker) -> bool {
    let Some(state) = picker.calendar() else {
        return false;
    };
    let mode = state.mode;
    let highlighted_month = state.highlighted_month;
    let highlighted_year = state.highlighted_year;

    let Some(command) = map_key(key, mode) else {
        return false;
    };
    picker.key_down_in_calendar();

    match command {
        CalendarCommand::Navigate(nav) => picker.navigate(nav),
        CalendarCommand::Close => picker.escape(),
        CalendarCommand::Activate => match mode {
            ViewMode::DayGrid => {
                picker.select_focused();
            }
            ViewMode::MonthSelect => picker.navigate(Navigation::ChooseMonth(highlighted_month)),
            ViewMode::YearSelect => picker.navigate(Navigation::ChooseYear(highlighted_year)),
        },
    }
    true
}
