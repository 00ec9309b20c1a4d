//! Live-region narration for screen readers.
//!
//! Narration always replaces what was there before. `None` means the
//! transition is silent and the previous narration stays.

use crate::calendar::{CalendarViewState, Navigation, ViewMode};
use crate::date::{
    engine::{long_label, month_year_label},
    Locale,
};

pub const NAVIGATION_INSTRUCTIONS: [&str; 5] = [
    "You can navigate by day using left and right arrows",
    "Weeks by using up and down arrows",
    "Months by using page up and page down keys",
    "Years by using shift plus page up and shift plus page down",
    "Home and end keys navigate to the beginning and end of a week",
];

pub const SELECT_MONTH: &str = "Select a month.";
pub const SELECTED_DATE: &str = "Selected date";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    Opened,
    Closed,
    Navigated(Navigation),
    /// The external field was retyped while the calendar was open.
    Resynced,
}

pub fn announce(
    previous: Option<&CalendarViewState>,
    next: Option<&CalendarViewState>,
    event: PickerEvent,
    locale: &Locale,
) -> Option<String> {
    match event {
        PickerEvent::Opened => Some(NAVIGATION_INSTRUCTIONS.join("\n")),
        PickerEvent::Closed => Some(String::new()),
        PickerEvent::Navigated(nav) => {
            let next = next?;
            if previous == Some(next) {
                return None;
            }
            match nav {
                Navigation::OpenMonthSelect => Some(SELECT_MONTH.to_string()),
                Navigation::OpenYearSelect
                | Navigation::PreviousYearChunk
                | Navigation::NextYearChunk => Some(year_chunk_narration(next)),
                Navigation::MoveHighlight(_) => {
                    let chunk_changed = previous.is_some_and(|p| p.year_chunk_start != next.year_chunk_start);
                    (next.mode == ViewMode::YearSelect && chunk_changed)
                        .then(|| year_chunk_narration(next))
                }
                _ => Some(focus_narration(next, locale)),
            }
        }
        PickerEvent::Resynced => {
            let next = next?;
            (previous != Some(next)).then(|| focus_narration(next, locale))
        }
    }
}

pub fn year_chunk_narration(state: &CalendarViewState) -> String {
    format!(
        "Showing years {} to {}. Select a year.",
        state.year_chunk_start,
        state.year_chunk_end()
    )
}

pub fn focus_narration(state: &CalendarViewState, locale: &Locale) -> String {
    let mut parts = vec![
        long_label(state.focused_date, locale),
        month_year_label(state.displayed_year, state.displayed_month, locale),
    ];
    if state.focus_is_selected() {
        parts.push(SELECTED_DATE.to_string());
    }
    parts.join(". ")
}
