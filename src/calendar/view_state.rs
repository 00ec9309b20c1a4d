use serde::Serialize;

use crate::date::{
    engine::{clamp_to_bounds, year_chunk_start},
    Bounds, CalendarDate,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViewMode {
    DayGrid,
    MonthSelect,
    YearSelect,
}

/// Everything the open calendar displays. Replaced wholesale on every
/// transition and discarded when the calendar closes.
///
/// While `mode` is `DayGrid`, `focused_date` always lies in
/// `displayed_year`/`displayed_month`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarViewState {
    pub displayed_year: i32,
    pub displayed_month: u32,
    pub focused_date: CalendarDate,
    pub selected_date: Option<CalendarDate>,
    pub mode: ViewMode,
    pub year_chunk_start: i32,
    pub highlighted_month: u32,
    pub highlighted_year: i32,
}

impl CalendarViewState {
    /// Seeds a freshly opened calendar from the committed value, or from
    /// today when there is none. Focus is clamped into `bounds`; the
    /// selection is left as committed.
    pub fn open(committed: Option<CalendarDate>, bounds: &Bounds, today: CalendarDate) -> Self {
        let focused = clamp_to_bounds(committed.unwrap_or(today), bounds);
        Self {
            displayed_year: focused.year(),
            displayed_month: focused.month(),
            focused_date: focused,
            selected_date: committed,
            mode: ViewMode::DayGrid,
            year_chunk_start: year_chunk_start(focused.year()),
            highlighted_month: focused.month(),
            highlighted_year: focused.year(),
        }
    }

    /// Follows a date typed into the external field while the calendar is open.
    pub fn resync(self, typed: CalendarDate, bounds: &Bounds) -> Self {
        let state = Self {
            selected_date: Some(typed),
            ..self
        };
        state.focus(clamp_to_bounds(typed, bounds))
    }

    /// The external field no longer holds a date; focus and display stay put.
    pub fn clear_selection(self) -> Self {
        Self {
            selected_date: None,
            ..self
        }
    }

    pub(crate) fn focus(self, date: CalendarDate) -> Self {
        Self {
            displayed_year: date.year(),
            displayed_month: date.month(),
            focused_date: date,
            ..self
        }
    }

    pub fn is_selected(&self, date: CalendarDate) -> bool {
        self.selected_date == Some(date)
    }

    pub fn focus_is_selected(&self) -> bool {
        self.is_selected(self.focused_date)
    }

    pub fn year_chunk_end(&self) -> i32 {
        self.year_chunk_start + crate::date::YEAR_CHUNK - 1
    }
}
