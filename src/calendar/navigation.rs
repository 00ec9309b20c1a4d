use chrono::Weekday;
use tracing::debug;

use super::view_state::{CalendarViewState, ViewMode};
use crate::date::{
    engine::{clamp_to_bounds, year_chunk_start},
    Bounds, CalendarDate, YEAR_CHUNK,
};

/// Columns of the month and year selector grids.
pub const SELECTOR_COLUMNS: i32 = 3;

/// Movement of the highlight inside the month or year selector grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Left,
    Right,
    Up,
    Down,
    RowStart,
    RowEnd,
    First,
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    PreviousDay,
    NextDay,
    PreviousWeek,
    NextWeek,
    PreviousMonth,
    NextMonth,
    PreviousYear,
    NextYear,
    StartOfWeek,
    EndOfWeek,
    FocusDate(CalendarDate),
    OpenMonthSelect,
    OpenYearSelect,
    MoveHighlight(GridMove),
    PreviousYearChunk,
    NextYearChunk,
    ChooseMonth(u32),
    ChooseYear(i32),
}

impl CalendarViewState {
    /// Pure transition. Intents that do not apply to the current mode, or
    /// that would leave the representable date range, return the state
    /// unchanged.
    pub fn apply(self, nav: Navigation, bounds: &Bounds, first_day: Weekday) -> Self {
        debug!(?nav, mode = ?self.mode, focused = ?self.focused_date, "calendar transition");

        match (self.mode, nav) {
            (ViewMode::DayGrid, Navigation::OpenMonthSelect) => Self {
                mode: ViewMode::MonthSelect,
                highlighted_month: self.displayed_month,
                ..self
            },
            (ViewMode::DayGrid, Navigation::OpenYearSelect) => Self {
                mode: ViewMode::YearSelect,
                year_chunk_start: year_chunk_start(self.displayed_year),
                highlighted_year: self.displayed_year,
                ..self
            },
            (ViewMode::DayGrid, _) => {
                let target = self.day_target(nav, first_day);
                match target {
                    Some(date) => self.focus(clamp_to_bounds(date, bounds)),
                    None => self,
                }
            }
            (ViewMode::MonthSelect, Navigation::MoveHighlight(step)) => Self {
                highlighted_month: move_month_highlight(self.highlighted_month, step),
                ..self
            },
            (ViewMode::MonthSelect, Navigation::ChooseMonth(month)) => {
                match self.focused_date.with_month(month) {
                    Some(date) => self.back_to_day_grid(date, bounds),
                    None => self,
                }
            }
            (ViewMode::YearSelect, Navigation::MoveHighlight(step)) => {
                let year = self.move_year_highlight(step);
                self.highlight_year(year, bounds)
            }
            (ViewMode::YearSelect, Navigation::PreviousYearChunk) => self.shift_chunk(-YEAR_CHUNK, bounds),
            (ViewMode::YearSelect, Navigation::NextYearChunk) => self.shift_chunk(YEAR_CHUNK, bounds),
            (ViewMode::YearSelect, Navigation::ChooseYear(year)) => {
                match self.focused_date.with_year(year) {
                    Some(date) => self.back_to_day_grid(date, bounds),
                    None => self,
                }
            }
            _ => self,
        }
    }

    fn day_target(&self, nav: Navigation, first_day: Weekday) -> Option<CalendarDate> {
        let focused = self.focused_date;
        match nav {
            Navigation::PreviousDay => focused.add_days(-1),
            Navigation::NextDay => focused.add_days(1),
            Navigation::PreviousWeek => focused.add_days(-7),
            Navigation::NextWeek => focused.add_days(7),
            Navigation::PreviousMonth => focused.add_months(-1),
            Navigation::NextMonth => focused.add_months(1),
            Navigation::PreviousYear => focused.add_years(-1),
            Navigation::NextYear => focused.add_years(1),
            Navigation::StartOfWeek => focused.start_of_week(first_day),
            Navigation::EndOfWeek => focused.end_of_week(first_day),
            Navigation::FocusDate(date) => Some(date),
            _ => None,
        }
    }

    fn back_to_day_grid(self, date: CalendarDate, bounds: &Bounds) -> Self {
        Self {
            mode: ViewMode::DayGrid,
            ..self
        }
        .focus(clamp_to_bounds(date, bounds))
    }

    fn shift_chunk(self, delta: i32, bounds: &Bounds) -> Self {
        match self.highlighted_year.checked_add(delta) {
            Some(year) => self.highlight_year(year, bounds),
            None => self,
        }
    }

    /// Moves the year highlight, loading its chunk. A chunk with no year
    /// inside the bounds is never shown.
    fn highlight_year(self, year: i32, bounds: &Bounds) -> Self {
        let start = year_chunk_start(year);
        let end = start + YEAR_CHUNK - 1;
        let chunk_out_of_bounds =
            bounds.min.is_some_and(|min| end < min.year()) || bounds.max.is_some_and(|max| start > max.year());
        if chunk_out_of_bounds {
            return self;
        }
        Self {
            highlighted_year: year,
            year_chunk_start: start,
            ..self
        }
    }

    fn move_year_highlight(&self, step: GridMove) -> i32 {
        let year = self.highlighted_year;
        let column = (year - self.year_chunk_start).rem_euclid(SELECTOR_COLUMNS);
        match step {
            GridMove::Left => year - 1,
            GridMove::Right => year + 1,
            GridMove::Up => year - SELECTOR_COLUMNS,
            GridMove::Down => year + SELECTOR_COLUMNS,
            GridMove::RowStart => year - column,
            GridMove::RowEnd => year + (SELECTOR_COLUMNS - 1 - column),
            GridMove::First => self.year_chunk_start,
            GridMove::Last => self.year_chunk_start + YEAR_CHUNK - 1,
        }
    }
}

fn move_month_highlight(month: u32, step: GridMove) -> u32 {
    let month = month as i32;
    let column = (month - 1).rem_euclid(SELECTOR_COLUMNS);
    let target = match step {
        GridMove::Left => month - 1,
        GridMove::Right => month + 1,
        GridMove::Up => month - SELECTOR_COLUMNS,
        GridMove::Down => month + SELECTOR_COLUMNS,
        GridMove::RowStart => month - column,
        GridMove::RowEnd => month + (SELECTOR_COLUMNS - 1 - column),
        GridMove::First => 1,
        GridMove::Last => 12,
    };
    target.clamp(1, 12) as u32
}
