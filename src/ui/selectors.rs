use serde::Serialize;

use crate::calendar::{CalendarViewState, SELECTOR_COLUMNS};
use crate::date::{Bounds, Locale, YEAR_CHUNK};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSelectorLayout {
    pub year: i32,
    pub options: Vec<MonthOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthOption {
    pub month: u32,
    pub label: String,
    pub is_selected: bool,
    pub is_highlighted: bool,
    pub is_disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSelectorLayout {
    pub chunk_start: i32,
    pub chunk_end: i32,
    pub rows: Vec<Vec<YearOption>>,
    pub previous_chunk_disabled: bool,
    pub next_chunk_disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearOption {
    pub year: i32,
    pub is_selected: bool,
    pub is_highlighted: bool,
    pub is_disabled: bool,
}

impl MonthSelectorLayout {
    pub fn rows(&self) -> impl Iterator<Item = &[MonthOption]> {
        self.options.chunks(SELECTOR_COLUMNS as usize)
    }
}

impl YearSelectorLayout {
    pub fn contains(&self, year: i32) -> bool {
        (self.chunk_start..=self.chunk_end).contains(&year)
    }
}

pub fn month_selector(state: &CalendarViewState, locale: &Locale, bounds: &Bounds) -> MonthSelectorLayout {
    let year = state.displayed_year;
    let options = (1..=12)
        .map(|month| MonthOption {
            month,
            label: locale.month_name(month).to_string(),
            is_selected: month == state.displayed_month,
            is_highlighted: month == state.highlighted_month,
            is_disabled: month_out_of_bounds(year, month, bounds),
        })
        .collect();

    MonthSelectorLayout { year, options }
}

pub fn year_selector(state: &CalendarViewState, bounds: &Bounds) -> YearSelectorLayout {
    let chunk_start = state.year_chunk_start;
    let chunk_end = chunk_start + YEAR_CHUNK - 1;

    let years: Vec<YearOption> = (chunk_start..=chunk_end)
        .map(|year| YearOption {
            year,
            is_selected: year == state.displayed_year,
            is_highlighted: year == state.highlighted_year,
            is_disabled: year_out_of_bounds(year, bounds),
        })
        .collect();

    YearSelectorLayout {
        chunk_start,
        chunk_end,
        rows: years.chunks(SELECTOR_COLUMNS as usize).map(<[YearOption]>::to_vec).collect(),
        previous_chunk_disabled: bounds.min.is_some_and(|min| min.year() >= chunk_start),
        next_chunk_disabled: bounds.max.is_some_and(|max| max.year() <= chunk_end),
    }
}

fn month_out_of_bounds(year: i32, month: u32, bounds: &Bounds) -> bool {
    let key = (year, month);
    bounds.min.is_some_and(|min| key < (min.year(), min.month()))
        || bounds.max.is_some_and(|max| key > (max.year(), max.month()))
}

fn year_out_of_bounds(year: i32, bounds: &Bounds) -> bool {
    bounds.min.is_some_and(|min| year < min.year()) || bounds.max.is_some_and(|max| year > max.year())
}
