use serde::Serialize;

use crate::calendar::CalendarViewState;
use crate::date::{
    engine::{days_in_month, is_within_bounds, long_label, month_year_label},
    Bounds, CalendarDate, Locale,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub weekday_headers: Vec<String>,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Week {
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    pub date: CalendarDate,
    pub label: String,
    pub is_selected: bool,
    pub is_focused: bool,
    pub is_today: bool,
    pub is_current_month: bool,
    pub is_disabled: bool,
}

impl DayCell {
    pub fn new(date: CalendarDate, label: String) -> Self {
        Self {
            date,
            label,
            is_selected: false,
            is_focused: false,
            is_today: false,
            is_current_month: true,
            is_disabled: false,
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn with_focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn with_today(mut self, today: bool) -> Self {
        self.is_today = today;
        self
    }

    pub fn with_current_month(mut self, current_month: bool) -> Self {
        self.is_current_month = current_month;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }
}

impl MonthLayout {
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| &week.days)
    }

    pub fn cell(&self, date: CalendarDate) -> Option<&DayCell> {
        self.cells().find(|cell| cell.date == date)
    }
}

/// Whole weeks covering the displayed month, padded with the neighbouring
/// months' days.
pub fn calculate_layout(
    state: &CalendarViewState,
    locale: &Locale,
    bounds: &Bounds,
    today: CalendarDate,
) -> MonthLayout {
    let year = state.displayed_year;
    let month = state.displayed_month;
    let first_day = locale.first_day_of_week;

    let mut layout = MonthLayout {
        year,
        month,
        title: month_year_label(year, month, locale),
        weekday_headers: locale.weekday_headers().into_iter().map(str::to_string).collect(),
        weeks: Vec::new(),
    };

    let Some(first) = CalendarDate::from_ymd(year, month, 1) else {
        return layout;
    };
    let Some(last) = CalendarDate::from_ymd(year, month, days_in_month(month, year)) else {
        return layout;
    };
    let (Some(start), Some(end)) = (first.start_of_week(first_day), last.end_of_week(first_day)) else {
        return layout;
    };

    let mut current_week = Week { days: Vec::with_capacity(7) };
    let mut current = start;
    loop {
        let cell = DayCell::new(current, long_label(current, locale))
            .with_selected(state.is_selected(current))
            .with_focused(current == state.focused_date)
            .with_today(current == today)
            .with_current_month(current.month() == month && current.year() == year)
            .with_disabled(!is_within_bounds(current, bounds));
        current_week.days.push(cell);

        if current_week.days.len() == 7 {
            layout.weeks.push(std::mem::replace(&mut current_week, Week { days: Vec::with_capacity(7) }));
        }

        if current >= end {
            break;
        }
        let Some(next) = current.add_days(1) else { break };
        current = next;
    }

    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    fn layout_for(selected: CalendarDate, bounds: &Bounds, locale: &Locale) -> MonthLayout {
        let state = CalendarViewState::open(Some(selected), bounds, date(2021, 1, 4));
        calculate_layout(&state, locale, bounds, date(2021, 1, 4))
    }

    #[test]
    fn month_layout_has_correct_year_and_month() {
        let layout = layout_for(date(2021, 1, 20), &Bounds::unbounded(), &Locale::english());

        assert_eq!(layout.year, 2021);
        assert_eq!(layout.month, 1);
        assert_eq!(layout.title, "January 2021");
    }

    #[test]
    fn each_week_has_seven_days_starting_on_sunday() {
        let layout = layout_for(date(2021, 1, 20), &Bounds::unbounded(), &Locale::english());

        for week in &layout.weeks {
            assert_eq!(week.days.len(), 7);
        }
        // January 2021 starts on a Friday and ends on a Sunday
        assert_eq!(layout.weeks.len(), 6);
        assert_eq!(layout.weeks[0].days[0].date, date(2020, 12, 27));
        assert!(!layout.weeks[0].days[0].is_current_month);
    }

    #[test]
    fn monday_first_locale_shifts_columns() {
        let layout = layout_for(date(2021, 1, 20), &Bounds::unbounded(), &Locale::spanish());

        assert_eq!(layout.weeks[0].days[0].date, date(2020, 12, 28));
        assert_eq!(layout.weekday_headers[0], "L");
        assert_eq!(layout.title, "enero 2021");
    }

    #[test]
    fn selected_and_focused_dates_are_marked() {
        let layout = layout_for(date(2021, 1, 20), &Bounds::unbounded(), &Locale::english());

        let selected: Vec<_> = layout.cells().filter(|c| c.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date, date(2021, 1, 20));
        assert_eq!(selected[0].label, "20 January 2021 Wednesday");
        assert!(selected[0].is_focused);
    }

    #[test]
    fn today_is_marked() {
        let layout = layout_for(date(2021, 1, 20), &Bounds::unbounded(), &Locale::english());
        assert!(layout.cell(date(2021, 1, 4)).unwrap().is_today);
    }

    #[test]
    fn cells_outside_bounds_are_disabled() {
        let bounds = Bounds::new(Some(date(2021, 1, 10)), Some(date(2021, 1, 20)));
        let layout = layout_for(date(2021, 1, 15), &bounds, &Locale::english());

        assert!(layout.cell(date(2021, 1, 9)).unwrap().is_disabled);
        assert!(!layout.cell(date(2021, 1, 10)).unwrap().is_disabled);
        assert!(layout.cell(date(2021, 1, 21)).unwrap().is_disabled);
    }
}
