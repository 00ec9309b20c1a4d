use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::engine::days_in_month;

/// A real Gregorian date. Impossible combinations never become a
/// `CalendarDate`; they are rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn add_days(self, days: i64) -> Option<Self> {
        let magnitude = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.0.checked_add_days(magnitude)
        } else {
            self.0.checked_sub_days(magnitude)
        };
        shifted.map(Self)
    }

    /// Shifts by whole months, clamping the day to the destination month's
    /// length (Jan 31 + 1 month is the last day of February).
    pub fn add_months(self, months: i32) -> Option<Self> {
        let magnitude = Months::new(months.unsigned_abs());
        let shifted = if months >= 0 {
            self.0.checked_add_months(magnitude)
        } else {
            self.0.checked_sub_months(magnitude)
        };
        shifted.map(Self)
    }

    pub fn add_years(self, years: i32) -> Option<Self> {
        self.add_months(years.checked_mul(12)?)
    }

    pub fn with_month(self, month: u32) -> Option<Self> {
        Self::clamped(self.year(), month, self.day())
    }

    pub fn with_year(self, year: i32) -> Option<Self> {
        Self::clamped(year, self.month(), self.day())
    }

    pub fn first_of_month(self) -> Self {
        self.0.with_day(1).map(Self).unwrap_or(self)
    }

    pub fn start_of_week(self, first_day: Weekday) -> Option<Self> {
        let offset = days_since(self.weekday(), first_day);
        self.add_days(-i64::from(offset))
    }

    pub fn end_of_week(self, first_day: Weekday) -> Option<Self> {
        let offset = days_since(self.weekday(), first_day);
        self.add_days(i64::from(6 - offset))
    }

    fn clamped(year: i32, month: u32, day: u32) -> Option<Self> {
        let last = days_in_month(month, year);
        if last == 0 {
            return None;
        }
        Self::from_ymd(year, month, day.min(last))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// Zero-based position of `day` in a week that starts on `first_day`.
pub fn days_since(day: Weekday, first_day: Weekday) -> u32 {
    (day.num_days_from_sunday() + 7 - first_day.num_days_from_sunday()) % 7
}

/// Inclusive date limits. A missing side is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Option<CalendarDate>,
    pub max: Option<CalendarDate>,
}

impl Bounds {
    pub fn new(min: Option<CalendarDate>, max: Option<CalendarDate>) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn impossible_dates_are_never_constructed() {
        assert!(CalendarDate::from_ymd(2019, 2, 31).is_none());
        assert!(CalendarDate::from_ymd(2021, 13, 1).is_none());
        assert!(CalendarDate::from_ymd(2021, 4, 31).is_none());
    }

    #[test]
    fn ordering_is_year_then_month_then_day() {
        assert!(date(2020, 12, 31) < date(2021, 1, 1));
        assert!(date(2021, 1, 31) < date(2021, 2, 1));
        assert!(date(2021, 2, 1) < date(2021, 2, 2));
    }

    #[test]
    fn adding_a_month_to_january_31_lands_on_end_of_february() {
        assert_eq!(date(2021, 1, 31).add_months(1), Some(date(2021, 2, 28)));
        assert_eq!(date(2024, 1, 31).add_months(1), Some(date(2024, 2, 29)));
    }

    #[test]
    fn subtracting_a_month_clamps_too() {
        assert_eq!(date(2021, 3, 31).add_months(-1), Some(date(2021, 2, 28)));
    }

    #[test]
    fn leap_day_plus_one_year_clamps_to_february_28() {
        assert_eq!(date(2020, 2, 29).add_years(1), Some(date(2021, 2, 28)));
        assert_eq!(date(2020, 2, 29).add_years(-4), Some(date(2016, 2, 29)));
    }

    #[test]
    fn day_shifts_cross_month_boundaries() {
        assert_eq!(date(2021, 1, 31).add_days(1), Some(date(2021, 2, 1)));
        assert_eq!(date(2021, 3, 1).add_days(-7), Some(date(2021, 2, 22)));
    }

    #[test]
    fn week_bounds_follow_first_day_of_week() {
        // 2021-01-20 is a Wednesday
        let wednesday = date(2021, 1, 20);
        assert_eq!(wednesday.start_of_week(Weekday::Sun), Some(date(2021, 1, 17)));
        assert_eq!(wednesday.end_of_week(Weekday::Sun), Some(date(2021, 1, 23)));
        assert_eq!(wednesday.start_of_week(Weekday::Mon), Some(date(2021, 1, 18)));
        assert_eq!(wednesday.end_of_week(Weekday::Mon), Some(date(2021, 1, 24)));
    }

    #[test]
    fn with_month_clamps_day() {
        assert_eq!(date(2021, 3, 31).with_month(2), Some(date(2021, 2, 28)));
        assert_eq!(date(2021, 3, 31).with_month(13), None);
    }

    #[test]
    fn serializes_as_iso_string() {
        let json = serde_json::to_string(&date(2021, 1, 5)).unwrap();
        assert_eq!(json, "\"2021-01-05\"");
    }
}
