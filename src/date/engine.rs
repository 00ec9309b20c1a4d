use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use super::{Bounds, CalendarDate, DateOrder, Locale};

/// Number of years shown at once by the year selector.
pub const YEAR_CHUNK: i32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum InvalidDate {
    #[error("text does not match the expected date shape")]
    UnparseableInput,
    #[error("date does not exist in the calendar")]
    ImpossibleDate,
    #[error("date is outside the allowed range")]
    OutOfBounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseResult {
    Date(CalendarDate),
    Invalid(InvalidDate),
    Empty,
}

impl ParseResult {
    pub fn date(&self) -> Option<CalendarDate> {
        match self {
            ParseResult::Date(date) => Some(*date),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationState {
    pub is_valid: bool,
    pub message: String,
    #[serde(skip)]
    pub error: Option<InvalidDate>,
}

impl ValidationState {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
            error: None,
        }
    }

    fn invalid(error: InvalidDate, locale: &Locale) -> Self {
        Self {
            is_valid: false,
            message: locale.validation_message.clone(),
            error: Some(error),
        }
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in `month` of `year`; zero when `month` is not 1..=12.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Parses a short numeric date in the locale's field order.
///
/// Month and day take one or two digits, the year two or four. Two-digit
/// years resolve to whichever century candidate lies nearest `today`
/// (a symmetric fifty-year window, ties going to the past).
pub fn parse(text: &str, locale: &Locale, today: CalendarDate) -> ParseResult {
    static SHORT_DATE_RE: OnceLock<Regex> = OnceLock::new();

    let text = text.trim();
    if text.is_empty() {
        return ParseResult::Empty;
    }

    let pattern = SHORT_DATE_RE.get_or_init(|| {
        Regex::new(r"^(\d{1,4})\s*[/.\-]\s*(\d{1,4})\s*[/.\-]\s*(\d{1,4})$")
            .expect("invalid short date regex")
    });

    let Some(captures) = pattern.captures(text) else {
        return ParseResult::Invalid(InvalidDate::UnparseableInput);
    };
    let fields = [&captures[1], &captures[2], &captures[3]];

    let (month_str, day_str, year_str) = match locale.order {
        DateOrder::Mdy => (fields[0], fields[1], fields[2]),
        DateOrder::Dmy => (fields[1], fields[0], fields[2]),
        DateOrder::Ymd => (fields[1], fields[2], fields[0]),
    };

    if month_str.len() > 2 || day_str.len() > 2 || !matches!(year_str.len(), 2 | 4) {
        return ParseResult::Invalid(InvalidDate::UnparseableInput);
    }

    let (Ok(month), Ok(day), Ok(year)) = (
        month_str.parse::<u32>(),
        day_str.parse::<u32>(),
        year_str.parse::<i32>(),
    ) else {
        return ParseResult::Invalid(InvalidDate::UnparseableInput);
    };

    let year = if year_str.len() == 2 {
        expand_two_digit_year(year, today)
    } else {
        year
    };

    if day == 0 || day > days_in_month(month, year) {
        return ParseResult::Invalid(InvalidDate::ImpossibleDate);
    }

    match CalendarDate::from_ymd(year, month, day) {
        Some(date) => ParseResult::Date(date),
        None => ParseResult::Invalid(InvalidDate::ImpossibleDate),
    }
}

fn expand_two_digit_year(two_digits: i32, today: CalendarDate) -> i32 {
    let current = today.year();
    let candidate = current - current.rem_euclid(100) + two_digits;
    [candidate - 100, candidate, candidate + 100]
        .into_iter()
        .min_by_key(|year| ((year - current).abs(), *year > current))
        .unwrap_or(candidate)
}

/// Display string in the locale's numeric pattern, e.g. `01/15/2021`.
pub fn format(date: CalendarDate, locale: &Locale) -> String {
    let month = format!("{:02}", date.month());
    let day = format!("{:02}", date.day());
    let year = format!("{:04}", date.year());
    let sep = locale.separator.as_char();

    match locale.order {
        DateOrder::Mdy => format!("{month}{sep}{day}{sep}{year}"),
        DateOrder::Dmy => format!("{day}{sep}{month}{sep}{year}"),
        DateOrder::Ymd => format!("{year}{sep}{month}{sep}{day}"),
    }
}

/// Normalized form used for form submission, `YYYY-MM-DD`.
pub fn to_internal(date: CalendarDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

pub fn parse_internal(value: &str) -> Option<CalendarDate> {
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .map(CalendarDate::from)
}

/// Accessible label of a day cell: `20 January 2021 Wednesday`.
pub fn long_label(date: CalendarDate, locale: &Locale) -> String {
    format!(
        "{} {} {} {}",
        date.day(),
        locale.month_name(date.month()),
        date.year(),
        locale.weekday_name(date.weekday()),
    )
}

pub fn month_year_label(year: i32, month: u32, locale: &Locale) -> String {
    format!("{} {}", locale.month_name(month), year)
}

pub fn is_within_bounds(date: CalendarDate, bounds: &Bounds) -> bool {
    bounds.min.is_none_or(|min| date >= min) && bounds.max.is_none_or(|max| date <= max)
}

/// Nearest in-bounds date. Only ever used to pick a focus target.
pub fn clamp_to_bounds(date: CalendarDate, bounds: &Bounds) -> CalendarDate {
    match (bounds.min, bounds.max) {
        (Some(min), _) if date < min => min,
        (_, Some(max)) if date > max => max,
        _ => date,
    }
}

pub fn year_chunk_start(year: i32) -> i32 {
    year - year.rem_euclid(YEAR_CHUNK)
}

/// Recomputes validity of the external field's raw text.
pub fn validate(text: &str, bounds: &Bounds, locale: &Locale, today: CalendarDate) -> ValidationState {
    match parse(text, locale, today) {
        ParseResult::Empty => ValidationState::valid(),
        ParseResult::Invalid(error) => ValidationState::invalid(error, locale),
        ParseResult::Date(date) if !is_within_bounds(date, bounds) => {
            ValidationState::invalid(InvalidDate::OutOfBounds, locale)
        }
        ParseResult::Date(_) => ValidationState::valid(),
    }
}
