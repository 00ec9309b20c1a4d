use chrono::Weekday;
use serde::{Deserialize, Serialize};

pub const VALIDATION_MESSAGE: &str = "Please enter a valid date";

/// Field order of the short numeric date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateOrder {
    #[default]
    Mdy,
    Dmy,
    Ymd,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateSeparator {
    #[default]
    #[serde(rename = "/")]
    Slash,
    #[serde(rename = ".")]
    Dot,
    #[serde(rename = "-")]
    Dash,
}

impl DateSeparator {
    pub fn as_char(self) -> char {
        match self {
            DateSeparator::Slash => '/',
            DateSeparator::Dot => '.',
            DateSeparator::Dash => '-',
        }
    }
}

/// Localized labels and the numeric display pattern.
///
/// Weekday arrays are Sunday-first regardless of `first_day_of_week`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    pub months: [String; 12],
    pub days_of_week: [String; 7],
    pub days_of_week_short: [String; 7],
    pub validation_message: String,
    pub order: DateOrder,
    pub separator: DateSeparator,
    pub first_day_of_week: Weekday,
}

impl Locale {
    pub fn english() -> Self {
        Self {
            months: strings([
                "January", "February", "March", "April", "May", "June",
                "July", "August", "September", "October", "November", "December",
            ]),
            days_of_week: strings([
                "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
            ]),
            days_of_week_short: strings(["S", "M", "T", "W", "Th", "Fr", "S"]),
            validation_message: VALIDATION_MESSAGE.to_string(),
            order: DateOrder::Mdy,
            separator: DateSeparator::Slash,
            first_day_of_week: Weekday::Sun,
        }
    }

    pub fn spanish() -> Self {
        Self {
            months: strings([
                "enero", "febrero", "marzo", "abril", "mayo", "junio",
                "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
            ]),
            days_of_week: strings([
                "domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado",
            ]),
            days_of_week_short: strings(["D", "L", "M", "X", "J", "V", "S"]),
            validation_message: "Introduzca una fecha válida".to_string(),
            order: DateOrder::Dmy,
            separator: DateSeparator::Slash,
            first_day_of_week: Weekday::Mon,
        }
    }

    pub fn get_by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "es" | "spanish" | "español" => Self::spanish(),
            _ => Self::english(),
        }
    }

    pub fn month_name(&self, month: u32) -> &str {
        let index = month.clamp(1, 12) as usize - 1;
        &self.months[index]
    }

    pub fn weekday_name(&self, day: Weekday) -> &str {
        &self.days_of_week[day.num_days_from_sunday() as usize]
    }

    pub fn weekday_short(&self, day: Weekday) -> &str {
        &self.days_of_week_short[day.num_days_from_sunday() as usize]
    }

    /// Column headers starting at `first_day_of_week`.
    pub fn weekday_headers(&self) -> Vec<&str> {
        let mut day = self.first_day_of_week;
        let mut headers = Vec::with_capacity(7);
        for _ in 0..7 {
            headers.push(self.weekday_short(day));
            day = day.succ();
        }
        headers
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

fn strings<const N: usize>(labels: [&str; N]) -> [String; N] {
    labels.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_headers_start_on_sunday() {
        let locale = Locale::english();
        assert_eq!(locale.weekday_headers(), vec!["S", "M", "T", "W", "Th", "Fr", "S"]);
    }

    #[test]
    fn spanish_headers_start_on_monday() {
        let locale = Locale::spanish();
        assert_eq!(locale.weekday_headers(), vec!["L", "M", "X", "J", "V", "S", "D"]);
    }

    #[test]
    fn month_names_are_one_based() {
        let locale = Locale::spanish();
        assert_eq!(locale.month_name(2), "febrero");
        assert_eq!(locale.month_name(12), "diciembre");
    }

    #[test]
    fn unknown_locale_name_falls_back_to_english() {
        assert_eq!(Locale::get_by_name("klingon"), Locale::english());
        assert_eq!(Locale::get_by_name("ES"), Locale::spanish());
    }

    #[test]
    fn partial_toml_keeps_english_defaults() {
        let locale: Locale = toml::from_str(r#"
            validation_message = "Bad date"
            order = "ymd"
            separator = "-"
            first_day_of_week = "Mon"
        "#).unwrap();

        assert_eq!(locale.validation_message, "Bad date");
        assert_eq!(locale.order, DateOrder::Ymd);
        assert_eq!(locale.separator, DateSeparator::Dash);
        assert_eq!(locale.first_day_of_week, Weekday::Mon);
        assert_eq!(locale.month_name(1), "January");
    }
}
