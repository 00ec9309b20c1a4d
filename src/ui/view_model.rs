//! Rendered surface of the widget. Every visibility and accessibility
//! attribute here is derived from controller state on demand.

use serde::Serialize;

use super::day_grid::{self, MonthLayout};
use super::selectors::{self, MonthSelectorLayout, YearSelectorLayout};
use crate::calendar::ViewMode;
use crate::focus::FocusTarget;
use crate::widget::{DatePicker, ValidationStatus};

pub const ROOT_TEST_ID: &str = "date-picker";
pub const INTERNAL_INPUT_TEST_ID: &str = "date-picker-internal-input";
pub const EXTERNAL_INPUT_TEST_ID: &str = "date-picker-external-input";
pub const TOGGLE_TEST_ID: &str = "date-picker-button";
pub const CALENDAR_TEST_ID: &str = "date-picker-calendar";
pub const STATUS_TEST_ID: &str = "date-picker-status";
pub const TOGGLE_LABEL: &str = "Toggle calendar";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatePickerView {
    pub test_id: &'static str,
    pub active: bool,
    pub internal_input: InternalInputView,
    pub external_input: ExternalInputView,
    pub toggle: ToggleView,
    pub calendar: CalendarPopoverView,
    pub status: StatusView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InternalInputView {
    pub test_id: &'static str,
    pub name: String,
    pub value: String,
    pub aria_hidden: bool,
    pub required: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExternalInputView {
    pub test_id: &'static str,
    pub id: String,
    pub value: String,
    pub required: bool,
    pub disabled: bool,
    pub is_valid: bool,
    pub validation_message: String,
    pub status: ValidationStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToggleView {
    pub test_id: &'static str,
    pub aria_label: &'static str,
    pub disabled: bool,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarPopoverView {
    pub test_id: &'static str,
    pub role: &'static str,
    pub visible: bool,
    pub mode: Option<ViewMode>,
    pub month_label: Option<String>,
    pub year_label: Option<String>,
    pub day_grid: Option<MonthLayout>,
    pub month_selector: Option<MonthSelectorLayout>,
    pub year_selector: Option<YearSelectorLayout>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusView {
    pub test_id: &'static str,
    pub role: &'static str,
    pub aria_live: &'static str,
    pub text: String,
}

impl DatePickerView {
    /// Whether `target` exists in this render and can take focus.
    pub fn renders(&self, target: FocusTarget) -> bool {
        let calendar = &self.calendar;
        match target {
            FocusTarget::ExternalInput | FocusTarget::ToggleButton => true,
            FocusTarget::DayCell(date) => calendar
                .day_grid
                .as_ref()
                .and_then(|grid| grid.cell(date))
                .is_some_and(|cell| !cell.is_disabled),
            FocusTarget::MonthSelectTrigger | FocusTarget::YearSelectTrigger => {
                calendar.mode == Some(ViewMode::DayGrid)
            }
            FocusTarget::MonthOption(month) => calendar.month_selector.is_some() && (1..=12).contains(&month),
            FocusTarget::YearOption(year) => calendar.year_selector.as_ref().is_some_and(|s| s.contains(year)),
            FocusTarget::PreviousYearChunk | FocusTarget::NextYearChunk => calendar.year_selector.is_some(),
            FocusTarget::Outside => false,
        }
    }
}

pub fn build(picker: &DatePicker) -> DatePickerView {
    let config = picker.config();
    let locale = picker.locale();
    let state = picker.calendar();
    let validation = picker.validation();

    let calendar = match state {
        Some(state) => CalendarPopoverView {
            test_id: CALENDAR_TEST_ID,
            role: "application",
            visible: true,
            mode: Some(state.mode),
            month_label: Some(locale.month_name(state.displayed_month).to_string()),
            year_label: Some(state.displayed_year.to_string()),
            day_grid: (state.mode == ViewMode::DayGrid)
                .then(|| day_grid::calculate_layout(state, locale, picker.bounds(), picker.today())),
            month_selector: (state.mode == ViewMode::MonthSelect)
                .then(|| selectors::month_selector(state, locale, picker.bounds())),
            year_selector: (state.mode == ViewMode::YearSelect)
                .then(|| selectors::year_selector(state, picker.bounds())),
        },
        None => CalendarPopoverView {
            test_id: CALENDAR_TEST_ID,
            role: "application",
            visible: false,
            mode: None,
            month_label: None,
            year_label: None,
            day_grid: None,
            month_selector: None,
            year_selector: None,
        },
    };

    DatePickerView {
        test_id: ROOT_TEST_ID,
        active: picker.is_open(),
        internal_input: InternalInputView {
            test_id: INTERNAL_INPUT_TEST_ID,
            name: config.name.clone(),
            value: picker.internal_value().to_string(),
            aria_hidden: true,
            required: false,
            disabled: false,
        },
        external_input: ExternalInputView {
            test_id: EXTERNAL_INPUT_TEST_ID,
            id: config.id.clone(),
            value: picker.external_text().to_string(),
            required: config.required,
            disabled: config.disabled,
            is_valid: validation.is_valid,
            validation_message: validation.message.clone(),
            status: config.validation_status,
        },
        toggle: ToggleView {
            test_id: TOGGLE_TEST_ID,
            aria_label: TOGGLE_LABEL,
            disabled: config.disabled,
            expanded: picker.is_open(),
        },
        calendar,
        status: StatusView {
            test_id: STATUS_TEST_ID,
            role: "status",
            aria_live: "polite",
            text: picker.status().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::calendar::Navigation;
    use crate::date::{CalendarDate, FixedClock, Locale};
    use crate::widget::DatePickerConfig;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    fn picker(config: DatePickerConfig) -> DatePicker {
        DatePicker::new(config, Box::new(FixedClock(date(2026, 10, 19))))
    }

    #[test]
    fn closed_widget_renders_hidden_calendar_and_empty_status() {
        let view = picker(DatePickerConfig::new("birthdate", "birthdate")).view();

        assert!(!view.active);
        assert!(!view.calendar.visible);
        assert_eq!(view.calendar.role, "application");
        assert_eq!(view.status.role, "status");
        assert_eq!(view.status.text, "");
        assert_eq!(view.toggle.aria_label, "Toggle calendar");
        assert_eq!(view.internal_input.name, "birthdate");
        assert_eq!(view.external_input.id, "birthdate");
        assert!(view.internal_input.aria_hidden);
    }

    #[test]
    fn required_and_disabled_apply_to_external_input_only() {
        let config = DatePickerConfig {
            required: true,
            disabled: true,
            ..DatePickerConfig::new("birthdate", "birthdate")
        };
        let view = picker(config).view();

        assert!(view.external_input.required);
        assert!(view.external_input.disabled);
        assert!(view.toggle.disabled);
        assert!(!view.internal_input.required);
        assert!(!view.internal_input.disabled);
    }

    #[test]
    fn validation_status_is_passed_through() {
        let config = DatePickerConfig {
            validation_status: ValidationStatus::Error,
            ..DatePickerConfig::new("birthdate", "birthdate")
        };
        assert_eq!(picker(config).view().external_input.status, ValidationStatus::Error);
    }

    #[test]
    fn open_calendar_shows_selected_cell_and_labels() {
        let config = DatePickerConfig {
            default_value: Some("2021-01-20".to_string()),
            ..DatePickerConfig::new("birthdate", "birthdate")
        };
        let mut picker = picker(config);
        picker.toggle_calendar();
        let view = picker.view();

        assert!(view.active);
        assert!(view.toggle.expanded);
        assert_eq!(view.calendar.month_label.as_deref(), Some("January"));
        assert_eq!(view.calendar.year_label.as_deref(), Some("2021"));
        let grid = view.calendar.day_grid.unwrap();
        let cell = grid.cell(date(2021, 1, 20)).unwrap();
        assert!(cell.is_selected);
        assert_eq!(cell.label, "20 January 2021 Wednesday");
    }

    #[test]
    fn localized_calendar_uses_bundle_labels() {
        let config = DatePickerConfig {
            default_value: Some("2020-02-01".to_string()),
            locale: Locale::spanish(),
            ..DatePickerConfig::new("birthdate", "birthdate")
        };
        let mut picker = picker(config);
        picker.toggle_calendar();
        let view = picker.view();

        assert_eq!(view.calendar.month_label.as_deref(), Some("febrero"));
        let grid = view.calendar.day_grid.unwrap();
        assert_eq!(grid.weekday_headers, vec!["L", "M", "X", "J", "V", "S", "D"]);
    }

    #[test]
    fn renders_tracks_the_active_surface() {
        let config = DatePickerConfig {
            default_value: Some("2021-01-20".to_string()),
            ..DatePickerConfig::new("birthdate", "birthdate")
        };
        let mut picker = picker(config);
        assert!(!picker.view().renders(FocusTarget::DayCell(date(2021, 1, 20))));

        picker.toggle_calendar();
        assert!(picker.view().renders(FocusTarget::DayCell(date(2021, 1, 20))));
        assert!(picker.view().renders(FocusTarget::MonthSelectTrigger));

        picker.navigate(Navigation::OpenYearSelect);
        let view = picker.view();
        assert!(view.renders(FocusTarget::YearOption(2016)));
        assert!(!view.renders(FocusTarget::YearOption(2028)));
        assert!(!view.renders(FocusTarget::DayCell(date(2021, 1, 20))));
        assert!(!view.renders(FocusTarget::Outside));
    }

    #[test]
    fn view_serializes_stable_identifiers() {
        let view = picker(DatePickerConfig::new("birthdate", "birthdate")).view();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["external_input"]["test_id"], "date-picker-external-input");
        assert_eq!(json["calendar"]["visible"], false);
        assert_eq!(json["status"]["aria_live"], "polite");
    }
}
