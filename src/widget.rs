use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::announcer::{announce, PickerEvent};
use crate::calendar::{CalendarViewState, Navigation};
use crate::date::{
    engine::{self, is_within_bounds},
    Bounds, CalendarDate, Clock, Locale, ValidationState,
};
use crate::focus::{resolve_target, FocusCause, FocusChange, FocusCoordinator, FocusTarget};
use crate::ui::view_model::{self, DatePickerView};

pub type ChangeCallback = Box<dyn FnMut(&str)>;
pub type BlurCallback = Box<dyn FnMut()>;

/// Visual hint for the external field. Purely presentational.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    #[default]
    Neutral,
    Error,
    Success,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatePickerConfig {
    pub id: String,
    pub name: String,
    /// Initial value in the internal `YYYY-MM-DD` form.
    pub default_value: Option<String>,
    pub min_date: Option<CalendarDate>,
    pub max_date: Option<CalendarDate>,
    pub disabled: bool,
    pub required: bool,
    pub validation_status: ValidationStatus,
    pub locale: Locale,
}

impl DatePickerConfig {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.min_date, self.max_date)
    }
}

/// Returned by [`DatePicker::key_up_in_calendar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyUpOutcome {
    pub prevent_default: bool,
}

/// Owns the committed value and coordinates parsing, calendar navigation,
/// narration and focus.
pub struct DatePicker {
    config: DatePickerConfig,
    bounds: Bounds,
    clock: Box<dyn Clock>,
    external_text: String,
    internal_value: String,
    validation: ValidationState,
    typed_date: Option<CalendarDate>,
    calendar: Option<CalendarViewState>,
    status: String,
    focus: FocusCoordinator,
    key_down_in_calendar: bool,
    on_change: Option<ChangeCallback>,
    on_blur: Option<BlurCallback>,
}

impl DatePicker {
    pub fn new(config: DatePickerConfig, clock: Box<dyn Clock>) -> Self {
        let bounds = config.bounds();
        let today = clock.today();

        let typed_date = config.default_value.as_deref().and_then(|value| {
            let parsed = engine::parse_internal(value);
            if parsed.is_none() {
                warn!(value, "ignoring unparseable default value");
            }
            parsed
        });

        let external_text = typed_date
            .map(|date| engine::format(date, &config.locale))
            .unwrap_or_default();
        let internal_value = typed_date.map(engine::to_internal).unwrap_or_default();
        let validation = engine::validate(&external_text, &bounds, &config.locale, today);

        Self {
            config,
            bounds,
            clock,
            external_text,
            internal_value,
            validation,
            typed_date,
            calendar: None,
            status: String::new(),
            focus: FocusCoordinator::new(),
            key_down_in_calendar: false,
            on_change: None,
            on_blur: None,
        }
    }

    pub fn with_on_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn with_on_blur(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_blur = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &DatePickerConfig {
        &self.config
    }

    pub fn locale(&self) -> &Locale {
        &self.config.locale
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn today(&self) -> CalendarDate {
        self.clock.today()
    }

    pub fn external_text(&self) -> &str {
        &self.external_text
    }

    pub fn internal_value(&self) -> &str {
        &self.internal_value
    }

    pub fn validation(&self) -> &ValidationState {
        &self.validation
    }

    pub fn calendar(&self) -> Option<&CalendarViewState> {
        self.calendar.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.calendar.is_some()
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn focus(&self) -> &FocusCoordinator {
        &self.focus
    }

    pub fn view(&self) -> DatePickerView {
        view_model::build(self)
    }

    /// Handles the full new contents of the external field.
    pub fn text_changed(&mut self, text: &str) {
        if self.config.disabled {
            return;
        }
        self.focus.focus_moved(FocusTarget::ExternalInput);

        let today = self.clock.today();
        let parsed = engine::parse(text, &self.config.locale, today);
        self.external_text = text.to_string();
        self.validation = engine::validate(text, &self.bounds, &self.config.locale, today);
        self.typed_date = parsed.date();
        self.internal_value = self.typed_date.map(engine::to_internal).unwrap_or_default();
        debug!(text, valid = self.validation.is_valid, "external input changed");

        if let Some(previous) = self.calendar.clone() {
            let next = match self.typed_date {
                Some(date) => previous.clone().resync(date, &self.bounds),
                None => previous.clone().clear_selection(),
            };
            self.narrate(Some(&previous), Some(&next), PickerEvent::Resynced);
            self.calendar = Some(next);
        }

        self.notify_change(text.to_string());
    }

    pub fn toggle_calendar(&mut self) {
        if self.is_open() {
            self.close(FocusCause::ToggledClosed);
        } else {
            self.open_calendar();
        }
    }

    pub fn open_calendar(&mut self) {
        if self.config.disabled || self.is_open() {
            return;
        }
        let state = CalendarViewState::open(self.typed_date, &self.bounds, self.clock.today());
        info!(focused = ?state.focused_date, "calendar opened");

        self.narrate(None, Some(&state), PickerEvent::Opened);
        self.request_focus(FocusCause::Opened, Some(&state));
        self.calendar = Some(state);
    }

    pub fn escape(&mut self) {
        if self.is_open() {
            self.close(FocusCause::Escaped);
        }
    }

    pub fn navigate(&mut self, nav: Navigation) {
        if self.config.disabled {
            return;
        }
        let Some(previous) = self.calendar.clone() else {
            return;
        };
        let next = previous
            .clone()
            .apply(nav, &self.bounds, self.config.locale.first_day_of_week);

        self.narrate(Some(&previous), Some(&next), PickerEvent::Navigated(nav));
        if previous != next {
            self.request_focus(FocusCause::Navigated(nav), Some(&next));
        }
        self.calendar = Some(next);
    }

    /// Activates a day cell. Dates outside the bounds are disabled cells and
    /// are ignored. Returns whether the date was committed.
    pub fn select_date(&mut self, date: CalendarDate) -> bool {
        if self.config.disabled || !self.is_open() || !is_within_bounds(date, &self.bounds) {
            return false;
        }
        let display = engine::format(date, &self.config.locale);
        info!(date = %engine::to_internal(date), "date selected");

        self.external_text = display.clone();
        self.internal_value = engine::to_internal(date);
        self.typed_date = Some(date);
        self.validation = ValidationState::valid();
        self.close(FocusCause::Committed);
        self.notify_change(display);
        true
    }

    pub fn select_focused(&mut self) -> bool {
        match self.calendar.as_ref() {
            Some(state) => self.select_date(state.focused_date),
            None => false,
        }
    }

    /// Host-observed focus movement. Leaving the widget closes the calendar
    /// and notifies the blur callback.
    pub fn focus_moved(&mut self, target: FocusTarget) {
        if self.focus.focus_moved(target) != FocusChange::LeftWidget {
            return;
        }
        if self.is_open() {
            self.close(FocusCause::Blurred);
        }
        debug!("focus left the date picker");
        if let Some(on_blur) = self.on_blur.as_mut() {
            on_blur();
        }
    }

    /// Resolves the pending focus request against what is currently rendered.
    pub fn settle_focus(&mut self) -> Option<FocusTarget> {
        let view = self.view();
        self.focus.settle(|target| view.renders(target))
    }

    pub fn key_down_in_calendar(&mut self) {
        self.key_down_in_calendar = true;
    }

    /// A key released inside the calendar whose press started elsewhere
    /// (e.g. the Enter that opened it) must not activate anything.
    pub fn key_up_in_calendar(&mut self) -> KeyUpOutcome {
        let originated_inside = std::mem::take(&mut self.key_down_in_calendar);
        KeyUpOutcome {
            prevent_default: self.is_open() && !originated_inside,
        }
    }

    fn close(&mut self, cause: FocusCause) {
        let Some(previous) = self.calendar.take() else {
            return;
        };
        info!(?cause, "calendar closed");
        self.key_down_in_calendar = false;
        self.narrate(Some(&previous), None, PickerEvent::Closed);
        self.request_focus(cause, None);
    }

    fn narrate(
        &mut self,
        previous: Option<&CalendarViewState>,
        next: Option<&CalendarViewState>,
        event: PickerEvent,
    ) {
        if let Some(text) = announce(previous, next, event, &self.config.locale) {
            self.status = text;
        }
    }

    fn request_focus(&mut self, cause: FocusCause, state: Option<&CalendarViewState>) {
        if let Some(target) = resolve_target(cause, state) {
            self.focus.request(target);
        }
    }

    fn notify_change(&mut self, display: String) {
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&display);
        }
    }
}
