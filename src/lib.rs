pub mod announcer;
pub mod calendar;
pub mod config;
pub mod date;
pub mod focus;
pub mod input;
pub mod ui;
pub mod widget;

pub use calendar::{CalendarViewState, Navigation, ViewMode};
pub use date::{Bounds, CalendarDate, InvalidDate, Locale, ParseResult, ValidationState};
pub use focus::FocusTarget;
pub use widget::{DatePicker, DatePickerConfig, ValidationStatus};
