pub mod calendar_date;
pub mod clock;
pub mod engine;
pub mod locale;

pub use calendar_date::{Bounds, CalendarDate};
pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{InvalidDate, ParseResult, ValidationState, YEAR_CHUNK};
pub use locale::{DateOrder, DateSeparator, Locale};
