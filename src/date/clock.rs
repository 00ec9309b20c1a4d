use chrono::Local;

use super::CalendarDate;

/// Source of "today". Injected so that parsing and calendar seeding never
/// read the wall clock directly.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        Local::now().date_naive().into()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}
