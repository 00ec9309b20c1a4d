//! Decides where keyboard focus goes after each transition.
//!
//! Focus moves are deferred: a request stays pending until the host has
//! rendered the target, and a newer request replaces an older pending one.

use serde::Serialize;
use tracing::debug;

use crate::calendar::{CalendarViewState, Navigation, ViewMode};
use crate::date::CalendarDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FocusTarget {
    ExternalInput,
    ToggleButton,
    DayCell(CalendarDate),
    MonthSelectTrigger,
    YearSelectTrigger,
    MonthOption(u32),
    YearOption(i32),
    PreviousYearChunk,
    NextYearChunk,
    /// Any element outside the widget's subtree.
    Outside,
}

impl FocusTarget {
    pub fn is_within_widget(&self) -> bool {
        !matches!(self, FocusTarget::Outside)
    }
}

/// Why the widget state changed, as far as focus is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusCause {
    Opened,
    Navigated(Navigation),
    Committed,
    ToggledClosed,
    Escaped,
    Blurred,
    Typed,
}

/// Target that should hold focus once the transition has rendered.
/// `None` leaves focus where it is.
pub fn resolve_target(cause: FocusCause, state: Option<&CalendarViewState>) -> Option<FocusTarget> {
    match cause {
        FocusCause::Opened => state.map(|s| FocusTarget::DayCell(s.focused_date)),
        FocusCause::Navigated(Navigation::ChooseMonth(_)) => Some(FocusTarget::MonthSelectTrigger),
        FocusCause::Navigated(Navigation::ChooseYear(_)) => Some(FocusTarget::YearSelectTrigger),
        FocusCause::Navigated(_) => state.map(|s| match s.mode {
            ViewMode::DayGrid => FocusTarget::DayCell(s.focused_date),
            ViewMode::MonthSelect => FocusTarget::MonthOption(s.highlighted_month),
            ViewMode::YearSelect => FocusTarget::YearOption(s.highlighted_year),
        }),
        FocusCause::Committed | FocusCause::Escaped => Some(FocusTarget::ExternalInput),
        FocusCause::ToggledClosed => Some(FocusTarget::ToggleButton),
        FocusCause::Blurred | FocusCause::Typed => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusChange {
    Stayed,
    LeftWidget,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusCoordinator {
    pending: Option<FocusTarget>,
    focused: Option<FocusTarget>,
}

impl FocusCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, target: FocusTarget) {
        if let Some(previous) = self.pending.replace(target) {
            debug!(?previous, ?target, "superseding pending focus request");
        }
    }

    pub fn pending(&self) -> Option<FocusTarget> {
        self.pending
    }

    pub fn focused(&self) -> Option<FocusTarget> {
        self.focused
    }

    /// Applies the pending request once `is_rendered` confirms the target
    /// exists. Returns the target that received focus.
    pub fn settle(&mut self, is_rendered: impl Fn(FocusTarget) -> bool) -> Option<FocusTarget> {
        let target = self.pending?;
        if !is_rendered(target) {
            return None;
        }
        self.pending = None;
        self.focused = Some(target);
        Some(target)
    }

    /// Records focus moved by the user (click, tab). Leaving the widget's
    /// subtree drops any pending request. A pending in-widget request counts
    /// as being inside even if the host never reported where focus was.
    pub fn focus_moved(&mut self, target: FocusTarget) -> FocusChange {
        let was_inside = self.focused.is_some_and(|f| f.is_within_widget())
            || self.pending.is_some_and(|p| p.is_within_widget());
        self.focused = Some(target);

        if was_inside && !target.is_within_widget() {
            self.pending = None;
            FocusChange::LeftWidget
        } else {
            FocusChange::Stayed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::Bounds;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    fn opened() -> CalendarViewState {
        CalendarViewState::open(Some(date(2021, 1, 20)), &Bounds::unbounded(), date(2026, 10, 19))
    }

    #[test]
    fn opening_targets_the_focused_day_cell() {
        let target = resolve_target(FocusCause::Opened, Some(&opened()));
        assert_eq!(target, Some(FocusTarget::DayCell(date(2021, 1, 20))));
    }

    #[test]
    fn closing_targets_depend_on_cause() {
        assert_eq!(resolve_target(FocusCause::Committed, None), Some(FocusTarget::ExternalInput));
        assert_eq!(resolve_target(FocusCause::Escaped, None), Some(FocusTarget::ExternalInput));
        assert_eq!(resolve_target(FocusCause::ToggledClosed, None), Some(FocusTarget::ToggleButton));
        assert_eq!(resolve_target(FocusCause::Blurred, None), None);
    }

    #[test]
    fn choosing_from_a_selector_returns_to_its_trigger() {
        let state = opened();
        assert_eq!(
            resolve_target(FocusCause::Navigated(Navigation::ChooseMonth(3)), Some(&state)),
            Some(FocusTarget::MonthSelectTrigger)
        );
        assert_eq!(
            resolve_target(FocusCause::Navigated(Navigation::ChooseYear(2020)), Some(&state)),
            Some(FocusTarget::YearSelectTrigger)
        );
    }

    #[test]
    fn pending_request_waits_for_render() {
        let mut focus = FocusCoordinator::new();
        let cell = FocusTarget::DayCell(date(2021, 1, 20));
        focus.request(cell);

        assert_eq!(focus.settle(|_| false), None);
        assert_eq!(focus.pending(), Some(cell));

        assert_eq!(focus.settle(|t| t == cell), Some(cell));
        assert_eq!(focus.focused(), Some(cell));
        assert_eq!(focus.pending(), None);
    }

    #[test]
    fn later_request_supersedes_earlier() {
        let mut focus = FocusCoordinator::new();
        focus.request(FocusTarget::DayCell(date(2021, 1, 20)));
        focus.request(FocusTarget::ExternalInput);

        assert_eq!(focus.settle(|_| true), Some(FocusTarget::ExternalInput));
    }

    #[test]
    fn leaving_the_subtree_is_reported_once() {
        let mut focus = FocusCoordinator::new();
        assert_eq!(focus.focus_moved(FocusTarget::ToggleButton), FocusChange::Stayed);
        focus.request(FocusTarget::DayCell(date(2021, 1, 20)));

        assert_eq!(focus.focus_moved(FocusTarget::Outside), FocusChange::LeftWidget);
        assert_eq!(focus.pending(), None);
        assert_eq!(focus.focus_moved(FocusTarget::Outside), FocusChange::Stayed);
    }

    #[test]
    fn pending_request_inside_counts_as_focused() {
        let mut focus = FocusCoordinator::new();
        focus.request(FocusTarget::DayCell(date(2021, 1, 20)));

        assert_eq!(focus.focus_moved(FocusTarget::Outside), FocusChange::LeftWidget);
        assert_eq!(focus.pending(), None);
    }
}
