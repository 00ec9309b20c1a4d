use std::io;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    Terminal,
};
use a11y_datepicker::{
    config::Config,
    input::{calendar_keys, text_entry},
    ui::{theme::Theme, view_model::CalendarPopoverView},
    DatePicker, FocusTarget, Navigation, ViewMode,
};
use crate::tui::{
    calendar_views::{day_grid, year_select},
    presentation::{screen_layout, trigger_areas, ui, ScreenLayout},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run_tui(mut picker: DatePicker, config: &Config) -> Result<(), io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    // Key releases are only reported once the terminal is asked for them.
    let key_releases = supports_keyboard_enhancement().unwrap_or(false);
    if key_releases {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::get_by_name(&config.ui.theme);
    picker.focus_moved(FocusTarget::ExternalInput);

    let res = run_app(&mut terminal, &mut picker, &theme);

    if key_releases {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    picker: &mut DatePicker,
    theme: &Theme,
) -> io::Result<()> {
    loop {
        picker.settle_focus();
        terminal.draw(|f| ui(f, picker, theme))?;

        match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Release => handle_key_release(picker),
            TermEvent::Key(key) => {
                if handle_key(key, picker) == Flow::Quit {
                    return Ok(());
                }
            }
            TermEvent::Mouse(mouse) => {
                let size = terminal.size()?;
                handle_mouse(mouse, picker, &screen_layout(size));
            }
            _ => {}
        }
    }
}

fn current_focus(picker: &DatePicker) -> FocusTarget {
    picker.focus().focused().unwrap_or(FocusTarget::ExternalInput)
}

fn in_calendar(target: FocusTarget) -> bool {
    target.is_within_widget() && !matches!(target, FocusTarget::ExternalInput | FocusTarget::ToggleButton)
}

/// Tab order: input, toggle, the notes field outside the widget. Tabbing
/// out of the popover leaves the widget.
fn next_focus(current: FocusTarget, backwards: bool) -> FocusTarget {
    match (current, backwards) {
        (FocusTarget::ExternalInput, false) => FocusTarget::ToggleButton,
        (FocusTarget::ToggleButton, false) => FocusTarget::Outside,
        (FocusTarget::Outside, false) => FocusTarget::ExternalInput,
        (FocusTarget::ExternalInput, true) => FocusTarget::Outside,
        (FocusTarget::ToggleButton, true) => FocusTarget::ExternalInput,
        (FocusTarget::Outside, true) => FocusTarget::ToggleButton,
        (_, false) => FocusTarget::Outside,
        (_, true) => FocusTarget::ToggleButton,
    }
}

fn handle_key(key: KeyEvent, picker: &mut DatePicker) -> Flow {
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c' | 'q')) {
        return Flow::Quit;
    }

    let current = current_focus(picker);
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
            let backwards = key.code == KeyCode::BackTab || key.modifiers.contains(KeyModifiers::SHIFT);
            picker.focus_moved(next_focus(current, backwards));
            return Flow::Continue;
        }
        KeyCode::Esc if !in_calendar(current) => {
            picker.escape();
            return Flow::Continue;
        }
        _ => {}
    }

    match current {
        FocusTarget::ExternalInput => {
            text_entry::handle_key(key.code, picker);
        }
        FocusTarget::ToggleButton => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) && !picker.is_disabled() {
                picker.toggle_calendar();
            }
        }
        FocusTarget::Outside => {
            if key.code == KeyCode::Char('q') {
                return Flow::Quit;
            }
        }
        _ => {
            calendar_keys::handle_key(key, picker);
        }
    }
    Flow::Continue
}

fn handle_key_release(picker: &mut DatePicker) {
    if !in_calendar(current_focus(picker)) {
        return;
    }
    let outcome = picker.key_up_in_calendar();
    if outcome.prevent_default {
        tracing::debug!("ignored key release that started outside the calendar");
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

fn handle_mouse(mouse: MouseEvent, picker: &mut DatePicker, layout: &ScreenLayout) {
    let (column, row) = (mouse.column, mouse.row);
    let calendar = picker.view().calendar;

    let hovered_day = calendar
        .day_grid
        .as_ref()
        .and_then(|grid| day_grid::date_at(grid, layout.popover_body, column, row));

    match mouse.kind {
        MouseEventKind::Moved => {
            if let Some(date) = hovered_day
                && picker.calendar().is_some_and(|state| state.focused_date != date)
            {
                picker.navigate(Navigation::FocusDate(date));
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(nav) = calendar_control_at(&calendar, layout, column, row) {
                picker.navigate(nav);
            } else if let Some(date) = hovered_day {
                picker.select_date(date);
            } else if contains(layout.toggle, column, row) {
                picker.focus_moved(FocusTarget::ToggleButton);
                picker.toggle_calendar();
            } else if contains(layout.input, column, row) {
                picker.focus_moved(FocusTarget::ExternalInput);
            } else if contains(layout.notes, column, row) {
                picker.focus_moved(FocusTarget::Outside);
            }
        }
        _ => {}
    }
}

/// Selector triggers in the popover header and the year-chunk arrows.
fn calendar_control_at(calendar: &CalendarPopoverView, layout: &ScreenLayout, column: u16, row: u16) -> Option<Navigation> {
    match calendar.mode? {
        ViewMode::DayGrid => {
            let (month, year) = trigger_areas(
                layout.popover_header,
                calendar.month_label.as_deref().unwrap_or_default(),
                calendar.year_label.as_deref().unwrap_or_default(),
            );
            if contains(month, column, row) {
                Some(Navigation::OpenMonthSelect)
            } else if contains(year, column, row) {
                Some(Navigation::OpenYearSelect)
            } else {
                None
            }
        }
        ViewMode::YearSelect => calendar
            .year_selector
            .as_ref()
            .and_then(|selector| year_select::chunk_arrow_at(selector, layout.popover_body, column, row)),
        ViewMode::MonthSelect => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use a11y_datepicker::{date::FixedClock, CalendarDate, DatePickerConfig};

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    fn picker() -> DatePicker {
        let mut picker = DatePicker::new(
            DatePickerConfig::new("birthday", "birthday"),
            Box::new(FixedClock(date(2021, 1, 13))),
        );
        picker.focus_moved(FocusTarget::ExternalInput);
        picker
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE }
    }

    fn layout() -> ScreenLayout {
        screen_layout(Rect::new(0, 0, 80, 40))
    }

    #[test]
    fn ctrl_q_quits() {
        let mut picker = picker();
        assert_eq!(handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL), &mut picker), Flow::Quit);
        // A plain 'q' is text while the input has focus.
        assert_eq!(handle_key(press(KeyCode::Char('q')), &mut picker), Flow::Continue);
        assert_eq!(picker.external_text(), "q");
    }

    #[test]
    fn typing_goes_to_the_input() {
        let mut picker = picker();
        for c in "1/6/2021".chars() {
            handle_key(press(KeyCode::Char(c)), &mut picker);
        }

        assert_eq!(picker.external_text(), "1/6/2021");
        assert_eq!(picker.internal_value(), "2021-01-06");
    }

    #[test]
    fn toggle_opens_and_focus_lands_on_a_day() {
        let mut picker = picker();
        handle_key(press(KeyCode::Tab), &mut picker);
        assert_eq!(current_focus(&picker), FocusTarget::ToggleButton);

        handle_key(press(KeyCode::Enter), &mut picker);
        picker.settle_focus();

        assert!(picker.is_open());
        assert_eq!(current_focus(&picker), FocusTarget::DayCell(date(2021, 1, 13)));
    }

    #[test]
    fn tabbing_out_of_the_calendar_blurs() {
        let blurred = Rc::new(Cell::new(false));
        let flag = blurred.clone();
        let mut picker = picker().with_on_blur(move || flag.set(true));

        handle_key(press(KeyCode::Tab), &mut picker);
        handle_key(press(KeyCode::Enter), &mut picker);
        picker.settle_focus();
        handle_key(press(KeyCode::Right), &mut picker);
        picker.settle_focus();
        handle_key(press(KeyCode::Tab), &mut picker);

        assert!(!picker.is_open());
        assert!(blurred.get());
        assert_eq!(current_focus(&picker), FocusTarget::Outside);
    }

    #[test]
    fn backtab_cycles_in_reverse() {
        assert_eq!(next_focus(FocusTarget::ExternalInput, true), FocusTarget::Outside);
        assert_eq!(next_focus(FocusTarget::Outside, true), FocusTarget::ToggleButton);
        assert_eq!(next_focus(FocusTarget::DayCell(date(2021, 1, 13)), true), FocusTarget::ToggleButton);
    }

    #[test]
    fn hover_focuses_and_click_selects() {
        let mut picker = picker();
        picker.open_calendar();
        picker.settle_focus();
        let layout = layout();

        // Body starts at row 8; the first week is drawn four rows lower.
        handle_mouse(mouse(MouseEventKind::Moved, 1, 14), &mut picker, &layout);
        assert_eq!(picker.calendar().unwrap().focused_date, date(2021, 1, 10));

        handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 1, 14), &mut picker, &layout);
        assert!(!picker.is_open());
        assert_eq!(picker.internal_value(), "2021-01-10");
    }

    #[test]
    fn clicking_toggle_opens_calendar() {
        let mut picker = picker();
        let layout = layout();

        handle_mouse(
            mouse(MouseEventKind::Down(MouseButton::Left), layout.toggle.x + 2, layout.toggle.y + 1),
            &mut picker,
            &layout,
        );

        assert!(picker.is_open());
    }

    #[test]
    fn clicking_triggers_opens_selectors() {
        let mut picker = picker();
        picker.open_calendar();
        let layout = layout();

        // "[January v]" starts the header row.
        handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 3, 7), &mut picker, &layout);
        assert_eq!(picker.calendar().unwrap().mode, ViewMode::MonthSelect);

        picker.escape();
        picker.open_calendar();
        handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 14, 7), &mut picker, &layout);
        assert_eq!(picker.calendar().unwrap().mode, ViewMode::YearSelect);
        assert_eq!(picker.calendar().unwrap().year_chunk_start, 2016);

        // The next-chunk arrow sits after " < 2016 - 2027".
        handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 16, 9), &mut picker, &layout);
        assert_eq!(picker.calendar().unwrap().year_chunk_start, 2028);
    }
}
