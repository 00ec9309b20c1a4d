use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use a11y_datepicker::{
    ui::{theme::Theme, view_model::DatePickerView},
    DatePicker, FocusTarget, ViewMode,
};
use crate::tui::calendar_views;

const POPOVER_WIDTH: u16 = 40;
const POPOVER_HEIGHT: u16 = 14;

/// Screen regions shared by drawing and mouse hit-testing.
pub struct ScreenLayout {
    pub title: Rect,
    pub input: Rect,
    pub toggle: Rect,
    pub message: Rect,
    pub popover_header: Rect,
    pub popover_body: Rect,
    pub notes: Rect,
    pub status: Rect,
    pub footer: Rect,
}

pub fn screen_layout(size: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .split(size);

    let input_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(20)])
        .split(rows[1]);

    let popover = Rect {
        x: rows[3].x,
        y: rows[3].y,
        width: POPOVER_WIDTH.min(rows[3].width),
        height: (POPOVER_HEIGHT + 1).min(rows[3].height),
    };
    let popover_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(popover);

    ScreenLayout {
        title: rows[0],
        input: input_row[0],
        toggle: input_row[1],
        message: rows[2],
        popover_header: popover_rows[0],
        popover_body: popover_rows[1],
        notes: rows[4],
        status: rows[5],
        footer: rows[6],
    }
}

/// Month and year trigger areas inside the popover header, as drawn by
/// `render_popover`.
pub fn trigger_areas(header: Rect, month_label: &str, year_label: &str) -> (Rect, Rect) {
    let width = |label: &str| label.chars().count() as u16 + 4;
    let month = Rect { width: width(month_label), height: 1, ..header };
    let year = Rect {
        x: month.x + month.width + 1,
        width: width(year_label),
        height: 1,
        ..header
    };
    (month, year)
}

pub fn ui(f: &mut Frame, picker: &DatePicker, theme: &Theme) {
    let view = picker.view();
    let layout = screen_layout(f.size());
    let focused = picker.focus().focused();
    let focus_style = |target: FocusTarget| {
        if focused == Some(target) {
            Style::default().fg(theme.focused_bg).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };

    let title = Paragraph::new(format!("a11y-datepicker - {}", picker.config().name))
        .style(Style::default().fg(theme.title).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title);

    render_input(f, &view, theme, focused == Some(FocusTarget::ExternalInput), layout.input);

    let toggle_text = if view.toggle.expanded { "Close" } else { "Open" };
    let toggle = Paragraph::new(format!("[ {} ]", toggle_text))
        .style(if view.toggle.disabled { Style::default().fg(theme.disabled_day) } else { focus_style(FocusTarget::ToggleButton) })
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(view.toggle.aria_label));
    f.render_widget(toggle, layout.toggle);

    if !view.external_input.is_valid {
        let message = Paragraph::new(view.external_input.validation_message.clone())
            .style(Style::default().fg(theme.error));
        f.render_widget(message, layout.message);
    }

    let notes = Paragraph::new("Focus here to leave the date picker")
        .style(Style::default().fg(theme.inactive_day))
        .block(Block::default().borders(Borders::ALL).title("Notes").border_style(focus_style(FocusTarget::Outside)));
    f.render_widget(notes, layout.notes);

    let status = Paragraph::new(view.status.text.clone())
        .style(Style::default().fg(theme.status_bar))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, layout.status);

    let footer = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!("{}=", view.internal_input.name), Style::default().fg(theme.inactive_day)),
            Span::raw(format!("{:?}", view.internal_input.value)),
        ]),
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(theme.title)),
            Span::raw(" = Focus | "),
            Span::styled("Enter/Space", Style::default().fg(theme.title)),
            Span::raw(" = Toggle/Select | "),
            Span::styled("m/y", Style::default().fg(theme.title)),
            Span::raw(" = Month/Year | "),
            Span::styled("Esc", Style::default().fg(theme.title)),
            Span::raw(" = Close | "),
            Span::styled("Ctrl+Q", Style::default().fg(theme.title)),
            Span::raw(" = Quit"),
        ]),
    ]);
    f.render_widget(footer, layout.footer);

    if view.calendar.visible {
        render_popover(f, &view, theme, focused, &layout);
    }
}

fn render_input(f: &mut Frame, view: &DatePickerView, theme: &Theme, has_focus: bool, area: Rect) {
    let input = &view.external_input;
    let mut title = input.id.clone();
    if input.required {
        title.push_str(" *");
    }

    let mut border = Style::default().fg(theme.input_border(input.status, input.is_valid));
    if has_focus {
        border = border.add_modifier(Modifier::BOLD);
    }

    let text_style = if input.disabled {
        Style::default().fg(theme.disabled_day)
    } else {
        Style::default()
    };

    let mut text = input.value.clone();
    if has_focus {
        text.push('_');
    }

    let widget = Paragraph::new(text)
        .style(text_style)
        .block(Block::default().borders(Borders::ALL).title(title).border_style(border));
    f.render_widget(widget, area);
}

fn render_popover(f: &mut Frame, view: &DatePickerView, theme: &Theme, focused: Option<FocusTarget>, layout: &ScreenLayout) {
    let calendar = &view.calendar;
    let header_area = layout.popover_header;
    f.render_widget(Clear, header_area.union(layout.popover_body));

    let trigger = |label: &Option<String>, target: FocusTarget| {
        let style = if focused == Some(target) {
            Style::default().bg(theme.focused_bg).fg(theme.focused_fg)
        } else {
            Style::default().fg(theme.title)
        };
        Span::styled(format!("[{} v]", label.as_deref().unwrap_or_default()), style)
    };

    let header = Paragraph::new(Line::from(vec![
        trigger(&calendar.month_label, FocusTarget::MonthSelectTrigger),
        Span::raw(" "),
        trigger(&calendar.year_label, FocusTarget::YearSelectTrigger),
    ]));
    f.render_widget(header, header_area);

    let in_calendar = focused.is_some_and(|target| {
        target.is_within_widget() && !matches!(target, FocusTarget::ExternalInput | FocusTarget::ToggleButton)
    });

    match calendar.mode {
        Some(ViewMode::DayGrid) => {
            if let Some(grid) = &calendar.day_grid {
                calendar_views::day_grid::render(f, grid, theme, in_calendar, layout.popover_body);
            }
        }
        Some(ViewMode::MonthSelect) => {
            if let Some(selector) = &calendar.month_selector {
                calendar_views::month_select::render(f, selector, theme, in_calendar, layout.popover_body);
            }
        }
        Some(ViewMode::YearSelect) => {
            if let Some(selector) = &calendar.year_selector {
                calendar_views::year_select::render(f, selector, theme, in_calendar, layout.popover_body);
            }
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popover_sits_below_the_message_row() {
        let layout = screen_layout(Rect::new(0, 0, 80, 40));

        assert_eq!(layout.input.y, 3);
        assert_eq!(layout.message.y, 6);
        assert_eq!(layout.popover_header.y, 7);
        assert_eq!(layout.popover_body.y, 8);
        assert_eq!(layout.popover_body.width, POPOVER_WIDTH);
        assert_eq!(layout.footer.y, 38);
    }

    #[test]
    fn triggers_follow_their_labels() {
        let header = Rect::new(0, 7, 40, 1);
        let (month, year) = trigger_areas(header, "January", "2021");

        // "[January v]" then a space then "[2021 v]".
        assert_eq!((month.x, month.width), (0, 11));
        assert_eq!((year.x, year.width), (12, 8));
        assert_eq!(year.y, 7);
    }
}
