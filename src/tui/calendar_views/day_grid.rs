use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use a11y_datepicker::{
    ui::{day_grid::MonthLayout, theme::Theme},
    CalendarDate,
};

pub const CELL_WIDTH: u16 = 5;
// Title, blank line, weekday headers.
const HEADER_ROWS: u16 = 3;

pub fn render(f: &mut Frame, grid: &MonthLayout, theme: &Theme, has_focus: bool, area: Rect) {
    let header_style = Style::default().fg(theme.weekday_header);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(grid.title.clone(), Style::default().fg(theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(
            grid.weekday_headers
                .iter()
                .map(|h| Span::styled(format!("{:^5}", h), header_style))
                .collect::<Vec<_>>(),
        ),
    ];

    for week in &grid.weeks {
        let mut day_spans = Vec::new();

        for cell in &week.days {
            let mut style = Style::default();

            if cell.is_disabled {
                style = style.fg(theme.disabled_day).add_modifier(Modifier::CROSSED_OUT);
            } else if cell.is_focused && has_focus {
                style = style.bg(theme.focused_bg).fg(theme.focused_fg).add_modifier(Modifier::BOLD);
            } else if cell.is_selected {
                style = style.bg(theme.selected_bg).fg(theme.selected_fg).add_modifier(Modifier::BOLD);
            } else if !cell.is_current_month {
                style = style.fg(theme.inactive_day);
            } else if cell.is_today {
                style = style.fg(theme.today).add_modifier(Modifier::BOLD);
            }

            if cell.is_selected && cell.is_focused {
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            day_spans.push(Span::styled(format!(" {:>2}  ", cell.date.day()), style));
        }

        lines.push(Line::from(day_spans));
    }

    let content = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}

/// Maps a terminal position inside the rendered grid back to the enabled
/// day drawn there.
pub fn date_at(grid: &MonthLayout, area: Rect, column: u16, row: u16) -> Option<CalendarDate> {
    let first_row = area.y + 1 + HEADER_ROWS;
    let first_column = area.x + 1;
    if row < first_row || column < first_column {
        return None;
    }

    let week = grid.weeks.get(usize::from(row - first_row))?;
    let cell = week.days.get(usize::from((column - first_column) / CELL_WIDTH))?;
    (!cell.is_disabled).then_some(cell.date)
}
