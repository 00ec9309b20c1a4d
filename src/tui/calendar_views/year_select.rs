use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use a11y_datepicker::{
    ui::{selectors::YearSelectorLayout, theme::Theme},
    Navigation,
};

const ARROW_WIDTH: u16 = 3;

fn range_label(layout: &YearSelectorLayout) -> String {
    format!("{} - {}", layout.chunk_start, layout.chunk_end)
}

pub fn render(f: &mut Frame, layout: &YearSelectorLayout, theme: &Theme, has_focus: bool, area: Rect) {
    let arrow_style = |disabled: bool| {
        if disabled {
            Style::default().fg(theme.disabled_day)
        } else {
            Style::default().fg(theme.title)
        }
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" < ", arrow_style(layout.previous_chunk_disabled)),
            Span::styled(
                range_label(layout),
                Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" > ", arrow_style(layout.next_chunk_disabled)),
        ]),
        Line::from(""),
    ];

    for row in &layout.rows {
        let mut spans = Vec::new();
        for option in row {
            let style = if option.is_disabled {
                Style::default().fg(theme.disabled_day)
            } else if option.is_highlighted && has_focus {
                Style::default().bg(theme.focused_bg).fg(theme.focused_fg).add_modifier(Modifier::BOLD)
            } else if option.is_selected {
                Style::default().bg(theme.selected_bg).fg(theme.selected_fg)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!("{:^8}", option.year), style));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("PgUp/PgDn", Style::default().fg(theme.title)),
        Span::raw(" = Previous/next years"),
    ]));

    let content = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Select a year "));
    f.render_widget(content, area);
}

/// The enabled chunk arrow drawn at a terminal position, as the navigation
/// it triggers.
pub fn chunk_arrow_at(layout: &YearSelectorLayout, area: Rect, column: u16, row: u16) -> Option<Navigation> {
    let first_column = area.x + 1;
    if row != area.y + 1 || column < first_column {
        return None;
    }
    let offset = column - first_column;
    let next_start = ARROW_WIDTH + range_label(layout).len() as u16;

    if offset < ARROW_WIDTH && !layout.previous_chunk_disabled {
        Some(Navigation::PreviousYearChunk)
    } else if (next_start..next_start + ARROW_WIDTH).contains(&offset) && !layout.next_chunk_disabled {
        Some(Navigation::NextYearChunk)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11y_datepicker::{date::Bounds, ui::selectors::year_selector, CalendarDate, CalendarViewState};
    use chrono::Weekday;

    fn layout(bounds: &Bounds) -> YearSelectorLayout {
        let today = CalendarDate::from_ymd(2021, 1, 20).unwrap();
        let state = CalendarViewState::open(Some(today), bounds, today)
            .apply(Navigation::OpenYearSelect, bounds, Weekday::Sun);
        year_selector(&state, bounds)
    }

    #[test]
    fn arrows_are_hit_on_the_header_row() {
        let layout = layout(&Bounds::unbounded());
        let area = Rect::new(0, 8, 40, 14);

        assert_eq!(chunk_arrow_at(&layout, area, 2, 9), Some(Navigation::PreviousYearChunk));
        // " < " then "2016 - 2027" (11 columns) then " > ".
        assert_eq!(chunk_arrow_at(&layout, area, 1 + 3 + 11 + 1, 9), Some(Navigation::NextYearChunk));
        assert_eq!(chunk_arrow_at(&layout, area, 6, 9), None);
        assert_eq!(chunk_arrow_at(&layout, area, 2, 10), None);
    }

    #[test]
    fn disabled_arrows_are_not_hit() {
        let min = CalendarDate::from_ymd(2018, 1, 1).unwrap();
        let layout = layout(&Bounds::new(Some(min), None));

        assert_eq!(chunk_arrow_at(&layout, Rect::new(0, 8, 40, 14), 2, 9), None);
    }
}
