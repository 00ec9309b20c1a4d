use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use a11y_datepicker::ui::{
    selectors::{MonthOption, MonthSelectorLayout},
    theme::Theme,
};

pub fn render(f: &mut Frame, layout: &MonthSelectorLayout, theme: &Theme, has_focus: bool, area: Rect) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(layout.year.to_string(), Style::default().fg(theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
    ];

    for row in layout.rows() {
        let spans = row
            .iter()
            .map(|option| Span::styled(format!("{:^12}", option.label), option_style(option, theme, has_focus)))
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let content = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Select a month "));
    f.render_widget(content, area);
}

fn option_style(option: &MonthOption, theme: &Theme, has_focus: bool) -> Style {
    if option.is_disabled {
        Style::default().fg(theme.disabled_day)
    } else if option.is_highlighted && has_focus {
        Style::default().bg(theme.focused_bg).fg(theme.focused_fg).add_modifier(Modifier::BOLD)
    } else if option.is_selected {
        Style::default().bg(theme.selected_bg).fg(theme.selected_fg)
    } else {
        Style::default()
    }
}
