use ratatui::style::Color;

use crate::widget::ValidationStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub title: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub focused_bg: Color,
    pub focused_fg: Color,
    pub today: Color,
    pub weekday_header: Color,
    pub inactive_day: Color,
    pub disabled_day: Color,
    pub status_bar: Color,
    pub input_neutral: Color,
    pub error: Color,
    pub success: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            title: Color::Cyan,
            selected_bg: Color::Blue,
            selected_fg: Color::White,
            focused_bg: Color::Yellow,
            focused_fg: Color::Black,
            today: Color::Green,
            weekday_header: Color::Yellow,
            inactive_day: Color::DarkGray,
            disabled_day: Color::Red,
            status_bar: Color::White,
            input_neutral: Color::Gray,
            error: Color::Red,
            success: Color::Green,
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            title: Color::Rgb(251, 184, 108),
            selected_bg: Color::Rgb(69, 133, 136),
            selected_fg: Color::Rgb(235, 219, 178),
            focused_bg: Color::Rgb(250, 189, 47),
            focused_fg: Color::Rgb(40, 40, 40),
            today: Color::Rgb(184, 187, 38),
            weekday_header: Color::Rgb(254, 128, 25),
            inactive_day: Color::Rgb(146, 131, 116),
            disabled_day: Color::Rgb(102, 92, 84),
            status_bar: Color::Rgb(235, 219, 178),
            input_neutral: Color::Rgb(168, 153, 132),
            error: Color::Rgb(251, 73, 52),
            success: Color::Rgb(184, 187, 38),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            title: Color::Rgb(136, 192, 208),
            selected_bg: Color::Rgb(94, 129, 172),
            selected_fg: Color::Rgb(236, 239, 244),
            focused_bg: Color::Rgb(235, 203, 139),
            focused_fg: Color::Rgb(46, 52, 64),
            today: Color::Rgb(163, 190, 140),
            weekday_header: Color::Rgb(235, 203, 139),
            inactive_day: Color::Rgb(76, 86, 106),
            disabled_day: Color::Rgb(67, 76, 94),
            status_bar: Color::Rgb(216, 222, 233),
            input_neutral: Color::Rgb(129, 161, 193),
            error: Color::Rgb(191, 97, 106),
            success: Color::Rgb(163, 190, 140),
        }
    }

    pub fn get_by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            _ => Self::default_theme(),
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "gruvbox", "nord"]
    }

    /// Border colour of the external input for a validation hint. An
    /// invalid value always renders as an error.
    pub fn input_border(&self, status: ValidationStatus, is_valid: bool) -> Color {
        match (status, is_valid) {
            (_, false) | (ValidationStatus::Error, _) => self.error,
            (ValidationStatus::Success, true) => self.success,
            (ValidationStatus::Neutral, true) => self.input_neutral,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
