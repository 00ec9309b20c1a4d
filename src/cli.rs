use std::{env, path::PathBuf};

use a11y_datepicker::{config::Config, widget::ValidationStatus, DatePicker};

pub const USAGE: &str = "Usage: a11y-datepicker [--config PATH] [--default YYYY-MM-DD] \
[--min YYYY-MM-DD] [--max YYYY-MM-DD] [--required] [--disabled] [--locale en|es] \
[--status neutral|error|success] [--theme NAME] [--dump]";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub config_path: Option<PathBuf>,
    pub default_value: Option<String>,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub locale: Option<String>,
    pub status: Option<ValidationStatus>,
    pub theme: Option<String>,
    pub dump: bool,
}

impl CliOptions {
    /// Command-line values win over the config file.
    pub fn apply(&self, config: &mut Config) {
        let picker = &mut config.picker;
        if let Some(value) = &self.default_value {
            picker.default_value = Some(value.clone());
        }
        if let Some(value) = &self.min_date {
            picker.min_date = Some(value.clone());
        }
        if let Some(value) = &self.max_date {
            picker.max_date = Some(value.clone());
        }
        picker.required |= self.required;
        picker.disabled |= self.disabled;
        if let Some(status) = self.status {
            picker.validation_status = status;
        }
        if let Some(locale) = &self.locale {
            config.ui.locale = locale.clone();
            config.locale = None;
        }
        if let Some(theme) = &self.theme {
            config.ui.theme = theme.clone();
        }
    }
}

pub fn parse_cli_mode() -> Result<CliOptions, String> {
    parse_cli_args(env::args().skip(1))
}

pub fn parse_cli_args(args: impl IntoIterator<Item = String>) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value_for = |flag: &str| {
            args.next()
                .filter(|v| !v.starts_with("--"))
                .ok_or_else(|| format!("Missing value for {}", flag))
        };

        match arg.as_str() {
            "--config" => options.config_path = Some(PathBuf::from(value_for("--config")?)),
            "--default" => options.default_value = Some(value_for("--default")?),
            "--min" => options.min_date = Some(value_for("--min")?),
            "--max" => options.max_date = Some(value_for("--max")?),
            "--locale" => options.locale = Some(value_for("--locale")?),
            "--theme" => options.theme = Some(value_for("--theme")?),
            "--status" => {
                let raw = value_for("--status")?;
                options.status = Some(match raw.as_str() {
                    "neutral" => ValidationStatus::Neutral,
                    "error" => ValidationStatus::Error,
                    "success" => ValidationStatus::Success,
                    _ => return Err(format!("Invalid status '{}'. Use neutral, error or success.", raw)),
                });
            }
            "--required" => options.required = true,
            "--disabled" => options.disabled = true,
            "--dump" => options.dump = true,
            "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    Ok(options)
}

/// Prints the rendered surface of a freshly configured widget as JSON.
pub fn dump_view(picker: &DatePicker) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(&picker.view())?);
    Ok(())
}
