use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::date::{engine::parse_internal, CalendarDate, Locale};
use crate::widget::{DatePickerConfig, ValidationStatus};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("Invalid date for {field}: '{value}'. Use YYYY-MM-DD.")]
    InvalidDate { field: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub picker: PickerConfig,
    pub ui: UiConfig,
    /// Full locale bundle; overrides `ui.locale` when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PickerConfig {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub validation_status: ValidationStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub theme: String,
    pub locale: String,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn load_or_create() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("a11y-datepicker")
            .join("config.toml")
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn locale(&self) -> Locale {
        self.locale
            .clone()
            .unwrap_or_else(|| Locale::get_by_name(&self.ui.locale))
    }

    /// Builds the widget configuration. Bounds must be valid dates; an
    /// unparseable default value is passed through and ignored by the widget.
    pub fn picker_config(&self) -> Result<DatePickerConfig, ConfigError> {
        let picker = &self.picker;
        let min_date = parse_bound("min_date", picker.min_date.as_deref())?;
        let max_date = parse_bound("max_date", picker.max_date.as_deref())?;

        if let (Some(min), Some(max)) = (min_date, max_date)
            && min > max
        {
            warn!(?min, ?max, "min_date is after max_date; no date will validate");
        }

        Ok(DatePickerConfig {
            id: picker.id.clone(),
            name: picker.name.clone(),
            default_value: picker.default_value.clone(),
            min_date,
            max_date,
            disabled: picker.disabled,
            required: picker.required,
            validation_status: picker.validation_status,
            locale: self.locale(),
        })
    }
}

fn parse_bound(field: &'static str, value: Option<&str>) -> Result<Option<CalendarDate>, ConfigError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => parse_internal(raw)
            .map(Some)
            .ok_or_else(|| ConfigError::InvalidDate { field, value: raw.to_string() }),
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            id: "date".to_string(),
            name: "date".to_string(),
            default_value: None,
            min_date: None,
            max_date: None,
            required: false,
            disabled: false,
            validation_status: ValidationStatus::Neutral,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            locale: "en".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            picker: PickerConfig::default(),
            ui: UiConfig::default(),
            locale: None,
        }
    }
}
