//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub display: DisplaySettings,
    pub candidates: CandidateSettings,
    pub dictionary: DictionarySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    placeholder: String,
    pub separator: String,
}

impl DisplaySettings {
    /// Placeholder character; validated to be exactly one character.
    pub fn placeholder(&self) -> char {
        self.placeholder.chars().next().unwrap_or('-')
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateSettings {
    pub max_listed: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DictionarySettings {
    pub default_path: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn invalid(field: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.display.placeholder.chars().count() != 1 {
        return Err(invalid(
            "display.placeholder",
            "must be exactly one character",
        ));
    }
    if s.display.separator.is_empty() {
        return Err(invalid("display.separator", "must not be empty"));
    }
    if s.candidates.max_listed == 0 {
        return Err(invalid("candidates.max_listed", "must be at least 1"));
    }
    if s.dictionary.default_path.trim().is_empty() {
        return Err(invalid("dictionary.default_path", "must not be empty"));
    }
    Ok(())
}
