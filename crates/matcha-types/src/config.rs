//! Shell configuration.
//!
//! Loaded from an optional TOML file; every field has a default so an
//! absent or partial file is fine. The text-generation API key is NOT
//! configuration -- it is read from the process environment at call time.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::app::AppId;
use crate::error::Result;

/// Top-level configuration for the shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Lock screen PIN (4 digits).
    pub pin: String,
    /// Apps pinned to the desktop taskbar, in order.
    pub taskbar_pins: Vec<AppId>,
    pub assistant: AssistantConfig,
    pub browser: BrowserConfig,
}

/// Settings for the AI assistant's text-generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Model identifier sent to the text-generation endpoint.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// System persona sent with every request.
    pub persona: String,
}

/// Settings for the simulated browser app.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Page shown when the browser opens.
    pub home_url: String,
    /// Prefix for turning a non-URL address bar entry into a search.
    pub search_prefix: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            pin: "0000".to_string(),
            taskbar_pins: vec![
                AppId::Mail,
                AppId::Browser,
                AppId::Assistant,
                AppId::Camera,
                AppId::Play,
            ],
            assistant: AssistantConfig::default(),
            browser: BrowserConfig::default(),
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: "gemini-3-flash-preview".to_string(),
            temperature: 0.9,
            persona: "You are the matcha-os assistant, deeply integrated into the \
                      operating system. You are upbeat and modern, answer smartly, \
                      and always put a smooth user experience first. Keep replies \
                      short and polished."
                .to_string(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            home_url: "https://www.bing.com".to_string(),
            search_prefix: "https://www.google.com/search?q=".to_string(),
        }
    }
}

impl ShellConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = ShellConfig::default();
        assert_eq!(cfg.pin, "0000");
        assert_eq!(cfg.taskbar_pins.len(), 5);
        assert_eq!(cfg.assistant.model, "gemini-3-flash-preview");
        assert!((cfg.assistant.temperature - 0.9).abs() < f32::EPSILON);
        assert!(cfg.browser.home_url.starts_with("https://"));
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg = ShellConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.pin, ShellConfig::default().pin);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let cfg = ShellConfig::from_toml_str(
            r#"
            pin = "4321"

            [assistant]
            temperature = 0.2
            "#,
        )
        .unwrap();
        assert_eq!(cfg.pin, "4321");
        assert!((cfg.assistant.temperature - 0.2).abs() < f32::EPSILON);
        // Untouched fields keep their defaults.
        assert_eq!(cfg.assistant.model, "gemini-3-flash-preview");
        assert_eq!(cfg.browser.search_prefix, BrowserConfig::default().search_prefix);
    }

    #[test]
    fn taskbar_pins_parse_as_tokens() {
        let cfg = ShellConfig::from_toml_str(r#"taskbar_pins = ["browser", "camera"]"#).unwrap();
        assert_eq!(cfg.taskbar_pins, vec![AppId::Browser, AppId::Camera]);
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(ShellConfig::from_toml_str("pin = [[[").is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matcha.toml");
        std::fs::write(&path, "pin = \"1234\"\n").unwrap();
        let cfg = ShellConfig::load(&path).unwrap();
        assert_eq!(cfg.pin, "1234");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = ShellConfig::load(Path::new("/nonexistent/matcha.toml")).unwrap_err();
        assert!(format!("{err}").contains("I/O error"));
    }
}
