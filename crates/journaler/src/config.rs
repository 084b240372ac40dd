//! Journal configuration
//!
//! Read from YAML (`~/.config/journaler/config.yaml` for the user level) and
//! overridable through environment variables:
//! - `JOURNALER_COLOR`: `auto`, `always` or `never`
//! - `JOURNALER_DEBUG`: `1` or `true` writes debug lines, anything else hides them

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::JournalResult;
use crate::severity::{ColorMode, Severity};

pub const COLOR_ENV: &str = "JOURNALER_COLOR";
pub const DEBUG_ENV: &str = "JOURNALER_DEBUG";

/// Configuration applied when a journal is built
///
/// ```yaml
/// color: never
/// debug: false
/// labels:
///   error: "uh oh."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JournalConfig {
    /// Whether labels carry ANSI styling
    pub color: ColorMode,

    /// Whether debug lines are written at all
    pub debug: bool,

    /// Label text overrides; severities left out keep their defaults
    pub labels: BTreeMap<Severity, String>,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            debug: true,
            labels: BTreeMap::new(),
        }
    }
}

impl JournalConfig {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        Self::default().apply_env()
    }

    /// Parse a YAML document
    pub fn from_yaml_str(content: &str) -> JournalResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load config from file; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> JournalResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load the user-level config file
    pub fn load_user() -> JournalResult<Self> {
        Self::load(Self::user_path())
    }

    /// Save config to file, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> JournalResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// User-level config path (`~/.config/journaler/config.yaml` on Linux)
    pub fn user_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("journaler").join("config.yaml")
    }

    /// Apply `JOURNALER_COLOR` / `JOURNALER_DEBUG` from the process environment
    pub fn apply_env(self) -> Self {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// An unparseable color mode is ignored.
    pub fn apply_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(color) = lookup(COLOR_ENV).and_then(|v| v.parse().ok()) {
            self.color = color;
        }
        if let Some(debug) = lookup(DEBUG_ENV) {
            self.debug = debug == "1" || debug.to_lowercase() == "true";
        }
        self
    }

    /// Override one label
    pub fn with_label(mut self, severity: Severity, text: impl Into<String>) -> Self {
        self.labels.insert(severity, text.into());
        self
    }

    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Label text for `severity`, configured or default
    pub fn label_text(&self, severity: Severity) -> &str {
        self.labels
            .get(&severity)
            .map(String::as_str)
            .unwrap_or_else(|| severity.default_label())
    }
}
