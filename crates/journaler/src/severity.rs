//! Severities, label colors and label rendering

use std::fmt;
use std::str::FromStr;

use console::Style;
use serde::{Deserialize, Serialize};

use crate::error::{JournalError, JournalResult};

/// Message severity
///
/// Determines which configured label starts a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Notification,
    Warning,
    Error,
    Debug,
}

impl Severity {
    /// All severities, in table order
    pub const ALL: [Severity; 5] = [
        Severity::Success,
        Severity::Notification,
        Severity::Warning,
        Severity::Error,
        Severity::Debug,
    ];

    /// Key accepted by `Journal::set_label`
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Notification => "notification",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Debug => "debug",
        }
    }

    /// Label text used until someone calls `set_label`
    pub fn default_label(&self) -> &'static str {
        match self {
            Severity::Success => "Success",
            Severity::Notification => "Notification",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Debug => "Debug",
        }
    }

    pub fn color(&self) -> LabelColor {
        match self {
            Severity::Success => LabelColor::Green,
            Severity::Warning => LabelColor::Yellow,
            Severity::Error => LabelColor::Red,
            Severity::Notification | Severity::Debug => LabelColor::Default,
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = JournalError;

    fn from_str(s: &str) -> JournalResult<Self> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| JournalError::unknown_severity(s))
    }
}

/// Label color; every variant is bold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelColor {
    Green,
    Yellow,
    Red,
    #[default]
    Default,
}

impl LabelColor {
    /// Map a color name from `output` calls.
    ///
    /// Only `green`, `yellow` and `red` are recognized; anything else,
    /// including an empty name, is the default bold style.
    pub fn from_name(name: &str) -> Self {
        match name {
            "green" => LabelColor::Green,
            "yellow" => LabelColor::Yellow,
            "red" => LabelColor::Red,
            _ => LabelColor::Default,
        }
    }

    fn style(&self) -> Style {
        let style = Style::new().bold();
        match self {
            LabelColor::Green => style.green(),
            LabelColor::Yellow => style.yellow(),
            LabelColor::Red => style.red(),
            LabelColor::Default => style,
        }
    }
}

/// Whether labels carry ANSI styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Let the terminal detection of `console` decide
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = JournalError;

    fn from_str(s: &str) -> JournalResult<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(JournalError::Other(format!("unknown color mode: {}", other))),
        }
    }
}

/// Render `[text]` in the given color
pub fn render_label(text: &str, color: LabelColor, mode: ColorMode) -> String {
    let style = match mode {
        ColorMode::Auto => color.style(),
        ColorMode::Always => color.style().force_styling(true),
        ColorMode::Never => color.style().force_styling(false),
    };
    style.apply_to(format!("[{}]", text)).to_string()
}
