use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::entry::types::{DEFAULT_HOME_NAME, DEFAULT_VISITOR_NAME};
use crate::history::MAX_HISTORY;

/// How many saved matches `history list` shows by default.
pub const DEFAULT_HISTORY_DISPLAY: usize = 25;

/// Colour theme for terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
    /// Probe the terminal background at startup.
    Auto,
}

impl ThemeChoice {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(ThemeChoice::Dark),
            "light" => Some(ThemeChoice::Light),
            "auto" => Some(ThemeChoice::Auto),
            _ => None,
        }
    }
}

/// Contents of `config.yaml`. Every field is optional.
///
/// Example YAML:
/// ```yaml
/// theme: light
/// history_limit: 100
/// history_display: 10
/// default_home_name: Central
/// default_visitor_name: Visitor
/// data_dir: /home/coach/bowling
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeChoice>,

    /// Most saved matches kept (1-200, default 200)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_limit: Option<usize>,

    /// Saved matches shown by `history list` (default 25)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_display: Option<usize>,

    /// Home team name for a freshly cleared match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_home_name: Option<String>,

    /// Visitor team name for a freshly cleared match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_visitor_name: Option<String>,

    /// Where current.json and history.json live (default: the config directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Config {
    pub fn theme(&self) -> ThemeChoice {
        self.theme.unwrap_or_default()
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit.unwrap_or(MAX_HISTORY)
    }

    pub fn history_display(&self) -> usize {
        self.history_display.unwrap_or(DEFAULT_HISTORY_DISPLAY)
    }

    pub fn home_name(&self) -> &str {
        self.default_home_name.as_deref().unwrap_or(DEFAULT_HOME_NAME)
    }

    pub fn visitor_name(&self) -> &str {
        self.default_visitor_name
            .as_deref()
            .unwrap_or(DEFAULT_VISITOR_NAME)
    }
}
