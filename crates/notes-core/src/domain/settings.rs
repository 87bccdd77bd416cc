//! Settings Record
//!
//! Presentation and behavior toggles stored under the "settings" key.
//! Always written wholesale.

use serde::{Deserialize, Serialize};
use super::entity::{NotesError, NotesResult};

/// Persisted settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub dark_mode: bool,
    pub font_size: String,
    pub font_family: String,
    pub sync_enabled: bool,
    pub max_notes: i64,
    pub context_menu: bool,
    pub notifications: bool,
    /// Inject the in-page capture button
    pub floating_button: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            font_size: FontSize::Medium.as_str().to_string(),
            font_family: "Roboto, sans-serif".to_string(),
            sync_enabled: true,
            max_notes: 100,
            context_menu: true,
            notifications: true,
            floating_button: false,
        }
    }
}

/// Font size choices offered by the options page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Medium, FontSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "small" => FontSize::Small,
            "large" => FontSize::Large,
            _ => FontSize::Medium,
        }
    }

    /// Root font size applied to the popup
    pub fn css_value(&self) -> &'static str {
        match self {
            FontSize::Small => "12px",
            FontSize::Medium => "14px",
            FontSize::Large => "16px",
        }
    }
}

/// Options page form contents; `max_notes` is the raw input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub dark_mode: bool,
    pub font_size: String,
    pub font_family: String,
    pub sync_enabled: bool,
    pub max_notes: String,
    pub context_menu: bool,
    pub notifications: bool,
    pub floating_button: bool,
}

impl From<&Settings> for SettingsForm {
    fn from(s: &Settings) -> Self {
        Self {
            dark_mode: s.dark_mode,
            font_size: s.font_size.clone(),
            font_family: s.font_family.clone(),
            sync_enabled: s.sync_enabled,
            max_notes: s.max_notes.to_string(),
            context_menu: s.context_menu,
            notifications: s.notifications,
            floating_button: s.floating_button,
        }
    }
}

impl SettingsForm {
    pub fn into_settings(self) -> NotesResult<Settings> {
        let max_notes = parse_int_prefix(&self.max_notes)
            .ok_or_else(|| NotesError::validation("Max notes must be a whole number"))?;
        Ok(Settings {
            dark_mode: self.dark_mode,
            font_size: self.font_size,
            font_family: self.font_family,
            sync_enabled: self.sync_enabled,
            max_notes,
            context_menu: self.context_menu,
            notifications: self.notifications,
            floating_button: self.floating_button,
        })
    }
}

/// Integer parsing with `parseInt(s, 10)` semantics: leading whitespace,
/// optional sign, then as many decimal digits as present. Trailing text is
/// ignored; no digits yields `None`. Values past the `i64` range saturate.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: &str = {
        let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}
