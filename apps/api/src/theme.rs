//! Explicit theme configuration.
//!
//! The product's pages used to read light/dark state from an ambient
//! provider wrapping the whole tree. Here the mode is a plain value passed
//! where it is needed, and toggling is a pure transition that returns the
//! next value — no global state, no hidden mutation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Enumerated palette for one mode. Every recognized option is listed
/// explicitly; there is no pass-through of arbitrary style keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
}

const LIGHT: Palette = Palette {
    primary: "#4F46E5",
    secondary: "#10B981",
    background: "#F3F4F6",
    paper: "#FFFFFF",
    text_primary: "#1F2937",
    text_secondary: "#6B7280",
};

const DARK: Palette = Palette {
    primary: "#6366F1",
    secondary: "#10B981",
    background: "#111827",
    paper: "#1F2937",
    text_primary: "#F9FAFB",
    text_secondary: "#E5E7EB",
};

impl ThemeMode {
    /// Pure transition: light ⇄ dark.
    pub fn toggle(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => DARK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggle().toggle(), ThemeMode::Light);
    }

    #[test]
    fn test_palettes_differ_per_mode() {
        assert_ne!(
            ThemeMode::Light.palette().background,
            ThemeMode::Dark.palette().background
        );
        // Secondary is shared between modes on purpose.
        assert_eq!(
            ThemeMode::Light.palette().secondary,
            ThemeMode::Dark.palette().secondary
        );
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
    }
}
