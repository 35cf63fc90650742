use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::env;

/// Stored theme preference. `System` follows the terminal's reported color
/// scheme for as long as it stays selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Dark,
    Light,
    System,
}

impl ThemePreference {
    pub fn label(self) -> &'static str {
        match self {
            ThemePreference::Dark => "Dark",
            ThemePreference::Light => "Light",
            ThemePreference::System => "System",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::System,
            ThemePreference::System => ThemePreference::Dark,
        }
    }
}

/// The concrete rendering mode currently applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveTheme {
    Dark,
    Light,
}

/// Resolves the stored preference into an effective theme. The terminal
/// scheme is probed only while the preference is `System`.
pub struct ThemeController {
    preference: ThemePreference,
    effective: EffectiveTheme,
}

impl ThemeController {
    pub fn new(preference: ThemePreference) -> Self {
        let mut controller = Self {
            preference,
            effective: EffectiveTheme::Dark,
        };
        controller.resolve();
        controller
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn effective(&self) -> EffectiveTheme {
        self.effective
    }

    pub fn set_preference(&mut self, preference: ThemePreference) {
        self.preference = preference;
        self.resolve();
    }

    /// Re-check the terminal scheme. A no-op unless the preference is
    /// `System`, so explicit dark/light never drifts.
    pub fn refresh(&mut self) {
        if self.preference == ThemePreference::System {
            self.resolve();
        }
    }

    fn resolve(&mut self) {
        self.effective = match self.preference {
            ThemePreference::Dark => EffectiveTheme::Dark,
            ThemePreference::Light => EffectiveTheme::Light,
            ThemePreference::System => terminal_scheme(),
        };
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.effective)
    }
}

/// Terminal color scheme from the COLORFGBG convention ("fg;bg", where a
/// background index of 0-6 or 8 means a dark background). Unset or
/// unparseable values fall back to dark.
fn terminal_scheme() -> EffectiveTheme {
    match env::var("COLORFGBG") {
        Ok(value) => scheme_from_colorfgbg(&value),
        Err(_) => EffectiveTheme::Dark,
    }
}

fn scheme_from_colorfgbg(value: &str) -> EffectiveTheme {
    let Some(bg) = value.rsplit(';').next().and_then(|v| v.trim().parse::<u8>().ok()) else {
        return EffectiveTheme::Dark;
    };
    if bg <= 6 || bg == 8 {
        EffectiveTheme::Dark
    } else {
        EffectiveTheme::Light
    }
}

/// Semantic colors for the active effective theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub dim: Color,
    pub border: Color,
    pub highlight: Color,
    pub ok: Color,
    pub err: Color,
    pub json_key: Color,
    pub json_string: Color,
    pub json_punct: Color,
}

impl Palette {
    pub fn for_theme(theme: EffectiveTheme) -> Self {
        match theme {
            EffectiveTheme::Dark => Self {
                accent: Color::Yellow,
                text: Color::White,
                dim: Color::Gray,
                border: Color::DarkGray,
                highlight: Color::Yellow,
                ok: Color::Green,
                err: Color::Red,
                json_key: Color::Cyan,
                json_string: Color::Green,
                json_punct: Color::Gray,
            },
            EffectiveTheme::Light => Self {
                accent: Color::Blue,
                text: Color::Black,
                dim: Color::DarkGray,
                border: Color::Gray,
                highlight: Color::Blue,
                ok: Color::Green,
                err: Color::Red,
                json_key: Color::Blue,
                json_string: Color::Magenta,
                json_punct: Color::DarkGray,
            },
        }
    }
}
