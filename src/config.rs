//! Theme preference persistence: one small JSON file in the user config dir,
//! loaded once at startup and rewritten on every preference change.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{env, fs};

use crate::theme::ThemePreference;

const CONFIG_PATH_ENV: &str = "ASMRGEN_CONFIG_PATH";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Config {
    theme: ThemePreference,
}

fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::config_dir().map(|d| d.join("asmrgen").join(CONFIG_FILE))
}

/// Load the stored theme preference. Missing or unreadable config falls back
/// to dark, the first-run default.
pub fn load_theme_preference() -> ThemePreference {
    let Some(path) = config_path() else {
        return ThemePreference::Dark;
    };
    let Ok(contents) = fs::read_to_string(&path) else {
        return ThemePreference::Dark;
    };
    serde_json::from_str::<Config>(&contents)
        .map(|c| c.theme)
        .unwrap_or(ThemePreference::Dark)
}

/// Persist the theme preference, creating the config directory if needed.
pub fn save_theme_preference(theme: ThemePreference) -> Result<()> {
    let path = config_path().context("could not determine config directory")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(&Config { theme })?;
    fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests that mutate ASMRGEN_CONFIG_PATH.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn save_then_load_round_trips() {
        let _guard = ENV_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        env::set_var(CONFIG_PATH_ENV, &path);

        save_theme_preference(ThemePreference::Light).unwrap();
        assert_eq!(load_theme_preference(), ThemePreference::Light);

        save_theme_preference(ThemePreference::System).unwrap();
        assert_eq!(load_theme_preference(), ThemePreference::System);

        env::remove_var(CONFIG_PATH_ENV);
    }

    #[test]
    fn missing_config_defaults_to_dark() {
        let _guard = ENV_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        env::set_var(CONFIG_PATH_ENV, dir.path().join("absent.json"));
        assert_eq!(load_theme_preference(), ThemePreference::Dark);
        env::remove_var(CONFIG_PATH_ENV);
    }

    #[test]
    fn corrupt_config_defaults_to_dark() {
        let _guard = ENV_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();
        env::set_var(CONFIG_PATH_ENV, &path);
        assert_eq!(load_theme_preference(), ThemePreference::Dark);
        env::remove_var(CONFIG_PATH_ENV);
    }
}
