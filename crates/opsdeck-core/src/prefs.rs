use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// UI preferences persisted at `~/.opsdeck/prefs.toml`.
///
/// This is the only state that survives a restart; every domain record is
/// rebuilt from fixtures on launch.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Prefs {
    #[serde(default)]
    pub appearance: AppearancePrefs,
    #[serde(default)]
    pub language: LanguagePrefs,
    #[serde(default)]
    pub ui: UiPrefs,
}

pub const THEMES: &[&str] = &["dark", "light"];
pub const LANGUAGES: &[&str] = &["en", "es", "hi"];

impl Prefs {
    /// Load from the default path, falling back to defaults when the file
    /// does not exist yet.
    pub fn load() -> Result<Self, PrefsError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, PrefsError> {
        let text = std::fs::read_to_string(path.as_ref())
            .map_err(|e| PrefsError::Io(e.to_string()))?;
        let prefs: Prefs = toml::from_str(&text).map_err(|e| PrefsError::Parse(e.to_string()))?;
        prefs.validate()?;
        Ok(prefs)
    }

    /// Write to the default path, creating `~/.opsdeck/` on first use.
    pub fn save(&self) -> Result<(), PrefsError> {
        self.save_to(Self::default_path())
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), PrefsError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PrefsError::Io(e.to_string()))?;
        }
        std::fs::write(path, self.to_toml()?).map_err(|e| PrefsError::Io(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String, PrefsError> {
        self.validate()?;
        toml::to_string_pretty(self).map_err(|e| PrefsError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), PrefsError> {
        if !THEMES.contains(&self.appearance.theme.as_str()) {
            return Err(PrefsError::Validation(format!(
                "appearance.theme '{}' is not supported",
                self.appearance.theme
            )));
        }
        if !LANGUAGES.contains(&self.language.interface_language.as_str()) {
            return Err(PrefsError::Validation(format!(
                "language.interface_language '{}' is not supported",
                self.language.interface_language
            )));
        }
        if !(16..=2000).contains(&self.ui.tick_ms) {
            return Err(PrefsError::Validation(
                "ui.tick_ms must be between 16 and 2000".to_string(),
            ));
        }
        Ok(())
    }

    /// Advance to the next theme and return it.
    pub fn cycle_theme(&mut self) -> &str {
        self.appearance.theme = next_in(THEMES, &self.appearance.theme).to_string();
        &self.appearance.theme
    }

    /// Advance to the next interface language and return it.
    pub fn cycle_language(&mut self) -> &str {
        self.language.interface_language =
            next_in(LANGUAGES, &self.language.interface_language).to_string();
        &self.language.interface_language
    }

    fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".opsdeck")
            .join("prefs.toml")
    }
}

fn next_in<'a>(options: &[&'a str], current: &str) -> &'a str {
    let idx = options.iter().position(|o| *o == current).unwrap_or(0);
    options[(idx + 1) % options.len()]
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearancePrefs {
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for AppearancePrefs {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

fn default_theme() -> String {
    "dark".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagePrefs {
    #[serde(default = "default_language")]
    pub interface_language: String,
}

impl Default for LanguagePrefs {
    fn default() -> Self {
        Self {
            interface_language: default_language(),
        }
    }
}

fn default_language() -> String {
    "en".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPrefs {
    /// Event-loop poll interval in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

fn default_tick_ms() -> u64 {
    250
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("io: {0}")]
    Io(String),
    #[error("parse: {0}")]
    Parse(String),
    #[error("validation: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let prefs = Prefs::default();
        assert!(prefs.validate().is_ok());
        assert_eq!(prefs.appearance.theme, "dark");
        assert_eq!(prefs.language.interface_language, "en");
        assert_eq!(prefs.ui.tick_ms, 250);
    }

    #[test]
    fn roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");

        let mut prefs = Prefs::default();
        prefs.cycle_theme();
        prefs.cycle_language();
        prefs.save_to(&path).unwrap();

        let loaded = Prefs::load_from(&path).unwrap();
        assert_eq!(loaded.appearance.theme, "light");
        assert_eq!(loaded.language.interface_language, "es");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        std::fs::write(&path, "[appearance]\ntheme = \"light\"\n").unwrap();

        let loaded = Prefs::load_from(&path).unwrap();
        assert_eq!(loaded.appearance.theme, "light");
        assert_eq!(loaded.language.interface_language, "en");
        assert_eq!(loaded.ui.tick_ms, 250);
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        std::fs::write(&path, "[appearance]\ntheme = \"solarized\"\n").unwrap();
        assert!(matches!(
            Prefs::load_from(&path),
            Err(PrefsError::Validation(_))
        ));
    }

    #[test]
    fn tick_range_is_enforced() {
        let mut prefs = Prefs::default();
        prefs.ui.tick_ms = 5;
        assert!(prefs.validate().is_err());
        prefs.ui.tick_ms = 2000;
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn cycles_wrap_around() {
        let mut prefs = Prefs::default();
        assert_eq!(prefs.cycle_theme(), "light");
        assert_eq!(prefs.cycle_theme(), "dark");
        assert_eq!(prefs.cycle_language(), "es");
        assert_eq!(prefs.cycle_language(), "hi");
        assert_eq!(prefs.cycle_language(), "en");
    }
}
