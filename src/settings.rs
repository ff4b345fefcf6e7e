// src/settings.rs  —  Persisted user settings (CLI + JSON record)
use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── CLI ───────────────────────────────────────────────────────────────────────
#[derive(Parser, Debug)]
#[command(
    name    = "eduscan",
    about   = "EduScan Somalia  |  Learning Risk Assessment Dashboard",
    version,
)]
pub struct Cli {
    /// Settings file path (default: ~/.config/eduscan/settings.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// UI language for this session: english | somali | arabic (not persisted)
    #[arg(long)]
    pub lang: Option<Language>,

    /// Theme for this session: modern | classic | dark (not persisted)
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Run this session in offline mode (not persisted)
    #[arg(long, action)]
    pub offline: bool,

    /// Print the persisted settings as JSON and exit
    #[arg(long, action)]
    pub print_settings: bool,

    /// Write the default settings file and exit.
    /// Use --config <PATH> to write to a custom location.
    #[arg(long, action)]
    pub write_settings: bool,

    /// Restore the default settings on disk and exit
    #[arg(long, action)]
    pub reset: bool,
}

// ── Enums shared across CLI + JSON ────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Language { English, Somali, Arabic }

impl Language {
    /// All selectable languages, in settings-page order.
    pub const ALL: [Language; 3] = [Language::English, Language::Somali, Language::Arabic];

    /// Canonical name as persisted in the settings file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Somali  => "Somali",
            Language::Arabic  => "Arabic",
        }
    }

    /// Parse a persisted name; anything outside the supported set is `None`.
    pub fn parse(name: &str) -> Option<Language> {
        match name {
            "English" => Some(Language::English),
            "Somali"  => Some(Language::Somali),
            "Arabic"  => Some(Language::Arabic),
            _         => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Theme { Modern, Classic, Dark }

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Modern, Theme::Classic, Theme::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Modern  => "Modern",
            Theme::Classic => "Classic",
            Theme::Dark    => "Dark",
        }
    }

    pub fn parse(name: &str) -> Option<Theme> {
        match name {
            "Modern"  => Some(Theme::Modern),
            "Classic" => Some(Theme::Classic),
            "Dark"    => Some(Theme::Dark),
            _         => None,
        }
    }
}

// ── Settings record ───────────────────────────────────────────────────────────
/// The single persisted configuration record. Field order here is the
/// on-disk field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub language:     Language,
    pub theme:        Theme,
    pub offline_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language:     Language::English,
            theme:        Theme::Modern,
            offline_mode: false,
        }
    }
}

impl Settings {
    /// Session-only CLI overrides, applied on top of the persisted record.
    /// Never written back unless the user saves from the settings page.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(v) = cli.lang  { self.language = v; }
        if let Some(v) = cli.theme { self.theme    = v; }
        if cli.offline             { self.offline_mode = true; }
    }
}

// ── Raw file structure ────────────────────────────────────────────────────────
/// On-disk mirror with every field optional and enum fields as plain strings,
/// so one out-of-range value sanitizes a single field instead of failing the
/// whole parse.
#[derive(Debug, Clone, Default, Deserialize)]
struct SettingsFile {
    language:     Option<String>,
    theme:        Option<String>,
    offline_mode: Option<bool>,
}

impl SettingsFile {
    fn sanitize(self) -> Settings {
        let mut out = Settings::default();
        if let Some(v) = &self.language {
            match Language::parse(v) {
                Some(lang) => out.language = lang,
                None => log::warn!("unknown language {v:?} in settings, using {}", out.language.as_str()),
            }
        }
        if let Some(v) = &self.theme {
            match Theme::parse(v) {
                Some(theme) => out.theme = theme,
                None => log::warn!("unknown theme {v:?} in settings, using {}", out.theme.as_str()),
            }
        }
        if let Some(v) = self.offline_mode {
            out.offline_mode = v;
        }
        out
    }
}

// ── Load origin ───────────────────────────────────────────────────────────────
/// Where a loaded record actually came from. `load()` always succeeds; this
/// lets callers tell "defaults because absent" from "defaults because corrupt".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsOrigin {
    /// Parsed (and possibly sanitized) from the settings file.
    Stored,
    /// No file at the settings path.
    MissingFile,
    /// The file exists but could not be read.
    Unreadable,
    /// The file was read but is not valid JSON.
    Malformed,
}

// ── Store ─────────────────────────────────────────────────────────────────────
/// Sole owner of the on-disk settings record. All reads are side-effect-free;
/// every save replaces the whole file atomically.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(cli: &Cli) -> Self {
        Self { path: cli.config.clone().unwrap_or_else(default_settings_path) }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted record. Total: a missing, unreadable, or malformed
    /// file resolves to the default record.
    pub fn load(&self) -> Settings {
        self.load_with_origin().0
    }

    pub fn load_with_origin(&self) -> (Settings, SettingsOrigin) {
        if !self.path.exists() {
            return (Settings::default(), SettingsOrigin::MissingFile);
        }
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("settings file {:?} unreadable ({err}), using defaults", self.path);
                return (Settings::default(), SettingsOrigin::Unreadable);
            }
        };
        let file: SettingsFile = match serde_json::from_str(&raw) {
            Ok(file) => file,
            Err(err) => {
                log::warn!("settings file {:?} malformed ({err}), using defaults", self.path);
                return (Settings::default(), SettingsOrigin::Malformed);
            }
        };
        (file.sanitize(), SettingsOrigin::Stored)
    }

    /// Replace the persisted record. Writes a temp file next to the target
    /// and renames it over, so an interrupted save never leaves a
    /// half-written record behind.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Creating settings directory {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(settings)
            .context("Serializing settings")?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)
            .with_context(|| format!("Writing settings to {:?}", tmp))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("Replacing settings at {:?}", self.path))?;
        log::debug!("settings saved to {:?}", self.path);
        Ok(())
    }

    /// Persist the default record and return it, so the caller can replace
    /// any cached session copy.
    pub fn reset(&self) -> Result<Settings> {
        let defaults = Settings::default();
        self.save(&defaults)?;
        log::info!("settings reset to defaults at {:?}", self.path);
        Ok(defaults)
    }

    pub fn is_offline_capable(&self) -> bool {
        self.load().offline_mode
    }
}

fn default_settings_path() -> PathBuf {
    config_dir().join("eduscan").join("settings.json")
}

fn config_dir() -> PathBuf {
    if let Ok(v) = std::env::var("XDG_CONFIG_HOME") { return PathBuf::from(v); }
    if let Ok(v) = std::env::var("APPDATA")          { return PathBuf::from(v); }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_default();
    PathBuf::from(home).join(".config")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn store_in(dir: &tempfile::TempDir) -> SettingsStore {
        SettingsStore::at(dir.path().join("settings.json"))
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let settings = Settings {
            language:     Language::Arabic,
            theme:        Theme::Dark,
            offline_mode: true,
        };
        store.save(&settings).unwrap();
        let (loaded, origin) = store.load_with_origin();
        assert_eq!(loaded, settings);
        assert_eq!(origin, SettingsOrigin::Stored);
    }

    #[test]
    fn saved_record_has_stable_field_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&Settings::default()).unwrap();
        let raw = std::fs::read_to_string(store.path()).unwrap();
        let lang = raw.find("\"language\"").unwrap();
        let theme = raw.find("\"theme\"").unwrap();
        let offline = raw.find("\"offline_mode\"").unwrap();
        assert!(lang < theme && theme < offline);
        assert!(raw.contains("\"English\""));
    }

    #[test]
    fn load_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&Settings { language: Language::Somali, ..Settings::default() }).unwrap();
        assert_eq!(store.load(), store.load());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let (settings, origin) = store.load_with_origin();
        assert_eq!(settings, Settings::default());
        assert_eq!(origin, SettingsOrigin::MissingFile);
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{not json!!").unwrap();
        let (settings, origin) = store.load_with_origin();
        assert_eq!(settings, Settings::default());
        assert_eq!(origin, SettingsOrigin::Malformed);
    }

    #[test]
    fn unknown_theme_sanitizes_to_modern() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path(),
            r#"{ "language": "Somali", "theme": "Neon", "offline_mode": true }"#,
        )
        .unwrap();
        let settings = store.load();
        // only the bad field falls back; the rest of the record survives
        assert_eq!(settings.theme, Theme::Modern);
        assert_eq!(settings.language, Language::Somali);
        assert!(settings.offline_mode);
    }

    #[test]
    fn unknown_language_sanitizes_to_english() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path(),
            r#"{ "language": "Klingon", "theme": "Dark", "offline_mode": false }"#,
        )
        .unwrap();
        let settings = store.load();
        assert_eq!(settings.language, Language::English);
        assert_eq!(settings.theme, Theme::Dark);
    }

    #[test]
    fn partial_record_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), r#"{ "language": "Arabic" }"#).unwrap();
        let settings = store.load();
        assert_eq!(settings.language, Language::Arabic);
        assert_eq!(settings.theme, Theme::Modern);
        assert!(!settings.offline_mode);
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&Settings::default()).unwrap();
        assert!(store.path().exists());
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn reset_restores_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .save(&Settings { language: Language::Arabic, theme: Theme::Dark, offline_mode: true })
            .unwrap();
        let defaults = store.reset().unwrap();
        assert_eq!(defaults, Settings::default());
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn offline_flag_reads_persisted_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(!store.is_offline_capable());
        store.save(&Settings { offline_mode: true, ..Settings::default() }).unwrap();
        assert!(store.is_offline_capable());
    }

    #[test]
    fn cli_overrides_are_session_only() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&Settings::default()).unwrap();

        let cli = Cli::parse_from(["eduscan", "--lang", "arabic", "--offline"]);
        let mut session = store.load();
        session.apply_cli(&cli);
        assert_eq!(session.language, Language::Arabic);
        assert!(session.offline_mode);
        // nothing written back
        assert_eq!(store.load(), Settings::default());
    }
}
