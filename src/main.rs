// src/main.rs  —  eduscan entry point
mod data;
mod i18n;
mod recommend;
mod settings;
#[cfg(feature = "tui")]
mod theme;
mod tui;

use anyhow::Result;
use clap::Parser;
use i18n::Catalog;
use settings::{Cli, Settings, SettingsStore};

// ── Shared UI state (passed to TUI draw) ─────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page { Dashboard, Settings }

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField { Language, Theme, Offline }

impl SettingsField {
    fn next(self) -> Self {
        match self {
            SettingsField::Language => SettingsField::Theme,
            SettingsField::Theme    => SettingsField::Offline,
            SettingsField::Offline  => SettingsField::Language,
        }
    }

    fn prev(self) -> Self {
        match self {
            SettingsField::Language => SettingsField::Offline,
            SettingsField::Theme    => SettingsField::Language,
            SettingsField::Offline  => SettingsField::Theme,
        }
    }
}

pub struct AppState {
    /// Active session copy of the settings. Drives language and theme for
    /// every draw; refreshed from the store after save and reset.
    pub session:      Settings,
    /// Record being edited on the settings page, persisted on Enter.
    pub pending:      Settings,
    pub page:         Page,
    pub field:        SettingsField,
    pub selected_row: usize,
    /// Localization key of the transient status message, resolved at draw time.
    pub status_key:   Option<&'static str>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let store = SettingsStore::new(&cli);

    // ── --print-settings ──────────────────────────────────────────────────────
    if cli.print_settings {
        println!("{}", serde_json::to_string_pretty(&store.load())?);
        return Ok(());
    }

    // ── --write-settings ──────────────────────────────────────────────────────
    if cli.write_settings {
        store.save(&Settings::default())?;
        println!("Settings written to: {}", store.path().display());
        return Ok(());
    }

    // ── --reset ───────────────────────────────────────────────────────────────
    if cli.reset {
        store.reset()?;
        println!("Settings reset to defaults at: {}", store.path().display());
        return Ok(());
    }

    // ── Load settings ─────────────────────────────────────────────────────────
    let (mut session, origin) = store.load_with_origin();
    log::info!("settings loaded ({origin:?}) from {}", store.path().display());
    if store.is_offline_capable() {
        log::info!("offline mode enabled in persisted settings");
    }
    session.apply_cli(&cli);

    // ── i18n ──────────────────────────────────────────────────────────────────
    let catalog = Catalog::new();

    let mut state = AppState {
        session,
        pending: session,
        page: Page::Dashboard,
        field: SettingsField::Language,
        selected_row: 0,
        status_key: None,
    };

    // ── TUI + main loop ───────────────────────────────────────────────────────
    let mut tui = tui::Tui::new()?;
    let result = run(&mut state, &catalog, &store, &mut tui);
    tui.cleanup();
    result
}

#[cfg(feature = "tui")]
fn run(state: &mut AppState, catalog: &Catalog, store: &SettingsStore, tui: &mut tui::Tui) -> Result<()> {
    use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

    loop {
        tui.draw(state, catalog)?;

        if !event::poll(std::time::Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(k) = event::read()? else { continue };
        if k.kind == KeyEventKind::Release {
            continue;
        }

        // Escape or Ctrl+C always quit
        if k.code == KeyCode::Esc
            || (k.code == KeyCode::Char('c') && k.modifiers.contains(KeyModifiers::CONTROL))
        {
            break;
        }

        match k.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => break,
            KeyCode::Tab => {
                state.status_key = None;
                state.page = match state.page {
                    Page::Dashboard => {
                        // start editing from the current session copy
                        state.pending = state.session;
                        Page::Settings
                    }
                    Page::Settings => Page::Dashboard,
                };
            }
            code => match state.page {
                Page::Dashboard => handle_dashboard_key(state, code),
                Page::Settings  => handle_settings_key(state, store, code),
            },
        }
    }
    Ok(())
}

#[cfg(feature = "tui")]
fn handle_dashboard_key(state: &mut AppState, code: crossterm::event::KeyCode) {
    use crossterm::event::KeyCode;
    let last = data::RECENT_ASSESSMENTS.len() - 1;
    match code {
        KeyCode::Up   => state.selected_row = state.selected_row.saturating_sub(1),
        KeyCode::Down => state.selected_row = (state.selected_row + 1).min(last),
        _ => {}
    }
}

#[cfg(feature = "tui")]
fn handle_settings_key(state: &mut AppState, store: &SettingsStore, code: crossterm::event::KeyCode) {
    use crossterm::event::KeyCode;
    use settings::{Language, Theme};

    match code {
        KeyCode::Up   => state.field = state.field.prev(),
        KeyCode::Down => state.field = state.field.next(),
        KeyCode::Left | KeyCode::Right => {
            let dir: i32 = if code == KeyCode::Left { -1 } else { 1 };
            match state.field {
                SettingsField::Language => {
                    state.pending.language = cycle(&Language::ALL, state.pending.language, dir);
                }
                SettingsField::Theme => {
                    state.pending.theme = cycle(&Theme::ALL, state.pending.theme, dir);
                }
                SettingsField::Offline => {
                    state.pending.offline_mode = !state.pending.offline_mode;
                }
            }
            state.status_key = None;
        }
        KeyCode::Enter => match store.save(&state.pending) {
            Ok(()) => {
                state.session = state.pending;
                state.status_key = Some("settings_saved");
            }
            Err(err) => {
                log::warn!("saving settings failed: {err:#}");
                state.status_key = Some("settings_save_failed");
            }
        },
        KeyCode::Char('r') | KeyCode::Char('R') => match store.reset() {
            Ok(defaults) => {
                state.session = defaults;
                state.pending = defaults;
                state.status_key = Some("app_reset");
            }
            Err(err) => {
                log::warn!("resetting settings failed: {err:#}");
                state.status_key = Some("settings_save_failed");
            }
        },
        _ => {}
    }
}

#[cfg(feature = "tui")]
fn cycle<T: Copy + PartialEq>(all: &[T], current: T, dir: i32) -> T {
    let len = all.len() as i32;
    let i = all.iter().position(|&v| v == current).unwrap_or(0) as i32;
    all[(i + dir).rem_euclid(len) as usize]
}

// Headless build: print the localized overview once and exit.
#[cfg(not(feature = "tui"))]
fn run(state: &mut AppState, catalog: &Catalog, _store: &SettingsStore, _tui: &mut tui::Tui) -> Result<()> {
    let lang = state.session.language;
    println!("{} — {}", catalog.resolve("app_title", lang), catalog.resolve("system_overview", lang));
    for metric in &data::OVERVIEW {
        println!("  {:<40} {:>5}", catalog.resolve(metric.key, lang), metric.value);
    }
    let connectivity = if state.session.offline_mode { "status_offline" } else { "status_online" };
    println!("  {}", catalog.resolve(connectivity, lang));
    Ok(())
}
