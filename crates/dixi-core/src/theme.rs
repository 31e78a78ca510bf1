use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::codec::TextCodec;
use crate::preference::PreferenceStore;
use crate::storage::KeyValueStorage;

pub const THEME_KEY: &str = "dixi_theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn opposite(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme {other:?}")),
        }
    }
}

/// System color-scheme preference, `None` when the environment can't tell
pub trait ColorSchemeSignal: Send + Sync {
    fn prefers_dark(&self) -> Option<bool>;
}

impl ColorSchemeSignal for Option<bool> {
    fn prefers_dark(&self) -> Option<bool> {
        *self
    }
}

/// Terminal color-scheme detection.
///
/// An explicit preference wins; otherwise the background index of
/// `COLORFGBG` (`"fg;bg"`, set by rxvt, Konsole and friends) decides.
#[derive(Debug, Clone, Default)]
pub struct EnvColorScheme {
    explicit: Option<bool>,
    colorfgbg: Option<String>,
}

impl EnvColorScheme {
    pub fn new(explicit: Option<bool>, colorfgbg: Option<String>) -> Self {
        Self {
            explicit,
            colorfgbg,
        }
    }

    pub fn from_env(explicit: Option<bool>) -> Self {
        Self::new(explicit, std::env::var("COLORFGBG").ok())
    }
}

impl ColorSchemeSignal for EnvColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        if self.explicit.is_some() {
            return self.explicit;
        }

        let bg: u8 = self.colorfgbg.as_deref()?.rsplit(';').next()?.trim().parse().ok()?;
        // 7 and 9..=15 are the light half of the 16-color palette
        Some(!(bg == 7 || bg >= 9))
    }
}

/// The one document-wide visual effect a theme change drives
pub trait ThemeTarget: Send + Sync {
    fn apply(&self, theme: Theme);
}

/// Process-wide dark-mode flag read by the renderer
#[derive(Debug, Clone, Default)]
pub struct DarkModeFlag(Arc<AtomicBool>);

impl DarkModeFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dark(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl ThemeTarget for DarkModeFlag {
    fn apply(&self, theme: Theme) {
        self.0.store(theme.is_dark(), Ordering::SeqCst);
    }
}

/// Owner of the active theme.
///
/// Created once at startup and passed to whoever needs it. Every change is
/// persisted and applied to the target inside one critical section, so
/// storage and the visual flag never disagree from a caller's view.
pub struct ThemeStore {
    store: PreferenceStore<Theme, TextCodec>,
    current: Mutex<Theme>,
    target: Arc<dyn ThemeTarget>,
}

impl ThemeStore {
    /// Load the persisted theme, else the signal's preference, else light.
    /// The signal is consulted once, here.
    pub fn init(
        storage: Arc<dyn KeyValueStorage>,
        signal: &dyn ColorSchemeSignal,
        target: Arc<dyn ThemeTarget>,
    ) -> Self {
        let fallback = match signal.prefers_dark() {
            Some(true) => Theme::Dark,
            Some(false) | None => Theme::Light,
        };

        let store = PreferenceStore::new(storage, THEME_KEY, TextCodec, move || fallback);
        let initial = store.load();
        tracing::debug!("Initial theme: {}", initial);

        let theme_store = Self {
            store,
            current: Mutex::new(initial),
            target,
        };
        theme_store.set(initial);
        theme_store
    }

    pub fn current(&self) -> Theme {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set(&self, theme: Theme) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        self.store.save(&theme);
        self.target.apply(theme);
        *current = theme;
    }

    /// Flip the theme and return the new one
    pub fn toggle(&self) -> Theme {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        let next = current.opposite();
        self.store.save(&next);
        self.target.apply(next);
        *current = next;
        tracing::debug!("Theme toggled to {}", next);
        next
    }
}
