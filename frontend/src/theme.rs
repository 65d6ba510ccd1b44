//! Light/dark preference, persisted in local storage under one key.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::error::{DomError, ParseThemeError};
use crate::utils::dom;

pub const THEME_STORAGE_KEY: &str = "theme";
/// Class toggled on `<html>` for dark mode.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Chooses between the light and dark variant of a class list.
    pub fn pick<'a>(self, light: &'a str, dark: &'a str) -> &'a str {
        match self {
            Theme::Light => light,
            Theme::Dark => dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

pub trait ThemeStore {
    /// Raw stored value, if any.
    fn read_raw(&self) -> Result<Option<String>, DomError>;
    fn write(&self, theme: Theme) -> Result<(), DomError>;

    /// Stored theme. Values other than `light`/`dark` count as absent.
    fn read(&self) -> Result<Option<Theme>, DomError> {
        Ok(self.read_raw()?.and_then(|raw| match raw.parse() {
            Ok(theme) => Some(theme),
            Err(err) => {
                log::debug!("ignoring stored theme: {}", err);
                None
            }
        }))
    }
}

/// The browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn read_raw(&self) -> Result<Option<String>, DomError> {
        dom::local_storage()?
            .get_item(THEME_STORAGE_KEY)
            .map_err(DomError::js("reading theme"))
    }

    fn write(&self, theme: Theme) -> Result<(), DomError> {
        dom::local_storage()?
            .set_item(THEME_STORAGE_KEY, theme.as_str())
            .map_err(DomError::js("writing theme"))
    }
}

/// In-memory store, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryThemeStore {
    pub fn with_raw(raw: &str) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(raw.to_string()))),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn read_raw(&self) -> Result<Option<String>, DomError> {
        Ok(self.slot.borrow().clone())
    }

    fn write(&self, theme: Theme) -> Result<(), DomError> {
        *self.slot.borrow_mut() = Some(theme.as_str().to_string());
        Ok(())
    }
}

/// Theme to mount with: the stored one, else dark.
pub fn load<S: ThemeStore>(store: &S) -> Theme {
    match store.read() {
        Ok(theme) => theme.unwrap_or_default(),
        Err(err) => {
            log::warn!("theme preference unreadable, using default: {}", err);
            Theme::default()
        }
    }
}

pub fn persist<S: ThemeStore>(store: &S, theme: Theme) {
    if let Err(err) = store.write(theme) {
        log::warn!("could not save theme preference: {}", err);
    }
}

/// Sets or clears the dark class on the document root.
pub fn apply_to_document(theme: Theme) -> Result<(), DomError> {
    dom::root_element()?
        .class_list()
        .toggle_with_force(DARK_CLASS, theme.is_dark())
        .map(|_| ())
        .map_err(DomError::js("toggling dark class"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_dark_when_nothing_stored() {
        let store = MemoryThemeStore::default();
        assert_eq!(load(&store), Theme::Dark);
    }

    #[test]
    fn written_theme_is_read_back_by_a_fresh_mount() {
        let store = MemoryThemeStore::default();
        persist(&store, Theme::Light);

        let remounted = store.clone();
        assert_eq!(load(&remounted), Theme::Light);
        assert_eq!(remounted.read_raw().unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn unknown_stored_value_counts_as_absent() {
        let store = MemoryThemeStore::with_raw("sepia");
        assert_eq!(store.read().unwrap(), None);
        assert_eq!(load(&store), Theme::Dark);
    }

    #[test]
    fn toggle_and_parse() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(
            "Dark".parse::<Theme>(),
            Err(ParseThemeError("Dark".to_string()))
        );
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn pick_chooses_by_mode() {
        assert_eq!(Theme::Light.pick("text-slate", "text-white"), "text-slate");
        assert_eq!(Theme::Dark.pick("text-slate", "text-white"), "text-white");
    }
}
