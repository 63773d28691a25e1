use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local storage key for the persisted choice.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
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

    /// Class set on `<html>`; Tailwind's `dark:` variants key off it.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("theme storage is unavailable: {0}")]
    StorageUnavailable(String),
}

pub trait ThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeError>;

    fn save(&mut self, theme: Theme) -> Result<(), ThemeError>;
}

/// Store that forgets everything on reload. Used while rendering on the server.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    saved: Option<Theme>,
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeError> {
        Ok(self.saved)
    }

    fn save(&mut self, theme: Theme) -> Result<(), ThemeError> {
        self.saved = Some(theme);
        Ok(())
    }
}

type Listener = Box<dyn Fn(Theme)>;

/// Owns the current theme for the lifetime of the page.
///
/// Every change goes through [`ThemeController::set`], which tells all
/// listeners before returning. If the store fails the controller keeps going
/// with an in-memory value for the rest of the session.
pub struct ThemeController {
    theme: Theme,
    store: Option<Box<dyn ThemeStore>>,
    listeners: Vec<Listener>,
    // set once the visitor picks a theme themselves this session
    chosen: bool,
}

impl ThemeController {
    pub fn init(store: impl ThemeStore + 'static, system_prefers_dark: bool) -> Self {
        let mut controller = Self {
            theme: Theme::from_preference(system_prefers_dark),
            store: Some(Box::new(store)),
            listeners: Vec::new(),
            chosen: false,
        };
        controller.restore();
        controller
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_persistent(&self) -> bool {
        self.store.is_some()
    }

    pub fn subscribe(&mut self, listener: impl Fn(Theme) + 'static) {
        listener(self.theme);
        self.listeners.push(Box::new(listener));
    }

    /// Applies a stored choice, if there is one. Called again once the page is
    /// hydrated since storage is only readable in the browser.
    pub fn restore(&mut self) {
        if let Some(theme) = self.stored_choice() {
            self.apply(theme);
        }
    }

    /// Tracks the system setting until the visitor picks a theme, either now or
    /// on an earlier visit.
    pub fn follow_system(&mut self, prefers_dark: bool) {
        if self.chosen || self.stored_choice().is_some() {
            return;
        }
        self.apply(Theme::from_preference(prefers_dark));
    }

    fn stored_choice(&mut self) -> Option<Theme> {
        let store = self.store.as_ref()?;
        match store.load() {
            Ok(choice) => choice,
            Err(e) => {
                log::warn!("{e}, theme will not persist");
                self.store = None;
                None
            }
        }
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.chosen = true;
        self.apply(theme);
        if let Some(store) = self.store.as_mut() {
            if let Err(e) = store.save(theme) {
                log::warn!("{e}, theme will not persist");
                self.store = None;
            }
        }
    }

    fn apply(&mut self, theme: Theme) {
        if self.theme == theme {
            return;
        }
        self.theme = theme;
        log::debug!("theme is now {}", theme.class_name());
        for listener in &self.listeners {
            listener(theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    struct BrokenStore {
        fail_load: bool,
    }

    impl ThemeStore for BrokenStore {
        fn load(&self) -> Result<Option<Theme>, ThemeError> {
            if self.fail_load {
                Err(ThemeError::StorageUnavailable("denied".to_string()))
            } else {
                Ok(None)
            }
        }

        fn save(&mut self, _theme: Theme) -> Result<(), ThemeError> {
            Err(ThemeError::StorageUnavailable("quota".to_string()))
        }
    }

    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<Option<Theme>>>);

    impl ThemeStore for SharedStore {
        fn load(&self) -> Result<Option<Theme>, ThemeError> {
            Ok(*self.0.borrow())
        }

        fn save(&mut self, theme: Theme) -> Result<(), ThemeError> {
            *self.0.borrow_mut() = Some(theme);
            Ok(())
        }
    }

    #[test]
    fn default_follows_system_preference() {
        let c = ThemeController::init(MemoryThemeStore::default(), true);
        assert_eq!(c.theme(), Theme::Dark);
        let c = ThemeController::init(MemoryThemeStore::default(), false);
        assert_eq!(c.theme(), Theme::Light);
    }

    #[test]
    fn stored_choice_beats_system_preference() {
        let store = SharedStore::default();
        *store.0.borrow_mut() = Some(Theme::Light);
        let c = ThemeController::init(store, true);
        assert_eq!(c.theme(), Theme::Light);
    }

    #[test]
    fn toggle_twice_round_trips_and_listeners_see_both() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut c = ThemeController::init(MemoryThemeStore::default(), false);
        {
            let seen = seen.clone();
            c.subscribe(move |t| seen.borrow_mut().push(t));
        }

        assert_eq!(c.toggle(), Theme::Dark);
        assert_eq!(c.toggle(), Theme::Light);
        assert_eq!(
            *seen.borrow(),
            vec![Theme::Light, Theme::Dark, Theme::Light]
        );
    }

    #[test]
    fn toggle_persists() {
        let store = SharedStore::default();
        let mut c = ThemeController::init(store.clone(), false);
        c.toggle();
        assert_eq!(*store.0.borrow(), Some(Theme::Dark));

        let reloaded = ThemeController::init(store, false);
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[test]
    fn failed_save_falls_back_to_session() {
        let mut c = ThemeController::init(BrokenStore { fail_load: false }, false);
        assert!(c.is_persistent());
        assert_eq!(c.toggle(), Theme::Dark);
        assert!(!c.is_persistent());
        assert_eq!(c.toggle(), Theme::Light);
    }

    #[test]
    fn failed_load_keeps_system_preference() {
        let c = ThemeController::init(BrokenStore { fail_load: true }, true);
        assert_eq!(c.theme(), Theme::Dark);
        assert!(!c.is_persistent());
    }

    #[test]
    fn follows_system_until_chosen() {
        let mut c = ThemeController::init(MemoryThemeStore::default(), false);
        c.follow_system(true);
        assert_eq!(c.theme(), Theme::Dark);

        c.toggle();
        c.follow_system(true);
        assert_eq!(c.theme(), Theme::Light);
    }

    #[test]
    fn stored_choice_outranks_system_changes() {
        let store = SharedStore::default();
        *store.0.borrow_mut() = Some(Theme::Dark);
        let mut c = ThemeController::init(store, false);
        c.follow_system(false);
        assert_eq!(c.theme(), Theme::Dark);
    }

    #[test]
    fn restore_picks_up_storage_that_answers_late() {
        let store = SharedStore::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut c = ThemeController::init(store.clone(), false);
        {
            let seen = seen.clone();
            c.subscribe(move |t| seen.borrow_mut().push(t));
        }

        *store.0.borrow_mut() = Some(Theme::Dark);
        c.restore();
        assert_eq!(c.theme(), Theme::Dark);
        assert_eq!(*seen.borrow(), vec![Theme::Light, Theme::Dark]);

        c.follow_system(false);
        assert_eq!(c.theme(), Theme::Dark);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"light\"").unwrap(),
            Theme::Light
        );
    }
}
