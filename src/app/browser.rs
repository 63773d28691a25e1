//! Glue between the pure UI state machines and the browser: intersection
//! observers, local storage, and the `<body>` scroll lock.

use std::sync::Arc;

use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_preferred_dark, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

use crate::modal::ScrollLock;
use crate::reveal::{RevealError, RevealState, VisibilityObserver, REVEAL_THRESHOLD};
#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;
#[cfg(not(feature = "hydrate"))]
use crate::theme::MemoryThemeStore;
use crate::theme::{Theme, ThemeController};
#[cfg(feature = "hydrate")]
use crate::theme::{ThemeError, ThemeStore};

/// An `IntersectionObserver` already started by `leptos-use`; observing only
/// checks it exists, unobserving stops it for good.
#[derive(Clone)]
struct IntersectionWatch {
    supported: Signal<bool>,
    stop: Arc<dyn Fn() + Send + Sync>,
}

impl VisibilityObserver for IntersectionWatch {
    fn observe(&mut self) -> Result<(), RevealError> {
        if self.supported.get_untracked() {
            Ok(())
        } else {
            Err(RevealError::ObserverUnavailable)
        }
    }

    fn unobserve(&mut self) {
        (self.stop)();
    }
}

/// Flips to `true` the first time at least [`REVEAL_THRESHOLD`] of `target`
/// is on screen, and stays there. Server renders start unrevealed so hydration
/// lines up with the client; [`use_hydrated`] keeps that content visible until
/// the client is running.
pub fn use_reveal(target: NodeRef<html::Section>) -> Signal<bool> {
    let state = RwSignal::new(RevealState::new());
    let watch = StoredValue::new(None::<IntersectionWatch>);

    let UseIntersectionObserverReturn {
        is_supported, stop, ..
    } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let Some(ratio) = entries
                .iter()
                .map(|e| e.intersection_ratio())
                .reduce(f64::max)
            else {
                return;
            };
            watch.update_value(|w| {
                if let Some(w) = w.as_mut() {
                    state.update(|s| {
                        s.on_visibility(ratio, w);
                    });
                }
            });
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );
    watch.set_value(Some(IntersectionWatch {
        supported: is_supported,
        stop: Arc::new(stop),
    }));

    Effect::watch(
        || (),
        move |_, _, _| {
            watch.update_value(|w| {
                if let Some(w) = w.as_mut() {
                    state.update(|s| s.attach(w));
                }
            });
        },
        true,
    );

    on_cleanup(move || {
        watch.try_update_value(|w| {
            if let Some(w) = w.as_mut() {
                state.try_update(|s| s.detach(w));
            }
        });
    });

    Signal::derive(move || state.with(RevealState::is_revealed))
}

/// `false` while rendering on the server, `true` once the client has hydrated.
/// Gates the `hydrated:` variant that hides not-yet-revealed content.
pub fn use_hydrated() -> Signal<bool> {
    let hydrated = RwSignal::new(false);
    Effect::new(move |_| hydrated.set(true));
    hydrated.into()
}

/// Whether `<body>` may scroll. Set while a modal is open.
#[derive(Debug, Clone, Copy)]
pub struct BodyScroll(RwSignal<bool>);

impl ScrollLock for BodyScroll {
    fn lock(&mut self) {
        self.0.set(true);
    }

    fn unlock(&mut self) {
        self.0.set(false);
    }
}

pub fn provide_body_scroll() -> Signal<bool> {
    let locked = RwSignal::new(false);
    provide_context(BodyScroll(locked));
    locked.into()
}

pub fn use_body_scroll() -> BodyScroll {
    expect_context::<BodyScroll>()
}

#[cfg(feature = "hydrate")]
struct LocalThemeStore {
    stored: Signal<Option<Theme>>,
    set_stored: WriteSignal<Option<Theme>>,
    failed: RwSignal<bool>,
}

#[cfg(feature = "hydrate")]
impl LocalThemeStore {
    fn new() -> Self {
        let failed = RwSignal::new(false);
        let (stored, set_stored, _) =
            use_local_storage_with_options::<Option<Theme>, JsonSerdeWasmCodec>(
                THEME_STORAGE_KEY,
                UseStorageOptions::default().on_error(move |_| failed.set(true)),
            );
        Self {
            stored,
            set_stored,
            failed,
        }
    }

    fn check(&self) -> Result<(), ThemeError> {
        if self.failed.get_untracked() {
            Err(ThemeError::StorageUnavailable(
                "localStorage rejected the request".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[cfg(feature = "hydrate")]
impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeError> {
        self.check()?;
        Ok(self.stored.get_untracked())
    }

    fn save(&mut self, theme: Theme) -> Result<(), ThemeError> {
        self.check()?;
        self.set_stored.set(Some(theme));
        self.check()
    }
}

/// Page-wide handle on the theme, shared through context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: ReadSignal<Theme>,
    controller: StoredValue<ThemeController, LocalStorage>,
}

impl ThemeContext {
    pub fn theme(&self) -> ReadSignal<Theme> {
        self.theme
    }

    pub fn toggle(&self) {
        self.controller.update_value(|c| {
            c.toggle();
        });
    }
}

pub fn provide_theme() -> ReadSignal<Theme> {
    let prefers_dark = use_preferred_dark();

    #[cfg(feature = "hydrate")]
    let store = LocalThemeStore::new();
    #[cfg(feature = "hydrate")]
    let stored = store.stored;
    #[cfg(not(feature = "hydrate"))]
    let store = MemoryThemeStore::default();

    let mut controller = ThemeController::init(store, prefers_dark.get_untracked());
    let (theme, set_theme) = signal(controller.theme());
    controller.subscribe(move |t| set_theme.set(t));
    let controller = StoredValue::new_local(controller);

    // storage and media queries only answer once we are in the browser
    Effect::new(move |_| {
        let dark = prefers_dark.get();
        #[cfg(feature = "hydrate")]
        stored.track();
        controller.update_value(|c| {
            c.restore();
            c.follow_system(dark);
        });
    });

    provide_context(ThemeContext { theme, controller });
    theme
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
