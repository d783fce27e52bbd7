use gpui::{App, Context, Entity, EventEmitter, Global, Subscription, WindowAppearance};

use crate::ThemeMode;

/// Where the current [`ThemeMode`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeModeSource {
    /// Seeded from, or updated by, the OS color-scheme preference.
    System,
    /// Set explicitly through [`ThemeStore::set_mode`].
    Explicit,
}

/// Emitted by [`ThemeStore`] whenever the mode actually changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeModeChanged {
    pub previous: ThemeMode,
    pub current: ThemeMode,
}

/// Process-wide light/dark state.
///
/// Lives in an [`Entity`] owned by the `UiProvider`. Changes emit
/// [`ThemeModeChanged`] and notify observers within the same update, so
/// every subscriber has seen the new mode before the next frame is drawn.
pub struct ThemeStore {
    mode: ThemeMode,
    source: ThemeModeSource,
}

impl EventEmitter<ThemeModeChanged> for ThemeStore {}

impl ThemeStore {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            source: ThemeModeSource::Explicit,
        }
    }

    /// Seeds the store from the OS preference, defaulting to light when
    /// none is available.
    pub fn from_system(appearance: Option<WindowAppearance>) -> Self {
        Self {
            mode: ThemeMode::from_appearance(appearance),
            source: ThemeModeSource::System,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn source(&self) -> ThemeModeSource {
        self.source
    }

    pub fn set_mode(&mut self, mode: ThemeMode, cx: &mut Context<Self>) {
        self.apply(mode, ThemeModeSource::Explicit, cx);
    }

    /// Entry point for OS color-scheme notifications.
    pub fn system_appearance_changed(
        &mut self,
        appearance: Option<WindowAppearance>,
        cx: &mut Context<Self>,
    ) {
        self.apply(
            ThemeMode::from_appearance(appearance),
            ThemeModeSource::System,
            cx,
        );
    }

    /// Calls `listener` with the new mode after every change. Dropping the
    /// returned [`Subscription`] unsubscribes.
    pub fn subscribe(
        store: &Entity<ThemeStore>,
        cx: &mut App,
        mut listener: impl FnMut(ThemeMode, &mut App) + 'static,
    ) -> Subscription {
        cx.subscribe(store, move |_store, event: &ThemeModeChanged, cx| {
            listener(event.current, cx)
        })
    }

    fn apply(&mut self, mode: ThemeMode, source: ThemeModeSource, cx: &mut Context<Self>) {
        self.source = source;

        if self.mode == mode {
            return;
        }

        let previous = std::mem::replace(&mut self.mode, mode);
        log::debug!("theme mode changed from {previous:?} to {mode:?} ({source:?})");

        cx.emit(ThemeModeChanged {
            previous,
            current: mode,
        });
        cx.notify();
    }
}

/// The store registered by the active `UiProvider`.
pub struct GlobalThemeStore(pub Entity<ThemeStore>);

impl Global for GlobalThemeStore {}
