use gpui::{App, Entity};

use crate::{GlobalThemeStore, Theme, ThemeColors, ThemeError, ThemeMode, ThemeStore};

/// Extension trait for reaching the design tokens and the active theme store.
///
/// The `try_` variants report misconfiguration as a [`ThemeError`]; the
/// others treat it as a contract violation and panic with the same message.
pub trait ThemeExt {
    /// Replaces the design-token table.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    fn try_get_theme(&self) -> Result<&Theme, ThemeError>;

    /// Gets an immutable reference to the design-token table.
    #[track_caller]
    fn get_theme(&self) -> &Theme {
        self.try_get_theme().unwrap_or_else(|err| panic!("{err}"))
    }

    fn try_theme_store(&self) -> Result<Entity<ThemeStore>, ThemeError>;

    #[track_caller]
    fn theme_store(&self) -> Entity<ThemeStore> {
        self.try_theme_store().unwrap_or_else(|err| panic!("{err}"))
    }

    /// The mode of the active store.
    fn theme_mode(&self) -> ThemeMode;

    /// The palette matching [`ThemeExt::theme_mode`].
    fn theme_colors(&self) -> &ThemeColors;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        self.set_global::<Theme>(theme.as_ref().clone())
    }

    fn try_get_theme(&self) -> Result<&Theme, ThemeError> {
        self.try_global::<Theme>().ok_or(ThemeError::MissingTokens)
    }

    fn try_theme_store(&self) -> Result<Entity<ThemeStore>, ThemeError> {
        self.try_global::<GlobalThemeStore>()
            .map(|store| store.0.clone())
            .ok_or(ThemeError::MissingProvider)
    }

    fn theme_mode(&self) -> ThemeMode {
        let Some(store) = self.try_global::<GlobalThemeStore>() else {
            panic!("{}", ThemeError::MissingProvider);
        };
        store.0.read(self).mode()
    }

    fn theme_colors(&self) -> &ThemeColors {
        let mode = self.theme_mode();
        self.get_theme().colors(mode)
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{AppContext, TestAppContext};

    #[gpui::test]
    fn test_set_and_get_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            assert!(matches!(cx.try_get_theme(), Err(ThemeError::MissingTokens)));

            cx.set_theme(Theme::builtin());
            let theme = cx.get_theme();
            assert!(!theme.name.is_empty(), "Theme should have a name");
            assert_eq!(theme.name, Theme::builtin().name, "Theme names should match");
        });
    }

    #[gpui::test]
    fn test_store_outside_provider_is_a_configuration_error(cx: &mut TestAppContext) {
        cx.update(|cx| {
            assert!(matches!(
                cx.try_theme_store(),
                Err(ThemeError::MissingProvider)
            ));
        });
    }

    #[gpui::test]
    #[should_panic(expected = "UiProvider")]
    fn test_theme_mode_outside_provider_panics(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::builtin());
            cx.theme_mode();
        });
    }

    #[gpui::test]
    #[should_panic(expected = "UiProvider")]
    fn test_theme_store_outside_provider_panics(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.theme_store();
        });
    }

    #[gpui::test]
    fn test_colors_track_store_mode(cx: &mut TestAppContext) {
        let store = cx.new(|_cx| ThemeStore::new(ThemeMode::Light));

        cx.update(|cx| {
            cx.set_theme(Theme::builtin());
            cx.set_global(GlobalThemeStore(store.clone()));

            assert_eq!(cx.theme_mode(), ThemeMode::Light);
            assert_eq!(
                cx.theme_colors().background,
                Theme::builtin().colors(ThemeMode::Light).background
            );
        });

        store.update(cx, |store, cx| store.set_mode(ThemeMode::Dark, cx));

        cx.update(|cx| {
            assert_eq!(cx.theme_mode(), ThemeMode::Dark);
            assert_eq!(
                cx.theme_colors().background,
                Theme::builtin().colors(ThemeMode::Dark).background
            );
        });
    }
}
