use gpui::{
    AnyView, AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Subscription,
    Window, WindowAppearance, div,
};
use smallvec::SmallVec;

use crate::theme::{ColorRole, GlobalThemeStore, ThemeExt, ThemeStore};

/// The composition root of a window.
///
/// `UiProvider` wraps a child view, owns the [`ThemeStore`] for the
/// application and keeps it in sync with the OS color scheme. It paints the
/// themed background and default text style for everything beneath it.
///
/// # Example
///
/// ```ignore
/// cx.open_window(options, |window, cx| {
///     let content = cx.new(|_cx| MyView);
///     cx.new(|cx| UiProvider::new(content, window, cx))
/// });
/// ```
///
/// Only one provider should exist per application. Mounting another
/// replaces the active store.
pub struct UiProvider {
    view: AnyView,
    store: Entity<ThemeStore>,
    _subscriptions: SmallVec<[Subscription; 2]>,
}

impl UiProvider {
    /// Creates a provider around `view`, seeding the theme mode from the
    /// window's appearance.
    pub fn new(view: impl Into<AnyView>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        crate::init(cx);

        if cx.has_global::<GlobalThemeStore>() {
            log::warn!("a UiProvider is already mounted; replacing its theme store");
        }

        let store = cx.new(|_cx| ThemeStore::from_system(Some(window.appearance())));
        cx.set_global(GlobalThemeStore(store.clone()));
        log::debug!("mounted UiProvider in {:?} mode", store.read(cx).mode());

        let subscriptions = SmallVec::from_buf([
            cx.observe_window_appearance(window, |this, window, cx| {
                this.system_appearance_changed(Some(window.appearance()), cx);
            }),
            cx.observe(&store, |_this, _store, cx| cx.notify()),
        ]);

        Self {
            view: view.into(),
            store,
            _subscriptions: subscriptions,
        }
    }

    /// The theme store owned by this provider.
    pub fn store(&self) -> &Entity<ThemeStore> {
        &self.store
    }

    /// Forwards an OS color-scheme change to the store.
    pub fn system_appearance_changed(
        &mut self,
        appearance: Option<WindowAppearance>,
        cx: &mut Context<Self>,
    ) {
        self.store.update(cx, |store, cx| {
            store.system_appearance_changed(appearance, cx)
        });
    }
}

impl Render for UiProvider {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        crate::init_for_window(window, cx);

        let font = &cx.get_theme().layout.text.default_font;
        let font_family = font.family[0].clone();
        let text_size = font.sizes.body;
        let line_height = font.line_height;

        div()
            .size_full()
            .relative()
            .bg(ColorRole::Background.resolve(cx))
            .text_color(ColorRole::Text.resolve(cx))
            .font_family(font_family)
            .text_size(text_size)
            .line_height(line_height)
            .child(self.view.clone())
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::theme::{ThemeError, ThemeMode};
    use gpui::{TestAppContext, VisualTestContext, WindowHandle};

    struct TestView;

    impl Render for TestView {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            div().size_full().child("Test Content")
        }
    }

    fn open_provider(cx: &mut TestAppContext) -> WindowHandle<UiProvider> {
        cx.update(|cx| {
            cx.open_window(Default::default(), |window, cx| {
                let test_view = cx.new(|_cx| TestView);
                cx.new(|cx| UiProvider::new(test_view, window, cx))
            })
            .unwrap()
        })
    }

    #[gpui::test]
    fn test_provider_installs_store_and_tokens(cx: &mut TestAppContext) {
        cx.update(|cx| {
            assert!(matches!(
                cx.try_theme_store(),
                Err(ThemeError::MissingProvider)
            ));
        });

        let window = open_provider(cx);
        let provider = window.root(cx).unwrap();

        let expected = window
            .update(cx, |_provider, window, _cx| ThemeMode::from(window.appearance()))
            .unwrap();

        cx.update(|cx| {
            assert!(cx.try_get_theme().is_ok(), "Provider should install tokens");
            let store = cx.theme_store();
            assert_eq!(&store, provider.read(cx).store());
            assert_eq!(cx.theme_mode(), expected);
        });
    }

    #[gpui::test]
    fn test_os_change_after_mount_updates_and_notifies(cx: &mut TestAppContext) {
        let window = open_provider(cx);
        let provider = window.root(cx).unwrap();

        let store = provider.read_with(cx, |provider, _cx| provider.store().clone());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _subscription = cx.update(|cx| {
            let seen = seen.clone();
            ThemeStore::subscribe(&store, cx, move |mode, _cx| seen.borrow_mut().push(mode))
        });

        let initial = cx.update(|cx| cx.theme_mode());
        let (appearance, flipped) = match initial {
            ThemeMode::Light => (WindowAppearance::Dark, ThemeMode::Dark),
            ThemeMode::Dark => (WindowAppearance::Light, ThemeMode::Light),
        };

        provider.update(cx, |provider, cx| {
            provider.system_appearance_changed(Some(appearance), cx)
        });

        assert_eq!(cx.update(|cx| cx.theme_mode()), flipped);
        assert_eq!(*seen.borrow(), vec![flipped]);
    }

    #[gpui::test]
    fn test_unavailable_appearance_falls_back_to_light(cx: &mut TestAppContext) {
        let window = open_provider(cx);
        let provider = window.root(cx).unwrap();

        provider.update(cx, |provider, cx| {
            provider.system_appearance_changed(None, cx)
        });

        assert_eq!(cx.update(|cx| cx.theme_mode()), ThemeMode::Light);
    }

    #[gpui::test]
    fn test_provider_renders_in_window(cx: &mut TestAppContext) {
        let window = open_provider(cx);
        let mut cx = VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();
    }
}
