mod button;
pub use button::*;

mod code;
pub use code::*;

mod screen_center;
pub use screen_center::*;

mod switch;
pub use switch::*;

mod theme_switch;
pub use theme_switch::*;

mod typography;
pub use typography::*;

#[cfg(all(test, feature = "test-support"))]
pub(crate) mod test_support {
    use gpui::{AnyView, AppContext, Modifiers, Render, TestAppContext, VisualTestContext, point};

    use crate::views::UiProvider;

    /// Mounts `view` under a [`UiProvider`] and returns a context for driving it.
    pub fn mount<V: Render>(
        cx: &mut TestAppContext,
        view: impl FnOnce() -> V + 'static,
    ) -> VisualTestContext {
        let window = cx.update(|cx| {
            cx.open_window(Default::default(), |window, cx| {
                let view: AnyView = cx.new(|_cx| view()).into();
                cx.new(|cx| UiProvider::new(view, window, cx))
            })
            .unwrap()
        });

        let mut vcx = VisualTestContext::from_window(window.into(), cx);
        vcx.run_until_parked();
        vcx
    }

    /// Clicks the middle of the window, where `screen_center` places its child.
    pub fn click_center(cx: &mut VisualTestContext) {
        let size = cx.update(|window, _cx| window.viewport_size());
        cx.simulate_click(point(size.width / 2., size.height / 2.), Modifiers::none());
        cx.run_until_parked();
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::{theme::ThemeMode, views::UiProvider};
    use gpui::{TestAppContext, VisualTestContext, div, prelude::*};

    struct GalleryView;

    impl Render for GalleryView {
        fn render(&mut self, _window: &mut gpui::Window, _cx: &mut Context<Self>) -> impl IntoElement {
            screen_center()
                .gap_4()
                .child(Typography::new("Heading").variant(TypographyVariant::H1))
                .child(Typography::new("Body copy"))
                .child(Button::new("button").label("Press"))
                .child(Switch::new("switch"))
                .child(ThemeSwitch::new("theme-switch"))
                .child(Code::new("inline", "let x = 1;").variant(CodeVariant::Inline))
                .child(
                    Code::new("block", "fn main() {\n\n    println!(\"hi\");\r\n}")
                        .show_line_numbers(true)
                        .language("rust"),
                )
                .child(div().child("plain"))
        }
    }

    #[gpui::test]
    fn test_every_component_renders_in_both_modes(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.open_window(Default::default(), |window, cx| {
                let view = cx.new(|_cx| GalleryView);
                cx.new(|cx| UiProvider::new(view, window, cx))
            })
            .unwrap()
        });
        let provider = window.root(cx).unwrap();

        let mut vcx = VisualTestContext::from_window(window.into(), cx);
        vcx.run_until_parked();

        for mode in ThemeMode::ALL {
            provider.update(&mut vcx, |provider, cx| {
                provider.store().update(cx, |store, cx| store.set_mode(mode, cx))
            });
            vcx.run_until_parked();
        }
    }
}
