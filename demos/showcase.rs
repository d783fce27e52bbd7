use anyhow::Context as _;
use gpui::{
    App, AppContext, Application, Bounds, Context, TitlebarOptions, Window, WindowBounds,
    WindowOptions, div, point, prelude::*, px, size,
};

use gpui_mosaic::{
    components::{
        Button, ButtonSize, ButtonState, ButtonVariant, Code, CodeVariant, Switch, ThemeSwitch,
        Typography, TypographyVariant, screen_center,
    },
    theme::{ColorRole, Theme},
    views::UiProvider,
};

const SAMPLE: &str = "function greet(name) {\n  return `Hello, ${name}!`;\n}\n\nconsole.log(greet(\"mosaic\"));";

struct Showcase {
    presses: usize,
    notifications: bool,
}

impl Render for Showcase {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        screen_center()
            .gap(px(16.))
            .p(px(48.))
            .child(Typography::new("Mosaic").variant(TypographyVariant::H1))
            .child(
                Typography::new(format!("Pressed {} times", self.presses))
                    .color(ColorRole::Subtle.resolve(cx)),
            )
            .child(
                div()
                    .flex()
                    .gap(px(8.))
                    .child(
                        Button::new("primary")
                            .label("Press me")
                            .on_press({
                                let this = cx.weak_entity();
                                move |_window, cx| {
                                    let _ = this.update(cx, |this, cx| {
                                        this.presses += 1;
                                        cx.notify();
                                    });
                                }
                            }),
                    )
                    .child(
                        Button::new("secondary")
                            .label("Secondary")
                            .variant(ButtonVariant::Secondary)
                            .size(ButtonSize::Sm),
                    )
                    .child(
                        Button::new("loading")
                            .label("Saving")
                            .variant(ButtonVariant::Tertiary)
                            .state(ButtonState::Loading),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(8.))
                    .child(
                        Switch::new("notifications")
                            .checked(self.notifications)
                            .on_checked_change(cx.listener(|this, checked: &bool, _window, cx| {
                                this.notifications = *checked;
                                cx.notify();
                            })),
                    )
                    .child(Typography::new("Notifications")),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(8.))
                    .child(ThemeSwitch::new("theme"))
                    .child(Typography::new("Dark mode")),
            )
            .child(Code::new("inline", "npm run dev").variant(CodeVariant::Inline))
            .child(Code::new("block", SAMPLE).show_line_numbers(true))
    }
}

fn main() -> anyhow::Result<()> {
    let theme = match std::env::args().nth(1) {
        Some(path) => Theme::from_path(&path).with_context(|| format!("loading theme {path}"))?,
        None => Theme::builtin().clone(),
    };

    Application::new().run(move |cx: &mut App| {
        gpui_mosaic::init_with_theme(cx, &theme);

        let bounds = Bounds::centered(None, size(px(620.), px(800.)), cx);

        let opened = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    appears_transparent: true,
                    traffic_light_position: Some(point(px(10.), px(10.))),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |window, cx| {
                let showcase = cx.new(|_cx| Showcase {
                    presses: 0,
                    notifications: false,
                });
                cx.new(|cx| UiProvider::new(showcase, window, cx))
            },
        );

        if let Err(err) = opened {
            log::error!("failed to open window: {err:?}");
            cx.quit();
            return;
        }

        cx.activate(true);
    });

    Ok(())
}
