#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::rc::Rc;

use enum_assoc::Assoc;
use gpui::{
    App, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce, Rgba,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder, px,
};

use crate::{
    ElementIdExt, RgbaExt,
    platform::{ActivePlatform, PlatformStyle},
    theme::{ColorRole, ThemeExt, ThemeLayoutSizeKind, ThemeSpacingKind, ThemeTextSizeKind},
};

type OnPressFn = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Tertiary,
}

#[derive(Assoc, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[func(pub fn height(&self) -> ThemeLayoutSizeKind)]
#[func(pub fn padding(&self) -> ThemeSpacingKind)]
#[func(pub fn text_size(&self) -> ThemeTextSizeKind)]
pub enum ButtonSize {
    #[assoc(height = ThemeLayoutSizeKind::Sm)]
    #[assoc(padding = ThemeSpacingKind::Md)]
    #[assoc(text_size = ThemeTextSizeKind::Caption)]
    Sm,
    #[default]
    #[assoc(height = ThemeLayoutSizeKind::Md)]
    #[assoc(padding = ThemeSpacingKind::Lg)]
    #[assoc(text_size = ThemeTextSizeKind::Body)]
    Md,
    #[assoc(height = ThemeLayoutSizeKind::Lg)]
    #[assoc(padding = ThemeSpacingKind::Xl)]
    #[assoc(text_size = ThemeTextSizeKind::Body)]
    Lg,
}

/// Static interaction flags. Neither `Disabled` nor `Loading` accept presses.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    #[default]
    Default,
    Disabled,
    Loading,
}

#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    state: ButtonState,
    disabled: bool,
    on_press: Option<OnPressFn>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            label: SharedString::from("Button"),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            state: ButtonState::default(),
            disabled: false,
            on_press: None,
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = label.into();
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn state(mut self, state: ButtonState) -> Self {
        self.state = state;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_press(mut self, on_press: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_press = Some(Rc::new(on_press));
        self
    }

    /// Whether a user activation would reach `on_press`.
    pub fn is_enabled(&self) -> bool {
        !self.disabled && self.state == ButtonState::Default
    }

    /// Runs one activation. Returns whether `on_press` was invoked.
    pub fn press(&self, window: &mut Window, cx: &mut App) -> bool {
        self.activation().press(window, cx)
    }

    fn activation(&self) -> ButtonActivation {
        ButtonActivation {
            enabled: self.is_enabled(),
            on_press: self.on_press.clone(),
        }
    }
}

/// The press gate shared by [`Button::press`] and the rendered click handler.
#[derive(Clone)]
struct ButtonActivation {
    enabled: bool,
    on_press: Option<OnPressFn>,
}

impl ButtonActivation {
    fn press(&self, window: &mut Window, cx: &mut App) -> bool {
        match (&self.on_press, self.enabled) {
            (Some(on_press), true) => {
                (on_press)(window, cx);
                true
            }
            _ => false,
        }
    }
}

impl RenderOnce for Button {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = ButtonColors::resolve(self.variant, cx);
        let height = self.size.height().resolve(cx);
        let corner_radius = self.size.height().corner_radii().resolve(cx);
        let horizontal_padding = self.size.padding().resolve(cx);
        let text_size = self.size.text_size().resolve(cx);
        let font_weight = FontWeight(cx.get_theme().layout.text.default_font.weights.h6);
        let activation = self.activation();
        let is_enabled = activation.enabled;

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let is_hover = *is_hover_state.read(cx) && ActivePlatform::hover_feedback();

        let opacity = match (self.state, self.disabled) {
            (ButtonState::Loading, false) => 0.7,
            (ButtonState::Default, false) => 1.,
            _ => 0.45,
        };

        let label = match self.state {
            ButtonState::Loading => SharedString::from(format!("{}…", self.label)),
            _ => self.label.clone(),
        };

        div()
            .id(self.id.clone())
            .cursor(ActivePlatform::cursor(is_enabled))
            .flex()
            .items_center()
            .justify_center()
            .h(height)
            .min_h(ActivePlatform::min_hit_target())
            .px(horizontal_padding)
            .rounded(corner_radius)
            .border(px(1.))
            .border_color(colors.border)
            .bg(if is_hover {
                colors.background_hover
            } else {
                colors.background
            })
            .text_color(colors.text)
            .text_size(text_size)
            .font_weight(font_weight)
            .opacity(opacity)
            .child(label)
            .when(is_enabled, |this| {
                this.on_hover(move |hover, _window, cx| {
                    is_hover_state.update(cx, |this, _cx| *this = *hover);
                    cx.notify(is_hover_state.entity_id());
                })
            })
            .on_click(move |_event, window, cx| {
                window.prevent_default();
                cx.stop_propagation();
                activation.press(window, cx);
            })
    }
}

/// Colors for one [`ButtonVariant`] in the active mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonColors {
    pub background: Rgba,
    pub background_hover: Rgba,
    pub border: Rgba,
    pub text: Rgba,
}

impl ButtonColors {
    const HOVER_STRENGTH: f32 = 0.12;

    pub fn resolve(variant: ButtonVariant, cx: &App) -> Self {
        let text = ColorRole::Text.resolve(cx);

        match variant {
            ButtonVariant::Primary => {
                let accent = ColorRole::Accent.resolve(cx);
                let on_accent = ColorRole::OnAccent.resolve(cx);
                Self {
                    background: accent,
                    background_hover: accent.mix(on_accent, Self::HOVER_STRENGTH),
                    border: accent,
                    text: on_accent,
                }
            }

            ButtonVariant::Secondary => {
                let background = ColorRole::BackgroundStrong.resolve(cx);
                Self {
                    background,
                    background_hover: background.mix(text, Self::HOVER_STRENGTH),
                    border: ColorRole::Border.resolve(cx),
                    text,
                }
            }

            ButtonVariant::Tertiary => {
                let accent = ColorRole::Accent.resolve(cx);
                Self {
                    background: accent.alpha(0.),
                    background_hover: accent.alpha(Self::HOVER_STRENGTH),
                    border: accent.alpha(0.),
                    text: accent,
                }
            }
        }
    }
}
