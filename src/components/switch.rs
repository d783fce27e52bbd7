use std::rc::Rc;

use gpui::{
    App, ElementId, Entity, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder, px,
};

use crate::{
    ElementIdExt, RgbaExt,
    platform::{ActivePlatform, PlatformStyle},
    theme::{ColorRole, ThemeLayoutSizeKind, ThemeSpacingKind},
};

type OnCheckedChangeFn = Rc<dyn Fn(&bool, &mut Window, &mut App) + 'static>;

/// A boolean toggle.
///
/// Controlled when [`Switch::checked`] is set: the caller owns the value and
/// must feed the new one back from `on_checked_change`. Otherwise the value
/// lives in keyed element state seeded by [`Switch::default_checked`].
#[derive(IntoElement)]
pub struct Switch {
    id: ElementId,
    checked: Option<bool>,
    default_checked: bool,
    disabled: bool,
    on_checked_change: Option<OnCheckedChangeFn>,
}

impl Switch {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: None,
            default_checked: false,
            disabled: false,
            on_checked_change: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn default_checked(mut self, default_checked: bool) -> Self {
        self.default_checked = default_checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_checked_change(
        mut self,
        on_checked_change: impl Fn(&bool, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_checked_change = Some(Rc::new(on_checked_change));
        self
    }

    pub fn is_controlled(&self) -> bool {
        self.checked.is_some()
    }

    /// Binds the switch to its uncontrolled `state`. Returns `None` when the
    /// switch is disabled, since nothing may toggle it.
    pub fn toggle(&self, state: Entity<bool>) -> Option<SwitchToggle> {
        if self.disabled {
            return None;
        }

        Some(SwitchToggle {
            controlled: self.checked,
            state,
            on_checked_change: self.on_checked_change.clone(),
        })
    }

    fn state(&self, window: &mut Window, cx: &mut App) -> Entity<bool> {
        let default_checked = self.default_checked;
        window.use_keyed_state(self.id.with_suffix("state:checked"), cx, move |_window, _cx| {
            default_checked
        })
    }
}

/// One user toggle of a [`Switch`].
#[derive(Clone)]
pub struct SwitchToggle {
    controlled: Option<bool>,
    state: Entity<bool>,
    on_checked_change: Option<OnCheckedChangeFn>,
}

impl SwitchToggle {
    pub fn is_checked(&self, cx: &App) -> bool {
        self.controlled.unwrap_or_else(|| *self.state.read(cx))
    }

    /// Flips the value and reports it to `on_checked_change`. Returns the new
    /// value.
    pub fn fire(&self, window: &mut Window, cx: &mut App) -> bool {
        let checked = !self.is_checked(cx);

        if self.controlled.is_none() {
            self.state.update(cx, |this, _cx| *this = checked);
            cx.notify(self.state.entity_id());
        }

        if let Some(on_checked_change) = &self.on_checked_change {
            (on_checked_change)(&checked, window, cx);
        }

        checked
    }
}

impl RenderOnce for Switch {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let height = ThemeLayoutSizeKind::Sm.resolve(cx);
        let padding = ThemeSpacingKind::Xs.resolve(cx);
        let thumb_size = height - padding * 2.;
        let width = thumb_size * 2. + padding * 2.;

        let state = self.state(window, cx);
        let checked = self.checked.unwrap_or_else(|| *state.read(cx));
        let toggle = self.toggle(state);
        let is_enabled = toggle.is_some();

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let is_hover = *is_hover_state.read(cx) && ActivePlatform::hover_feedback();

        let text_color = ColorRole::Text.resolve(cx);
        let track_color = if checked {
            ColorRole::Accent.resolve(cx)
        } else {
            ColorRole::Border.resolve(cx)
        };
        let thumb_color = if checked {
            ColorRole::OnAccent.resolve(cx)
        } else {
            ColorRole::Background.resolve(cx)
        };

        let thumb_offset = if checked {
            width - thumb_size - padding
        } else {
            padding
        };

        div()
            .id(self.id.clone())
            .cursor(ActivePlatform::cursor(is_enabled))
            .relative()
            .flex_none()
            .w(width)
            .h(height)
            .min_h(ActivePlatform::min_hit_target())
            .rounded(px(100.))
            .bg(if is_hover {
                track_color.mix(text_color, 0.08)
            } else {
                track_color
            })
            .when(!is_enabled, |this| this.opacity(0.45))
            .child(
                div()
                    .absolute()
                    .top(padding)
                    .left(thumb_offset)
                    .size(thumb_size)
                    .rounded(px(100.))
                    .bg(thumb_color),
            )
            .when_some(toggle, |this, toggle| {
                this.on_hover(move |hover, _window, cx| {
                    is_hover_state.update(cx, |this, _cx| *this = *hover);
                    cx.notify(is_hover_state.entity_id());
                })
                .on_click(move |_event, window, cx| {
                    window.prevent_default();
                    cx.stop_propagation();
                    toggle.fire(window, cx);
                })
            })
    }
}
