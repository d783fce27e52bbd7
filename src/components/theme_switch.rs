use gpui::{App, ElementId, IntoElement, RenderOnce, Window};

use crate::{
    components::Switch,
    theme::{ThemeExt, ThemeMode},
};

/// A [`Switch`] bound to the active theme store: checked means dark.
#[derive(IntoElement)]
pub struct ThemeSwitch {
    id: ElementId,
    disabled: bool,
}

impl ThemeSwitch {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Writes a switch change to the store.
    pub fn apply(checked: bool, cx: &mut App) {
        let store = cx.theme_store();
        store.update(cx, |store, cx| store.set_mode(ThemeMode::from_dark(checked), cx));
    }
}

impl RenderOnce for ThemeSwitch {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        Switch::new(self.id)
            .checked(cx.theme_mode().is_dark())
            .disabled(self.disabled)
            .on_checked_change(|checked, _window, cx| Self::apply(*checked, cx))
    }
}
