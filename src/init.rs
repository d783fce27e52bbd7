use gpui::{App, Window};

use crate::theme::{Theme, ThemeExt};

/// Installs the bundled design tokens unless the app already set some.
pub fn init(cx: &mut App) {
    if cx.try_get_theme().is_err() {
        init_with_theme(cx, Theme::builtin());
    }
}

/// Installs `theme` as the design-token table, replacing any existing one.
pub fn init_with_theme(cx: &mut App, theme: impl AsRef<Theme>) {
    let theme = theme.as_ref();
    log::debug!("installing theme \"{}\"", theme.name);
    cx.set_theme(theme);
}

pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(cx.get_theme().layout.text.base_size);
}
