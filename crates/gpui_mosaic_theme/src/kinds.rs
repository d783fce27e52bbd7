#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{App, Rgba};

use crate::{ThemeColors, ThemeExt};

/// Text scale steps that resolve to theme-defined sizes and weights.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::AbsoluteLength)]
#[func(pub fn weight(&self, cx: &App) -> f32)]
pub enum ThemeTextSizeKind {
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.h1)]
    #[assoc(weight = cx.get_theme().layout.text.default_font.weights.h1)]
    H1,
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.h2)]
    #[assoc(weight = cx.get_theme().layout.text.default_font.weights.h2)]
    H2,
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.h3)]
    #[assoc(weight = cx.get_theme().layout.text.default_font.weights.h3)]
    H3,
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.h4)]
    #[assoc(weight = cx.get_theme().layout.text.default_font.weights.h4)]
    H4,
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.h5)]
    #[assoc(weight = cx.get_theme().layout.text.default_font.weights.h5)]
    H5,
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.h6)]
    #[assoc(weight = cx.get_theme().layout.text.default_font.weights.h6)]
    H6,
    /// Standard body text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.body)]
    #[assoc(weight = cx.get_theme().layout.text.default_font.weights.body)]
    Body,
    /// Small caption or label text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.caption)]
    #[assoc(weight = cx.get_theme().layout.text.default_font.weights.caption)]
    Caption,
}

/// Component size steps that resolve to theme-defined pixel values.
///
/// Each size has a corresponding corner radius for consistent styling.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
#[func(pub fn corner_radii(&self) -> ThemeLayoutCornerRadiiKind)]
pub enum ThemeLayoutSizeKind {
    #[assoc(resolve = cx.get_theme().layout.size.xl)]
    #[assoc(corner_radii = ThemeLayoutCornerRadiiKind::Xl)]
    Xl,
    #[assoc(resolve = cx.get_theme().layout.size.lg)]
    #[assoc(corner_radii = ThemeLayoutCornerRadiiKind::Lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().layout.size.md)]
    #[assoc(corner_radii = ThemeLayoutCornerRadiiKind::Md)]
    Md,
    #[assoc(resolve = cx.get_theme().layout.size.sm)]
    #[assoc(corner_radii = ThemeLayoutCornerRadiiKind::Sm)]
    Sm,
}

/// Spacing scale steps used for padding and gaps.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeSpacingKind {
    #[assoc(resolve = cx.get_theme().layout.spacing.xl)]
    Xl,
    #[assoc(resolve = cx.get_theme().layout.spacing.lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().layout.spacing.md)]
    Md,
    #[assoc(resolve = cx.get_theme().layout.spacing.sm)]
    Sm,
    #[assoc(resolve = cx.get_theme().layout.spacing.xs)]
    Xs,
}

#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeLayoutCornerRadiiKind {
    #[assoc(resolve = cx.get_theme().layout.corner_radii.xl)]
    Xl,
    #[assoc(resolve = cx.get_theme().layout.corner_radii.lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().layout.corner_radii.md)]
    Md,
    #[assoc(resolve = cx.get_theme().layout.corner_radii.sm)]
    Sm,
}

/// Semantic color roles. Every role has a value in every palette.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn pick(&self, colors: &ThemeColors) -> Rgba)]
#[func(pub fn name(&self) -> &'static str)]
pub enum ColorRole {
    /// Base background for main surfaces.
    #[assoc(pick = colors.background)]
    #[assoc(name = "background")]
    Background,
    /// Raised or grouped surfaces.
    #[assoc(pick = colors.background_strong)]
    #[assoc(name = "background_strong")]
    BackgroundStrong,
    #[assoc(pick = colors.text)]
    #[assoc(name = "text")]
    Text,
    /// De-emphasized text and icons.
    #[assoc(pick = colors.subtle)]
    #[assoc(name = "subtle")]
    Subtle,
    #[assoc(pick = colors.accent)]
    #[assoc(name = "accent")]
    Accent,
    #[assoc(pick = colors.accent_light)]
    #[assoc(name = "accent_light")]
    AccentLight,
    /// Content drawn on top of `Accent`.
    #[assoc(pick = colors.on_accent)]
    #[assoc(name = "on_accent")]
    OnAccent,
    #[assoc(pick = colors.border)]
    #[assoc(name = "border")]
    Border,
    #[assoc(pick = colors.error)]
    #[assoc(name = "error")]
    Error,
    #[assoc(pick = colors.success)]
    #[assoc(name = "success")]
    Success,
    #[assoc(pick = colors.warning)]
    #[assoc(name = "warning")]
    Warning,
    #[assoc(pick = colors.info)]
    #[assoc(name = "info")]
    Info,
    #[assoc(pick = colors.code_background)]
    #[assoc(name = "code_background")]
    CodeBackground,
    #[assoc(pick = colors.code_border)]
    #[assoc(name = "code_border")]
    CodeBorder,
    #[assoc(pick = colors.code_text)]
    #[assoc(name = "code_text")]
    CodeText,
    #[assoc(pick = colors.code_line_number)]
    #[assoc(name = "code_line_number")]
    CodeLineNumber,
    #[assoc(pick = colors.code_label)]
    #[assoc(name = "code_label")]
    CodeLabel,
    #[assoc(pick = colors.code_inline_background)]
    #[assoc(name = "code_inline_background")]
    CodeInlineBackground,
}

impl ColorRole {
    pub const ALL: [ColorRole; 18] = [
        ColorRole::Background,
        ColorRole::BackgroundStrong,
        ColorRole::Text,
        ColorRole::Subtle,
        ColorRole::Accent,
        ColorRole::AccentLight,
        ColorRole::OnAccent,
        ColorRole::Border,
        ColorRole::Error,
        ColorRole::Success,
        ColorRole::Warning,
        ColorRole::Info,
        ColorRole::CodeBackground,
        ColorRole::CodeBorder,
        ColorRole::CodeText,
        ColorRole::CodeLineNumber,
        ColorRole::CodeLabel,
        ColorRole::CodeInlineBackground,
    ];

    /// Resolves the role against the palette of the active mode.
    pub fn resolve(&self, cx: &App) -> Rgba {
        self.pick(cx.theme_colors())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_role_names_are_unique() {
        let names: HashSet<_> = ColorRole::ALL.iter().map(|role| role.name()).collect();
        assert_eq!(names.len(), ColorRole::ALL.len());
    }

    #[test]
    fn test_layout_size_kind_corner_radii() {
        assert_eq!(
            ThemeLayoutSizeKind::Xl.corner_radii(),
            ThemeLayoutCornerRadiiKind::Xl
        );
        assert_eq!(
            ThemeLayoutSizeKind::Lg.corner_radii(),
            ThemeLayoutCornerRadiiKind::Lg
        );
        assert_eq!(
            ThemeLayoutSizeKind::Md.corner_radii(),
            ThemeLayoutCornerRadiiKind::Md
        );
        assert_eq!(
            ThemeLayoutSizeKind::Sm.corner_radii(),
            ThemeLayoutCornerRadiiKind::Sm
        );
    }
}

#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use super::*;
    use crate::{GlobalThemeStore, Theme, ThemeMode, ThemeStore};
    use gpui::{AppContext, TestAppContext};

    fn install(cx: &mut TestAppContext, mode: ThemeMode) {
        let store = cx.new(|_cx| ThemeStore::new(mode));
        cx.update(|cx| {
            cx.set_theme(Theme::builtin());
            cx.set_global(GlobalThemeStore(store));
        });
    }

    #[gpui::test]
    fn test_color_roles_follow_the_active_mode(cx: &mut TestAppContext) {
        install(cx, ThemeMode::Dark);

        cx.update(|cx| {
            let dark = Theme::builtin().colors(ThemeMode::Dark);
            for role in ColorRole::ALL {
                assert_eq!(role.resolve(cx), role.pick(dark), "{}", role.name());
            }
        });
    }

    #[gpui::test]
    fn test_text_sizes_grow_with_heading_level(cx: &mut TestAppContext) {
        install(cx, ThemeMode::Light);

        cx.update(|cx| {
            let rem = cx.get_theme().layout.text.base_size;
            let sizes = [
                ThemeTextSizeKind::H1,
                ThemeTextSizeKind::H2,
                ThemeTextSizeKind::H3,
                ThemeTextSizeKind::H4,
                ThemeTextSizeKind::H5,
                ThemeTextSizeKind::H6,
                ThemeTextSizeKind::Body,
                ThemeTextSizeKind::Caption,
            ]
            .map(|kind| kind.resolve(cx).to_pixels(rem));

            for pair in sizes.windows(2) {
                assert!(pair[0] >= pair[1], "text scale should not grow downward");
            }

            assert!(ThemeTextSizeKind::H1.weight(cx) >= ThemeTextSizeKind::Body.weight(cx));
        });
    }

    #[gpui::test]
    fn test_spacing_kinds_are_ordered(cx: &mut TestAppContext) {
        install(cx, ThemeMode::Light);

        cx.update(|cx| {
            let xs = ThemeSpacingKind::Xs.resolve(cx);
            let sm = ThemeSpacingKind::Sm.resolve(cx);
            let md = ThemeSpacingKind::Md.resolve(cx);
            let lg = ThemeSpacingKind::Lg.resolve(cx);
            let xl = ThemeSpacingKind::Xl.resolve(cx);

            assert!(xs <= sm, "Xs should be <= Sm");
            assert!(sm <= md, "Sm should be <= Md");
            assert!(md <= lg, "Md should be <= Lg");
            assert!(lg <= xl, "Lg should be <= Xl");
        });
    }
}
