#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{
    App, FontWeight, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Styled, Window,
    div,
};

use crate::theme::{ColorRole, ThemeTextSizeKind};

/// Semantic role of a run of text, as exposed to accessibility tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    /// Heading level `1..=6`.
    Heading(u8),
    Body,
}

#[derive(Assoc, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[func(pub fn heading_level(&self) -> Option<u8>)]
#[func(pub fn size_kind(&self) -> ThemeTextSizeKind)]
pub enum TypographyVariant {
    #[assoc(heading_level = 1)]
    #[assoc(size_kind = ThemeTextSizeKind::H1)]
    H1,
    #[assoc(heading_level = 2)]
    #[assoc(size_kind = ThemeTextSizeKind::H2)]
    H2,
    #[assoc(heading_level = 3)]
    #[assoc(size_kind = ThemeTextSizeKind::H3)]
    H3,
    #[assoc(heading_level = 4)]
    #[assoc(size_kind = ThemeTextSizeKind::H4)]
    H4,
    #[assoc(heading_level = 5)]
    #[assoc(size_kind = ThemeTextSizeKind::H5)]
    H5,
    #[assoc(heading_level = 6)]
    #[assoc(size_kind = ThemeTextSizeKind::H6)]
    H6,
    #[default]
    #[assoc(size_kind = ThemeTextSizeKind::Body)]
    Body,
}

impl TypographyVariant {
    pub fn role(&self) -> TextRole {
        match self.heading_level() {
            Some(level) => TextRole::Heading(level),
            None => TextRole::Body,
        }
    }
}

#[derive(IntoElement)]
pub struct Typography {
    text: SharedString,
    variant: TypographyVariant,
    color: Option<Rgba>,
}

impl Typography {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            variant: TypographyVariant::default(),
            color: None,
        }
    }

    pub fn variant(mut self, variant: TypographyVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Overrides the `text` role color.
    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn role(&self) -> TextRole {
        self.variant.role()
    }
}

impl RenderOnce for Typography {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let size_kind = self.variant.size_kind();
        let color = self.color.unwrap_or_else(|| ColorRole::Text.resolve(cx));

        div()
            .text_size(size_kind.resolve(cx))
            .font_weight(FontWeight(size_kind.weight(cx)))
            .text_color(color)
            .child(self.text)
    }
}
