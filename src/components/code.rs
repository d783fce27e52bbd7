use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, Pixels, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder, px,
};
use smallvec::SmallVec;

use crate::theme::{ColorRole, ThemeExt, ThemeLayoutCornerRadiiKind, ThemeSpacingKind};

pub const DEFAULT_CODE_LANGUAGE: &str = "javascript";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CodeVariant {
    /// Single line, no wrapping or numbering.
    Inline,
    /// Labelled, optionally line-numbered and vertically scrollable.
    #[default]
    Block,
}

/// One rendered line of a code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRow {
    /// 1-based, `None` when numbering is off.
    pub number: Option<usize>,
    pub text: SharedString,
}

/// Splits `source` into block rows. A trailing `\r` is stripped from each
/// line and empty lines become a single space so they keep their height.
pub fn code_rows(source: &str, show_line_numbers: bool) -> SmallVec<[CodeRow; 16]> {
    source
        .split('\n')
        .enumerate()
        .map(|(idx, line)| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            CodeRow {
                number: show_line_numbers.then_some(idx + 1),
                text: if line.is_empty() {
                    SharedString::new_static(" ")
                } else {
                    SharedString::from(line.to_string())
                },
            }
        })
        .collect()
}

/// Collapses line breaks to spaces for inline display.
pub fn inline_text(source: &str) -> SharedString {
    SharedString::from(source.replace("\r\n", " ").replace(['\n', '\r'], " "))
}

#[derive(IntoElement)]
pub struct Code {
    id: ElementId,
    source: SharedString,
    variant: CodeVariant,
    language: SharedString,
    show_line_numbers: bool,
    max_height: Pixels,
}

impl Code {
    pub fn new(id: impl Into<ElementId>, source: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            variant: CodeVariant::default(),
            language: SharedString::new_static(DEFAULT_CODE_LANGUAGE),
            show_line_numbers: false,
            max_height: px(400.),
        }
    }

    pub fn variant(mut self, variant: CodeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn language(mut self, language: impl Into<SharedString>) -> Self {
        self.language = language.into();
        self
    }

    pub fn show_line_numbers(mut self, show_line_numbers: bool) -> Self {
        self.show_line_numbers = show_line_numbers;
        self
    }

    pub fn max_height(mut self, max_height: impl Into<Pixels>) -> Self {
        self.max_height = max_height.into();
        self
    }

    pub fn rows(&self) -> SmallVec<[CodeRow; 16]> {
        code_rows(&self.source, self.show_line_numbers)
    }

    fn render_inline(self, cx: &App) -> gpui::AnyElement {
        let mono_font = &cx.get_theme().layout.text.mono_font;

        div()
            .id(self.id)
            .flex_none()
            .px(ThemeSpacingKind::Xs.resolve(cx))
            .rounded(ThemeLayoutCornerRadiiKind::Sm.resolve(cx))
            .bg(ColorRole::CodeInlineBackground.resolve(cx))
            .text_color(ColorRole::CodeText.resolve(cx))
            .font_family(mono_font.family[0].clone())
            .text_size(mono_font.size)
            .whitespace_nowrap()
            .child(inline_text(&self.source))
            .into_any_element()
    }

    fn render_block(self, cx: &App) -> gpui::AnyElement {
        let mono_font = &cx.get_theme().layout.text.mono_font;
        let rows = self.rows();
        let gutter_width = rows.len().to_string().len();
        let line_number_color = ColorRole::CodeLineNumber.resolve(cx);
        let padding = ThemeSpacingKind::Md.resolve(cx);

        div()
            .flex()
            .flex_col()
            .w_full()
            .rounded(ThemeLayoutCornerRadiiKind::Md.resolve(cx))
            .border(px(1.))
            .border_color(ColorRole::CodeBorder.resolve(cx))
            .bg(ColorRole::CodeBackground.resolve(cx))
            .font_family(mono_font.family[0].clone())
            .line_height(mono_font.line_height)
            .child(
                div()
                    .px(padding)
                    .pt(ThemeSpacingKind::Sm.resolve(cx))
                    .text_size(mono_font.label_size)
                    .text_color(ColorRole::CodeLabel.resolve(cx))
                    .child(self.language.clone()),
            )
            .child(
                div()
                    .id(self.id)
                    .flex()
                    .flex_col()
                    .max_h(self.max_height)
                    .overflow_y_scroll()
                    .p(padding)
                    .text_size(mono_font.size)
                    .text_color(ColorRole::CodeText.resolve(cx))
                    .children(rows.into_iter().map(|row| {
                        div()
                            .flex()
                            .flex_row()
                            .whitespace_nowrap()
                            .when_some(row.number, |this, number| {
                                this.child(
                                    div()
                                        .flex_none()
                                        .pr(padding)
                                        .text_color(line_number_color)
                                        .child(format!("{number:>gutter_width$}")),
                                )
                            })
                            .child(row.text)
                    })),
            )
            .into_any_element()
    }
}

impl RenderOnce for Code {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        match self.variant {
            CodeVariant::Inline => self.render_inline(cx),
            CodeVariant::Block => self.render_block(cx),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn test_three_lines_number_one_to_three() {
        let rows = code_rows("let a = 1;\nlet b = 2;\nlet c = a + b;", true);

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows.iter().map(|row| row.number).collect::<Vec<_>>(),
            vec![Some(1), Some(2), Some(3)]
        );
        assert_eq!(rows[2].text, "let c = a + b;");
    }

    #[test]
    fn test_numbering_off_leaves_rows_unnumbered() {
        let rows = code_rows("a\nb", false);
        assert!(rows.iter().all(|row| row.number.is_none()));
    }

    #[test]
    fn test_random_line_counts_number_sequentially() {
        let mut rng = rand::rng();

        for _ in 0..32 {
            let line_count = rng.random_range(1..64);
            let source = (0..line_count)
                .map(|_| "x".repeat(rng.random_range(0..12)))
                .collect::<Vec<_>>()
                .join("\n");

            let rows = code_rows(&source, true);
            assert_eq!(rows.len(), line_count);
            for (idx, row) in rows.iter().enumerate() {
                assert_eq!(row.number, Some(idx + 1));
                assert!(!row.text.is_empty(), "rows always carry text");
            }
        }
    }

    #[test]
    fn test_empty_lines_become_a_space() {
        let rows = code_rows("a\n\nb\n", false);
        let text: Vec<_> = rows.iter().map(|row| row.text.to_string()).collect();
        assert_eq!(text, vec!["a", " ", "b", " "]);
    }

    #[test]
    fn test_carriage_returns_are_stripped() {
        let rows = code_rows("one\r\ntwo\r\n\r", true);
        let text: Vec<_> = rows.iter().map(|row| row.text.to_string()).collect();
        assert_eq!(text, vec!["one", "two", " "]);
    }

    #[test]
    fn test_inline_collapses_newlines() {
        assert_eq!(inline_text("a\nb\r\nc"), "a b c");
        assert_eq!(inline_text("plain"), "plain");
    }

    #[test]
    fn test_code_defaults() {
        let code = Code::new("code", "a\nb\nc");
        assert_eq!(code.variant, CodeVariant::Block);
        assert_eq!(code.language, DEFAULT_CODE_LANGUAGE);
        assert_eq!(code.max_height, px(400.));
        assert!(!code.show_line_numbers);
        assert!(code.rows().iter().all(|row| row.number.is_none()));
        assert_eq!(code.rows().len(), 3);

        let code = code.language("rust").max_height(px(120.));
        assert_eq!(code.language, "rust");
        assert_eq!(code.max_height, px(120.));
    }
}
