use gpui::{AnyElement, StyleRefinement, div, prelude::*};
use smallvec::SmallVec;

/// Fills its parent and centers its children on both axes.
#[derive(IntoElement)]
pub struct ScreenCenter {
    children: SmallVec<[AnyElement; 2]>,
    style: StyleRefinement,
}

impl ScreenCenter {
    pub fn new() -> Self {
        Self {
            children: SmallVec::new(),
            style: StyleRefinement::default()
                .size_full()
                .flex()
                .flex_col()
                .items_center()
                .justify_center(),
        }
    }
}

impl Default for ScreenCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for ScreenCenter {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        div()
            .map(|mut this| {
                this.style().refine(&self.style);
                this
            })
            .children(self.children)
    }
}

impl ParentElement for ScreenCenter {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl Styled for ScreenCenter {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

pub fn screen_center() -> ScreenCenter {
    ScreenCenter::new()
}
