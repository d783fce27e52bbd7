use gpui::{CursorStyle, Pixels, px};

use super::PlatformStyle;

/// Touch-first devices: no hover, larger hit targets.
pub struct Touch;

impl PlatformStyle for Touch {
    fn cursor(_enabled: bool) -> CursorStyle {
        CursorStyle::Arrow
    }

    fn hover_feedback() -> bool {
        false
    }

    fn min_hit_target() -> Pixels {
        px(44.)
    }
}
