use gpui::{CursorStyle, Pixels, px};

use super::PlatformStyle;

/// Mouse and trackpad driven desktops.
pub struct Pointer;

impl PlatformStyle for Pointer {
    fn cursor(enabled: bool) -> CursorStyle {
        if enabled {
            CursorStyle::PointingHand
        } else {
            CursorStyle::OperationNotAllowed
        }
    }

    fn hover_feedback() -> bool {
        true
    }

    fn min_hit_target() -> Pixels {
        px(0.)
    }
}
