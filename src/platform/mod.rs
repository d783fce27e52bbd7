//! Platform-conditional styling.
//!
//! Components describe one logical interface and ask [`ActivePlatform`] for
//! the bits that differ between pointer-driven desktops and touch devices.
//! The implementation is picked at compile time.

use cfg_if::cfg_if;
use gpui::{CursorStyle, Pixels};

pub trait PlatformStyle {
    /// Cursor shown over an interactive element.
    fn cursor(enabled: bool) -> CursorStyle;

    /// Whether hover feedback is meaningful on this platform.
    fn hover_feedback() -> bool;

    /// Smallest hit target an interactive element should occupy.
    fn min_hit_target() -> Pixels;
}

cfg_if!(
    if #[cfg(any(target_os = "android", target_os = "ios"))] {
        mod touch;
        pub use touch::Touch as ActivePlatform;
    } else {
        mod pointer;
        pub use pointer::Pointer as ActivePlatform;
    }
);
