pub mod components;

pub mod platform;

pub mod views;

/// Design tokens, color roles and the theme store.
pub mod theme {
    pub use gpui_mosaic_theme::*;
}

mod utils;
pub use utils::{ElementIdExt, RgbaExt};

mod init;
pub use init::*;
