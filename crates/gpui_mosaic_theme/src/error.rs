use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading design tokens or reaching theme state.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Theme state was read from outside of a `UiProvider` subtree.
    #[error(
        "theme state was accessed outside of a `UiProvider`; wrap the window's root view in `UiProvider::new`"
    )]
    MissingProvider,

    /// Design tokens were read before any token table was installed.
    #[error("design tokens were accessed before `gpui_mosaic::init` installed a theme")]
    MissingTokens,

    #[error("failed to parse theme: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read theme file \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("theme \"{name}\" uses token schema version {found}, expected {expected}")]
    UnsupportedVersion {
        name: String,
        found: u32,
        expected: u32,
    },
}
