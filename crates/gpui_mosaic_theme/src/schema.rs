use std::{fs, path::Path, sync::LazyLock};

use gpui::{AbsoluteLength, DefiniteLength, Global, Pixels, Rgba, SharedString};
use serde::Deserialize;
use smallvec::SmallVec;

use crate::{
    ThemeError, ThemeMode,
    deserializers::{de_abs_length, de_def_length, de_pixels, de_string_or_non_empty_list},
};

/// The token schema version this crate understands.
pub const THEME_SCHEMA_VERSION: u32 = 1;

pub(crate) const DEFAULT_THEME_SOURCE: &str = include_str!("../themes/default.json");

static DEFAULT_THEME: LazyLock<Theme> = LazyLock::new(|| {
    Theme::from_string(DEFAULT_THEME_SOURCE).expect("the embedded default theme should be valid")
});

/// The design-token table: layout scales plus one color palette per mode.
#[derive(Debug, Deserialize, Clone)]
pub struct Theme {
    pub name: SharedString,
    pub version: u32,
    pub layout: ThemeLayout,
    pub palettes: ThemePalettes,
}

impl Theme {
    /// The token table bundled with the crate.
    pub fn builtin() -> &'static Theme {
        &DEFAULT_THEME
    }

    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, ThemeError> {
        let theme: Theme = serde_json::from_str(str.as_ref())?;

        if theme.version != THEME_SCHEMA_VERSION {
            return Err(ThemeError::UnsupportedVersion {
                name: theme.name.to_string(),
                found: theme.version,
                expected: THEME_SCHEMA_VERSION,
            });
        }

        Ok(theme)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Theme, ThemeError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let theme = Self::from_string(source)?;
        log::info!("loaded theme \"{}\" from {}", theme.name, path.display());

        Ok(theme)
    }

    pub fn colors(&self, mode: ThemeMode) -> &ThemeColors {
        self.palettes.get(mode)
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Global for Theme {}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeLayout {
    pub text: ThemeText,
    pub spacing: ThemeSpacing,
    pub corner_radii: ThemeCornerRadii,
    pub size: ThemeSize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeText {
    #[serde(deserialize_with = "de_pixels")]
    pub base_size: Pixels,
    pub default_font: ThemeFont,
    pub mono_font: ThemeMonoFont,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeFont {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub family: SmallVec<[SharedString; 2]>,
    #[serde(deserialize_with = "de_def_length")]
    pub line_height: DefiniteLength,
    pub sizes: ThemeTextSizes,
    pub weights: ThemeTextWeights,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeMonoFont {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub family: SmallVec<[SharedString; 2]>,
    #[serde(deserialize_with = "de_def_length")]
    pub line_height: DefiniteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub size: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub label_size: AbsoluteLength,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeTextSizes {
    #[serde(deserialize_with = "de_abs_length")]
    pub h1: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub h2: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub h3: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub h4: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub h5: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub h6: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub body: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub caption: AbsoluteLength,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeTextWeights {
    pub h1: f32,
    pub h2: f32,
    pub h3: f32,
    pub h4: f32,
    pub h5: f32,
    pub h6: f32,
    pub body: f32,
    pub caption: f32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeSpacing {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xs: Pixels,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeCornerRadii {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeSize {
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

/// One palette per [`ThemeMode`]; both are required.
#[derive(Debug, Deserialize, Clone)]
pub struct ThemePalettes {
    pub light: ThemeColors,
    pub dark: ThemeColors,
}

impl ThemePalettes {
    pub fn get(&self, mode: ThemeMode) -> &ThemeColors {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

/// Concrete colors for every [`crate::ColorRole`].
#[derive(Debug, Deserialize, Clone)]
pub struct ThemeColors {
    pub background: Rgba,
    pub background_strong: Rgba,
    pub text: Rgba,
    pub subtle: Rgba,
    pub accent: Rgba,
    pub accent_light: Rgba,
    pub on_accent: Rgba,
    pub border: Rgba,
    pub error: Rgba,
    pub success: Rgba,
    pub warning: Rgba,
    pub info: Rgba,
    pub code_background: Rgba,
    pub code_border: Rgba,
    pub code_text: Rgba,
    pub code_line_number: Rgba,
    pub code_label: Rgba,
    pub code_inline_background: Rgba,
}
