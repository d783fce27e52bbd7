use gpui::WindowAppearance;
use serde::Deserialize;

/// The light/dark mode that selects which palette is active.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// Maps the OS appearance onto a mode, falling back to `Light` when the
    /// host can't report one.
    pub fn from_appearance(appearance: Option<WindowAppearance>) -> Self {
        appearance.map(Self::from).unwrap_or_default()
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl From<WindowAppearance> for ThemeMode {
    fn from(appearance: WindowAppearance) -> Self {
        match appearance {
            WindowAppearance::Light | WindowAppearance::VibrantLight => Self::Light,
            WindowAppearance::Dark | WindowAppearance::VibrantDark => Self::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appearance_mapping() {
        assert_eq!(ThemeMode::from(WindowAppearance::Light), ThemeMode::Light);
        assert_eq!(ThemeMode::from(WindowAppearance::VibrantLight), ThemeMode::Light);
        assert_eq!(ThemeMode::from(WindowAppearance::Dark), ThemeMode::Dark);
        assert_eq!(ThemeMode::from(WindowAppearance::VibrantDark), ThemeMode::Dark);
    }

    #[test]
    fn test_missing_appearance_defaults_to_light() {
        assert_eq!(ThemeMode::from_appearance(None), ThemeMode::Light);
        assert_eq!(
            ThemeMode::from_appearance(Some(WindowAppearance::Dark)),
            ThemeMode::Dark
        );
    }

    #[test]
    fn test_toggled() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert!(ThemeMode::from_dark(true).is_dark());
        assert!(!ThemeMode::from_dark(false).is_dark());
    }
}
