use std::collections::HashMap;

use crate::chart::Rgb;
use crate::error::Result;

/// Key the preference is stored under.
pub const STORAGE_KEY: &str = "colorScheme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Automatic,
    Light,
    Dark,
}

impl ColorScheme {
    pub const ALL: [Self; 3] = [Self::Automatic, Self::Light, Self::Dark];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Automatic => "light dark",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light dark" => Some(Self::Automatic),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Automatic => "Automatic",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Automatic => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::Automatic,
        }
    }

    pub const fn previous(self) -> Self {
        match self {
            Self::Automatic => Self::Dark,
            Self::Light => Self::Automatic,
            Self::Dark => Self::Light,
        }
    }

    /// Whether to paint dark, given what the platform prefers.
    pub const fn is_dark(self, platform_prefers_dark: bool) -> bool {
        match self {
            Self::Automatic => platform_prefers_dark,
            Self::Light => false,
            Self::Dark => true,
        }
    }

    pub const fn palette(self, platform_prefers_dark: bool) -> Palette {
        if self.is_dark(platform_prefers_dark) {
            DARK_PALETTE
        } else {
            LIGHT_PALETTE
        }
    }
}

/// Page colors of one painted scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Rgb,
    pub bg: Rgb,
    pub muted: Rgb,
    pub accent: Rgb,
    /// Highlight of the selected slice and legend entry.
    pub selected: Rgb,
}

pub const LIGHT_PALETTE: Palette = Palette {
    fg: Rgb(0x00, 0x00, 0x00),
    bg: Rgb(0xff, 0xff, 0xff),
    muted: Rgb(0x6b, 0x6b, 0x70),
    accent: Rgb(0x00, 0x00, 0xee),
    selected: Rgb(0xc2, 0x18, 0x5b),
};

pub const DARK_PALETTE: Palette = Palette {
    fg: Rgb(0xf4, 0xf4, 0xf5),
    bg: Rgb(0x18, 0x18, 0x1b),
    muted: Rgb(0xa1, 0xa1, 0xaa),
    accent: Rgb(0x22, 0xd3, 0xee),
    selected: Rgb(0xff, 0x5c, 0x9a),
};

/// Persistent string key/value storage, `localStorage` style.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stored scheme, if there is a readable and recognised one.
pub fn load_color_scheme<S: PreferenceStore + ?Sized>(store: &S) -> Option<ColorScheme> {
    let stored = match store.get(STORAGE_KEY) {
        Ok(stored) => stored?,
        Err(error) => {
            log::warn!("could not read {STORAGE_KEY}: {error}");
            return None;
        }
    };
    let scheme = ColorScheme::parse(&stored);
    if scheme.is_none() {
        log::warn!("ignoring unknown {STORAGE_KEY} value {stored:?}");
    }
    scheme
}

pub fn save_color_scheme<S: PreferenceStore + ?Sized>(store: &mut S, scheme: ColorScheme) {
    if let Err(error) = store.set(STORAGE_KEY, scheme.as_str()) {
        log::error!("could not save {STORAGE_KEY}: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Storage("quota".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage("quota".to_string()))
        }
    }

    #[test]
    fn storage_strings_round_trip() {
        for scheme in ColorScheme::ALL {
            assert_eq!(ColorScheme::parse(scheme.as_str()), Some(scheme));
        }
    }

    #[test]
    fn cycling_visits_every_scheme() {
        let mut scheme = ColorScheme::Automatic;
        for _ in 0..3 {
            scheme = scheme.next();
        }
        assert_eq!(scheme, ColorScheme::Automatic);
        assert_eq!(ColorScheme::Light.previous(), ColorScheme::Automatic);
    }

    #[test]
    fn saved_scheme_loads_back() {
        let mut store = MemoryStore::default();
        assert_eq!(load_color_scheme(&store), None);

        save_color_scheme(&mut store, ColorScheme::Dark);
        assert_eq!(store.get(STORAGE_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(load_color_scheme(&store), Some(ColorScheme::Dark));
    }

    #[test]
    fn unknown_stored_value_is_ignored() {
        let mut store = MemoryStore::default();
        store.set(STORAGE_KEY, "sepia").unwrap();
        assert_eq!(load_color_scheme(&store), None);
    }

    #[test]
    fn storage_failures_are_swallowed() {
        let mut store = BrokenStore;
        assert_eq!(load_color_scheme(&store), None);
        save_color_scheme(&mut store, ColorScheme::Light);
    }

    #[test]
    fn automatic_follows_platform() {
        assert!(ColorScheme::Automatic.is_dark(true));
        assert!(!ColorScheme::Automatic.is_dark(false));
        assert!(ColorScheme::Dark.is_dark(false));
    }

    #[test]
    fn palette_matches_painted_scheme() {
        assert_eq!(ColorScheme::Automatic.palette(true), DARK_PALETTE);
        assert_eq!(ColorScheme::Automatic.palette(false), LIGHT_PALETTE);
        assert_eq!(ColorScheme::Light.palette(true), LIGHT_PALETTE);
        assert_ne!(LIGHT_PALETTE.selected, DARK_PALETTE.selected);
    }
}
