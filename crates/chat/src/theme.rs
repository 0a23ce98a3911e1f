use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Two-valued presentation setting. Never affects chat data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Icon shown on the header toggle for the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleIcon {
    Sun,
    Moon,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Dark mode offers the sun (go light), light mode the moon (go dark).
    pub fn toggle_icon(self) -> ToggleIcon {
        match self {
            Self::Dark => ToggleIcon::Sun,
            Self::Light => ToggleIcon::Moon,
        }
    }

    /// Lenient parse: anything other than `dark` is light.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl Serialize for ThemeMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ThemeMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn double_toggle_is_identity() {
        for start in [ThemeMode::Light, ThemeMode::Dark] {
            let mut mode = start;
            mode.toggle();
            assert_ne!(mode, start);
            mode.toggle();
            assert_eq!(mode, start);
        }
    }

    #[test]
    fn icon_tracks_mode() {
        assert_eq!(ThemeMode::Light.toggle_icon(), ToggleIcon::Moon);
        assert_eq!(ThemeMode::Dark.toggle_icon(), ToggleIcon::Sun);
    }

    #[test]
    fn parse_is_lenient() {
        assert_eq!(ThemeMode::parse(" DARK "), ThemeMode::Dark);
        assert_eq!(ThemeMode::parse("light"), ThemeMode::Light);
        assert_eq!(ThemeMode::parse("solarized"), ThemeMode::Light);
    }
}
