use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::Color;

// Centralized theme colors. Keep these as small helpers so widgets never
// hardcode RGB values inline.

pub const ACCENT_RGB: (u8, u8, u8) = (99, 102, 241);
pub const RISE_RGB: (u8, u8, u8) = (34, 197, 94);
pub const FALL_RGB: (u8, u8, u8) = (239, 68, 68);

/// Accent color for a news source region. Unrecognized regions fall back to
/// the default accent so a new catalog entry still renders.
pub fn news_region_accent(region: &str) -> (u8, u8, u8) {
    match region {
        "글로벌" => (96, 165, 250),
        "미국" => (249, 115, 22),
        "영국" => (168, 85, 247),
        "한국" => (34, 197, 94),
        "일본" => (250, 204, 21),
        "홍콩" => (20, 184, 166),
        "중국" => (239, 68, 68),
        _ => ACCENT_RGB,
    }
}

pub fn rgb_to_color(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub fn accent() -> Color {
    rgb_to_color(ACCENT_RGB)
}

pub fn rise() -> Color {
    rgb_to_color(RISE_RGB)
}

pub fn fall() -> Color {
    rgb_to_color(FALL_RGB)
}

// Nav bar
pub fn nav_bg(mode: ThemeMode) -> Color {
    match mode {
        ThemeMode::Dark => Color::Black,
        ThemeMode::Light => Color::White,
    }
}
pub fn nav_fg(mode: ThemeMode) -> Color {
    match mode {
        ThemeMode::Dark => Color::Gray,
        ThemeMode::Light => Color::DarkGray,
    }
}
pub fn nav_active_fg(_mode: ThemeMode) -> Color {
    accent()
}

// Window chrome
pub fn window_header_bg(focused: bool) -> Color {
    if focused { accent() } else { Color::DarkGray }
}
pub fn window_header_fg(_focused: bool) -> Color {
    Color::White
}
pub fn window_border(focused: bool) -> Color {
    if focused { accent() } else { Color::DarkGray }
}

// Menu preview popup
pub fn menu_bg() -> Color {
    Color::DarkGray
}
pub fn menu_fg() -> Color {
    Color::White
}

pub fn importance_color(high: bool) -> Color {
    if high { fall() } else { Color::Yellow }
}

/// Light/dark flag persisted between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => f.write_str("dark"),
            ThemeMode::Light => f.write_str("light"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            other => Err(ThemeStoreError::UnknownMode(other.to_owned())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeStoreError {
    #[error("failed to access theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown theme mode {0:?}")]
    UnknownMode(String),
}

/// Reads and writes the persisted theme flag as a single-word file.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform config directory, falling back to the
    /// working directory when none is available.
    pub fn default_location() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join("invest-desk").join("theme"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means the default mode; a malformed file is an error so
    /// the caller can decide whether to overwrite it.
    pub fn load(&self) -> Result<ThemeMode, ThemeStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => contents.parse(),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(ThemeMode::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, mode: ThemeMode) -> Result<(), ThemeStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, mode.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_accents_cover_catalog_regions() {
        assert_eq!(news_region_accent("한국"), (34, 197, 94));
        assert_eq!(news_region_accent("미국"), (249, 115, 22));
        assert_eq!(news_region_accent("화성"), ACCENT_RGB);
    }

    #[test]
    fn theme_mode_round_trips_through_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join("nested").join("theme"));
        assert_eq!(store.load().unwrap(), ThemeMode::Dark);
        store.save(ThemeMode::Light).unwrap();
        assert_eq!(store.load().unwrap(), ThemeMode::Light);
        store.save(ThemeMode::Light.toggled()).unwrap();
        assert_eq!(store.load().unwrap(), ThemeMode::Dark);
    }

    #[test]
    fn malformed_store_contents_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");
        std::fs::write(&path, "solarized").unwrap();
        let store = ThemeStore::new(&path);
        assert!(matches!(
            store.load(),
            Err(ThemeStoreError::UnknownMode(value)) if value == "solarized"
        ));
    }
}
