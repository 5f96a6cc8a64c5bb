use crate::carousel::{CarouselTiming, CubicBezier};
use crate::errors::{CarouselError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Appearance
    pub theme: Theme,
    pub accent_color: AccentColor,

    // Carousel behaviour
    /// Seconds between automatic advances; 0 turns auto-advance off.
    pub auto_advance_secs: f32,
    pub transition_secs: f32,
    pub settle_delay_ms: u64,
    pub pause_on_hover: bool,

    // Panels
    pub show_details: bool,
    pub show_statusbar: bool,

    // Window state
    pub window_size: (f32, f32),

    // Session
    pub last_events_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            accent_color: AccentColor::Red,

            auto_advance_secs: 5.0,
            transition_secs: 0.4,
            settle_delay_ms: 50,
            pause_on_hover: true,

            show_details: true,
            show_statusbar: true,

            window_size: (1280.0, 800.0),

            last_events_file: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
    Oled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccentColor {
    Red,
    Orange,
    Purple,
    Blue,
    Green,
}

impl AccentColor {
    pub fn to_color(self) -> egui::Color32 {
        match self {
            AccentColor::Red => egui::Color32::from_rgb(248, 113, 113),
            AccentColor::Orange => egui::Color32::from_rgb(251, 146, 60),
            AccentColor::Purple => egui::Color32::from_rgb(192, 132, 252),
            AccentColor::Blue => egui::Color32::from_rgb(96, 165, 250),
            AccentColor::Green => egui::Color32::from_rgb(74, 222, 128),
        }
    }

    /// Darker, half transparent shade for inactive indicators.
    pub fn muted(self) -> egui::Color32 {
        let (r, g, b) = match self {
            AccentColor::Red => (153, 27, 27),
            AccentColor::Orange => (154, 52, 18),
            AccentColor::Purple => (107, 33, 168),
            AccentColor::Blue => (30, 64, 175),
            AccentColor::Green => (22, 101, 52),
        };
        egui::Color32::from_rgba_unmultiplied(r, g, b, 128)
    }

    pub fn all() -> &'static [AccentColor] {
        &[
            AccentColor::Red,
            AccentColor::Orange,
            AccentColor::Purple,
            AccentColor::Blue,
            AccentColor::Green,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            AccentColor::Red => "Red",
            AccentColor::Orange => "Orange",
            AccentColor::Purple => "Purple",
            AccentColor::Blue => "Blue",
            AccentColor::Green => "Green",
        }
    }
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "flagship", "Flagship")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Loads user settings, falling back to defaults on any problem.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| CarouselError::SettingsError {
            message: format!("{}: {}", path.display(), e),
        })
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Err(e) = self.save_to(&path) {
                tracing::warn!("Failed to save settings: {}", e);
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Carousel timing with every value clamped to a usable range.
    pub fn timing(&self) -> CarouselTiming {
        let auto = if self.auto_advance_secs.is_finite() {
            self.auto_advance_secs.clamp(0.0, 60.0)
        } else {
            0.0
        };
        let transition = if self.transition_secs.is_finite() {
            self.transition_secs.clamp(0.05, 2.0)
        } else {
            0.4
        };

        CarouselTiming {
            auto_delay: secs_to_duration(auto),
            transition: secs_to_duration(transition),
            settle_delay: Duration::from_millis(self.settle_delay_ms.min(500)),
            easing: CubicBezier::SMOOTH,
        }
    }
}

// Rounded to whole milliseconds so 0.4 s is exactly 400 ms
fn secs_to_duration(secs: f32) -> Duration {
    Duration::from_millis((secs * 1000.0).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_carousel_constants() {
        let timing = Settings::default().timing();
        assert_eq!(timing, CarouselTiming::default());
    }

    #[test]
    fn timing_is_clamped() {
        let settings = Settings {
            auto_advance_secs: -3.0,
            transition_secs: f32::NAN,
            settle_delay_ms: 10_000,
            ..Settings::default()
        };
        let timing = settings.timing();
        assert_eq!(timing.auto_delay, Duration::ZERO);
        assert_eq!(timing.transition, Duration::from_millis(400));
        assert_eq!(timing.settle_delay, Duration::from_millis(500));
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings {
            accent_color: AccentColor::Blue,
            auto_advance_secs: 8.0,
            last_events_file: Some(PathBuf::from("/srv/fest/events.json")),
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.accent_color, AccentColor::Blue);
        assert_eq!(loaded.auto_advance_secs, 8.0);
        assert_eq!(loaded.last_events_file, settings.last_events_file);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "theme": "Light" }"#).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.theme, Theme::Light);
        assert_eq!(loaded.accent_color, AccentColor::Red);
        assert!(loaded.pause_on_hover);
    }

    #[test]
    fn invalid_file_is_a_settings_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert_eq!(err.error_code(), "SETTINGS_ERROR");
    }
}
