use crate::carousel::Carousel;
use crate::errors::Result;
use crate::events::EventCatalog;
use crate::settings::Settings;

use eframe::egui::{self, TextureHandle};
use image::DynamicImage;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Instant;

pub enum LoaderMessage {
    ImageLoaded(usize, DynamicImage),
    LoadError(usize, String),
}

/// Command line options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchOptions {
    pub events_file: Option<PathBuf>,
    pub debug: bool,
    /// Flags we did not recognise, reported once logging is up.
    pub unknown: Vec<String>,
}

impl LaunchOptions {
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        for arg in args {
            match arg.as_str() {
                "-d" | "--debug" => options.debug = true,
                flag if flag.starts_with('-') => options.unknown.push(arg),
                _ if options.events_file.is_none() => options.events_file = Some(PathBuf::from(arg)),
                _ => options.unknown.push(arg),
            }
        }
        options
    }
}

pub struct FlagshipApp {
    // Settings
    pub settings: Settings,

    // Event data and looping position
    pub catalog: EventCatalog,
    pub carousel: Carousel,

    // Event artwork, keyed by event index
    pub textures: HashMap<usize, TextureHandle>,
    pub image_requests: HashSet<usize>,
    pub failed_images: HashSet<usize>,

    // Async loading
    pub loader_tx: Sender<LoaderMessage>,
    pub loader_rx: Receiver<LoaderMessage>,

    // Fullscreen
    pub is_fullscreen: bool,

    // Dialogs
    pub show_settings_dialog: bool,

    // Pending navigation actions, applied after input handling
    pub pending_navigate_next: bool,
    pub pending_navigate_prev: bool,
    pub pending_jump: Option<usize>,

    // Status message
    pub status_message: Option<(String, Instant)>,

    // Context for repaint requests
    pub ctx: Option<egui::Context>,
}

impl FlagshipApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        mut settings: Settings,
        options: LaunchOptions,
    ) -> Result<Self> {
        configure_style(&cc.egui_ctx);

        let (catalog, status) = resolve_catalog(&mut settings, options.events_file)?;

        let mut app = Self::with_catalog(settings, catalog, Some(cc.egui_ctx.clone()))?;
        if let Some(message) = status {
            app.set_status_message(message);
        }
        app.request_all_images();

        Ok(app)
    }

    /// Build the app around an already loaded catalog.
    pub fn with_catalog(
        settings: Settings,
        catalog: EventCatalog,
        ctx: Option<egui::Context>,
    ) -> Result<Self> {
        let carousel = Carousel::new(catalog.len(), settings.timing())?;
        let (tx, rx) = channel();

        Ok(Self {
            settings,
            catalog,
            carousel,
            textures: HashMap::new(),
            image_requests: HashSet::new(),
            failed_images: HashSet::new(),
            loader_tx: tx,
            loader_rx: rx,
            is_fullscreen: false,
            show_settings_dialog: false,
            pending_navigate_next: false,
            pending_navigate_prev: false,
            pending_jump: None,
            status_message: None,
            ctx,
        })
    }

    pub fn set_status_message(&mut self, msg: String) {
        self.status_message = Some((msg, Instant::now()));
    }

    pub fn events_source(&self) -> Option<&Path> {
        self.settings.last_events_file.as_deref()
    }
}

/// Load the requested events file, or the one used last time. Falls back to
/// the bundled catalog and returns a status line explaining why.
pub(crate) fn resolve_catalog(
    settings: &mut Settings,
    events_file: Option<PathBuf>,
) -> Result<(EventCatalog, Option<String>)> {
    let Some(path) = events_file.or_else(|| settings.last_events_file.clone()) else {
        return Ok((EventCatalog::bundled()?, None));
    };

    match EventCatalog::load(&path) {
        Ok(catalog) => {
            tracing::info!("Loaded {} events from {}", catalog.len(), path.display());
            settings.last_events_file = Some(path);
            Ok((catalog, None))
        }
        Err(e) => {
            tracing::error!("[{}] {}", e.error_code(), e);
            settings.last_events_file = None;
            let status = e.user_message().replace("\n\n", " ");
            Ok((EventCatalog::bundled()?, Some(status)))
        }
    }
}

fn configure_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.window_corner_radius = egui::CornerRadius::same(10);
    style.visuals.menu_corner_radius = egui::CornerRadius::same(6);

    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(4);
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(4);
    style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(4);

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);

    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_events_file_and_debug() {
        let options = LaunchOptions::from_args(args(&["--debug", "events.json"]));
        assert!(options.debug);
        assert_eq!(options.events_file, Some(PathBuf::from("events.json")));
        assert!(options.unknown.is_empty());
    }

    #[test]
    fn missing_events_file_falls_back_with_hint() {
        let mut settings = Settings {
            last_events_file: Some(PathBuf::from("/old/events.json")),
            ..Settings::default()
        };
        let (catalog, status) =
            resolve_catalog(&mut settings, Some(PathBuf::from("/nonexistent/events.json"))).unwrap();

        assert_eq!(catalog.len(), EventCatalog::bundled().unwrap().len());
        let status = status.unwrap();
        assert!(status.contains("/nonexistent/events.json"));
        assert!(status.contains("bundled events are shown instead"));
        assert!(!status.contains('\n'));
        assert_eq!(settings.last_events_file, None);
    }

    #[test]
    fn remembers_events_file_that_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, r#"[{"id": 1, "name": "Quiz", "category": "Literary", "about": "Buzzers."}]"#)
            .unwrap();

        let mut settings = Settings::default();
        let (catalog, status) = resolve_catalog(&mut settings, Some(path.clone())).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(status, None);
        assert_eq!(settings.last_events_file, Some(path));
    }

    #[test]
    fn collects_unknown_arguments() {
        let options = LaunchOptions::from_args(args(&["a.json", "--fast", "b.json"]));
        assert_eq!(options.events_file, Some(PathBuf::from("a.json")));
        assert_eq!(options.unknown, args(&["--fast", "b.json"]));
        assert!(!options.debug);
    }
}
