use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarouselError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read event data '{path}': {message}")]
    EventDataError { path: PathBuf, message: String },

    #[error("Event list is empty")]
    EmptyCatalog,

    #[error("Event index {index} is out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Failed to load image '{path}': {message}")]
    ImageLoadError { path: PathBuf, message: String },

    #[error("Settings error: {message}")]
    SettingsError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CarouselError>;

impl CarouselError {
    /// Returns true if this error is recoverable (user can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CarouselError::FileNotFound { .. }
                | CarouselError::ImageLoadError { .. }
                | CarouselError::IoError { .. }
                | CarouselError::IndexOutOfRange { .. }
        )
    }

    /// Returns a user-friendly error message with recovery suggestions
    pub fn user_message(&self) -> String {
        let base_message = self.to_string();
        let suggestion = match self {
            CarouselError::FileNotFound { .. } => {
                "Check the path to the events file. The bundled events are shown instead."
            }
            CarouselError::EventDataError { .. } | CarouselError::JsonError { .. } => {
                "The events file is not a valid JSON array of events. The bundled events are shown instead."
            }
            CarouselError::EmptyCatalog => {
                "Add at least one event to the events file. The bundled events are shown instead."
            }
            CarouselError::ImageLoadError { .. } => {
                "The event image may be missing or corrupted. A placeholder is shown instead."
            }
            CarouselError::SettingsError { .. } => "Settings were reset to their defaults.",
            CarouselError::IoError { .. } => "File system error occurred. Check permissions.",
            CarouselError::IndexOutOfRange { .. } => "An unexpected error occurred.",
        };

        format!("{}\n\n{}", base_message, suggestion)
    }

    /// Returns an error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CarouselError::FileNotFound { .. } => "FILE_NOT_FOUND",
            CarouselError::EventDataError { .. } => "EVENT_DATA_ERROR",
            CarouselError::EmptyCatalog => "EMPTY_CATALOG",
            CarouselError::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            CarouselError::ImageLoadError { .. } => "IMAGE_LOAD_ERROR",
            CarouselError::SettingsError { .. } => "SETTINGS_ERROR",
            CarouselError::IoError { .. } => "IO_ERROR",
            CarouselError::JsonError { .. } => "JSON_ERROR",
        }
    }
}
