use crate::errors::{CarouselError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const BUNDLED_EVENTS: &str = include_str!("../assets/flagship_events.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDescription {
    pub overview: String,
    #[serde(default)]
    pub rules: Map<String, Value>,
}

impl EventDescription {
    /// Rules flattened to `(heading, text)` pairs in file order.
    pub fn rule_lines(&self) -> Vec<(String, String)> {
        self.rules
            .iter()
            .map(|(key, value)| (key.clone(), describe_value(value)))
            .collect()
    }
}

fn describe_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| format!("• {}", describe_value(item)))
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{}: {}", k, describe_value(v)))
            .collect::<Vec<_>>()
            .join("\n"),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagshipEvent {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub about: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prize: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<u32>,
    #[serde(default)]
    pub contact: Vec<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<EventDescription>,
}

impl FlagshipEvent {
    /// Short "prize · date · fee" summary, omitting missing parts.
    pub fn highlights(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if let Some(prize) = &self.prize {
            parts.push(format!("🏆 {}", prize));
        }
        if let Some(date) = &self.date {
            parts.push(format!("📅 {}", date));
        }
        if let Some(fee) = self.fee {
            if fee == 0 {
                parts.push("Free entry".to_string());
            } else {
                parts.push(format!("Entry fee: {}", fee));
            }
        }
        parts
    }
}

/// Ordered, non-empty list of flagship events.
#[derive(Debug, Clone)]
pub struct EventCatalog {
    events: Vec<FlagshipEvent>,
    base_dir: Option<PathBuf>,
}

impl EventCatalog {
    pub fn from_json(text: &str, base_dir: Option<PathBuf>) -> Result<Self> {
        let events: Vec<FlagshipEvent> = serde_json::from_str(text)?;
        Self::from_events(events, base_dir)
    }

    pub fn from_events(events: Vec<FlagshipEvent>, base_dir: Option<PathBuf>) -> Result<Self> {
        if events.is_empty() {
            return Err(CarouselError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for event in &events {
            if !seen.insert(event.id) {
                tracing::warn!(id = event.id, name = %event.name, "duplicate event id");
            }
        }

        Ok(Self { events, base_dir })
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CarouselError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let text = std::fs::read_to_string(path)?;
        let base_dir = path.parent().map(Path::to_path_buf);
        Self::from_json(&text, base_dir).map_err(|e| match e {
            CarouselError::JsonError { source } => CarouselError::EventDataError {
                path: path.to_path_buf(),
                message: source.to_string(),
            },
            other => other,
        })
    }

    /// Events compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_EVENTS, None)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FlagshipEvent> {
        self.events.get(index)
    }

    pub fn events(&self) -> &[FlagshipEvent] {
        &self.events
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Image path for `event`, resolved against the data file's directory.
    pub fn image_path(&self, event: &FlagshipEvent) -> Option<PathBuf> {
        let img = event.img.as_deref()?.trim();
        if img.is_empty() {
            return None;
        }

        // Web-style absolute paths ("/images/x.png") are relative to the data root
        let relative = img.trim_start_matches('/');
        let path = Path::new(img);
        if path.is_absolute() && path.exists() {
            return Some(path.to_path_buf());
        }
        Some(match &self.base_dir {
            Some(dir) => dir.join(relative),
            None => PathBuf::from(relative),
        })
    }
}
