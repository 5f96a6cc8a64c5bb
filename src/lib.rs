//! Flagship events showcase: a looping, auto-advancing carousel of festival
//! events rendered with egui.

pub mod app;
pub mod carousel;
pub mod errors;
pub mod events;
pub mod image_loader;
pub mod logging;
pub mod settings;
mod ui;

#[cfg(test)]
mod tests;
