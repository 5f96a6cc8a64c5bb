use super::{FlagshipApp, LoaderMessage};
use crate::image_loader;
use eframe::egui;
use image::DynamicImage;
use std::thread;

impl FlagshipApp {
    /// Start decoding artwork for every event that has some.
    pub fn request_all_images(&mut self) {
        let with_artwork: Vec<usize> = self
            .catalog
            .events()
            .iter()
            .enumerate()
            .filter(|(_, event)| event.img.is_some())
            .map(|(index, _)| index)
            .collect();
        for index in with_artwork {
            self.request_image(index);
        }
    }

    pub fn request_image(&mut self, index: usize) {
        if self.textures.contains_key(&index)
            || self.failed_images.contains(&index)
            || self.image_requests.contains(&index)
        {
            return;
        }

        let Some(path) = self
            .catalog
            .get(index)
            .and_then(|event| self.catalog.image_path(event))
        else {
            return;
        };
        self.image_requests.insert(index);

        let tx = self.loader_tx.clone();
        let ctx = self.ctx.clone();

        thread::spawn(move || {
            match image_loader::load_event_image(&path) {
                Ok(image) => {
                    let _ = tx.send(LoaderMessage::ImageLoaded(index, image));
                }
                Err(e) => {
                    let _ = tx.send(LoaderMessage::LoadError(index, e.to_string()));
                }
            }
            if let Some(ctx) = ctx {
                ctx.request_repaint();
            }
        });
    }

    pub fn process_loader_messages(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.loader_rx.try_recv() {
            match msg {
                LoaderMessage::ImageLoaded(index, image) => {
                    self.handle_image_loaded(index, image, ctx);
                }
                LoaderMessage::LoadError(index, error) => {
                    tracing::warn!("Event image {} unavailable: {}", index, error);
                    self.image_requests.remove(&index);
                    self.failed_images.insert(index);
                }
            }
        }
    }

    fn handle_image_loaded(&mut self, index: usize, image: DynamicImage, ctx: &egui::Context) {
        let size = [image.width() as usize, image.height() as usize];
        let rgba = image.to_rgba8();
        let pixels = rgba.as_flat_samples();

        let texture = ctx.load_texture(
            format!("event_{}", index),
            egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice()),
            egui::TextureOptions::LINEAR,
        );

        self.image_requests.remove(&index);
        self.textures.insert(index, texture);
    }

    pub fn is_image_loading(&self, index: usize) -> bool {
        self.image_requests.contains(&index)
    }
}
