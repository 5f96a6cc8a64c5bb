use crate::errors::{CarouselError, Result};
use image::{DynamicImage, GenericImageView};
use std::path::Path;

/// Largest file we attempt to decode.
const MAX_FILE_BYTES: u64 = 50 * 1024 * 1024;

/// Cards never show artwork larger than this, so bigger images are downscaled.
pub const MAX_CARD_WIDTH: u32 = 1600;
pub const MAX_CARD_HEIGHT: u32 = 1000;

pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Decode an event image and shrink it to card size.
pub fn load_event_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(CarouselError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    if !is_supported_image(path) {
        return Err(CarouselError::ImageLoadError {
            path: path.to_path_buf(),
            message: "unsupported image format".to_string(),
        });
    }

    let file_size = std::fs::metadata(path)?.len();
    if file_size > MAX_FILE_BYTES {
        return Err(CarouselError::ImageLoadError {
            path: path.to_path_buf(),
            message: format!(
                "File too large: {}MB (max {}MB)",
                file_size / (1024 * 1024),
                MAX_FILE_BYTES / (1024 * 1024)
            ),
        });
    }

    let image = image::open(path).map_err(|e| CarouselError::ImageLoadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(fit_to_card(image))
}

fn fit_to_card(image: DynamicImage) -> DynamicImage {
    let (width, height) = image.dimensions();
    if width <= MAX_CARD_WIDTH && height <= MAX_CARD_HEIGHT {
        return image;
    }
    // Preserves aspect ratio
    image.thumbnail(MAX_CARD_WIDTH, MAX_CARD_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_reported() {
        let err = load_event_image(Path::new("/nonexistent/poster.png")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_NOT_FOUND");
        assert!(err.is_recoverable());
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poster.txt");
        std::fs::write(&path, "hello").unwrap();

        let err = load_event_image(&path).unwrap_err();
        assert_eq!(err.error_code(), "IMAGE_LOAD_ERROR");
    }

    #[test]
    fn large_images_are_downscaled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poster.png");
        image::RgbaImage::from_pixel(3200, 400, image::Rgba([200, 40, 40, 255]))
            .save(&path)
            .unwrap();

        let image = load_event_image(&path).unwrap();
        assert_eq!(image.dimensions(), (1600, 200));
    }

    #[test]
    fn small_images_are_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poster.PNG");
        image::RgbaImage::from_pixel(64, 32, image::Rgba([0, 0, 0, 255]))
            .save_with_format(&path, image::ImageFormat::Png)
            .unwrap();

        let image = load_event_image(&path).unwrap();
        assert_eq!(image.dimensions(), (64, 32));
    }
}
