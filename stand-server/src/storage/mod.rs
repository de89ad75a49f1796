//! Photo storage
//!
//! Path-addressed blob storage for gallery photos under
//! `work_dir/photos`. Uploads are validated, then re-encoded to JPEG
//! in two sizes:
//!
//! ```text
//! photos/{album}/{file}              full version, bounded to 1920px
//! photos/{album}/thumbnails/{file}   thumbnail, bounded to 400px
//! ```

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use image::imageops::FilterType;
use uuid::Uuid;

use crate::utils::AppError;

/// Maximum upload size (10MB)
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Accepted upload formats
pub const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Longest edge of the stored full version
const FULL_MAX_DIM: u32 = 1920;

/// Longest edge of the thumbnail
const THUMBNAIL_MAX_DIM: u32 = 400;

/// JPEG quality, full version
const FULL_JPEG_QUALITY: u8 = 85;

/// JPEG quality, thumbnail
const THUMBNAIL_JPEG_QUALITY: u8 = 70;

/// Result of storing one upload
#[derive(Debug, Clone)]
pub struct StoredPhoto {
    pub file_name: String,
    pub url: String,
    pub thumbnail_url: String,
}

/// Photo blob store rooted at `work_dir/photos`
#[derive(Debug, Clone)]
pub struct PhotoStore {
    root: PathBuf,
}

impl PhotoStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Validate an upload before decoding it: size cap and extension.
    pub fn validate(data: &[u8], original_name: &str) -> Result<(), AppError> {
        if data.is_empty() {
            return Err(AppError::validation("Empty file"));
        }
        if data.len() > MAX_FILE_SIZE {
            return Err(AppError::validation(format!(
                "File too large. Maximum size is {}MB",
                MAX_FILE_SIZE / 1024 / 1024
            )));
        }

        let ext = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        if !SUPPORTED_FORMATS.contains(&ext.as_str()) {
            return Err(AppError::validation(format!(
                "Unsupported file format '{}'. Supported: {}",
                ext,
                SUPPORTED_FORMATS.join(", ")
            )));
        }

        Ok(())
    }

    /// Decode, compress and write one photo plus its thumbnail.
    pub fn save(&self, album_key: &str, data: &[u8]) -> Result<StoredPhoto, AppError> {
        let img = image::load_from_memory(data)
            .map_err(|e| AppError::validation(format!("Invalid image: {}", e)))?;

        let file_name = format!("{}.jpg", Uuid::new_v4());

        let full = encode_jpeg(&bounded(&img, FULL_MAX_DIM), FULL_JPEG_QUALITY)?;
        let thumbnail = encode_jpeg(&bounded(&img, THUMBNAIL_MAX_DIM), THUMBNAIL_JPEG_QUALITY)?;

        let photo_path = self.photo_path(album_key, &file_name);
        let thumbnail_path = self.thumbnail_path(album_key, &file_name);

        write_file(&photo_path, &full)?;
        write_file(&thumbnail_path, &thumbnail)?;

        Ok(StoredPhoto {
            url: format!("/photos/{}/{}", album_key, file_name),
            thumbnail_url: format!("/photos/{}/thumbnails/{}", album_key, file_name),
            file_name,
        })
    }

    /// Remove a photo and its thumbnail. Already-missing files are
    /// fine; the metadata is the source of truth.
    pub fn delete(&self, album_key: &str, file_name: &str) {
        for path in [
            self.photo_path(album_key, file_name),
            self.thumbnail_path(album_key, file_name),
        ] {
            if let Err(e) = fs::remove_file(&path)
                && e.kind() != std::io::ErrorKind::NotFound
            {
                tracing::warn!("Failed to remove {}: {}", path.display(), e);
            }
        }
    }

    pub fn photo_path(&self, album_key: &str, file_name: &str) -> PathBuf {
        self.root.join(album_key).join(file_name)
    }

    pub fn thumbnail_path(&self, album_key: &str, file_name: &str) -> PathBuf {
        self.root.join(album_key).join("thumbnails").join(file_name)
    }
}

/// Shrink to fit within `max_dim`, preserving aspect ratio. Smaller
/// images pass through untouched.
fn bounded(img: &DynamicImage, max_dim: u32) -> DynamicImage {
    if img.width() <= max_dim && img.height() <= max_dim {
        img.clone()
    } else {
        img.resize(max_dim, max_dim, FilterType::Triangle)
    }
}

fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>, AppError> {
    let mut buffer = Vec::new();
    {
        let mut cursor = Cursor::new(&mut buffer);
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, quality);
        img.to_rgb8()
            .write_with_encoder(encoder)
            .map_err(|e| AppError::internal(format!("Failed to compress image: {}", e)))?;
    }
    Ok(buffer)
}

fn write_file(path: &Path, data: &[u8]) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AppError::internal(format!("Failed to create photo dir: {}", e)))?;
    }
    fs::write(path, data)
        .map_err(|e| AppError::internal(format!("Failed to write photo: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_png() -> Vec<u8> {
        let img = DynamicImage::new_rgb8(64, 48);
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)
            .unwrap();
        buffer
    }

    #[test]
    fn test_validate_rejects_unknown_extension() {
        let data = sample_png();
        assert!(PhotoStore::validate(&data, "receipt.png").is_ok());
        assert!(PhotoStore::validate(&data, "receipt.gif").is_err());
        assert!(PhotoStore::validate(&data, "receipt").is_err());
        assert!(PhotoStore::validate(&[], "receipt.png").is_err());
    }

    #[test]
    fn test_save_writes_photo_and_thumbnail() {
        let dir = tempfile::tempdir().unwrap();
        let store = PhotoStore::new(dir.path().to_path_buf());

        let stored = store.save("album1", &sample_png()).unwrap();
        assert!(stored.file_name.ends_with(".jpg"));
        assert!(store.photo_path("album1", &stored.file_name).exists());
        assert!(store.thumbnail_path("album1", &stored.file_name).exists());

        store.delete("album1", &stored.file_name);
        assert!(!store.photo_path("album1", &stored.file_name).exists());
        // Deleting again is a no-op
        store.delete("album1", &stored.file_name);
    }

    #[test]
    fn test_bounded_keeps_small_images() {
        let img = DynamicImage::new_rgb8(100, 50);
        let out = bounded(&img, 400);
        assert_eq!((out.width(), out.height()), (100, 50));

        let img = DynamicImage::new_rgb8(800, 400);
        let out = bounded(&img, 400);
        assert!(out.width() <= 400 && out.height() <= 400);
    }
}
