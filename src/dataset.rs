//! Reference image loading.
//!
//! A dataset is a flat directory of PNG files. Files that cannot be read or
//! that are not natively RGBA8 are skipped with a warning; only a directory
//! that cannot be enumerated at all fails the load.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::image::UncompressedImage;

/// Load the ordered dataset from a directory.
///
/// Images are returned in directory-enumeration order. Non-PNG files are
/// ignored; unreadable PNGs and PNGs in any layout other than 8-bit RGBA are
/// skipped with a logged warning. An empty directory yields an empty dataset,
/// which is a valid (if degenerate) benchmark input.
///
/// # Errors
///
/// Returns [`Error::Dataset`] if the directory itself cannot be enumerated.
pub fn load_dataset(dir: &Path) -> Result<Vec<UncompressedImage>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::Dataset {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut images = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::Dataset {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_png = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|s| s.eq_ignore_ascii_case("png"));
        if !is_png {
            continue;
        }

        if let Some(image) = load_png_rgba8(&path) {
            images.push(image);
        }
    }

    debug!(count = images.len(), dir = %dir.display(), "dataset loaded");
    Ok(images)
}

/// Load a single PNG, accepting only the native RGBA8 layout.
fn load_png_rgba8(path: &Path) -> Option<UncompressedImage> {
    let decoded = match image::open(path) {
        Ok(img) => img,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load image, skipping");
            return None;
        }
    };

    match decoded {
        image::DynamicImage::ImageRgba8(buf) => {
            let (width, height) = (buf.width() as usize, buf.height() as usize);
            Some(UncompressedImage::new_rgba8(width, height, buf.into_raw()))
        }
        other => {
            warn!(
                path = %path.display(),
                layout = ?other.color(),
                "image has unsupported pixel layout, skipping"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn write_rgba_png(dir: &Path, name: &str, width: u32, height: u32, pixel: [u8; 4]) {
        let img = RgbaImage::from_pixel(width, height, Rgba(pixel));
        img.save(dir.join(name)).unwrap();
    }

    #[test]
    fn test_load_dataset_rgba_only() {
        let dir = tempfile::tempdir().unwrap();
        write_rgba_png(dir.path(), "a.png", 4, 4, [255, 0, 0, 255]);
        write_rgba_png(dir.path(), "b.png", 8, 2, [0, 255, 0, 255]);

        // RGB without alpha decodes as ImageRgb8 and must be skipped.
        let rgb = RgbImage::from_pixel(4, 4, Rgb([1, 2, 3]));
        rgb.save(dir.path().join("rgb.png")).unwrap();

        // Non-PNG files are ignored entirely.
        std::fs::write(dir.path().join("notes.txt"), b"not an image").unwrap();
        // Unreadable PNG is skipped with a warning.
        std::fs::write(dir.path().join("broken.png"), b"not a png").unwrap();

        let images = load_dataset(dir.path()).unwrap();
        assert_eq!(images.len(), 2);
        for img in &images {
            assert_eq!(img.bytes.len(), img.width * img.height * 4);
        }
    }

    #[test]
    fn test_load_dataset_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let images = load_dataset(dir.path()).unwrap();
        assert!(images.is_empty());
    }

    #[test]
    fn test_load_dataset_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(matches!(load_dataset(&missing), Err(Error::Dataset { .. })));
    }
}
