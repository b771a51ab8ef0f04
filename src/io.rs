//! Raster decode and encode through the `image` crate.

use crate::{Result, StipplerError};
use image::GrayImage;
use std::path::Path;

/// Decode any supported raster file and convert it to 8-bit luminance.
pub fn load_grayscale_image(path: impl AsRef<Path>) -> Result<GrayImage> {
    let path = path.as_ref();
    let image = image::open(path)
        .map_err(|source| StipplerError::Load { path: path.to_path_buf(), source })?
        .to_luma8();

    if image.width() == 0 || image.height() == 0 {
        return Err(StipplerError::EmptyImage { path: path.to_path_buf() });
    }
    Ok(image)
}

/// Encode a single-channel image; the format follows the file extension.
pub fn write_binary_image(path: impl AsRef<Path>, image: &GrayImage) -> Result<()> {
    let path = path.as_ref();
    image
        .save(path)
        .map_err(|source| StipplerError::Write { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, RgbImage};
    use tempfile::tempdir;

    #[test]
    fn png_round_trip_keeps_pixels() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("dots.png");
        let image = GrayImage::from_fn(7, 5, |x, y| {
            Luma([if (x + y) % 2 == 0 { 0 } else { 255 }])
        });

        write_binary_image(&path, &image)?;
        assert_eq!(load_grayscale_image(&path)?, image);
        Ok(())
    }

    #[test]
    fn color_input_is_converted_to_luma() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("color.png");
        RgbImage::from_pixel(3, 2, Rgb([255, 255, 255])).save(&path).unwrap();

        let gray = load_grayscale_image(&path)?;
        assert_eq!(gray.dimensions(), (3, 2));
        assert!(gray.pixels().all(|p| p.0[0] == 255));
        Ok(())
    }

    #[test]
    fn missing_file_is_a_load_failure() {
        let dir = tempdir().unwrap();
        let err = load_grayscale_image(dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, StipplerError::Load { .. }));
    }

    #[test]
    fn corrupt_file_is_a_load_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("junk.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(
            load_grayscale_image(&path),
            Err(StipplerError::Load { .. })
        ));
    }

    #[test]
    fn unwritable_destination_is_a_write_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let err = write_binary_image(&path, &GrayImage::new(2, 2)).unwrap_err();
        assert!(matches!(err, StipplerError::Write { .. }));
    }
}
