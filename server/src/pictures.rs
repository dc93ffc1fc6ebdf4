//! Profile-picture validation.
//!
//! The content type is sniffed from the bytes, never trusted from the
//! upload headers.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};

/// Allowed formats for profile pictures.
pub const ALLOWED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

/// Maximum file size for profile pictures (5MB).
pub const MAX_PICTURE_SIZE: usize = 5 * 1024 * 1024;

/// Validate picture data: detect the format from magic bytes, check it is
/// allowed, and confirm the image actually decodes.
/// Returns the content type on success (e.g., "image/jpeg").
pub fn validate_picture(data: &[u8]) -> Result<String, String> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| format!("Failed to read image: {}", e))?;

    let format = reader
        .format()
        .ok_or_else(|| "Could not detect image format".to_string())?;

    if !ALLOWED_FORMATS.contains(&format) {
        return Err(format!(
            "Unsupported image format: {:?}. Allowed: JPEG, PNG, GIF, WebP",
            format
        ));
    }

    reader
        .decode()
        .map_err(|e| format!("Failed to decode image: {}", e))?;

    Ok(format.to_mime_type().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes() -> Vec<u8> {
        let img = image::RgbImage::new(2, 2);
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn accepts_png_and_reports_mime_type() {
        assert_eq!(validate_picture(&png_bytes()).unwrap(), "image/png");
    }

    #[test]
    fn rejects_non_image_bytes() {
        assert!(validate_picture(b"definitely not an image").is_err());
    }

    #[test]
    fn rejects_truncated_image() {
        let mut bytes = png_bytes();
        bytes.truncate(bytes.len() / 2);
        assert!(validate_picture(&bytes).is_err());
    }
}
