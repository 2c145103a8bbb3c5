//! QR code rendering for attendance scan links.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;

/// Pixel size of a single QR module.
const MODULE_PX: u32 = 10;

#[derive(Debug)]
pub struct QrError(pub String);

impl std::fmt::Display for QrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "QR rendering failed: {}", self.0)
    }
}

impl std::error::Error for QrError {}

/// Renders `content` as a black-on-white PNG with a quiet zone and returns the raw bytes.
pub fn render_png(content: &str) -> Result<Vec<u8>, QrError> {
    let code = QrCode::new(content.as_bytes()).map_err(|e| QrError(e.to_string()))?;
    let img = code
        .render::<Luma<u8>>()
        .quiet_zone(true)
        .module_dimensions(MODULE_PX, MODULE_PX)
        .build();

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| QrError(e.to_string()))?;
    Ok(buf.into_inner())
}

/// Same as [`render_png`] but base64-encoded for embedding in JSON or a data URI.
pub fn render_png_base64(content: &str) -> Result<String, QrError> {
    render_png(content).map(|png| STANDARD.encode(png))
}
