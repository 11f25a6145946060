//! QR rendering for collection PINs

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine};
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;

use crate::error::AppError;

/// Render `data` as a PNG QR code and return it as a `data:` URI
pub fn qr_data_uri(data: &str) -> Result<String, AppError> {
    let code = QrCode::new(data.as_bytes())
        .map_err(|e| AppError::Internal(format!("QR encoding failed: {}", e)))?;

    let image = code.render::<Luma<u8>>().min_dimensions(200, 200).build();

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(image)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| AppError::Internal(format!("PNG encoding failed: {}", e)))?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&png)))
}
