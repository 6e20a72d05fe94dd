use std::io::Cursor;

use image::{imageops::FilterType, DynamicImage, ImageOutputFormat};

use crate::{
    app::config::{JPEG_QUALITY, MAX_IMAGE_WIDTH},
    transfer::errors::TransferError,
};

/// Target size for a photo: never wider than `max_width`, aspect preserved.
pub fn fit_within_width(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if width <= max_width {
        return (width, height);
    }

    let scaled = (height as u64 * max_width as u64) / width as u64;
    (max_width, scaled.max(1) as u32)
}

/// Downscales the photo and re-encodes it as jpeg.
pub fn resize_photo(data: &[u8]) -> Result<Vec<u8>, TransferError> {
    let image = image::load_from_memory(data)
        .map_err(|e| TransferError::Image(format!("Could not decode photo: {}", e)))?;

    let (width, height) = fit_within_width(image.width(), image.height(), MAX_IMAGE_WIDTH);
    let image = match (width, height) == (image.width(), image.height()) {
        true => image,
        false => image.resize_exact(width, height, FilterType::Triangle),
    };

    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
    let mut jpeg = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut jpeg), ImageOutputFormat::Jpeg(JPEG_QUALITY))
        .map_err(|e| TransferError::Image(format!("Could not encode photo: {}", e)))?;

    Ok(jpeg)
}

pub fn to_data_url(jpeg: &[u8]) -> String {
    format!("data:image/jpeg;base64,{}", base64::encode(jpeg))
}
