use bytes::Bytes;
use mime::Mime;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct Asset {
    pub id: String,
    pub mime_type: Mime,
    pub data: Bytes,
}

/// A locally addressable reference to an in-memory asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetHandle {
    pub id: String,
}

impl AssetHandle {
    pub fn url(&self) -> String {
        format!("/assets/{}", self.id)
    }
}

/// Best-effort mime type from the leading bytes, defaulting to jpeg.
pub fn sniff_mime(data: &[u8]) -> Mime {
    match image::guess_format(data) {
        Ok(image::ImageFormat::Png) => mime::IMAGE_PNG,
        Ok(image::ImageFormat::Gif) => mime::IMAGE_GIF,
        Ok(image::ImageFormat::WebP) => "image/webp".parse().unwrap_or(mime::IMAGE_JPEG),
        _ => mime::IMAGE_JPEG,
    }
}
