use axum::http::StatusCode;
use imagesize::ImageSize;

use crate::app::models::api_error::ApiError;

use super::file_properties::FileProperties;

#[derive(Debug)]
pub struct ImageFileProperties {
    pub file_properties: FileProperties,
    pub image_size: ImageSize,
}

impl TryFrom<FileProperties> for ImageFileProperties {
    type Error = ApiError;

    fn try_from(file_properties: FileProperties) -> Result<Self, Self::Error> {
        match imagesize::blob_size(&file_properties.data) {
            Ok(image_size) => Ok(Self {
                file_properties,
                image_size,
            }),
            Err(e) => {
                tracing::warn!("{} is not a readable image: {}", file_properties.file_name, e);
                Err(ApiError {
                    code: StatusCode::BAD_REQUEST,
                    message: "The uploaded file is not a supported image.".to_string(),
                })
            }
        }
    }
}
