pub mod models;

use std::collections::HashMap;

use axum::{extract::Multipart, http::StatusCode};

use crate::app::models::api_error::ApiError;

use self::models::{file_properties::FileProperties, form_parts::FormParts};

pub async fn get_form_parts(mut multipart: Multipart) -> Result<FormParts, ApiError> {
    let mut files = Vec::new();
    let mut fields = HashMap::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("get_form_parts: {}", e);
                return Err(ApiError {
                    code: StatusCode::BAD_REQUEST,
                    message: "Malformed multipart body.".to_string(),
                });
            }
        };

        let field_name = field.name().unwrap_or("file").to_string();

        match field.file_name().map(|name| name.to_string()) {
            Some(file_name) => {
                let mime_type = field
                    .content_type()
                    .and_then(|content_type| content_type.parse().ok())
                    .unwrap_or(mime::APPLICATION_OCTET_STREAM);
                let Ok(data) = field.bytes().await else {
                    continue;
                };

                files.push(FileProperties {
                    field_name,
                    file_name,
                    mime_type,
                    data,
                });
            }
            None => {
                let Ok(text) = field.text().await else {
                    continue;
                };

                fields.insert(field_name, text);
            }
        }
    }

    Ok(FormParts { files, fields })
}
