use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TransferDto {
    #[validate(length(
        min = 1,
        max = 64,
        message = "style_id must be between 1 and 64 characters."
    ))]
    pub style_id: String,
}

impl TransferDto {
    pub fn sanitized(&self) -> Self {
        Self {
            style_id: self.style_id.trim().to_string(),
        }
    }
}
