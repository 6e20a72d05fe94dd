use serde::{Deserialize, Serialize};

use crate::styles::enums::style_category::StyleCategory;

pub const DEFAULT_MODEL_KEY: &str = "SDXL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub id: String,
    pub name: String,
    pub category: StyleCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Style {
    pub fn model_key(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL_KEY)
    }

    pub fn icon(&self) -> &str {
        self.icon.as_deref().unwrap_or("🎨")
    }

    pub fn is_oriental(&self) -> bool {
        self.category == StyleCategory::Oriental
    }
}
