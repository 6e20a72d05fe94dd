use crate::styles::{
    config::{MODEL_CONFIGS, STYLES_JSON},
    enums::style_category::StyleCategory,
    models::{
        model_config::ModelConfig,
        style::{Style, DEFAULT_MODEL_KEY},
    },
};

#[derive(Debug, Clone)]
pub struct StyleCatalog {
    styles: Vec<Style>,
}

impl StyleCatalog {
    pub fn embedded() -> Result<Self, serde_json::Error> {
        Self::from_json(STYLES_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let styles: Vec<Style> = serde_json::from_str(json)?;
        Ok(Self { styles })
    }

    pub fn all(&self) -> &[Style] {
        &self.styles
    }

    pub fn get(&self, id: &str) -> Option<&Style> {
        self.styles.iter().find(|style| style.id == id)
    }

    /// Styles grouped in picker order; empty categories are omitted.
    pub fn grouped(&self) -> Vec<(StyleCategory, Vec<&Style>)> {
        let mut groups: Vec<(StyleCategory, Vec<&Style>)> = StyleCategory::ALL
            .iter()
            .map(|category| {
                let styles = self
                    .styles
                    .iter()
                    .filter(|style| style.category == *category)
                    .collect();
                (*category, styles)
            })
            .collect();

        let unknown: Vec<&Style> = self
            .styles
            .iter()
            .filter(|style| style.category == StyleCategory::Unknown)
            .collect();
        groups.push((StyleCategory::Unknown, unknown));

        groups.retain(|(_, styles)| !styles.is_empty());
        groups
    }
}

pub fn model_config_for_style(style: &Style) -> &'static ModelConfig {
    model_config_by_key(style.model_key())
}

fn model_config_by_key(key: &str) -> &'static ModelConfig {
    match MODEL_CONFIGS.iter().find(|config| config.key == key) {
        Some(config) => config,
        None => {
            tracing::warn!("unknown model key {}, using {}", key, DEFAULT_MODEL_KEY);
            MODEL_CONFIGS
                .iter()
                .find(|config| config.key == DEFAULT_MODEL_KEY)
                .unwrap_or(&MODEL_CONFIGS[0])
        }
    }
}
