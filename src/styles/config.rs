use crate::styles::models::model_config::ModelConfig;

pub const STYLES_JSON: &str = include_str!("config/styles.json");

pub static MODEL_CONFIGS: [ModelConfig; 2] = [
    ModelConfig {
        key: "FLUX",
        model: "black-forest-labs/flux-depth-dev",
        label: "FLUX Depth",
        cost: 0.025,
        time: "30-60초",
    },
    ModelConfig {
        key: "SDXL",
        model: "picoart/artist-selection-sdxl",
        label: "AI 화가 선택",
        cost: 0.02,
        time: "20-40초",
    },
];
