use serde::Serialize;

use crate::{
    backend::config::{
        DEPTH_CONTROL_STRENGTH, DEPTH_CONTROL_TYPE, DEPTH_GUIDANCE_SCALE, DEPTH_INFERENCE_STEPS,
    },
    styles::models::style::Style,
};

/// Body of `POST /api/flux-transfer`. The backend tells the two shapes apart
/// by their fields, so they serialize untagged.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum FluxTransferInput {
    Template(TemplateInputSpec),
    AiSelection(AiSelectionInputSpec),
}

impl FluxTransferInput {
    pub fn is_ai_selection(&self) -> bool {
        matches!(self, Self::AiSelection(_))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateInputSpec {
    pub image: String,
    pub prompt: String,
    pub control_type: String,
    pub control_strength: f32,
    pub num_inference_steps: u32,
    pub guidance_scale: f32,
}

impl TemplateInputSpec {
    pub fn depth(image: String, prompt: &str) -> Self {
        Self {
            image,
            prompt: prompt.to_string(),
            control_type: DEPTH_CONTROL_TYPE.to_string(),
            control_strength: DEPTH_CONTROL_STRENGTH,
            num_inference_steps: DEPTH_INFERENCE_STEPS,
            guidance_scale: DEPTH_GUIDANCE_SCALE,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AiSelectionInputSpec {
    pub image: String,
    #[serde(rename = "selectedStyle")]
    pub selected_style: Style,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateEducationInput {
    pub prompt: String,
}
