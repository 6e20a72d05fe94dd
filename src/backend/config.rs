pub const FLUX_TRANSFER_PATH: &str = "/api/flux-transfer";
pub const CHECK_PREDICTION_PATH: &str = "/api/check-prediction";
pub const GENERATE_EDUCATION_PATH: &str = "/api/generate-education";

pub const DEPTH_CONTROL_TYPE: &str = "depth";
pub const DEPTH_CONTROL_STRENGTH: f32 = 0.5;
pub const DEPTH_INFERENCE_STEPS: u32 = 28;
pub const DEPTH_GUIDANCE_SCALE: f32 = 3.5;
