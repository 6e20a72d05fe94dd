use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelConfig {
    pub key: &'static str,
    pub model: &'static str,
    pub label: &'static str,
    pub cost: f32,
    pub time: &'static str,
}

impl ModelConfig {
    /// Models of the flux family take the template-driven request shape.
    pub fn is_flux(&self) -> bool {
        self.model.contains("flux")
    }
}
