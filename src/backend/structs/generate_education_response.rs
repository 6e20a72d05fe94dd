use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateEducationResponse {
    #[serde(default)]
    pub success: bool,
    pub text: Option<String>,
}

impl GenerateEducationResponse {
    /// The generated text, when the backend reports success with a non-empty body.
    pub fn accepted_text(self) -> Option<String> {
        match (self.success, self.text) {
            (true, Some(text)) if !text.trim().is_empty() => Some(text),
            _ => None,
        }
    }
}
