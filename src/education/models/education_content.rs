use serde::Serialize;

/// The explanation shown for a result. Exactly one source backs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EducationContent {
    Static(&'static str),
    Generated(String),
    Fallback(String),
}

impl EducationContent {
    pub fn text(&self) -> &str {
        match self {
            Self::Static(text) => text,
            Self::Generated(text) => text,
            Self::Fallback(text) => text,
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Self::Static(_) => "static",
            Self::Generated(_) => "generated",
            Self::Fallback(_) => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EducationState {
    Loading,
    Ready(EducationContent),
}

impl EducationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn snapshot(&self) -> EducationSnapshot {
        match self {
            Self::Loading => EducationSnapshot {
                state: "loading".to_string(),
                text: None,
            },
            Self::Ready(content) => EducationSnapshot {
                state: content.kind().to_string(),
                text: Some(content.text().to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationSnapshot {
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
