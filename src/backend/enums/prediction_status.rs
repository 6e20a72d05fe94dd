#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionStatus {
    Pending,
    Succeeded,
    Failed,
}

impl PredictionStatus {
    /// Anything the backend reports that is neither terminal state keeps the
    /// prediction pending (`starting`, `processing`, ...).
    pub fn from_wire(status: &str) -> Self {
        match status {
            "succeeded" => Self::Succeeded,
            "failed" => Self::Failed,
            _ => Self::Pending,
        }
    }
}
