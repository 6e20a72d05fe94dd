use std::fmt;

use tokio::sync::mpsc;

pub type ProgressSender = mpsc::UnboundedSender<TransferProgress>;
pub type ProgressReceiver = mpsc::UnboundedReceiver<TransferProgress>;

pub const MAX_REPORTED_PERCENT: u32 = 95;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferProgress {
    PreparingModel { label: String },
    Submitting { ai_selection: bool },
    Submitted { prediction_id: String },
    Converting { percent: u32 },
    Simulating { label: String, percent: u32 },
    Downloading,
}

impl TransferProgress {
    /// Estimate after `attempts` status checks. Never reaches 100 before completion.
    pub fn converting(attempts: u32) -> Self {
        Self::Converting {
            percent: MAX_REPORTED_PERCENT.min(10 + attempts),
        }
    }
}

impl fmt::Display for TransferProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreparingModel { label } => write!(f, "{} 모델 준비 중...", label),
            Self::Submitting { ai_selection: false } => write!(f, "FLUX 고품질 변환 시작..."),
            Self::Submitting { ai_selection: true } => write!(f, "AI 자동 화가 선택 시작..."),
            Self::Submitted { .. } => write!(f, "변환 요청이 접수되었습니다..."),
            Self::Converting { percent } => write!(f, "변환 중... {}%", percent),
            Self::Simulating { label, percent } => write!(f, "{} 변환 중... {}%", label, percent),
            Self::Downloading => write!(f, "이미지 다운로드 중..."),
        }
    }
}

/// Reports without caring whether anyone is still listening.
pub fn report(progress: &ProgressSender, event: TransferProgress) {
    let _ = progress.send(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converting_estimate_is_capped() {
        assert_eq!(TransferProgress::converting(1).to_string(), "변환 중... 11%");
        assert_eq!(TransferProgress::converting(85).to_string(), "변환 중... 95%");
        assert_eq!(TransferProgress::converting(90).to_string(), "변환 중... 95%");
    }

    #[test]
    fn converting_estimate_is_monotonic() {
        let mut last = 0;
        for attempts in 1..=90 {
            let TransferProgress::Converting { percent } = TransferProgress::converting(attempts)
            else {
                unreachable!();
            };
            assert!(percent >= last);
            assert!(percent <= MAX_REPORTED_PERCENT);
            last = percent;
        }
    }

    #[test]
    fn submitting_messages_depend_on_request_shape() {
        assert_eq!(
            TransferProgress::Submitting { ai_selection: true }.to_string(),
            "AI 자동 화가 선택 시작..."
        );
        assert_eq!(
            TransferProgress::Submitting { ai_selection: false }.to_string(),
            "FLUX 고품질 변환 시작..."
        );
    }
}
