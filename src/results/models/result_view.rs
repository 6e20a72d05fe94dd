use crate::{
    app::util::{cancel::CancelToken, time::current_time_in_secs},
    assets::models::asset::AssetHandle,
    education::models::education_content::{EducationContent, EducationState},
    styles::models::style::Style,
};

/// State of one mounted result screen.
#[derive(Debug, Clone)]
pub struct ResultView {
    pub id: String,
    pub style: Style,
    pub original: AssetHandle,
    pub result: AssetHandle,
    pub ai_selected_artist: Option<String>,
    pub show_info: bool,
    pub education: EducationState,
    pub cancel: CancelToken,
    pub last_seen: u64,
}

impl ResultView {
    pub fn new(
        id: &str,
        style: Style,
        original: AssetHandle,
        result: AssetHandle,
        ai_selected_artist: Option<String>,
        education: EducationState,
    ) -> Self {
        Self {
            id: id.to_string(),
            style,
            original,
            result,
            ai_selected_artist,
            show_info: true,
            education,
            cancel: CancelToken::new(),
            last_seen: current_time_in_secs(),
        }
    }

    pub fn toggle_info(&mut self) -> bool {
        self.show_info = !self.show_info;
        self.show_info
    }

    /// Only the first answer lands, and never after teardown.
    pub fn resolve_education(&mut self, content: EducationContent) -> bool {
        if self.cancel.is_cancelled() || !self.education.is_loading() {
            return false;
        }

        self.education = EducationState::Ready(content);
        true
    }

    pub fn subtitle(&self) -> &str {
        match self.ai_selected_artist.as_deref() {
            Some(artist) if !artist.is_empty() => artist,
            _ => "예술 스타일",
        }
    }

    pub fn toggle_label(&self) -> &str {
        match self.show_info {
            true => "🔽 작품 설명 숨기기",
            false => "🔼 작품 설명 보기",
        }
    }
}
