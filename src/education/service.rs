use crate::{
    app::util::cancel::CancelToken,
    backend::service::StyleTransferApi,
    education::{content, models::education_content::EducationContent, prompts},
    styles::models::style::Style,
};

pub fn fallback_message(style: &Style) -> String {
    format!("이 작품은 {} 스타일로 변환되었습니다.", style.name)
}

/// Pre-written explanation, available without any network call.
pub fn static_education(style: &Style, ai_selected_artist: Option<&str>) -> Option<EducationContent> {
    if !style.is_oriental() {
        return None;
    }

    content::oriental_education(&style.id, ai_selected_artist).map(EducationContent::Static)
}

/// Resolves the explanation for a result. Returns `None` when the flow was
/// cancelled, in which case nothing should be written back.
pub async fn resolve_education(
    api: &dyn StyleTransferApi,
    style: &Style,
    ai_selected_artist: Option<&str>,
    cancel: &CancelToken,
) -> Option<EducationContent> {
    if let Some(content) = static_education(style, ai_selected_artist) {
        return Some(content);
    }

    let prompt = prompts::build_prompt(style, ai_selected_artist);
    if prompt.is_empty() {
        tracing::debug!("no education prompt for {}, using fallback", style.id);
        return Some(EducationContent::Fallback(fallback_message(style)));
    }

    if cancel.is_cancelled() {
        return None;
    }

    let result = api.generate_education(&prompt).await;

    if cancel.is_cancelled() {
        tracing::debug!("education for {} arrived after teardown", style.id);
        return None;
    }

    match result {
        Ok(response) => match response.accepted_text() {
            Some(text) => Some(EducationContent::Generated(text)),
            None => {
                tracing::warn!("education generation for {}: invalid response format", style.id);
                Some(EducationContent::Fallback(fallback_message(style)))
            }
        },
        Err(e) => {
            tracing::warn!("education generation for {} failed: {}", style.id, e);
            Some(EducationContent::Fallback(fallback_message(style)))
        }
    }
}
