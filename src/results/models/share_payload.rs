use serde::Serialize;

use crate::{app::config::APP_NAME, styles::models::style::Style};

/// Title and text for the share sheet. The link is the page the browser is
/// showing, filled in on click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
}

impl SharePayload {
    pub fn for_style(style: &Style) -> Self {
        Self {
            title: format!("{} - AI 예술 변환", APP_NAME),
            text: format!("{}로 변환한 작품", style.name),
        }
    }
}
