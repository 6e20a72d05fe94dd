use axum::{extract::State, response::Html};

use crate::{
    app::{
        templates::{render, Page},
        util::html::escape,
    },
    AppState,
};

const UPLOAD_CSS: &str = "
.picker { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 0.75rem; margin: 0.5rem 0 1.5rem 0; }
.picker label { border: 2px solid #e0e0e0; border-radius: 12px; padding: 0.75rem; cursor: pointer; display: flex; gap: 0.5rem; align-items: center; }
.picker input { accent-color: #667eea; }
.category { color: #667eea; margin: 1rem 0 0 0; }
.photo-input { margin-bottom: 1.5rem; }
";

pub async fn get_root(State(state): State<AppState>) -> Html<String> {
    let mut groups = String::new();

    for (category, styles) in state.styles.grouped() {
        let mut options = String::new();
        for style in styles {
            options.push_str(&format!(
                "<label><input type=\"radio\" name=\"style_id\" value=\"{}\" required> <span>{}</span> <span>{}</span></label>",
                escape(&style.id),
                escape(style.icon()),
                escape(&style.name)
            ));
        }

        groups.push_str(&format!(
            "<h3 class=\"category\">{}</h3><div class=\"picker\">{}</div>",
            escape(category.label()),
            options
        ));
    }

    let body = format!(
        "<div class=\"screen\"><div class=\"container\">
<div class=\"header\"><h1>🎨 PicoArt</h1><p class=\"subtitle\">사진을 올리고 예술 스타일을 골라 보세요</p></div>
<form class=\"card\" method=\"post\" action=\"/transfer\" enctype=\"multipart/form-data\">
<div class=\"photo-input\"><input type=\"file\" name=\"photo\" accept=\"image/*\" required></div>
{}
<button class=\"btn btn-primary\" type=\"submit\">✨ 변환하기</button>
</form>
</div></div>",
        groups
    );

    Html(render(Page {
        title: "AI 예술 변환",
        refresh_secs: None,
        style: UPLOAD_CSS,
        body,
    }))
}
