use crate::{
    app::{
        templates::{alert_page, render, Page},
        util::html::escape,
    },
    education::models::education_content::EducationState,
};

use super::models::{result_view::ResultView, share_payload::SharePayload};

const RESULT_CSS: &str = "
.comparison { background: white; padding: 1.5rem; border-radius: 20px; box-shadow: 0 20px 60px rgba(0,0,0,0.3); margin-bottom: 1.5rem; }
.compare { position: relative; overflow: hidden; border-radius: 12px; }
.compare img { display: block; width: 100%; }
.compare-after { position: absolute; inset: 0; clip-path: inset(0 0 0 50%); }
.compare-after img { height: 100%; object-fit: cover; }
.compare input { position: absolute; left: 0; right: 0; bottom: 1rem; width: 90%; margin: 0 5%; }
.compare-labels { display: flex; justify-content: space-between; color: #666; font-size: 0.9rem; margin-top: 0.5rem; }
.info-toggle { text-align: center; margin-bottom: 1rem; }
.toggle-button { background: rgba(255,255,255,0.2); border: 2px solid white; color: white; padding: 0.75rem 1.5rem; border-radius: 25px; font-size: 1rem; font-weight: 600; cursor: pointer; }
.card-header { display: flex; align-items: center; gap: 1rem; padding-bottom: 1.5rem; border-bottom: 2px solid #e0e0e0; margin-bottom: 1.5rem; }
.technique-icon { font-size: 4rem; }
.card-header h2 { margin: 0; color: #333; font-size: 1.75rem; }
.technique-subtitle { color: #666; font-size: 0.95rem; margin: 0.25rem 0 0 0; }
.loading-education { text-align: center; padding: 3rem 2rem; color: #666; }
.technique-explanation { background: linear-gradient(135deg, #fff5f5 0%, #ffe5e5 100%); padding: 1.5rem; border-radius: 12px; border-left: 4px solid #667eea; }
.technique-explanation h3 { color: #667eea; font-size: 1.1rem; margin: 0 0 1rem 0; }
.technique-explanation p { color: #333; line-height: 1.8; margin: 0; white-space: pre-line; }
.action-buttons { display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 1rem; }
.action-buttons form { display: contents; }
.btn-download { background: #10b981; color: white; }
.btn-share { background: #3b82f6; color: white; }
@media (max-width: 768px) { .action-buttons { grid-template-columns: 1fr; } .technique-icon { font-size: 3rem; } }
";

const SHARE_SCRIPT: &str = "
async function sharePicoArt(base) {
  const payload = Object.assign({}, base, { url: window.location.href });
  if (navigator.share) {
    try { await navigator.share(payload); } catch (e) { console.log('Share cancelled or failed'); }
  } else {
    try {
      await navigator.clipboard.writeText(payload.url);
      alert('링크가 클립보드에 복사되었습니다!');
    } catch (e) {
      alert('공유에 실패했습니다.');
    }
  }
}
";

fn explanation_card(view: &ResultView) -> String {
    let content = match &view.education {
        EducationState::Loading => "<div class=\"loading-education\"><div class=\"spinner\"></div><p>작품 설명을 생성하고 있습니다...</p></div>".to_string(),
        EducationState::Ready(content) => format!(
            "<div class=\"technique-explanation\"><h3>🖌️ 적용된 예술 기법</h3><p>{}</p></div>",
            escape(content.text())
        ),
    };

    format!(
        "<div class=\"card\">
<div class=\"card-header\"><div class=\"technique-icon\">{}</div><div><h2>{}</h2><p class=\"technique-subtitle\">{}</p></div></div>
<div class=\"card-content\">{}</div>
</div>",
        escape(view.style.icon()),
        escape(&view.style.name),
        escape(view.subtitle()),
        content
    )
}

pub fn result_page(view: &ResultView, share: &SharePayload) -> String {
    let card = match view.show_info {
        true => explanation_card(view),
        false => String::new(),
    };
    let share_json = serde_json::to_string(share)
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/");

    let body = format!(
        "<div class=\"screen\"><div class=\"container\">
<div class=\"header\"><h1>✨ 완성!</h1><p class=\"subtitle\">{name} 스타일로 변환되었습니다</p></div>
<div class=\"comparison\">
<div class=\"compare\">
<img src=\"{original}\" alt=\"원본\">
<div class=\"compare-after\" id=\"compare-after\"><img src=\"{result}\" alt=\"변환 결과\"></div>
<input type=\"range\" min=\"0\" max=\"100\" value=\"50\" aria-label=\"비교\" oninput=\"document.getElementById('compare-after').style.clipPath='inset(0 0 0 '+this.value+'%)'\">
</div>
<div class=\"compare-labels\"><span>원본</span><span>변환 결과</span></div>
</div>
<form class=\"info-toggle\" method=\"post\" action=\"/results/{id}/toggle\"><button class=\"toggle-button\" type=\"submit\">{toggle}</button></form>
{card}
<div class=\"action-buttons\">
<a class=\"btn btn-download\" href=\"/results/{id}/download\"><span>📥</span> 다운로드</a>
<button class=\"btn btn-share\" type=\"button\" onclick=\"sharePicoArt(SHARE_PAYLOAD)\"><span>🔗</span> 공유하기</button>
<form method=\"post\" action=\"/results/{id}/reset\"><button class=\"btn btn-reset\" type=\"submit\"><span>🔄</span> 다시 만들기</button></form>
</div>
</div></div>
<script>const SHARE_PAYLOAD = {share_json};{script}</script>",
        name = escape(&view.style.name),
        original = escape(&view.original.url()),
        result = escape(&view.result.url()),
        id = escape(&view.id),
        toggle = view.toggle_label(),
        card = card,
        share_json = share_json,
        script = SHARE_SCRIPT,
    );

    let refresh_secs = match view.show_info && view.education.is_loading() {
        true => Some(2),
        false => None,
    };

    render(Page {
        title: &view.style.name,
        refresh_secs,
        style: RESULT_CSS,
        body,
    })
}

pub fn download_failed_page() -> String {
    alert_page("다운로드", "다운로드에 실패했습니다.")
}
