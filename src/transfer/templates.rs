use crate::{
    app::{
        templates::{render, Page},
        util::html::escape,
    },
    transfer::models::transfer_job::{JobStatus, TransferJob},
};

const PROGRESS_CSS: &str = "
.progress { text-align: center; padding: 3rem 2rem; }
.progress p { color: #666; font-size: 1rem; }
.error { color: #c0392b; }
";

pub fn progress_page(job: &TransferJob) -> String {
    let body = format!(
        "<div class=\"screen\"><div class=\"container\">
<div class=\"header\"><h1>{} {}</h1><p class=\"subtitle\">스타일로 변환하고 있습니다</p></div>
<div class=\"card progress\">
<div class=\"spinner\"></div>
<p>{}</p>
<form method=\"post\" action=\"/jobs/{}/cancel\"><button class=\"btn btn-reset\" type=\"submit\">취소</button></form>
</div>
</div></div>",
        escape(job.style.icon()),
        escape(&job.style.name),
        escape(&job.message),
        escape(&job.id)
    );

    render(Page {
        title: "변환 중",
        refresh_secs: Some(2),
        style: PROGRESS_CSS,
        body,
    })
}

pub fn failure_page(job: &TransferJob) -> String {
    let headline = match job.status {
        JobStatus::Timeout => "변환 시간이 초과되었습니다",
        _ => "변환에 실패했습니다",
    };

    let body = format!(
        "<div class=\"screen\"><div class=\"container\">
<div class=\"header\"><h1>😢 {}</h1><p class=\"subtitle\">{}</p></div>
<div class=\"card progress\">
<p class=\"error\">{}</p>
<form method=\"post\" action=\"/jobs/{}/cancel\"><button class=\"btn btn-primary\" type=\"submit\">🔄 다시 만들기</button></form>
</div>
</div></div>",
        headline,
        escape(&job.style.name),
        escape(job.error.as_deref().unwrap_or("알 수 없는 오류")),
        escape(&job.id)
    );

    render(Page {
        title: "변환 실패",
        refresh_secs: None,
        style: PROGRESS_CSS,
        body,
    })
}
