use crate::app::{config::APP_NAME, util::html::escape};

const BASE_CSS: &str = "
body { margin: 0; font-family: -apple-system, 'Apple SD Gothic Neo', 'Noto Sans KR', sans-serif; }
.screen { min-height: 100vh; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 2rem; display: flex; align-items: center; justify-content: center; box-sizing: border-box; }
.container { max-width: 900px; width: 100%; }
.header { text-align: center; color: white; margin-bottom: 2rem; }
.header h1 { font-size: 2.5rem; margin: 0 0 0.5rem 0; }
.subtitle { font-size: 1.1rem; opacity: 0.95; margin: 0; }
.card { background: white; border-radius: 20px; padding: 2rem; box-shadow: 0 20px 60px rgba(0,0,0,0.3); margin-bottom: 1.5rem; }
.btn { padding: 1rem 1.5rem; border: none; border-radius: 12px; font-size: 1rem; font-weight: 600; cursor: pointer; display: inline-flex; align-items: center; justify-content: center; gap: 0.5rem; text-decoration: none; }
.btn-primary { background: #667eea; color: white; }
.btn-reset { background: white; color: #667eea; border: 2px solid #667eea; }
.spinner { width: 50px; height: 50px; border: 4px solid #f3f3f3; border-top: 4px solid #667eea; border-radius: 50%; animation: spin 1s linear infinite; margin: 0 auto 1rem auto; }
@keyframes spin { 0% { transform: rotate(0deg); } 100% { transform: rotate(360deg); } }
@media (max-width: 768px) { .screen { padding: 1rem; } .header h1 { font-size: 2rem; } .card { padding: 1.5rem; } }
";

pub struct Page<'a> {
    pub title: &'a str,
    pub refresh_secs: Option<u32>,
    pub style: &'a str,
    pub body: String,
}

pub fn render(page: Page) -> String {
    let refresh = match page.refresh_secs {
        Some(secs) => format!("<meta http-equiv=\"refresh\" content=\"{}\">", secs),
        None => String::new(),
    };

    format!(
        "<!DOCTYPE html>
<html lang=\"ko\">
<head>
<meta charset=\"UTF-8\">
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
{}
<title>{} - {}</title>
<style>{}{}</style>
</head>
<body>
{}
</body>
</html>",
        refresh,
        APP_NAME,
        escape(page.title),
        BASE_CSS,
        page.style,
        page.body
    )
}

/// Page that shows a browser alert and then goes back.
pub fn alert_page(title: &str, message: &str) -> String {
    render(Page {
        title,
        refresh_secs: None,
        style: "",
        body: format!(
            "<script>alert({}); history.back();</script>
<noscript><p>{}</p></noscript>",
            js_string(message),
            escape(message)
        ),
    })
}

/// A JS string literal, safe to embed in a script element.
pub fn js_string(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}
