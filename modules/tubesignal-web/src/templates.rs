/// Render the search form. `max_videos` pre-fills the count field so the
/// result page keeps the operator's last choice.
pub fn render_form(keyword: &str, max_videos: u32) -> String {
    let content = format!(
        r#"<div class="container">
    <div class="card">
        <h2 style="margin-bottom:4px;">Keyword research</h2>
        <p class="hint">Searches YouTube for a topic and extracts the top comments of each video into one report.</p>
        <form method="post" action="/research">
            <label for="keyword">Keyword</label>
            <input type="text" id="keyword" name="keyword" value="{keyword}" placeholder="e.g. urban gardening" required>
            <label for="max_videos">Videos to analyze (1&ndash;20)</label>
            <input type="number" id="max_videos" name="max_videos" value="{max_videos}" min="1" max="20">
            <button type="submit" onclick="this.textContent='Searching…';this.form.submit();">Run research</button>
        </form>
    </div>
</div>"#,
        keyword = html_escape(keyword),
    );
    build_page("Research", &content)
}

/// Render a finished run: the form again on top, the report below.
pub fn render_report(keyword: &str, max_videos: u32, report: &str) -> String {
    let content = format!(
        r#"<div class="container">
    <div class="card">
        <form method="post" action="/research">
            <label for="keyword">Keyword</label>
            <input type="text" id="keyword" name="keyword" value="{keyword}" required>
            <label for="max_videos">Videos to analyze (1&ndash;20)</label>
            <input type="number" id="max_videos" name="max_videos" value="{max_videos}" min="1" max="20">
            <button type="submit">Run again</button>
        </form>
    </div>
    <div class="card">
        <h3 style="margin-bottom:8px;">Report</h3>
        <pre class="report">{report}</pre>
    </div>
</div>"#,
        keyword = html_escape(keyword),
        report = html_escape(report),
    );
    build_page("Report", &content)
}

/// Render a validation error above a fresh form.
pub fn render_error(message: &str) -> String {
    let content = format!(
        r#"<div class="container">
    <div class="error-banner">{message}</div>
    <div class="card">
        <form method="post" action="/research">
            <label for="keyword">Keyword</label>
            <input type="text" id="keyword" name="keyword" required>
            <label for="max_videos">Videos to analyze (1&ndash;20)</label>
            <input type="number" id="max_videos" name="max_videos" value="5" min="1" max="20">
            <button type="submit">Run research</button>
        </form>
    </div>
</div>"#,
        message = html_escape(message),
    );
    build_page("Research", &content)
}

// --- Helpers ---

fn build_page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} — TubeSignal</title>
<style>
*{{margin:0;padding:0;box-sizing:border-box;}}
body{{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;color:#1a1a1a;background:#fafafa;}}
.header{{background:#1a1a1a;color:#fff;padding:12px 24px;}}
.header h1{{font-size:18px;font-weight:600;}}
.container{{max-width:860px;margin:0 auto;padding:24px;}}
.card{{background:#fff;border:1px solid #e0e0e0;border-radius:8px;padding:16px;margin-bottom:12px;}}
.hint{{color:#888;font-size:13px;margin-bottom:12px;}}
label{{display:block;font-size:13px;color:#555;margin:10px 0 4px;}}
input{{width:100%;padding:8px;border:1px solid #ccc;border-radius:4px;font-size:14px;}}
button{{margin-top:14px;padding:8px 20px;background:#c4302b;color:#fff;border:none;border-radius:4px;font-size:14px;font-weight:500;cursor:pointer;}}
button:hover{{background:#992521;}}
.report{{white-space:pre-wrap;font-size:12px;line-height:1.5;background:#f7f7f7;border:1px solid #eee;border-radius:4px;padding:12px;overflow-x:auto;}}
.error-banner{{background:#fce4ec;border:1px solid #f8bbd0;color:#c62828;padding:10px 14px;border-radius:4px;font-size:14px;margin-bottom:12px;}}
</style>
</head>
<body>
<div class="header">
    <h1>TubeSignal</h1>
</div>
{content}
</body>
</html>"#,
        title = html_escape(title),
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
