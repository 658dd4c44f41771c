//! Minimal HTML pages for browsing tables and running scripts by hand.

use crate::error::AppError;
use crate::service::SchemaInspector;
use crate::state::AppState;
use axum::{extract::State, response::Html};

const INDEX_HTML: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>SQLite admin</title></head>
<body>
<h1>SQLite admin</h1>
<ul>
  <li><a href="/users">Users (JSON)</a></li>
  <li><a href="/table_manager">Table manager</a></li>
  <li><a href="/script_executor">Script executor</a></li>
</ul>
</body>
</html>
"#;

const SCRIPT_EXECUTOR_HTML: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>Script executor</title></head>
<body>
<h1>Script executor</h1>
<textarea id="script" rows="12" cols="80"></textarea><br>
<button onclick="run()">Execute</button>
<pre id="out"></pre>
<script>
async function run() {
  const resp = await fetch('/execute_script', {
    method: 'POST',
    headers: {'Content-Type': 'application/json'},
    body: JSON.stringify({script: document.getElementById('script').value})
  });
  document.getElementById('out').textContent = JSON.stringify(await resp.json(), null, 2);
}
</script>
</body>
</html>
"#;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn script_executor() -> Html<&'static str> {
    Html(SCRIPT_EXECUTOR_HTML)
}

pub async fn table_manager(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let tables = SchemaInspector::list_tables(&state.store).await?;
    let items: String = tables
        .iter()
        .map(|t| {
            let name = escape_html(t);
            format!("  <li><a href=\"/table_data/{name}\">{name}</a></li>\n")
        })
        .collect();
    Ok(Html(format!(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>Tables</title></head>\n<body>\n<h1>Tables</h1>\n<ul>\n{}</ul>\n</body>\n</html>\n",
        items
    )))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
