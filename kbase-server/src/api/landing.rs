//! HTML landing page

use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::state::AppState;

const STYLE: &str = r#"
    body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
           max-width: 880px; margin: 0 auto; padding: 2rem; color: #1f2933; line-height: 1.6; }
    h1 { margin-bottom: 0.25rem; }
    code, pre { background: #f3f4f6; border-radius: 4px; padding: 0.1rem 0.3rem; }
    pre { padding: 1rem; overflow-x: auto; }
    .stats { display: flex; gap: 1rem; margin: 1.5rem 0; }
    .stat { flex: 1; background: #eef2ff; border-radius: 8px; padding: 1rem; text-align: center; }
    .stat-value { font-size: 2rem; font-weight: 700; }
    .endpoint { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem; margin: 1rem 0; }
    .method { font-weight: 700; margin-right: 0.5rem; }
    .get { color: #047857; }
    .post { color: #1d4ed8; }
"#;

/// Landing page with the endpoint list and live document count
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses(
        (status = 200, description = "HTML overview of the API", content_type = "text/html", body = String)
    )
)]
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_index(state.knowledge.len()))
}

/// Render the landing page for a knowledge base holding `documents` items
pub fn render_index(documents: usize) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Knowledge Base API</title>
    <style>{STYLE}</style>
</head>
<body>
    <h1>Knowledge Base API</h1>
    <p>In-memory keyword search over platform knowledge, addressed by semantic identifiers.</p>

    <div class="stats">
        <div class="stat"><div class="stat-value">{documents}</div><div>Knowledge Items</div></div>
        <div class="stat"><div class="stat-value">2</div><div>API Endpoints</div></div>
    </div>

    <h2>Endpoints</h2>
    <div class="endpoint">
        <span class="method post">POST</span><code>/api/v1/search</code>
        <p>Search with comma or space separated terms.</p>
        <pre>{{
  "query": "nodejs postgresql",
  "limit": 10
}}</pre>
    </div>
    <div class="endpoint">
        <span class="method get">GET</span><code>/api/v1/knowledge/{{id}}</code>
        <p>Full document by semantic identifier, e.g.
           <a href="/api/v1/knowledge/recipe/laravel-jetstream"><code>recipe/laravel-jetstream</code></a>.</p>
    </div>
    <div class="endpoint">
        <span class="method get">GET</span><code>/health</code>
        <p>Health check for monitoring.</p>
    </div>
    <div class="endpoint">
        <span class="method get">GET</span><code>/api-docs/openapi.json</code>
        <p>OpenAPI description of this API.</p>
    </div>

    <h2>Example</h2>
    <pre>curl -X POST http://localhost:8080/api/v1/search \
  -H "Content-Type: application/json" \
  -d '{{"query": "nodejs postgresql"}}'</pre>

    <h2>Semantic Identifiers</h2>
    <p>Every item is addressed as <code>{{type}}/{{name}}</code>:</p>
    <ul>
        <li><code>service/</code> platform services (nodejs, postgresql, mariadb, ...)</li>
        <li><code>recipe/</code> deployment recipes (laravel, django, nextjs, ...)</li>
        <li><code>patterns/</code> deployment patterns</li>
        <li><code>runtimes/</code> runtime configurations</li>
        <li><code>nginx/</code> nginx configurations</li>
    </ul>
</body>
</html>
"#
    )
}
