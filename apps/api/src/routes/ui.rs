use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
/// The single-page form UI. All state lives server-side; the page only calls the API.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
