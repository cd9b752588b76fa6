use axum::response::Html;

pub async fn get_root() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
