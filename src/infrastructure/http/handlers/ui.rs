//! UI Handler - 内置单页界面

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../../web/index.html");

/// 文本输入、音色切换网格、生成按钮、播放器与下载链接
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
