//! Ping Handler

use axum::Json;
use serde::Serialize;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// Ping endpoint - 存活检查（不访问 TTS 服务）
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
