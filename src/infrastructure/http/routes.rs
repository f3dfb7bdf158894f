//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping              GET   存活检查
//! - /api/voice/list        GET   音色目录
//! - /api/engine/status     GET   最近一次可用性探测结果
//! - /api/engine/probe      POST  重新探测
//! - /api/engine/greeting   GET   探测音频
//! - /api/session/start     POST  开始会话
//! - /api/session/get       POST  当前选择
//! - /api/session/toggle    POST  切换音色
//! - /api/session/close     POST  关闭会话
//! - /api/speech/generate   POST  生成语音（返回 audio/mpeg）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有 API 路由（不含页面）
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/voice", voice_routes())
        .nest("/engine", engine_routes())
        .nest("/session", session_routes())
        .nest("/speech", speech_routes())
}

/// Voice 路由
fn voice_routes() -> Router<Arc<AppState>> {
    Router::new().route("/list", get(handlers::list_voices))
}

/// Engine 路由
fn engine_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/status", get(handlers::engine_status))
        .route("/probe", post(handlers::probe_engine))
        .route("/greeting", get(handlers::engine_greeting))
}

/// Session 路由
fn session_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/start", post(handlers::start_session))
        .route("/get", post(handlers::get_session))
        .route("/toggle", post(handlers::toggle_voice))
        .route("/close", post(handlers::close_session))
}

/// Speech 路由
fn speech_routes() -> Router<Arc<AppState>> {
    Router::new().route("/generate", post(handlers::generate_speech))
}
