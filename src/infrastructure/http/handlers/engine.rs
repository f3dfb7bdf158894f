//! Engine Handlers - 可用性探测

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::Response,
    Json,
};
use std::sync::Arc;

use crate::application::{GetEngineStatus, ProbeEngineCommand};
use crate::domain::speech::AudioFormat;
use crate::infrastructure::http::dto::{ApiResponse, EngineStatusDto};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 最近一次探测结果
pub async fn engine_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<EngineStatusDto>>, ApiError> {
    let status = state.get_engine_status_handler.handle(GetEngineStatus).await?;
    Ok(Json(ApiResponse::success(status.into())))
}

/// 使旧结果失效并重新探测
pub async fn probe_engine(State(state): State<Arc<AppState>>) -> Json<ApiResponse<EngineStatusDto>> {
    let status = state.probe_engine_handler.handle(ProbeEngineCommand).await;
    Json(ApiResponse::success(status.into()))
}

/// 探测时合成的音频（页面加载时自动播放）
pub async fn engine_greeting(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let greeting = state
        .get_engine_status_handler
        .handle(GetEngineStatus)
        .await?
        .greeting
        .ok_or_else(|| ApiError::NotFound("No greeting audio: engine unavailable".to_string()))?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, AudioFormat::Mp3.content_type())
        .header(header::CONTENT_LENGTH, greeting.len())
        .body(Body::from(greeting))
        .map_err(|e| ApiError::Internal(format!("Failed to build response: {}", e)))
}
