//! Session Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{
    ApplicationError, CloseSessionCommand, GetSessionQuery, StartSessionCommand,
    ToggleVoiceCommand,
};
use crate::domain::voice::VoiceId;
use crate::infrastructure::http::dto::{
    ApiResponse, Empty, SessionRequest, SessionResponseDto, ToggleVoiceRequest,
    ToggleVoiceResponseDto,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 开始新会话（引擎不可用时返回处理建议）
pub async fn start_session(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<SessionResponseDto>>, ApiError> {
    let view = state.start_session_handler.handle(StartSessionCommand).await?;
    Ok(Json(ApiResponse::success(view.into())))
}

/// 获取会话当前选择
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<ApiResponse<SessionResponseDto>>, ApiError> {
    let query = GetSessionQuery {
        session_id: req.session_id,
    };
    let view = state.get_session_handler.handle(query).await?;
    Ok(Json(ApiResponse::success(view.into())))
}

/// 切换音色
pub async fn toggle_voice(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ToggleVoiceRequest>,
) -> Result<Json<ApiResponse<ToggleVoiceResponseDto>>, ApiError> {
    let voice = VoiceId::new(req.voice).map_err(ApplicationError::from)?;
    let cmd = ToggleVoiceCommand {
        session_id: req.session_id,
        voice,
    };
    let result = state.toggle_voice_handler.handle(cmd).await?;

    Ok(Json(ApiResponse::success(ToggleVoiceResponseDto {
        voice: result.voice,
        active: result.active,
        session: result.session.into(),
    })))
}

/// 关闭会话
pub async fn close_session(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let cmd = CloseSessionCommand {
        session_id: req.session_id,
    };
    state.close_session_handler.handle(cmd).await?;
    Ok(Json(ApiResponse::ok()))
}
