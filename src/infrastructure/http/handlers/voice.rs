//! Voice HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ListVoices;
use crate::infrastructure::http::dto::{ApiResponse, VoiceListResponseDto};
use crate::infrastructure::http::state::AppState;

/// 获取音色目录
pub async fn list_voices(State(state): State<Arc<AppState>>) -> Json<ApiResponse<VoiceListResponseDto>> {
    let result = state.list_voices_handler.handle(ListVoices).await;

    Json(ApiResponse::success(VoiceListResponseDto {
        voices: result.voices,
        default_voice: result.default_voice,
    }))
}
