//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::{EngineStatus, SessionView};
use crate::domain::voice::{CombinedVoice, VoiceId};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

/// 空数据响应
#[derive(Debug, Serialize)]
pub struct Empty {}

impl ApiResponse<Empty> {
    /// 成功但无数据
    pub fn ok() -> Self {
        Self::success(Empty {})
    }
}

// ============================================================================
// Voice DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct VoiceListResponseDto {
    pub voices: Vec<VoiceId>,
    pub default_voice: VoiceId,
}

// ============================================================================
// Session DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleVoiceRequest {
    pub session_id: String,
    pub voice: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponseDto {
    pub session_id: String,
    pub selected: Vec<VoiceId>,
    pub combined_voice: CombinedVoice,
}

impl From<SessionView> for SessionResponseDto {
    fn from(view: SessionView) -> Self {
        Self {
            session_id: view.session_id,
            selected: view.selected,
            combined_voice: view.combined_voice,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ToggleVoiceResponseDto {
    pub voice: VoiceId,
    pub active: bool,
    #[serde(flatten)]
    pub session: SessionResponseDto,
}

// ============================================================================
// Speech DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GenerateSpeechRequest {
    pub session_id: String,
    #[serde(default)]
    pub text: String,
    /// true 时以附件形式返回（下载按钮）
    #[serde(default)]
    pub download: bool,
}

// ============================================================================
// Engine DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct EngineStatusDto {
    pub available: bool,
    pub checked_at: String,
    pub elapsed_seconds: f64,
    pub error: Option<String>,
    pub greeting_size: Option<usize>,
}

impl From<EngineStatus> for EngineStatusDto {
    fn from(status: EngineStatus) -> Self {
        Self {
            available: status.available,
            checked_at: status.checked_at.to_rfc3339(),
            elapsed_seconds: status.elapsed.as_secs_f64(),
            error: status.error,
            greeting_size: status.greeting.as_ref().map(Vec::len),
        }
    }
}
