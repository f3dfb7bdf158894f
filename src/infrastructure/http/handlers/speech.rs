//! Speech Handlers

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::Response,
    Json,
};
use std::sync::Arc;

use crate::application::GenerateSpeechCommand;
use crate::domain::speech::{AudioFormat, SynthesisResult};
use crate::infrastructure::http::dto::GenerateSpeechRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 下载文件名
pub const DOWNLOAD_FILE_NAME: &str = "generated_speech.mp3";

/// 合成耗时（秒，两位小数）
pub const GENERATION_SECONDS_HEADER: &str = "x-generation-seconds";

/// 实际使用的组合音色
pub const VOICE_HEADER: &str = "x-voice";

/// 生成语音，成功时直接返回 MP3
pub async fn generate_speech(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateSpeechRequest>,
) -> Result<Response, ApiError> {
    let cmd = GenerateSpeechCommand {
        session_id: req.session_id,
        text: req.text,
    };

    let response = state.generate_speech_handler.handle(cmd).await?;

    match response.result {
        SynthesisResult::Success { audio, elapsed } => {
            let disposition = if req.download { "attachment" } else { "inline" };
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, AudioFormat::Mp3.content_type())
                .header(header::CONTENT_LENGTH, audio.len())
                .header(
                    header::CONTENT_DISPOSITION,
                    format!("{}; filename=\"{}\"", disposition, DOWNLOAD_FILE_NAME),
                )
                .header(
                    GENERATION_SECONDS_HEADER,
                    format!("{:.2}", elapsed.as_secs_f64()),
                )
                .header(VOICE_HEADER, response.voice.as_str())
                .body(Body::from(audio))
                .map_err(|e| ApiError::Internal(format!("Failed to build response: {}", e)))
        }
        SynthesisResult::Failure { message } => Err(ApiError::ServiceUnavailable(format!(
            "Error generating speech. Please ensure Kokoro FastAPI is running properly: {}",
            message
        ))),
    }
}
