//! Speech Engine Port - 语音合成引擎抽象
//!
//! 定义远端 TTS 服务的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::speech::SynthesisRequest;

/// 语音合成错误
#[derive(Debug, Error)]
pub enum SpeechError {
    /// 无法连接（拒绝连接、URL 非法、超时等）
    #[error("Connection error: {0}")]
    Connectivity(String),

    /// 远端返回非成功状态
    #[error("Service error: HTTP {status}: {body}")]
    Remote { status: u16, body: String },

    /// 临时文件读写失败
    #[error("IO error: {0}")]
    Io(String),

    /// 响应体读取中断
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl SpeechError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connectivity(_) => "connectivity",
            Self::Remote { .. } => "remote",
            Self::Io(_) => "io",
            Self::InvalidResponse(_) => "invalid_response",
        }
    }
}

impl From<std::io::Error> for SpeechError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Speech Engine Port
///
/// 发送文本和组合音色到外部 TTS 服务，返回完整的音频字节
#[async_trait]
pub trait SpeechEnginePort: Send + Sync {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, SpeechError>;

    /// 引擎描述（用于日志）
    fn describe(&self) -> String {
        "speech-engine".to_string()
    }
}
