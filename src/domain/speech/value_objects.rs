//! Speech Context - Value Objects

use crate::domain::voice::CombinedVoice;

/// 输出音频格式 (Kokoro 前端固定为 MP3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioFormat {
    #[default]
    Mp3,
}

impl AudioFormat {
    /// OpenAI 兼容接口中的 `response_format` 取值
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
        }
    }
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一次语音合成请求
///
/// 文本允许为空，是否接受由远端服务决定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice: CombinedVoice,
    pub format: AudioFormat,
}

impl SynthesisRequest {
    /// 使用默认 MP3 格式创建请求
    pub fn new(text: impl Into<String>, voice: CombinedVoice) -> Self {
        Self {
            text: text.into(),
            voice,
            format: AudioFormat::Mp3,
        }
    }
}
