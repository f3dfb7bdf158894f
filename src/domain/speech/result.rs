//! Speech Context - 合成结果与请求状态机

use std::time::Duration;

/// 合成结果，每次生成请求产生一次，渲染后即丢弃
#[derive(Debug, Clone, PartialEq)]
pub enum SynthesisResult {
    Success { audio: Vec<u8>, elapsed: Duration },
    Failure { message: String },
}

impl SynthesisResult {
    pub fn success(audio: Vec<u8>, elapsed: Duration) -> Self {
        Self::Success { audio, elapsed }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn elapsed_seconds(&self) -> Option<f64> {
        match self {
            Self::Success { elapsed, .. } => Some(elapsed.as_secs_f64()),
            Self::Failure { .. } => None,
        }
    }
}

/// 单次生成请求的状态
///
/// `Idle → Requesting → {Succeeded, Failed}`，两个结束状态均为终态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    Idle,
    Requesting,
    Succeeded,
    Failed,
}

impl GenerationState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    /// 发起请求
    pub fn begin(self) -> Result<Self, &'static str> {
        match self {
            Self::Idle => Ok(Self::Requesting),
            _ => Err("generation already started"),
        }
    }

    /// 根据结果进入终态
    pub fn finish(self, result: &SynthesisResult) -> Result<Self, &'static str> {
        match self {
            Self::Requesting if result.is_success() => Ok(Self::Succeeded),
            Self::Requesting => Ok(Self::Failed),
            _ => Err("generation not in progress"),
        }
    }
}

impl std::fmt::Display for GenerationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Requesting => "requesting",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}
