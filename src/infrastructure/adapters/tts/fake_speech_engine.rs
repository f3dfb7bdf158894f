//! Fake Speech Engine - 用于测试的合成引擎
//!
//! 始终返回固定的音频字节，不实际调用 TTS 服务

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

use crate::application::ports::{SpeechEnginePort, SpeechError};
use crate::domain::speech::SynthesisRequest;

/// Fake Speech Engine 配置
#[derive(Debug, Clone)]
pub struct FakeSpeechEngineConfig {
    /// 固定返回的音频
    pub audio: Vec<u8>,
    /// 模拟推理延迟
    pub latency: Duration,
    /// 设置后每次都返回该连接错误
    pub failure: Option<String>,
}

impl Default for FakeSpeechEngineConfig {
    fn default() -> Self {
        Self {
            audio: b"ID3\x04fake".to_vec(),
            latency: Duration::from_millis(10),
            failure: None,
        }
    }
}

/// Fake Speech Engine
pub struct FakeSpeechEngine {
    config: FakeSpeechEngineConfig,
}

impl FakeSpeechEngine {
    pub fn new(config: FakeSpeechEngineConfig) -> Self {
        Self { config }
    }

    /// 从音频文件加载固定返回内容
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, std::io::Error> {
        let audio = std::fs::read(path.as_ref())?;
        tracing::info!(
            path = %path.as_ref().display(),
            size = audio.len(),
            "FakeSpeechEngine initialized"
        );
        Ok(Self::new(FakeSpeechEngineConfig {
            audio,
            ..Default::default()
        }))
    }

    /// 始终失败的引擎
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::new(FakeSpeechEngineConfig {
            failure: Some(message.into()),
            ..Default::default()
        })
    }
}

#[async_trait]
impl SpeechEnginePort for FakeSpeechEngine {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, SpeechError> {
        tracing::debug!(
            text_len = request.text.len(),
            voice = %request.voice,
            "FakeSpeechEngine: returning fixed audio"
        );

        tokio::time::sleep(self.config.latency).await;

        match &self.config.failure {
            Some(message) => Err(SpeechError::Connectivity(message.clone())),
            None => Ok(self.config.audio.clone()),
        }
    }

    fn describe(&self) -> String {
        "fake-speech-engine".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::voice::CombinedVoice;

    #[tokio::test]
    async fn test_fake_engine_from_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"RIFF").unwrap();

        let engine = FakeSpeechEngine::from_file(file.path()).unwrap();
        let audio = engine
            .synthesize(&SynthesisRequest::new("hi", CombinedVoice::raw("af")))
            .await
            .unwrap();
        assert_eq!(audio, b"RIFF");
    }

    #[tokio::test]
    async fn test_unreachable_engine() {
        let engine = FakeSpeechEngine::unreachable("Connection refused");
        let err = engine
            .synthesize(&SynthesisRequest::new("hi", CombinedVoice::raw("af")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Connection refused"));
    }
}
