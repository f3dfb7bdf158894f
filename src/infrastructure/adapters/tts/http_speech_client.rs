//! HTTP Speech Client - 调用 OpenAI 兼容的语音合成接口
//!
//! 实现 SpeechEnginePort trait，通过 HTTP 调用 Kokoro FastAPI
//!
//! 外部 TTS API:
//! POST http://localhost:8880/v1/audio/speech
//! Request: {"model": "kokoro", "voice": "af_bella+am_adam", "input": "...", "response_format": "mp3"}
//! Response: audio/mpeg binary (streamed)

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, Url};
use serde::Serialize;
use std::time::Duration;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{SpeechEnginePort, SpeechError};
use crate::domain::speech::SynthesisRequest;
use crate::infrastructure::adapters::storage::{ScratchAudioFile, ScratchSpace};

/// 合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct SpeechHttpRequest<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
    response_format: &'a str,
}

/// 校验并解析服务基础 URL
///
/// 要求显式的 `http://` 或 `https://` 前缀以及主机名，
/// `http:localhost:8880/v1` 这类缺少 `//` 的写法会被拒绝
pub fn parse_base_url(raw: &str) -> Result<Url, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("base URL cannot be empty".to_string());
    }
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(format!(
            "base URL must start with http:// or https://: {}",
            raw
        ));
    }
    let url = Url::parse(raw).map_err(|e| format!("invalid base URL {}: {}", raw, e))?;
    if url.host_str().map_or(true, str::is_empty) {
        return Err(format!("base URL has no host: {}", raw));
    }
    Ok(url)
}

/// HTTP 语音合成客户端配置
#[derive(Debug, Clone)]
pub struct HttpSpeechClientConfig {
    /// 服务基础 URL（包含 /v1）
    pub base_url: String,
    /// Bearer 凭证，本地服务不校验
    pub api_key: String,
    /// 模型名
    pub model: String,
    /// 请求超时时间（秒），0 表示不设置
    pub timeout_secs: u64,
}

impl Default for HttpSpeechClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8880/v1".to_string(),
            api_key: "not-needed".to_string(),
            model: "kokoro".to_string(),
            timeout_secs: 0,
        }
    }
}

impl HttpSpeechClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 语音合成客户端
///
/// 响应体先流式写入临时文件，再完整读回内存
pub struct HttpSpeechClient {
    client: Client,
    config: HttpSpeechClientConfig,
    speech_url: Url,
    scratch: ScratchSpace,
}

impl HttpSpeechClient {
    /// 创建新的客户端，基础 URL 非法时立即失败
    pub fn new(config: HttpSpeechClientConfig, scratch: ScratchSpace) -> Result<Self, SpeechError> {
        let base = parse_base_url(&config.base_url).map_err(SpeechError::Connectivity)?;
        let speech_url = Url::parse(&format!(
            "{}/audio/speech",
            base.as_str().trim_end_matches('/')
        ))
        .map_err(|e| SpeechError::Connectivity(e.to_string()))?;

        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| SpeechError::Connectivity(e.to_string()))?;

        Ok(Self {
            client,
            config,
            speech_url,
            scratch,
        })
    }

    /// 合成接口 URL
    pub fn speech_url(&self) -> &Url {
        &self.speech_url
    }

    async fn stream_to_file(
        response: reqwest::Response,
        scratch: &ScratchAudioFile,
    ) -> Result<u64, SpeechError> {
        let mut file = scratch.writer().await?;
        let mut written = 0u64;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk
                .map_err(|e| SpeechError::InvalidResponse(format!("Failed to read audio: {}", e)))?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        Ok(written)
    }
}

fn map_send_error(e: reqwest::Error) -> SpeechError {
    if e.is_timeout() {
        SpeechError::Connectivity(format!("Request timed out: {}", e))
    } else if e.is_connect() {
        SpeechError::Connectivity(format!("Cannot connect to TTS service: {}", e))
    } else {
        SpeechError::Connectivity(e.to_string())
    }
}

#[async_trait]
impl SpeechEnginePort for HttpSpeechClient {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, SpeechError> {
        let body = SpeechHttpRequest {
            model: &self.config.model,
            voice: request.voice.as_str(),
            input: &request.text,
            response_format: request.format.as_str(),
        };

        tracing::debug!(
            url = %self.speech_url,
            model = %body.model,
            voice = %body.voice,
            text_len = body.input.len(),
            "Sending speech request"
        );

        let response = self
            .client
            .post(self.speech_url.clone())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SpeechError::Remote {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let scratch = self.scratch.acquire(request.format)?;
        let written = Self::stream_to_file(response, &scratch).await?;
        let audio = scratch.read_all().await?;
        if let Err(e) = scratch.release() {
            tracing::warn!(error = %e, "Failed to delete scratch audio file");
        }

        tracing::debug!(bytes = written, "Speech response received");

        Ok(audio)
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.speech_url, self.config.model)
    }
}
