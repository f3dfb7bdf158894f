//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// TTS 引擎配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 会话配置
    #[serde(default)]
    pub session: SessionConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 静态文件服务配置
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

/// 静态文件服务配置
///
/// 启用后用外部目录替代内置页面（未匹配 API 的请求均由该目录响应）
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// 是否启用静态文件服务
    #[serde(default = "default_static_enabled")]
    pub enabled: bool,

    /// 静态文件目录
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,
}

fn default_static_enabled() -> bool {
    false
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("web")
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: default_static_enabled(),
            dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

/// TTS 引擎配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    /// OpenAI 兼容接口的基础 URL（包含 /v1）
    #[serde(default = "default_tts_url")]
    pub url: String,

    /// Bearer 凭证
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// 模型名
    #[serde(default = "default_model")]
    pub model: String,

    /// 未选择音色时使用的默认音色
    #[serde(default = "default_voice")]
    pub default_voice: String,

    /// 请求超时时间（秒），0 表示不设置
    #[serde(default)]
    pub timeout_secs: u64,

    /// 启动探测使用的文本
    #[serde(default = "default_probe_text")]
    pub probe_text: String,
}

fn default_tts_url() -> String {
    "http://localhost:8880/v1".to_string()
}

fn default_api_key() -> String {
    "not-needed".to_string()
}

fn default_model() -> String {
    "kokoro".to_string()
}

fn default_voice() -> String {
    crate::domain::voice::DEFAULT_VOICE.to_string()
}

fn default_probe_text() -> String {
    "API Connected Successfully".to_string()
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            url: default_tts_url(),
            api_key: default_api_key(),
            model: default_model(),
            default_voice: default_voice(),
            timeout_secs: 0,
            probe_text: default_probe_text(),
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// 合成音频临时文件目录，为空时使用系统临时目录
    #[serde(default)]
    pub scratch_dir: Option<PathBuf>,
}

/// 会话配置
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// 会话空闲过期时间（秒）
    #[serde(default = "default_idle_expire")]
    pub idle_expire_secs: u64,
}

fn default_idle_expire() -> u64 {
    86400 // 24 小时
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_expire_secs: default_idle_expire(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.tts.url, "http://localhost:8880/v1");
        assert_eq!(config.tts.api_key, "not-needed");
        assert_eq!(config.tts.model, "kokoro");
        assert_eq!(config.tts.default_voice, "af");
        assert_eq!(config.tts.probe_text, "API Connected Successfully");
        assert!(config.storage.scratch_dir.is_none());
    }
}
