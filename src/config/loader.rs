//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;
use crate::domain::voice::VoiceId;
use crate::infrastructure::adapters::parse_base_url;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "KOKORO_STUDIO";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `KOKORO_STUDIO_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `KOKORO_STUDIO_SERVER__PORT=8080`
/// - `KOKORO_STUDIO_TTS__URL=http://api.example.com/v1`
/// - `KOKORO_STUDIO_TTS__API_KEY=secret`
/// - `KOKORO_STUDIO_STORAGE__SCRATCH_DIR=/var/tmp/kokoro`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8501)?
        .set_default("tts.url", "http://localhost:8880/v1")?
        .set_default("tts.api_key", "not-needed")?
        .set_default("tts.model", "kokoro")?
        .set_default("tts.default_voice", "af")?
        .set_default("tts.timeout_secs", 0)?
        .set_default("tts.probe_text", "API Connected Successfully")?
        .set_default("session.idle_expire_secs", 86400)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 注意: 环境变量名会被转换为小写
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 会话空闲过期上限 (30 天)
const MAX_IDLE_EXPIRE_SECS: u64 = 30 * 24 * 60 * 60;

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    parse_base_url(&config.tts.url)
        .map_err(|e| ConfigError::ValidationError(format!("Invalid TTS URL: {}", e)))?;

    if config.tts.model.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS model cannot be empty".to_string(),
        ));
    }

    VoiceId::new(config.tts.default_voice.as_str()).map_err(|e| {
        ConfigError::ValidationError(format!("Invalid default voice: {}", e))
    })?;

    if config.session.idle_expire_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Session idle expiry cannot be 0".to_string(),
        ));
    }

    if config.session.idle_expire_secs > MAX_IDLE_EXPIRE_SECS {
        return Err(ConfigError::ValidationError(format!(
            "Session idle expiry cannot exceed {}s",
            MAX_IDLE_EXPIRE_SECS
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("TTS URL: {}", config.tts.url);
    tracing::info!("TTS Model: {}", config.tts.model);
    tracing::info!("Default Voice: {}", config.tts.default_voice);
    if config.tts.timeout_secs > 0 {
        tracing::info!("TTS Timeout: {}s", config.tts.timeout_secs);
    } else {
        tracing::info!("TTS Timeout: none");
    }
    match &config.storage.scratch_dir {
        Some(dir) => tracing::info!("Scratch Directory: {:?}", dir),
        None => tracing::info!("Scratch Directory: system temp"),
    }
    if config.server.static_files.enabled {
        tracing::info!("Static Files: {:?}", config.server.static_files.dir);
    }
    tracing::info!("Session Expire: {}s", config.session.idle_expire_secs);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_tts_url() {
        let mut config = AppConfig::default();
        config.tts.url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_malformed_tts_url() {
        let mut config = AppConfig::default();
        config.tts.url = "http:localhost:8880/v1".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("Invalid TTS URL"));
    }

    #[test]
    fn test_validation_error_for_bad_default_voice() {
        let mut config = AppConfig::default();
        config.tts.default_voice = "af+am".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_bounds_idle_expiry() {
        let mut config = AppConfig::default();
        config.session.idle_expire_secs = 0;
        assert!(validate_config(&config).is_err());

        config.session.idle_expire_secs = MAX_IDLE_EXPIRE_SECS;
        assert!(validate_config(&config).is_ok());

        config.session.idle_expire_secs = MAX_IDLE_EXPIRE_SECS + 1;
        assert!(validate_config(&config).is_err());

        config.session.idle_expire_secs = u64::MAX;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("Session idle expiry"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[tts]\nurl = \"http://api.example.com/v1\"\napi_key = \"k\"\n\n[server]\nport = 9000"
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.tts.url, "http://api.example.com/v1");
        assert_eq!(config.tts.api_key, "k");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.tts.model, "kokoro");
    }

    #[test]
    fn test_load_from_file_rejects_malformed_url() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[tts]\nurl = \"http:localhost:8880/v1\"").unwrap();

        let result = load_config_from_path(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
