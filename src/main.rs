//! Kokoro Studio - Kokoro TTS 语音合成前端

use std::sync::Arc;

use kokoro_studio::application::ProbeEngineCommand;
use kokoro_studio::config::{load_config, print_config, AppConfig};
use kokoro_studio::infrastructure::adapters::{
    HttpSpeechClient, HttpSpeechClientConfig, ScratchSpace,
};
use kokoro_studio::infrastructure::http::{AppSettings, AppState, HttpServer, ServerConfig};
use kokoro_studio::infrastructure::memory::{InMemoryEngineStatus, InMemorySessionManager};

fn init_logging(config: &AppConfig) {
    let log_filter = format!(
        "{},kokoro_studio={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_logging(&config);

    tracing::info!("Kokoro Studio - Text to Speech Generator");
    print_config(&config);

    // 临时文件目录
    let scratch = match &config.storage.scratch_dir {
        Some(dir) => ScratchSpace::new(dir)?,
        None => ScratchSpace::system(),
    };

    // 创建 HTTP 语音合成客户端
    let client_config = HttpSpeechClientConfig {
        base_url: config.tts.url.clone(),
        api_key: config.tts.api_key.clone(),
        model: config.tts.model.clone(),
        timeout_secs: config.tts.timeout_secs,
    };
    let speech_engine = Arc::new(HttpSpeechClient::new(client_config, scratch)?);

    let session_manager = Arc::new(InMemorySessionManager::new());
    let engine_status = Arc::new(InMemoryEngineStatus::new());
    let settings = AppSettings::from_config(&config)?;

    let state = Arc::new(AppState::new(
        session_manager,
        engine_status,
        speech_engine,
        settings,
    ));

    // 启动时探测一次 Kokoro API；失败时服务照常启动，但会话无法开始
    tracing::info!("Checking Kokoro API availability...");
    let status = state.probe_engine_handler.handle(ProbeEngineCommand).await;
    if !status.available {
        tracing::warn!(
            error = status.error.as_deref().unwrap_or_default(),
            "Kokoro API unavailable; sessions are blocked until POST /api/engine/probe succeeds"
        );
    }

    let mut server_config = ServerConfig::new(&config.server.host, config.server.port);
    if config.server.static_files.enabled {
        server_config = server_config.with_static_dir(&config.server.static_files.dir);
    }
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
