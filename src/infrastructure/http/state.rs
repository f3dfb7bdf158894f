//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态；
//! 客户端和引擎可用性都在这里显式构造，不使用进程级缓存

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CloseSessionHandler, GenerateSpeechHandler, ProbeEngineHandler, StartSessionHandler,
    ToggleVoiceHandler,
    // Query handlers
    GetEngineStatusHandler, GetSessionHandler, ListVoicesHandler,
    // Orchestration
    SpeechOrchestrator,
    // Ports
    EngineStatusPort, SessionManagerPort, SpeechEnginePort,
};
use crate::config::AppConfig;
use crate::domain::voice::{VoiceCatalog, VoiceError, VoiceId};

/// 与用例相关的设置
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub catalog: VoiceCatalog,
    pub default_voice: VoiceId,
    pub probe_text: String,
    pub idle_expire_secs: u64,
}

impl AppSettings {
    pub fn from_config(config: &AppConfig) -> Result<Self, VoiceError> {
        Ok(Self {
            catalog: VoiceCatalog::builtin(),
            default_voice: VoiceId::new(config.tts.default_voice.as_str())?,
            probe_text: config.tts.probe_text.clone(),
            idle_expire_secs: config.session.idle_expire_secs,
        })
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            catalog: VoiceCatalog::builtin(),
            default_voice: VoiceId::default(),
            probe_text: "API Connected Successfully".to_string(),
            idle_expire_secs: 86400,
        }
    }
}

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub session_manager: Arc<dyn SessionManagerPort>,
    pub engine_status: Arc<dyn EngineStatusPort>,
    pub speech_engine: Arc<dyn SpeechEnginePort>,

    // ========== Command Handlers ==========
    pub start_session_handler: StartSessionHandler,
    pub toggle_voice_handler: ToggleVoiceHandler,
    pub close_session_handler: CloseSessionHandler,
    pub generate_speech_handler: GenerateSpeechHandler,
    pub probe_engine_handler: ProbeEngineHandler,

    // ========== Query Handlers ==========
    pub get_session_handler: GetSessionHandler,
    pub list_voices_handler: ListVoicesHandler,
    pub get_engine_status_handler: GetEngineStatusHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        session_manager: Arc<dyn SessionManagerPort>,
        engine_status: Arc<dyn EngineStatusPort>,
        speech_engine: Arc<dyn SpeechEnginePort>,
        settings: AppSettings,
    ) -> Self {
        let orchestrator = Arc::new(SpeechOrchestrator::new(speech_engine.clone()));
        let default_voice = settings.default_voice;

        Self {
            // Ports
            session_manager: session_manager.clone(),
            engine_status: engine_status.clone(),
            speech_engine,

            // Command handlers
            start_session_handler: StartSessionHandler::new(
                session_manager.clone(),
                engine_status.clone(),
                default_voice.clone(),
                settings.idle_expire_secs,
            ),
            toggle_voice_handler: ToggleVoiceHandler::new(
                session_manager.clone(),
                default_voice.clone(),
            ),
            close_session_handler: CloseSessionHandler::new(session_manager.clone()),
            generate_speech_handler: GenerateSpeechHandler::new(
                session_manager.clone(),
                orchestrator.clone(),
                default_voice.clone(),
            ),
            probe_engine_handler: ProbeEngineHandler::new(
                orchestrator,
                engine_status.clone(),
                settings.probe_text,
                default_voice.clone(),
            ),

            // Query handlers
            get_session_handler: GetSessionHandler::new(session_manager, default_voice.clone()),
            list_voices_handler: ListVoicesHandler::new(settings.catalog, default_voice),
            get_engine_status_handler: GetEngineStatusHandler::new(engine_status),
        }
    }
}
