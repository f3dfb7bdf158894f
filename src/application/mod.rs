//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SpeechEngine、SessionManager、EngineStatus）
//! - orchestrator: 单次合成请求编排
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod orchestrator;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    CloseSessionCommand,
    CloseSessionResponse,
    GenerateSpeechCommand,
    GenerateSpeechResponse,
    ProbeEngineCommand,
    SessionView,
    StartSessionCommand,
    ToggleVoiceCommand,
    ToggleVoiceResponse,
    // Handlers
    handlers::{
        remediation_message, CloseSessionHandler, GenerateSpeechHandler, ProbeEngineHandler,
        StartSessionHandler, ToggleVoiceHandler,
    },
};

pub use error::ApplicationError;
pub use orchestrator::SpeechOrchestrator;

pub use ports::{
    EngineStatus, EngineStatusPort, SessionError, SessionManagerPort, SpeechEnginePort,
    SpeechError, VoiceSession,
};

pub use queries::{
    GetEngineStatus,
    GetSessionQuery,
    ListVoices,
    // Handlers
    handlers::{GetEngineStatusHandler, GetSessionHandler, ListVoicesHandler, VoiceListResponse},
};
