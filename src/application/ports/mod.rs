//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod engine_status;
mod session_manager;
mod speech_engine;

pub use engine_status::{EngineStatus, EngineStatusPort};
pub use session_manager::{SessionError, SessionManagerPort, VoiceSession};
pub use speech_engine::{SpeechEnginePort, SpeechError};
