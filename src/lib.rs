//! Kokoro Studio - Kokoro TTS 语音合成前端
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Voice Context: 音色目录、会话内音色选择、组合音色
//! - Speech Context: 合成请求、合成结果、请求状态机
//!
//! 应用层 (application/):
//! - Ports: 端口定义（SpeechEngine, SessionManager, EngineStatus）
//! - Orchestrator: 单次合成编排（计时、错误折叠）
//! - Commands / Queries: CQRS 处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 内置页面 + JSON/音频 API
//! - Memory: SessionManager, EngineStatus 内存实现
//! - Adapters: OpenAI 兼容 TTS 客户端、临时文件

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
