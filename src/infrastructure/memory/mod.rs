//! Memory Layer - In-Memory State Management
//!
//! 实现 SessionManager 和 EngineStatus，管理界面会话与引擎可用性的内存状态

mod engine_status;
mod session_manager;

pub use engine_status::InMemoryEngineStatus;
pub use session_manager::InMemorySessionManager;
