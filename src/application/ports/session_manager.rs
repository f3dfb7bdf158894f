//! Session Manager Port - 会话生命周期管理
//!
//! 定义会话管理的抽象接口，具体实现在 infrastructure/memory 层

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::voice::{SelectedVoices, VoiceId};

/// Session Manager 错误
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Session already exists: {0}")]
    AlreadyExists(String),
}

/// 会话状态（in-memory）
#[derive(Debug, Clone)]
pub struct VoiceSession {
    pub id: String,
    pub selected: SelectedVoices,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl VoiceSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            selected: SelectedVoices::new(),
            created_at: now,
            last_activity: now,
        }
    }
}

impl Default for VoiceSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Session Manager Port
///
/// 管理界面会话，所有状态存储在内存中
pub trait SessionManagerPort: Send + Sync {
    /// 创建新会话
    fn create(&self, session: VoiceSession) -> Result<String, SessionError>;

    /// 获取会话快照
    fn get(&self, id: &str) -> Result<VoiceSession, SessionError>;

    /// 切换音色，返回切换后的会话快照
    fn toggle_voice(&self, id: &str, voice: VoiceId) -> Result<VoiceSession, SessionError>;

    /// 关闭会话
    fn close(&self, id: &str) -> Result<(), SessionError>;

    /// 更新最后活动时间
    fn touch(&self, id: &str);

    /// 获取所有过期会话的 ID
    fn get_expired_sessions(&self, idle_timeout_secs: u64) -> Vec<String>;

    /// 获取所有会话 ID
    fn list_all(&self) -> Vec<String>;
}
