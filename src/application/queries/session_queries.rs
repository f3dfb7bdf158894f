//! Session Queries

/// 获取会话当前选择
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: String,
}
