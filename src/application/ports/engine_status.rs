//! Engine Status Port - 引擎可用性探测结果
//!
//! 启动时显式探测一次，结果保存在这里；重新探测完成后整体替换

use chrono::{DateTime, Utc};
use std::time::Duration;

/// 一次可用性探测的结果
#[derive(Debug, Clone)]
pub struct EngineStatus {
    pub available: bool,
    pub checked_at: DateTime<Utc>,
    pub elapsed: Duration,
    /// 失败时的错误信息
    pub error: Option<String>,
    /// 成功时的探测音频
    pub greeting: Option<Vec<u8>>,
}

impl EngineStatus {
    pub fn available(greeting: Vec<u8>, elapsed: Duration) -> Self {
        Self {
            available: true,
            checked_at: Utc::now(),
            elapsed,
            error: None,
            greeting: Some(greeting),
        }
    }

    pub fn unavailable(error: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            available: false,
            checked_at: Utc::now(),
            elapsed,
            error: Some(error.into()),
            greeting: None,
        }
    }
}

/// Engine Status Port
pub trait EngineStatusPort: Send + Sync {
    /// 当前探测结果，尚未探测时为 None
    fn current(&self) -> Option<EngineStatus>;

    /// 记录新的探测结果，替换旧结果
    fn record(&self, status: EngineStatus);
}
