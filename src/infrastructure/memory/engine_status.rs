//! In-Memory Engine Status

use std::sync::RwLock;

use crate::application::ports::{EngineStatus, EngineStatusPort};

/// 内存保存的最近一次探测结果
#[derive(Default)]
pub struct InMemoryEngineStatus {
    status: RwLock<Option<EngineStatus>>,
}

impl InMemoryEngineStatus {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EngineStatusPort for InMemoryEngineStatus {
    fn current(&self) -> Option<EngineStatus> {
        self.status.read().ok().and_then(|s| s.clone())
    }

    fn record(&self, status: EngineStatus) {
        if let Ok(mut slot) = self.status.write() {
            *slot = Some(status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_record_replaces_previous() {
        let store = InMemoryEngineStatus::new();
        assert!(store.current().is_none());

        store.record(EngineStatus::unavailable("down", Duration::ZERO));
        assert!(!store.current().unwrap().available);

        store.record(EngineStatus::available(b"hi".to_vec(), Duration::ZERO));
        let current = store.current().unwrap();
        assert!(current.available);
        assert!(current.error.is_none());
    }
}
