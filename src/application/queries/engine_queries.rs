//! Engine Queries

/// 获取最近一次探测结果
#[derive(Debug, Clone)]
pub struct GetEngineStatus;
