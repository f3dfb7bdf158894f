//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Voice Context: 音色目录与选择
//! - Speech Context: 合成请求与结果

pub mod speech;
pub mod voice;
