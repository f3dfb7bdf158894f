//! Voice Context - 音色限界上下文
//!
//! 职责:
//! - 内置音色目录
//! - 会话内音色选择（切换）
//! - 组合音色派生

mod errors;
mod selection;
mod value_objects;

pub use errors::VoiceError;
pub use selection::SelectedVoices;
pub use value_objects::{CombinedVoice, VoiceCatalog, VoiceId, DEFAULT_VOICE, VOICE_SEPARATOR};
