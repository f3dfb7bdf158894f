//! TTS Adapter - 语音合成客户端实现

mod fake_speech_engine;
mod http_speech_client;

pub use fake_speech_engine::{FakeSpeechEngine, FakeSpeechEngineConfig};
pub use http_speech_client::*;
