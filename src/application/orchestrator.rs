//! Speech Orchestrator - 单次合成请求编排
//!
//! 调用引擎、计时，并把所有错误折叠为面向用户的 [`SynthesisResult::Failure`]

use std::sync::Arc;
use std::time::Instant;

use crate::application::ports::SpeechEnginePort;
use crate::domain::speech::{GenerationState, SynthesisRequest, SynthesisResult};
use crate::domain::voice::CombinedVoice;

pub struct SpeechOrchestrator {
    engine: Arc<dyn SpeechEnginePort>,
}

impl SpeechOrchestrator {
    pub fn new(engine: Arc<dyn SpeechEnginePort>) -> Self {
        Self { engine }
    }

    /// 合成一段语音
    ///
    /// 不重试；失败时不返回部分结果
    pub async fn generate(&self, text: &str, voice: CombinedVoice) -> SynthesisResult {
        let request = SynthesisRequest::new(text, voice);
        self.execute(&request).await
    }

    pub async fn execute(&self, request: &SynthesisRequest) -> SynthesisResult {
        let state = advance(GenerationState::Idle, GenerationState::begin);

        tracing::debug!(
            engine = %self.engine.describe(),
            voice = %request.voice,
            text_len = request.text.len(),
            state = %state,
            "Synthesis requested"
        );

        let started = Instant::now();
        let outcome = self.engine.synthesize(request).await;
        let elapsed = started.elapsed();

        let result = match outcome {
            Ok(audio) => SynthesisResult::success(audio, elapsed),
            Err(e) => {
                tracing::warn!(
                    voice = %request.voice,
                    kind = e.kind(),
                    error = %e,
                    "Synthesis failed"
                );
                SynthesisResult::failure(e.to_string())
            }
        };

        let state = advance(state, |s| s.finish(&result));
        debug_assert!(state.is_terminal());

        match &result {
            SynthesisResult::Success { audio, elapsed } => tracing::info!(
                voice = %request.voice,
                audio_size = audio.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                state = %state,
                "Synthesis completed"
            ),
            SynthesisResult::Failure { .. } => tracing::debug!(
                voice = %request.voice,
                state = %state,
                "Synthesis finished without audio"
            ),
        }

        result
    }
}

/// 推进生成状态；非法迁移在 debug 构建中直接失败，release 中保留原状态并记录
fn advance<F>(state: GenerationState, transition: F) -> GenerationState
where
    F: FnOnce(GenerationState) -> Result<GenerationState, &'static str>,
{
    match transition(state) {
        Ok(next) => next,
        Err(reason) => {
            debug_assert!(false, "invalid generation transition from {}: {}", state, reason);
            tracing::error!(state = %state, reason, "Invalid generation state transition");
            state
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::SpeechError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingEngine {
        reply: Result<Vec<u8>, &'static str>,
        seen: Mutex<Vec<SynthesisRequest>>,
    }

    #[async_trait]
    impl SpeechEnginePort for RecordingEngine {
        async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, SpeechError> {
            self.seen.lock().unwrap().push(request.clone());
            self.reply
                .clone()
                .map_err(|e| SpeechError::Connectivity(e.to_string()))
        }
    }

    #[tokio::test]
    async fn test_generate_returns_engine_bytes() {
        let engine = Arc::new(RecordingEngine {
            reply: Ok(b"ID3-fake".to_vec()),
            seen: Mutex::new(Vec::new()),
        });
        let orchestrator = SpeechOrchestrator::new(engine.clone());

        let result = orchestrator
            .generate("Hello world!", CombinedVoice::raw("af"))
            .await;

        match result {
            SynthesisResult::Success { audio, elapsed } => {
                assert_eq!(audio, b"ID3-fake");
                assert!(elapsed.as_secs_f64() >= 0.0);
            }
            other => panic!("expected success, got {:?}", other),
        }

        let seen = engine.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].text, "Hello world!");
        assert_eq!(seen[0].voice.as_str(), "af");
        assert_eq!(seen[0].format.as_str(), "mp3");
    }

    #[tokio::test]
    async fn test_generate_folds_error_into_failure() {
        let engine = Arc::new(RecordingEngine {
            reply: Err("connection refused"),
            seen: Mutex::new(Vec::new()),
        });
        let orchestrator = SpeechOrchestrator::new(engine);

        let result = orchestrator.generate("", CombinedVoice::raw("af")).await;
        match result {
            SynthesisResult::Failure { message } => {
                assert!(message.contains("connection refused"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_advance_follows_valid_transitions() {
        let requesting = advance(GenerationState::Idle, GenerationState::begin);
        assert_eq!(requesting, GenerationState::Requesting);

        let failure = SynthesisResult::failure("boom");
        let done = advance(requesting, |s| s.finish(&failure));
        assert_eq!(done, GenerationState::Failed);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid generation transition")]
    fn test_advance_rejects_restart() {
        advance(GenerationState::Succeeded, GenerationState::begin);
    }
}
