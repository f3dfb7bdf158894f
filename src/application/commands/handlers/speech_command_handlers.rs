//! Speech Command Handlers

use std::sync::Arc;
use std::time::Instant;

use crate::application::commands::speech_commands::*;
use crate::application::error::ApplicationError;
use crate::application::orchestrator::SpeechOrchestrator;
use crate::application::ports::{EngineStatus, EngineStatusPort, SessionManagerPort};
use crate::domain::speech::SynthesisResult;
use crate::domain::voice::{CombinedVoice, VoiceId};

/// GenerateSpeech Handler - 使用会话当前组合音色合成
pub struct GenerateSpeechHandler {
    session_manager: Arc<dyn SessionManagerPort>,
    orchestrator: Arc<SpeechOrchestrator>,
    default_voice: VoiceId,
}

impl GenerateSpeechHandler {
    pub fn new(
        session_manager: Arc<dyn SessionManagerPort>,
        orchestrator: Arc<SpeechOrchestrator>,
        default_voice: VoiceId,
    ) -> Self {
        Self {
            session_manager,
            orchestrator,
            default_voice,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateSpeechCommand,
    ) -> Result<GenerateSpeechResponse, ApplicationError> {
        let session = self.session_manager.get(&cmd.session_id)?;
        self.session_manager.touch(&cmd.session_id);

        let voice = session.selected.combined_voice(&self.default_voice);

        tracing::info!(
            session_id = %cmd.session_id,
            voice = %voice,
            text_len = cmd.text.len(),
            "Generating speech"
        );

        let result = self.orchestrator.generate(&cmd.text, voice.clone()).await;

        Ok(GenerateSpeechResponse { voice, result })
    }
}

/// ProbeEngine Handler - 显式探测引擎可用性并缓存结果
pub struct ProbeEngineHandler {
    orchestrator: Arc<SpeechOrchestrator>,
    engine_status: Arc<dyn EngineStatusPort>,
    probe_text: String,
    probe_voice: VoiceId,
}

impl ProbeEngineHandler {
    pub fn new(
        orchestrator: Arc<SpeechOrchestrator>,
        engine_status: Arc<dyn EngineStatusPort>,
        probe_text: impl Into<String>,
        probe_voice: VoiceId,
    ) -> Self {
        Self {
            orchestrator,
            engine_status,
            probe_text: probe_text.into(),
            probe_voice,
        }
    }

    /// 探测期间继续提供旧结果，完成后一次性替换
    pub async fn handle(&self, _cmd: ProbeEngineCommand) -> EngineStatus {
        let voice = CombinedVoice::raw(self.probe_voice.as_str());
        let started = Instant::now();
        let status = match self.orchestrator.generate(&self.probe_text, voice).await {
            SynthesisResult::Success { audio, elapsed } => {
                tracing::info!(
                    audio_size = audio.len(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Kokoro API is available"
                );
                EngineStatus::available(audio, elapsed)
            }
            SynthesisResult::Failure { message } => {
                tracing::error!(error = %message, "Kokoro API is unavailable");
                EngineStatus::unavailable(message, started.elapsed())
            }
        };

        self.engine_status.record(status.clone());
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{SpeechEnginePort, SpeechError, VoiceSession};
    use crate::domain::speech::SynthesisRequest;
    use crate::infrastructure::memory::{InMemoryEngineStatus, InMemorySessionManager};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    /// 记录最后一次请求的引擎，可切换成功/失败
    struct SwitchEngine {
        healthy: AtomicBool,
        last: Mutex<Option<SynthesisRequest>>,
    }

    impl SwitchEngine {
        fn new(healthy: bool) -> Self {
            Self {
                healthy: AtomicBool::new(healthy),
                last: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl SpeechEnginePort for SwitchEngine {
        async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, SpeechError> {
            *self.last.lock().unwrap() = Some(request.clone());
            if self.healthy.load(Ordering::SeqCst) {
                Ok(format!("mp3:{}", request.voice).into_bytes())
            } else {
                Err(SpeechError::Connectivity("connection refused".to_string()))
            }
        }
    }

    fn voice(id: &str) -> VoiceId {
        VoiceId::new(id).unwrap()
    }

    #[tokio::test]
    async fn test_generate_uses_session_selection() {
        let engine = Arc::new(SwitchEngine::new(true));
        let sessions = Arc::new(InMemorySessionManager::new());
        let orchestrator = Arc::new(SpeechOrchestrator::new(engine.clone()));
        let handler = GenerateSpeechHandler::new(sessions.clone(), orchestrator, voice("af"));

        let id = sessions.create(VoiceSession::new()).unwrap();
        sessions.toggle_voice(&id, voice("bf_emma")).unwrap();
        sessions.toggle_voice(&id, voice("bm_lewis")).unwrap();

        let response = handler
            .handle(GenerateSpeechCommand {
                session_id: id,
                text: "Hello world!".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.voice.as_str(), "bf_emma+bm_lewis");
        match response.result {
            SynthesisResult::Success { audio, .. } => {
                assert_eq!(audio, b"mp3:bf_emma+bm_lewis");
            }
            other => panic!("expected success, got {:?}", other),
        }
        let last = engine.last.lock().unwrap().clone().unwrap();
        assert_eq!(last.text, "Hello world!");
    }

    #[tokio::test]
    async fn test_generate_unknown_session() {
        let engine = Arc::new(SwitchEngine::new(true));
        let handler = GenerateSpeechHandler::new(
            Arc::new(InMemorySessionManager::new()),
            Arc::new(SpeechOrchestrator::new(engine)),
            voice("af"),
        );

        let err = handler
            .handle(GenerateSpeechCommand {
                session_id: "missing".to_string(),
                text: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_probe_records_and_replaces_status() {
        let engine = Arc::new(SwitchEngine::new(false));
        let status_store = Arc::new(InMemoryEngineStatus::new());
        let handler = ProbeEngineHandler::new(
            Arc::new(SpeechOrchestrator::new(engine.clone())),
            status_store.clone(),
            "API Connected Successfully",
            voice("af"),
        );

        let down = handler.handle(ProbeEngineCommand).await;
        assert!(!down.available);
        assert!(down.error.unwrap().contains("connection refused"));
        assert!(!status_store.current().unwrap().available);

        engine.healthy.store(true, Ordering::SeqCst);
        let up = handler.handle(ProbeEngineCommand).await;
        assert!(up.available);
        assert_eq!(up.greeting.as_deref(), Some(&b"mp3:af"[..]));

        let last = engine.last.lock().unwrap().clone().unwrap();
        assert_eq!(last.text, "API Connected Successfully");
        assert_eq!(last.voice.as_str(), "af");
    }

    /// 在放行前一直挂起的引擎
    struct GatedEngine {
        entered: tokio::sync::Notify,
        gate: tokio::sync::Notify,
    }

    #[async_trait]
    impl SpeechEnginePort for GatedEngine {
        async fn synthesize(&self, _request: &SynthesisRequest) -> Result<Vec<u8>, SpeechError> {
            self.entered.notify_one();
            self.gate.notified().await;
            Ok(b"fresh".to_vec())
        }
    }

    #[tokio::test]
    async fn test_previous_status_served_while_reprobing() {
        let engine = Arc::new(GatedEngine {
            entered: tokio::sync::Notify::new(),
            gate: tokio::sync::Notify::new(),
        });
        let status_store = Arc::new(InMemoryEngineStatus::new());
        status_store.record(EngineStatus::available(
            b"stale".to_vec(),
            std::time::Duration::ZERO,
        ));
        let handler = Arc::new(ProbeEngineHandler::new(
            Arc::new(SpeechOrchestrator::new(engine.clone())),
            status_store.clone(),
            "API Connected Successfully",
            voice("af"),
        ));

        let probing = tokio::spawn({
            let handler = handler.clone();
            async move { handler.handle(ProbeEngineCommand).await }
        });

        engine.entered.notified().await;
        let during = status_store.current().unwrap();
        assert!(during.available);
        assert_eq!(during.greeting.as_deref(), Some(&b"stale"[..]));

        engine.gate.notify_one();
        let fresh = probing.await.unwrap();
        assert_eq!(fresh.greeting.as_deref(), Some(&b"fresh"[..]));
        assert_eq!(
            status_store.current().unwrap().greeting.as_deref(),
            Some(&b"fresh"[..])
        );
    }
}
