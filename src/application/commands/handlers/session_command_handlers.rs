//! Session Command Handlers

use std::sync::Arc;

use crate::application::commands::session_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{EngineStatusPort, SessionManagerPort, VoiceSession};
use crate::domain::voice::VoiceId;

/// 引擎不可用时返回给用户的处理建议
pub fn remediation_message(error: &str) -> String {
    format!(
        "Cannot connect to Kokoro FastAPI server. Please ensure:\n\
         1. Docker is running\n\
         2. Kokoro FastAPI container is running:\n\
         \x20  docker pull remsky/kokoro-fastapi:latest\n\
         \x20  docker run -p 8880:8880 remsky/kokoro-fastapi:latest\n\
         Error: {}",
        error
    )
}

/// StartSession Handler - 引擎可用时创建新会话
pub struct StartSessionHandler {
    session_manager: Arc<dyn SessionManagerPort>,
    engine_status: Arc<dyn EngineStatusPort>,
    default_voice: VoiceId,
    idle_expire_secs: u64,
}

impl StartSessionHandler {
    pub fn new(
        session_manager: Arc<dyn SessionManagerPort>,
        engine_status: Arc<dyn EngineStatusPort>,
        default_voice: VoiceId,
        idle_expire_secs: u64,
    ) -> Self {
        Self {
            session_manager,
            engine_status,
            default_voice,
            idle_expire_secs,
        }
    }

    pub async fn handle(&self, _cmd: StartSessionCommand) -> Result<SessionView, ApplicationError> {
        let status = self.engine_status.current().ok_or_else(|| {
            ApplicationError::external(remediation_message("engine availability not checked yet"))
        })?;

        if !status.available {
            let error = status.error.as_deref().unwrap_or("unknown error");
            return Err(ApplicationError::external(remediation_message(error)));
        }

        let expired = self.session_manager.get_expired_sessions(self.idle_expire_secs);
        for id in &expired {
            let _ = self.session_manager.close(id);
        }
        if !expired.is_empty() {
            tracing::info!(count = expired.len(), "Expired sessions purged");
        }

        let session = VoiceSession::new();
        let view = SessionView::from_session(&session, &self.default_voice);
        self.session_manager.create(session)?;

        tracing::info!(session_id = %view.session_id, "Voice session started");

        Ok(view)
    }
}

/// ToggleVoice Handler
pub struct ToggleVoiceHandler {
    session_manager: Arc<dyn SessionManagerPort>,
    default_voice: VoiceId,
}

impl ToggleVoiceHandler {
    pub fn new(session_manager: Arc<dyn SessionManagerPort>, default_voice: VoiceId) -> Self {
        Self {
            session_manager,
            default_voice,
        }
    }

    pub async fn handle(
        &self,
        cmd: ToggleVoiceCommand,
    ) -> Result<ToggleVoiceResponse, ApplicationError> {
        let session = self
            .session_manager
            .toggle_voice(&cmd.session_id, cmd.voice.clone())?;
        let active = session.selected.contains(&cmd.voice);
        let view = SessionView::from_session(&session, &self.default_voice);

        tracing::debug!(
            session_id = %cmd.session_id,
            voice = %cmd.voice,
            active = active,
            combined = %view.combined_voice,
            "Voice toggled"
        );

        Ok(ToggleVoiceResponse {
            voice: cmd.voice,
            active,
            session: view,
        })
    }
}

/// CloseSession Handler
pub struct CloseSessionHandler {
    session_manager: Arc<dyn SessionManagerPort>,
}

impl CloseSessionHandler {
    pub fn new(session_manager: Arc<dyn SessionManagerPort>) -> Self {
        Self { session_manager }
    }

    pub async fn handle(
        &self,
        cmd: CloseSessionCommand,
    ) -> Result<CloseSessionResponse, ApplicationError> {
        self.session_manager.close(&cmd.session_id)?;
        Ok(CloseSessionResponse {
            session_id: cmd.session_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::EngineStatus;
    use crate::domain::voice::DEFAULT_VOICE;
    use crate::infrastructure::memory::{InMemoryEngineStatus, InMemorySessionManager};
    use std::time::Duration;

    fn default_voice() -> VoiceId {
        VoiceId::new(DEFAULT_VOICE).unwrap()
    }

    fn setup(status: Option<EngineStatus>) -> (Arc<InMemorySessionManager>, StartSessionHandler) {
        let sessions = Arc::new(InMemorySessionManager::new());
        let engine_status = Arc::new(InMemoryEngineStatus::new());
        if let Some(status) = status {
            engine_status.record(status);
        }
        let handler =
            StartSessionHandler::new(sessions.clone(), engine_status, default_voice(), 3600);
        (sessions, handler)
    }

    #[tokio::test]
    async fn test_start_session_when_engine_available() {
        let (sessions, handler) =
            setup(Some(EngineStatus::available(vec![1], Duration::from_millis(1))));

        let view = handler.handle(StartSessionCommand).await.unwrap();
        assert!(view.selected.is_empty());
        assert_eq!(view.combined_voice.as_str(), "af");
        assert!(sessions.get(&view.session_id).is_ok());
    }

    #[tokio::test]
    async fn test_start_session_blocked_when_engine_down() {
        let (sessions, handler) = setup(Some(EngineStatus::unavailable(
            "Connection refused",
            Duration::from_millis(1),
        )));

        let err = handler.handle(StartSessionCommand).await.unwrap_err();
        match err {
            ApplicationError::ExternalServiceError(msg) => {
                assert!(msg.contains("docker run -p 8880:8880"));
                assert!(msg.contains("Connection refused"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(sessions.list_all().is_empty());
    }

    #[tokio::test]
    async fn test_start_session_blocked_before_probe() {
        let (_, handler) = setup(None);
        assert!(handler.handle(StartSessionCommand).await.is_err());
    }

    #[tokio::test]
    async fn test_toggle_and_close() {
        let (sessions, start) =
            setup(Some(EngineStatus::available(vec![1], Duration::from_millis(1))));
        let toggle = ToggleVoiceHandler::new(sessions.clone(), default_voice());
        let close = CloseSessionHandler::new(sessions.clone());

        let view = start.handle(StartSessionCommand).await.unwrap();
        let id = view.session_id.clone();

        for voice in ["af_bella", "am_adam"] {
            toggle
                .handle(ToggleVoiceCommand {
                    session_id: id.clone(),
                    voice: VoiceId::new(voice).unwrap(),
                })
                .await
                .unwrap();
        }

        let off = toggle
            .handle(ToggleVoiceCommand {
                session_id: id.clone(),
                voice: VoiceId::new("af_bella").unwrap(),
            })
            .await
            .unwrap();
        assert!(!off.active);
        assert_eq!(off.session.combined_voice.as_str(), "am_adam");

        close
            .handle(CloseSessionCommand {
                session_id: id.clone(),
            })
            .await
            .unwrap();

        let err = toggle
            .handle(ToggleVoiceCommand {
                session_id: id,
                voice: VoiceId::new("af").unwrap(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }
}
