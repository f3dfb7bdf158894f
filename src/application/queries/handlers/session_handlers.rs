//! Session Query Handlers

use std::sync::Arc;

use crate::application::commands::SessionView;
use crate::application::error::ApplicationError;
use crate::application::ports::SessionManagerPort;
use crate::application::queries::GetSessionQuery;
use crate::domain::voice::VoiceId;

/// GetSession Handler
pub struct GetSessionHandler {
    session_manager: Arc<dyn SessionManagerPort>,
    default_voice: VoiceId,
}

impl GetSessionHandler {
    pub fn new(session_manager: Arc<dyn SessionManagerPort>, default_voice: VoiceId) -> Self {
        Self {
            session_manager,
            default_voice,
        }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<SessionView, ApplicationError> {
        let session = self.session_manager.get(&query.session_id)?;
        self.session_manager.touch(&query.session_id);
        Ok(SessionView::from_session(&session, &self.default_voice))
    }
}
