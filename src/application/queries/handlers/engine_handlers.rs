//! Engine Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{EngineStatus, EngineStatusPort};
use crate::application::queries::GetEngineStatus;

/// GetEngineStatus Handler
pub struct GetEngineStatusHandler {
    engine_status: Arc<dyn EngineStatusPort>,
}

impl GetEngineStatusHandler {
    pub fn new(engine_status: Arc<dyn EngineStatusPort>) -> Self {
        Self { engine_status }
    }

    pub async fn handle(&self, _query: GetEngineStatus) -> Result<EngineStatus, ApplicationError> {
        self.engine_status
            .current()
            .ok_or_else(|| ApplicationError::invalid_state("Engine has not been probed"))
    }
}
