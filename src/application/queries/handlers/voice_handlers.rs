//! Voice Query Handlers

use crate::application::queries::ListVoices;
use crate::domain::voice::{VoiceCatalog, VoiceId};

/// 音色目录响应
#[derive(Debug, Clone)]
pub struct VoiceListResponse {
    pub voices: Vec<VoiceId>,
    pub default_voice: VoiceId,
}

/// ListVoices Handler
pub struct ListVoicesHandler {
    catalog: VoiceCatalog,
    default_voice: VoiceId,
}

impl ListVoicesHandler {
    pub fn new(catalog: VoiceCatalog, default_voice: VoiceId) -> Self {
        Self {
            catalog,
            default_voice,
        }
    }

    pub async fn handle(&self, _query: ListVoices) -> VoiceListResponse {
        VoiceListResponse {
            voices: self.catalog.voices().to_vec(),
            default_voice: self.default_voice.clone(),
        }
    }
}
