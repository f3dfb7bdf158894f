//! Session Commands - 会话相关命令

use crate::application::ports::VoiceSession;
use crate::domain::voice::{CombinedVoice, VoiceId};

/// 开始新会话
#[derive(Debug, Clone, Default)]
pub struct StartSessionCommand;

/// 切换音色选中状态
#[derive(Debug, Clone)]
pub struct ToggleVoiceCommand {
    pub session_id: String,
    pub voice: VoiceId,
}

/// 关闭会话
#[derive(Debug, Clone)]
pub struct CloseSessionCommand {
    pub session_id: String,
}

/// 关闭会话响应
#[derive(Debug, Clone)]
pub struct CloseSessionResponse {
    pub session_id: String,
}

/// 会话视图 - 当前选择及派生的组合音色
#[derive(Debug, Clone)]
pub struct SessionView {
    pub session_id: String,
    pub selected: Vec<VoiceId>,
    pub combined_voice: CombinedVoice,
}

impl SessionView {
    pub fn from_session(session: &VoiceSession, default_voice: &VoiceId) -> Self {
        Self {
            session_id: session.id.clone(),
            selected: session.selected.voices().to_vec(),
            combined_voice: session.selected.combined_voice(default_voice),
        }
    }
}

/// 切换音色响应
#[derive(Debug, Clone)]
pub struct ToggleVoiceResponse {
    pub voice: VoiceId,
    /// 切换后该音色是否处于选中状态
    pub active: bool,
    pub session: SessionView,
}
