//! Voice Context - 音色选择聚合

use serde::Serialize;

use super::{CombinedVoice, VoiceId};

/// 当前会话已选中的音色
///
/// 不变量:
/// - 同一音色最多出现一次
/// - 保留插入顺序，组合音色按此顺序拼接
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectedVoices {
    voices: Vec<VoiceId>,
}

impl SelectedVoices {
    pub fn new() -> Self {
        Self::default()
    }

    /// 切换音色选中状态
    ///
    /// 已选中则移除，否则追加到末尾。返回切换后是否处于选中状态。
    pub fn toggle(&mut self, voice: VoiceId) -> bool {
        if let Some(pos) = self.voices.iter().position(|v| *v == voice) {
            self.voices.remove(pos);
            false
        } else {
            self.voices.push(voice);
            true
        }
    }

    pub fn contains(&self, voice: &VoiceId) -> bool {
        self.voices.contains(voice)
    }

    /// 派生组合音色，空集合时回退到 `default`
    pub fn combined_voice(&self, default: &VoiceId) -> CombinedVoice {
        CombinedVoice::join(&self.voices, default)
    }

    pub fn voices(&self) -> &[VoiceId] {
        &self.voices
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}
