//! Voice Context - Value Objects

use serde::{Deserialize, Serialize};

use super::VoiceError;

/// 组合音色分隔符
pub const VOICE_SEPARATOR: &str = "+";

/// 未选择任何音色时使用的默认音色
pub const DEFAULT_VOICE: &str = "af";

/// 内置音色目录（顺序即界面展示顺序）
const BUILTIN_VOICES: &[&str] = &[
    "af",
    "af_bella",
    "af_sarah",
    "am_adam",
    "am_michael",
    "bf_emma",
    "bf_isabella",
    "bm_george",
    "bm_lewis",
    "af_nicole",
    "af_sky",
];

/// 音色标识，例如 `af_bella`
///
/// 不变量:
/// - 非空，最长 64 字符
/// - 仅包含 ASCII 字母、数字、`_`、`-`（`+` 保留给组合音色）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VoiceId(String);

impl VoiceId {
    pub fn new(id: impl Into<String>) -> Result<Self, VoiceError> {
        let id = id.into();
        if id.is_empty() {
            return Err(VoiceError::EmptyId);
        }
        let len = id.chars().count();
        if len > 64 {
            return Err(VoiceError::IdTooLong(len));
        }
        if let Some(ch) = id
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
        {
            return Err(VoiceError::InvalidCharacter { id, ch });
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 默认音色 `af`
impl Default for VoiceId {
    fn default() -> Self {
        Self(DEFAULT_VOICE.to_string())
    }
}

impl TryFrom<String> for VoiceId {
    type Error = VoiceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VoiceId> for String {
    fn from(id: VoiceId) -> Self {
        id.0
    }
}

impl std::fmt::Display for VoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 组合音色字符串，例如 `af_bella+am_adam`
///
/// 由 [`SelectedVoices`](super::SelectedVoices) 每次读取时派生，不单独存储
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CombinedVoice(String);

impl CombinedVoice {
    /// 按顺序用 `+` 连接音色，空列表时回退到 `default`
    pub fn join<'a>(voices: impl IntoIterator<Item = &'a VoiceId>, default: &VoiceId) -> Self {
        let joined = voices
            .into_iter()
            .map(VoiceId::as_str)
            .collect::<Vec<_>>()
            .join(VOICE_SEPARATOR);

        if joined.is_empty() {
            Self(default.as_str().to_string())
        } else {
            Self(joined)
        }
    }

    /// 直接使用外部给定的音色字符串（不做校验，由远端服务判断）
    pub fn raw(voice: impl Into<String>) -> Self {
        Self(voice.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 组合中的音色数量
    pub fn parts(&self) -> usize {
        self.0.split(VOICE_SEPARATOR).count()
    }
}

impl std::fmt::Display for CombinedVoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 音色目录 - 启动时确定，之后不可变
#[derive(Debug, Clone)]
pub struct VoiceCatalog {
    voices: Vec<VoiceId>,
}

impl VoiceCatalog {
    /// 内置 Kokoro 音色目录
    pub fn builtin() -> Self {
        let voices = BUILTIN_VOICES
            .iter()
            .map(|v| VoiceId(v.to_string()))
            .collect();
        Self { voices }
    }

    pub fn voices(&self) -> &[VoiceId] {
        &self.voices
    }

    pub fn contains(&self, voice: &VoiceId) -> bool {
        self.voices.contains(voice)
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}

impl Default for VoiceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
