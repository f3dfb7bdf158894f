//! Speech Commands - 合成相关命令

use crate::domain::speech::SynthesisResult;
use crate::domain::voice::CombinedVoice;

/// 使用会话当前音色组合生成语音
#[derive(Debug, Clone)]
pub struct GenerateSpeechCommand {
    pub session_id: String,
    pub text: String,
}

/// 生成语音响应
#[derive(Debug, Clone)]
pub struct GenerateSpeechResponse {
    pub voice: CombinedVoice,
    pub result: SynthesisResult,
}

/// 重新探测引擎可用性（先使旧结果失效）
#[derive(Debug, Clone, Default)]
pub struct ProbeEngineCommand;
