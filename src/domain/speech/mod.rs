//! Speech Context - 语音合成限界上下文

mod result;
mod value_objects;

pub use result::{GenerationState, SynthesisResult};
pub use value_objects::{AudioFormat, SynthesisRequest};
