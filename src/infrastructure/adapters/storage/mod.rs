//! Storage Adapter - 临时文件

mod scratch_file;

pub use scratch_file::{ScratchAudioFile, ScratchSpace};
