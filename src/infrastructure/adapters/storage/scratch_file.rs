//! Scratch Audio Files - 合成音频的临时中转文件
//!
//! 每次合成获取一个临时文件，读回内存后立即释放；
//! 任何提前返回（错误、panic 展开）都会在 Drop 时删除文件

use std::io;
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};
use tokio::fs;

use crate::domain::speech::AudioFormat;

const SCRATCH_PREFIX: &str = "speech-";

/// 临时文件所在目录
#[derive(Debug, Clone)]
pub struct ScratchSpace {
    dir: PathBuf,
}

impl ScratchSpace {
    /// 使用指定目录（不存在则创建）
    pub fn new(dir: impl AsRef<Path>) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// 使用系统临时目录
    pub fn system() -> Self {
        Self {
            dir: std::env::temp_dir(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 获取一个新的临时音频文件
    pub fn acquire(&self, format: AudioFormat) -> io::Result<ScratchAudioFile> {
        let suffix = format!(".{}", format.extension());
        let file = Builder::new()
            .prefix(SCRATCH_PREFIX)
            .suffix(&suffix)
            .tempfile_in(&self.dir)?;

        tracing::trace!(path = %file.path().display(), "Scratch file acquired");

        Ok(ScratchAudioFile { file })
    }
}

/// 单次合成使用的临时音频文件
pub struct ScratchAudioFile {
    file: NamedTempFile,
}

impl ScratchAudioFile {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// 以截断写模式打开，用于流式写入响应体
    pub async fn writer(&self) -> io::Result<fs::File> {
        fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(self.path())
            .await
    }

    /// 完整读回文件内容
    pub async fn read_all(&self) -> io::Result<Vec<u8>> {
        fs::read(self.path()).await
    }

    /// 显式删除文件，返回删除错误
    pub fn release(self) -> io::Result<()> {
        let path = self.path().to_path_buf();
        self.file.close()?;
        tracing::trace!(path = %path.display(), "Scratch file released");
        Ok(())
    }
}
