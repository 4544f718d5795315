use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 程序级错误（终端、配置文件）
#[derive(Debug, Error)]
pub enum AppError {
    #[error("终端 I/O 错误: {0}")]
    Io(#[from] io::Error),

    #[error("配置文件 {path} 解析失败: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("无法获取用户配置目录")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, AppError>;
