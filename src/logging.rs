//! 日志初始化
//!
//! 日志只写入文件，写到 stdout/stderr 会破坏 TUI 画面

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// 日志文件路径 (~/.local/share/schulte/schulte.log)
fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("schulte").join("schulte.log"))
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// 初始化 tracing，RUST_LOG 优先于配置中的过滤规则
pub fn init_tracing(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(path) = log_file_path() else {
        return;
    };

    // 打不开日志文件时宁可不记日志
    if let Ok(file) = open_log_file(&path) {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
        tracing::info!(path = %path.display(), "logging initialized");
    }
}
