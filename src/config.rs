use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::ui::Route;

const MIN_INPUT_POLL_MS: u64 = 10;
const MAX_INPUT_POLL_MS: u64 = 1000;

/// 配置文件结构 (~/.config/schulte/config.toml)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub start_route: Route,
    pub input_poll_ms: u64,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_route: Route::Trainer,
            input_poll_ms: 250,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// 单次等待输入的上限
    pub fn input_poll(&self) -> Duration {
        Duration::from_millis(
            self.input_poll_ms
                .clamp(MIN_INPUT_POLL_MS, MAX_INPUT_POLL_MS),
        )
    }
}

/// 默认配置文件路径
pub fn default_config_path() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or(AppError::NoConfigDir)?
        .join("schulte")
        .join("config.toml"))
}

/// 从 TOML 文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| AppError::Config {
        path: path.to_path_buf(),
        source,
    })
}
