//! 应用目录
//!
//! 配置与日志目录的跨平台位置（由 dirs 决定）：
//! - Linux: ~/.config/zside, ~/.local/share/zside/logs
//! - macOS: ~/Library/Application Support/zside
//! - Windows: %APPDATA%\zside, %LOCALAPPDATA%\zside\logs

use std::path::PathBuf;

pub const APP_NAME: &str = "zside";
const LOG_DIR: &str = "logs";

/// 配置目录
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}

/// 日志目录
pub fn get_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_NAME).join(LOG_DIR))
}

/// 确保日志目录存在
pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}
