//! 用户偏好 - 控制 peek 展示的本地设置
//!
//! 设置存放在 `~/.config/notification-peek/settings.json`。文件缺失、
//! 无法读取或内容损坏时一律回落到默认值，绝不向调用方报错：偏好
//! 读取失败不应阻断通知链路。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// peek 行为偏好
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeekSettings {
    /// 完全停用 peek 展示，默认关闭
    #[serde(default)]
    pub disable_peek: bool,
}

impl PeekSettings {
    /// 从默认路径读取设置
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    /// 从指定路径读取设置，任何失败都返回默认值
    pub fn load_from(path: &Path) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => {
                debug!(path = %path.display(), "Settings file absent, using defaults");
                return Self::default();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|err| {
            debug!(
                path = %path.display(),
                error = %err,
                "Settings file unreadable, using defaults"
            );
            Self::default()
        })
    }
}

/// 默认设置文件路径
pub fn settings_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("notification-peek")
        .join("settings.json")
}

/// 用户是否停用了 peek
pub fn is_peek_disabled() -> bool {
    PeekSettings::load().disable_peek
}
