//! # 配置管理模块
//!
//! 启动时一次性加载 `config.toml` 并补齐默认值

mod settings;

pub use settings::{
    DEFAULT_BOTS, DEFAULT_PORT, DEFAULT_RATE_LIMIT, Settings, default_bots, to_ws_url,
};

use std::path::Path;
use tracing::debug;

use crate::error::{ConfigError, Result};

/// 默认配置文件路径（相对于工作目录）
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// 加载配置文件并补齐默认值
///
/// 文件读不到或解析失败都直接返回错误，不做重试、不回退到其他文件。
pub fn load_config(path: impl AsRef<Path>) -> Result<Settings> {
    Ok(read_config(path)?.apply_defaults())
}

/// 读取并解析配置文件，不补默认值
pub fn read_config(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "配置文件读取完成");

    let settings = Settings::parse(&content).map_err(|source| ConfigError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MINIMAL_CONFIG, write_config};

    #[test]
    fn test_load_config_from_file() {
        let (_dir, path) = write_config(MINIMAL_CONFIG);
        let settings = load_config(&path).unwrap();

        assert_eq!(settings.port, 8080);
        assert_eq!(settings.rate_limit, DEFAULT_RATE_LIMIT);
        assert_eq!(settings.bot, default_bots());
    }

    #[test]
    fn test_read_config_skips_defaults() {
        let (_dir, path) = write_config(MINIMAL_CONFIG);
        let settings = read_config(&path).unwrap();

        assert_eq!(settings.port, 8080);
        assert_eq!(settings.rate_limit, 0);
        assert!(settings.bot.is_empty());
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = load_config(&path).unwrap_err();
        assert!(err.is_unreadable());
        assert_eq!(err.as_config_error().unwrap().path(), path.as_path());
    }

    #[test]
    fn test_load_config_directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(dir.path()).unwrap_err().is_unreadable());
    }

    #[test]
    fn test_load_config_malformed() {
        let (_dir, path) = write_config("port = = 1");
        let err = load_config(&path).unwrap_err();

        assert!(err.is_malformed());
        assert!(err.to_string().contains("config.toml"));
    }
}
