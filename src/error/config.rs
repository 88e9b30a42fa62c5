use std::path::PathBuf;
use thiserror::Error;

/// 配置加载阶段的错误
///
/// 启动时只有两类失败：文件读不到、内容解析不了。两者都是致命的。
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置文件无法读取（不存在、无权限等）
    #[error("Configuration file unreadable: {path}")]
    Unreadable {
        /// 配置文件路径
        path: PathBuf,
        /// 底层 IO 错误
        #[source]
        source: std::io::Error,
    },

    /// 配置文件不是合法的 TOML，或字段类型不匹配
    #[error("Configuration parse failed: {path}: {source}")]
    Malformed {
        /// 配置文件路径
        path: PathBuf,
        /// TOML 解析错误
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// 出错的配置文件路径
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Unreadable { path, .. } | Self::Malformed { path, .. } => path,
        }
    }
}
