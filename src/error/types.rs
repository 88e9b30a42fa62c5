//! # 错误类型定义

use thiserror::Error;

use super::config::ConfigError;
use crate::app::StartupStage;

/// 应用主要错误类型
#[derive(Debug, Error)]
pub enum GatewayError {
    /// 配置相关错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    /// 初始化器已经执行过，不允许重复启动
    #[error("启动错误: 初始化流程已执行过（当前阶段: {stage}）")]
    AlreadyStarted {
        /// 重复调用时所处的阶段
        stage: StartupStage,
    },

    /// 附带上下文说明的错误
    #[error("{context}")]
    Context {
        /// 上下文说明
        context: String,
        /// 原始错误
        #[source]
        source: Box<GatewayError>,
    },
}

impl GatewayError {
    /// 剥掉所有上下文层，返回最内层的配置错误（如果有）
    #[must_use]
    pub fn as_config_error(&self) -> Option<&ConfigError> {
        match self {
            Self::Config(err) => Some(err),
            Self::Context { source, .. } => source.as_config_error(),
            Self::AlreadyStarted { .. } => None,
        }
    }

    /// 是否为“配置文件无法读取”
    #[must_use]
    pub fn is_unreadable(&self) -> bool {
        matches!(self.as_config_error(), Some(ConfigError::Unreadable { .. }))
    }

    /// 是否为“配置文件解析失败”
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self.as_config_error(), Some(ConfigError::Malformed { .. }))
    }
}
