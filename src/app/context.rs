//! 应用上下文（DI 容器）
//!
//! 启动时构建一次，持有只读的配置与模型目录，按 `Arc` 共享给各个组件。

use std::path::Path;
use std::sync::Arc;

use super::startup::Initializer;
use crate::catalog::ModelCatalog;
use crate::config::{DEFAULT_CONFIG_FILE, Settings};
use crate::error::Result;

/// 跨模块共享的只读状态
#[derive(Debug, Clone)]
pub struct AppContext {
    /// 补齐默认值后的配置
    pub settings: Arc<Settings>,
    /// 由 `settings.bot` 派生的模型目录
    pub models: Arc<ModelCatalog>,
}

impl AppContext {
    /// 直接由已就绪的配置构建，模型目录在这里派生
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let models = ModelCatalog::from_bots(&settings.bot);
        Self {
            settings: Arc::new(settings),
            models: Arc::new(models),
        }
    }

    /// 从指定配置文件完成整个启动流程
    pub fn initialize(path: impl AsRef<Path>) -> Result<Self> {
        let (settings, models) = Initializer::new().run(path)?;
        Ok(Self {
            settings: Arc::new(settings),
            models: Arc::new(models),
        })
    }

    /// 从工作目录下的 `config.toml` 完成启动流程
    pub fn initialize_default() -> Result<Self> {
        Self::initialize(DEFAULT_CONFIG_FILE)
    }

    /// 共享的配置
    #[must_use]
    pub fn settings(&self) -> Arc<Settings> {
        Arc::clone(&self.settings)
    }

    /// 共享的模型目录
    #[must_use]
    pub fn models(&self) -> Arc<ModelCatalog> {
        Arc::clone(&self.models)
    }
}
