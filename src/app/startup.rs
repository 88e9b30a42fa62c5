//! # 启动初始化流程
//!
//! `Unloaded → Parsed → Defaulted → CatalogBuilt`，单向、只执行一次。

use std::fmt;
use std::path::Path;
use tracing::{debug, info};

use crate::catalog::ModelCatalog;
use crate::config::{self, DEFAULT_PORT, DEFAULT_RATE_LIMIT, Settings};
use crate::error::{Context, GatewayError, Result};

/// 启动阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StartupStage {
    /// 尚未读取配置
    Unloaded,
    /// 配置已解析，尚未补默认值
    Parsed,
    /// 默认值已补齐
    Defaulted,
    /// 模型目录已生成，可以对外服务
    CatalogBuilt,
}

impl fmt::Display for StartupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            Self::Unloaded => "unloaded",
            Self::Parsed => "parsed",
            Self::Defaulted => "defaulted",
            Self::CatalogBuilt => "catalog_built",
        };
        write!(f, "{stage}")
    }
}

/// 一次性的启动初始化器
#[derive(Debug)]
pub struct Initializer {
    stage: StartupStage,
}

impl Default for Initializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Initializer {
    /// 创建处于 `Unloaded` 阶段的初始化器
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stage: StartupStage::Unloaded,
        }
    }

    /// 当前阶段
    #[must_use]
    pub const fn stage(&self) -> StartupStage {
        self.stage
    }

    /// 执行完整的初始化流程
    ///
    /// 只能成功执行一次：阶段不是 `Unloaded` 时直接拒绝。任何一步失败都会返回错误，
    /// 阶段停留在 `Unloaded`，不会生成任何共享状态。
    pub fn run(&mut self, path: impl AsRef<Path>) -> Result<(Settings, ModelCatalog)> {
        if self.stage != StartupStage::Unloaded {
            return Err(GatewayError::AlreadyStarted { stage: self.stage });
        }

        let path = path.as_ref();
        info!(path = %path.display(), stage = %self.stage, "开始加载配置");

        let parsed = config::read_config(path)
            .with_context(|| format!("加载配置失败: {}", path.display()))?;
        self.advance(StartupStage::Parsed);

        let settings = Self::fill_defaults(parsed);
        self.advance(StartupStage::Defaulted);

        let catalog = ModelCatalog::from_bots(&settings.bot);
        self.advance(StartupStage::CatalogBuilt);

        info!(
            port = settings.port,
            gateway = %settings.gateway,
            tokens = settings.tokens.len(),
            access_tokens = settings.access_tokens.len(),
            rate_limit = settings.rate_limit,
            models = catalog.len(),
            "✅ 配置加载完成"
        );
        Ok((settings, catalog))
    }

    fn fill_defaults(parsed: Settings) -> Settings {
        if parsed.port == 0 {
            debug!("port 未设置，使用默认值 {DEFAULT_PORT}");
        }
        if parsed.rate_limit == 0 {
            debug!("rate-limit 未设置，使用默认值 {DEFAULT_RATE_LIMIT}");
        }
        if parsed.bot.is_empty() {
            debug!("[bot] 未配置，使用内置映射");
        }
        parsed.apply_defaults()
    }

    fn advance(&mut self, next: StartupStage) {
        debug_assert!(next > self.stage, "启动阶段只能前进");
        debug!(from = %self.stage, to = %next, "启动阶段切换");
        self.stage = next;
    }
}
