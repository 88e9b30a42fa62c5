//! # 日志配置模块
//!
//! 基于 `tracing-subscriber` 的日志初始化，`RUST_LOG` 优先于默认过滤规则

use std::env;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// 默认日志级别
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// 构建默认过滤规则：全局使用给定级别，本 crate 输出 debug
#[must_use]
pub fn default_filter(log_level: Option<&str>) -> String {
    let level = log_level.unwrap_or(DEFAULT_LOG_LEVEL);
    format!("{level},poe_gateway=debug")
}

/// 初始化日志系统
///
/// 重复调用时保留第一次安装的 subscriber。
pub fn init_logging(log_level: Option<&str>) {
    let log_filter = env::var("RUST_LOG").unwrap_or_else(|_| default_filter(log_level));

    let result = tracing_subscriber::registry()
        .with(EnvFilter::try_new(&log_filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)))
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();

    if result.is_ok() {
        tracing::debug!(filter = %log_filter, "日志系统初始化完成");
    }
}
