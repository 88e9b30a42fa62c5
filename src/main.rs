//! # Poe Gateway 主程序
//!
//! 加载 `config.toml`，生成模型目录；配置无效时以非零状态退出

use anyhow::Context;
use poe_gateway::{AppContext, logging};
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logging::init_logging(None);

    let ctx = AppContext::initialize_default()
        .inspect_err(|e| error!(error = %e, "配置初始化失败，进程退出"))
        .context("配置初始化失败")?;

    info!(
        port = ctx.settings.port,
        gateway_ws = %ctx.settings.gateway_ws_url(),
        models = ?ctx.models.ids().collect::<Vec<_>>(),
        "服务配置就绪"
    );
    Ok(())
}
