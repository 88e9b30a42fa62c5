//! # 测试辅助函数

use std::path::PathBuf;
use std::sync::Once;
use tempfile::TempDir;
use tracing::Level;

static INIT: Once = Once::new();

/// 初始化测试环境
pub fn init_test_env() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// 把内容写入临时目录下的 `config.toml`
///
/// 返回的 `TempDir` 必须在测试期间保持存活。
#[must_use]
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let path = dir.path().join(crate::config::DEFAULT_CONFIG_FILE);
    std::fs::write(&path, content).expect("写入临时配置文件失败");
    (dir, path)
}
