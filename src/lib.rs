//! # Poe Gateway Library
//!
//! 网关启动配置加载与模型目录构建

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod testing;

// Re-export commonly used types
pub use app::AppContext;
pub use catalog::{ModelCatalog, ModelDef};
pub use config::Settings;
pub use error::{GatewayError, Result};
