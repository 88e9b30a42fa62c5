//! # 应用启动与共享状态

pub mod context;
pub mod startup;

pub use context::AppContext;
pub use startup::{Initializer, StartupStage};
