//! # 模型目录模块
//!
//! 由 `[bot]` 映射派生出对外暴露的模型列表，形状兼容 "list models" 接口

mod models;

pub use models::{ModelCatalog, ModelDef};
