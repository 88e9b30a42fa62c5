//! The unified error handling system for the gateway.

use std::fmt::Display;

// 1. Core Types
pub use config::ConfigError;
pub use types::GatewayError;

/// A unified `Result` type for the entire crate.
pub type Result<T> = std::result::Result<T, GatewayError>;

// 2. Module declarations
pub mod config;
pub mod types;

// 3. Context Trait for adding context to errors.
/// 为错误附加上下文说明
pub trait Context<T, E> {
    /// 附加固定的上下文信息
    #[track_caller]
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display;

    /// 惰性构造上下文信息
    #[track_caller]
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E> Context<T, E> for std::result::Result<T, E>
where
    E: Into<GatewayError>,
{
    #[track_caller]
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display,
    {
        self.with_context(|| context)
    }

    #[track_caller]
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(GatewayError::Context {
                context: context().to_string(),
                source: Box::new(error.into()),
            }),
        }
    }
}

/// Helper to attach context to an error without intermediate boilerplate.
#[track_caller]
pub fn context_error<T>(err: impl Into<GatewayError>, context: impl Display) -> Result<T> {
    Err::<T, GatewayError>(err.into()).context(context)
}
