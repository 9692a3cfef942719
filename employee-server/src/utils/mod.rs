//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - [`AppResult`] - 结果类型别名
//! - 请求校验、截止时间、日志等工具

pub mod deadline;
pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use deadline::with_deadline;
pub use error::AppError;
pub use result::AppResult;
