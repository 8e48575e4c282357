//! 工具模块
//!
//! - [`ApiJson`] - 统一错误的 JSON 提取器
//! - 日志初始化

pub mod extract;
pub mod logger;

pub use extract::ApiJson;
pub use shared::{AppError, AppResult};
