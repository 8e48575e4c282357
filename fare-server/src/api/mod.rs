//! API 路由模块
//!
//! # 结构
//!
//! - [`fare`] - 车费计算和账单保存
//! - [`health`] - 健康检查

pub mod fare;
pub mod health;
