//! 业务服务
//!
//! - [`BillingService`] - 计费与账单保存

pub mod billing;

pub use billing::BillingService;
