//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 健康检查 (含账单数量) |
//!
//! ```json
//! { "status": "healthy", "version": "0.1.0", "bill_count": 3 }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    /// 状态 (healthy | degraded)
    status: &'static str,
    /// 版本号
    version: &'static str,
    /// 已保存账单数量 (存储可读时)
    #[serde(skip_serializing_if = "Option::is_none")]
    bill_count: Option<usize>,
    /// 存储错误信息
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// 基础健康检查
///
/// 存储读取失败时返回 degraded，而不是错误状态码
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let (status, bill_count, message) = match state.billing().bill_count().await {
        Ok(count) => ("healthy", Some(count), None),
        Err(e) => {
            tracing::warn!(error = %e, "Bill store unreadable");
            ("degraded", None, Some(e.message))
        }
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        bill_count,
        message,
    })
}
