//! Fare API 模块 (车费计算 / 账单保存)
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /calculate | POST | 计算车费，不写入存储 |
//! | /save | POST | 计算车费并追加一条账单记录 |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/calculate", post(handler::calculate))
        .route("/save", post(handler::save))
}
