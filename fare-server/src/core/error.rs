use thiserror::Error;

use crate::store::StoreError;

/// 服务器启动/运行错误
///
/// 请求级错误统一使用 [`shared::AppError`]
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("无法监听 {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("账单存储初始化失败: {0}")]
    Store(#[from] StoreError),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
