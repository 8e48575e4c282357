//! Fare Server - 出租车计费服务
//!
//! # 架构概述
//!
//! - **计价** (`pricing`): 基于 Decimal 的车费计算
//! - **存储** (`store`): 只追加的账单记录存储 (CSV 文件 / 内存)
//! - **服务** (`services`): 计算与保存账单
//! - **HTTP API** (`api`): `/calculate`, `/save`, `/health`
//!
//! # 模块结构
//!
//! ```text
//! fare-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── pricing/       # 车费公式
//! ├── store/         # 账单存储
//! ├── services/      # 计费服务
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 中间件组装
//! └── utils/         # 提取器、日志
//! ```

pub mod api;
pub mod core;
pub mod pricing;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState};
pub use services::BillingService;
pub use store::{BillStore, CsvBillStore, MemoryBillStore, StoreError};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境: 加载 .env, 读取配置, 初始化日志
pub fn setup_environment() -> anyhow::Result<Config> {
    // .env 文件可选
    if let Err(e) = dotenv::dotenv() {
        if !e.not_found() {
            anyhow::bail!("Failed to load .env: {}", e);
        }
    }

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ______                
   / ____/___ _________   
  / /_  / __ `/ ___/ _ \  
 / __/ / /_/ / /  /  __/  
/_/    \__,_/_/   \___/   
    "#
    );
}
