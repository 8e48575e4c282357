use std::sync::Arc;

use crate::core::{Config, Result, ServerError};
use crate::services::BillingService;
use crate::store::{BillStore, CsvBillStore};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求 clone 一份。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | billing | BillingService | 计费服务 (持有账单存储) |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 计费服务
    pub billing: BillingService,
}

impl ServerState {
    /// 使用已构造的存储创建状态
    ///
    /// 存储需已初始化 (见 [`BillStore::init`])
    pub fn new(config: Config, store: Arc<dyn BillStore>) -> Self {
        let billing =
            BillingService::new(store).with_reading_validation(config.require_valid_readings_on_save);
        Self { config, billing }
    }

    /// 打开 CSV 账单文件 (不存在则创建表头) 并构造状态
    pub async fn initialize(config: &Config) -> Result<Self> {
        let store = Arc::new(CsvBillStore::new(&config.bill_file));

        let init_store = store.clone();
        let created = tokio::task::spawn_blocking(move || init_store.init())
            .await
            .map_err(|e| ServerError::Internal(e.into()))??;

        if created {
            tracing::info!(path = %store.describe(), "Created bill store");
        } else {
            tracing::info!(path = %store.describe(), "Using existing bill store");
        }

        Ok(Self::new(config.clone(), store))
    }

    pub fn billing(&self) -> &BillingService {
        &self.billing
    }
}
