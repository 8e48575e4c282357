//! In-memory bill store

use parking_lot::RwLock;
use shared::BillRecord;

use super::{BillStore, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryBillStore {
    records: RwLock<Vec<BillRecord>>,
}

impl MemoryBillStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl BillStore for MemoryBillStore {
    fn init(&self) -> StoreResult<bool> {
        Ok(false)
    }

    fn append(&self, record: &BillRecord) -> StoreResult<()> {
        self.records.write().push(record.clone());
        Ok(())
    }

    fn load_all(&self) -> StoreResult<Vec<BillRecord>> {
        Ok(self.records.read().clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
