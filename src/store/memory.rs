//! In-memory persistence (non-persistent).

use async_trait::async_trait;

use super::{Persistence, StoreResult};
use crate::household::HouseholdData;

#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence;

impl MemoryPersistence {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Persistence for MemoryPersistence {
    fn is_persistent(&self) -> bool {
        false
    }

    async fn load(&self) -> StoreResult<HouseholdData> {
        Ok(HouseholdData::default())
    }

    async fn save(&self, _data: &HouseholdData) -> StoreResult<()> {
        Ok(())
    }
}
