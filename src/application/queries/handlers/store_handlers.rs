//! Store Query Handlers

use std::sync::Arc;

use crate::application::ports::{StoreStatus, StoreStatusPort};
use crate::application::queries::GetStoreStatus;

/// GetStoreStatus Handler
///
/// 探测失败不作为错误返回，调用方从 StoreStatus 中读取
pub struct GetStoreStatusHandler {
    store_status: Arc<dyn StoreStatusPort>,
}

impl GetStoreStatusHandler {
    pub fn new(store_status: Arc<dyn StoreStatusPort>) -> Self {
        Self { store_status }
    }

    pub async fn handle(&self, _query: GetStoreStatus) -> StoreStatus {
        let status = self.store_status.status().await;
        if let Some(error) = &status.error {
            tracing::warn!(location = %status.location, error = %error, "Store probe failed");
        }
        status
    }
}
