//! Change-history source abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::HistoryResponse;

/// Change-history source Trait
///
/// Platform implementation:
/// - In-memory: `MemoryAccountStore` (account-vault-app)
/// - HTTP backends wrap `GET /accounts/{id}/history`
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Fetch every history entry recorded for one account
    ///
    /// # Arguments
    /// * `account_id` - Account ID
    async fn fetch_history(&self, account_id: u64) -> CoreResult<HistoryResponse>;
}
