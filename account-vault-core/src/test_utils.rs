//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::{HistorySource, ImportSink};
use crate::types::{AccountImportCandidate, ApiResponse, HistoryEntry, HistoryResponse, ImportResult};

// ===== MockHistorySource =====

pub struct MockHistorySource {
    response: RwLock<HistoryResponse>,
    /// 如果 Some，fetch 时返回此错误（用于测试降级路径）
    fetch_error: RwLock<Option<String>>,
    requested: RwLock<Vec<u64>>,
}

impl MockHistorySource {
    pub fn new() -> Self {
        Self {
            response: RwLock::new(ApiResponse::success(Vec::new())),
            fetch_error: RwLock::new(None),
            requested: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_response(&self, response: HistoryResponse) {
        *self.response.write().await = response;
    }

    pub async fn set_fetch_error(&self, err: Option<String>) {
        *self.fetch_error.write().await = err;
    }

    pub async fn requested_ids(&self) -> Vec<u64> {
        self.requested.read().await.clone()
    }
}

#[async_trait]
impl HistorySource for MockHistorySource {
    async fn fetch_history(&self, account_id: u64) -> CoreResult<HistoryResponse> {
        self.requested.write().await.push(account_id);
        if let Some(ref msg) = *self.fetch_error.read().await {
            return Err(CoreError::HistoryUnavailable(msg.clone()));
        }
        Ok(self.response.read().await.clone())
    }
}

// ===== MockImportSink =====

pub struct MockImportSink {
    submissions: RwLock<Vec<Vec<AccountImportCandidate>>>,
    /// 如果 Some，submit 时返回此错误
    submit_error: RwLock<Option<String>>,
}

impl MockImportSink {
    pub fn new() -> Self {
        Self {
            submissions: RwLock::new(Vec::new()),
            submit_error: RwLock::new(None),
        }
    }

    pub async fn set_submit_error(&self, err: Option<String>) {
        *self.submit_error.write().await = err;
    }

    pub async fn submissions(&self) -> Vec<Vec<AccountImportCandidate>> {
        self.submissions.read().await.clone()
    }
}

#[async_trait]
impl ImportSink for MockImportSink {
    async fn submit_import(&self, candidates: &[AccountImportCandidate]) -> CoreResult<ImportResult> {
        if let Some(ref msg) = *self.submit_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        self.submissions.write().await.push(candidates.to_vec());
        Ok(ImportResult {
            success_count: candidates.len(),
            failed_count: 0,
            failed_emails: Vec::new(),
        })
    }
}

// ===== 工厂方法 =====

/// 创建注入了 mock 协作者的服务上下文
pub fn create_test_context() -> (
    Arc<ServiceContext>,
    Arc<MockHistorySource>,
    Arc<MockImportSink>,
) {
    let history = Arc::new(MockHistorySource::new());
    let sink = Arc::new(MockImportSink::new());
    let ctx = Arc::new(ServiceContext::new(
        Arc::clone(&history) as Arc<dyn HistorySource>,
        Arc::clone(&sink) as Arc<dyn ImportSink>,
    ));
    (ctx, history, sink)
}

/// 创建一条历史记录，时间固定为 2024-05-01 12:00:00
pub fn history_entry(id: u32, field: &str, old: &str, new: &str) -> HistoryEntry {
    HistoryEntry {
        id: id.to_string(),
        field_name: field.to_string(),
        old_value: old.to_string(),
        new_value: new.to_string(),
        changed_at: "2024-05-01 12:00:00".to_string(),
    }
}
