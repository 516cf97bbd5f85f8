//! 修改历史服务

use std::sync::Arc;

use crate::history::format_history_in;
use crate::registry::Language;
use crate::services::ServiceContext;
use crate::types::{FormattedHistoryGroup, HistoryEntry};

/// 修改历史服务
///
/// 拉取失败不向上传播：失败时按“无历史”处理，返回空分组。
pub struct HistoryService {
    ctx: Arc<ServiceContext>,
}

impl HistoryService {
    /// 创建历史服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 拉取原始历史记录，失败时返回空列表
    pub async fn load_entries(&self, account_id: u64) -> Vec<HistoryEntry> {
        match self.ctx.history_source().fetch_history(account_id).await {
            Ok(response) if response.success => response.data.unwrap_or_default(),
            Ok(response) => {
                log::warn!(
                    "History fetch for account {account_id} reported failure: {}",
                    response.message.as_deref().unwrap_or("no message")
                );
                Vec::new()
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Failed to load history for account {account_id}: {e}");
                } else {
                    log::error!("Failed to load history for account {account_id}: {e}");
                }
                Vec::new()
            }
        }
    }

    /// 获取格式化后的历史分组（简体中文标签）
    pub async fn formatted_history(&self, account_id: u64) -> Vec<FormattedHistoryGroup> {
        self.formatted_history_in(account_id, Language::default()).await
    }

    /// 获取格式化后的历史分组
    pub async fn formatted_history_in(
        &self,
        account_id: u64,
        language: Language,
    ) -> Vec<FormattedHistoryGroup> {
        let entries = self.load_entries(account_id).await;
        format_history_in(&entries, language)
    }
}
