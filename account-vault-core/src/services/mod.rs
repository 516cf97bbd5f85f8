//! 业务逻辑服务层

mod history_service;
mod import_service;

pub use history_service::HistoryService;
pub use import_service::ImportService;

use std::sync::Arc;

use crate::traits::{HistorySource, ImportSink};

/// 服务上下文 - 持有所有外部协作者
///
/// 平台层需要创建此上下文，并注入平台特定的实现。
pub struct ServiceContext {
    /// 修改历史来源
    history_source: Arc<dyn HistorySource>,
    /// 导入提交目标
    import_sink: Arc<dyn ImportSink>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(history_source: Arc<dyn HistorySource>, import_sink: Arc<dyn ImportSink>) -> Self {
        Self {
            history_source,
            import_sink,
        }
    }

    pub fn history_source(&self) -> &Arc<dyn HistorySource> {
        &self.history_source
    }

    pub fn import_sink(&self) -> &Arc<dyn ImportSink> {
        &self.import_sink
    }
}
